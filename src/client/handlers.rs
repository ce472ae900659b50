use super::models::{Client, ClientFilters, NewClient, UpdateClient};
use crate::utils::ApiError;
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use axum_cafe::schema::clients;
use chrono::{Duration, NaiveTime};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub async fn get_clients(
    State(pool): State<Pool>,
    Query(filters): Query<ClientFilters>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let mut query = clients::table.select(Client::as_select()).into_boxed();

    if let Some(search) = filters.search {
        let pattern = format!("%{}%", search);
        query = query.filter(
            clients::phone
                .ilike(pattern.clone())
                .or(clients::name.ilike(pattern)),
        );
    }

    if let Some(from) = filters.created_from {
        query = query.filter(clients::created_at.ge(from.and_time(NaiveTime::MIN)));
    }

    if let Some(to) = filters.created_to {
        // upper bound is inclusive of the whole day
        let end = to.and_time(NaiveTime::MIN) + Duration::days(1);
        query = query.filter(clients::created_at.lt(end));
    }

    let res = query
        .order(clients::created_at.desc())
        .load(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn create_client(
    State(pool): State<Pool>,
    Json(payload): Json<NewClient>,
) -> Result<Json<Client>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    if payload.phone.trim().is_empty() {
        return Err(ApiError(
            StatusCode::BAD_REQUEST,
            "Phone cannot be empty!".to_owned(),
        ));
    }

    let res = diesel::insert_into(clients::table)
        .values(&payload)
        .returning(Client::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn get_client_by_id(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
) -> Result<Json<Client>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = clients::table
        .find(id)
        .select(Client::as_select())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn update_client(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClient>,
) -> Result<Json<Client>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::update(clients::table.find(id))
        .set(&payload)
        .returning(Client::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

// The client's orders go with it (ON DELETE CASCADE).
pub async fn delete_client(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
) -> Result<Json<Client>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::delete(clients::table.find(id))
        .returning(Client::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}
