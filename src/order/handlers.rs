use super::models::{NewOrder, Order, OrderFilters, UpdateOrder};
use crate::utils::ApiError;
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::extract::{Json, Path, Query, State};
use axum_cafe::schema::{clients, orders};
use chrono::{Duration, NaiveTime};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub async fn get_orders(
    State(pool): State<Pool>,
    Query(filters): Query<OrderFilters>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let mut query = orders::table
        .left_join(clients::table)
        .select(Order::as_select())
        .into_boxed();

    if let Some(status) = filters.status {
        query = query.filter(orders::status.eq(status));
    }

    if let Some(phone) = filters.client_phone {
        query = query.filter(clients::phone.ilike(format!("%{}%", phone)));
    }

    if let Some(from) = filters.created_from {
        query = query.filter(orders::created_at.ge(from.and_time(NaiveTime::MIN)));
    }

    if let Some(to) = filters.created_to {
        let end = to.and_time(NaiveTime::MIN) + Duration::days(1);
        query = query.filter(orders::created_at.lt(end));
    }

    let res = query
        .order(orders::created_at.desc())
        .load(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn create_order(
    State(pool): State<Pool>,
    Json(payload): Json<NewOrder>,
) -> Result<Json<Order>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::insert_into(orders::table)
        .values(&payload)
        .returning(Order::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    tracing::debug!(order_id = res.id, status = res.status.label(), "created order");

    Ok(Json(res))
}

pub async fn get_order_by_id(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
) -> Result<Json<Order>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = orders::table
        .find(id)
        .select(Order::as_select())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

// Admin edit surface. Status moves are free-form here: the original system
// defines no transition rules, the storage layer is the only gate.
pub async fn update_order(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrder>,
) -> Result<Json<Order>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::update(orders::table.find(id))
        .set(&payload)
        .returning(Order::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn delete_order(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
) -> Result<Json<Order>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::delete(orders::table.find(id))
        .returning(Order::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}
