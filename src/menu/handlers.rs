use super::models::{MenuItem, MenuItemFilters, NewMenuItem, UpdateMenuItem, group_by_category};
use super::render::render_menu;
use crate::utils::ApiError;
use crate::utils::internal_error;
use crate::utils::types::Pool;
use axum::{
    extract::{Json, Path, Query, State},
    response::Html,
};
use axum_cafe::schema::menu_items;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub async fn menu_page(State(pool): State<Pool>) -> Result<Html<String>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let items = menu_items::table
        .order((menu_items::order.asc(), menu_items::id.asc()))
        .select(MenuItem::as_select())
        .load(&mut conn)
        .await
        .map_err(internal_error)?;

    let sections = group_by_category(items);

    Ok(Html(render_menu(&sections)))
}

pub async fn get_menu_items(
    State(pool): State<Pool>,
    Query(filters): Query<MenuItemFilters>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let mut query = menu_items::table
        .select(MenuItem::as_select())
        .into_boxed();

    if let Some(category) = filters.category {
        query = query.filter(menu_items::category.eq(category));
    }

    if let Some(search) = filters.search {
        query = query.filter(menu_items::name.ilike(format!("%{}%", search)));
    }

    let res = query
        .order((menu_items::order.asc(), menu_items::id.asc()))
        .load(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn create_menu_item(
    State(pool): State<Pool>,
    Json(payload): Json<NewMenuItem>,
) -> Result<Json<MenuItem>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::insert_into(menu_items::table)
        .values(&payload)
        .returning(MenuItem::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn get_menu_item_by_id(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
) -> Result<Json<MenuItem>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = menu_items::table
        .find(id)
        .select(MenuItem::as_select())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn update_menu_item(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMenuItem>,
) -> Result<Json<MenuItem>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::update(menu_items::table.find(id))
        .set(&payload)
        .returning(MenuItem::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}

pub async fn delete_menu_item(
    State(pool): State<Pool>,
    Path(id): Path<i32>,
) -> Result<Json<MenuItem>, ApiError> {
    let mut conn = pool.get().await.map_err(internal_error)?;

    let res = diesel::delete(menu_items::table.find(id))
        .returning(MenuItem::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(internal_error)?;

    Ok(Json(res))
}
