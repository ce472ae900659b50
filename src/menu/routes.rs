use axum::{
    Router,
    routing::{delete, get},
};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new()
        .route(
            "/menu-items",
            get(handlers::get_menu_items).post(handlers::create_menu_item),
        )
        .route(
            "/menu-items/{id}",
            delete(handlers::delete_menu_item)
                .patch(handlers::update_menu_item)
                .get(handlers::get_menu_item_by_id),
        )
}
