use axum::{
    Router,
    routing::{delete, get},
};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new()
        .route(
            "/orders",
            get(handlers::get_orders).post(handlers::create_order),
        )
        .route(
            "/orders/{id}",
            delete(handlers::delete_order)
                .patch(handlers::update_order)
                .get(handlers::get_order_by_id),
        )
}
