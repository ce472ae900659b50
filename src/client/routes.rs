use axum::{
    Router,
    routing::{delete, get},
};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new()
        .route(
            "/clients",
            get(handlers::get_clients).post(handlers::create_client),
        )
        .route(
            "/clients/{id}",
            delete(handlers::delete_client)
                .patch(handlers::update_client)
                .get(handlers::get_client_by_id),
        )
}
