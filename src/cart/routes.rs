use axum::{Router, routing::any};

use super::handlers;
use crate::utils::types::Pool;

pub fn get_routes() -> Router<Pool> {
    Router::new().route("/cart", any(handlers::add_to_cart))
}
