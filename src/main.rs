mod cart;
mod client;
mod menu;
mod order;
mod pool;
mod utils;

use axum::{Router, middleware, routing::get};
use listenfd::ListenFd;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tokio::task::spawn_blocking(axum_cafe::run_pending_migrations)
        .await
        .expect("migration task panicked")
        .expect("failed to run migrations");

    let pool = pool::get_pool().await.expect("failed to create db pool");

    let api = Router::new()
        .merge(client::routes::get_routes())
        .merge(menu::routes::get_routes())
        .merge(order::routes::get_routes());

    let app = Router::new()
        .route("/", get(menu::handlers::menu_page))
        .merge(cart::routes::get_routes())
        .nest("/api", api)
        .fallback(utils::handler_404)
        .layer(middleware::from_fn(utils::log_req_res))
        .with_state(pool);

    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0).unwrap() {
        // if we are given a tcp listener on listen fd 0, we use that one
        Some(listener) => {
            listener.set_nonblocking(true).unwrap();
            TcpListener::from_std(listener).unwrap()
        }
        // otherwise fall back to local listening
        None => TcpListener::bind("127.0.0.1:3000").await.unwrap(),
    };
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
