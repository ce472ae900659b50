use axum::{extract::Request, middleware::Next, response::Response};

pub async fn log_req_res(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let res = next.run(req).await;

    tracing::info!(%method, %uri, status = %res.status(), "request");

    res
}
