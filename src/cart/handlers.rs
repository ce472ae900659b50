use axum::{
    Json,
    body::Bytes,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

// Mounted with `routing::any`; the handler sorts out the method itself so a
// wrong-method call still gets the JSON error body.
pub async fn add_to_cart(method: Method, body: Bytes) -> Response {
    if method != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({ "error": "Only POST allowed" })),
        )
            .into_response();
    }

    match serde_json::from_slice::<Value>(&body) {
        // TODO: validate the payload against the catalog and materialize a
        // draft order once that contract is settled
        Ok(_data) => (StatusCode::OK, Json(json!({ "status": "success" }))).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(res: Response) -> Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn rejects_non_post_methods() {
        let res = add_to_cart(Method::GET, Bytes::new()).await;

        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(res).await, json!({ "error": "Only POST allowed" }));
    }

    #[tokio::test]
    async fn rejects_a_body_that_is_not_json() {
        let res = add_to_cart(Method::POST, Bytes::from_static(b"not json")).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        let message = body["error"].as_str().unwrap();
        assert!(!message.is_empty());
    }

    #[tokio::test]
    async fn acknowledges_a_json_body() {
        let res = add_to_cart(Method::POST, Bytes::from_static(b"{}")).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({ "status": "success" }));
    }

    #[tokio::test]
    async fn accepts_a_filled_cart_payload() {
        let payload = br#"{"items": {"3": {"quantity": 2}}, "phone": "+79001234567"}"#;
        let res = add_to_cart(Method::POST, Bytes::from_static(payload)).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({ "status": "success" }));
    }
}
