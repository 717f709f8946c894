//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Health check
//!
//! # Bundle configurator
//! GET    /bundle/services         - Service catalog
//! GET    /bundle                  - Current selection and quote
//! POST   /bundle/services         - Add service {id} (201, 404 unknown, 409 duplicate)
//! DELETE /bundle/services/{id}    - Remove service (404 if not in bundle)
//! DELETE /bundle                  - Clear selection
//! POST   /bundle/checkout         - Hand off to contact flow (400 if empty)
//!
//! # Coverage
//! GET    /coverage/zones          - Coverage map zones
//! GET    /coverage/map?x=&y=      - Map hit-test
//! GET    /coverage/{zip}          - ZIP lookup
//!
//! # Contact (POST rate limited)
//! GET    /contact/bundle          - Handed-off bundle summary
//! POST   /contact                 - Submit contact form
//!
//! # Support (POSTs rate limited)
//! GET    /support/chat/{kind}     - Open chat with a desk
//! POST   /support/chat/{kind}     - Send chat message
//! GET    /support/diagnostics     - Run diagnostics
//! POST   /support/bookings        - Book a technician
//! ```

pub mod bundle;
pub mod contact;
pub mod coverage;
pub mod support;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::middleware::{chat_rate_limiter, form_rate_limiter};
use crate::state::AppState;

/// Create the bundle configurator routes router.
pub fn bundle_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(bundle::show).delete(bundle::clear))
        .route("/services", get(bundle::catalog).post(bundle::add))
        .route("/services/{id}", delete(bundle::remove))
        .route("/checkout", post(bundle::checkout))
}

/// Create the coverage routes router.
pub fn coverage_routes() -> Router<AppState> {
    Router::new()
        .route("/zones", get(coverage::zones))
        .route("/map", get(coverage::map_hit))
        .route("/{zip}", get(coverage::zip_lookup))
}

/// Create the support routes router.
pub fn support_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/chat/{kind}",
            get(support::open_chat).merge(post(support::send_chat).layer(chat_rate_limiter())),
        )
        .route("/diagnostics", get(support::diagnostics))
        .route(
            "/bookings",
            post(support::book_technician).layer(form_rate_limiter()),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/bundle", bundle_routes())
        .nest("/coverage", coverage_routes())
        .route("/contact", post(contact::submit).layer(form_rate_limiter()))
        .route("/contact/bundle", get(contact::bundle))
        .nest("/support", support_routes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::StorefrontConfig;
    use crate::state::AppState;

    /// A tiny client that carries the session cookie between requests.
    struct TestClient {
        app: axum::Router,
        cookie: Option<String>,
    }

    impl TestClient {
        fn new() -> Self {
            Self {
                app: crate::app(AppState::new(StorefrontConfig::default())),
                cookie: None,
            }
        }

        async fn send(&mut self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let mut builder = Request::builder()
                .method(method)
                .uri(uri)
                .header("x-forwarded-for", "203.0.113.9");
            if let Some(cookie) = &self.cookie {
                builder = builder.header(header::COOKIE, cookie);
            }
            let request = match body {
                Some(body) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = self.app.clone().oneshot(request).await.unwrap();
            if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
                let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
                self.cookie = Some(pair.to_string());
            }

            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap_or(Value::Null)
            };
            (status, value)
        }
    }

    #[tokio::test]
    async fn test_health_and_headers() {
        let app = crate::app(AppState::new(StorefrontConfig::default()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_catalog_lists_services() {
        let mut client = TestClient::new();
        let (status, body) = client.send("GET", "/bundle/services", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);
        assert_eq!(body[0]["id"], "internet");
    }

    #[tokio::test]
    async fn test_add_duplicate_and_unknown() {
        let mut client = TestClient::new();

        let (status, body) = client
            .send("POST", "/bundle/services", Some(json!({ "id": "internet" })))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Fiber Internet added to your bundle!");
        assert_eq!(body["bundle"]["total"], "$49.99");

        let (status, body) = client
            .send("POST", "/bundle/services", Some(json!({ "id": "internet" })))
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Service already added to your bundle!");

        let (status, _) = client
            .send("POST", "/bundle/services", Some(json!({ "id": "modem" })))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = client.send("GET", "/bundle", None).await;
        assert_eq!(body["services"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_two_services_get_double_play() {
        let mut client = TestClient::new();
        for id in ["internet", "tv"] {
            client
                .send("POST", "/bundle/services", Some(json!({ "id": id })))
                .await;
        }

        let (_, body) = client.send("GET", "/bundle", None).await;
        assert_eq!(body["badge"], "Double Play");
        assert_eq!(body["subtotal"], "$89.98");
        assert_eq!(body["discount"], "$9.00");
        assert_eq!(body["total"], "$80.98");
        assert_eq!(body["quote"]["discount"], "8.998");
    }

    #[tokio::test]
    async fn test_remove_absent_is_not_found() {
        let mut client = TestClient::new();
        let (status, _) = client.send("DELETE", "/bundle/services/tv", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_checkout_empty_is_bad_request() {
        let mut client = TestClient::new();
        let (status, body) = client.send("POST", "/bundle/checkout", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_clear_resets_quote() {
        let mut client = TestClient::new();
        client
            .send("POST", "/bundle/services", Some(json!({ "id": "phone" })))
            .await;
        let (status, body) = client.send("DELETE", "/bundle", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], "$0.00");
        assert_eq!(body["can_checkout"], false);
    }

    #[tokio::test]
    async fn test_zip_lookup() {
        let mut client = TestClient::new();
        let (status, body) = client.send("GET", "/coverage/10002", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["available"], true);
        assert_eq!(body["speed"], "500 Mbps");
        assert_eq!(body["signal_strength"], 90);

        let (status, body) = client.send("GET", "/coverage/90210", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["available"], false);
        assert!(body.get("speed").is_none());

        let (status, body) = client.send("GET", "/coverage/12ab", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"][0]["field"], "zip");
    }

    #[tokio::test]
    async fn test_map_hit_and_miss() {
        let mut client = TestClient::new();
        let (_, body) = client.send("GET", "/coverage/map?x=650&y=180", None).await;
        assert_eq!(body["zone"]["zip"], "10004");
        assert_eq!(body["zone"]["signal_strength"], 85);
        assert_eq!(body["zone"]["coverage"]["available"], true);

        let (_, body) = client.send("GET", "/coverage/map?x=5&y=5", None).await;
        assert!(body["zone"].is_null());

        let (_, body) = client.send("GET", "/coverage/zones", None).await;
        assert_eq!(body.as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_contact_validation_and_success() {
        let mut client = TestClient::new();
        let (status, body) = client
            .send(
                "POST",
                "/contact",
                Some(json!({ "name": "A", "email": "nope", "message": "short" })),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"].as_array().unwrap().len(), 3);

        let (status, body) = client
            .send(
                "POST",
                "/contact",
                Some(json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Interested in fiber at my address."
                })),
            )
            .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_contact_bundle_without_checkout_is_null() {
        let mut client = TestClient::new();
        let (status, body) = client.send("GET", "/contact/bundle", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["bundle"].is_null());
    }

    #[tokio::test]
    async fn test_chat_flow() {
        let mut client = TestClient::new();
        let (_, body) = client.send("GET", "/support/chat/billing", None).await;
        assert_eq!(body["title"], "Chat with Billing Support");
        assert_eq!(body["messages"][0]["author"], "agent");

        let (status, _) = client
            .send("POST", "/support/chat/billing", Some(json!({ "message": "   " })))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = client
            .send("POST", "/support/chat/billing", Some(json!({ "message": "Bill too high" })))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["messages"][0]["text"], "Bill too high");
        assert_eq!(body["messages"][1]["author"], "agent");
    }

    #[tokio::test]
    async fn test_diagnostics() {
        let mut client = TestClient::new();
        let (_, body) = client.send("GET", "/support/diagnostics", None).await;
        assert_eq!(body["steps"].as_array().unwrap().len(), 4);
        assert_eq!(body["issue_detected"], true);
    }

    #[tokio::test]
    async fn test_booking_rejects_past_date() {
        let mut client = TestClient::new();
        let (status, body) = client
            .send(
                "POST",
                "/support/bookings",
                Some(json!({
                    "customer_name": "Lee Park",
                    "customer_phone": "(855) 569-7568",
                    "preferred_date": "2001-01-01",
                    "time_slot": "morning"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"][0]["field"], "preferred_date");
    }

    #[tokio::test]
    async fn test_malformed_bodies_get_json_errors() {
        let mut client = TestClient::new();

        let (status, body) = client
            .send("POST", "/bundle/services", Some(json!({ "service": "tv" })))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("missing field `id`"));

        let (status, body) = client
            .send("POST", "/support/chat/sales", Some(json!({ "text": "hi" })))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);

        let (status, body) = client
            .send(
                "POST",
                "/support/bookings",
                Some(json!({
                    "customer_name": "Lee Park",
                    "customer_phone": "(855) 569-7568",
                    "preferred_date": "2099-01-01",
                    "time_slot": "midnight"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("midnight"));
    }

    #[tokio::test]
    async fn test_missing_json_content_type_gets_json_error() {
        let app = crate::app(AppState::new(StorefrontConfig::default()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/bundle/services")
                    .header("x-forwarded-for", "203.0.113.9")
                    .body(Body::from(r#"{"id":"tv"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_contact_missing_fields_reach_validation() {
        let mut client = TestClient::new();
        let (status, body) = client
            .send("POST", "/contact", Some(json!({ "name": "Ada" })))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let fields: Vec<_> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, ["email", "message"]);
    }

    #[tokio::test]
    async fn test_bad_map_query_gets_json_error() {
        let mut client = TestClient::new();
        let (status, body) = client.send("GET", "/coverage/map?x=abc&y=1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().starts_with("Failed to deserialize"));
    }
}
