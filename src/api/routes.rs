use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::{contact, handlers};
use crate::tts::TtsService;

pub struct AppState {
    pub tts: TtsService,
}

pub fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/synthesize", post(handlers::synthesize))
        .route("/voices", get(handlers::list_voices))
        .route("/analytics", get(handlers::analytics))
        .route("/orders/:id", get(handlers::get_order))
        .route("/orders/:id/download", get(handlers::download))
        .route("/contact", post(contact::submit))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config::default();
        let state = Arc::new(AppState {
            tts: TtsService::new(&config),
        });
        create_router(state, Path::new("./no-such-static-dir"))
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_voices() {
        let app = app();
        let response = send(&app, get_req("/api/voices")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        let voices = body["voices"].as_array().unwrap();
        assert!(!voices.is_empty());
        assert_eq!(voices[0]["id"], "lagos-female");
        assert!(voices[0].get("description").is_some());
        assert!(voices[0]["available"].is_boolean());
    }

    #[tokio::test]
    async fn test_synthesize_then_analytics() {
        let app = app();
        let response = send(
            &app,
            post_json(
                "/api/synthesize",
                json!({ "text": "Hello Lagos", "voice": "lagos-female" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["status"], "queued");
        assert!(body["orderId"].is_u64());
        assert!(body["estimatedDelivery"].is_string());
        assert!(body["message"].is_string());
        assert!(body["audioUrl"].as_str().unwrap().starts_with("data:"));
        let download_url = body["downloadUrl"].as_str().unwrap().to_string();

        let stats = read_json(send(&app, get_req("/api/analytics")).await).await;
        assert_eq!(stats["totalRequests"], 1);
        assert_eq!(stats["totalCharacters"], 11);
        assert_eq!(stats["averageLength"], 11.0);
        assert_eq!(stats["uniqueUsers"], 0);

        let response = send(&app, get_req(&download_url)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            &bytes[..],
            b"Nigerian TTS Audio: \"Hello Lagos\" in lagos-female style"
        );
    }

    #[tokio::test]
    async fn test_synthesize_empty_text() {
        let app = app();
        let response = send(&app, post_json("/api/synthesize", json!({ "text": "  " }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "EMPTY_INPUT");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_synthesize_missing_text() {
        let app = app();
        for body in [json!({ "voice": "lagos-female" }), json!({ "text": null })] {
            let response = send(&app, post_json("/api/synthesize", body)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(read_json(response).await["code"], "EMPTY_INPUT");
        }
    }

    #[tokio::test]
    async fn test_synthesize_non_numeric_speed() {
        let app = app();
        let response = send(
            &app,
            post_json("/api/synthesize", json!({ "text": "Hi", "speed": "fast" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["speed"], 1.0);
    }

    #[tokio::test]
    async fn test_synthesize_too_long() {
        let app = app();
        let response = send(
            &app,
            post_json("/api/synthesize", json!({ "text": "a".repeat(501) })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "TOO_LONG");
        assert!(body["error"].as_str().unwrap().contains("contact"));

        let stats = read_json(send(&app, get_req("/api/analytics")).await).await;
        assert_eq!(stats["totalRequests"], 0);
    }

    #[tokio::test]
    async fn test_unknown_voice_accepted() {
        let app = app();
        let response = send(
            &app,
            post_json(
                "/api/synthesize",
                json!({ "text": "Good evening", "voice": "unknown-voice", "speed": 1.5 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["voice"], "unknown-voice");
        assert_eq!(body["voiceName"], "Lagos Female");
        assert_eq!(body["speed"], 1.5);

        let response = send(&app, get_req(body["downloadUrl"].as_str().unwrap())).await;
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            &bytes[..],
            b"Nigerian TTS Audio: \"Good evening\" in unknown-voice style"
        );
    }

    #[tokio::test]
    async fn test_order_lookup() {
        let app = app();
        let created = read_json(
            send(&app, post_json("/api/synthesize", json!({ "text": "Abeg" }))).await,
        )
        .await;
        let id = created["orderId"].as_u64().unwrap();

        let response = send(&app, get_req(&format!("/api/orders/{}", id))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let order = read_json(response).await;
        assert_eq!(order["orderId"], id);
        assert_eq!(order["status"], "queued");
        assert_eq!(order["characters"], 4);

        let response = send(&app, get_req("/api/orders/1")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_contact() {
        let app = app();
        let response = send(
            &app,
            post_json(
                "/api/contact",
                json!({ "name": "Ada", "email": "ada@example.ng", "message": "Long script" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["success"], true);

        let response = send(
            &app,
            post_json("/api/contact", json!({ "name": "Ada", "email": "nope", "message": "x" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_endpoint() {
        let app = app();
        let response = send(&app, get_req("/api/does-not-exist")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let app = app();
        let body = read_json(send(&app, get_req("/api/health")).await).await;
        assert_eq!(body["status"], "ok");
    }
}
