use crate::config::AppState;
use anyhow::Result;
use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

mod handlers;
mod oauth;

/// Start the API server
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the API router
fn create_router(state: AppState) -> Router {
    Router::new()
        // Tool execution
        .route(
            "/api/v1/mcp/process_message",
            post(handlers::process_message),
        )
        // One-time OAuth bootstrap
        .route("/auth", get(oauth::auth))
        .route("/oauth2callback", get(oauth::oauth2callback))
        .route("/api/health", get(health_check))
        // Middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "gcls-mcp",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use gcls_classroom::OauthConfig;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let config = ServerConfig {
            classroom: Default::default(),
        };
        let oauth = OauthConfig {
            client_id: "client-1".to_string(),
            client_secret: "secret-1".to_string(),
            redirect_uri: "http://localhost:5000/oauth2callback".to_string(),
            access_token: None,
            refresh_token: None,
        };
        create_router(AppState::new(&config, oauth).unwrap())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "gcls-mcp");
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let response = test_router()
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_process_message_not_selected() {
        let request = post_json(
            "/api/v1/mcp/process_message",
            serde_json::json!({
                "selected_servers": ["OTHER_MCP"],
                "client_details": {"input": "{\"name\": \"list_courses\"}"}
            }),
        );

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "GCLS_MCP not selected");
        assert_eq!(body["isError"], true);
    }

    #[tokio::test]
    async fn test_process_message_missing_input() {
        let request = post_json(
            "/api/v1/mcp/process_message",
            serde_json::json!({"selected_servers": ["GCLS_MCP"]}),
        );

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing tool input");
        assert_eq!(body["isError"], true);
    }

    #[tokio::test]
    async fn test_process_message_invalid_tool_json() {
        let request = post_json(
            "/api/v1/mcp/process_message",
            serde_json::json!({
                "selected_servers": ["GCLS_MCP"],
                "client_details": {"input": "{not json"}
            }),
        );

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid tool call JSON");
        assert_eq!(body["isError"], true);
    }

    #[tokio::test]
    async fn test_auth_redirects_to_consent_screen() {
        let response = test_router()
            .oneshot(Request::builder().uri("/auth").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(location.starts_with("https://accounts.google.com/o/oauth2/v2/auth"));
        assert!(location.contains("client_id=client-1"));
    }
}
