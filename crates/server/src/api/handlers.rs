use crate::config::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gcls_mcp::{ErrorBody, ProcessMessageRequest};
use std::sync::Arc;

/// Execute a tool call.
///
/// Everything of substance happens in the dispatcher; this handler only
/// maps its outcome onto the transport.
pub async fn process_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProcessMessageRequest>,
) -> Response {
    match state.dispatcher.process(&request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            let status = StatusCode::from_u16(err.status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if status.is_server_error() {
                tracing::error!(error = %err, "tool dispatch failed");
            } else {
                tracing::debug!(error = %err, "tool call rejected");
            }

            (status, Json(ErrorBody::new(err.to_string()))).into_response()
        }
    }
}
