//! One-time OAuth bootstrap routes.
//!
//! `/auth` sends the operator to Google's consent screen; the callback
//! exchanges the returned code and prints the minted tokens to the log
//! for the operator to copy into the environment. Nothing is persisted.

use crate::config::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use gcls_classroom::oauth;
use gcls_mcp::ErrorBody;
use serde::Deserialize;
use std::sync::Arc;

/// Redirect to the Google consent screen.
pub async fn auth(State(state): State<Arc<AppState>>) -> Response {
    match oauth::consent_url(&state.oauth) {
        Ok(url) => Redirect::temporary(url.as_str()).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to build consent URL");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(err.to_string())),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

/// OAuth callback: exchange the authorization code for tokens.
pub async fn oauth2callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let Some(code) = query.code else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Missing authorization code")),
        )
            .into_response();
    };

    match oauth::exchange_code(&state.oauth, &code).await {
        Ok(tokens) => {
            // The operator contract: tokens go to the log, never to disk
            tracing::info!("ACCESS_TOKEN = {}", tokens.access_token);
            if let Some(ref refresh_token) = tokens.refresh_token {
                tracing::info!("REFRESH_TOKEN = {}", refresh_token);
            }

            Html(
                "Authentication successful.<br/><br/>\
                 Copy the printed ACCESS_TOKEN and REFRESH_TOKEN<br/>\
                 into the GCLS_ACCESS_TOKEN and GCLS_REFRESH_TOKEN environment variables.",
            )
            .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "token exchange failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(err.to_string())),
            )
                .into_response()
        }
    }
}
