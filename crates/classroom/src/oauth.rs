//! One-time OAuth bootstrap support.
//!
//! The gateway mints its long-lived credentials exactly once: the operator
//! opens the consent URL, Google redirects back with an authorization
//! code, and the code is exchanged for tokens that the operator copies
//! into the environment. Refresh and persistence are out of scope.

use crate::config::OauthConfig;
use crate::error::{ClassroomError, ClassroomResult};
use serde::Deserialize;
use url::Url;

/// Google's OAuth consent endpoint.
pub const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Google's OAuth token endpoint.
pub const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Classroom scopes requested during the bootstrap.
pub const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/classroom.courses",
    "https://www.googleapis.com/auth/classroom.announcements",
    "https://www.googleapis.com/auth/classroom.coursework.students",
    "https://www.googleapis.com/auth/classroom.rosters",
];

/// Tokens minted by the authorization-code exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Build the consent URL the operator is redirected to.
///
/// `access_type=offline` + `prompt=consent` so Google issues a refresh
/// token alongside the access token.
pub fn consent_url(config: &OauthConfig) -> ClassroomResult<Url> {
    let mut url = Url::parse(AUTH_ENDPOINT)?;
    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", &SCOPES.join(" "))
        .append_pair("access_type", "offline")
        .append_pair("prompt", "consent");
    Ok(url)
}

/// Exchange an authorization code for tokens.
pub async fn exchange_code(config: &OauthConfig, code: &str) -> ClassroomResult<TokenResponse> {
    exchange_code_at(TOKEN_ENDPOINT, config, code).await
}

/// Exchange against a specific token endpoint.
pub async fn exchange_code_at(
    token_endpoint: &str,
    config: &OauthConfig,
    code: &str,
) -> ClassroomResult<TokenResponse> {
    let params = [
        ("code", code),
        ("client_id", &config.client_id),
        ("client_secret", &config.client_secret),
        ("redirect_uri", &config.redirect_uri),
        ("grant_type", "authorization_code"),
    ];

    let response = reqwest::Client::new()
        .post(token_endpoint)
        .form(&params)
        .send()
        .await?;

    let status = response.status().as_u16();
    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClassroomError::from_response(status, &body));
    }

    Ok(response.json().await?)
}
