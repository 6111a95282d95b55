use chrono::NaiveDateTime;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::FormData;

use crate::api_client;
use crate::settings;

/// Login form input
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of the token endpoint. Carries no profile data.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Request body for registering a new user
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User record returned by the registration endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Exchange credentials for an access token.
///
/// The token endpoint is a password-grant style form endpoint: it takes
/// multipart fields `username` (the email) and `password`, not JSON.
pub async fn login(credentials: &Credentials) -> Result<TokenResponse, String> {
    let url = settings::get_settings().api_url("/auth/token");
    log::debug!("POST request to: {} (credential form)", url);

    let form = FormData::new().map_err(|_| "Failed to build login form".to_string())?;
    form.append_with_str("username", &credentials.email)
        .map_err(|_| "Failed to build login form".to_string())?;
    form.append_with_str("password", &credentials.password)
        .map_err(|_| "Failed to build login form".to_string())?;

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST /auth/token - {}", error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST /auth/token - {}", error_msg);
            error_msg
        })?;

    if !response.ok() {
        return Err(api_client::response_error(response, "POST", "/auth/token").await);
    }

    let token = response.json::<TokenResponse>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST /auth/token - {}", error_msg);
        error_msg
    })?;

    log::info!("POST /auth/token - Success ({})", token.token_type);
    Ok(token)
}

/// Register a new user. Does not authenticate; callers send the user to
/// the login flow afterwards.
pub async fn register(request: &RegisterRequest) -> Result<RegisteredUser, String> {
    log::debug!("Registering new user: {}", request.email);
    let result = api_client::post::<RegisteredUser, _>("/auth/register", request).await;
    match &result {
        Ok(user) => log::info!("Registered user {} (ID: {})", user.email, user.id),
        Err(e) => log::error!("Failed to register {}: {}", request.email, e),
    }
    result
}
