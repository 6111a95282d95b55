pub mod asset;
pub mod auth;
pub mod dashboard;
pub mod goal;
pub mod transaction;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::session::storage;
use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Attach the bearer token from persistent storage, when one exists.
/// Requests without a stored token go out without the header.
fn with_auth(request: RequestBuilder) -> RequestBuilder {
    match storage::token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Pull the `detail` message out of a FastAPI-style error body.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|e| e.detail)
}

/// Turn a non-OK response into a display string, preferring the
/// server-supplied detail message over the bare status code.
pub(crate) async fn response_error(response: Response, method: &str, endpoint: &str) -> String {
    let status = response.status();
    let detail = match response.text().await {
        Ok(body) => error_detail(&body),
        Err(_) => None,
    };

    match detail {
        Some(detail) => {
            log::error!("{} {} - API error: {}", method, endpoint, detail);
            detail
        }
        None => {
            let error_msg = format!("HTTP error: {}", status);
            log::error!("{} {} - {}", method, endpoint, error_msg);
            error_msg
        }
    }
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = with_auth(Request::get(&url)).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        return Err(response_error(response, "GET", endpoint).await);
    }

    let parsed = response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(parsed)
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = with_auth(Request::post(&url))
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        return Err(response_error(response, "POST", endpoint).await);
    }

    let parsed = response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(parsed)
}

/// Common PUT request handler
pub async fn put<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("PUT request to: {}", url);

    let response = with_auth(Request::put(&url))
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("PUT {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("PUT {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        return Err(response_error(response, "PUT", endpoint).await);
    }

    let parsed = response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("PUT {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("PUT {} - Success", endpoint);
    Ok(parsed)
}

/// Common DELETE request handler. The backend's delete endpoints return
/// nothing the client cares about, so the body is discarded.
pub async fn delete(endpoint: &str) -> Result<(), String> {
    let url = api_url(endpoint);
    log::debug!("DELETE request to: {}", url);

    let response = with_auth(Request::delete(&url)).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("DELETE {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        return Err(response_error(response, "DELETE", endpoint).await);
    }

    log::info!("DELETE {} - Success", endpoint);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_reads_fastapi_body() {
        assert_eq!(
            error_detail(r#"{"detail": "Incorrect email or password"}"#),
            Some("Incorrect email or password".to_string())
        );
    }

    #[test]
    fn error_detail_ignores_other_shapes() {
        assert_eq!(error_detail(r#"{"message": "nope"}"#), None);
        assert_eq!(error_detail("<html>502</html>"), None);
        assert_eq!(error_detail(""), None);
    }
}
