//! HTTP API Client
//!
//! Functions for communicating with the MoodSense REST API.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::state::{DashboardPayload, VibeEntry};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

const API_URL_KEY: &str = "moodsense_api_url";

/// Failure talking to the API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request build error: {0}")]
    Request(String),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Decode(String),
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}/api/{}", normalize_base(base), path.trim_start_matches('/'))
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

async fn status_error(response: Response) -> ClientError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error.message,
        Err(_) => response.status_text(),
    };
    ClientError::Status { status, message }
}

/// Fetch the roster and department energy for the HR view
pub async fn fetch_dashboard() -> Result<DashboardPayload, ClientError> {
    let url = endpoint(&get_api_base(), "hr-dashboard");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// Post one check-in. Any 2xx counts as delivered; the body is not read.
pub async fn submit_vibe(entry: &VibeEntry) -> Result<(), ClientError> {
    let url = endpoint(&get_api_base(), "submit-vibe");

    let response = Request::post(&url)
        .json(entry)
        .map_err(|e| ClientError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    Ok(())
}
