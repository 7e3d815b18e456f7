//! HTTP call wrapper for the authorization API
//!
//! Every call goes to a path relative to the client's base URL with JSON
//! content negotiation and CORS mode. Failures are classified into a single
//! user-presentable [`ApiError`]; raw transport detail is logged, never shown.

use gatehouse_common::ErrorBody;
use leptos::logging;
use reqwasm::http::{Request, Response};
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestMode;

/// Authorization server endpoint used when no explicit base URL is supplied.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/";

/// Shown whenever a failure carries no usable message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "Some error occurred!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Classified API failure carrying a user-presentable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn generic() -> Self {
        Self {
            message: GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// API client bound to a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Issue a single request and classify the outcome.
    ///
    /// A successful response is returned raw for the caller to parse. A
    /// non-success status becomes an [`ApiError`] with the message taken from
    /// the error body's `detail` field; a transport failure becomes the
    /// generic [`ApiError`]. No retries, no caching.
    pub async fn call<B: Serialize>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
        params: &[(&str, String)],
    ) -> Result<Response, ApiError> {
        let url = self.url(path, params);

        let request = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let mut request = request
            .header("Content-Type", "application/json")
            .mode(RequestMode::Cors);

        if let Some(body) = body {
            let body = serde_json::to_string(body).map_err(|err| {
                logging::error!("failed to serialize request body for {}: {}", url, err);
                ApiError::generic()
            })?;
            request = request.body(body);
        }

        let response = request.send().await.map_err(|err| {
            logging::warn!("transport failure for {}: {}", url, err);
            ApiError::generic()
        })?;

        if response.ok() {
            Ok(response)
        } else {
            Err(extract_api_error(response).await)
        }
    }
}

/// Extract the user-presentable message from a failed response.
async fn extract_api_error(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => classify_error_body(status, body),
        Err(_) => {
            logging::warn!("HTTP {} with unparseable error body", status);
            ApiError::generic()
        }
    }
}

fn classify_error_body(status: u16, body: ErrorBody) -> ApiError {
    match body.detail {
        Some(detail) if !detail.is_empty() => ApiError { message: detail },
        _ => {
            logging::warn!("HTTP {} without a detail message", status);
            ApiError::generic()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_without_params() {
        let client = ApiClient::new("http://127.0.0.1:8000/");
        assert_eq!(
            client.url("auth/login-code/", &[]),
            "http://127.0.0.1:8000/auth/login-code/"
        );
    }

    #[test]
    fn url_encodes_query_params() {
        let client = ApiClient::new("http://127.0.0.1:8000/");
        let params = [
            ("client_id", "5".to_string()),
            ("redirect_uri", "https://app.example/cb".to_string()),
        ];
        assert_eq!(
            client.url("auth/login-code/", &params),
            "http://127.0.0.1:8000/auth/login-code/\
             ?client_id=5&redirect_uri=https%3A%2F%2Fapp.example%2Fcb"
        );
    }

    #[test]
    fn error_body_detail_becomes_the_message() {
        let error = classify_error_body(
            401,
            ErrorBody {
                detail: Some("Invalid credentials".to_string()),
            },
        );
        assert_eq!(error.message, "Invalid credentials");
    }

    #[test]
    fn missing_or_empty_detail_falls_back_to_generic() {
        let error = classify_error_body(500, ErrorBody { detail: None });
        assert_eq!(error.message, GENERIC_ERROR_MESSAGE);

        let error = classify_error_body(
            500,
            ErrorBody {
                detail: Some(String::new()),
            },
        );
        assert_eq!(error.message, GENERIC_ERROR_MESSAGE);
    }
}
