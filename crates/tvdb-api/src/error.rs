//! Error types and response classification for TheTVDB API.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TvdbError>;

/// Metadata of a failed API response.
///
/// Attached to [`TvdbError::Http`] and [`TvdbError::Api`] so callers can
/// tell an expired token (401) from a missing record (404) from a gateway
/// outage (5xx) without parsing the error message.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// Final request URL.
    pub url: Url,
    /// HTTP status code.
    pub status: StatusCode,
    /// Canonical reason phrase for the status, empty if the code has none.
    pub status_text: String,
}

impl ResponseMeta {
    /// Captures URL and status from a live response.
    pub(crate) fn capture(response: &reqwest::Response) -> Self {
        let status = response.status();
        Self {
            url: response.url().clone(),
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
        }
    }
}

/// Errors returned by the client.
#[derive(Debug, Error)]
pub enum TvdbError {
    /// The client was constructed without an API key.
    #[error("API key is required")]
    MissingApiKey,

    /// The service answered with an error status and a non-JSON body.
    ///
    /// Gateway pages and HTML error documents land here; the status line
    /// is the only signal the body carries.
    #[error("{}", .response.status_text)]
    Http {
        /// Metadata of the failing response.
        response: ResponseMeta,
    },

    /// The response body carried an `Error` field.
    ///
    /// The display message is the field's value verbatim, e.g.
    /// `"ID Not Found"`.
    #[error("{message}")]
    Api {
        /// The `Error` field's value.
        message: String,
        /// Metadata of the carrying response.
        response: ResponseMeta,
    },

    /// The underlying HTTP transport failed (DNS, connect, TLS, read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body did not match the expected JSON shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// URL whose body failed to decode.
        url: Url,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A request URL could not be built from the base URL and path.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// A header name or value was not valid HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

/// Rejects responses whose status is 400 or above unless the body is JSON.
///
/// A JSON body on an error status is left for [`check_api_error`], which
/// can extract the service's own message instead of the bare status line.
pub(crate) fn check_http_error(response: &reqwest::Response) -> Result<()> {
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if response.status().as_u16() >= 400 && !content_type.contains("application/json") {
        return Err(TvdbError::Http {
            response: ResponseMeta::capture(response),
        });
    }

    Ok(())
}

/// Rejects bodies that carry a non-empty top-level `Error` field.
///
/// The service reports failures in-band, on any status code; a 200 body
/// can still declare an error.
pub(crate) fn check_api_error(body: &Value, meta: &ResponseMeta) -> Result<()> {
    if let Some(message) = body.get("Error").and_then(Value::as_str)
        && !message.is_empty()
    {
        return Err(TvdbError::Api {
            message: message.to_owned(),
            response: meta.clone(),
        });
    }

    Ok(())
}

/// Classifies a response and returns its parsed JSON body.
///
/// Order matters: transport-shaped failures (non-JSON error pages) are
/// reported first, then in-band `Error` fields, and only then is the body
/// handed back for deserialization.
pub(crate) async fn classify(response: reqwest::Response) -> Result<Value> {
    check_http_error(&response)?;

    let meta = ResponseMeta::capture(&response);
    let text = response.text().await?;
    let body: Value = serde_json::from_str(&text).map_err(|source| TvdbError::Decode {
        url: meta.url.clone(),
        source,
    })?;

    check_api_error(&body, &meta)?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    fn meta_for(status: StatusCode) -> ResponseMeta {
        ResponseMeta {
            url: Url::parse("https://api.thetvdb.com/series/1").unwrap(),
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
        }
    }

    #[test]
    fn test_api_error_message_is_verbatim() {
        // Arrange
        let body = json!({ "Error": "ID Not Found" });
        let meta = meta_for(StatusCode::NOT_FOUND);

        // Act
        let result = check_api_error(&body, &meta);

        // Assert
        let error = result.unwrap_err();
        assert_eq!(error.to_string(), "ID Not Found");
        match error {
            TvdbError::Api { response, .. } => {
                assert_eq!(response.status, StatusCode::NOT_FOUND);
                assert_eq!(response.status_text, "Not Found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_body_without_error_field_passes() {
        // Arrange
        let body = json!({ "data": [{ "id": 1 }] });
        let meta = meta_for(StatusCode::OK);

        // Act & Assert
        assert!(check_api_error(&body, &meta).is_ok());
    }

    #[test]
    fn test_empty_error_field_passes() {
        // Arrange
        let body = json!({ "Error": "", "data": [] });
        let meta = meta_for(StatusCode::OK);

        // Act & Assert
        assert!(check_api_error(&body, &meta).is_ok());
    }

    #[test]
    fn test_http_error_displays_status_text() {
        // Arrange
        let error = TvdbError::Http {
            response: meta_for(StatusCode::SERVICE_UNAVAILABLE),
        };

        // Act & Assert
        assert_eq!(error.to_string(), "Service Unavailable");
    }

    #[test]
    fn test_missing_api_key_message() {
        // Act & Assert
        assert_eq!(TvdbError::MissingApiKey.to_string(), "API key is required");
    }
}
