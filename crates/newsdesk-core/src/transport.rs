use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

/// Single GET request envelope handed to a transport.
///
/// The news API contract needs no headers, auth, or body; a request is a
/// fully-formed URL plus a timeout budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    pub url: String,
    pub timeout_ms: u64,
}

impl GetRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// Raw response returned by a transport: status plus body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn ok_json(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Failure occurring before a response body was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TransportError {}

/// Network capability injected into [`NewsClient`](crate::NewsClient).
///
/// Implementations perform exactly one GET per call and own no state
/// shared between calls, so concurrent fetches need no coordination.
pub trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        request: GetRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + Send + 'a>>;
}

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Arc<reqwest::Client>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Arc::new(
                reqwest::Client::builder()
                    .user_agent("newsdesk/0.1.0")
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new()),
            ),
        }
    }

    /// Wrap a caller-configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        request: GetRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + Send + 'a>> {
        Box::pin(async move {
            let response = self
                .client
                .get(&request.url)
                .timeout(Duration::from_millis(request.timeout_ms))
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        TransportError::new(format!("request timeout: {e}"))
                    } else if e.is_connect() {
                        TransportError::new(format!("connection failed: {e}"))
                    } else {
                        TransportError::new(format!("request failed: {e}"))
                    }
                })?;

            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError::new(format!("failed to read response body: {e}")))?;

            Ok(HttpResponse {
                status,
                body: body.to_vec(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_to_configured_timeout() {
        let request = GetRequest::new("https://example.test/sources");
        assert_eq!(request.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn timeout_builder_overrides_default() {
        let request = GetRequest::new("https://example.test/sources").with_timeout_ms(250);
        assert_eq!(request.timeout_ms, 250);
    }

    #[test]
    fn success_covers_the_2xx_range_only() {
        assert!(HttpResponse { status: 200, body: Vec::new() }.is_success());
        assert!(HttpResponse { status: 204, body: Vec::new() }.is_success());
        assert!(!HttpResponse { status: 301, body: Vec::new() }.is_success());
        assert!(!HttpResponse { status: 404, body: Vec::new() }.is_success());
        assert!(!HttpResponse { status: 500, body: Vec::new() }.is_success());
    }
}
