use std::sync::Arc;

use tracing::{debug, warn};

use crate::decode::decode;
use crate::domain::{ArticlesResponse, NewsArticle, NewsSource, SourcesResponse};
use crate::error::FetchError;
use crate::transport::{GetRequest, HttpTransport, DEFAULT_TIMEOUT_MS};

/// Client for the two newsdesk read operations.
///
/// Holds no per-call state: every fetch is one independent round trip and
/// concurrent calls may complete in any order. The transport is injected
/// at construction so tests can run against a scripted fake. Dropping a
/// fetch future before the transport resolves cancels the call without
/// ever reaching the decoder.
#[derive(Clone)]
pub struct NewsClient {
    transport: Arc<dyn HttpTransport>,
    timeout_ms: u64,
}

impl NewsClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Override the timeout budget applied to every request.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Fetch the list of available news sources.
    ///
    /// An absent `url` fails with [`FetchError::BadUrl`] before any I/O.
    /// An absent `sources` key in the body yields an empty list; a body
    /// that does not decode propagates [`FetchError::Decoding`], it is
    /// never substituted with an empty success.
    pub async fn fetch_sources(&self, url: Option<&str>) -> Result<Vec<NewsSource>, FetchError> {
        let body = self.get(url, None).await?;
        let response: SourcesResponse = decode(&body)?;
        Ok(response.sources)
    }

    /// Fetch headline articles for one source.
    ///
    /// `source_id` is carried as logging context only; the caller-built
    /// `url` already encodes it. Error behavior matches
    /// [`fetch_sources`](Self::fetch_sources).
    pub async fn fetch_articles(
        &self,
        source_id: &str,
        url: Option<&str>,
    ) -> Result<Vec<NewsArticle>, FetchError> {
        let body = self.get(url, Some(source_id)).await?;
        let response: ArticlesResponse = decode(&body)?;
        Ok(response.articles)
    }

    async fn get(&self, url: Option<&str>, source_id: Option<&str>) -> Result<Vec<u8>, FetchError> {
        let Some(url) = url else {
            warn!(source_id, "fetch rejected: no url supplied");
            return Err(FetchError::BadUrl);
        };

        debug!(url, source_id, timeout_ms = self.timeout_ms, "issuing GET");
        let request = GetRequest::new(url).with_timeout_ms(self.timeout_ms);

        let response = self.transport.get(request).await.map_err(|error| {
            warn!(url, source_id, error = %error, "transport failure");
            FetchError::invalid_data(error.message())
        })?;

        if !response.is_success() {
            warn!(url, source_id, status = response.status, "non-success status");
            return Err(FetchError::invalid_data(format!(
                "upstream returned status {}",
                response.status
            )));
        }

        Ok(response.body)
    }
}
