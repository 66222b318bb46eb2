use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use newsdesk_core::{NewsClient, NewsSource, ReqwestTransport};

use crate::endpoints;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct SourcesData {
    sources: Vec<NewsSource>,
}

pub async fn run(timeout_ms: u64) -> Result<Value, CliError> {
    let client = NewsClient::new(Arc::new(ReqwestTransport::new())).with_timeout_ms(timeout_ms);

    let api_key = endpoints::api_key_from_env();
    let url = endpoints::sources_url(api_key.as_deref());
    let sources = client.fetch_sources(url.as_deref()).await?;

    Ok(serde_json::to_value(SourcesData { sources })?)
}
