use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use newsdesk_core::{ArticleDisplay, NewsClient, ReqwestTransport};

use crate::cli::HeadlinesArgs;
use crate::endpoints;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct HeadlinesData {
    source_id: String,
    articles: Vec<ArticleDisplay>,
}

pub async fn run(args: &HeadlinesArgs, timeout_ms: u64) -> Result<Value, CliError> {
    let client = NewsClient::new(Arc::new(ReqwestTransport::new())).with_timeout_ms(timeout_ms);

    let api_key = endpoints::api_key_from_env();
    let url = endpoints::top_headlines_url(&args.source_id, api_key.as_deref());
    let articles = client.fetch_articles(&args.source_id, url.as_deref()).await?;

    let articles = articles.iter().map(ArticleDisplay::from_article).collect();

    Ok(serde_json::to_value(HeadlinesData {
        source_id: args.source_id.clone(),
        articles,
    })?)
}
