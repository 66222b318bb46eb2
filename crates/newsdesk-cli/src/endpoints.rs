//! URL construction for the NewsAPI v2 endpoints.
//!
//! The core client never builds URLs; the fully-formed GET url, api key
//! included, is assembled here and handed down as an `Option`. A missing
//! key therefore surfaces through the client's absent-url path instead of
//! producing a request that can only fail upstream.

use urlencoding::encode;

const BASE_URL: &str = "https://newsapi.org/v2";

/// Environment variable holding the NewsAPI key.
pub const API_KEY_VAR: &str = "NEWSDESK_API_KEY";

pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

pub fn sources_url(api_key: Option<&str>) -> Option<String> {
    api_key.map(|key| format!("{BASE_URL}/sources?language=en&apiKey={key}"))
}

pub fn top_headlines_url(source_id: &str, api_key: Option<&str>) -> Option<String> {
    api_key.map(|key| {
        format!(
            "{BASE_URL}/top-headlines?sources={}&apiKey={key}",
            encode(source_id)
        )
    })
}
