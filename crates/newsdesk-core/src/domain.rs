use serde::{Deserialize, Serialize};

/// A named provider of news content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSource {
    pub id: String,
    pub name: String,
}

/// A single news item belonging to a source.
///
/// `title` is the only field the upstream API guarantees; everything else
/// may be legitimately absent. `url` and `published_at` are passed through
/// as the API sends them, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// Wrapper shape of the sources listing; exists only during decoding.
///
/// An absent `sources` key decodes as an empty list, never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesResponse {
    #[serde(default)]
    pub sources: Vec<NewsSource>,
}

/// Wrapper shape of the headlines listing; exists only during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlesResponse {
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}
