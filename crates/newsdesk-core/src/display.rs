use reqwest::Url;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::domain::NewsArticle;

/// Display-ready projection of a [`NewsArticle`] for list rendering.
///
/// Absent optional fields collapse to empty strings, and an empty or
/// unparseable image link becomes `None` rather than an error. The
/// mapping is pure and infallible.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDisplay {
    /// Fresh identifier for list diffing; not an upstream value.
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author: String,
    #[serde(serialize_with = "serialize_opt_url")]
    pub image_url: Option<Url>,
}

impl ArticleDisplay {
    pub fn from_article(article: &NewsArticle) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: article.title.clone(),
            description: article.description.clone().unwrap_or_default(),
            author: article.author.clone().unwrap_or_default(),
            image_url: parse_image_url(article.url_to_image.as_deref()),
        }
    }
}

impl From<&NewsArticle> for ArticleDisplay {
    fn from(article: &NewsArticle) -> Self {
        Self::from_article(article)
    }
}

fn parse_image_url(raw: Option<&str>) -> Option<Url> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    Url::parse(raw).ok()
}

fn serialize_opt_url<S: Serializer>(value: &Option<Url>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(url) => serializer.serialize_some(url.as_str()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(
        description: Option<&str>,
        author: Option<&str>,
        url_to_image: Option<&str>,
    ) -> NewsArticle {
        NewsArticle {
            title: String::from("Headline A"),
            description: description.map(String::from),
            author: author.map(String::from),
            url_to_image: url_to_image.map(String::from),
            url: None,
            published_at: None,
        }
    }

    #[test]
    fn absent_description_and_author_render_as_empty_strings() {
        let display = ArticleDisplay::from_article(&article(None, None, None));

        assert_eq!(display.title, "Headline A");
        assert_eq!(display.description, "");
        assert_eq!(display.author, "");
        assert_eq!(display.image_url, None);
    }

    #[test]
    fn present_fields_pass_through() {
        let display = ArticleDisplay::from_article(&article(
            Some("A summary"),
            Some("A. Writer"),
            Some("https://cdn.example.test/img.png"),
        ));

        assert_eq!(display.description, "A summary");
        assert_eq!(display.author, "A. Writer");
        assert_eq!(
            display.image_url.as_ref().map(Url::as_str),
            Some("https://cdn.example.test/img.png")
        );
    }

    #[test]
    fn empty_or_invalid_image_links_yield_no_url() {
        assert_eq!(
            ArticleDisplay::from_article(&article(None, None, Some(""))).image_url,
            None
        );
        assert_eq!(
            ArticleDisplay::from_article(&article(None, None, Some("not a url"))).image_url,
            None
        );
    }

    #[test]
    fn each_wrap_gets_a_distinct_identifier() {
        let source = article(None, None, None);
        let first = ArticleDisplay::from_article(&source);
        let second = ArticleDisplay::from_article(&source);

        assert_ne!(first.id, second.id);
    }
}
