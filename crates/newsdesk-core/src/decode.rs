use serde::de::DeserializeOwned;
use thiserror::Error;

/// A response body could not be interpreted as the expected shape.
///
/// Covers both malformed syntax and required fields that are missing or
/// of the wrong type; serde does not surface partially decoded values.
#[derive(Debug, Error)]
#[error("response body did not decode: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Decode a raw response body into `T`.
///
/// Pure transformation: no I/O, no partial results. Optional fields that
/// are absent or `null` in the payload decode to `None`; a missing
/// required field is an error.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes).map_err(DecodeError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArticlesResponse, NewsArticle, SourcesResponse};

    #[test]
    fn well_formed_sources_body_decodes() {
        let body = br#"{"sources":[{"id":"abc-news","name":"ABC News"}]}"#;

        let response: SourcesResponse = decode(body).expect("body should decode");
        assert_eq!(response.sources.len(), 1);
        assert_eq!(response.sources[0].id, "abc-news");
        assert_eq!(response.sources[0].name, "ABC News");
    }

    #[test]
    fn non_json_body_is_an_error() {
        let result: Result<SourcesResponse, _> = decode(b"not json");
        assert!(result.is_err());
    }

    #[test]
    fn missing_required_title_is_an_error() {
        let body = br#"{"author":"someone"}"#;

        let result: Result<NewsArticle, _> = decode(body);
        assert!(result.is_err());
    }

    #[test]
    fn absent_optional_fields_decode_to_none() {
        let body = br#"{"title":"Headline A","author":null}"#;

        let article: NewsArticle = decode(body).expect("body should decode");
        assert_eq!(article.title, "Headline A");
        assert_eq!(article.author, None);
        assert_eq!(article.description, None);
        assert_eq!(article.url_to_image, None);
    }

    #[test]
    fn unknown_upstream_fields_are_ignored() {
        let body = br#"{"articles":[{"title":"T","content":"...","sentiment":0.4}]}"#;

        let response: ArticlesResponse = decode(body).expect("body should decode");
        assert_eq!(response.articles.len(), 1);
    }
}
