//! Data-access layer for a news-reading client.
//!
//! One fetch is one HTTP GET plus one JSON decode: [`NewsClient`] issues
//! the request through an injected [`HttpTransport`], hands the body to
//! [`decode`](decode::decode), and returns owned domain values or a typed
//! [`FetchError`]. No caching, no retries, no state shared between calls.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Fetch operations (`fetch_sources`, `fetch_articles`) |
//! | [`decode`] | Body-to-shape decoding |
//! | [`display`] | Display-ready article projection |
//! | [`domain`] | Decoded value records |
//! | [`error`] | Failure taxonomy |
//! | [`transport`] | HTTP capability trait and reqwest implementation |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use newsdesk_core::{NewsClient, ReqwestTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NewsClient::new(Arc::new(ReqwestTransport::new()));
//!     let sources = client.fetch_sources(Some("https://newsapi.org/v2/sources?apiKey=...")).await?;
//!
//!     for source in &sources {
//!         println!("{}: {}", source.id, source.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every operation returns `Result` with a structured error; nothing is
//! recovered or logged-and-swallowed internally:
//!
//! ```rust
//! use newsdesk_core::{FetchError, FetchErrorKind};
//!
//! fn handle_error(error: &FetchError) {
//!     match error.kind() {
//!         FetchErrorKind::BadUrl => {
//!             // Caller supplied no URL; nothing was sent.
//!         }
//!         FetchErrorKind::InvalidData => {
//!             // Server unreachable, timed out, or answered non-2xx.
//!         }
//!         FetchErrorKind::Decoding => {
//!             // Server answered, but the payload was malformed.
//!         }
//!     }
//! }
//! ```

pub mod client;
pub mod decode;
pub mod display;
pub mod domain;
pub mod error;
pub mod transport;

pub use client::NewsClient;
pub use decode::{decode, DecodeError};
pub use display::ArticleDisplay;
pub use domain::{ArticlesResponse, NewsArticle, NewsSource, SourcesResponse};
pub use error::{FetchError, FetchErrorKind};
pub use transport::{
    GetRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError, DEFAULT_TIMEOUT_MS,
};
