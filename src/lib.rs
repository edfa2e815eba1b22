//! Fetch a single LeetCode problem by URL and render it as plain text.

mod error;
mod fetch;
mod html;
mod question;
mod render;
mod slug;

pub use error::FetchError;
pub use fetch::{
    Fetcher, FetcherConfig, FetcherConfigBuilder, DEFAULT_BASE_URL, DEFAULT_EMULATION,
    DEFAULT_TIMEOUT,
};
pub use html::html_to_text;
pub use question::{CodeSnippet, Difficulty, Question, TopicTag};
pub use render::{render_question, QuestionView, SNIPPET_LANG};
pub use slug::slug_from_url;

/// Parse the slug out of `url` and fetch the question in a fresh session.
///
/// The session is built first, so a client that cannot be set up fails
/// before the URL is even looked at.
pub async fn fetch_question(url: &str, config: FetcherConfig) -> Result<Question, FetchError> {
    let fetcher = Fetcher::new(config)?;
    let slug = slug_from_url(url).ok_or(FetchError::InvalidUrl)?;
    fetcher.fetch_question(slug).await
}
