use crate::{question::Question, FetchError};
use derive_builder::Builder;
use rquest::{header, Client, Impersonate, Url};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://leetcode.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_EMULATION: Impersonate = Impersonate::Chrome131;

const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "x-csrftoken";
const OPERATION_NAME: &str = "questionData";
const QUESTION_QUERY: &str = "query questionData($titleSlug: String!) { \
    question(titleSlug: $titleSlug) { \
    questionId questionFrontendId title titleSlug content difficulty \
    isPaidOnly topicTags { name slug } \
    codeSnippets { lang langSlug code } \
    exampleTestcases sampleTestCase \
    } }";

#[derive(Debug, Clone, Builder)]
#[builder(default)]
pub struct FetcherConfig {
    #[builder(setter(into))]
    base_url: String,
    timeout: Duration,
    /// Browser whose TLS and HTTP/2 handshake the client reproduces.
    emulation: Impersonate,
}

/// One browser-emulating HTTP session against the LeetCode API.
///
/// The session is good for a single question: bootstrap the cookies, then
/// query. Nothing is kept between runs.
#[derive(Debug)]
pub struct Fetcher {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<QuestionData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct QuestionData {
    question: Option<Question>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    #[serde(default)]
    message: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            emulation: DEFAULT_EMULATION,
        }
    }
}

impl Fetcher {
    /// Build the HTTP session up front so a broken TLS or cookie setup fails
    /// before any request goes out.
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::Config(format!("base url {}: {e}", config.base_url)))?;

        let client = Client::builder()
            .impersonate(config.emulation)
            .cookie_store(true)
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::MissingCapability(format!("http client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub async fn fetch_question(&self, slug: &str) -> Result<Question, FetchError> {
        let csrf = self.bootstrap().await?;
        self.query(slug, &csrf).await
    }

    /// Load the landing page to collect session cookies, returning the csrf
    /// token or an empty string when the server did not set one.
    async fn bootstrap(&self) -> Result<String, FetchError> {
        let res = self
            .client
            .get(self.base_url.clone())
            .send()
            .await?
            .error_for_status()?;
        debug!(url = %self.base_url, status = %res.status(), "session bootstrapped");

        let token = res
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|cookie| find_cookie(cookie, CSRF_COOKIE))
            .map(ToOwned::to_owned);

        Ok(token.unwrap_or_else(|| {
            warn!("no {CSRF_COOKIE} cookie in bootstrap response, sending empty token");
            String::new()
        }))
    }

    async fn query(&self, slug: &str, csrf: &str) -> Result<Question, FetchError> {
        let url = self
            .base_url
            .join("graphql/")
            .map_err(|e| FetchError::Config(format!("graphql url: {e}")))?;
        let payload = json!({
            "operationName": OPERATION_NAME,
            "variables": { "titleSlug": slug },
            "query": QUESTION_QUERY,
        });

        let res = self
            .client
            .post(url.clone())
            .header(header::REFERER, self.base_url.as_str())
            .header(header::ORIGIN, self.base_url.origin().ascii_serialization())
            .header(CSRF_HEADER, csrf)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        debug!(%url, status = %res.status(), slug, "question queried");

        let body = res.bytes().await?;
        decode_question(&body)
    }
}

/// Look up a cookie value in a `Set-Cookie` (`a=1; Path=/`) or `Cookie`
/// (`a=1; b=2`) header string.
fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Pull `data.question` out of a GraphQL response body.
fn decode_question(body: &[u8]) -> Result<Question, FetchError> {
    let response: GraphqlResponse = serde_json::from_slice(body).map_err(|err| {
        debug!(%err, "response body is not a question payload");
        FetchError::UnexpectedResponse
    })?;

    for error in &response.errors {
        warn!(message = %error.message, "graphql error");
    }

    response
        .data
        .and_then(|data| data.question)
        .ok_or(FetchError::UnexpectedResponse)
}
