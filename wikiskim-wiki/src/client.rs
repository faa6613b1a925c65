//! Typed wrapper around the MediaWiki Action API.
//!
//! One injected HTTP client, three GET shapes: full-text search, a single
//! batched page-properties lookup, and the intro-extract fetch. The endpoint
//! base URL is taken at construction so tests can point the whole pipeline
//! at a local mock server.

use std::borrow::Cow;
use std::time::Duration;

use crate::error::{Result, WikiError};
use crate::types::{
    ArticleExtract, ExtractResponse, PagePropsIndex, PagePropsResponse, SearchResponse,
    SearchResult,
};
use wikiskim_http::{HttpClient, RequestOpts};

/// Default MediaWiki installation to talk to.
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org";

/// Path of the Action API relative to the endpoint base.
const API_PATH: &str = "w/api.php";

/// How many raw hits to ask the search endpoint for.
pub const RAW_SEARCH_LIMIT: usize = 20;

#[derive(Clone)]
pub struct WikiApi {
    http: HttpClient,
}

impl WikiApi {
    /// Construct a client against the given endpoint base (for production,
    /// [`DEFAULT_ENDPOINT`]).
    pub fn new(endpoint: &str) -> Result<Self> {
        let http = HttpClient::new(endpoint)?;
        Ok(Self { http })
    }

    /// Override the transport's default per-request timeout.
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.http = self.http.with_timeout(dur);
        self
    }

    /// Full-text search, up to [`RAW_SEARCH_LIMIT`] ranked hits with word
    /// counts. An empty vec is a valid "no matches" outcome, not an error.
    pub async fn search(&self, topic: &str) -> Result<Vec<SearchResult>> {
        let limit = RAW_SEARCH_LIMIT.to_string();
        let params: Vec<(&str, Cow<'_, str>)> = vec![
            ("action", "query".into()),
            ("list", "search".into()),
            ("srsearch", topic.into()),
            ("srlimit", limit.into()),
            ("srprop", "wordcount|categorysnippet".into()),
            ("format", "json".into()),
        ];

        let resp: SearchResponse = self
            .http
            .get_json(
                API_PATH,
                RequestOpts {
                    query: Some(params),
                    ..Default::default()
                },
            )
            .await?;

        let hits = resp.query.map(|query| query.search).unwrap_or_default();
        tracing::debug!(topic, hits = hits.len(), "wiki.search");
        Ok(hits.into_iter().map(SearchResult::from).collect())
    }

    /// Batch page-properties lookup for all given page ids in one request,
    /// asking only for the disambiguation marker.
    pub async fn page_props(&self, page_ids: &[u64]) -> Result<PagePropsIndex> {
        let joined = page_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join("|");
        let params: Vec<(&str, Cow<'_, str>)> = vec![
            ("action", "query".into()),
            ("prop", "pageprops".into()),
            ("ppprop", "disambiguation".into()),
            ("redirects", "1".into()),
            ("pageids", joined.into()),
            ("format", "json".into()),
        ];

        let resp: PagePropsResponse = self
            .http
            .get_json(
                API_PATH,
                RequestOpts {
                    query: Some(params),
                    ..Default::default()
                },
            )
            .await?;

        let index = resp.into_index();
        tracing::debug!(
            requested = page_ids.len(),
            returned = index.len(),
            "wiki.page_props"
        );
        Ok(index)
    }

    /// Plain-text introductory extract and canonical URL for exactly one
    /// page. Fails with [`WikiError::NoContent`] when the page is missing or
    /// its extract is empty.
    pub async fn extract(&self, page_id: u64) -> Result<ArticleExtract> {
        let id = page_id.to_string();
        let params: Vec<(&str, Cow<'_, str>)> = vec![
            ("action", "query".into()),
            ("prop", "info|extracts".into()),
            ("exlimit", "max".into()),
            ("explaintext", "1".into()),
            ("exintro", "1".into()),
            ("inprop", "url".into()),
            ("pageids", id.into()),
            ("format", "json".into()),
        ];

        let resp: ExtractResponse = self
            .http
            .get_json(
                API_PATH,
                RequestOpts {
                    query: Some(params),
                    ..Default::default()
                },
            )
            .await?;

        let page = resp
            .query
            .map(|query| query.pages)
            .unwrap_or_default()
            .into_values()
            .find(|page| page.pageid == Some(page_id))
            .ok_or(WikiError::NoContent { page_id })?;

        let plain_text = page.extract.unwrap_or_default();
        if plain_text.is_empty() {
            return Err(WikiError::NoContent { page_id });
        }

        let canonical_url = page.full_url.ok_or_else(|| {
            WikiError::Parse(format!("extract response for page {page_id} missing fullurl"))
        })?;

        tracing::debug!(page_id, chars = plain_text.chars().count(), "wiki.extract");
        Ok(ArticleExtract {
            page_id,
            plain_text,
            canonical_url,
        })
    }
}
