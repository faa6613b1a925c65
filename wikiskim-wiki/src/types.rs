//! Wire types for the three MediaWiki responses plus the domain types the
//! rest of the pipeline works with.
//!
//! The pageprops/extracts endpoints key their `pages` object by the page id
//! rendered as a string. We deserialize that shape as-is, then re-index the
//! records by their own `pageid` field ([`PagePropsIndex`]) so nothing
//! downstream looks things up through stringly-typed keys.

use serde::Deserialize;
use std::collections::HashMap;

// ==============================
// list=search
// ==============================

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<SearchQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub pageid: u64,
    pub title: String,
    #[serde(default)]
    pub wordcount: u64,
}

// ==============================
// prop=pageprops
// ==============================

#[derive(Debug, Clone, Deserialize)]
pub struct PagePropsResponse {
    #[serde(default)]
    pub query: Option<PagePropsQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagePropsQuery {
    #[serde(default)]
    pub pages: HashMap<String, PropsPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropsPage {
    #[serde(default)]
    pub pageid: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub pageprops: Option<PageProps>,
}

/// Only the `disambiguation` marker is requested (`ppprop=disambiguation`).
/// The API includes the key only for disambiguation pages; its value is
/// typically the empty string.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PageProps {
    #[serde(default)]
    pub disambiguation: Option<String>,
}

impl PropsPage {
    /// Marker-key-present semantics: any `disambiguation` entry, whatever
    /// its value, marks the page as a disambiguation page.
    pub fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some())
    }
}

/// Page-properties records indexed by their own `pageid` field.
#[derive(Debug, Clone, Default)]
pub struct PagePropsIndex {
    by_id: HashMap<u64, PropsPage>,
}

impl PagePropsIndex {
    pub fn from_pages<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = PropsPage>,
    {
        let by_id = pages
            .into_iter()
            .filter_map(|page| page.pageid.map(|id| (id, page)))
            .collect();
        Self { by_id }
    }

    pub fn get(&self, page_id: u64) -> Option<&PropsPage> {
        self.by_id.get(&page_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl PagePropsResponse {
    /// Discard the stringly-typed object keys and index by the `pageid`
    /// field of each record.
    pub fn into_index(self) -> PagePropsIndex {
        let pages = self
            .query
            .map(|query| query.pages.into_values().collect::<Vec<_>>())
            .unwrap_or_default();
        PagePropsIndex::from_pages(pages)
    }
}

// ==============================
// prop=info|extracts
// ==============================

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractResponse {
    #[serde(default)]
    pub query: Option<ExtractQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractQuery {
    #[serde(default)]
    pub pages: HashMap<String, ExtractPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractPage {
    #[serde(default)]
    pub pageid: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default, rename = "fullurl")]
    pub full_url: Option<String>,
}

// ==============================
// Domain types
// ==============================

/// One ranked search hit. Ephemeral: consumed within a single selection
/// cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub page_id: u64,
    pub title: String,
    pub word_count: u64,
}

impl From<SearchHit> for SearchResult {
    fn from(hit: SearchHit) -> Self {
        Self {
            page_id: hit.pageid,
            title: hit.title,
            word_count: hit.wordcount,
        }
    }
}

/// A search result that survived disambiguation filtering, paired with its
/// 1-based display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub result: SearchResult,
}

/// Plain-text introductory content plus canonical URL for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleExtract {
    pub page_id: u64,
    pub plain_text: String,
    pub canonical_url: String,
}

/// Bounded summary text ready for the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
    pub source_url: String,
}
