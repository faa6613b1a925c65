//! Wikipedia search-and-summarize pipeline.
//!
//! Submodules cover the two-step HTTP pipeline and its text shaping:
//!
//! - [`client`]: typed wrapper over the MediaWiki Action API (search,
//!   page-properties batch, extract)
//! - [`filter`]: disambiguation filtering into a capped candidate list
//! - [`summary`]: deterministic truncation into a bounded summary
//! - [`flow`]: the interactive selection flow tying it all together
//!
//! The flow consumes injected IO seams (`wikiskim_common::io::LineSource`,
//! any `std::io::Write`) and the client takes its endpoint base URL at
//! construction, so the whole pipeline runs against a local mock server in
//! tests.

pub mod client;
pub mod error;
pub mod filter;
pub mod flow;
pub mod summary;
pub mod types;

pub use client::WikiApi;
pub use error::{Result, WikiError};
pub use flow::{FlowOutcome, SelectionFlow};
pub use types::{ArticleExtract, Candidate, SearchResult, Summary};
