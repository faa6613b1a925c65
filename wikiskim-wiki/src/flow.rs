//! Interactive selection flow.
//!
//! Linear state path: searching → awaiting selection → fetching extract →
//! done, with every error short-circuiting out. The flow owns no IO: input
//! comes from an injected [`LineSource`], user-facing text goes to an
//! injected `Write` sink, diagnostics go to `tracing`.

use std::io::Write;

use crate::client::WikiApi;
use crate::error::{Result, WikiError};
use crate::filter::filter_candidates;
use crate::summary::compose_summary;
use crate::types::{Candidate, Summary};
use wikiskim_common::io::LineSource;

/// Successful terminal outcomes of one flow run.
///
/// Zero candidates is a legitimate answer, not an error; callers that need
/// to distinguish it from a printed summary match on this.
#[derive(Debug, Clone)]
pub enum FlowOutcome {
    NoCandidates,
    Summarized(Summary),
}

pub struct SelectionFlow {
    api: WikiApi,
}

impl SelectionFlow {
    pub fn new(api: WikiApi) -> Self {
        Self { api }
    }

    /// Search + disambiguation filter: the split-call surface for callers
    /// that render choices themselves. Empty vec means no candidates.
    pub async fn find_candidates(&self, topic: &str) -> Result<Vec<Candidate>> {
        let results = self.api.search(topic).await?;
        if results.is_empty() {
            return Ok(Vec::new());
        }
        let page_ids: Vec<u64> = results.iter().map(|r| r.page_id).collect();
        let props = self.api.page_props(&page_ids).await?;
        Ok(filter_candidates(&results, &props))
    }

    /// Fetch and compose the summary for one chosen page.
    pub async fn summarize(&self, page_id: u64) -> Result<Summary> {
        let extract = self.api.extract(page_id).await?;
        Ok(compose_summary(&extract))
    }

    /// Run the whole pipeline: search, present choices, read one selection,
    /// print the summary.
    pub async fn run(
        &self,
        topic: &str,
        lines: &mut dyn LineSource,
        out: &mut dyn Write,
    ) -> Result<FlowOutcome> {
        // Searching
        tracing::debug!(phase = "searching", topic, "flow.phase");
        let results = self.api.search(topic).await?;
        if results.is_empty() {
            out.write_all(b"No search results found.\n\n")?;
            return Ok(FlowOutcome::NoCandidates);
        }

        let page_ids: Vec<u64> = results.iter().map(|r| r.page_id).collect();
        let props = self.api.page_props(&page_ids).await?;
        let candidates = filter_candidates(&results, &props);
        if candidates.is_empty() {
            out.write_all(b"No valid search results found\n")?;
            return Ok(FlowOutcome::NoCandidates);
        }

        // AwaitingSelection
        tracing::debug!(
            phase = "awaiting_selection",
            candidates = candidates.len(),
            "flow.phase"
        );
        let mut listing = String::from("Search results:\n");
        for candidate in &candidates {
            listing.push_str(&format!("{}. {}\n", candidate.index, candidate.result.title));
        }
        out.write_all(listing.as_bytes())?;
        write!(out, "\nEnter the number of the article you want to read: ")?;
        out.flush()?;

        let line = lines.next_line()?;
        let chosen = parse_selection(line.as_deref(), candidates.len())?;
        let page_id = candidates[chosen - 1].result.page_id;

        // FetchingExtract
        tracing::debug!(phase = "fetching_extract", page_id, "flow.phase");
        let summary = self.summarize(page_id).await?;

        // Done
        tracing::debug!(phase = "done", page_id, "flow.phase");
        write!(out, "\n{}\n", summary.text)?;
        Ok(FlowOutcome::Summarized(summary))
    }
}

/// Validate one line of selection input against a candidate count.
///
/// No re-prompt loop: anything other than an integer in `1..=max` is an
/// [`WikiError::InvalidSelection`].
pub fn parse_selection(line: Option<&str>, max: usize) -> Result<usize> {
    let raw = line
        .ok_or_else(|| WikiError::InvalidSelection("no selection provided".to_string()))?
        .trim();
    if raw.is_empty() {
        return Err(WikiError::InvalidSelection(
            "you must enter a number".to_string(),
        ));
    }
    let chosen: usize = raw
        .parse()
        .map_err(|_| WikiError::InvalidSelection(format!("`{raw}` is not a valid number")))?;
    if chosen == 0 || chosen > max {
        return Err(WikiError::InvalidSelection(format!(
            "selection must be between 1 and {max}"
        )));
    }
    Ok(chosen)
}
