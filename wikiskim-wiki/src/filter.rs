//! Disambiguation filtering into a capped candidate list.

use crate::types::{Candidate, PagePropsIndex, SearchResult};

/// Upper bound on the candidate list, regardless of raw hit count.
pub const MAX_CANDIDATES: usize = 10;

/// Keep the first [`MAX_CANDIDATES`] results that can be confirmed safe,
/// in original rank order, with dense 1-based display indices.
///
/// A page is dropped when:
/// - its id is absent from the properties index (fail-closed: the page
///   cannot be confirmed safe), or
/// - its pageprops carry the `disambiguation` marker key at all.
///
/// Pure over already-parsed data, so filtering is idempotent.
pub fn filter_candidates(results: &[SearchResult], props: &PagePropsIndex) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for result in results {
        let Some(page) = props.get(result.page_id) else {
            tracing::debug!(page_id = result.page_id, "filter.unconfirmed_page_dropped");
            continue;
        };
        if page.is_disambiguation() {
            tracing::debug!(page_id = result.page_id, "filter.disambiguation_dropped");
            continue;
        }
        candidates.push(Candidate {
            index: candidates.len() + 1,
            result: result.clone(),
        });
        if candidates.len() == MAX_CANDIDATES {
            break;
        }
    }
    candidates
}
