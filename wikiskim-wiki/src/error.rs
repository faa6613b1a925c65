use thiserror::Error;
use wikiskim_http::HttpError;

/// Error taxonomy for the search-and-summarize pipeline.
///
/// Every variant aborts the pipeline; there is no retry or partial-result
/// degradation. A search with zero candidates is NOT an error (the flow
/// reports it as a successful [`crate::flow::FlowOutcome::NoCandidates`]).
#[derive(Debug, Error)]
pub enum WikiError {
    /// The upstream HTTP call failed to complete.
    #[error("transport error: {0}")]
    Transport(HttpError),

    /// The response body could not be interpreted as the expected payload.
    #[error("malformed API response: {0}")]
    Parse(String),

    /// The extract endpoint had no introductory text for the chosen page.
    #[error("no extract found for page {page_id}")]
    NoContent { page_id: u64 },

    /// User input was empty, non-numeric, or out of the candidate range.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// The output sink or input source failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<HttpError> for WikiError {
    fn from(err: HttpError) -> Self {
        match err {
            e @ HttpError::Decode(..) => WikiError::Parse(e.to_string()),
            other => WikiError::Transport(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, WikiError>;
