//! Deterministic summary composition.
//!
//! The truncation policy is two-tier and deliberately asymmetric: when the
//! first paragraph alone overflows the limit, the second paragraph is never
//! consulted. Lengths are counted in characters so truncation can never
//! split a UTF-8 sequence.

use crate::types::{ArticleExtract, Summary};

/// Character budget for the summary body (excluding the ellipsis and the
/// trailing link line).
pub const SUMMARY_CHAR_LIMIT: usize = 1024;

const ELLIPSIS: &str = "...";

/// Compose the bounded summary for an extract.
///
/// 1. Split the plain text on line breaks; paragraph 1 is the base.
/// 2. Paragraph 1 longer than the limit: truncate it, trim trailing
///    whitespace, append the ellipsis. Final body.
/// 3. Otherwise append paragraph 2 (when present) after a blank line; if
///    the combined string overflows, truncate the combined string the same
///    way.
/// 4. Append a blank line and the `Find out more` link.
pub fn compose_summary(extract: &ArticleExtract) -> Summary {
    let mut paragraphs = extract.plain_text.split('\n');
    let first = paragraphs.next().unwrap_or_default();
    let second = paragraphs.next();

    let body = if char_len(first) > SUMMARY_CHAR_LIMIT {
        truncate_with_ellipsis(first)
    } else if let Some(second) = second {
        let combined = format!("{first}\n\n{second}");
        if char_len(&combined) > SUMMARY_CHAR_LIMIT {
            truncate_with_ellipsis(&combined)
        } else {
            combined
        }
    } else {
        first.to_string()
    };

    let text = format!("{body}\n\nFind out more: {}", extract.canonical_url);
    Summary {
        text,
        source_url: extract.canonical_url.clone(),
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn truncate_with_ellipsis(s: &str) -> String {
    let cut = s
        .char_indices()
        .nth(SUMMARY_CHAR_LIMIT)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let mut out = s[..cut].trim_end().to_string();
    out.push_str(ELLIPSIS);
    out
}
