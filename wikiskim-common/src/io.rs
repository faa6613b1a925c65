//! Line-oriented input seam.
//!
//! The selection flow never touches stdin directly; it consumes a
//! [`LineSource`] so production code can wire the terminal while tests feed a
//! scripted sequence.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A blocking, line-oriented input source.
pub trait LineSource {
    /// Next input line without its trailing newline. `None` means end of
    /// input (e.g. EOF on a piped stdin).
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Production source reading from the process's stdin.
pub struct StdinLineSource;

impl LineSource for StdinLineSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let n = io::stdin().lock().read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }
}

/// Pre-scripted source for tests and non-interactive scenarios.
///
/// ```
/// use wikiskim_common::io::{LineSource, ScriptedLines};
///
/// let mut lines = ScriptedLines::new(["golang", "1"]);
/// assert_eq!(lines.next_line().unwrap().as_deref(), Some("golang"));
/// assert_eq!(lines.next_line().unwrap().as_deref(), Some("1"));
/// assert_eq!(lines.next_line().unwrap(), None);
/// ```
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
