//! Line-oriented front ends for the core data structures.
//!
//! Each session reads commands from any [`BufRead`](std::io::BufRead) source
//! and writes results to any [`Write`](std::io::Write) sink, so the same code
//! serves standard input, files and tests. Malformed lines are handed to an
//! [`ErrorReporter`](crate::error::ErrorReporter) instead of aborting the run.

pub mod path_session;
pub mod tree_session;

pub use path_session::PathSession;
pub use tree_session::{TreeCommand, TreeSession};

/// Whether a session should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// End the session.
    Stop,
}

/// Splits off the first whitespace-delimited word, returning it and the
/// remainder with leading whitespace removed.
pub(crate) fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], text[end..].trim_start()),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("insert cat 1", ("insert", "cat 1"); "command and rest")]
    #[test_case("  find\tdog  ", ("find", "dog  "); "tab separated")]
    #[test_case("print", ("print", ""); "single word")]
    #[test_case("   ", ("", ""); "blank")]
    fn test_split_word(input: &str, expected: (&str, &str)) {
        assert_eq!(split_word(input), expected);
    }
}
