//! Command session for the shortest-path engine.
//!
//! Input starts with a graph description followed by queries:
//!
//! ```text
//! 3
//! A B C
//! 3
//! A B 5
//! B C 3
//! A C 10
//! A C
//! C A
//! ```
//!
//! The vertex count and names are read as whitespace-separated tokens. Each
//! edge is a `from to weight` line and each remaining line is a `from to`
//! query. A query prints the path or the reason there is none.

use std::collections::VecDeque;
use std::io::{BufRead, Lines, Write};
use std::sync::Arc;

use super::{split_word, Flow};
use crate::config::graph::GraphConfig;
use crate::data_structures::ala_graph::{AlaGraph, AlaGraphError};
use crate::error::command::CommandError;
use crate::error::{AlakaiError, AlakaiResult, ErrorContext, ErrorReporter, GlobalErrorReporter};

const COMPONENT: &str = "path session";

/// Pulls whitespace-separated tokens or whole lines from a reader.
struct TokenReader<R> {
    lines: Lines<R>,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self, what: &str) -> AlakaiResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            match self.lines.next() {
                Some(line) => {
                    self.pending
                        .extend(line?.split_whitespace().map(str::to_string));
                }
                None => return Err(CommandError::UnexpectedEof(what.to_string()).into()),
            }
        }
    }

    fn next_count(&mut self, what: &str) -> AlakaiResult<usize> {
        let token = self.next_token(what)?;
        token.parse().map_err(|_| {
            CommandError::InvalidNumber {
                field: what.to_string(),
                value: token,
            }
            .into()
        })
    }

    /// Drops whatever is left of the current line.
    fn finish_line(&mut self) {
        self.pending.clear();
    }

    /// Next line with any non-whitespace content.
    fn next_line(&mut self) -> AlakaiResult<Option<String>> {
        for line in self.lines.by_ref() {
            let line = line?;
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}

/// Parses a `from to weight` edge line.
fn parse_edge(line: &str) -> Result<(&str, &str, u64), CommandError> {
    let missing = |argument: &str| CommandError::MissingArgument {
        command: "edge".to_string(),
        argument: argument.to_string(),
    };

    let mut words = line.split_whitespace();
    let from = words.next().ok_or_else(|| missing("source"))?;
    let to = words.next().ok_or_else(|| missing("destination"))?;
    let weight = words.next().ok_or_else(|| missing("weight"))?;
    let weight = weight.parse().map_err(|_| CommandError::InvalidNumber {
        field: "edge weight".to_string(),
        value: weight.to_string(),
    })?;
    Ok((from, to, weight))
}

/// An interactive session over an [`AlaGraph`].
pub struct PathSession {
    graph: AlaGraph,
    reporter: Arc<dyn ErrorReporter>,
}

impl PathSession {
    /// Creates a session with an empty graph.
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            graph: AlaGraph::with_config(config.into()),
            reporter: Arc::new(GlobalErrorReporter),
        }
    }

    /// Routes rejected edges and queries to `reporter`.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// The graph read so far.
    pub fn graph(&self) -> &AlaGraph {
        &self.graph
    }

    fn report(&self, error: AlakaiError, line: &str) {
        tracing::warn!(%error, "rejected input line");
        self.reporter
            .report(ErrorContext::new(error, COMPONENT).with_details(line));
    }

    /// Reads the graph description and answers every query that follows.
    ///
    /// # Errors
    ///
    /// A malformed vertex or edge count, or input ending inside the graph
    /// description, aborts the session. Bad edge and query lines are reported
    /// and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> AlakaiResult<()> {
        let mut reader = TokenReader::new(input);

        let vertex_count = reader.next_count("vertex count")?;
        for _ in 0..vertex_count {
            let name = reader.next_token("vertex name")?;
            self.graph.add_vertex(name);
        }

        let edge_count = reader.next_count("edge count")?;
        reader.finish_line();
        for _ in 0..edge_count {
            let line = reader
                .next_line()?
                .ok_or_else(|| CommandError::UnexpectedEof("edge".to_string()))?;
            let added = parse_edge(&line)
                .map_err(AlakaiError::from)
                .and_then(|(from, to, weight)| Ok(self.graph.add_edge(from, to, weight)?));
            if let Err(err) = added {
                self.report(err, &line);
            }
        }

        tracing::info!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "graph loaded"
        );

        while let Some(line) = reader.next_line()? {
            if self.answer(&line, &mut out)? == Flow::Stop {
                break;
            }
        }

        tracing::info!(rebuilds = self.graph.rebuild_count(), "path session finished");
        out.flush()?;
        Ok(())
    }

    /// Answers one `from to` query line.
    pub fn answer<W: Write>(&mut self, line: &str, out: &mut W) -> AlakaiResult<Flow> {
        let (from, rest) = split_word(line);
        let (to, _) = split_word(rest);
        if to.is_empty() {
            let err = CommandError::MissingArgument {
                command: "query".to_string(),
                argument: "destination".to_string(),
            };
            self.report(err.into(), line);
            return Ok(Flow::Continue);
        }

        match self.graph.shortest_path(from, to) {
            Ok(path) => writeln!(out, "{path}")?,
            Err(err @ (AlaGraphError::UnknownVertex(_) | AlaGraphError::Unreachable { .. })) => {
                writeln!(out, "{err}")?
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MockErrorReporter;
    use test_case::test_case;

    const SAMPLE: &str = "3\nA B C\n3\nA B 5\nB C 3\nA C 10\nA C\nC A\nA A\n";

    fn run_session(input: &str) -> AlakaiResult<(PathSession, String)> {
        let mut session = PathSession::new(&GraphConfig::default());
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out)?;
        Ok((session, String::from_utf8(out).unwrap()))
    }

    #[test]
    fn test_sample_queries() {
        let (session, out) = run_session(SAMPLE).unwrap();
        assert_eq!(
            out,
            "A->B->C with length 8\nA is unreachable from C\nA with length 0\n"
        );
        assert_eq!(session.graph().vertex_count(), 3);
        assert_eq!(session.graph().edge_count(), 3);
    }

    #[test]
    fn test_queries_sharing_a_source_build_once() {
        let input = "3\nA B C\n2\nA B 1\nB C 1\nA B\nA C\nA C\nB C\n";
        let (session, out) = run_session(input).unwrap();
        assert_eq!(
            out,
            "A->B with length 1\nA->B->C with length 2\nA->B->C with length 2\nB->C with length 1\n"
        );
        assert_eq!(session.graph().rebuild_count(), 2);
    }

    #[test]
    fn test_vertex_names_may_span_lines() {
        let input = "3 A\nB\n   C 1\nA C 4\n\nA C\n";
        let (_, out) = run_session(input).unwrap();
        assert_eq!(out, "A->C with length 4\n");
    }

    #[test]
    fn test_unknown_vertex_in_query() {
        let (_, out) = run_session("1\nA\n0\nA Z\n").unwrap();
        assert_eq!(out, "Unknown vertex: Z\n");
    }

    #[test]
    fn test_bad_edge_is_reported_and_skipped() {
        let mut reporter = MockErrorReporter::new();
        reporter
            .expect_report()
            .withf(|context| context.component == COMPONENT)
            .times(2)
            .return_const(());

        let mut session =
            PathSession::new(&GraphConfig::default()).with_reporter(Arc::new(reporter));
        let mut out = Vec::new();
        session
            .run("2\nA B\n3\nA B x\nA Q 1\nA B 2\nA B\n".as_bytes(), &mut out)
            .unwrap();

        assert_eq!(session.graph().edge_count(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "A->B with length 2\n");
    }

    #[test]
    fn test_incomplete_query_is_reported() {
        let mut reporter = MockErrorReporter::new();
        reporter.expect_report().times(1).return_const(());

        let mut session =
            PathSession::new(&GraphConfig::default()).with_reporter(Arc::new(reporter));
        let mut out = Vec::new();
        session.run("1\nA\n0\nA\nA A\n".as_bytes(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "A with length 0\n");
    }

    #[test_case("" ; "empty input")]
    #[test_case("2\nA\n" ; "missing vertex name")]
    #[test_case("1\nA\n2\nA A 1\n" ; "missing edge line")]
    fn test_truncated_input_is_fatal(input: &str) {
        let err = run_session(input).err().unwrap();
        assert!(matches!(
            err,
            AlakaiError::Command(CommandError::UnexpectedEof(_))
        ));
    }

    #[test]
    fn test_bad_count_is_fatal() {
        let err = run_session("three\nA B C\n").err().unwrap();
        assert!(matches!(
            err,
            AlakaiError::Command(CommandError::InvalidNumber { ref value, .. }) if value == "three"
        ));
    }

    #[test_case("A B 7" => Ok(("A", "B", 7)); "well formed")]
    #[test_case("A B" => Err(CommandError::MissingArgument { command: "edge".to_string(), argument: "weight".to_string() }); "missing weight")]
    #[test_case("A B -1" => Err(CommandError::InvalidNumber { field: "edge weight".to_string(), value: "-1".to_string() }); "negative weight")]
    fn test_parse_edge(line: &str) -> Result<(&str, &str, u64), CommandError> {
        parse_edge(line)
    }
}
