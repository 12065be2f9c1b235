//! Command session for the red-black tree.
//!
//! Reads one command per line:
//!
//! ```text
//! insert <key> <value...>
//! delete <key> <value...>
//! find <key>
//! print
//! quit
//! ```
//!
//! The value is the rest of the line after the key and may contain spaces.

use std::io::{BufRead, Write};
use std::sync::Arc;

use super::{split_word, Flow};
use crate::config::tree::TreeConfig;
use crate::data_structures::moku_rb_tree::MokuTree;
use crate::error::command::CommandError;
use crate::error::{AlakaiResult, ErrorContext, ErrorReporter, GlobalErrorReporter};

/// A parsed tree command borrowing from its input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeCommand<'a> {
    /// Add a key/value pair.
    Insert {
        /// Ordering key
        key: &'a str,
        /// Associated value
        value: &'a str,
    },
    /// Remove every node holding exactly this pair.
    Delete {
        /// Ordering key
        key: &'a str,
        /// Value that must match
        value: &'a str,
    },
    /// List every pair stored under a key.
    Find {
        /// Key to look up
        key: &'a str,
    },
    /// Dump the tree sideways.
    Print,
    /// End the session.
    Quit,
}

impl<'a> TreeCommand<'a> {
    /// Parses one input line.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` for a blank line.
    /// * `Ok(Some(command))` for a well-formed command.
    /// * `Err(CommandError)` for an unknown command or missing argument.
    pub fn parse(line: &'a str) -> Result<Option<Self>, CommandError> {
        let (command, rest) = split_word(line);
        let rest = rest.trim_end();

        let missing = |argument: &str| CommandError::MissingArgument {
            command: command.to_string(),
            argument: argument.to_string(),
        };

        let parsed = match command {
            "" => return Ok(None),
            "insert" | "delete" => {
                let (key, value) = split_word(rest);
                if key.is_empty() {
                    return Err(missing("key"));
                }
                if value.is_empty() {
                    return Err(missing("value"));
                }
                if command == "insert" {
                    TreeCommand::Insert { key, value }
                } else {
                    TreeCommand::Delete { key, value }
                }
            }
            "find" => {
                if rest.is_empty() {
                    return Err(missing("key"));
                }
                TreeCommand::Find { key: rest }
            }
            "print" => TreeCommand::Print,
            "quit" => TreeCommand::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(parsed))
    }
}

/// An interactive session over a [`MokuTree`].
pub struct TreeSession {
    tree: MokuTree,
    reporter: Arc<dyn ErrorReporter>,
}

impl TreeSession {
    /// Creates a session with an empty tree.
    pub fn new(config: &TreeConfig) -> Self {
        Self {
            tree: MokuTree::with_config(config.into()),
            reporter: Arc::new(GlobalErrorReporter),
        }
    }

    /// Routes malformed-command reports to `reporter`.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// The tree built so far.
    pub fn tree(&self) -> &MokuTree {
        &self.tree
    }

    /// Applies a single command, writing any output to `out`.
    pub fn execute<W: Write>(&mut self, command: TreeCommand<'_>, out: &mut W) -> AlakaiResult<Flow> {
        match command {
            TreeCommand::Insert { key, value } => self.tree.insert(key, value),
            TreeCommand::Delete { key, value } => {
                self.tree.delete(key, value);
            }
            TreeCommand::Find { key } => {
                for (key, value) in self.tree.find(key) {
                    writeln!(out, "{key} {value}")?;
                }
            }
            TreeCommand::Print => out.write_all(self.tree.print_ordered().as_bytes())?,
            TreeCommand::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    /// Processes commands until `quit`, an unknown command, or end of input.
    ///
    /// Lines with missing arguments are reported and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> AlakaiResult<()> {
        for line in input.lines() {
            let line = line?;
            let flow = match TreeCommand::parse(&line) {
                Ok(None) => Flow::Continue,
                Ok(Some(command)) => self.execute(command, &mut out)?,
                Err(err) => {
                    let flow = match err {
                        CommandError::UnknownCommand(_) => Flow::Stop,
                        _ => Flow::Continue,
                    };
                    tracing::warn!(error = %err, "rejected tree command");
                    self.reporter.report(
                        ErrorContext::new(err.into(), "tree session").with_details(line.as_str()),
                    );
                    flow
                }
            };
            if flow == Flow::Stop {
                break;
            }
        }

        tracing::info!(entries = self.tree.len(), "tree session finished");
        out.flush()?;
        Ok(())
    }
}
