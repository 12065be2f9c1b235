//! Tests for the front-end sessions driven through loaded configuration.

use crate::app::{PathSession, TreeSession};
use crate::config::{graph::GraphConfig, tree::TreeConfig, ConfigLoader};
use std::fs;
use tempfile::tempdir;

fn run_tree(config: &TreeConfig, input: &str) -> String {
    let mut session = TreeSession::new(config);
    let mut out = Vec::new();
    session.run(input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Test that the configured indent width reaches the tree dump.
#[test]
fn test_tree_session_uses_configured_indent() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("session.toml");
    fs::write(&config_path, "[tree]\nindent_width = 2\n").unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_SESSION")
        .load()
        .unwrap();

    let out = run_tree(&config.tree, "insert b 2\ninsert a 1\ninsert c 3\nprint\n");
    assert_eq!(out, "   R c 3\n B b 2\n   R a 1\n");
}

/// Test a longer tree session mixing every command.
#[test]
fn test_tree_session_transcript() {
    let input = "\
insert dog woof
insert cat meow
insert cat purr
insert emu boom
find cat
delete cat meow
delete cat nothing
find cat
find fox
quit
";
    let out = run_tree(&TreeConfig::default(), input);
    assert_eq!(out, "cat meow\ncat purr\ncat purr\n");
}

/// Test that the tree stays balanced after a session of many inserts.
#[test]
fn test_tree_session_keeps_invariants() {
    let input: String = (0..200)
        .map(|i| format!("insert k{:03} v{i}\n", i % 50))
        .collect();

    let mut session = TreeSession::new(&TreeConfig::default());
    session.run(input.as_bytes(), Vec::new()).unwrap();

    assert_eq!(session.tree().len(), 200);
    assert_eq!(session.tree().find("k007").len(), 4);
    assert!(session.tree().validate().is_ok());
}

/// Test a shortest-path session on a graph with several routes.
#[test]
fn test_path_session_transcript() {
    let input = "\
5
S A B C T
7
S A 2
S B 6
A B 3
A C 8
B C 1
B T 9
C T 2
S T
S C
B T
T S
";
    let mut session = PathSession::new(&GraphConfig::default());
    let mut out = Vec::new();
    session.run(input.as_bytes(), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "S->A->B->C->T with length 8\n\
         S->A->B->C with length 6\n\
         B->C->T with length 3\n\
         S is unreachable from T\n"
    );
    assert_eq!(session.graph().rebuild_count(), 3);
}
