//! JSON output specs
//!
//! `--output json` prints one array holding every tree. Nodes are tagged
//! with a `type` field; simple commands omit absent redirections.

use crate::prelude::*;

fn json(input: &str) -> serde_json::Value {
    let stdout = cli()
        .args(&["-o", "json"])
        .stdin(input)
        .passes()
        .stdout();
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn simple_command_shape() {
    cli()
        .args(&["--output", "json"])
        .stdin("cat < in.txt")
        .passes()
        .stdout_eq(
            r#"[
  {
    "type": "simple",
    "words": [
      "cat"
    ],
    "input": "in.txt"
  }
]
"#,
        );
}

#[test]
fn pipe_binds_tighter_than_and() {
    let trees = json("a | b && c");
    let tree = &trees[0];
    assert_eq!(tree["type"], "and");
    assert_eq!(tree["left"]["type"], "pipe");
    assert_eq!(tree["left"]["left"]["words"][0], "a");
    assert_eq!(tree["left"]["right"]["words"][0], "b");
    assert_eq!(tree["right"]["words"][0], "c");
}

#[test]
fn and_or_associate_left() {
    let trees = json("a || b && c");
    let tree = &trees[0];
    assert_eq!(tree["type"], "and");
    assert_eq!(tree["left"]["type"], "or");
    assert_eq!(tree["right"]["words"][0], "c");
}

#[test]
fn sequence_binds_loosest() {
    let trees = json("a ; b | c\nd");
    let tree = &trees[0];
    assert_eq!(tree["type"], "sequence");
    assert_eq!(tree["left"]["type"], "sequence");
    assert_eq!(tree["left"]["right"]["type"], "pipe");
    assert_eq!(tree["right"]["words"][0], "d");
}

#[test]
fn subshell_wraps_its_body() {
    let trees = json("(a ; b) | c");
    let tree = &trees[0];
    assert_eq!(tree["type"], "pipe");
    assert_eq!(tree["left"]["type"], "subshell");
    assert_eq!(tree["left"]["body"]["type"], "sequence");
}

#[test]
fn one_element_per_statement_list() {
    let trees = json("a\n\nb\n\n\n\nc > out");
    let trees = trees.as_array().unwrap();
    assert_eq!(trees.len(), 3);
    assert_eq!(trees[2]["output"], "out");
    assert!(trees[0].get("output").is_none());
}
