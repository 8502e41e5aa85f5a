//! CLI tests for the `feedgroups` binary.
//!
//! Spawns the compiled binary against a temp database and verifies the
//! add/show/list flows end to end.

use std::path::Path;
use std::process::{Command, Output};

fn run(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_feedgroups"))
        .arg("--db")
        .arg(db)
        .args(args)
        .output()
        .expect("spawn feedgroups")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn add_show_list_round_trip() {
    let temp = tempfile::tempdir().expect("tempdir");
    let db = temp.path().join("db.json");

    let add = run(&db, &["add-feeds", "art", "doodles", "sketches"]);
    assert!(add.status.success(), "add-feeds failed: {add:?}");

    let comment = run(&db, &["add-comments", "art", "nice lines"]);
    assert!(comment.status.success(), "add-comments failed: {comment:?}");

    let show = run(&db, &["show", "art"]);
    assert!(show.status.success(), "show failed: {show:?}");
    let out = stdout(&show);
    assert!(out.contains("group: art"));
    assert!(out.contains("  doodles"));
    assert!(out.contains("  sketches"));
    assert!(out.contains("  nice lines"));

    let list = run(&db, &["list"]);
    assert!(list.status.success(), "list failed: {list:?}");
    assert_eq!(stdout(&list), "art\n");
}

#[test]
fn set_feeds_overwrites_previous_set() {
    let temp = tempfile::tempdir().expect("tempdir");
    let db = temp.path().join("db.json");

    run(&db, &["add-feeds", "tech", "gadgets", "chips"]);
    let set = run(&db, &["set-feeds", "tech", "silicon"]);
    assert!(set.status.success(), "set-feeds failed: {set:?}");

    let out = stdout(&run(&db, &["show", "tech"]));
    assert!(out.contains("  silicon"));
    assert!(!out.contains("gadgets"));
}

#[test]
fn show_creates_a_missing_group() {
    let temp = tempfile::tempdir().expect("tempdir");
    let db = temp.path().join("db.json");

    let show = run(&db, &["show", "news"]);
    assert!(show.status.success(), "show failed: {show:?}");

    assert_eq!(stdout(&run(&db, &["list"])), "news\n");
}

#[test]
fn corrupt_database_reports_error_and_exits_nonzero() {
    let temp = tempfile::tempdir().expect("tempdir");
    let db = temp.path().join("db.json");
    std::fs::write(&db, "not json").expect("write");

    let show = run(&db, &["show", "art"]);
    assert!(!show.status.success());
    let err = String::from_utf8(show.stderr).expect("utf8 stderr");
    assert!(err.contains("parse database"));
}
