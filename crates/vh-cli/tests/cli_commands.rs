#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vh() -> Command {
    Command::cargo_bin("vh").unwrap()
}

/// Create a data directory seeded with a few templates.
fn seeded_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let d = dir.path().to_str().unwrap().to_string();
    vh().args(["template", "add", "Kira", "-k", "player", "-m", "3", "-d", &d])
        .assert()
        .success();
    vh().args(["template", "add", "Brand", "-k", "player", "-m", "1", "-d", &d])
        .assert()
        .success();
    vh().args(["template", "add", "Goblin", "--hp", "7", "-m", "2", "-d", &d])
        .assert()
        .success();
    dir
}

// ---------------------------------------------------------------------------
// template
// ---------------------------------------------------------------------------

#[test]
fn template_add_and_list() {
    let dir = seeded_dir();
    vh().args(["template", "list", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Goblin")
                .and(predicate::str::contains("Kira"))
                .and(predicate::str::contains("3 templates")),
        );
}

#[test]
fn template_add_duplicate_fails() {
    let dir = seeded_dir();
    vh().args(["template", "add", "Goblin", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn template_add_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();
    vh().args([
        "template",
        "add",
        "Slime",
        "-k",
        "monster",
        "-d",
        dir.path().to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown kind"));
}

#[test]
fn template_edit_changes_values() {
    let dir = seeded_dir();
    let d = dir.path().to_str().unwrap().to_string();
    vh().args(["template", "edit", "Goblin", "--hp", "11", "-d", &d])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated template 'Goblin'"));
    vh().args(["template", "list", "-d", &d])
        .assert()
        .success()
        .stdout(predicate::str::contains("11"));
}

#[test]
fn template_remove() {
    let dir = seeded_dir();
    let d = dir.path().to_str().unwrap().to_string();
    vh().args(["template", "remove", "Goblin", "-d", &d])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed template 'Goblin'"));
    vh().args(["template", "remove", "Goblin", "-d", &d])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

#[test]
fn history_empty() {
    let dir = TempDir::new().unwrap();
    vh().args(["history", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No battles archived yet."));
}

// ---------------------------------------------------------------------------
// fight
// ---------------------------------------------------------------------------

#[test]
fn fight_add_and_list() {
    let dir = seeded_dir();
    vh().args(["fight", "-d", dir.path().to_str().unwrap()])
        .write_stdin("add Goblin\nadd Goblin\nlist\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Goblin joins the roster.")
                .and(predicate::str::contains("Goblin 2 joins the roster."))
                .and(predicate::str::contains("Roster (2):")),
        );
}

#[test]
fn fight_unknown_template_is_not_fatal() {
    let dir = seeded_dir();
    vh().args(["fight", "-d", dir.path().to_str().unwrap()])
        .write_stdin("add Dragon\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown template"));
}

#[test]
fn fight_tie_flow_end_to_end() {
    let dir = seeded_dir();
    let d = dir.path().to_str().unwrap().to_string();
    vh().args(["fight", "-d", &d])
        .write_stdin(
            "add Kira\nadd Brand\ninit Kira 15\ninit Brand 15\nroll\n\
             tiebreak Kira 12\ntiebreak Brand 7\nresolve\nfinish\nquit\n",
        )
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Initiative ties!")
                .and(predicate::str::contains("at 15: Kira, Brand"))
                .and(predicate::str::contains("Tie resolved."))
                .and(predicate::str::contains("Battle finished: Kira, Brand")),
        );

    vh().args(["history", "-d", &d])
        .assert()
        .success()
        .stdout(predicate::str::contains("Battle finished: Kira, Brand"));
}

#[test]
fn fight_roster_survives_restart() {
    let dir = seeded_dir();
    let d = dir.path().to_str().unwrap().to_string();
    vh().args(["fight", "-d", &d])
        .write_stdin("add Goblin\nquit\n")
        .assert()
        .success();

    vh().args(["fight", "-d", &d])
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Restored 1 participant(s)")
                .and(predicate::str::contains("Goblin")),
        );
}
