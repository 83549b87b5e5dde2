#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn nout_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("nout"));
    cmd.env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

/// Runs `nout new ...` and returns the created note id.
fn create_note(data_dir: &Path, args: &[&str]) -> String {
    let output = nout_cmd(data_dir)
        .arg("new")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .rsplit(' ')
        .next()
        .unwrap()
        .to_string()
}

#[test]
fn test_notes_folders_and_trash_workflow() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    nout_cmd(data)
        .args(["folder", "add", "Recipes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Folder created"));

    let plain = create_note(data, &["<p>Shopping list</p>"]);
    let soup = create_note(data, &["--folder", "recipes", "<h1>Soup</h1>"]);

    // Notes view shows the default-category note only
    nout_cmd(data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping list"))
        .stdout(predicate::str::contains("Soup").not());

    nout_cmd(data)
        .args(["list", "--folder", "Recipes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Soup"));

    nout_cmd(data).args(["fav", &soup]).assert().success();
    nout_cmd(data)
        .args(["list", "--view", "favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Soup"))
        .stdout(predicate::str::contains("[Recipes]"));

    nout_cmd(data).args(["trash", &plain]).assert().success();
    nout_cmd(data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes here."));

    nout_cmd(data).args(["restore", &plain]).assert().success();
    nout_cmd(data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping list"));

    // Deleting the folder detaches the note into the default category
    nout_cmd(data)
        .args(["folder", "delete", "Recipes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 notes moved"));
    nout_cmd(data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Soup"));

    nout_cmd(data).args(["rm", &soup, &plain]).assert().success();
    nout_cmd(data)
        .arg("empty-trash")
        .assert()
        .success()
        .stdout(predicate::str::contains("Erased 2 notes."));
    nout_cmd(data)
        .args(["show", &soup])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_show_edit_and_hide() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();
    let id = create_note(data, &[]);

    nout_cmd(data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("New note"));

    nout_cmd(data)
        .args(["edit", &id[..8], "<p>Héllo wörld</p>"])
        .assert()
        .success();
    nout_cmd(data)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>Héllo wörld</p>"));

    nout_cmd(data).args(["hide", &id]).assert().success();
    nout_cmd(data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Héllo").not());
}

#[test]
fn test_scratchpad_defaults_and_persists() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    nout_cmd(data)
        .arg("scratch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Nout!"));

    nout_cmd(data)
        .args(["scratch", "remember the milk"])
        .assert()
        .success();

    nout_cmd(data)
        .arg("scratch")
        .assert()
        .success()
        .stdout(predicate::str::contains("remember the milk"));
}

#[test]
fn test_errors_exit_non_zero() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    nout_cmd(data)
        .args(["folder", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Folder name cannot be empty"));

    nout_cmd(data)
        .args(["fav", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No note matches"));

    nout_cmd(data)
        .args(["new", "--folder", "Nowhere"])
        .assert()
        .failure();
}

#[test]
fn test_edit_without_text_keeps_content() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();
    let id = create_note(data, &["<p>precious</p>"]);

    nout_cmd(data)
        .args(["edit", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No text given"));

    nout_cmd(data)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>precious</p>"));
}

#[test]
fn test_folder_delete_counts_trashed_notes() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    nout_cmd(data).args(["folder", "add", "Work"]).assert().success();
    create_note(data, &["--folder", "Work", "kept"]);
    let trashed = create_note(data, &["--folder", "Work", "binned"]);
    nout_cmd(data).args(["trash", &trashed]).assert().success();

    nout_cmd(data)
        .args(["folder", "delete", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 notes moved"));
}
