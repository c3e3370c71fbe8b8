use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn journal(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("journal").unwrap();
    cmd.env("JOURNAL_DATA_DIR", dir.path()).env_remove("JOURNAL_LOG");
    cmd
}

fn create_entry(dir: &TempDir, args: &[&str]) -> String {
    let output = journal(dir).arg("new").args(args).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID:"))
        .map(|id| id.trim().to_string())
        .unwrap()
}

#[test]
fn test_new_and_list() {
    let dir = TempDir::new().unwrap();

    journal(&dir)
        .args(["new", "Went for a long walk", "--title", "Sunday", "--tags", "walk, outside"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved (20/1000 characters)"));

    journal(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunday"))
        .stdout(predicate::str::contains("Personal"))
        .stdout(predicate::str::contains("1 entries"));

    assert!(dir.path().join("data").join("journal.json").exists());
}

#[test]
fn test_new_reads_stdin() {
    let dir = TempDir::new().unwrap();

    journal(&dir)
        .arg("new")
        .write_stdin("Written from a pipe\n")
        .assert()
        .success();

    journal(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Untitled Entry"))
        .stdout(predicate::str::contains("Written from a pipe"));
}

#[test]
fn test_empty_content_rejected() {
    let dir = TempDir::new().unwrap();

    journal(&dir)
        .args(["new", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please write something before saving"));

    journal(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries found."));
}

#[test]
fn test_too_long_rejected() {
    let dir = TempDir::new().unwrap();
    let content = "x".repeat(1001);

    journal(&dir)
        .args(["new", content.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum length of 1000"));
}

#[test]
fn test_list_filters() {
    let dir = TempDir::new().unwrap();
    create_entry(&dir, &["Sprint review went well", "--title", "Standup", "--category", "Work"]);
    create_entry(&dir, &["Baked bread", "--title", "Kitchen", "--mood", "Calm"]);

    journal(&dir)
        .args(["list", "--category", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standup"))
        .stdout(predicate::str::contains("Kitchen").not());

    journal(&dir)
        .args(["list", "--search", "BREAD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kitchen"))
        .stdout(predicate::str::contains("Standup").not());

    journal(&dir)
        .args(["list", "--mood", "Calm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entries"));
}

#[test]
fn test_show_edit_delete() {
    let dir = TempDir::new().unwrap();
    let id = create_entry(&dir, &["First draft", "--title", "Draft"]);

    journal(&dir)
        .args(["show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft"))
        .stdout(predicate::str::contains("First draft"));

    journal(&dir)
        .args(["edit", id.as_str(), "--title", "Final", "--content", "Second draft"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Final"));

    journal(&dir)
        .args(["show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Second draft"))
        .stdout(predicate::str::contains("Personal"));

    journal(&dir)
        .args(["delete", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry deleted: Final"));

    journal(&dir)
        .args(["show", id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn test_delete_unknown_id_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    journal(&dir)
        .args(["delete", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry with ID 12345"));
}

#[test]
fn test_clear_requires_force() {
    let dir = TempDir::new().unwrap();

    journal(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries to clear"));

    create_entry(&dir, &["One"]);
    create_entry(&dir, &["Two"]);

    journal(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    journal(&dir)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 removed"));

    journal(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries found."));
}

#[test]
fn test_stats() {
    let dir = TempDir::new().unwrap();
    create_entry(&dir, &["one two three", "--category", "Work"]);
    create_entry(&dir, &["four five"]);

    journal(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries:   2"))
        .stdout(predicate::str::contains("Total words:     5"))
        .stdout(predicate::str::contains("Work"));
}

#[test]
fn test_export_text_and_empty() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("journal.txt");

    journal(&dir)
        .args(["export", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entries to export"));

    create_entry(&dir, &["Exported words", "--title", "Export me"]);

    journal(&dir)
        .args(["export", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 entries"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("MY DAILY JOURNAL"));
    assert!(contents.contains("Exported words"));
    assert!(!contents.contains("Title:"));
    assert!(contents.ends_with("Total entries: 1"));
}

#[test]
fn test_theme_toggle() {
    let dir = TempDir::new().unwrap();

    journal(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current theme: light"));

    journal(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to: dark"));

    journal(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current theme: dark"));
}

#[test]
fn test_quote_offline() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "offline_quotes": true }"#,
    )
    .unwrap();

    journal(&dir)
        .arg("quote")
        .assert()
        .success()
        .stdout(predicate::str::contains("\" - "));
}

#[test]
fn test_corrupt_journal_starts_empty() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("journal.json"), "{ not json").unwrap();

    journal(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries found."));
}

#[test]
fn test_invalid_utf8_journal_starts_empty() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("journal.json"), [0xff, 0xfe, b'{', b'}']).unwrap();

    journal(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries found."));

    create_entry(&dir, &["Fresh start"]);

    journal(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh start"));
}
