//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `quizapp` command isolated from any config in the caller's environment.
fn quizapp(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizapp").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn lines(steps: &[&str]) -> String {
    let mut input = steps.join("\n");
    input.push('\n');
    input
}

#[test]
fn exit_immediately() {
    let dir = TempDir::new().unwrap();
    quizapp(&dir)
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Welcome to Quiz App ==="))
        .stdout(predicate::str::contains("5. Exit"))
        .stdout(predicate::str::contains("Thank you for using the Quiz App!"));
}

#[test]
fn register_login_and_take_quiz() {
    let dir = TempDir::new().unwrap();
    let input = lines(&[
        "1", "Alice", "a@b.com", "E1", "pw", "pw", // register
        "2", "a@b.com", "pw", // login
        "3", "1", "1", "2", "2", // Python Basics: wrong, right, right
        "4", "5",
    ]);

    quizapp(&dir)
        .arg("play")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Registration successful!"))
        .stdout(predicate::str::contains("Welcome Alice!"))
        .stdout(predicate::str::contains("What is the output of 3 + 2 * 2?"))
        .stdout(predicate::str::contains("2. 7"))
        .stdout(predicate::str::contains("Wrong answer. Try again."))
        .stdout(predicate::str::contains("=== Quiz Result ==="))
        .stdout(predicate::str::contains(
            "Subject: Python Basics\nCorrect Answers: 2\nWrong Attempts: 1\nTotal Attempts: 3",
        ))
        .stdout(predicate::str::contains("Attempt 1:"));
}

#[test]
fn quiz_without_login() {
    let dir = TempDir::new().unwrap();
    quizapp(&dir)
        .write_stdin(lines(&["2", "nobody@b.com", "pw", "3", "5"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid email or password!"))
        .stdout(predicate::str::contains("Please login first!"))
        .stdout(predicate::str::contains("=== Quiz Section ===").not());
}

#[test]
fn end_of_input_at_menu_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    quizapp(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you for using the Quiz App!"));
}

#[test]
fn end_of_input_during_registration_fails() {
    let dir = TempDir::new().unwrap();
    quizapp(&dir)
        .write_stdin("1\nAlice\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: input stream closed"));
}

#[test]
fn config_can_hide_explanations() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("quizapp.toml"), "show_explanations = false\n").unwrap();

    let input = lines(&[
        "1", "Bo", "bo@b.org", "E9", "x", "x", "2", "bo@b.org", "x", "3", "2", "1", "1", "5",
    ]);
    quizapp(&dir)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Explanation:").not());
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    quizapp(&dir)
        .arg("--config")
        .arg("nope.toml")
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn subjects_lists_catalog() {
    let dir = TempDir::new().unwrap();
    quizapp(&dir)
        .arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Python Basics (2 questions)"))
        .stdout(predicate::str::contains("2. DBMS (2 questions)"))
        .stdout(predicate::str::contains("Catalog valid."));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    quizapp(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizapp.toml"));
    assert!(dir.path().join("quizapp.toml").exists());

    quizapp(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
