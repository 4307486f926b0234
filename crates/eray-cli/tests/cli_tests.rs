//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn eray() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("eray").unwrap()
}

#[test]
fn validate_animals_words() {
    eray()
        .arg("validate")
        .arg("--words")
        .arg("../../words/animals.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Xayawaanka - Animals"))
        .stdout(predicate::str::contains("All vocabulary files valid"));
}

#[test]
fn validate_directory() {
    eray()
        .arg("validate")
        .arg("--words")
        .arg("../../words")
        .assert()
        .success()
        .stdout(predicate::str::contains("Animals"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Greetings"));
}

#[test]
fn validate_flags_bad_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
[category]
id = "broken"
name_so = "Jaban"
name_en = "Broken"

[[words]]
id = "w1"
word_so = "kow"
word_en = ""

[[words]]
id = "w1"
word_so = "laba"
word_en = "two"
"#,
    )
    .unwrap();

    eray()
        .arg("validate")
        .arg("--words")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("English term is empty"))
        .stdout(predicate::str::contains("duplicate word id"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    eray()
        .arg("validate")
        .arg("--words")
        .arg("no_such_words.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_starter_words() {
    let dir = TempDir::new().unwrap();

    eray()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created words/starter.toml"));

    assert!(dir.path().join("words/starter.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    eray().current_dir(dir.path()).arg("init").assert().success();

    eray()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_output_passes_validation() {
    let dir = TempDir::new().unwrap();

    eray().current_dir(dir.path()).arg("init").assert().success();

    eray()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--words")
        .arg("words/starter.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("All vocabulary files valid"));
}

#[test]
fn practice_too_few_words_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiny.toml");
    std::fs::write(
        &path,
        r#"
[category]
id = "tiny"
name_so = "Yar"
name_en = "Tiny"

[[words]]
id = "w1"
word_so = "kow"
word_en = "one"
"#,
    )
    .unwrap();

    eray()
        .arg("practice")
        .arg("--words")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 4"));
}

#[test]
fn analyze_nonexistent_session() {
    eray()
        .arg("analyze")
        .arg("--session")
        .arg("no_such_session.json")
        .arg("--words")
        .arg("../../words/animals.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn help_output() {
    eray()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Somali-English vocabulary trainer"));
}

#[test]
fn version_output() {
    eray()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("eray"));
}
