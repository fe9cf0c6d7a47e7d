//! Integration tests for the Treasury CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SENTENCE: &str = "The Lord Jesus will not break the bruised reed, nor quench the smoking flax, but will cherish the least beginnings of grace in his people.";

/// Devotional source with two chapters long enough to survive segmentation
fn sibbes_text() -> String {
    format!(
        "The Bruised Reed, by Richard Sibbes\n\
         # 1. The Reed\n\n{s} {s}\n\n[Back To Top]\n\n\
         ## 2. Smoking Flax\n\n**{s}** {s}\n",
        s = SENTENCE
    )
}

fn create_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create test dir");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn create_manifest(dir: &TempDir, source: &str) -> PathBuf {
    let manifest = format!(
        r#"{{
            "books": [{{
                "id": "bruised-reed",
                "title": "The Bruised Reed",
                "author": "Richard Sibbes",
                "year": 1630,
                "description": "Christ's gentleness with weak believers.",
                "topics": ["Grace", "Comfort"],
                "source": "{}",
                "format": "devotional"
            }}],
            "plans": [{{
                "planId": "reed-2",
                "bookId": "bruised-reed",
                "duration": 2,
                "schedule": [{{ "day": 1, "title": "The Reed" }}, {{ "day": 2, "title": "The Flax" }}]
            }}]
        }}"#,
        source
    );
    create_file(dir, "manifest.json", &manifest)
}

/// Build a catalog from the sample source and return its path
fn build_catalog(dir: &TempDir) -> PathBuf {
    create_file(dir, "texts/sibbes.md", &sibbes_text());
    let manifest = create_manifest(dir, "texts/sibbes.md");
    let output = dir.path().join("out/books.json");

    Command::cargo_bin("treasury-cli")
        .unwrap()
        .arg("build")
        .arg(&manifest)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    output
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("daily"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treasury"));
}

#[test]
fn test_build_help() {
    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.args(["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Build a catalog"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--jobs"));
}

#[test]
fn test_parse_prints_chapters() {
    let dir = TempDir::new().unwrap();
    let input = create_file(&dir, "sibbes.md", &sibbes_text());

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("parse")
        .arg(&input)
        .args(["--format", "sibbes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. The Reed"))
        .stdout(predicate::str::contains("2. Smoking Flax"));
}

#[test]
fn test_parse_json_output() {
    let dir = TempDir::new().unwrap();
    let input = create_file(&dir, "sibbes.md", &sibbes_text());

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    let output = cmd
        .arg("parse")
        .arg(&input)
        .args(["--format", "devotional", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let chapters: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let chapters = chapters.as_array().unwrap();
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[1]["id"], 2);
    assert_eq!(chapters[1]["title"], "2. Smoking Flax");
    assert!(!chapters[1]["content"].as_str().unwrap().contains("**"));
}

#[test]
fn test_parse_below_threshold() {
    let dir = TempDir::new().unwrap();
    let input = create_file(&dir, "short.md", "## Chapter 1: Brief\n\nToo short.\n");

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("parse")
        .arg(&input)
        .args(["--format", "exposition"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No chapters found"));
}

#[test]
fn test_parse_unknown_format() {
    let dir = TempDir::new().unwrap();
    let input = create_file(&dir, "sibbes.md", &sibbes_text());

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("parse")
        .arg(&input)
        .args(["--format", "epub"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a source format"));
}

#[test]
fn test_parse_nonexistent_file() {
    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.args(["parse", "/nonexistent/file.md", "--format", "owen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_build_writes_catalog() {
    let dir = TempDir::new().unwrap();
    let output = build_catalog(&dir);

    assert!(output.exists());
    let catalog: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(catalog["books"][0]["id"], "bruised-reed");
    assert_eq!(catalog["books"][0]["chapters"].as_array().unwrap().len(), 2);
    assert_eq!(catalog["plans"][0]["planId"], "reed-2");
}

#[test]
fn test_build_missing_source_fails() {
    let dir = TempDir::new().unwrap();
    let manifest = create_manifest(&dir, "texts/missing.md");
    let output = dir.path().join("books.json");

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("build")
        .arg(&manifest)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog build failed"));

    assert!(!output.exists());
}

#[test]
fn test_build_invalid_jobs() {
    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.args(["build", "manifest.json", "--output", "books.json", "--jobs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_info_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = build_catalog(&dir);

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("info")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("The Bruised Reed"))
        .stdout(predicate::str::contains("Richard Sibbes"))
        .stdout(predicate::str::contains("Grace, Comfort"));
}

#[test]
fn test_info_json_output() {
    let dir = TempDir::new().unwrap();
    let catalog = build_catalog(&dir);

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    let output = cmd.arg("info").arg(&catalog).arg("--json").output().unwrap();

    assert!(output.status.success());
    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["books"][0]["chapters"], 2);
    assert_eq!(info["plans"], 1);
}

#[test]
fn test_info_nonexistent_file() {
    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.args(["info", "/nonexistent/books.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_validate_built_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = build_catalog(&dir);

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("validate")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid catalog: 1 books, 1 plans"));
}

#[test]
fn test_validate_unreadable_book_strict() {
    let dir = TempDir::new().unwrap();
    let catalog = create_file(
        &dir,
        "books.json",
        r#"{"books": [{"id": "empty", "title": "Empty", "author": "Anonymous",
            "year": 1700, "description": "", "topics": [], "chapters": [],
            "publicDomain": true}]}"#,
    );

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("validate")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning"));

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("validate")
        .arg(&catalog)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_quotes() {
    let dir = TempDir::new().unwrap();
    let input = create_file(&dir, "sibbes.txt", &format!("Short one. {}", SENTENCE));

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("quotes")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(SENTENCE))
        .stdout(predicate::str::contains("Short one").not());
}

#[test]
fn test_quotes_inverted_band() {
    let dir = TempDir::new().unwrap();
    let input = create_file(&dir, "sibbes.txt", SENTENCE);

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("quotes")
        .arg(&input)
        .args(["--min", "300", "--max", "100"])
        .assert()
        .failure();
}

#[test]
fn test_daily_saves_quote() {
    let dir = TempDir::new().unwrap();
    let catalog = build_catalog(&dir);
    let store = dir.path().join("user");

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("daily")
        .arg(&catalog)
        .args(["--date", "2024-01-01", "--save"])
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("Richard Sibbes"))
        .stdout(predicate::str::contains("Saved as"));

    let saved = fs::read_to_string(store.join("puritanTreasuryQuotes.json")).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(saved.as_array().unwrap().len(), 1);
    assert_eq!(saved[0]["bookId"], "bruised-reed");
    assert_eq!(saved[0]["tags"][0], "daily");
}

#[test]
fn test_daily_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = create_file(&dir, "books.json", r#"{"books": []}"#);

    let mut cmd = Command::cargo_bin("treasury-cli").unwrap();
    cmd.arg("daily")
        .arg(&catalog)
        .args(["--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes available"));
}
