// ABOUTME: Integration tests for the lexicard CLI binary.
// ABOUTME: Drives lookups against a mock dictionary server and checks console output, export file and exit codes.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const TEST_PAGE: &str = r#"<html><body>
<div class="phonetics"><span class="phon">/test/</span></div>
<span class="pos">noun</span>
<ol class="senses_multiple">
  <li><span class="def">A procedure to check quality</span>
    <ul class="examples"><li><span class="x">This is a test.</span></li></ul></li>
  <li><span class="def">An examination of knowledge</span>
    <ul class="examples"><li><span class="x">The test was difficult.</span></li></ul></li>
</ol>
</body></html>"#;

const MINIMAL_PAGE: &str =
    r#"<html><body><div class="sense-body"><span class="def">Single definition</span></div></body></html>"#;

fn lexicard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lexicard").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn serve<'a>(server: &'a MockServer, slug: &str, body: &'static str) -> httpmock::Mock<'a> {
    let path = format!("/definition/english/{}", slug);
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(body);
    })
}

#[test]
fn no_words_fails_with_help() {
    lexicard_cmd()
        .assert()
        .failure()
        .stdout(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains(
            "Please provide words to search either as arguments or via -f/--file",
        ));
}

#[test]
fn unreadable_word_file_fails_before_fetching() {
    let temp_dir = TempDir::new().unwrap();

    lexicard_cmd()
        .arg("--base-url")
        .arg("http://127.0.0.1:9/definition/english/")
        .arg("test")
        .arg("-f")
        .arg(temp_dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"))
        .stderr(predicate::str::contains("Searching").not());
}

#[test]
fn prints_display_block() {
    let server = MockServer::start();
    let mock = serve(&server, "test", TEST_PAGE);

    lexicard_cmd()
        .arg("--base-url")
        .arg(server.url("/definition/english/"))
        .arg("Test")
        .assert()
        .success()
        .stderr(predicate::str::contains("Searching for 'Test'..."))
        .stdout(predicate::str::contains("Word: Test"))
        .stdout(predicate::str::contains("Pronunciation: /test/"))
        .stdout(predicate::str::contains("  1. A procedure to check quality"))
        .stdout(predicate::str::contains("  • The test was difficult."));

    mock.assert();
}

#[test]
fn quiet_suppresses_console_output() {
    let server = MockServer::start();
    serve(&server, "test", TEST_PAGE);

    lexicard_cmd()
        .arg("--base-url")
        .arg(server.url("/definition/english/"))
        .arg("-q")
        .arg("test")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Searching").not());
}

#[test]
fn json_lines_output() {
    let server = MockServer::start();
    serve(&server, "minimal", MINIMAL_PAGE);

    lexicard_cmd()
        .arg("--base-url")
        .arg(server.url("/definition/english/"))
        .arg("--json")
        .arg("minimal")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"word":"minimal","definitions":["Single definition"],"examples":[]}"#,
        ));
}

#[test]
fn exports_tsv_for_words_from_args_and_file() {
    let server = MockServer::start();
    let test_mock = serve(&server, "test", TEST_PAGE);
    let minimal_mock = serve(&server, "minimal", MINIMAL_PAGE);
    let missing_mock = server.mock(|when, then| {
        when.method(GET).path("/definition/english/zzzz");
        then.status(404);
    });

    let temp_dir = TempDir::new().unwrap();
    let word_file = temp_dir.path().join("words.txt");
    fs::write(&word_file, "\n  minimal  \n\nzzzz\n").unwrap();
    let output_path = temp_dir.path().join("anki.tsv");

    lexicard_cmd()
        .arg("--base-url")
        .arg(server.url("/definition/english/"))
        .arg("test")
        .arg("-f")
        .arg(&word_file)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error fetching data for 'zzzz'"))
        .stderr(predicate::str::contains("No results found for 'zzzz'"))
        .stderr(predicate::str::contains("Results exported to"));

    test_mock.assert();
    minimal_mock.assert();
    missing_mock.assert();

    let exported = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = exported.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Word\tPronunciation\tPart of Speech\tDefinitions\tExamples",
            "test\t/test/\tnoun\t1. A procedure to check quality<br>2. An examination of knowledge\t• This is a test.<br>• The test was difficult.",
            "minimal\t\t\t1. Single definition\t",
        ]
    );
}

#[test]
fn no_results_exits_nonzero_and_skips_export() {
    let server = MockServer::start();
    serve(&server, "empty", "<html><body><span class=\"pos\">noun</span></body></html>");
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("anki.tsv");

    lexicard_cmd()
        .arg("--base-url")
        .arg(server.url("/definition/english/"))
        .arg("empty")
        .arg("-o")
        .arg(&output_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No results found for 'empty'"));

    assert!(!output_path.exists());
}

#[test]
fn unwritable_output_fails() {
    let server = MockServer::start();
    serve(&server, "test", TEST_PAGE);
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("no-such-dir").join("anki.tsv");

    lexicard_cmd()
        .arg("--base-url")
        .arg(server.url("/definition/english/"))
        .arg("-q")
        .arg("test")
        .arg("-o")
        .arg(&output_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error writing to file"));
}

#[test]
fn custom_rules_file() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/entries/word");
        then.status(200)
            .body(r#"<html><body><p class="meaning">a unit of language</p></body></html>"#);
    });

    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("rules.json");
    let rules = format!(
        r#"{{"name":"custom","base_url":"{}","definitions":["p.meaning"]}}"#,
        server.url("/entries/")
    );
    fs::write(&rules_path, rules).unwrap();

    lexicard_cmd()
        .arg("--rules")
        .arg(&rules_path)
        .arg("word")
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. a unit of language"));

    mock.assert();
}

#[test]
fn unreadable_rules_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    lexicard_cmd()
        .arg("--rules")
        .arg(temp_dir.path().join("nope.json"))
        .arg("word")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read rules file"));
}

#[test]
fn zero_timeout_is_rejected() {
    lexicard_cmd()
        .arg("--timeout")
        .arg("0")
        .arg("word")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--timeout"))
        .stderr(predicate::str::contains("Searching").not());
}
