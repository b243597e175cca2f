mod common;

use common::TestFixture;
use predicates::prelude::*;

/// An endpoint nothing listens on. Tests that must not reach the network
/// still need a syntactically valid one.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

#[test]
fn gate_blocks_invalid_payload_before_any_network_call() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("bad.json", r#"["a", "b"]"#);

    // A connection error would mean a request was attempted; the shape
    // message proves the gate closed first.
    fixture
        .command()
        .arg("--endpoint")
        .arg(DEAD_ENDPOINT)
        .arg("submit")
        .arg(&payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The input must be a JSON object with a 'data' array.",
        ))
        .stderr(predicate::str::contains("error sending request").not());
}

#[test]
fn submits_payload_and_prints_projection() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("good.json", r#"{"data": ["a", "1", "B"]}"#);

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/bfhl")
        .match_body(mockito::Matcher::Json(
            serde_json::json!({"data": ["a", "1", "B"]}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"is_success":true,"alphabets":["M","B"],"numbers":[],"highest_lowercase_alphabet":["b"]}"#,
        )
        .create();

    fixture
        .command()
        .arg("--endpoint")
        .arg(server.url())
        .arg("submit")
        .arg(&payload)
        .arg("--select")
        .arg("alphabets")
        .arg("--select")
        .arg("numbers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alphabets: M, B"))
        // numbers is selected but empty, so it is omitted
        .stdout(predicate::str::contains("Numbers").not());

    mock.assert();
}

#[test]
fn default_selection_shows_every_nonempty_field() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("good.json", r#"{"data": ["b", "7"]}"#);

    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/bfhl")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"is_success":true,"alphabets":["b"],"numbers":["7"],"highest_lowercase_alphabet":["b"]}"#,
        )
        .create();

    fixture
        .command()
        .arg("--endpoint")
        .arg(server.url())
        .arg("submit")
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alphabets: b"))
        .stdout(predicate::str::contains("Numbers: 7"))
        .stdout(predicate::str::contains("Highest Lowercase Alphabet: b"));
}

#[test]
fn service_failure_surfaces_processing_message() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("good.json", r#"{"data": ["a"]}"#);

    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/bfhl")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"is_success":false}"#)
        .create();

    fixture
        .command()
        .arg("--endpoint")
        .arg(server.url())
        .arg("submit")
        .arg(&payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error processing request."));
}

#[test]
fn transport_failure_surfaces_error() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("good.json", r#"{"data": ["a"]}"#);

    fixture
        .command()
        .arg("--endpoint")
        .arg(DEAD_ENDPOINT)
        .arg("submit")
        .arg(&payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn json_format_prints_selected_fields() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("good.json", r#"{"data": ["M"]}"#);

    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/bfhl")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"is_success":true,"alphabets":["M"],"numbers":[],"highest_lowercase_alphabet":[]}"#,
        )
        .create();

    fixture
        .command()
        .arg("--format")
        .arg("json")
        .arg("--endpoint")
        .arg(server.url())
        .arg("submit")
        .arg(&payload)
        .arg("--select")
        .arg("alphabets")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""alphabets""#))
        .stdout(predicate::str::contains(r#""M""#));
}
