#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the movie-cli binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn movie_cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_movie-cli"));
    cmd.stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("RUST_LOG")
        .env_remove("APP__MOVIE_QUERY__API_KEY")
        .env_remove("APP__MOVIE_QUERY__BASE_URL");
    cmd
}

fn run(args: &[&str]) -> Output {
    movie_cli()
        .args(args)
        .output()
        .expect("failed to execute movie-cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_help_lists_commands() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let out = stdout(&output);
    for word in ["Usage:", "calc", "search", "find", "check", "--config"] {
        assert!(out.contains(word), "help should mention {word}: {out}");
    }
}

#[test]
fn test_calc_prints_running_totals() {
    let output = run(&["calc", "add", "5", "mul", "3", "sub", "2"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "5\n15\n13\n");
}

#[test]
fn test_calc_accepts_symbols_and_negative_operands() {
    let output = run(&["calc", "+", "-4", "*", "2.5", "/", "-2"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "-4\n-10\n5\n");
}

#[test]
fn test_calc_division_by_zero_fails_after_last_good_total() {
    let output = run(&["calc", "add", "10", "div", "0"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "10\n");
    assert!(stderr(&output).contains("division by zero"));
}

#[test]
fn test_calc_rejects_bad_tokens() {
    let output = run(&["calc", "pow", "2"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("pow"));
}

#[test]
fn test_check_redacts_api_key() {
    let file = config_file("movie_query:\n  api_key: very-secret-key\n");
    let output = run(&["check", "--config", file.path().to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(!out.contains("very-secret-key"));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["movie_query"]["api_key"], "[REDACTED]");
    assert_eq!(json["movie_query"]["base_url"], "https://www.omdbapi.com/");
}

#[test]
fn test_check_without_api_key_fails() {
    let output = run(&["check"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("api_key"));
}

#[test]
fn test_missing_config_file_fails() {
    let output = run(&["check", "--config", "/no/such/movie-cli.yaml"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("does not exist"));
}

#[test]
fn test_env_overrides_file_and_flag_overrides_env() {
    let file = config_file("movie_query:\n  api_key: from-file\n  user_agent: file-agent/1\n");
    let output = movie_cli()
        .args(["check", "--config", file.path().to_str().unwrap()])
        .env("APP__MOVIE_QUERY__USER_AGENT", "env-agent/1")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["movie_query"]["user_agent"], "env-agent/1");

    let output = movie_cli()
        .args(["check", "--api-key", "from-flag"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn test_search_rejects_unknown_type() {
    let output = run(&["search", "alien", "--type", "podcast"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("podcast"));
}

#[cfg(any(debug_assertions, feature = "allow-insecure-http"))]
mod against_mock_server {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn with_server(server: &MockServer) -> Command {
        let mut cmd = movie_cli();
        cmd.env("APP__MOVIE_QUERY__BASE_URL", server.url("/"))
            .env("APP__MOVIE_QUERY__ALLOW_INSECURE_HTTP", "true")
            .env("APP__MOVIE_QUERY__API_KEY", "smoke-key");
        cmd
    }

    #[test]
    fn test_find_prints_record() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .query_param("i", "tt0076759")
                .query_param("apikey", "smoke-key");
            then.status(200).json_body(json!({
                "Title": "Star Wars: Episode IV - A New Hope",
                "Year": "1977",
                "imdbID": "tt0076759",
                "Type": "movie",
                "Response": "True"
            }));
        });

        let output = with_server(&server).args(["find", "tt0076759"]).output().unwrap();
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        mock.assert();

        let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(json["imdbID"], "tt0076759");
        assert_eq!(json["Title"], "Star Wars: Episode IV - A New Hope");
    }

    #[test]
    fn test_find_reports_server_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(500).body("Server is broken");
        });

        let output = with_server(&server).args(["find", "tt0076759"]).output().unwrap();
        assert!(!output.status.success());
        assert!(stderr(&output).contains("Server is broken"));
    }

    #[test]
    fn test_search_with_options() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .query_param("s", "alien")
                .query_param("type", "movie")
                .query_param("page", "1");
            then.status(200).json_body(json!({
                "Search": [
                    {"Title": "Alien", "Year": "1979", "imdbID": "tt0078748", "Type": "movie", "Poster": "N/A"}
                ],
                "totalResults": "1",
                "Response": "True"
            }));
        });

        let output = with_server(&server)
            .args(["search", "alien", "--type", "movie", "--page", "1"])
            .output()
            .unwrap();
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        mock.assert();

        let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(json["Search"][0]["imdbID"], "tt0078748");
        assert_eq!(json["totalResults"], "1");
    }
}
