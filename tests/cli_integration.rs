//! Integration tests for the ipgeolocation CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.  Each
//! test points `HOME` at a temporary directory so the stored key never
//! touches the real user config.  Network tests run against a local
//! `wiremock` server via `IPGEOLOCATION_API_URL`.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: get a Command pointing at the ipgeolocation binary with an
/// isolated home directory.
fn ipgeolocation(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("ipgeolocation").expect("binary should exist");
    cmd.env("HOME", home.path())
        .env("USERPROFILE", home.path())
        .env_remove("IPGEOLOCATION_API_URL")
        .env_remove("RUST_LOG")
        .current_dir(home.path());
    cmd
}

fn save_key(home: &TempDir, key: &str) {
    ipgeolocation(home)
        .args(["config", "--apikey", key])
        .assert()
        .success()
        .stdout(predicate::str::contains("API key saved securely."));
}

#[test]
fn help_flag_lists_commands() {
    let tmp = TempDir::new().unwrap();
    ipgeolocation(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "CLI for accessing IPGeolocation.io API endpoints",
        ))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("ipgeo"))
        .stdout(predicate::str::contains("bulk-ip-geo"))
        .stdout(predicate::str::contains("ip-security"))
        .stdout(predicate::str::contains("bulk-ip-security"))
        .stdout(predicate::str::contains("asn"))
        .stdout(predicate::str::contains("abuse"))
        .stdout(predicate::str::contains("timezone"))
        .stdout(predicate::str::contains("time-conversion"))
        .stdout(predicate::str::contains("astronomy-timeseries"))
        .stdout(predicate::str::contains("parse-user-agent"))
        .stdout(predicate::str::contains("parse-bulk-user-agents"));
}

#[test]
fn version_flag_shows_version() {
    let tmp = TempDir::new().unwrap();
    ipgeolocation(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ipgeolocation"));
}

#[test]
fn no_args_shows_usage() {
    let tmp = TempDir::new().unwrap();
    ipgeolocation(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_without_key_warns() {
    let tmp = TempDir::new().unwrap();
    ipgeolocation(&tmp)
        .arg("config")
        .assert()
        .success()
        .stderr(predicate::str::contains("No API key configured."));
}

#[test]
fn config_stores_encrypted_key_and_shows_it_masked() {
    let tmp = TempDir::new().unwrap();
    save_key(&tmp, "abcdef0123456789");

    let config = tmp.child(".ipgeolocation/config.json");
    config.assert(predicate::path::exists());
    config.assert(predicate::str::contains("\"apikey\""));
    config.assert(predicate::str::contains("abcdef0123456789").not());

    ipgeolocation(&tmp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("********56789"));
}

#[test]
fn config_overwrites_previous_key() {
    let tmp = TempDir::new().unwrap();
    save_key(&tmp, "first-key-11111");
    save_key(&tmp, "second-key-22222");

    ipgeolocation(&tmp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("********22222"));
}

#[test]
fn config_under_other_home_cannot_decrypt() {
    let tmp = TempDir::new().unwrap();
    save_key(&tmp, "abcdef0123456789");

    // Same file, different identity: the derived key no longer matches.
    let stored = std::fs::read_to_string(tmp.child(".ipgeolocation/config.json").path()).unwrap();
    let other = TempDir::new().unwrap();
    other
        .child(".ipgeolocation/config.json")
        .write_str(&stored)
        .unwrap();

    ipgeolocation(&other)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("authentication"));
}

// ---------------------------------------------------------------------------
// Argument validation (no network)
// ---------------------------------------------------------------------------

#[test]
fn lookup_without_key_fails() {
    let tmp = TempDir::new().unwrap();
    ipgeolocation(&tmp)
        .args(["ipgeo", "--ip", "8.8.8.8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key not found"));
}

#[test]
fn unknown_output_format_fails_before_request() {
    let tmp = TempDir::new().unwrap();
    save_key(&tmp, "abcdef0123456789");

    ipgeolocation(&tmp)
        .env("IPGEOLOCATION_API_URL", "http://127.0.0.1:1/v2")
        .args(["ipgeo", "--ip", "8.8.8.8", "-o", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn bulk_ip_geo_without_ips_fails() {
    let tmp = TempDir::new().unwrap();
    ipgeolocation(&tmp)
        .arg("bulk-ip-geo")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please provide at least one IP address",
        ));
}

#[test]
fn bulk_ip_security_with_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    ipgeolocation(&tmp)
        .args(["bulk-ip-security", "--file", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error opening file"));
}

#[test]
fn astronomy_timeseries_requires_both_dates() {
    let tmp = TempDir::new().unwrap();
    ipgeolocation(&tmp)
        .args(["astronomy-timeseries", "--start-date", "2025-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please provide both start and end dates.",
        ));
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    ipgeolocation(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ipgeolocation"));
}

#[test]
fn completions_for_unknown_shell_fails() {
    let tmp = TempDir::new().unwrap();
    ipgeolocation(&tmp)
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// End-to-end against a mock API
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread")]
async fn ipgeo_renders_table_from_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/ipgeo"))
        .and(query_param("apiKey", "abcdef0123456789"))
        .and(query_param("ip", "8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "8.8.8.8",
            "location": { "country_name": "United States" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/v2", server.uri());
    tokio::task::spawn_blocking(move || {
        let tmp = TempDir::new().unwrap();
        save_key(&tmp, "abcdef0123456789");

        ipgeolocation(&tmp)
            .env("IPGEOLOCATION_API_URL", &base)
            .args(["ipgeo", "--ip", "8.8.8.8", "--output", "table"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Ip                  : 8.8.8.8"))
            .stdout(predicate::str::contains("Location:"))
            .stdout(predicate::str::contains(
                "  Country Name        : United States",
            ));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn api_error_is_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/abuse"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})),
        )
        .mount(&server)
        .await;

    let base = format!("{}/v2", server.uri());
    tokio::task::spawn_blocking(move || {
        let tmp = TempDir::new().unwrap();
        save_key(&tmp, "bad-key-00000");

        ipgeolocation(&tmp)
            .env("IPGEOLOCATION_API_URL", &base)
            .args(["abuse", "--ip", "1.2.3.4"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error (401)"))
            .stderr(predicate::str::contains("Invalid API key"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn bulk_ip_geo_merges_flag_and_file_ips_and_saves_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ipgeo-bulk"))
        .and(body_json(json!({"ips": ["8.8.8.8", "1.1.1.1", "9.9.9.9"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"ip": "8.8.8.8"}, {"ip": "1.1.1.1"}, {"ip": "9.9.9.9"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/v2", server.uri());
    tokio::task::spawn_blocking(move || {
        let tmp = TempDir::new().unwrap();
        save_key(&tmp, "abcdef0123456789");
        tmp.child("ips.txt").write_str("1.1.1.1\n\n 9.9.9.9 \n").unwrap();

        ipgeolocation(&tmp)
            .env("IPGEOLOCATION_API_URL", &base)
            .args([
                "bulk-ip-geo",
                "--ips",
                "8.8.8.8",
                "--file",
                "ips.txt",
                "--output-file",
                "result",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Output saved to file: result.json"));

        let saved = tmp.child("result.json");
        saved.assert(predicate::path::exists());
        saved.assert(predicate::str::contains("\"9.9.9.9\""));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn raw_output_is_the_response_body() {
    let server = MockServer::start().await;
    let raw = r#"{"name":"curl","type":"Robot"}"#;
    Mock::given(method("POST"))
        .and(path("/v2/user-agent"))
        .and(body_json(json!({"uaString": "curl/8.0"})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(raw, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/v2", server.uri());
    tokio::task::spawn_blocking(move || {
        let tmp = TempDir::new().unwrap();
        save_key(&tmp, "abcdef0123456789");

        ipgeolocation(&tmp)
            .env("IPGEOLOCATION_API_URL", &base)
            .args(["parse-user-agent", "--user-agent", "curl/8.0", "-o", "raw"])
            .assert()
            .success()
            .stdout(format!("{raw}\n"));
    })
    .await
    .unwrap();
}
