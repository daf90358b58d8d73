//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

use serde_json::json;

use openbmc::cache::{CacheStore, CachedInteraction, CachedResponse};
use openbmc::ports::HttpRequest;

fn run_tool(cwd: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_openbmctool");
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env_remove("OPENBMC_HOST")
        .env_remove("OPENBMC_USER")
        .env_remove("OPENBMC_PASSWORD")
        .env_remove("OPENBMC_OFFLINE")
        .env_remove("OPENBMC_CACHE_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run openbmctool binary")
}

fn offline_args<'a>(cache_dir: &'a str, command: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![
        "--host",
        "bmc",
        "--user",
        "root",
        "--password",
        "0penBmc",
        "--offline",
        "--cache-dir",
        cache_dir,
    ];
    args.extend_from_slice(command);
    args
}

fn save(store: &CacheStore, request: &HttpRequest, body: serde_json::Value) {
    let response = CachedResponse::new(200, body).unwrap();
    store.save(&CachedInteraction::capture(request, &response)).unwrap();
}

#[test]
fn help_lists_commands() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_tool(dir.path(), &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("power-on"));
    assert!(stdout.contains("--offline"));
}

#[test]
fn version_prints_to_stdout_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_tool(dir.path(), &["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with("openbmctool "), "{stdout}");
    assert!(output.stderr.is_empty());
}

#[test]
fn missing_credentials_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_tool(dir.path(), &["power-state"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("--host"));
}

#[test]
fn offline_without_recordings_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().to_str().unwrap();
    let output = run_tool(dir.path(), &offline_args(cache, &["flash-bios"]));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("no cached interaction"), "{stderr}");
}

#[test]
fn offline_replays_recorded_flash_bios() {
    let dir = tempfile::tempdir().unwrap();
    let store = CacheStore::new(dir.path());
    save(
        &store,
        &HttpRequest::post("https://bmc/login", r#"{"data": ["root", "0penBmc"]}"#, false),
        json!({"status": "ok", "data": "User 'root' logged in"}),
    );
    save(
        &store,
        &HttpRequest::get("https://bmc/org/openbmc/control/flash/bios", false),
        json!({"status": "ok", "data": {"filename": "pnor.toc"}}),
    );

    let cache = dir.path().to_str().unwrap();
    let output = run_tool(dir.path(), &offline_args(cache, &["flash-bios"]));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("pnor.toc"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output =
        run_tool(dir.path(), &["--host", "bmc", "--user", "u", "--password", "p", "nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
