//! Binary-level tests: exit codes, usage guidance and the default output path.

mod common;

use assert_cmd::Command;
use common::{Canned, FakeServer, fake_png};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const ENV_KEYS: &[&str] = &[
    "SENTINEL_HUB_TOKEN",
    "SENTINEL_HUB_CLIENT_ID",
    "SENTINEL_HUB_CLIENT_SECRET",
    "SENTINEL_HUB_URL",
    "DETECTION_MODE",
    "RUST_LOG",
];

fn cmd(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("seawatch").unwrap();
    for key in ENV_KEYS {
        cmd.env_remove(key);
    }
    cmd.current_dir(workdir.path());
    cmd
}

#[test]
fn missing_credentials_exit_one_with_usage() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("No usable credentials"))
        .stderr(contains("SENTINEL_HUB_CLIENT_SECRET"));
    assert!(!dir.path().join("satellite_image.png").exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn client_pair_plastic_writes_default_path() {
    let dir = TempDir::new().unwrap();
    let png = fake_png(2048);
    let server = FakeServer::start(vec![Canned::token("issued"), Canned::png(png.clone())]);

    cmd(&dir)
        .env("SENTINEL_HUB_URL", &server.base_url)
        .env("SENTINEL_HUB_CLIENT_ID", "client")
        .env("SENTINEL_HUB_CLIENT_SECRET", "secret")
        .env("DETECTION_MODE", "plastic")
        .assert()
        .success()
        .stdout(contains("2048 bytes"));

    let written = std::fs::read(dir.path().join("satellite_image.png")).unwrap();
    assert_eq!(written, png);

    let seen = server.finish();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].body_text().contains("grant_type=client_credentials"));
    assert_eq!(seen[1].header("authorization"), Some("Bearer issued"));
    assert_eq!(
        seen[1].body_json()["input"]["data"][0]["type"],
        "sentinel-2-l2a"
    );
}

#[test]
fn token_argument_and_output_path() {
    let dir = TempDir::new().unwrap();
    let png = fake_png(777);
    let server = FakeServer::start(vec![Canned::png_chunked(png.clone())]);

    cmd(&dir)
        .env("SENTINEL_HUB_URL", &server.base_url)
        .args(["--token", "cli-token", "slick.png"])
        .assert()
        .success();

    assert_eq!(std::fs::read(dir.path().join("slick.png")).unwrap(), png);
    let seen = server.finish();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].header("authorization"), Some("Bearer cli-token"));
    assert_eq!(
        seen[0].body_json()["input"]["data"][0]["type"],
        "sentinel-1-grd"
    );
}

#[test]
fn provider_failure_exits_one_without_usage() {
    let dir = TempDir::new().unwrap();
    let server = FakeServer::start(vec![Canned::json(403, "{\"error\":\"forbidden\"}")]);

    cmd(&dir)
        .env("SENTINEL_HUB_URL", &server.base_url)
        .env("SENTINEL_HUB_TOKEN", "expired")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Provider request failed"))
        .stderr(contains("403"))
        .stderr(contains("Failed at stage").not())
        .stderr(contains("SENTINEL_HUB_CLIENT_SECRET=").not());

    assert!(!dir.path().join("satellite_image.png").exists());
    server.finish();
}
