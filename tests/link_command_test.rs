mod common;

use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn link_appends_page_param() {
    let dir = TempDir::new().unwrap();
    common::pagenav(dir.path())
        .args(["link", "--url", "http://example.com/list?q=a", "--page", "4"])
        .assert()
        .success()
        .stdout(predicate::str::diff("http://example.com/list?q=a&page=4\n"));
}

#[test]
fn link_json_reports_param() {
    let dir = TempDir::new().unwrap();
    let value = common::run_json(
        dir.path(),
        ["link", "--url", "/list?page=2#top", "--page", "3"],
    );
    assert_eq!(value["href"], "/list?page=3#top");
    assert_eq!(value["param"], "page");
}

#[test]
fn link_respects_env_page_param() {
    let dir = TempDir::new().unwrap();
    common::pagenav(dir.path())
        .env("PAGENAV_PAGE_PARAM", "pg")
        .args(["link", "--url", "/list?pg=1&page=1", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/list?pg=2&page=1"));
}

#[test]
fn blank_page_param_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let output = common::pagenav(dir.path())
        .env("PAGENAV_PAGE_PARAM", "  ")
        .args(["link", "--json", "--url", "/list", "--page", "2"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json");
    assert_eq!(value["error"]["kind"], "Config");
    assert!(value["error"]["message"].as_str().unwrap().contains("pageParam"));
}
