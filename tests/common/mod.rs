#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::ffi::OsStr;
use std::path::Path;

/// Binary command isolated from any config in the developer's home or cwd.
pub fn pagenav(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("pagenav");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .env_remove("PAGENAV_CONFIG")
        .env_remove("PAGENAV_PROFILE")
        .env_remove("PAGENAV_PER_PAGE")
        .env_remove("PAGENAV_WINDOW_SIZE")
        .env_remove("PAGENAV_PAGE_PARAM")
        .env_remove("PAGENAV_JSON_PRETTY")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_json<I, S>(dir: &Path, args: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = pagenav(dir);
    cmd.args(args).arg("--json");
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("json")
}

pub fn current_pages(nav: &Value) -> Vec<u64> {
    nav["navigation"]["pageList"]
        .as_array()
        .expect("page list")
        .iter()
        .filter(|item| item["isCurrent"] == true)
        .map(|item| item["pageNumber"].as_u64().expect("page number"))
        .collect()
}
