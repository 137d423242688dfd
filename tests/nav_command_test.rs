mod common;

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn nav_first_page_links_forward() {
    let dir = TempDir::new().unwrap();
    let value = common::run_json(
        dir.path(),
        ["nav", "--total", "47", "--page", "1", "--url", "http://localhost:8080/posts?tag=rust"],
    );

    let nav = &value["navigation"];
    assert!(nav["first"].is_null());
    assert!(nav["prev"].is_null());
    assert_eq!(nav["next"]["href"], "http://localhost:8080/posts?tag=rust&page=2");
    assert_eq!(nav["last"]["page"], 10);
    assert_eq!(nav["pageList"].as_array().unwrap().len(), 9);
    assert_eq!(nav["totalText"], "47 records");
    assert_eq!(nav["pagesText"], "10 pages");
    assert_eq!(nav["goToPage"]["inputSize"], 3);
    assert_eq!(nav["goToPage"]["submitLabel"], "Go");
    assert_eq!(common::current_pages(&value), vec![1]);
}

#[test]
fn nav_last_page_replaces_existing_param() {
    let dir = TempDir::new().unwrap();
    let value = common::run_json(
        dir.path(),
        ["nav", "--total", "47", "--page", "10", "--url", "/posts?page=3&sort=new"],
    );

    let nav = &value["navigation"];
    assert!(nav["next"].is_null());
    assert!(nav["last"].is_null());
    assert_eq!(nav["first"]["href"], "/posts?page=1&sort=new");
    assert_eq!(nav["prev"]["href"], "/posts?page=9&sort=new");
    assert_eq!(nav["pageList"][0]["pageNumber"], 2);
    assert_eq!(common::current_pages(&value), vec![10]);
}

#[test]
fn nav_empty_set_has_no_links() {
    let dir = TempDir::new().unwrap();
    let value = common::run_json(dir.path(), ["nav", "--total", "0"]);
    let nav = &value["navigation"];
    for key in ["first", "prev", "next", "last"] {
        assert!(nav[key].is_null(), "{} should be empty", key);
    }
    assert_eq!(nav["pageList"][0]["link"], "/?page=1");
    assert_eq!(common::current_pages(&value), vec![1]);
}

#[test]
fn nav_uses_profile_labels_and_page_param() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".pagenav");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.yaml"),
        "settings:\n  paging:\n    pageParam: p\nprofiles:\n  zh:\n    labels:\n      total: \"共?条记录\"\n      pages: \"共?页\"\n",
    )
    .unwrap();

    let value = common::run_json(
        dir.path(),
        ["nav", "--total", "47", "--page", "2", "--url", "/list", "--profile", "zh"],
    );
    let nav = &value["navigation"];
    assert_eq!(nav["totalText"], "共47条记录");
    assert_eq!(nav["pagesText"], "共10页");
    assert_eq!(nav["prev"]["href"], "/list?p=1");
}

#[test]
fn nav_writes_page_list_csv() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("pages.csv");
    common::pagenav(dir.path())
        .args(["nav", "--total", "20", "--page", "2", "--quiet", "--csv"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&csv_path).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "page,current,link");
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], "2,true,/?page=2");
}

#[test]
fn nav_table_output_shows_pager_line() {
    let dir = TempDir::new().unwrap();
    common::pagenav(dir.path())
        .args(["nav", "--total", "47", "--page", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("« 1 2 3 4 [5] 6 7 8 9 »"))
        .stdout(predicate::str::contains("47 records"));
}
