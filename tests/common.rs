#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bdreminder::db::store::BirthdayStore;
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bdr() -> Command {
    cargo_bin_cmd!("bdreminder")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bdreminder.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Initialize a DB through the CLI (test mode: config file untouched)
pub fn init_db(db_path: &str) {
    bdr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn memory_store() -> BirthdayStore {
    BirthdayStore::open_in_memory().expect("in-memory store")
}
