#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir so the user's
/// real configuration is never read.
pub fn mlg() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("mobilog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("mobilog");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mobilog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB and register the given people.
pub fn init_db_with_people(db_path: &str, people: &[&str]) {
    mlg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for name in people {
        mlg()
            .args(["--db", db_path, "person", "add", name])
            .assert()
            .success();
    }
}

/// Run a session action (`in`, `out`, `lunch start`, `lunch end`) at a fixed day and time.
pub fn act(db_path: &str, action: &[&str], person: &str, at: &str) -> assert_cmd::assert::Assert {
    let mut args: Vec<&str> = vec!["--db", db_path];
    args.extend_from_slice(action);
    args.extend_from_slice(&[person, "--date", "2025-03-10", "--at", at]);
    mlg().args(args).assert()
}
