use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{act, init_db_with_people, mlg, setup_test_db};

#[test]
fn test_board_shows_every_person() {
    let db_path = setup_test_db("board_all");
    init_db_with_people(&db_path, &["Zarina", "Aziz", "Malika"]);

    act(&db_path, &["in"], "Aziz", "09:00").success();
    act(&db_path, &["in"], "Malika", "08:30").success();
    act(&db_path, &["lunch", "start"], "Malika", "12:15").success();

    mlg()
        .args([
            "--db",
            &db_path,
            "status",
            "--date",
            "2025-03-10",
            "--at",
            "12:30",
        ])
        .assert()
        .success()
        .stdout(contains("Status board 2025-03-10"))
        .stdout(contains("Working"))
        .stdout(contains("On lunch"))
        .stdout(contains("Not started"))
        .stdout(contains("3h 30m"))
        .stdout(contains("since 12:15"));
}

#[test]
fn test_board_json_is_sorted_by_name() {
    let db_path = setup_test_db("board_json");
    init_db_with_people(&db_path, &["Zarina", "Aziz"]);

    let out = mlg()
        .args([
            "--db",
            &db_path,
            "status",
            "--date",
            "2025-03-10",
            "--at",
            "10:00",
            "--json",
        ])
        .output()
        .expect("run status");
    assert!(out.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    let names: Vec<&str> = rows
        .as_array()
        .expect("array")
        .iter()
        .map(|r| r["person_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Aziz", "Zarina"]);
    assert_eq!(rows[0]["status"], "NOT_STARTED");
    assert_eq!(rows[0]["elapsed"], "0m");
}

#[test]
fn test_empty_board_hints_person_add() {
    let db_path = setup_test_db("board_empty");
    init_db_with_people(&db_path, &[]);

    mlg()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("person add"));
}

#[test]
fn test_watch_stops_after_ticks() {
    let db_path = setup_test_db("watch_ticks");
    init_db_with_people(&db_path, &["Aziz"]);

    mlg()
        .args(["--db", &db_path, "watch", "--interval", "1", "--ticks", "2"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(contains("Refreshing every 1s"))
        .stdout(contains("Aziz"));
}

#[test]
fn test_person_list_and_duplicates() {
    let db_path = setup_test_db("people");
    init_db_with_people(&db_path, &["Aziz", "Malika"]);

    mlg()
        .args(["--db", &db_path, "person", "list"])
        .assert()
        .success()
        .stdout(contains("Aziz").and(contains("Malika")));

    mlg()
        .args(["--db", &db_path, "person", "add", "Aziz"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_log_records_actions() {
    let db_path = setup_test_db("audit_log");
    init_db_with_people(&db_path, &["Aziz"]);
    act(&db_path, &["in"], "Aziz", "09:00").success();

    mlg()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("person_add"))
        .stdout(contains("check_in"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_people(&db_path, &["Aziz"]);
    act(&db_path, &["in"], "Aziz", "09:00").success();

    mlg()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Sessions:"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Session check passed"));
}

#[test]
fn test_status_json_on_fresh_db_is_pure_json() {
    let db_path = setup_test_db("board_json_fresh");

    let out = mlg()
        .args([
            "--db",
            &db_path,
            "status",
            "--json",
            "--date",
            "2025-03-10",
            "--at",
            "10:00",
        ])
        .output()
        .expect("run status");
    assert!(out.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout is json");
    assert_eq!(rows, serde_json::json!([]));

    // the database was created and migrated on the way
    mlg()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Schema is up to date"));
}

#[test]
fn test_db_migrate_reports_applied_migrations() {
    let db_path = setup_test_db("db_migrate");

    mlg()
        .args(["--db", &db_path, "db", "--migrate", "--check"])
        .assert()
        .success()
        .stdout(contains("Migration applied: 20250301_0001_create_people"))
        .stdout(contains("3 migration(s) applied."))
        .stdout(contains("Session check passed"));
}

#[test]
fn test_board_marks_lunch_left_open_at_check_out() {
    let db_path = setup_test_db("board_open_lunch");
    init_db_with_people(&db_path, &["Aziz"]);

    act(&db_path, &["in"], "Aziz", "09:00").success();
    act(&db_path, &["lunch", "start"], "Aziz", "13:00").success();
    act(&db_path, &["out"], "Aziz", "14:00").success();

    mlg()
        .args(["--db", &db_path, "status", "--date", "2025-03-10", "--at", "15:00"])
        .assert()
        .success()
        .stdout(contains("Completed"))
        .stdout(contains("13:00-14:00 (open)"))
        .stdout(contains("since 13:00").not());
}
