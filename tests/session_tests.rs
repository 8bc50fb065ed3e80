use predicates::str::contains;

mod common;
use common::{act, init_db_with_people, mlg, setup_test_db};

#[test]
fn test_full_day_is_recorded() {
    let db_path = setup_test_db("full_day");
    init_db_with_people(&db_path, &["Aziz"]);

    act(&db_path, &["in"], "Aziz", "09:00")
        .success()
        .stdout(contains("Aziz checked in at 09:00 on 2025-03-10"));

    act(&db_path, &["lunch", "start"], "Aziz", "13:00")
        .success()
        .stdout(contains("started lunch at 13:00"));

    act(&db_path, &["lunch", "end"], "Aziz", "13:45")
        .success()
        .stdout(contains("(45 min)"));

    act(&db_path, &["out"], "Aziz", "17:30")
        .success()
        .stdout(contains("8.5 h worked"));

    mlg()
        .args([
            "--db",
            &db_path,
            "status",
            "--date",
            "2025-03-10",
            "--at",
            "18:00",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"status\": \"COMPLETED\""))
        .stdout(contains("\"elapsed\": \"8h 30m\""))
        .stdout(contains("13:00-13:45 (45m)"));
}

#[test]
fn test_person_can_be_referenced_by_id() {
    let db_path = setup_test_db("by_id");
    init_db_with_people(&db_path, &["Malika"]);

    act(&db_path, &["in"], "1", "08:30")
        .success()
        .stdout(contains("Malika checked in"));
}

#[test]
fn test_second_check_in_is_rejected() {
    let db_path = setup_test_db("duplicate_in");
    init_db_with_people(&db_path, &["Aziz"]);

    act(&db_path, &["in"], "Aziz", "09:00").success();

    act(&db_path, &["in"], "Aziz", "10:00")
        .failure()
        .stderr(contains("already checked in on 2025-03-10"));

    // first session untouched
    mlg()
        .args([
            "--db",
            &db_path,
            "status",
            "--date",
            "2025-03-10",
            "--at",
            "11:05",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"start\": \"09:00\""))
        .stdout(contains("\"elapsed\": \"2h 5m\""));
}

#[test]
fn test_actions_without_check_in_fail() {
    let db_path = setup_test_db("no_session");
    init_db_with_people(&db_path, &["Aziz"]);

    act(&db_path, &["out"], "Aziz", "17:00")
        .failure()
        .stderr(contains("has not checked in"));

    act(&db_path, &["lunch", "start"], "Aziz", "13:00")
        .failure()
        .stderr(contains("has not checked in"));
}

#[test]
fn test_lunch_end_requires_lunch_start() {
    let db_path = setup_test_db("lunch_not_started");
    init_db_with_people(&db_path, &["Aziz"]);

    act(&db_path, &["in"], "Aziz", "09:00").success();

    act(&db_path, &["lunch", "end"], "Aziz", "13:45")
        .failure()
        .stderr(contains("Lunch has not been started"));
}

#[test]
fn test_completed_session_rejects_further_actions() {
    let db_path = setup_test_db("completed");
    init_db_with_people(&db_path, &["Aziz"]);

    act(&db_path, &["in"], "Aziz", "09:00").success();
    act(&db_path, &["out"], "Aziz", "17:00").success();

    act(&db_path, &["out"], "Aziz", "18:00")
        .failure()
        .stderr(contains("already completed"));
}

#[test]
fn test_time_going_backwards_is_rejected() {
    let db_path = setup_test_db("backwards");
    init_db_with_people(&db_path, &["Aziz"]);

    act(&db_path, &["in"], "Aziz", "09:00").success();

    act(&db_path, &["out"], "Aziz", "08:00")
        .failure()
        .stderr(contains("earlier than"));
}

#[test]
fn test_unknown_person_and_bad_time() {
    let db_path = setup_test_db("bad_input");
    init_db_with_people(&db_path, &["Aziz"]);

    act(&db_path, &["in"], "Nobody", "09:00")
        .failure()
        .stderr(contains("Person not found: Nobody"));

    act(&db_path, &["in"], "Aziz", "9 o'clock")
        .failure()
        .stderr(contains("Invalid time format"));
}
