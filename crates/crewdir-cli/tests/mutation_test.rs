mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_add_creates_employee_on_server() {
    let fixture = TestFixture::empty();

    fixture
        .command()
        .arg("add")
        .arg("--id")
        .arg("9")
        .arg("--name")
        .arg("Di Sousa")
        .arg("--role")
        .arg("Analyst")
        .arg("--email")
        .arg("di@corp.example")
        .arg("--department")
        .arg("Finance")
        .assert()
        .success()
        .stdout(predicate::str::contains("employee '9'"));

    let employees = fixture.server.employees();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name, "Di Sousa");
    assert_eq!(employees[0].department.as_deref(), Some("Finance"));
}

#[test]
fn test_add_without_department_stores_absent() {
    let fixture = TestFixture::empty();

    fixture
        .command()
        .arg("add")
        .arg("--id")
        .arg("9")
        .arg("--name")
        .arg("Di Sousa")
        .arg("--role")
        .arg("Analyst")
        .arg("--email")
        .arg("di@corp.example")
        .assert()
        .success();

    assert_eq!(fixture.server.employees()[0].department, None);
}

#[test]
fn test_add_duplicate_id_reports_specific_error() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("add")
        .arg("--id")
        .arg("1")
        .arg("--name")
        .arg("Imposter")
        .arg("--role")
        .arg("Eng")
        .arg("--email")
        .arg("x@corp.example")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // The original record is untouched
    assert_eq!(fixture.server.employees()[0].name, "Ann Lee");
}

#[test]
fn test_update_keeps_unset_fields() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("update")
        .arg("2")
        .arg("--role")
        .arg("Sales Manager")
        .assert()
        .success()
        .stdout(predicate::str::contains("employee '2'"));

    let employees = fixture.server.employees();
    let bo = employees.iter().find(|e| e.id.as_str() == "2").expect("bo");
    assert_eq!(bo.role, "Sales Manager");
    // Untouched fields survive via the edit-form population
    assert_eq!(bo.name, "Bo Reyes");
    assert_eq!(bo.email, "bo@corp.example");
    assert_eq!(bo.department.as_deref(), Some("Sales"));
}

#[test]
fn test_update_unknown_id_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("update")
        .arg("gone")
        .arg("--role")
        .arg("Ghost")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no employee with id 'gone'"));
}

#[test]
fn test_remove_with_yes_skips_prompt() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("remove")
        .arg("3")
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("employee '3'"));

    assert_eq!(fixture.server.employees().len(), 2);
}

#[test]
fn test_remove_declined_sends_no_request() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("remove")
        .arg("3")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete employee '3'?"));

    assert_eq!(fixture.server.delete_calls(), 0);
    assert_eq!(fixture.server.employees().len(), 3);
}

#[test]
fn test_remove_confirmed_via_prompt() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("remove")
        .arg("3")
        .write_stdin("y\n")
        .assert()
        .success();

    assert_eq!(fixture.server.delete_calls(), 1);
    assert_eq!(fixture.server.employees().len(), 2);
}

#[test]
fn test_init_writes_config_file() {
    let fixture = TestFixture::empty();

    fixture
        .command_without_api_url()
        .arg("init")
        .arg("--api-url")
        .arg("http://directory.internal:9000")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    let content = std::fs::read_to_string(fixture.config_path()).expect("config written");
    assert!(content.contains("http://directory.internal:9000"));
}
