//! Engine Tests
//!
//! Tests verify:
//! - Empty collections on construction
//! - CRUD routing returns the collection results
//! - CSV load/save failures surface as `false`
//! - Opening from configured files

use std::fs;
use std::path::{Path, PathBuf};

use socialkv::engine::{init_status_collection, init_user_collection};
use socialkv::{Config, Engine, SocialError, User, UserStatus};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_engine() -> (TempDir, Engine) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();
    (temp_dir, Engine::new(config))
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn populate(engine: &mut Engine) {
    assert!(engine.add_user("evmiles97", "eve.miles@uw.edu", "Eve", "Miles"));
    assert!(engine.add_user("dave03", "david.yuen@gmail.com", "David", "Yuen"));
    assert!(engine.add_status("evmiles97_00001", "evmiles97", "Code is finally compiling"));
    assert!(engine.add_status("dave03_00001", "dave03", "Sunny in Seattle this morning"));
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_init_collections_are_empty() {
    assert!(init_user_collection().is_empty());
    assert!(init_status_collection().is_empty());
}

#[test]
fn test_new_engine_is_empty() {
    let (_temp, engine) = setup_temp_engine();

    assert!(engine.users().is_empty());
    assert!(engine.statuses().is_empty());
}

// =============================================================================
// User Operation Tests
// =============================================================================

#[test]
fn test_add_user() {
    let (_temp, mut engine) = setup_temp_engine();

    assert!(engine.add_user("Cool_kid187", "mommasboy2001@gmail.com", "Tolby", "Bryant"));
    assert!(!engine.add_user("Cool_kid187", "mommasboy2001@gmail.com", "Tolby", "Bryant"));
}

#[test]
fn test_update_user() {
    let (_temp, mut engine) = setup_temp_engine();

    assert!(!engine.update_user("Cool_kid187", "a@b.com", "A", "B"));

    populate(&mut engine);
    assert!(engine.update_user("dave03", "new@b.com", "C", "D"));
    assert_eq!(
        engine.search_user("dave03"),
        Some(&User::new("dave03", "new@b.com", "C", "D"))
    );
}

#[test]
fn test_delete_user() {
    let (_temp, mut engine) = setup_temp_engine();
    populate(&mut engine);

    assert!(!engine.delete_user("Cool_kid187"));
    assert!(engine.delete_user("evmiles97"));
    assert!(engine.search_user("evmiles97").is_none());
}

#[test]
fn test_delete_user_keeps_statuses() {
    let (_temp, mut engine) = setup_temp_engine();
    populate(&mut engine);

    engine.delete_user("evmiles97");

    assert!(engine.search_status("evmiles97_00001").is_some());
}

// =============================================================================
// Status Operation Tests
// =============================================================================

#[test]
fn test_status_operations() {
    let (_temp, mut engine) = setup_temp_engine();
    populate(&mut engine);

    assert!(!engine.add_status("dave03_00001", "dave03", "dup"));
    assert!(!engine.update_status("test", "test", "test"));
    assert!(engine.update_status("dave03_00001", "test", "test"));
    assert_eq!(
        engine.search_status("dave03_00001"),
        Some(&UserStatus::new("dave03_00001", "test", "test"))
    );
    assert!(!engine.delete_status("test"));
    assert!(engine.delete_status("dave03_00001"));
    assert!(engine.search_status("dave03_00001").is_none());
}

// =============================================================================
// Load / Save Tests
// =============================================================================

#[test]
fn test_load_users_bool_results() {
    let (temp, mut engine) = setup_temp_engine();
    let good = write_file(
        temp.path(),
        "accounts.csv",
        "USER_ID,EMAIL,NAME,LASTNAME\nu1,a@b.com,A,B\n",
    );
    let bad = write_file(
        temp.path(),
        "missing_fields.csv",
        "USER_ID,EMAIL,NAME,LASTNAME\nu2,,A,B\n",
    );

    assert!(engine.load_users(&good));
    assert!(!engine.load_users(&bad));
    assert!(!engine.load_users(temp.path().join("absent.csv")));
    assert_eq!(engine.users().len(), 1);
}

#[test]
fn test_load_statuses_bool_results() {
    let (temp, mut engine) = setup_temp_engine();
    let good = write_file(temp.path(), "s.csv", "STATUS_ID,USER_ID,STATUS_TEXT\ns1,u1,hi\n");
    let bad = write_file(temp.path(), "bad.csv", "STATUS_ID,USER_ID,STATUS_TEXT\ns2,u1\n");

    assert!(engine.load_statuses(&good));
    assert!(engine.load_statuses(&good));
    assert!(!engine.load_statuses(&bad));
    assert_eq!(engine.statuses().len(), 1);
}

#[test]
fn test_save_bool_results() {
    let (temp, mut engine) = setup_temp_engine();
    populate(&mut engine);

    assert!(engine.save_users(temp.path().join("users.csv")));
    assert!(engine.save_statuses(temp.path().join("statuses.csv")));
    assert!(!engine.save_users(" C:by.pyg8 : L^qJ/D-jA.kR6"));
    assert!(!engine.save_statuses(temp.path().join("missing").join("s.csv")));
}

#[test]
fn test_save_all_then_open() {
    let (temp, mut engine) = setup_temp_engine();
    populate(&mut engine);

    assert!(engine.save_all());

    let config = Config::builder().data_dir(temp.path()).build();
    let reopened = Engine::open(config).unwrap();
    assert_eq!(reopened.users().len(), 2);
    assert_eq!(reopened.statuses().len(), 2);
    assert_eq!(reopened.search_user("dave03"), engine.search_user("dave03"));
}

#[test]
fn test_open_without_files_is_empty() {
    let temp = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp.path()).build();

    let engine = Engine::open(config).unwrap();

    assert!(engine.users().is_empty());
    assert!(engine.statuses().is_empty());
}

#[test]
fn test_open_with_invalid_file_fails() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "accounts.csv", "USER_ID,EMAIL,NAME,LASTNAME\nu1,,A,B\n");
    let config = Config::builder().data_dir(temp.path()).build();

    let result = Engine::open(config);

    assert!(matches!(result, Err(SocialError::EmptyField { .. })));
}

#[test]
fn test_load_all_reports_missing_files() {
    let (temp, mut engine) = setup_temp_engine();
    write_file(temp.path(), "accounts.csv", "USER_ID,EMAIL,NAME,LASTNAME\nu1,a@b.com,A,B\n");

    assert!(!engine.load_all());
    assert_eq!(engine.users().len(), 1);

    write_file(temp.path(), "status_updates.csv", "STATUS_ID,USER_ID,STATUS_TEXT\n");
    assert!(engine.load_all());
}

#[test]
fn test_collection_accessors_mutate() {
    let (_temp, mut engine) = setup_temp_engine();

    engine.users_mut().add("u1", "a@b.com", "A", "B");
    engine.statuses_mut().add("s1", "u1", "hi");

    assert!(engine.search_user("u1").is_some());
    assert!(engine.search_status("s1").is_some());
}

#[test]
fn test_open_add_save_reopen() {
    let temp = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp.path()).build();

    let mut engine = Engine::open(config.clone()).unwrap();
    assert!(engine.add_user("u1", "a@b.com", "A", "B"));
    assert!(engine.add_status("s1", "u1", "first post, with a comma"));
    assert!(engine.save_all());

    let reopened = Engine::open(config).unwrap();
    assert_eq!(reopened.search_user("u1"), Some(&User::new("u1", "a@b.com", "A", "B")));
    assert_eq!(
        reopened.search_status("s1"),
        Some(&UserStatus::new("s1", "u1", "first post, with a comma"))
    );
}

#[test]
fn test_saved_blank_field_blocks_reopen() {
    let temp = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp.path()).build();

    // collections accept blank values; the CSV layer does not
    let mut engine = Engine::open(config.clone()).unwrap();
    assert!(engine.add_user("u1", "", "A", "B"));
    assert!(engine.save_all());

    assert!(matches!(
        Engine::open(config),
        Err(SocialError::EmptyField { line: 2, field: "EMAIL" })
    ));
}
