//! Tests for data folder resolution
//!
//! Note: Uses serial_test to prevent ENV variable race conditions. Tests
//! that manipulate TPW_ROOT_FOLDER are marked with #[serial] so they run
//! sequentially, not in parallel.

use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tpw_common::config::{
    database_path, default_root_folder, ensure_root_folder, resolve_root_folder, DATABASE_FILE,
    ROOT_FOLDER_ENV,
};

#[test]
fn test_default_root_folder_is_non_empty() {
    let folder = default_root_folder();
    assert!(!folder.as_os_str().is_empty());
}

#[test]
#[serial]
fn test_cli_argument_takes_highest_priority() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/tpw-env-folder");

    let resolved = resolve_root_folder(Some("/tmp/tpw-cli-folder"));
    assert_eq!(resolved, PathBuf::from("/tmp/tpw-cli-folder"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_env_var_overrides_default() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/tpw-env-folder");

    let resolved = resolve_root_folder(None);
    assert_eq!(resolved, PathBuf::from("/tmp/tpw-env-folder"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_no_overrides_falls_back_to_default() {
    env::remove_var(ROOT_FOLDER_ENV);

    let resolved = resolve_root_folder(None);
    assert!(!resolved.as_os_str().is_empty());
}

#[test]
fn test_ensure_root_folder_creates_directories() {
    let base = tempfile::tempdir().unwrap();
    let nested = base.path().join("a").join("b");

    ensure_root_folder(&nested).unwrap();
    assert!(nested.is_dir());

    // Creating an existing folder is fine
    ensure_root_folder(&nested).unwrap();
}

#[test]
fn test_database_path_is_inside_the_root() {
    let root = PathBuf::from("/tmp/tpw-root");
    let db = database_path(&root);
    assert_eq!(db, root.join(DATABASE_FILE));
}
