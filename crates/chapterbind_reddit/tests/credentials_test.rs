//! Tests for loading credentials from dotenv files.

use chapterbind_reddit::Credentials;
use std::fs;
use tempfile::TempDir;

fn dir_with(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("Failed to write fixture");
    }
    dir
}

#[test]
fn test_loads_client_credentials() {
    let dir = dir_with(&[(".env", "reddit_id=abc\nreddit_secret=shh\n")]);

    let credentials = Credentials::from_dir(dir.path()).expect("Valid credentials");
    assert_eq!(credentials.client_id(), "abc");
    assert_eq!(credentials.client_secret(), "shh");
    assert!(credentials.login().is_none());
}

#[test]
fn test_loads_user_login_when_both_halves_present() {
    let dir = dir_with(&[(
        ".env",
        "reddit_id=abc\nreddit_secret=shh\nreddit_username=writer\nreddit_password=hunter2\n",
    )]);

    let credentials = Credentials::from_dir(dir.path()).expect("Valid credentials");
    let login = credentials.login().expect("Login configured");
    assert_eq!(login.username(), "writer");
    assert_eq!(login.password(), "hunter2");
}

#[test]
fn test_ignores_half_configured_login() {
    let dir = dir_with(&[(
        ".env",
        "reddit_id=abc\nreddit_secret=shh\nreddit_username=writer\nreddit_password=\n",
    )]);

    let credentials = Credentials::from_dir(dir.path()).expect("Valid credentials");
    assert!(credentials.login().is_none());
}

#[test]
fn test_debug_output_redacts_secrets() {
    let credentials = Credentials::new("abc", "shh").with_login("writer", "hunter2");
    let debug = format!("{:?}", credentials);
    assert!(debug.contains("abc"));
    assert!(!debug.contains("shh"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn test_missing_client_id_is_reported() {
    let dir = dir_with(&[(".env", "reddit_id=\nreddit_secret=shh\n")]);

    let err = Credentials::from_dir(dir.path()).expect_err("Missing id should fail");
    assert!(err.message.contains("No reddit_id found"));
}

#[test]
fn test_missing_client_secret_is_reported() {
    let dir = dir_with(&[(".env", "reddit_id=abc\n")]);

    let err = Credentials::from_dir(dir.path()).expect_err("Missing secret should fail");
    assert!(err.message.contains("No reddit_secret found"));
}

#[test]
fn test_no_env_files_at_all() {
    let dir = dir_with(&[]);

    let err = Credentials::from_dir(dir.path()).expect_err("No files should fail");
    assert!(err.message.contains("Could not load .env or .env.dist"));
}

#[test]
fn test_template_values_left_in_env_dist() {
    let dir = dir_with(&[(
        ".env.dist",
        "reddit_id=Replace_Me\nreddit_secret=Replace_Me_Too\n",
    )]);

    let err = Credentials::from_dir(dir.path()).expect_err("Template should fail");
    assert!(err.message.contains("template values"));
}

#[test]
fn test_real_values_in_env_dist_without_env() {
    let dir = dir_with(&[(".env.dist", "reddit_id=abc\nreddit_secret=shh\n")]);

    let err = Credentials::from_dir(dir.path()).expect_err("Misplaced values should fail");
    assert!(err.message.contains("Found updated values in .env.dist"));
}

#[test]
fn test_empty_env_falls_back_to_diagnosis() {
    let dir = dir_with(&[(".env", ""), (".env.dist", "reddit_id=abc\nreddit_secret=shh\n")]);

    let err = Credentials::from_dir(dir.path()).expect_err("Empty .env should fail");
    assert!(err.message.contains("no .env file"));
}
