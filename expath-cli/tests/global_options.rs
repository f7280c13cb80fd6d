//! Integration tests for global flags, configuration and exit codes.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve-against"))
        .stdout(predicate::str::contains("mkdirs"));
}

#[test]
fn test_unknown_style_is_rejected() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["--style", "vms", "normalize", "a"])
        .assert()
        .failure();
}

#[test]
fn test_style_from_environment() {
    let env = TestEnv::new();
    env.command_bare()
        .env("EXPATH_STYLE", "windows")
        .args(["normalize", "a/b"])
        .assert()
        .success()
        .stdout("a\\b\n");
}

#[test]
fn test_style_environment_accepts_aliases() {
    let env = TestEnv::new();
    for value in ["unix", "POSIX"] {
        env.command_bare()
            .env("EXPATH_STYLE", value)
            .args(["resolve", "/a/../b"])
            .assert()
            .success()
            .stdout("/b\n");
    }
    env.command_bare()
        .env("EXPATH_STYLE", "Win")
        .args(["normalize", "a/b"])
        .assert()
        .success()
        .stdout("a\\b\n");
}

#[test]
fn test_style_flag_accepts_aliases() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["--style", "UNIX", "normalize", "a//b"])
        .assert()
        .success()
        .stdout("a/b\n");
}

#[test]
fn test_invalid_style_environment_is_config_error() {
    let env = TestEnv::new();
    env.command_bare()
        .env("EXPATH_STYLE", "vms")
        .args(["normalize", "a"])
        .assert()
        .code(5);
}

#[test]
fn test_style_from_user_config() {
    let env = TestEnv::new();
    env.write_user_config("style: windows\n");

    env.command_bare()
        .args(["normalize", "a/b"])
        .assert()
        .success()
        .stdout("a\\b\n");
}

#[test]
fn test_style_flag_overrides_config() {
    let env = TestEnv::new();
    env.write_user_config("style: windows\n");

    env.command()
        .args(["normalize", "a//b"])
        .assert()
        .success()
        .stdout("a/b\n");
}

#[test]
fn test_auto_resolve_join_from_explicit_config() {
    let env = TestEnv::new();
    let config = env.write_file("expath.yaml", "auto_resolve_join: true\n");

    env.command()
        .arg("--config")
        .arg(&config)
        .args(["join", "/a", "b", ".."])
        .assert()
        .success()
        .stdout("/a\n");

    env.command()
        .arg("--config")
        .arg(&config)
        .args(["join", "/a", "b", "..", "--no-resolve"])
        .assert()
        .success()
        .stdout("/a/b/..\n");
}

#[test]
fn test_auto_resolve_join_from_environment() {
    let env = TestEnv::new();
    env.command()
        .env("EXPATH_AUTO_RESOLVE", "yes")
        .args(["join", "/a", "./b"])
        .assert()
        .success()
        .stdout("/a/b\n");
}

#[test]
fn test_missing_config_file_is_config_error() {
    let env = TestEnv::new();
    env.command()
        .arg("--config")
        .arg(env.path().join("absent.yaml"))
        .args(["normalize", "a"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key_is_config_error() {
    let env = TestEnv::new();
    env.write_user_config("separator: \"|\"\n");
    env.command().args(["normalize", "a"]).assert().code(5);
}

#[test]
fn test_invalid_dir_mode_is_config_error() {
    let env = TestEnv::new();
    env.command()
        .env("EXPATH_DIR_MODE", "777777")
        .args(["normalize", "a"])
        .assert()
        .code(5);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "resolve", "/a"])
        .assert()
        .success()
        .stdout("/a\n")
        .stderr(predicate::str::contains("INFO: Resolving with posix style"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let env = TestEnv::new();
    env.command()
        .args(["--quiet", "resolve", "../x"])
        .assert()
        .code(2)
        .stderr("");
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expath"));
}
