//! End-to-end checks of the console helpers.
//!
//! The ports used here are far above anything VcXsrv is started on, so
//! no display window can match and nothing on the desktop is touched.

#![cfg(windows)]

use std::process::Command;

const UNUSED_PORT: &str = "64999";

fn util() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_VcXsrv_util"));
    cmd.env("FF_XPORT", UNUSED_PORT);
    cmd
}

fn close() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_VcXsrv_close"));
    cmd.env("FF_XPORT", UNUSED_PORT);
    cmd
}

#[test]
fn help_and_version_words_are_unknown_modes() {
    for word in ["--help", "-h", "-V", "--version"] {
        // Arrange
        let mut cmd = util();
        cmd.arg(word);

        // Act
        let output = cmd.output().expect("failed to execute VcXsrv_util");

        // Assert
        assert_eq!(output.status.code(), Some(0), "{word}");
        assert!(output.stdout.is_empty(), "{word} printed text");
    }
}

#[test]
fn close_helper_help_word_closes_like_any_other() {
    // Arrange
    let mut cmd = close();
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute VcXsrv_close");

    // Assert
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn exists_reports_missing_display_with_exit_code_one() {
    // Arrange
    let mut cmd = util();
    cmd.arg("-exists");

    // Act
    let output = cmd.output().expect("failed to execute VcXsrv_util");

    // Assert
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn close_without_display_exits_zero() {
    // Arrange
    let mut cmd = util();
    cmd.arg("-close");

    // Act
    let output = cmd.output().expect("failed to execute VcXsrv_util");

    // Assert
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn unknown_mode_just_waits() {
    // Arrange
    let mut cmd = util();
    cmd.args(["-bogus", "extra"]);

    // Act
    let output = cmd.output().expect("failed to execute VcXsrv_util");

    // Assert
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn no_arguments_just_waits() {
    let output = util().output().expect("failed to execute VcXsrv_util");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn close_helper_wait_exits_zero() {
    // Arrange
    let mut cmd = close();
    cmd.arg("-wait");

    // Act
    let output = cmd.output().expect("failed to execute VcXsrv_close");

    // Assert
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn close_helper_without_display_exits_zero() {
    let output = close().output().expect("failed to execute VcXsrv_close");

    assert_eq!(output.status.code(), Some(0));
}
