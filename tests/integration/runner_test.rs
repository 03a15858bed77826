#![cfg(unix)]

use barstat::error::StatusError;
use barstat::{CommandRunner, SystemRunner};
use std::time::{Duration, Instant};

#[test]
fn test_output_is_trimmed() {
    let runner = SystemRunner::default();
    assert_eq!(runner.run("printf", &["  hello\\n\\n"]), "hello");
}

#[test]
fn test_arguments_are_not_interpolated() {
    let runner = SystemRunner::default();
    assert_eq!(runner.run("echo", &["$HOME; echo injected"]), "$HOME; echo injected");
}

#[test]
fn test_non_zero_exit_is_empty() {
    let runner = SystemRunner::default();
    let result = runner.try_run("sh", &["-c", "echo partial; exit 3"]);
    assert!(matches!(result, Err(StatusError::Failed { .. })));
    assert_eq!(runner.run("sh", &["-c", "echo partial; exit 3"]), "");
}

#[test]
fn test_timeout_kills_child() {
    let runner = SystemRunner::new(Duration::from_millis(200));
    let start = Instant::now();

    let result = runner.try_run("sleep", &["5"]);

    assert!(matches!(result, Err(StatusError::Timeout { .. })));
    assert!(start.elapsed() < Duration::from_secs(4));
}

#[test]
fn test_large_output_is_drained() {
    let runner = SystemRunner::default();
    let output = runner.run("sh", &["-c", "i=0; while [ $i -lt 20000 ]; do echo line-$i; i=$((i+1)); done"]);
    assert_eq!(output.lines().count(), 20000);
    assert!(output.ends_with("line-19999"));
}

#[test]
fn test_background_grandchild_does_not_outlive_timeout() {
    let runner = SystemRunner::new(Duration::from_millis(300));
    let start = Instant::now();

    let result = runner.try_run("sh", &["-c", "sleep 4 & echo hi"]);

    assert!(matches!(result, Err(StatusError::Timeout { .. })));
    assert!(start.elapsed() < Duration::from_secs(2));
    assert_eq!(runner.run("sh", &["-c", "sleep 4 & echo hi"]), "");
}
