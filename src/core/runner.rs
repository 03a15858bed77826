//! External command execution.
//!
//! Every status view talks to the outside world through [`CommandRunner`].
//! Failures of any kind collapse to an empty string so a view can always
//! render something.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use super::config::STATUS_TIMEOUT;
use crate::error::{Result, StatusError};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs a program with an explicit argument list and returns its trimmed stdout.
///
/// Implementations must return an empty string on any failure.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> String;
}

/// Runner backed by real subprocesses
#[derive(Debug, Clone, Copy)]
pub struct SystemRunner {
    timeout: Duration,
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(STATUS_TIMEOUT)
    }
}

impl SystemRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn timed_out(&self, program: &str) -> StatusError {
        StatusError::Timeout {
            program: program.to_string(),
            timeout: self.timeout,
        }
    }

    /// Run `program` to completion, distinguishing the ways it can go wrong.
    ///
    /// stdout is drained on a helper thread so a chatty child cannot stall on
    /// a full pipe while we poll for its exit.
    pub fn try_run(&self, program: &str, args: &[&str]) -> Result<String> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| StatusError::spawn(program, e))?;

        let (tx, rx) = mpsc::channel();
        if let Some(mut stdout) = child.stdout.take() {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = stdout.read_to_end(&mut buf);
                let _ = tx.send(buf);
            });
        }

        let start = Instant::now();
        let status = loop {
            let polled = match child.try_wait() {
                Ok(polled) => polled,
                Err(e) => {
                    kill_and_reap(&mut child);
                    return Err(e.into());
                }
            };
            match polled {
                Some(status) => break status,
                None if start.elapsed() >= self.timeout => {
                    kill_and_reap(&mut child);
                    return Err(self.timed_out(program));
                }
                None => thread::sleep(POLL_INTERVAL),
            }
        };

        // Background grandchildren can keep the pipe open after the child exits.
        let stdout = match rx.recv_timeout(self.timeout.saturating_sub(start.elapsed())) {
            Ok(buf) => buf,
            Err(RecvTimeoutError::Timeout) => return Err(self.timed_out(program)),
            Err(RecvTimeoutError::Disconnected) => Vec::new(),
        };

        if !status.success() {
            return Err(StatusError::Failed {
                program: program.to_string(),
                status: status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> String {
        match self.try_run(program, args) {
            Ok(output) => output,
            Err(e) => {
                debug!("{} {}: {}", program, args.join(" "), e);
                String::new()
            }
        }
    }
}

fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Parse a count printed by an external tool, defaulting to zero
pub fn parse_count(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

/// Non-empty, trimmed lines of command output
pub fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}
