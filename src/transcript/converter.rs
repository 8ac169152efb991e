//! External raw converter.
//!
//! asciinema 3.x can render a capture as the raw byte stream it replays
//! (`asciinema convert -f raw <file> -`). When it is installed this is the
//! most faithful way to turn an event log into text, so the extractor tries
//! it first. The converter is an optional collaborator: it may be missing,
//! fail, or hang, and each of those is reported as a [`ConverterError`].

use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use thiserror::Error;

/// Interval between exit checks while waiting for the converter.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Maximum stderr length kept in error messages.
const STDERR_PREVIEW_LEN: usize = 200;

/// Errors from running the external converter.
#[derive(Debug, Error)]
pub enum ConverterError {
    #[error("Converter not found: {0}")]
    NotAvailable(String),

    #[error("Converter timed out after {0:?}")]
    Timeout(Duration),

    #[error("Converter exited with code {code}: {stderr}")]
    ExitCode { code: i32, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Runs `<command> convert -f raw <capture> -` with a deadline.
#[derive(Debug, Clone)]
pub struct RawConverter {
    command: String,
    timeout: Duration,
}

impl RawConverter {
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            timeout,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Convert a capture to its raw output stream.
    ///
    /// Stdout is decoded lossily. Only a zero exit status counts as success.
    pub fn convert(&self, capture: &Path) -> Result<String, ConverterError> {
        let mut child = Command::new(&self.command)
            .arg("convert")
            .arg("-f")
            .arg("raw")
            .arg(capture)
            .arg("-")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ConverterError::NotAvailable(self.command.clone()),
                _ => ConverterError::Io(e),
            })?;

        let output = wait_with_timeout(&mut child, self.timeout).map_err(|e| {
            if e.kind() == io::ErrorKind::TimedOut {
                ConverterError::Timeout(self.timeout)
            } else {
                ConverterError::Io(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConverterError::ExitCode {
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().chars().take(STDERR_PREVIEW_LEN).collect(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Wait for a child process with a deadline.
///
/// Stdout and stderr are drained on background threads so a child writing
/// more than a pipe buffer cannot block before exiting. On timeout the child
/// is killed and reaped so no zombie is left behind. The deadline also covers
/// draining: a grandchild that keeps the pipes open cannot stall the caller.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> io::Result<Output> {
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(timed_out());
                }
                thread::sleep(POLL_INTERVAL);
            }
        }
    };

    Ok(Output {
        status,
        stdout: collect(stdout, deadline)?,
        stderr: collect(stderr, deadline)?,
    })
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        buf
    })
}

/// Join a drain thread, giving up once the deadline passes.
///
/// An abandoned thread is detached and exits when the pipe finally closes.
fn collect(handle: Option<JoinHandle<Vec<u8>>>, deadline: Instant) -> io::Result<Vec<u8>> {
    let Some(handle) = handle else {
        return Ok(Vec::new());
    };
    while !handle.is_finished() {
        let now = Instant::now();
        if now >= deadline {
            tracing::debug!("converter output pipe still open at deadline");
            return Err(timed_out());
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
    Ok(handle.join().unwrap_or_default())
}

fn timed_out() -> io::Error {
    io::Error::new(io::ErrorKind::TimedOut, "Process timed out")
}
