//! Supplementary application search.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Upper bound on how long `mdfind` may run before it is killed.
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(5);

const POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },

    #[error("{program} did not finish within {timeout:?}")]
    TimedOut { program: String, timeout: Duration },

    #[error("I/O error while reading {program} output: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// An OS facility returning paths of items classified as applications.
pub trait AppSearch {
    fn search(&self) -> Result<Vec<PathBuf>, SearchError>;
}

/// Spotlight query through `mdfind`.
#[derive(Debug, Clone)]
pub struct MdfindSearch {
    pub program: String,
    pub query: String,
    pub timeout: Duration,
}

impl Default for MdfindSearch {
    fn default() -> Self {
        Self {
            program: "mdfind".to_string(),
            query: "kMDItemKind == 'Application'".to_string(),
            timeout: DEFAULT_SEARCH_TIMEOUT,
        }
    }
}

impl AppSearch for MdfindSearch {
    fn search(&self) -> Result<Vec<PathBuf>, SearchError> {
        let stdout = run_with_timeout(
            Command::new(&self.program).arg(&self.query),
            &self.program,
            self.timeout,
        )?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(PathBuf::from)
            .collect())
    }
}

/// No supplementary search; discovery relies on the directory scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSearch;

impl AppSearch for NoSearch {
    fn search(&self) -> Result<Vec<PathBuf>, SearchError> {
        Ok(Vec::new())
    }
}

/// Fixed results, for tests and hosts without Spotlight.
#[derive(Debug, Clone, Default)]
pub struct StaticSearch(pub Vec<PathBuf>);

impl AppSearch for StaticSearch {
    fn search(&self) -> Result<Vec<PathBuf>, SearchError> {
        Ok(self.0.clone())
    }
}

/// Run `cmd` to completion and return its stdout, killing it after `timeout`.
///
/// Stdout is drained on a helper thread so a large result cannot fill the
/// pipe and stall the child while we poll.
fn run_with_timeout(
    cmd: &mut Command,
    program: &str,
    timeout: Duration,
) -> Result<String, SearchError> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| SearchError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let pipe = child.stdout.take();
    let reader = thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok::<_, std::io::Error>(buf)
    });

    let io_err = |source| SearchError::Io {
        program: program.to_string(),
        source,
    };
    let started = Instant::now();
    let status = loop {
        match child.try_wait().map_err(io_err)? {
            Some(status) => break status,
            None if started.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(SearchError::TimedOut {
                    program: program.to_string(),
                    timeout,
                });
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    };

    let bytes = reader
        .join()
        .unwrap_or_else(|_| Err(std::io::Error::other("output reader panicked")))
        .map_err(io_err)?;

    if !status.success() {
        return Err(SearchError::Failed {
            program: program.to_string(),
            status,
        });
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
