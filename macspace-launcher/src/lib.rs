//! Application launching for `macspace`.
//!
//! [`OpenLauncher`] hands an application name to `open -a` and returns as
//! soon as the process is spawned. Whether the application actually starts
//! is not observed. [`open_all`] walks a workspace's apps in order and never
//! stops early.

use std::collections::BTreeSet;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to run `{program} -a {app}`: {source}")]
    Spawn {
        program: String,
        app: String,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can ask the OS to start an application by display name.
pub trait Launcher {
    fn launch(&self, app: &str) -> Result<(), LaunchError>;
}

/// macOS `open -a <app>`, detached and not awaited.
#[derive(Debug, Clone)]
pub struct OpenLauncher {
    pub program: String,
}

impl Default for OpenLauncher {
    fn default() -> Self {
        Self {
            program: "open".to_string(),
        }
    }
}

impl Launcher for OpenLauncher {
    fn launch(&self, app: &str) -> Result<(), LaunchError> {
        let child = Command::new(&self.program)
            .args(["-a", app])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                app: app.to_string(),
                source,
            })?;
        tracing::debug!(app, pid = child.id(), "launch requested");
        Ok(())
    }
}

/// Whether an app appeared in discovery before it was launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Installed,
    /// Not in any scanned location; launched anyway.
    Unlisted,
}

/// Result of one launch attempt.
#[derive(Debug)]
pub struct LaunchAttempt {
    pub app: String,
    pub presence: Presence,
    pub result: Result<(), LaunchError>,
}

impl LaunchAttempt {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Launch every app in order.
///
/// `installed` is advisory only: unlisted apps are still attempted, and a
/// failure never skips the apps after it. `on_attempt` sees each attempt as
/// soon as it happens.
pub fn open_all<L, F>(
    apps: &[String],
    installed: &BTreeSet<String>,
    launcher: &L,
    mut on_attempt: F,
) -> Vec<LaunchAttempt>
where
    L: Launcher + ?Sized,
    F: FnMut(&LaunchAttempt),
{
    let mut attempts = Vec::with_capacity(apps.len());
    for app in apps {
        let presence = if installed.contains(app) {
            Presence::Installed
        } else {
            Presence::Unlisted
        };
        let result = launcher.launch(app);
        if let Err(err) = &result {
            tracing::debug!(app = %app, error = %err, "launch failed");
        }
        let attempt = LaunchAttempt {
            app: app.clone(),
            presence,
            result,
        };
        on_attempt(&attempt);
        attempts.push(attempt);
    }
    attempts
}
