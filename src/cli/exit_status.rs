use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): command completed (per-source failures included)
/// - `Failure` (1): command completed but had nothing to do or nothing to show
/// - `Error` (2): run-level failure (missing credentials, store unavailable, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
    Success,
    /// Command completed without a result (e.g. lookup found nothing).
    Failure,
    /// Command failed before or outside per-source processing.
    Error,
}

impl ExitStatus {
    /// `Success` when the command produced its result, `Failure` otherwise.
    pub fn success_if(produced: bool) -> Self {
        if produced {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
