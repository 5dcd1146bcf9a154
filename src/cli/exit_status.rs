use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): the command completed
/// - `Failure` (1): issues were found and `--fail-on-issues` was given
/// - `Error` (2): the command could not complete
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_issues(issue_count: usize, fail_on_issues: bool) -> Self {
        if fail_on_issues && issue_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
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
