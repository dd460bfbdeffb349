use std::fmt;

/// A validated POSIX process exit status.
///
/// Only values in `[0, 255]` can exist; construction from a wider integer
/// goes through [`ExitCode::try_from`]. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(u8);

impl ExitCode {
    /// Full success.
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// At least one destination was skipped, or a tool error occurred.
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The invocation was interrupted by the user.
    pub const INTERRUPT: ExitCode = ExitCode(130);

    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// The raw status for `std::process::exit`.
    pub fn code(self) -> i32 {
        i32::from(self.0)
    }

    /// Folds per-destination outcomes into one status: 0 iff every outcome
    /// is 0, otherwise exactly 1. Not a maximum and not a bitwise OR; one
    /// failure is as bad as many. An empty sequence aggregates to success.
    pub fn aggregate<I>(outcomes: I) -> ExitCode
    where
        I: IntoIterator<Item = ExitCode>,
    {
        if outcomes.into_iter().all(ExitCode::is_success) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

impl TryFrom<i32> for ExitCode {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(ExitCode)
            .map_err(|_| format!("exit code must be in range of [0,255], got {value}"))
    }
}

impl From<u8> for ExitCode {
    fn from(value: u8) -> Self {
        ExitCode(value)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
