use std::process::ExitCode;

use anyhow::Error;

/// Exit status when a required path is missing.
pub const CHECK_FAILED_CODE: u8 = 1;
/// Exit status for configuration or I/O errors.
pub const FATAL_ERROR_CODE: u8 = 2;
/// Message written to stderr when the check fails.
pub const CHECK_FAILED_MESSAGE: &str = "Repo health check failed";

/// Bundles a terminal message with the process exit code.
#[derive(Debug)]
pub struct RunExit {
    message: String,
    code: u8,
}

impl RunExit {
    pub fn check_failed() -> Self {
        Self {
            message: CHECK_FAILED_MESSAGE.to_string(),
            code: CHECK_FAILED_CODE,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            code: FATAL_ERROR_CODE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.code)
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
