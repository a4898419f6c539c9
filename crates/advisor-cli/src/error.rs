use thiserror::Error;

use advisor_core::AdvisorError;

/// CLI-level error wrapper mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Pipeline(#[from] AdvisorError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Pipeline(error) => match error {
                AdvisorError::Validation(_) => 2,
                AdvisorError::Upstream { .. } => 3,
                AdvisorError::Schema { .. } => 4,
                AdvisorError::InsufficientData { .. } | AdvisorError::DivisionByZero => 5,
                // recovered before propagating; kept distinct for completeness
                AdvisorError::Notification { .. } => 6,
                AdvisorError::Io(_) | AdvisorError::Csv(_) => 10,
            },
        }
    }
}
