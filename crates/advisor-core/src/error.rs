use thiserror::Error;

/// Validation and contract errors exposed by `advisor-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol '{value}' has {len} characters, expected 1 to {max}")]
    SymbolLength {
        value: String,
        len: usize,
        max: usize,
    },
    #[error("symbol must contain only ASCII letters: '{value}'")]
    SymbolNotAlphabetic { value: String },

    #[error("date must be ISO 8601 (YYYY-MM-DD): '{value}'")]
    InvalidDate { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("price series cannot be empty")]
    EmptySeries,
    #[error("duplicate trading day {date} in series")]
    DuplicateDate { date: String },
}

/// Top-level error taxonomy for a single advisor run.
///
/// Upstream and schema failures are fatal and must abort the run before any
/// file is written. Notification failures are recoverable: the orchestrator
/// reports them and carries on with the CSV write and final report.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("upstream error: {message}")]
    Upstream { message: String },

    #[error("schema error: {context}")]
    Schema { context: String },

    #[error("need at least 2 trading days, series has {rows}")]
    InsufficientData { rows: usize },

    #[error("prior close is zero; day-over-day change is undefined")]
    DivisionByZero,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("csv serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("notification delivery failed: {message}")]
    Notification { message: String },
}

impl AdvisorError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    pub fn schema(context: impl Into<String>) -> Self {
        Self::Schema {
            context: context.into(),
        }
    }

    pub fn notification(message: impl Into<String>) -> Self {
        Self::Notification {
            message: message.into(),
        }
    }

    /// Whether this error must abort the run. Only notification delivery
    /// failures are recoverable.
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::Notification { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_failures_are_recoverable() {
        assert!(!AdvisorError::notification("sender timed out").is_fatal());
        assert!(AdvisorError::upstream("bad payload").is_fatal());
        assert!(AdvisorError::DivisionByZero.is_fatal());
    }
}
