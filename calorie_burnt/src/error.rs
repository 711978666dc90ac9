use std::num::ParseIntError;

use activity_duration::DurationError;
use thiserror::Error;
use time::Duration;

/// Coarse error category for callers that only need to branch on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorKind {
    Format,
    Range,
    UnknownActivity,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected {expected} comma separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("steps field {0:?} has surrounding whitespace")]
    StepsWhitespace(String),
    #[error("failed to convert steps {input:?} to integer: {source}")]
    Steps {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("failed to parse duration: {0}")]
    Duration(#[from] DurationError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("steps should be at least 1, got {0}")]
    Steps(i64),
    #[error("duration should be positive, got {0}")]
    Duration(Duration),
    #[error("{name} should be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid format: {0}")]
    Format(#[from] FormatError),
    #[error("out of range: {0}")]
    Range(#[from] RangeError),
    #[error("unknown activity kind {0:?}")]
    UnknownActivity(String),
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Format(_) => ErrorKind::Format,
            Self::Range(_) => ErrorKind::Range,
            Self::UnknownActivity(_) => ErrorKind::UnknownActivity,
        }
    }
}

impl From<DurationError> for Error {
    fn from(value: DurationError) -> Self {
        Self::Format(FormatError::Duration(value))
    }
}

/// Error of training report. Each variant keeps the step which failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    #[error("failed to parse training data: {0}")]
    Parse(#[source] Error),
    #[error("failed to calculate calories: {0}")]
    Calories(#[source] Error),
}

impl TrainingError {
    pub const fn inner(&self) -> &Error {
        match self {
            Self::Parse(error) | Self::Calories(error) => error,
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        self.inner().kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let format = Error::from(FormatError::FieldCount {
            expected: 3,
            found: 2,
        });
        let range = Error::from(RangeError::Steps(0));
        let activity = Error::UnknownActivity("плавание".to_owned());

        assert_eq!(format.kind(), ErrorKind::Format);
        assert_eq!(range.kind(), ErrorKind::Range);
        assert_eq!(activity.kind(), ErrorKind::UnknownActivity);
    }

    #[test]
    fn test_duration_error_is_format() {
        let error = Error::from(DurationError::Invalid("abc".to_owned()));

        assert_eq!(error.kind(), ErrorKind::Format);
        assert_eq!(
            error.to_string(),
            "invalid format: failed to parse duration: invalid duration \"abc\""
        );
    }

    #[test]
    fn test_training_error_prefix() {
        let error = TrainingError::Parse(Error::from(RangeError::Steps(-5)));

        assert_eq!(error.kind(), ErrorKind::Range);
        assert_eq!(
            error.to_string(),
            "failed to parse training data: out of range: steps should be at least 1, got -5"
        );
    }
}
