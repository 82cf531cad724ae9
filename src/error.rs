use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

use serde_json::Error as JsonError;
use thiserror::Error;

pub type Result<T> = StdResult<T, Error>;

/// Error type returned by estimators
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// The estimator call that failed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    Fit,
    ScoreTrain,
    ScoreTest,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stage::Fit => write!(f, "fit"),
            Stage::ScoreTrain => write!(f, "score on training rows"),
            Stage::ScoreTest => write!(f, "score on test rows"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("estimator failed during {stage} in fold {fold}{}: {source}", size_suffix(.size))]
    EstimatorFailure {
        fold: usize,
        size: Option<usize>,
        stage: Stage,
        source: BoxError,
    },

    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    #[error("cancelled before fold {fold}{}", size_suffix(.size))]
    Cancelled { fold: usize, size: Option<usize> },

    #[error("invalid configuration: {0}")]
    JsonError(#[from] JsonError),
}

fn size_suffix(size: &Option<usize>) -> String {
    match size {
        Some(s) => format!(" (training size {})", s),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArguments(msg.into())
    }

    /// fold index attached to estimator failures and cancellations
    pub fn fold(&self) -> Option<usize> {
        match self {
            Error::EstimatorFailure { fold, .. } | Error::Cancelled { fold, .. } => Some(*fold),
            _ => None,
        }
    }

    /// learning-curve training size attached to estimator failures and cancellations
    pub fn size(&self) -> Option<usize> {
        match self {
            Error::EstimatorFailure { size, .. } | Error::Cancelled { size, .. } => *size,
            _ => None,
        }
    }
}

#[test]
fn failure_message_carries_context() {
    let e = Error::EstimatorFailure {
        fold: 3,
        size: Some(40),
        stage: Stage::Fit,
        source: "singular matrix".into(),
    };
    assert_eq!(
        e.to_string(),
        "estimator failed during fit in fold 3 (training size 40): singular matrix"
    );
    assert_eq!(e.fold(), Some(3));
    assert_eq!(e.size(), Some(40));
    assert_eq!(Error::invalid("k must be at least 2").fold(), None);
}

#[test]
fn cancellation_message_carries_context() {
    let e = Error::Cancelled {
        fold: 2,
        size: Some(16),
    };
    assert_eq!(e.to_string(), "cancelled before fold 2 (training size 16)");
    assert_eq!((e.fold(), e.size()), (Some(2), Some(16)));

    let e = Error::Cancelled { fold: 0, size: None };
    assert_eq!(e.to_string(), "cancelled before fold 0");
}
