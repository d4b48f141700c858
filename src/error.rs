//! Error taxonomy for the analysis pipeline
//!
//! All errors are fatal: the binary reports them and exits non-zero. There is
//! no retry or partial-result mode.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by loading, aggregation, and the statistical routines
#[derive(Error, Debug)]
pub enum StatError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input: {0}")]
    Parse(#[from] csv::Error),

    #[error("season '{season}' does not start with a four-digit year")]
    SeasonYear { season: String },

    #[error("{context}: {reason}")]
    Domain {
        context: &'static str,
        reason: String,
    },

    #[error("query year {query} outside observed range [{min}, {max}]")]
    Range { query: f64, min: f64, max: f64 },

    #[error("no data: {0}")]
    EmptyData(&'static str),
}

impl StatError {
    /// Shorthand for a `Domain` error with a formatted reason
    pub fn domain(context: &'static str, reason: impl Into<String>) -> Self {
        StatError::Domain {
            context,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatError>;
