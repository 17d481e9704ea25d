//! # Validator Errors
//!
//! Two error classes, kept as separate types so a caller cannot confuse
//! them:
//!
//! - [`SchemaLoadError`] — startup class. Any of these aborts validator
//!   construction; the process should refuse to serve traffic.
//! - [`ParamValidationError`] — per-request class. Local to one validation
//!   call; never affects validator state or concurrent calls.

use std::fmt;

use bidparams_core::BidderName;
use thiserror::Error;

/// Error building a [`crate::ParamValidator`] from a schema directory.
#[derive(Error, Debug)]
pub enum SchemaLoadError {
    /// The schema directory could not be listed.
    #[error("failed to read JSON schemas from directory {dir}: {source}")]
    DirectoryUnreadable {
        /// Directory that was being listed.
        dir: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A file in the schema directory does not name a registered bidder.
    #[error("file {path} does not match a valid bidder name")]
    UnknownBidder {
        /// Offending file path.
        path: String,
    },

    /// A directory entry named for a bidder is not a regular file.
    #[error("schema entry {path} is not a regular file")]
    NotAFile {
        /// Offending entry path.
        path: String,
    },

    /// A schema file could not be read.
    #[error("failed to read file {path}: {source}")]
    ReadFailed {
        /// Offending file path.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A schema file is not valid JSON or not a valid JSON Schema.
    #[error("failed to load json schema at {path}: {reason}")]
    MalformedSchema {
        /// Offending file path.
        path: String,
        /// Parser or schema compiler message.
        reason: String,
    },

    /// Strict loading found registered bidders without a schema file.
    #[error("no schema file for registered bidders: {}", join_bidders(.bidders))]
    MissingSchemas {
        /// Registered bidders with no schema, sorted by token.
        bidders: Vec<BidderName>,
    },
}

fn join_bidders(bidders: &[BidderName]) -> String {
    bidders
        .iter()
        .map(BidderName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error validating one bidder's extension payload.
#[derive(Error, Debug)]
pub enum ParamValidationError {
    /// No schema was bound for the bidder at startup.
    #[error("no schema registered for bidder {bidder}")]
    NoSchema {
        /// The bidder that was requested.
        bidder: BidderName,
    },

    /// The payload is not syntactically valid JSON.
    #[error(transparent)]
    InvalidJson(#[from] serde_json::Error),

    /// The payload is JSON but does not conform to the bidder's schema.
    #[error("{violations}")]
    ValidationFailed {
        /// The bidder whose schema rejected the payload.
        bidder: BidderName,
        /// Every reported violation, in evaluator order.
        violations: ValidationViolations,
    },
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating value in the payload.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that rejected it.
    pub schema_path: String,
    /// Human-readable description from the evaluator.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Ordered collection of violations. `Display` is the combined message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
