//! # Validator Configuration
//!
//! Where schemas are loaded from and how strictly the loaded set is
//! checked against the bidder registry. Owned by whatever performs
//! startup; the validator only reads it during construction.

use std::path::PathBuf;

/// Default location of bidder parameter schemas, relative to the working
/// directory of the serving process.
pub const DEFAULT_SCHEMA_DIR: &str = "static/bidder-params";

/// File suffix of a bidder schema document.
pub const SCHEMA_FILE_SUFFIX: &str = ".json";

/// Construction options for [`crate::ParamValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Flat directory of `<bidder>.json` schema documents.
    pub schema_dir: PathBuf,
    /// Fail construction when a registered bidder has no schema file.
    ///
    /// Off by default: a bidder may be registered before its schema ships.
    pub require_all_bidders: bool,
}

impl ValidatorConfig {
    /// Lenient configuration reading from `schema_dir`.
    pub fn new(schema_dir: impl Into<PathBuf>) -> Self {
        Self {
            schema_dir: schema_dir.into(),
            require_all_bidders: false,
        }
    }

    /// Require a schema for every registered bidder.
    pub fn strict(mut self) -> Self {
        self.require_all_bidders = true;
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEMA_DIR)
    }
}
