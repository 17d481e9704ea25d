//! # Bidder Param Validation
//!
//! Loads one JSON Schema per bidder from a flat directory at startup and
//! validates `imp[i].ext.<bidder>` payloads against it at request time.
//!
//! ## Security Invariant
//!
//! Schema validation is the trust boundary between the open request
//! extension and the typed bidder adapters behind it. A payload reaches an
//! adapter only after its bidder's schema accepts it.
//!
//! ## Loading
//!
//! Every entry of the schema directory must be named `<bidder>.json`, where
//! `<bidder>` is a registered [`BidderName`] token. Construction is
//! all-or-nothing: an unreadable directory, a file for an unknown bidder, or
//! a schema that fails to parse or compile aborts it with the first failure
//! found, in file-name order.
//!
//! A registered bidder without a schema file is tolerated unless
//! [`ValidatorConfig::require_all_bidders`] is set; validating for such a
//! bidder returns [`ParamValidationError::NoSchema`].
//!
//! ## Schema Resolution
//!
//! `$ref`s are resolved against the other schema documents of the same
//! directory, matched by file name. Nothing is fetched over the network; an
//! unresolvable reference fails construction.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bidparams_core::{BidderName, BidderRegistry};
use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;

use crate::config::{ValidatorConfig, SCHEMA_FILE_SUFFIX};
use crate::error::{ParamValidationError, SchemaLoadError, ValidationViolations, Violation};

/// Validates bidder extension payloads against that bidder's schema.
///
/// This is the seam consumed by request processing. Implementations are
/// read-only after construction and safe to share across threads.
pub trait BidderParamValidator: Send + Sync {
    /// Validate the raw JSON `ext` payload for `bidder`.
    fn validate(&self, bidder: BidderName, ext: &[u8]) -> Result<(), ParamValidationError>;

    /// The schema text used to validate `bidder`, or `""` if there is none.
    fn schema(&self, bidder: BidderName) -> &str;
}

/// Base URI the schema compiler resolves relative `$ref`s against when a
/// document declares no `$id`.
const LOCAL_BASE_URI: &str = "json-schema:///";

/// Resolves relative `$ref`s to sibling schema documents by file name.
///
/// Only URIs directly under [`LOCAL_BASE_URI`] are local. Absolute URIs
/// such as `https://...` never resolve, even when their last segment names
/// a sibling file.
struct LocalSchemaRetriever {
    /// Map from file name (e.g. `"appnexus.json"`) to parsed document.
    schemas_by_file: Arc<HashMap<String, Value>>,
}

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        let local = uri_str
            .strip_prefix(LOCAL_BASE_URI)
            .filter(|filename| !filename.contains('/'))
            .and_then(|filename| self.schemas_by_file.get(filename));

        match local {
            Some(value) => Ok(value.clone()),
            None => Err(format!(
                "{uri_str} does not resolve to a schema in the bidder params directory"
            )
            .into()),
        }
    }
}

/// One bidder's schema: the source text and its compiled form.
struct SchemaBinding {
    raw: String,
    compiled: Validator,
}

/// A schema document read from disk, not yet compiled.
struct LoadedSchema {
    bidder: BidderName,
    path: PathBuf,
    raw: String,
    value: Value,
}

/// Validator over every bidder schema found in a directory.
///
/// Built once by [`ParamValidator::new`] or [`ParamValidator::with_config`],
/// then immutable. `Send + Sync`; share it behind an `Arc` or a reference.
pub struct ParamValidator {
    schema_dir: PathBuf,
    bindings: HashMap<BidderName, SchemaBinding>,
}

impl ParamValidator {
    /// Load every schema in `schema_dir`, tolerating registered bidders that
    /// have no schema file.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaLoadError`] encountered.
    pub fn new(
        registry: &BidderRegistry,
        schema_dir: impl AsRef<Path>,
    ) -> Result<Self, SchemaLoadError> {
        Self::with_config(registry, &ValidatorConfig::new(schema_dir.as_ref()))
    }

    /// Load schemas as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaLoadError`] encountered, or
    /// [`SchemaLoadError::MissingSchemas`] when `config.require_all_bidders`
    /// is set and the directory does not cover the registry.
    pub fn with_config(
        registry: &BidderRegistry,
        config: &ValidatorConfig,
    ) -> Result<Self, SchemaLoadError> {
        let schema_dir = config.schema_dir.clone();
        let loaded = read_schema_dir(registry, &schema_dir)?;

        let schemas_by_file: Arc<HashMap<String, Value>> = Arc::new(
            loaded
                .iter()
                .map(|s| (format!("{}{SCHEMA_FILE_SUFFIX}", s.bidder), s.value.clone()))
                .collect(),
        );

        let mut bindings = HashMap::with_capacity(loaded.len());
        for schema in loaded {
            let mut opts = jsonschema::options();
            opts.with_retriever(LocalSchemaRetriever {
                schemas_by_file: Arc::clone(&schemas_by_file),
            });
            let compiled = opts.build(&schema.value).map_err(|e| {
                SchemaLoadError::MalformedSchema {
                    path: schema.path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;

            tracing::debug!(
                bidder = %schema.bidder,
                path = %schema.path.display(),
                "bound bidder param schema"
            );
            bindings.insert(
                schema.bidder,
                SchemaBinding {
                    raw: schema.raw,
                    compiled,
                },
            );
        }

        let validator = Self {
            schema_dir,
            bindings,
        };

        let missing = validator.missing(registry);
        if !missing.is_empty() {
            if config.require_all_bidders {
                return Err(SchemaLoadError::MissingSchemas { bidders: missing });
            }
            let tokens: Vec<&str> = missing.iter().map(BidderName::as_str).collect();
            tracing::warn!(
                count = missing.len(),
                bidders = %tokens.join(","),
                "registered bidders have no param schema; their payloads will be rejected"
            );
        }

        tracing::info!(
            dir = %validator.schema_dir.display(),
            schemas = validator.bindings.len(),
            "loaded bidder param schemas"
        );

        Ok(validator)
    }

    /// Validate the raw JSON `ext` payload for `bidder`.
    ///
    /// # Errors
    ///
    /// - [`ParamValidationError::NoSchema`] if no schema is bound for `bidder`.
    /// - [`ParamValidationError::InvalidJson`] if `ext` is not valid JSON.
    /// - [`ParamValidationError::ValidationFailed`] with every violation, in
    ///   evaluator order, if the schema rejects the payload.
    pub fn validate(&self, bidder: BidderName, ext: &[u8]) -> Result<(), ParamValidationError> {
        let binding = self.binding(bidder)?;
        let instance: Value = serde_json::from_slice(ext)?;
        check(bidder, binding, &instance)
    }

    /// Validate an already-parsed payload for `bidder`.
    ///
    /// # Errors
    ///
    /// As [`ParamValidator::validate`], minus the JSON syntax case.
    pub fn validate_value(
        &self,
        bidder: BidderName,
        ext: &Value,
    ) -> Result<(), ParamValidationError> {
        let binding = self.binding(bidder)?;
        check(bidder, binding, ext)
    }

    /// The original schema text for `bidder`, or `""` if none was bound.
    pub fn schema(&self, bidder: BidderName) -> &str {
        self.bindings
            .get(&bidder)
            .map(|b| b.raw.as_str())
            .unwrap_or("")
    }

    /// Returns true if a schema is bound for `bidder`.
    pub fn has_schema(&self, bidder: BidderName) -> bool {
        self.bindings.contains_key(&bidder)
    }

    /// Bidders with a bound schema, sorted by token.
    pub fn bidders(&self) -> Vec<BidderName> {
        let mut bidders: Vec<BidderName> = self.bindings.keys().copied().collect();
        bidders.sort_by_key(|b| b.as_str());
        bidders
    }

    /// Registered bidders with no bound schema, sorted by token.
    pub fn missing(&self, registry: &BidderRegistry) -> Vec<BidderName> {
        let mut missing: Vec<BidderName> = registry
            .all()
            .filter(|b| !self.bindings.contains_key(b))
            .collect();
        missing.sort_by_key(|b| b.as_str());
        missing
    }

    /// Number of bound schemas.
    pub fn schema_count(&self) -> usize {
        self.bindings.len()
    }

    /// Directory the schemas were loaded from.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    fn binding(&self, bidder: BidderName) -> Result<&SchemaBinding, ParamValidationError> {
        self.bindings
            .get(&bidder)
            .ok_or(ParamValidationError::NoSchema { bidder })
    }
}

impl BidderParamValidator for ParamValidator {
    fn validate(&self, bidder: BidderName, ext: &[u8]) -> Result<(), ParamValidationError> {
        ParamValidator::validate(self, bidder, ext)
    }

    fn schema(&self, bidder: BidderName) -> &str {
        ParamValidator::schema(self, bidder)
    }
}

impl fmt::Debug for ParamValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamValidator")
            .field("schema_dir", &self.schema_dir)
            .field("bidders", &self.bidders())
            .finish()
    }
}

fn check(
    bidder: BidderName,
    binding: &SchemaBinding,
    instance: &Value,
) -> Result<(), ParamValidationError> {
    let violations: Vec<Violation> = binding
        .compiled
        .iter_errors(instance)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        tracing::trace!(bidder = %bidder, count = violations.len(), "bidder params rejected");
        Err(ParamValidationError::ValidationFailed {
            bidder,
            violations: ValidationViolations::new(violations),
        })
    }
}

/// Read and parse every schema document in `dir`, in file-name order.
fn read_schema_dir(
    registry: &BidderRegistry,
    dir: &Path,
) -> Result<Vec<LoadedSchema>, SchemaLoadError> {
    let unreadable = |source| SchemaLoadError::DirectoryUnreadable {
        dir: dir.display().to_string(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        paths.push(entry.map_err(unreadable)?.path());
    }
    paths.sort();

    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        let display = path.display().to_string();
        let bidder = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.strip_suffix(SCHEMA_FILE_SUFFIX).unwrap_or(n))
            .and_then(|token| registry.lookup(token))
            .ok_or_else(|| SchemaLoadError::UnknownBidder {
                path: display.clone(),
            })?;

        if !path.is_file() {
            return Err(SchemaLoadError::NotAFile { path: display });
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| SchemaLoadError::ReadFailed {
            path: display.clone(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&raw).map_err(|e| SchemaLoadError::MalformedSchema {
                path: display.clone(),
                reason: format!("invalid JSON: {e}"),
            })?;

        loaded.push(LoadedSchema {
            bidder,
            path,
            raw,
            value,
        });
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PLACEMENT_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-04/schema#",
  "title": "Test Adapter Params",
  "type": "object",
  "properties": {
    "placementId": { "type": "integer" }
  },
  "required": ["placementId"]
}
"#;

    fn write(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    fn placement_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "appnexus.json", PLACEMENT_SCHEMA);
        dir
    }

    #[test]
    fn test_valid_payload_passes() {
        let dir = placement_dir();
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        validator
            .validate(BidderName::Appnexus, br#"{"placementId": 123}"#)
            .unwrap();
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let dir = placement_dir();
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        let err = validator
            .validate(BidderName::Appnexus, br#"{"placementId": "abc"}"#)
            .unwrap_err();
        match &err {
            ParamValidationError::ValidationFailed { bidder, violations } => {
                assert_eq!(*bidder, BidderName::Appnexus);
                assert_eq!(violations.len(), 1);
                assert_eq!(violations.violations()[0].instance_path, "/placementId");
            }
            other => panic!("Expected ValidationFailed, got: {other}"),
        }
        let text = err.to_string();
        assert!(text.contains("integer"), "message should name the expected type: {text}");
        assert!(text.contains("placementId"), "message should name the field: {text}");
    }

    #[test]
    fn test_every_violation_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "rubicon.json",
            r#"{
              "type": "object",
              "properties": {
                "accountId": { "type": "integer" },
                "siteId": { "type": "integer" },
                "zoneId": { "type": "integer" }
              },
              "required": ["accountId", "siteId", "zoneId"]
            }"#,
        );
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        let err = validator
            .validate(BidderName::Rubicon, br#"{"accountId": "1", "siteId": "2"}"#)
            .unwrap_err();
        let ParamValidationError::ValidationFailed { violations, .. } = err else {
            panic!("Expected ValidationFailed");
        };
        assert_eq!(violations.len(), 3);
        let combined = violations.to_string();
        for v in violations.violations() {
            assert!(combined.contains(&v.message));
        }
    }

    #[test]
    fn test_invalid_json_payload_is_surfaced() {
        let dir = placement_dir();
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        let err = validator
            .validate(BidderName::Appnexus, br#"{"placementId": "#)
            .unwrap_err();
        assert!(
            matches!(err, ParamValidationError::InvalidJson(_)),
            "Expected InvalidJson, got: {err}"
        );
    }

    #[test]
    fn test_bidder_without_schema_is_an_error() {
        let dir = placement_dir();
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        let err = validator
            .validate(BidderName::Openx, br#"{"unit": "1"}"#)
            .unwrap_err();
        assert!(
            matches!(err, ParamValidationError::NoSchema { bidder: BidderName::Openx }),
            "Expected NoSchema, got: {err}"
        );
        assert!(!validator.has_schema(BidderName::Openx));
    }

    #[test]
    fn test_no_schema_checked_before_json_syntax() {
        let dir = placement_dir();
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        let err = validator.validate(BidderName::Openx, b"not json").unwrap_err();
        assert!(matches!(err, ParamValidationError::NoSchema { .. }));
    }

    #[test]
    fn test_validate_value() {
        let dir = placement_dir();
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        validator
            .validate_value(BidderName::Appnexus, &json!({"placementId": 7}))
            .unwrap();
        assert!(validator
            .validate_value(BidderName::Appnexus, &json!({}))
            .is_err());
    }

    #[test]
    fn test_schema_returns_original_text() {
        let dir = placement_dir();
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        assert_eq!(validator.schema(BidderName::Appnexus), PLACEMENT_SCHEMA);
        assert_eq!(validator.schema(BidderName::Rubicon), "");
    }

    #[test]
    fn test_rejects_unknown_bidder_file() {
        let dir = placement_dir();
        write(dir.path(), "unknownpartner.json", PLACEMENT_SCHEMA);
        let err = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap_err();
        match err {
            SchemaLoadError::UnknownBidder { path } => {
                assert!(path.ends_with("unknownpartner.json"), "{path}");
            }
            other => panic!("Expected UnknownBidder, got: {other}"),
        }
    }

    #[test]
    fn test_rejects_unknown_bidder_regardless_of_content() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "unknownpartner.json", "this is not json");
        let err = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap_err();
        assert!(matches!(err, SchemaLoadError::UnknownBidder { .. }));
    }

    #[test]
    fn test_rejects_general_schema_file() {
        let dir = placement_dir();
        write(dir.path(), "general.json", PLACEMENT_SCHEMA);
        let err = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap_err();
        assert!(matches!(err, SchemaLoadError::UnknownBidder { .. }));
    }

    #[test]
    fn test_rejects_file_without_suffix_handling() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "appnexus.schema", PLACEMENT_SCHEMA);
        let err = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap_err();
        assert!(matches!(err, SchemaLoadError::UnknownBidder { .. }));
    }

    #[test]
    fn test_rejects_unparseable_schema() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "openx.json", r#"{"type": "object", "#);
        let err = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap_err();
        match err {
            SchemaLoadError::MalformedSchema { path, .. } => assert!(path.ends_with("openx.json")),
            other => panic!("Expected MalformedSchema, got: {other}"),
        }
    }

    #[test]
    fn test_rejects_invalid_schema_document() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "openx.json", r#"{"type": 12}"#);
        let err = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap_err();
        assert!(
            matches!(err, SchemaLoadError::MalformedSchema { .. }),
            "Expected MalformedSchema, got: {err}"
        );
    }

    #[test]
    fn test_rejects_unreadable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = ParamValidator::new(&BidderRegistry::new(), &missing).unwrap_err();
        match err {
            SchemaLoadError::DirectoryUnreadable { dir, .. } => assert!(dir.contains("does-not-exist")),
            other => panic!("Expected DirectoryUnreadable, got: {other}"),
        }
    }

    #[test]
    fn test_empty_directory_binds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let registry = BidderRegistry::new();
        let validator = ParamValidator::new(&registry, dir.path()).unwrap();
        assert_eq!(validator.schema_count(), 0);
        assert_eq!(validator.missing(&registry).len(), registry.len());
    }

    #[test]
    fn test_strict_mode_requires_every_bidder() {
        let dir = placement_dir();
        let config = ValidatorConfig::new(dir.path()).strict();
        let err = ParamValidator::with_config(&BidderRegistry::new(), &config).unwrap_err();
        match err {
            SchemaLoadError::MissingSchemas { bidders } => {
                assert_eq!(bidders.len(), BidderName::all().len() - 1);
                assert!(!bidders.contains(&BidderName::Appnexus));
                assert_eq!(bidders[0], BidderName::ThirtyThreeAcross);
            }
            other => panic!("Expected MissingSchemas, got: {other}"),
        }
    }

    #[test]
    fn test_strict_mode_accepts_complete_directory() {
        let dir = tempfile::tempdir().unwrap();
        for bidder in BidderName::all() {
            write(dir.path(), &format!("{bidder}.json"), r#"{"type": "object"}"#);
        }
        let config = ValidatorConfig::new(dir.path()).strict();
        let registry = BidderRegistry::new();
        let validator = ParamValidator::with_config(&registry, &config).unwrap();
        assert_eq!(validator.schema_count(), registry.len());
        assert!(validator.missing(&registry).is_empty());
    }

    #[test]
    fn test_bidders_sorted_by_token() {
        let dir = placement_dir();
        write(dir.path(), "33across.json", r#"{"type": "object"}"#);
        write(dir.path(), "audienceNetwork.json", r#"{"type": "object"}"#);
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        assert_eq!(
            validator.bidders(),
            vec![
                BidderName::ThirtyThreeAcross,
                BidderName::Appnexus,
                BidderName::AudienceNetwork,
            ]
        );
        assert_eq!(validator.schema_dir(), dir.path());
    }

    #[test]
    fn test_ref_to_sibling_schema_resolves() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "appnexus.json", PLACEMENT_SCHEMA);
        write(dir.path(), "adkernelAdn.json", r#"{"$ref": "appnexus.json"}"#);
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        validator
            .validate(BidderName::AdkernelAdn, br#"{"placementId": 1}"#)
            .unwrap();
        assert!(validator
            .validate(BidderName::AdkernelAdn, br#"{"placementId": "1"}"#)
            .is_err());
    }

    #[test]
    fn test_remote_ref_is_not_fetched() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "openx.json",
            r#"{"$ref": "https://schemas.example.com/remote.json"}"#,
        );
        let err = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap_err();
        assert!(
            matches!(err, SchemaLoadError::MalformedSchema { .. }),
            "Expected MalformedSchema, got: {err}"
        );
    }

    #[test]
    fn test_remote_ref_never_binds_to_sibling_with_same_name() {
        let dir = placement_dir();
        write(
            dir.path(),
            "openx.json",
            r#"{"$ref": "https://x.example.com/appnexus.json"}"#,
        );
        let err = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap_err();
        match err {
            SchemaLoadError::MalformedSchema { path, .. } => assert!(path.ends_with("openx.json")),
            other => panic!("Expected MalformedSchema, got: {other}"),
        }
    }

    #[test]
    fn test_nested_relative_ref_is_not_local() {
        let dir = placement_dir();
        write(dir.path(), "openx.json", r#"{"$ref": "other/appnexus.json"}"#);
        let err = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap_err();
        assert!(
            matches!(err, SchemaLoadError::MalformedSchema { .. }),
            "Expected MalformedSchema, got: {err}"
        );
    }

    #[test]
    fn test_draft4_boolean_exclusive_minimum() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "openx.json",
            r#"{
              "$schema": "http://json-schema.org/draft-04/schema#",
              "type": "object",
              "properties": {
                "n": { "type": "number", "minimum": 0, "exclusiveMinimum": true }
              }
            }"#,
        );
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        let err = validator.validate(BidderName::Openx, br#"{"n": 0}"#).unwrap_err();
        assert!(
            matches!(err, ParamValidationError::ValidationFailed { .. }),
            "Expected ValidationFailed, got: {err}"
        );
        validator.validate(BidderName::Openx, br#"{"n": 1}"#).unwrap();
    }

    #[test]
    fn test_draft7_numeric_exclusive_minimum() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "openx.json",
            r#"{
              "$schema": "http://json-schema.org/draft-07/schema#",
              "type": "object",
              "properties": {
                "n": { "type": "number", "exclusiveMinimum": 0 }
              }
            }"#,
        );
        let validator = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap();
        let err = validator.validate(BidderName::Openx, br#"{"n": 0}"#).unwrap_err();
        assert!(
            matches!(err, ParamValidationError::ValidationFailed { .. }),
            "Expected ValidationFailed, got: {err}"
        );
        validator.validate(BidderName::Openx, br#"{"n": 0.5}"#).unwrap();
    }

    #[test]
    fn test_rejects_directory_named_like_schema() {
        let dir = placement_dir();
        std::fs::create_dir(dir.path().join("openx.json")).unwrap();
        let err = ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap_err();
        match err {
            SchemaLoadError::NotAFile { path } => assert!(path.ends_with("openx.json")),
            other => panic!("Expected NotAFile, got: {other}"),
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let dir = placement_dir();
        let validator: Box<dyn BidderParamValidator> =
            Box::new(ParamValidator::new(&BidderRegistry::new(), dir.path()).unwrap());
        assert!(validator
            .validate(BidderName::Appnexus, br#"{"placementId": 5}"#)
            .is_ok());
        assert_eq!(validator.schema(BidderName::Appnexus), PLACEMENT_SCHEMA);
        assert_eq!(validator.schema(BidderName::Grid), "");
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParamValidator>();
    }
}
