//! Reusable constraint checkers for model fields
//!
//! The service model publishes a length range, an optional regex pattern, and
//! occasionally an integer range for every string/number member. These
//! helpers turn those published constraints into typed [`ValidationError`]s.
//! Nothing here runs implicitly; request types call into this module from
//! their `Validate` implementations only.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidationError, ValidationResult};

/// Compiled patterns shared across the request surface.
pub mod patterns {
    use super::{Lazy, Regex};

    /// Friendly names: users, roles, policies, instance profiles, devices.
    pub static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w+=,.@-]+$").unwrap());

    /// IAM paths: `/` or `/`-delimited segments of printable ASCII.
    pub static PATH: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(/|/[\x21-\x7f]+/)$").unwrap());

    /// Path prefixes for List* filtering: a leading `/` plus printable ASCII.
    pub static PATH_PREFIX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^/[\x21-\x7f]*$").unwrap());

    /// JSON policy documents (and certificate/key bodies): tab, LF, CR, and
    /// the printable range of the Basic Latin and Latin-1 Supplement sets.
    pub static POLICY_DOCUMENT: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[\x09\x0a\x0d\x20-\x{00ff}]+$").unwrap());

    /// Opaque pagination cursors.
    pub static MARKER: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[\x20-\x{00ff}]+$").unwrap());

    /// Access key identifiers.
    pub static ACCESS_KEY_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+$").unwrap());

    /// MFA device serial numbers.
    pub static SERIAL_NUMBER: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[\w+=/:,.@-]+$").unwrap());

    /// Six-digit MFA authentication codes.
    pub static AUTHENTICATION_CODE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[\d]+$").unwrap());

    /// Account aliases: lowercase alphanumeric with interior hyphens. The
    /// "no consecutive hyphens" rule needs lookahead the `regex` crate does
    /// not support; callers check for `--` separately.
    pub static ACCOUNT_ALIAS: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap());

    /// Service namespaces, e.g. `s3` or `elasticmapreduce`.
    pub static SERVICE_NAMESPACE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[\w-]*$").unwrap());

    /// Tag keys and values.
    pub static TAG: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[\p{L}\p{Z}\p{N}_.:/=+\-@]*$").unwrap());

    /// Role descriptions: any printable unicode.
    pub static DESCRIPTION: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[\p{L}\p{M}\p{Z}\p{S}\p{N}\p{P}]*$").unwrap());

    /// Managed policy version identifiers, e.g. `v1` or `v2.0`.
    pub static POLICY_VERSION: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^v[1-9][0-9]*(\.[A-Za-z0-9-]*)?$").unwrap());

    /// Organizations entity paths: org id, root id, then OUs or an account.
    pub static ORGANIZATIONS_ENTITY_PATH: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^o-[0-9a-z]{10,32}/r-[0-9a-z]{4,32}[0-9a-z/-]*$").unwrap());

    /// Organizations service control policy identifiers.
    pub static ORGANIZATIONS_POLICY_ID: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^p-[0-9a-zA-Z_]{8,128}$").unwrap());
}

/// Checks a string member that must be present.
pub fn required_string(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
    pattern: Option<&Regex>,
) -> ValidationResult<()> {
    match value {
        None => Err(ValidationError::MissingField { field: field.to_string() }),
        Some(v) => string(field, v, min, max, pattern),
    }
}

/// Checks a string member that may be absent; `None` always passes.
pub fn optional_string(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
    pattern: Option<&Regex>,
) -> ValidationResult<()> {
    match value {
        None => Ok(()),
        Some(v) => string(field, v, min, max, pattern),
    }
}

/// Checks every element of an optional list member against the same
/// string constraint.
pub fn string_list(
    field: &'static str,
    values: Option<&[String]>,
    min: usize,
    max: usize,
    pattern: Option<&Regex>,
) -> ValidationResult<()> {
    for v in values.unwrap_or_default() {
        string(field, v, min, max, pattern)?;
    }
    Ok(())
}

/// Checks an optional integer member against an inclusive range.
pub fn optional_range(
    field: &'static str,
    value: Option<i32>,
    min: i64,
    max: i64,
) -> ValidationResult<()> {
    match value {
        None => Ok(()),
        Some(v) => range(field, i64::from(v), min, max),
    }
}

/// Checks the shared `Marker`/`MaxItems` pagination request members.
pub fn pagination(marker: Option<&str>, max_items: Option<i32>) -> ValidationResult<()> {
    optional_string("Marker", marker, 1, 320, Some(&patterns::MARKER))?;
    optional_range("MaxItems", max_items, 1, 1000)
}

fn string(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    pattern: Option<&Regex>,
) -> ValidationResult<()> {
    // Constraints count encoded characters, not bytes.
    let length = value.chars().count();
    if length < min {
        return Err(ValidationError::TooShort { field: field.to_string(), length, min });
    }
    if length > max {
        return Err(ValidationError::TooLong { field: field.to_string(), length, max });
    }
    if let Some(re) = pattern {
        if !re.is_match(value) {
            return Err(ValidationError::PatternMismatch {
                field: field.to_string(),
                pattern: re.as_str().to_string(),
            });
        }
    }
    Ok(())
}

fn range(field: &'static str, value: i64, min: i64, max: i64) -> ValidationResult<()> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field: field.to_string(), value, min, max });
    }
    Ok(())
}

/// Pre-flight validation for request types.
///
/// Checks the documented constraints of every populated member and the
/// presence of members the service requires. Construction and
/// deserialization never run this; data coming back from the service is
/// stored exactly as received.
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string_missing() {
        let err = required_string("UserName", None, 1, 64, None).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "UserName".to_string() });
    }

    #[test]
    fn test_length_bounds() {
        assert!(required_string("Path", Some("/"), 1, 512, None).is_ok());
        let err = required_string("Path", Some(""), 1, 512, None).unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { .. }));
        let long = "x".repeat(513);
        let err = required_string("Path", Some(&long), 1, 512, None).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { .. }));
    }

    #[test]
    fn test_name_pattern() {
        assert!(
            required_string("UserName", Some("alice+dev@corp"), 1, 64, Some(&patterns::NAME))
                .is_ok()
        );
        let err =
            required_string("UserName", Some("no spaces"), 1, 64, Some(&patterns::NAME))
                .unwrap_err();
        assert!(matches!(err, ValidationError::PatternMismatch { .. }));
    }

    #[test]
    fn test_path_pattern() {
        for ok in ["/", "/division_abc/subdivision_xyz/"] {
            assert!(optional_string("Path", Some(ok), 1, 512, Some(&patterns::PATH)).is_ok());
        }
        for bad in ["division", "/division", "division/"] {
            assert!(optional_string("Path", Some(bad), 1, 512, Some(&patterns::PATH)).is_err());
        }
    }

    #[test]
    fn test_pagination_constraints() {
        assert!(pagination(None, None).is_ok());
        assert!(pagination(Some("cursor"), Some(100)).is_ok());
        assert!(pagination(Some(""), None).is_err());
        assert!(pagination(None, Some(0)).is_err());
        assert!(pagination(None, Some(1001)).is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 64 two-byte characters must pass a 64-char limit.
        let name = "é".repeat(64);
        assert!(required_string("UserName", Some(&name), 1, 64, None).is_ok());
    }
}
