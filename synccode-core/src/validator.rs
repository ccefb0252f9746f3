//! Sync code validation (strict mode)
//!
//! The grammar is `[Series][Device]-[Identifier]`:
//! - series: one ASCII letter
//! - device: three ASCII letters, registered in the [`DeviceRegistry`]
//! - identifier: four ASCII digits
//!
//! Every check fails fast and reports only the first violated rule.

use crate::constants::{
    is_device_token, is_identifier, CANONICAL_LEN, COMPACT_LEN, PREFIX_LEN, SEPARATOR,
};
use crate::error::SyncCodeError;
use crate::registry::DeviceRegistry;
use crate::types::{SyncCode, SyncCodeParts};
use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::debug;

/// Split a code at its hyphen into `(prefix, identifier)`
///
/// Fails unless the code contains exactly one hyphen. Segment contents are
/// not inspected.
pub fn split(code: &str) -> Result<(&str, &str), SyncCodeError> {
    match code.split_once(SEPARATOR) {
        Some((prefix, identifier)) if !identifier.contains(SEPARATOR) => Ok((prefix, identifier)),
        _ => Err(SyncCodeError::Structure {
            code: code.to_string(),
        }),
    }
}

/// Extract the series letter, uppercased
pub fn series(code: &str) -> Result<char, SyncCodeError> {
    match code.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(SyncCodeError::Series {
            code: code.to_string(),
        }),
    }
}

/// Extract the identifier segment, trimmed but otherwise unchanged
pub fn identifier(code: &str) -> Result<&str, SyncCodeError> {
    let (_, identifier) = split(code)?;
    let identifier = identifier.trim();

    if !is_identifier(identifier) {
        return Err(SyncCodeError::Identifier {
            code: code.to_string(),
        });
    }

    Ok(identifier)
}

/// Insert the hyphen into an unhyphenated eight-character code
///
/// `ZBTU0034` becomes `ZBTU-0034`. Anything else (already hyphenated, or
/// not eight characters long) is returned unchanged. No validation is
/// performed.
pub fn hyphenate(code: &str) -> Cow<'_, str> {
    if code.contains(SEPARATOR) || code.chars().count() != COMPACT_LEN {
        return Cow::Borrowed(code);
    }

    // Eight chars, so the fifth one always exists
    let at = code
        .char_indices()
        .nth(PREFIX_LEN)
        .map_or(code.len(), |(i, _)| i);

    let mut out = String::with_capacity(code.len() + 1);
    out.push_str(&code[..at]);
    out.push(SEPARATOR);
    out.push_str(&code[at..]);
    Cow::Owned(out)
}

/// Validates sync codes against a device registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncCodeValidator {
    registry: DeviceRegistry,
}

impl SyncCodeValidator {
    /// Create a validator over the given registry
    pub fn new(registry: DeviceRegistry) -> Self {
        Self { registry }
    }

    /// The registry this validator checks devices against
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Allowed device tokens in registry order
    pub fn allowed_devices(&self) -> Vec<&str> {
        self.registry.tokens().collect()
    }

    /// `(token, description)` pairs in registry order
    pub fn device_descriptions(&self) -> Vec<(&str, &str)> {
        self.registry.descriptions().collect()
    }

    /// Description for a single device token
    pub fn device_description(&self, device: &str) -> Option<&str> {
        self.registry.description(device)
    }

    /// `(token, model)` pairs in registry order
    pub fn device_models(&self) -> Vec<(&str, &str)> {
        self.registry.models().collect()
    }

    /// Model number for a single device token
    pub fn device_model(&self, device: &str) -> Option<&str> {
        self.registry.model(device)
    }

    /// See [`split`]
    pub fn split<'a>(&self, code: &'a str) -> Result<(&'a str, &'a str), SyncCodeError> {
        split(code)
    }

    /// See [`series`]
    pub fn series(&self, code: &str) -> Result<char, SyncCodeError> {
        series(code)
    }

    /// Extract the device token, uppercased
    ///
    /// The prefix segment is trimmed and its first character (the series)
    /// dropped; what remains must be three letters naming a registered
    /// device.
    pub fn device(&self, code: &str) -> Result<String, SyncCodeError> {
        let (prefix, _) = split(code)?;

        let mut chars = prefix.trim().chars();
        chars.next();
        let candidate = chars.as_str();

        if !is_device_token(candidate) {
            return Err(SyncCodeError::DeviceFormat {
                code: code.to_string(),
            });
        }

        let device = candidate.to_ascii_uppercase();
        if !self.registry.contains(&device) {
            return Err(SyncCodeError::DeviceNotAllowed {
                code: code.to_string(),
            });
        }

        Ok(device)
    }

    /// See [`identifier`]
    pub fn identifier<'a>(&self, code: &'a str) -> Result<&'a str, SyncCodeError> {
        identifier(code)
    }

    /// Parse a code into its typed form
    ///
    /// Checks run in order series, device, identifier; the first failure is
    /// returned.
    pub fn parse(&self, code: &str) -> Result<SyncCode, SyncCodeError> {
        let checked = series(code).and_then(|series| {
            let device = self.device(code)?;
            let identifier = identifier(code)?;
            Ok((series, device, identifier))
        });

        let (series, device, identifier) = match checked {
            Ok(parts) => parts,
            Err(e) => {
                #[cfg(feature = "logging")]
                debug!("Rejected {:?}: {:?}", code, e.kind());
                return Err(e);
            }
        };

        Ok(SyncCode::from_validated(
            series,
            device,
            identifier.to_string(),
        ))
    }

    /// Validate a code and return its canonical uppercase form
    pub fn validate(&self, code: &str) -> Result<String, SyncCodeError> {
        let parsed = self.parse(code)?;

        let mut canonical = String::with_capacity(CANONICAL_LEN);
        canonical.push(parsed.series());
        canonical.push_str(parsed.device());
        canonical.push(SEPARATOR);
        canonical.push_str(parsed.identifier());
        Ok(canonical)
    }

    /// Whether `code` validates; never fails
    pub fn is_valid(&self, code: &str) -> bool {
        self.validate(code).is_ok()
    }

    /// Build a code from its parts and validate the result
    ///
    /// Fails with [`SyncCodeError::MissingParts`] if any part is absent or
    /// blank, otherwise with whatever [`Self::validate`] reports for the
    /// assembled string.
    pub fn make(&self, parts: &SyncCodeParts) -> Result<String, SyncCodeError> {
        let (series, device, identifier) = parts.present().ok_or(SyncCodeError::MissingParts)?;

        let mut raw = String::with_capacity(CANONICAL_LEN);
        raw.push_str(series);
        raw.push_str(device);
        raw.push(SEPARATOR);
        raw.push_str(&identifier.to_string());

        self.validate(&raw)
    }

    /// See [`hyphenate`]
    pub fn hyphenate<'a>(&self, code: &'a str) -> Cow<'a, str> {
        hyphenate(code)
    }

    /// Hyphenate then validate
    pub fn normalize(&self, code: &str) -> Result<String, SyncCodeError> {
        self.validate(&hyphenate(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::registry::DeviceEntry;
    use alloc::vec;

    fn validator() -> SyncCodeValidator {
        SyncCodeValidator::default()
    }

    #[test]
    fn test_split() {
        assert_eq!(split("ZBTU-0034"), Ok(("ZBTU", "0034")));
        assert_eq!(split("-"), Ok(("", "")));
        assert_eq!(split("ZBTU0034").unwrap_err().kind(), ErrorKind::Structure);
        assert_eq!(split("Z-BTU-0034").unwrap_err().kind(), ErrorKind::Structure);
        assert_eq!(split("").unwrap_err().kind(), ErrorKind::Structure);
    }

    #[test]
    fn test_series() {
        assert_eq!(series("ZBTU-0034"), Ok('Z'));
        assert_eq!(series("zbtu-0034"), Ok('Z'));
        assert_eq!(series("1BTU-0034").unwrap_err().kind(), ErrorKind::Series);
        assert_eq!(series("").unwrap_err().kind(), ErrorKind::Series);
        assert_eq!(series(" ZBTU-0034").unwrap_err().kind(), ErrorKind::Series);
        assert_eq!(series("ÄBTU-0034").unwrap_err().kind(), ErrorKind::Series);
    }

    #[test]
    fn test_device() {
        let v = validator();
        assert_eq!(v.device("ZBTU-0034").unwrap(), "BTU");
        assert_eq!(v.device("zbtu-0034").unwrap(), "BTU");
        assert_eq!(
            v.device("ZXYZ-0034").unwrap_err().kind(),
            ErrorKind::DeviceNotAllowed
        );
        assert_eq!(
            v.device("ZB-0034").unwrap_err().kind(),
            ErrorKind::DeviceFormat
        );
        assert_eq!(
            v.device("ZBTUX-0034").unwrap_err().kind(),
            ErrorKind::DeviceFormat
        );
        assert_eq!(v.device("ZBTU0034").unwrap_err().kind(), ErrorKind::Structure);
    }

    #[test]
    fn test_device_trims_prefix() {
        let v = validator();
        assert_eq!(v.device(" ZBTU -0034").unwrap(), "BTU");
    }

    #[test]
    fn test_identifier() {
        assert_eq!(identifier("ZBTU-0034"), Ok("0034"));
        assert_eq!(identifier("ZBTU- 0034 "), Ok("0034"));
        assert_eq!(identifier("ZBTU-34").unwrap_err().kind(), ErrorKind::Identifier);
        assert_eq!(identifier("ZBTU-12a4").unwrap_err().kind(), ErrorKind::Identifier);
        assert_eq!(identifier("ZBTU-12345").unwrap_err().kind(), ErrorKind::Identifier);
    }

    #[test]
    fn test_validate_canonicalizes() {
        let v = validator();
        assert_eq!(v.validate("zbtu-0034").unwrap(), "ZBTU-0034");
        assert_eq!(v.validate("ZBTU- 0034").unwrap(), "ZBTU-0034");
        assert_eq!(v.validate("aSuN-9999").unwrap(), "ASUN-9999");
    }

    #[test]
    fn test_validate_reports_first_failure() {
        let v = validator();
        // Bad series wins over missing hyphen
        assert_eq!(v.validate("1BTU0034").unwrap_err().kind(), ErrorKind::Series);
        // Missing hyphen is reported by the device check
        assert_eq!(v.validate("ZBTU0034").unwrap_err().kind(), ErrorKind::Structure);
        // Bad device wins over bad identifier
        assert_eq!(
            v.validate("ZXYZ-34").unwrap_err().kind(),
            ErrorKind::DeviceNotAllowed
        );
    }

    #[test]
    fn test_error_carries_input() {
        let err = validator().validate("ZXYZ-0034").unwrap_err();
        assert_eq!(err.code(), Some("ZXYZ-0034"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_error_messages() {
        let v = validator();
        assert_eq!(
            v.validate("ZBTU0034").unwrap_err().to_string(),
            "Invalid sync code structure. (ZBTU0034)"
        );
        assert_eq!(
            v.validate("ZXYZ-0034").unwrap_err().to_string(),
            "Device type not allowed. (ZXYZ-0034)"
        );
    }

    #[test]
    fn test_is_valid() {
        let v = validator();
        assert!(v.is_valid("ABTU-1234"));
        assert!(!v.is_valid("garbage"));
        assert!(!v.is_valid(""));
        assert!(!v.is_valid("ABTU-1234-5"));
    }

    #[test]
    fn test_make() {
        let v = validator();
        assert_eq!(
            v.make(&SyncCodeParts::new("A", "BTU", 1234u32)).unwrap(),
            "ABTU-1234"
        );
        assert_eq!(
            v.make(&SyncCodeParts::new("z", "btu", "0034")).unwrap(),
            "ZBTU-0034"
        );
    }

    #[test]
    fn test_make_missing_parts() {
        let v = validator();
        assert_eq!(
            v.make(&SyncCodeParts::default()),
            Err(SyncCodeError::MissingParts)
        );
        assert_eq!(
            v.make(&SyncCodeParts::new("A", "BTU", 0u32)),
            Err(SyncCodeError::MissingParts)
        );
    }

    #[test]
    fn test_make_revalidates() {
        let v = validator();
        // Numeric identifiers lose leading zeros
        assert_eq!(
            v.make(&SyncCodeParts::new("A", "BTU", 34u32))
                .unwrap_err()
                .kind(),
            ErrorKind::Identifier
        );
        assert_eq!(
            v.make(&SyncCodeParts::new("A", "XYZ", "1234"))
                .unwrap_err()
                .kind(),
            ErrorKind::DeviceNotAllowed
        );
        assert_eq!(
            v.make(&SyncCodeParts::new("A", "BT", "1234"))
                .unwrap_err()
                .kind(),
            ErrorKind::DeviceFormat
        );
        assert_eq!(
            v.make(&SyncCodeParts::new("A-", "BTU", "1234"))
                .unwrap_err()
                .kind(),
            ErrorKind::Structure
        );
    }

    #[test]
    fn test_hyphenate() {
        assert_eq!(hyphenate("ZBTU0034"), "ZBTU-0034");
        assert_eq!(hyphenate("ZBTU-0034"), "ZBTU-0034");
        assert_eq!(hyphenate("ZBTU003"), "ZBTU003");
        assert_eq!(hyphenate("ZBTU00345"), "ZBTU00345");
        assert!(matches!(hyphenate("ZBTU-0034"), Cow::Borrowed(_)));
        // Character-based, not byte-based
        assert_eq!(hyphenate("ÄBTU0034"), "ÄBTU-0034");
    }

    #[test]
    fn test_normalize() {
        let v = validator();
        assert_eq!(v.normalize("zbtu0034").unwrap(), "ZBTU-0034");
        assert_eq!(v.normalize("ZBTU-0034").unwrap(), "ZBTU-0034");
        assert_eq!(v.normalize("ZBTU003").unwrap_err().kind(), ErrorKind::Structure);
    }

    #[test]
    fn test_registry_lookups() {
        let v = validator();
        assert_eq!(v.allowed_devices().len(), 14);
        assert_eq!(v.allowed_devices()[0], "BTU");
        assert_eq!(v.device_description("ZON"), Some("Zone Controller"));
        assert_eq!(v.device_model("CPU"), Some("CPU-0600"));
        assert_eq!(v.device_descriptions().len(), 14);
        assert_eq!(v.device_models()[10], ("SUN", "SESF-3221"));
    }

    #[test]
    fn test_custom_registry() {
        let registry = DeviceRegistry::new(vec![DeviceEntry::new("XYZ")]).unwrap();
        let v = SyncCodeValidator::new(registry);
        assert_eq!(v.validate("zxyz-0001").unwrap(), "ZXYZ-0001");
        assert_eq!(
            v.validate("ZBTU-0001").unwrap_err().kind(),
            ErrorKind::DeviceNotAllowed
        );
        assert_eq!(v.device_description("XYZ"), None);
    }
}
