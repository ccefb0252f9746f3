//! Core types for sync codes

use crate::constants::SEPARATOR;
use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A validated sync code: `[Series][Device]-[Identifier]`
///
/// Values are only produced by [`crate::SyncCodeValidator`], so every
/// `SyncCode` is in canonical form. Ordering is by series, then device,
/// then identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyncCode {
    series: char,
    device: String,
    identifier: String,
}

impl SyncCode {
    /// Assemble a code from parts that have already been checked
    pub(crate) fn from_validated(series: char, device: String, identifier: String) -> Self {
        Self {
            series,
            device,
            identifier,
        }
    }

    /// Uppercase series letter
    pub fn series(&self) -> char {
        self.series
    }

    /// Uppercase three-letter device token
    pub fn device(&self) -> &str {
        &self.device
    }

    /// Four-digit identifier, leading zeros preserved
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Identifier as a number, for sequence comparison
    pub fn identifier_number(&self) -> u16 {
        self.identifier
            .bytes()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
    }

    /// Series and device, e.g. `ABTU`
    pub fn prefix(&self) -> String {
        let mut prefix = String::with_capacity(1 + self.device.len());
        prefix.push(self.series);
        prefix.push_str(&self.device);
        prefix
    }

    /// Break the code back into `make` inputs
    pub fn to_parts(&self) -> SyncCodeParts {
        SyncCodeParts::new(
            String::from(self.series),
            self.device.clone(),
            self.identifier.clone(),
        )
    }
}

impl fmt::Display for SyncCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.series, self.device, SEPARATOR, self.identifier
        )
    }
}

impl Serialize for SyncCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Identifier input for `make`: either text or a number
///
/// Numbers are rendered in plain decimal, so `34` becomes `"34"` and is
/// rejected by validation; pass `"0034"` to keep leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdentifierPart {
    /// Numeric identifier
    Number(u64),
    /// Textual identifier
    Text(String),
}

impl IdentifierPart {
    /// Empty text and zero count as absent
    pub fn is_blank(&self) -> bool {
        match self {
            IdentifierPart::Number(n) => *n == 0,
            IdentifierPart::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for IdentifierPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierPart::Number(n) => write!(f, "{}", n),
            IdentifierPart::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for IdentifierPart {
    fn from(s: &str) -> Self {
        IdentifierPart::Text(String::from(s))
    }
}

impl From<String> for IdentifierPart {
    fn from(s: String) -> Self {
        IdentifierPart::Text(s)
    }
}

impl From<u16> for IdentifierPart {
    fn from(n: u16) -> Self {
        IdentifierPart::Number(u64::from(n))
    }
}

impl From<u32> for IdentifierPart {
    fn from(n: u32) -> Self {
        IdentifierPart::Number(u64::from(n))
    }
}

impl From<u64> for IdentifierPart {
    fn from(n: u64) -> Self {
        IdentifierPart::Number(n)
    }
}

/// The three segments accepted by `make`
///
/// Fields are optional so a partially-filled record (for example one
/// deserialized from JSON) can be rejected with
/// [`crate::SyncCodeError::MissingParts`] instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCodeParts {
    /// Series letter
    #[serde(default)]
    pub series: Option<String>,

    /// Device token
    #[serde(default)]
    pub device: Option<String>,

    /// Identifier, text or number
    #[serde(default)]
    pub identifier: Option<IdentifierPart>,
}

impl SyncCodeParts {
    /// Create a fully-populated set of parts
    pub fn new(
        series: impl Into<String>,
        device: impl Into<String>,
        identifier: impl Into<IdentifierPart>,
    ) -> Self {
        Self {
            series: Some(series.into()),
            device: Some(device.into()),
            identifier: Some(identifier.into()),
        }
    }

    /// All three parts, or `None` if any is absent or blank
    pub fn present(&self) -> Option<(&str, &str, &IdentifierPart)> {
        let series = self.series.as_deref().filter(|s| !s.is_empty())?;
        let device = self.device.as_deref().filter(|s| !s.is_empty())?;
        let identifier = self.identifier.as_ref().filter(|i| !i.is_blank())?;
        Some((series, device, identifier))
    }
}
