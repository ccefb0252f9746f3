//! Error types for sync code operations

use alloc::string::String;

/// Errors that can occur while parsing, validating or constructing sync codes
///
/// Every variant describes rejected input; the validator holds no mutable
/// state, so there are no internal failure modes.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCodeError {
    /// Code does not split into exactly two hyphen-delimited segments
    #[cfg_attr(feature = "std", error("Invalid sync code structure. ({code})"))]
    Structure {
        /// The rejected input.
        code: String,
    },

    /// First character is missing or not a single letter
    #[cfg_attr(feature = "std", error("Invalid sync code series. ({code})"))]
    Series {
        /// The rejected input.
        code: String,
    },

    /// Device segment is not exactly three letters
    #[cfg_attr(feature = "std", error("Invalid sync code device type. ({code})"))]
    DeviceFormat {
        /// The rejected input.
        code: String,
    },

    /// Device segment is well-formed but not in the registry
    #[cfg_attr(feature = "std", error("Device type not allowed. ({code})"))]
    DeviceNotAllowed {
        /// The rejected input.
        code: String,
    },

    /// Identifier segment is not exactly four digits
    #[cfg_attr(feature = "std", error("Invalid sync code identifier. ({code})"))]
    Identifier {
        /// The rejected input.
        code: String,
    },

    /// `make` was given a missing record or missing/empty parts
    #[cfg_attr(
        feature = "std",
        error("Missing sync code parts. Must be an object containing: series, device, identifier.")
    )]
    MissingParts,

    /// Registry entry token is not three ASCII letters
    #[cfg_attr(feature = "std", error("Invalid device token in registry: {0:?}"))]
    InvalidDeviceToken(String),

    /// Registry entry token appears more than once
    #[cfg_attr(feature = "std", error("Duplicate device token in registry: {0}"))]
    DuplicateDevice(String),
}

/// Fieldless category of a [`SyncCodeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`SyncCodeError::Structure`]
    Structure,
    /// See [`SyncCodeError::Series`]
    Series,
    /// See [`SyncCodeError::DeviceFormat`]
    DeviceFormat,
    /// See [`SyncCodeError::DeviceNotAllowed`]
    DeviceNotAllowed,
    /// See [`SyncCodeError::Identifier`]
    Identifier,
    /// See [`SyncCodeError::MissingParts`]
    MissingParts,
    /// Registry construction failure
    Registry,
}

impl SyncCodeError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncCodeError::Structure { .. } => ErrorKind::Structure,
            SyncCodeError::Series { .. } => ErrorKind::Series,
            SyncCodeError::DeviceFormat { .. } => ErrorKind::DeviceFormat,
            SyncCodeError::DeviceNotAllowed { .. } => ErrorKind::DeviceNotAllowed,
            SyncCodeError::Identifier { .. } => ErrorKind::Identifier,
            SyncCodeError::MissingParts => ErrorKind::MissingParts,
            SyncCodeError::InvalidDeviceToken(_) | SyncCodeError::DuplicateDevice(_) => {
                ErrorKind::Registry
            }
        }
    }

    /// Returns the rejected code for grammar errors.
    pub fn code(&self) -> Option<&str> {
        match self {
            SyncCodeError::Structure { code }
            | SyncCodeError::Series { code }
            | SyncCodeError::DeviceFormat { code }
            | SyncCodeError::DeviceNotAllowed { code }
            | SyncCodeError::Identifier { code } => Some(code),
            _ => None,
        }
    }

    /// Returns true if this error came from building a device registry.
    pub fn is_registry_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Registry)
    }
}
