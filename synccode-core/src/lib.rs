//! # Synccode Core
//!
//! Parsing, validation and construction of device sync codes of the form
//! `[Series][Device]-[Identifier]`, e.g. `ABTU-1234`.
//!
//! ## Modules
//!
//! - `constants`: Grammar constants and the built-in HBX device table
//! - `types`: Core types (SyncCode, SyncCodeParts)
//! - `error`: Error type (SyncCodeError)
//! - `registry`: Immutable device registry
//! - `validator`: Strict split / validate / make / hyphenate
//! - `scanner`: Locating sync codes inside free-form text
//! - `sequence`: Identifier gap and duplicate discovery
//!
//! ## Example
//!
//! ```
//! use synccode_core::{SyncCodeParts, SyncCodeValidator};
//!
//! let validator = SyncCodeValidator::default();
//! assert_eq!(validator.validate("zbtu-0034").unwrap(), "ZBTU-0034");
//! assert!(!validator.is_valid("garbage"));
//! assert_eq!(
//!     validator.make(&SyncCodeParts::new("A", "BTU", 1234u32)).unwrap(),
//!     "ABTU-1234"
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod error;
pub mod registry;
pub mod scanner;
pub mod sequence;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use error::{ErrorKind, SyncCodeError};
pub use registry::{DeviceEntry, DeviceRegistry};
pub use types::{IdentifierPart, SyncCode, SyncCodeParts};
pub use validator::SyncCodeValidator;

/// Result type alias for sync code operations
pub type Result<T> = core::result::Result<T, SyncCodeError>;
