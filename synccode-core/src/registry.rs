//! Immutable device registry
//!
//! A registry is the ordered table of device tokens a validator accepts,
//! together with optional human-readable descriptions and model numbers.
//! It is built once and never mutated, so a single instance can be shared
//! by any number of callers.

use crate::constants::{is_device_token, HBX_DEVICES};
use crate::error::SyncCodeError;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::debug;

/// A single device type known to a registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEntry {
    /// Three-letter device token
    pub token: String,

    /// Human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hardware model number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl DeviceEntry {
    /// Create an entry with no description or model
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            description: None,
            model: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a model number
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Ordered, immutable set of allowed device tokens
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    entries: Vec<DeviceEntry>,
    index: HashMap<String, usize>,
}

impl DeviceRegistry {
    /// Build a registry from entries, preserving their order
    ///
    /// Tokens are stored uppercased. Fails if a token is not three ASCII
    /// letters or if the same token (ignoring case) appears twice.
    pub fn new(entries: impl IntoIterator<Item = DeviceEntry>) -> Result<Self, SyncCodeError> {
        let mut registry = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for mut entry in entries {
            if !is_device_token(&entry.token) {
                return Err(SyncCodeError::InvalidDeviceToken(entry.token));
            }

            entry.token.make_ascii_uppercase();
            if registry.index.contains_key(&entry.token) {
                return Err(SyncCodeError::DuplicateDevice(entry.token));
            }

            registry.push(entry);
        }

        #[cfg(feature = "logging")]
        debug!("Built device registry with {} entries", registry.len());

        Ok(registry)
    }

    /// The built-in HBX Controls device table
    pub fn hbx() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(HBX_DEVICES.len()),
            index: HashMap::with_capacity(HBX_DEVICES.len()),
        };

        for (token, description, model) in HBX_DEVICES {
            registry.push(
                DeviceEntry::new(*token)
                    .with_description(*description)
                    .with_model(*model),
            );
        }

        registry
    }

    fn push(&mut self, entry: DeviceEntry) {
        self.index.insert(entry.token.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Number of registered devices
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no devices
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `token` is registered (exact match on the uppercase token)
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Look up an entry by token
    pub fn get(&self, token: &str) -> Option<&DeviceEntry> {
        self.index.get(token).map(|&i| &self.entries[i])
    }

    /// All entries in registry order
    pub fn entries(&self) -> &[DeviceEntry] {
        &self.entries
    }

    /// Tokens in registry order
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.token.as_str())
    }

    /// `(token, description)` pairs for entries that carry a description
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .filter_map(|e| Some((e.token.as_str(), e.description.as_deref()?)))
    }

    /// Description for a single token
    pub fn description(&self, token: &str) -> Option<&str> {
        self.get(token)?.description.as_deref()
    }

    /// `(token, model)` pairs for entries that carry a model number
    pub fn models(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .filter_map(|e| Some((e.token.as_str(), e.model.as_deref()?)))
    }

    /// Model number for a single token
    pub fn model(&self, token: &str) -> Option<&str> {
        self.get(token)?.model.as_deref()
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::hbx()
    }
}

impl PartialEq for DeviceRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for DeviceRegistry {}

impl TryFrom<Vec<DeviceEntry>> for DeviceRegistry {
    type Error = SyncCodeError;

    fn try_from(entries: Vec<DeviceEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl<'a> TryFrom<&'a [&'a str]> for DeviceRegistry {
    type Error = SyncCodeError;

    fn try_from(tokens: &'a [&'a str]) -> Result<Self, Self::Error> {
        Self::new(tokens.iter().map(|t| DeviceEntry::new(t.to_string())))
    }
}
