//! Device registry configuration
//!
//! `--registry FILE` replaces the built-in HBX table with a JSON file,
//! either a list of entries or a bare list of tokens:
//!
//! ```json
//! [{"token": "BTU", "description": "Energy Sensor", "model": "BTU-0100"}]
//! ["BTU", "ZON"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use synccode_core::{DeviceEntry, DeviceRegistry, SyncCodeValidator};
use tracing::{debug, info};

#[derive(Deserialize)]
#[serde(untagged)]
enum RegistryFile {
    Tokens(Vec<String>),
    Entries(Vec<DeviceEntry>),
}

impl RegistryFile {
    fn into_entries(self) -> Vec<DeviceEntry> {
        match self {
            RegistryFile::Tokens(tokens) => tokens.into_iter().map(DeviceEntry::new).collect(),
            RegistryFile::Entries(entries) => entries,
        }
    }
}

/// Parse a registry from JSON text
pub fn parse_registry(json: &str) -> Result<DeviceRegistry> {
    let file: RegistryFile = serde_json::from_str(json)
        .with_context(|| "Registry must be a JSON array of device entries or tokens")?;

    let registry = DeviceRegistry::new(file.into_entries())?;
    Ok(registry)
}

/// Load a registry from a JSON file
pub fn load_registry(path: &str) -> Result<DeviceRegistry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry file: {}", path))?;

    let registry =
        parse_registry(&content).with_context(|| format!("Invalid registry file: {}", path))?;

    info!("Loaded {} device types from {}", registry.len(), path);
    Ok(registry)
}

/// Build a validator from an optional registry file, defaulting to the HBX table
pub fn load_validator(registry_path: Option<&str>) -> Result<SyncCodeValidator> {
    match registry_path {
        Some(path) => Ok(SyncCodeValidator::new(load_registry(path)?)),
        None => {
            debug!("Using built-in HBX device registry");
            Ok(SyncCodeValidator::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_list() {
        let registry = parse_registry(r#"["btu", "ZON"]"#).unwrap();
        assert_eq!(registry.tokens().collect::<Vec<_>>(), ["BTU", "ZON"]);
    }

    #[test]
    fn test_parse_entry_list() {
        let registry =
            parse_registry(r#"[{"token": "VLV", "description": "Valve Actuator"}]"#).unwrap();
        assert_eq!(registry.description("VLV"), Some("Valve Actuator"));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        let err = parse_registry(r#"["BTU", "B2U"]"#).unwrap_err();
        assert!(err.to_string().contains("B2U"));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_registry(r#"{"token": "BTU"}"#).is_err());
    }
}
