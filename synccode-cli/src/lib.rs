//! Library entry for synccode-cli used by integration tests and embedding.

pub mod commands;
pub mod config;

// Re-export commands for convenience
pub use commands::*;

/// Shared output format for listing commands
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

// Re-export commonly used items
pub use crate::config::{load_registry, load_validator};
