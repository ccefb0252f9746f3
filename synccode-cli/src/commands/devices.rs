use anyhow::{Context, Result};
use colored::*;
use synccode_core::SyncCodeValidator;

use crate::OutputFormat;

/// Render the device registry as a table or JSON
pub fn render(validator: &SyncCodeValidator, format: OutputFormat) -> Result<String> {
    let registry = validator.registry();

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(registry.entries())
            .with_context(|| "Failed to serialize device registry"),
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!(
                "{} {} {}\n",
                format!("{:<6}", "TOKEN").bold(),
                format!("{:<24}", "DESCRIPTION").bold(),
                "MODEL".bold()
            ));
            for entry in registry.entries() {
                out.push_str(&format!(
                    "{} {:<24} {}\n",
                    format!("{:<6}", entry.token).cyan(),
                    entry.description.as_deref().unwrap_or("-"),
                    entry.model.as_deref().unwrap_or("-")
                ));
            }
            out.push_str(&format!("\n{} device types", registry.len()));
            Ok(out)
        }
    }
}

pub fn execute(validator: &SyncCodeValidator, format: OutputFormat) -> Result<()> {
    println!("{}", render(validator, format)?);
    Ok(())
}
