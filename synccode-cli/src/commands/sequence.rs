use anyhow::{Context, Result};
use colored::*;
use std::fs;
use synccode_core::{
    scanner::scan_text,
    sequence::{discover_sequences, SequenceStats},
    SyncCodeValidator,
};
use tracing::info;

use super::read_input;

pub fn execute(
    validator: &SyncCodeValidator,
    input: &str,
    output: Option<&str>,
) -> Result<SequenceStats> {
    info!("Discovering sequences in: {}", input);

    let text = read_input(input)?;
    let codes: Vec<_> = scan_text(validator, &text)
        .into_iter()
        .map(|lc| lc.code)
        .collect();

    info!("Found {} codes", codes.len());

    let report = discover_sequences(&codes);
    let stats = report.stats();

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&report)
            .with_context(|| "Failed to serialize sequence report")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Sequence report written to: {}", output_path);
    }

    println!("\n=== Sequences ===");
    for group in &report.groups {
        let range = match (group.first(), group.last()) {
            (Some(first), Some(last)) => format!("{:04}..={:04}", first, last),
            _ => String::from("-"),
        };
        let status = if group.is_contiguous() {
            "✓".green()
        } else {
            "!".yellow()
        };
        println!(
            "{} {}  {}  ({} codes)",
            status,
            group.prefix(),
            range,
            group.identifiers.len()
        );

        for gap in &group.gaps {
            println!(
                "    missing {} between {:04} and {:04}",
                gap.missing(),
                gap.before,
                gap.after
            );
        }
        if !group.duplicates.is_empty() {
            let dups: Vec<_> = group.duplicates.iter().map(|d| format!("{:04}", d)).collect();
            println!("    {} {}", "duplicated:".red(), dups.join(", "));
        }
    }

    println!("\n=== Summary ===");
    println!("Groups:            {}", stats.groups);
    println!("Unique codes:      {}", stats.unique_codes);
    println!("Duplicates:        {}", stats.duplicates);
    println!("Gaps:              {}", stats.gaps);
    println!("Missing:           {}", stats.missing);
    println!("Continuity:        {:.2}%", stats.continuity);

    Ok(stats)
}
