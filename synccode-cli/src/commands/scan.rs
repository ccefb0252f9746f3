use anyhow::{Context, Result};
use std::fs;
use synccode_core::{
    scanner::{scan_text_with_stats, ScanStats},
    SyncCodeValidator,
};
use tracing::info;

use super::read_input;

pub fn execute(
    validator: &SyncCodeValidator,
    input: &str,
    output: Option<&str>,
    stats_only: bool,
) -> Result<ScanStats> {
    info!("Scanning input: {}", input);

    let text = read_input(input)?;
    info!("Input size: {} bytes", text.len());

    let (located, stats) = scan_text_with_stats(validator, &text);

    // Print statistics
    println!("\n=== Scan Results ===");
    println!("Bytes scanned:     {} bytes", stats.bytes_scanned);
    println!("Hyphens seen:      {}", stats.hyphens_seen);
    println!("Candidates:        {}", stats.candidates_found);
    println!("Valid codes:       {}", stats.codes_found);
    println!("Rejected:          {}", stats.rejected);
    println!("Acceptance rate:   {:.2}%", stats.acceptance_rate());
    println!();

    if stats_only {
        return Ok(stats);
    }

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&located)
            .with_context(|| "Failed to serialize located codes")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Located codes written to: {}", output_path);
    } else {
        println!("=== Located Codes ===");
        for lc in &located {
            println!("{} @ line {}, offset {}", lc.code, lc.line, lc.offset);
        }
    }

    Ok(stats)
}
