//! Example demonstrating code recovery from a messy installation log

use synccode_core::{scanner::scan_text_with_stats, sequence::discover_sequences, SyncCodeValidator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Synccode Label Recovery Example\n");

    // Step 1: Build an installation log for a batch of 10 energy sensors
    println!("Step 1: Writing installation log...");
    let mut log = String::new();
    for i in 1..=10 {
        // Units 4 and 7 were never installed
        if i == 4 || i == 7 {
            continue;
        }
        log.push_str(&format!("unit {:>2}: paired abtu-{:04}, zone controller ZZON-0001\n", i, i));
    }
    log.push_str("note: label AXYZ-0011 could not be read\n");
    log.push_str("note: re-paired ABTU-0005 after reset\n");
    println!("{}", log);

    // Step 2: Scan
    println!("Step 2: Scanning log...");
    let validator = SyncCodeValidator::default();
    let (located, stats) = scan_text_with_stats(&validator, &log);

    println!("Candidates:      {}", stats.candidates_found);
    println!("Valid codes:     {}", stats.codes_found);
    println!("Rejected:        {}", stats.rejected);
    println!("Acceptance rate: {:.2}%\n", stats.acceptance_rate());

    // Step 3: Sequence analysis
    println!("Step 3: Checking sequences...");
    let codes: Vec<_> = located.into_iter().map(|lc| lc.code).collect();
    let report = discover_sequences(&codes);

    for group in &report.groups {
        println!("{}: {} distinct identifiers", group.prefix(), group.identifiers.len());
        for gap in &group.gaps {
            let missing: Vec<_> = gap
                .missing_identifiers()
                .map(|n| format!("{}-{:04}", group.prefix(), n))
                .collect();
            println!("  missing: {}", missing.join(", "));
        }
        for dup in &group.duplicates {
            println!("  seen more than once: {}-{:04}", group.prefix(), dup);
        }
    }

    let summary = report.stats();
    println!("\nContinuity: {:.2}%", summary.continuity);

    Ok(())
}
