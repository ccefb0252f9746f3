use anyhow::Result;
use colored::*;
use synccode_core::{validator::hyphenate, SyncCodeError, SyncCodeValidator};
use tracing::{debug, info};

use super::read_input;

/// Result of validating a single input
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The input as given
    pub input: String,
    /// Canonical form, or the first violated rule
    pub result: Result<String, SyncCodeError>,
}

/// Validate each code, optionally inserting a missing hyphen first
pub fn check(validator: &SyncCodeValidator, codes: &[String], add_hyphen: bool) -> Vec<Outcome> {
    codes
        .iter()
        .map(|code| {
            let result = if add_hyphen {
                validator.validate(&hyphenate(code))
            } else {
                validator.validate(code)
            };
            Outcome {
                input: code.clone(),
                result,
            }
        })
        .collect()
}

/// Collect codes from the command line and, if given, an input file (one per line)
pub fn collect_codes(codes: Vec<String>, input: Option<&str>) -> Result<Vec<String>> {
    let mut all = codes;
    if let Some(input) = input {
        let content = read_input(input)?;
        all.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from),
        );
    }
    Ok(all)
}

/// Validate codes and print the outcome of each; returns true if all passed
pub fn execute(
    validator: &SyncCodeValidator,
    codes: Vec<String>,
    input: Option<&str>,
    add_hyphen: bool,
    quiet: bool,
) -> Result<bool> {
    let codes = collect_codes(codes, input)?;
    info!("Validating {} codes", codes.len());

    let outcomes = check(validator, &codes, add_hyphen);
    let failures = outcomes.iter().filter(|o| o.result.is_err()).count();

    if !quiet {
        for outcome in &outcomes {
            match &outcome.result {
                Ok(canonical) => println!("{} {}", "✓".green(), canonical),
                Err(e) => {
                    debug!("{:?} rejected: {:?}", outcome.input, e.kind());
                    println!("{} {}", "✗".red(), e);
                }
            }
        }

        if outcomes.len() > 1 {
            println!(
                "\n{} valid, {} invalid",
                (outcomes.len() - failures).to_string().green(),
                if failures > 0 {
                    failures.to_string().red()
                } else {
                    failures.to_string().normal()
                }
            );
        }
    }

    Ok(failures == 0)
}
