pub mod devices;
pub mod make;
pub mod scan;
pub mod sequence;
pub mod validate;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};

/// Read an input file, or stdin when `input` is `-`
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .with_context(|| "Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}
