//! Basic validation example

use synccode_core::{SyncCodeParts, SyncCodeValidator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Synccode Basic Validation Example\n");

    let validator = SyncCodeValidator::default();
    let code = "ZBTU-0034";

    println!("Allowed devices: {:?}", validator.allowed_devices());
    println!("split:      {:?}", validator.split(code)?);
    println!("series:     {}", validator.series(code)?);
    println!("device:     {}", validator.device(code)?);
    println!("identifier: {}", validator.identifier(code)?);
    println!("validate:   {}", validator.validate(code)?);
    println!("hyphenate:  {}", validator.hyphenate("ZBTU0034"));
    println!(
        "make:       {}",
        validator.make(&SyncCodeParts::new("A", "BTU", 1234u32))?
    );

    let device = validator.device(code)?;
    println!(
        "\n{} is a {} (model {})",
        code,
        validator.device_description(&device).unwrap_or("unknown device"),
        validator.device_model(&device).unwrap_or("-")
    );

    // Rejected inputs report the first rule they break
    for bad in ["ZBTU0034", "1BTU-0034", "ZXYZ-0034", "ZBTU-34"] {
        match validator.validate(bad) {
            Ok(canonical) => println!("{} -> {}", bad, canonical),
            Err(e) => println!("{} -> {}", bad, e),
        }
    }

    Ok(())
}
