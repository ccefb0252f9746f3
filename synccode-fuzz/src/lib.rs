//! Fuzzing entry points for synccode-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_validate

use synccode_core::{scanner::scan_text, validator::hyphenate, SyncCodeValidator};

pub fn fuzz_validate(data: &[u8]) {
    let Ok(code) = std::str::from_utf8(data) else {
        return;
    };
    let validator = SyncCodeValidator::default();

    // Should never panic, and canonical output must re-validate to itself
    if let Ok(canonical) = validator.validate(code) {
        assert_eq!(validator.validate(&canonical).as_deref(), Ok(canonical.as_str()));
    }
    let _ = validator.validate(&hyphenate(code));
}

pub fn fuzz_scan(data: &[u8]) {
    let text = String::from_utf8_lossy(data);
    let validator = SyncCodeValidator::default();

    // Scanner should never panic
    let _ = scan_text(&validator, &text);
}
