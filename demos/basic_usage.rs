// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with log output:
//   cargo run --example basic_usage --features logging

use number_validator::prelude::*;

fn main() -> Result<(), ConfigurationError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Number Validator Example ===\n");

    // N(4.2), negative values rejected
    let validator = NumberValidator::new(4, 2, true)?;
    println!("Format: {}\n", validator.config());

    for value in ["0", "+1.23", "1,5", "-1.23", "1.234", "12.34", "1..2", "1.bc"] {
        match validator.check(value) {
            Ok(parsed) => println!(
                "{:>8}  accepted (sign {:?}, {} integer, {} fractional)",
                value,
                parsed.sign(),
                parsed.integer_len(),
                parsed.fractional_len()
            ),
            Err(rejection) => println!("{:>8}  rejected: {}", value, rejection),
        }
    }

    println!("\nConfiguration errors:");
    for (precision, scale) in [(0, 0), (1, 1), (3, -1)] {
        if let Err(error) = NumberValidator::new(precision, scale, false) {
            println!("  ({}, {}): {}", precision, scale, error);
        }
    }

    println!("\nNotation:");
    let signed = NumberValidator::from_notation("N(10.3)")?;
    println!(
        "  {} parses \"-1234,567\" as {:?}",
        signed.config(),
        signed.parse_decimal("-1234,567")
    );

    Ok(())
}
