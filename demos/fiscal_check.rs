use fiscale::core::*;
use fiscale::fiscal_code::fiscal_code_control_char;
use fiscale::vat::vat_number_check_digit;

fn main() {
    // RUST_LOG=debug shows why values were rejected
    env_logger::init();

    let validator = ItalianFiscalDataValidator::new();
    let constraint = ItalianFiscalData::new().with_message("{{ value }} is not valid fiscal data");

    println!("=== Italian Fiscal Data Validation ===\n");

    let values = [
        "RSSMRC60A02F205A", // fiscal code
        "01114601006",      // VAT number
        "RSSMRC60A02F205S", // wrong control character
        "rssmrc60a02f205a", // lowercase is not normalized
        "0111460100",       // too short
        "00000000000",      // checksum zero
        "",                 // empty: not this validator's concern
    ];

    for value in &values {
        let kind = validator.matching_kind(value, &constraint);
        match validator.validate(*value, &constraint) {
            Ok(ValidationOutcome::Valid) => println!("  {value:?} => valid ({kind:?})"),
            Ok(ValidationOutcome::Invalid(v)) => println!("  {value:?} => INVALID: {v}"),
            Err(e) => println!("  {value:?} => ERROR: {e}"),
        }
    }

    println!("\n=== Check Characters ===\n");

    let prefix = "RSSMRC60A02F205";
    match fiscal_code_control_char(prefix) {
        Some(c) => println!("  fiscal code {prefix}? => {prefix}{c}"),
        None => println!("  fiscal code {prefix}? => no control character"),
    }

    let prefix = "0111460100";
    match vat_number_check_digit(prefix) {
        Some(d) => println!("  VAT number {prefix}? => {prefix}{d}"),
        None => println!("  VAT number {prefix}? => no check digit"),
    }
}
