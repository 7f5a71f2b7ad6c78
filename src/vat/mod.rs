//! Partita IVA (Italian VAT number) checksum.
//!
//! An Italian VAT number is 11 decimal digits; the last one is a Luhn
//! check digit over the first ten.
//!
//! # Example
//!
//! ```
//! use fiscale::vat::*;
//!
//! assert!(is_valid_vat_number("01114601006"));
//! assert_eq!(vat_number_check_digit("0111460100"), Some('6'));
//! assert!(!is_valid_vat_number("00000000000"));
//! ```

mod luhn;
mod partita_iva;

pub use luhn::luhn_checksum;
pub use partita_iva::{VAT_NUMBER_LENGTH, is_valid_vat_number, vat_number_check_digit};
