//! Codice fiscale (Italian personal tax code) checksum.
//!
//! A fiscal code is 16 characters long. The first 15 encode surname, name,
//! birth date, sex and place of birth; the 16th is a control character
//! derived from position-weighted values of the first 15.
//!
//! # Example
//!
//! ```
//! use fiscale::fiscal_code::*;
//!
//! assert!(is_valid_fiscal_code("RSSMRC60A02F205A"));
//! assert_eq!(fiscal_code_control_char("RSSMRC60A02F205"), Some('A'));
//! ```

mod checksum;
mod tables;

pub use checksum::{FISCAL_CODE_LENGTH, fiscal_code_control_char, is_valid_fiscal_code};
