//! # fiscale
//!
//! Validation of Italian fiscal data: the *codice fiscale* (16-character
//! personal tax code) and the *partita IVA* (11-digit VAT number).
//!
//! Both checks are pure functions over `&str` backed by constant tables,
//! safe to call from any number of threads. Input is taken as-is: no
//! trimming, no case folding, no `IT` prefix stripping.
//!
//! ## Quick Start
//!
//! ```rust
//! use fiscale::core::*;
//!
//! let validator = ItalianFiscalDataValidator::new();
//! let constraint = ItalianFiscalData::new().with_message("{{ value }} is not valid.");
//!
//! assert!(validator.validate("RSSMRC60A02F205A", &constraint).unwrap().is_valid());
//! assert!(validator.validate("01114601006", &constraint).unwrap().is_valid());
//!
//! let outcome = validator.validate("01124601006", &constraint).unwrap();
//! assert_eq!(outcome.violation().unwrap().render(), "\"01124601006\" is not valid.");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Constraint, validator, violations |
//! | `json` | Validate `serde_json::Value` fields |
//! | `all` | Everything |

pub mod fiscal_code;
pub mod vat;

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
