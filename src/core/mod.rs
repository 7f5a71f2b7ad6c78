//! Fiscal data constraint, validator, and violation reporting.
//!
//! This is the layer a validation framework talks to: it gates the input
//! (null, empty, wrong type), dispatches to the fiscal code and VAT number
//! checksums according to the constraint, and builds the violation.

mod constraint;
mod error;
mod validator;
mod value;
mod violation;

pub use constraint::*;
pub use error::*;
pub use validator::*;
pub use value::FieldValue;
pub use violation::*;
