use std::any::Any;

use serde::{Deserialize, Serialize};

/// Default violation message of [`ItalianFiscalData`].
pub const DEFAULT_MESSAGE: &str = "This value is not a valid italian fiscal data.";

/// A validation constraint as seen by a generic validation framework.
///
/// Validators receive constraints as `&dyn Constraint` and downcast them
/// to the concrete type they handle.
pub trait Constraint: Any {
    /// Short type name used in error reports.
    fn name(&self) -> &'static str;

    /// Upcast for downcasting to the concrete constraint type.
    fn as_any(&self) -> &dyn Any;
}

/// The two kinds of Italian fiscal data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiscalDataKind {
    /// Codice fiscale, 16 characters.
    FiscalCode,
    /// Partita IVA, 11 digits.
    VatNumber,
}

/// Constraint: the value must be an Italian fiscal code and/or VAT number.
///
/// Deserializes from option maps with camelCase keys; missing keys keep
/// their defaults.
///
/// ```
/// use fiscale::core::*;
///
/// let constraint: ItalianFiscalData =
///     serde_json::from_str(r#"{"canBeVatNumber": false, "message": "myMessage"}"#).unwrap();
/// assert!(constraint.can_be_fiscal_code);
/// assert!(!constraint.can_be_vat_number);
/// assert_eq!(constraint.message, "myMessage");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItalianFiscalData {
    /// Accept a valid fiscal code.
    pub can_be_fiscal_code: bool,
    /// Accept a valid VAT number.
    pub can_be_vat_number: bool,
    /// Violation message; `{{ value }}` is replaced by the rejected value.
    pub message: String,
}

impl Default for ItalianFiscalData {
    fn default() -> Self {
        Self {
            can_be_fiscal_code: true,
            can_be_vat_number: true,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl ItalianFiscalData {
    /// Accept both fiscal codes and VAT numbers, with the default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept fiscal codes only.
    pub fn fiscal_code_only() -> Self {
        Self {
            can_be_vat_number: false,
            ..Self::default()
        }
    }

    /// Accept VAT numbers only.
    pub fn vat_number_only() -> Self {
        Self {
            can_be_fiscal_code: false,
            ..Self::default()
        }
    }

    /// Replace the violation message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Whether values of `kind` satisfy this constraint.
    pub fn accepts(&self, kind: FiscalDataKind) -> bool {
        match kind {
            FiscalDataKind::FiscalCode => self.can_be_fiscal_code,
            FiscalDataKind::VatNumber => self.can_be_vat_number,
        }
    }
}

impl Constraint for ItalianFiscalData {
    fn name(&self) -> &'static str {
        "ItalianFiscalData"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
