use std::borrow::Cow;

use super::constraint::{Constraint, FiscalDataKind, ItalianFiscalData};
use super::error::FiscalDataError;
use super::value::FieldValue;
use super::violation::{ValidationOutcome, Violation};
use crate::fiscal_code::is_valid_fiscal_code;
use crate::vat::is_valid_vat_number;

/// A validator that a generic validation framework can drive.
pub trait ConstraintValidator {
    /// Validate `value` against `constraint`.
    ///
    /// Returns `Err` when the validator is misused (foreign constraint,
    /// unsupported value type), `Ok(ValidationOutcome::Invalid(_))` when
    /// the value simply fails the constraint.
    fn validate(
        &self,
        value: FieldValue<'_>,
        constraint: &dyn Constraint,
    ) -> Result<ValidationOutcome, FiscalDataError>;
}

/// Validates Italian fiscal data: a fiscal code or a VAT number.
///
/// Stateless; a single instance can be shared across threads.
///
/// ```
/// use fiscale::core::*;
///
/// let validator = ItalianFiscalDataValidator::new();
/// let constraint = ItalianFiscalData::new();
///
/// assert!(validator.validate("RSSMRC60A02F205A", &constraint).unwrap().is_valid());
/// assert!(validator.validate("01114601006", &constraint).unwrap().is_valid());
/// assert!(validator.validate(None::<&str>, &constraint).unwrap().is_valid());
///
/// let outcome = validator.validate("random text", &constraint).unwrap();
/// assert_eq!(outcome.violation().unwrap().display_value, "\"random text\"");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ItalianFiscalDataValidator;

impl ItalianFiscalDataValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate `value` against `constraint`.
    ///
    /// Null and empty values are always valid. Values that are neither
    /// strings nor stringable are rejected with
    /// [`FiscalDataError::UnexpectedType`].
    pub fn validate<'a>(
        &self,
        value: impl Into<FieldValue<'a>>,
        constraint: &ItalianFiscalData,
    ) -> Result<ValidationOutcome, FiscalDataError> {
        let text: Cow<'_, str> = match value.into() {
            FieldValue::Null => return Ok(ValidationOutcome::Valid),
            FieldValue::Str(s) => Cow::Borrowed(s),
            FieldValue::Stringable(v) => Cow::Owned(v.to_string()),
            FieldValue::Other(given) => {
                return Err(FiscalDataError::unexpected_type("string", given));
            }
        };

        if text.is_empty() {
            return Ok(ValidationOutcome::Valid);
        }

        match self.matching_kind(&text, constraint) {
            Some(kind) => {
                log::trace!("value accepted as {kind:?}");
                Ok(ValidationOutcome::Valid)
            }
            None => {
                log::debug!(
                    "rejected {}-byte value (fiscal code: {}, VAT number: {})",
                    text.len(),
                    constraint.can_be_fiscal_code,
                    constraint.can_be_vat_number
                );
                Ok(ValidationOutcome::Invalid(Violation::new(
                    constraint.message.as_str(),
                    &text,
                )))
            }
        }
    }

    /// The first kind of fiscal data, among those `constraint` accepts,
    /// that `value` is valid as. Fiscal codes are tried before VAT numbers.
    pub fn matching_kind(
        &self,
        value: &str,
        constraint: &ItalianFiscalData,
    ) -> Option<FiscalDataKind> {
        if constraint.accepts(FiscalDataKind::FiscalCode) && is_valid_fiscal_code(value) {
            return Some(FiscalDataKind::FiscalCode);
        }

        if constraint.accepts(FiscalDataKind::VatNumber) && is_valid_vat_number(value) {
            return Some(FiscalDataKind::VatNumber);
        }

        None
    }
}

impl ConstraintValidator for ItalianFiscalDataValidator {
    fn validate(
        &self,
        value: FieldValue<'_>,
        constraint: &dyn Constraint,
    ) -> Result<ValidationOutcome, FiscalDataError> {
        let Some(constraint) = constraint.as_any().downcast_ref::<ItalianFiscalData>() else {
            return Err(FiscalDataError::unexpected_type(
                "ItalianFiscalData",
                constraint.name(),
            ));
        };

        ItalianFiscalDataValidator::validate(self, value, constraint)
    }
}

/// Validate `value` against `constraint` with a fresh [`ItalianFiscalDataValidator`].
pub fn validate_fiscal_data<'a>(
    value: impl Into<FieldValue<'a>>,
    constraint: &ItalianFiscalData,
) -> Result<ValidationOutcome, FiscalDataError> {
    ItalianFiscalDataValidator.validate(value, constraint)
}
