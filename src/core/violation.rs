use std::fmt;

use serde::{Deserialize, Serialize};

/// Message placeholder replaced by the rejected value.
pub const VALUE_PARAMETER: &str = "{{ value }}";

/// Render a rejected string for a violation report: wrapped in double quotes.
pub fn format_value(value: &str) -> String {
    format!("\"{value}\"")
}

/// A failed validation: the configured message and the rejected value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Message template as configured on the constraint.
    pub message: String,
    /// Quoted form of the rejected value (e.g. `"random text"`).
    pub display_value: String,
}

impl Violation {
    /// Create a violation for the rejected `value`.
    pub fn new(message: impl Into<String>, value: &str) -> Self {
        Self {
            message: message.into(),
            display_value: format_value(value),
        }
    }

    /// Message parameters, as `(placeholder, replacement)` pairs.
    pub fn parameters(&self) -> [(&'static str, &str); 1] {
        [(VALUE_PARAMETER, self.display_value.as_str())]
    }

    /// The message with every placeholder substituted.
    pub fn render(&self) -> String {
        self.parameters()
            .into_iter()
            .fold(self.message.clone(), |msg, (key, value)| msg.replace(key, value))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Result of validating a well-typed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// The value satisfies the constraint.
    Valid,
    /// The value was rejected.
    Invalid(Violation),
}

impl ValidationOutcome {
    /// Whether the value was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The violation, if the value was rejected.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(v) => Some(v),
        }
    }

    /// Convert into `Result<(), Violation>`.
    pub fn into_result(self) -> Result<(), Violation> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(v) => Err(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting() {
        assert_eq!(format_value("x"), "\"x\"");
        assert_eq!(format_value("random text"), "\"random text\"");
    }

    #[test]
    fn render_substitutes_value() {
        let v = Violation::new("{{ value }} is not a valid fiscal code.", "ABC");
        insta::assert_snapshot!(v.render(), @r#""ABC" is not a valid fiscal code."#);
    }

    #[test]
    fn render_without_placeholder() {
        let v = Violation::new("myMessage", "ABC");
        assert_eq!(v.to_string(), "myMessage");
        assert_eq!(v.display_value, "\"ABC\"");
    }

    #[test]
    fn outcome_accessors() {
        assert!(ValidationOutcome::Valid.is_valid());
        assert_eq!(ValidationOutcome::Valid.violation(), None);
        assert_eq!(ValidationOutcome::Valid.into_result(), Ok(()));

        let v = Violation::new("myMessage", "x");
        let outcome = ValidationOutcome::Invalid(v.clone());
        assert!(!outcome.is_valid());
        assert_eq!(outcome.violation(), Some(&v));
        assert_eq!(outcome.into_result(), Err(v));
    }
}
