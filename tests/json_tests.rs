#![cfg(feature = "json")]

use fiscale::core::*;
use serde_json::{Value, json};

fn check(value: &Value, options: Value) -> Result<ValidationOutcome, FiscalDataError> {
    let constraint: ItalianFiscalData = serde_json::from_value(options).unwrap();
    ItalianFiscalDataValidator::new().validate(value, &constraint)
}

#[test]
fn json_null_and_empty_string_are_valid() {
    assert!(check(&json!(null), json!({})).unwrap().is_valid());
    assert!(check(&json!(""), json!({})).unwrap().is_valid());
}

#[test]
fn json_strings_are_validated() {
    let fc_only = json!({"canBeFiscalCode": true, "canBeVatNumber": false, "message": "myMessage"});
    assert!(check(&json!("RSSMRC60A02F205A"), fc_only.clone()).unwrap().is_valid());

    let outcome = check(&json!("01114601006"), fc_only).unwrap();
    assert_eq!(
        outcome.into_result().unwrap_err(),
        Violation {
            message: "myMessage".into(),
            display_value: "\"01114601006\"".into(),
        }
    );
}

#[test]
fn json_array_is_a_type_error() {
    let err = check(&json!(["array"]), json!({})).unwrap_err();
    insta::assert_snapshot!(err, @r#"expected argument of type "string", "array" given"#);
}

#[test]
fn json_scalars_are_type_errors() {
    // An 11-digit number is still not a string.
    for value in [json!(1114601006), json!(true), json!({"vat": "01114601006"})] {
        assert!(matches!(
            check(&value, json!({})),
            Err(FiscalDataError::UnexpectedType { .. })
        ));
    }
}

#[test]
fn violation_serializes() {
    let outcome = check(&json!("random text"), json!({"message": "myMessage"})).unwrap();
    let serialized = serde_json::to_value(outcome.violation().unwrap()).unwrap();
    assert_eq!(
        serialized,
        json!({"message": "myMessage", "display_value": "\"random text\""})
    );
}

#[test]
fn constraint_round_trips_through_json() {
    let constraint = ItalianFiscalData::vat_number_only().with_message("myMessage");
    let serialized = serde_json::to_value(&constraint).unwrap();
    assert_eq!(
        serialized,
        json!({"canBeFiscalCode": false, "canBeVatNumber": true, "message": "myMessage"})
    );
}
