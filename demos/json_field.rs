use fiscale::core::*;
use serde_json::json;

fn main() {
    env_logger::init();

    // Constraint options as a form framework would pass them.
    let constraint: ItalianFiscalData = match serde_json::from_value(json!({
        "canBeFiscalCode": false,
        "canBeVatNumber": true,
        "message": "{{ value }} is not an Italian VAT number",
    })) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("invalid constraint options: {e}");
            return;
        }
    };

    let form = json!({
        "company": "ACME S.r.l.",
        "vat": "01114601006",
        "billing_vat": "01124601006",
        "tags": ["client"],
        "referrer_vat": null,
    });

    let validator = ItalianFiscalDataValidator::new();
    for field in ["vat", "billing_vat", "tags", "referrer_vat"] {
        let value = &form[field];
        match validator.validate(value, &constraint) {
            Ok(ValidationOutcome::Valid) => println!("  {field}: ok"),
            Ok(ValidationOutcome::Invalid(v)) => println!("  {field}: {v}"),
            Err(e) => println!("  {field}: misconfigured field ({e})"),
        }
    }
}
