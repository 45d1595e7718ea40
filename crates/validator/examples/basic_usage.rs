//! Basic usage example for ruleval

use ruleval::DynamicValidation;
use serde_json::json;

fn main() {
    let mut valid = DynamicValidation::new();

    let form = json!({
        "name": "alphaman",
        "age": 9997,
        "email": "not-an-email",
        "tags": ["a", "b"],
    });

    let rules = [
        ("name", "Required;Alpha;MaxSize(32)"),
        ("age", "Required;Min(9998)"),
        ("email", "Required;Email"),
        ("tags", "MinSize(1);MaxSize(5)"),
        ("slug", "Match(/^[a-z0-9-]+$/)"),
    ];

    for (field, rule) in rules {
        let value = form.get(field).cloned().unwrap_or_default();
        match valid.valid_by_strings(field, rule, value) {
            Ok(_) => {}
            Err(e) => println!("✗ rule for '{field}' is invalid: {e}"),
        }
    }

    if valid.has_errors() {
        for (field, errors) in valid.error_map() {
            for error in errors {
                println!("✗ {field}: {} ({})", error.message, error.name);
            }
        }
    } else {
        println!("✓ form is valid");
    }

    // Malformed rule strings are errors, not failed validations
    if let Err(e) = valid.valid_by_strings("age", "Range(1)", 30) {
        println!("\nrule error: {e}");
    }
}
