//! Integration tests for rule-string validation through the public entry point.

use pretty_assertions::assert_eq;
use rstest::rstest;
use ruleval::prelude::*;
use serde_json::{Value, json};

// ============================================================================
// END-TO-END: rule string + value → verdict
// ============================================================================

#[rstest]
#[case("Required", json!("test"), true)]
#[case("Required", json!(""), false)]
#[case("Required;Alpha", json!("alphaman"), true)]
#[case("Required;Alpha", json!("4lph4Num3r1cman"), false)]
#[case("Required;Numeric", json!("99999"), true)]
#[case("Required;Min(9998)", json!(9999), true)]
#[case("Required;Min(9998)", json!(9997), false)]
#[case("Required;MinSize(6)", json!("teststring"), true)]
#[case("Required;MinSize(76)", json!("teststring"), false)]
#[case("Range(1, 140)", json!(30), true)]
#[case("Range(1, 140)", json!(141), false)]
#[case("Required;Email", json!("dev@example.com"), true)]
#[case("Required;Email", json!("dev@"), false)]
#[case("Match(/^v\\d+\\.\\d+$/)", json!("v1.2"), true)]
#[case("Match(/^v\\d+\\.\\d+$/)", json!("1.2"), false)]
#[case("Required;Match(/^[a-z;,()]+$/);MaxSize(10)", json!("a;b,c(d)"), true)]
#[case("Length(3)", json!(["a", "b", "c"]), true)]
#[case("AlphaDash;MaxSize(16)", json!("user_name-01"), true)]
#[case("IP", json!("10.0.0.1"), true)]
#[case("Mobile", json!("13800138000"), true)]
#[case("Phone", json!("not a phone"), false)]
fn test_valid_by_strings(#[case] rule: &str, #[case] value: Value, #[case] expected: bool) {
    let mut valid = DynamicValidation::new();
    assert_eq!(valid.valid_by_strings("MyField", rule, value), Ok(expected));
}

#[test]
fn test_reused_context_with_clear() {
    let mut valid = DynamicValidation::new();

    assert_eq!(valid.valid_by_strings("MyField", "Required", "test"), Ok(true));
    assert_eq!(valid.valid_by_strings("MyField", "Required", ""), Ok(false));
    valid.clear();

    assert_eq!(
        valid.valid_by_strings("MyField", "Required;Alpha", "alphaman"),
        Ok(true)
    );
    valid.clear();

    assert_eq!(
        valid.valid_by_strings("MyField", "Required;MinSize(76)", "teststring"),
        Ok(false)
    );
}

#[test]
fn test_empty_rule_on_fresh_context() {
    let mut valid = DynamicValidation::new();
    assert_eq!(valid.valid_by_strings("MyField", "", "anything"), Ok(true));
    assert_eq!(valid.valid_by_strings("MyField", "", Value::Null), Ok(true));
}

// ============================================================================
// ERROR RECORDS
// ============================================================================

#[test]
fn test_error_records() {
    let mut valid = DynamicValidation::new();
    valid
        .valid_by_strings("age", "Required;Range(18, 65)", 70)
        .unwrap();
    valid
        .valid_by_strings("nick", "Required;MinSize(3)", "")
        .unwrap();

    let map = valid.error_map();
    assert_eq!(map.len(), 2);

    let age = &map["age"];
    assert_eq!(age.len(), 1);
    assert_eq!(age[0].key, "age.Range");
    assert_eq!(age[0].name, "Range");
    assert_eq!(age[0].message, "Range is 18 to 65");
    assert_eq!(age[0].value, json!(70));
    assert_eq!(age[0].param("min"), Some("18"));
    assert_eq!(age[0].param("max"), Some("65"));

    let nick: Vec<_> = map["nick"].iter().map(|e| e.name.as_str()).collect();
    assert_eq!(nick, vec!["Required", "MinSize"]);
}

#[test]
fn test_match_error_recorded_first() {
    let mut valid = DynamicValidation::new();
    valid
        .valid_by_strings("code", "Required;Match(/^[A-Z]{3}$/)", "")
        .unwrap();

    let keys: Vec<_> = valid
        .validation()
        .errors()
        .iter()
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(keys, vec!["code.Match", "code.Required"]);
}

#[test]
fn test_dotted_field_names() {
    let mut valid = DynamicValidation::new();
    valid
        .valid_by_strings("user.address.zip", "ZipCode", "abc")
        .unwrap();
    assert_eq!(valid.validation().errors_for("user.address.zip").len(), 1);
}

#[test]
fn test_errors_serialize() {
    let mut valid = DynamicValidation::new();
    valid.valid_by_strings("age", "Min(18)", 3).unwrap();

    let json = serde_json::to_value(valid.error_map()).unwrap();
    assert_eq!(
        json,
        json!({
            "age": [{
                "key": "age.Min",
                "field": "age",
                "name": "Min",
                "message": "Minimum is 18",
                "value": 3,
                "params": [["min", "18"]],
            }]
        })
    );
}

// ============================================================================
// RULE ERRORS
// ============================================================================

#[test]
fn test_every_zero_arity_validator_compiles_alone() {
    let registry = Registry::global();
    for descriptor in registry.descriptors() {
        if descriptor.arity() == 0 {
            let mut valid = DynamicValidation::new();
            assert!(
                valid
                    .valid_by_strings("f", descriptor.name(), "x")
                    .is_ok(),
                "{} should compile without parameters",
                descriptor.name()
            );
        }
    }
}

#[test]
fn test_wrong_arity_names_required_count() {
    let registry = Registry::global();
    for descriptor in registry.descriptors() {
        let surplus = vec!["1"; descriptor.arity() + 1].join(",");
        let rule = format!("{}({surplus})", descriptor.name());

        let err = DynamicValidation::new()
            .valid_by_strings("f", &rule, "x")
            .unwrap_err();
        assert_eq!(
            err,
            RuleError::Arity {
                name: descriptor.name().to_owned(),
                expected: descriptor.arity(),
            }
        );
        assert!(
            err.to_string()
                .contains(&format!("requires {} parameters", descriptor.arity()))
        );
    }
}

#[rstest]
#[case("Unknown")]
#[case("NoMatch(abc)")]
#[case("Required;Frobnicate(1)")]
fn test_unknown_validator(#[case] rule: &str) {
    let err = DynamicValidation::new()
        .valid_by_strings("f", rule, "x")
        .unwrap_err();
    assert!(matches!(err, RuleError::UnknownValidator { .. }));
}

#[rstest]
#[case("Match(/abc", RuleError::InvalidMatch)]
#[case("MinSize(3", RuleError::InvalidFunction { clause: "MinSize(3".into() })]
#[case("MinSize", RuleError::Arity { name: "MinSize".into(), expected: 1 })]
fn test_malformed_rules(#[case] rule: &str, #[case] expected: RuleError) {
    assert_eq!(
        DynamicValidation::new().valid_by_strings("f", rule, "x"),
        Err(expected)
    );
}

#[test]
fn test_bad_literals() {
    assert!(matches!(
        DynamicValidation::new().valid_by_strings("f", "Min(abc)", 1),
        Err(RuleError::InvalidInteger { .. })
    ));
    assert!(matches!(
        DynamicValidation::new().valid_by_strings("f", "Match(/[a-/)", "x"),
        Err(RuleError::Pattern(_))
    ));
}

#[test]
fn test_shared_registry_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut valid = DynamicValidation::new();
                valid.valid_by_strings("n", "Required;Min(2)", i)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![Ok(false), Ok(false), Ok(true), Ok(true)]);
}
