//! Pattern checks
//!
//! All of these test the rendered value (strings as-is, anything else as its
//! JSON text), so `Match(/^\d+$/)` accepts both `"42"` and `42`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{Args, ensure, render};
use crate::error::RuleResult;
use crate::foundation::{Validation, ValidationError};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\w!#$%&'*+/=?^_`{|}~-]+(?:\.[\w!#$%&'*+/=?^_`{|}~-]+)*@(?:[\w](?:[\w-]*[\w])?\.)+[a-zA-Z0-9](?:[\w-]*[\w])?$",
    )
    .unwrap()
});

static IP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((2[0-4]\d|25[0-5]|[01]?\d\d?)\.){3}(2[0-4]\d|25[0-5]|[01]?\d\d?)$").unwrap()
});

static BASE64_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$").unwrap()
});

static MOBILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((\+86)|(86))?(1(([35][0-9])|[8][0-9]|[7][06789]|[4][579]))\d{8}$").unwrap()
});

static TEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0\d{2,3}(\-)?)?\d{7,8}$").unwrap());

static ZIP_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-9]\d{5}$").unwrap());

fn matches_rendered(pattern: &Regex, value: &Value) -> bool {
    pattern.is_match(&render(value))
}

/// Records `message` under the clause key unless the rendered value matches.
fn require_match(
    validation: &mut Validation,
    value: &Value,
    args: &Args<'_>,
    pattern: &Regex,
    message: &'static str,
) -> RuleResult<()> {
    let key = args.key()?;
    ensure(validation, matches_rendered(pattern, value), || {
        ValidationError::new(key, message).with_value(value)
    })
}

/// `Match(/pattern/)`
pub fn matches(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let pattern = args.pattern(0, "pattern")?;
    let key = args.key()?;
    ensure(validation, matches_rendered(pattern, value), || {
        ValidationError::new(key, format!("Must match {}", pattern.as_str()))
            .with_value(value)
            .with_param("pattern", pattern.as_str().to_owned())
    })
}

/// `NoMatch(pattern)`
pub fn no_match(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let pattern = args.pattern(0, "pattern")?;
    let key = args.key()?;
    ensure(validation, !matches_rendered(pattern, value), || {
        ValidationError::new(key, format!("Must not match {}", pattern.as_str()))
            .with_value(value)
            .with_param("pattern", pattern.as_str().to_owned())
    })
}

/// `Email`
pub fn email(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    require_match(validation, value, args, &EMAIL_REGEX, "Must be a valid email address")
}

/// `IP`: dotted IPv4.
pub fn ip(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    require_match(validation, value, args, &IP_REGEX, "Must be a valid ip address")
}

/// `Base64`
pub fn base64(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    require_match(validation, value, args, &BASE64_REGEX, "Must be valid base64 characters")
}

/// `Mobile`
pub fn mobile(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    require_match(validation, value, args, &MOBILE_REGEX, "Must be valid mobile number")
}

/// `Tel`
pub fn tel(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    require_match(validation, value, args, &TEL_REGEX, "Must be valid telephone number")
}

/// `Phone`: either `Mobile` or `Tel`.
pub fn phone(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    let key = args.key()?;
    let ok = matches_rendered(&MOBILE_REGEX, value) || matches_rendered(&TEL_REGEX, value);
    ensure(validation, ok, || {
        ValidationError::new(key, "Must be valid telephone or mobile phone number")
            .with_value(value)
    })
}

/// `ZipCode`
pub fn zip_code(validation: &mut Validation, value: &Value, args: &Args<'_>) -> RuleResult<()> {
    require_match(validation, value, args, &ZIP_CODE_REGEX, "Must be valid zipcode")
}
