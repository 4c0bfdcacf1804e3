//! Field predicates. Request values arrive as loosely typed JSON, so every
//! predicate works on an optional [`Value`] and coerces it the same way a
//! form-style validator would: render to text first, then test the text.

use serde_json::{Number, Value};
use std::borrow::Cow;

/// Text form of a request value. Missing and `null` render as the empty string.
pub fn as_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Bool(true)) => Cow::Borrowed("true"),
        Some(Value::Bool(false)) => Cow::Borrowed("false"),
        Some(Value::Number(n)) => Cow::Owned(number_text(n)),
        Some(Value::Array(_) | Value::Object(_)) => Cow::Borrowed("[object Object]"),
    }
}

/// Numbers render in positional notation unless the magnitude is at least
/// 1e21 or below 1e-6, where the exponent form `1e+21` / `1e-7` is used.
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };

    let magnitude = f.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exponent = format!("{f:e}");
        match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exponent,
        }
    } else {
        format!("{f}")
    }
}

/// Signed integer without leading zeros that fits in an `i64`.
pub fn parse_int(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    text.parse::<i64>().ok()
}

/// Loose numeric coercion: missing is NaN, `null` is zero, booleans are 1/0
/// and strings are read as a trimmed decimal literal.
pub fn loose_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => number_from_text(s),
        Some(Value::Array(_) | Value::Object(_)) => f64::NAN,
    }
}

fn number_from_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // `f64::from_str` also accepts "inf" and "nan"; keep to plain decimals.
    let decimal = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// `true`/`1` and `false`/`0`, in text form.
pub fn loose_bool(value: Option<&Value>) -> Option<bool> {
    match &*as_text(value) {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

pub fn is_int(value: Option<&Value>) -> bool {
    parse_int(&as_text(value)).is_some()
}

pub fn not_empty(value: Option<&Value>) -> bool {
    !as_text(value).is_empty()
}

/// `^[+-]?([0-9]*[.])?[0-9]+$`
pub fn is_numeric(value: Option<&Value>) -> bool {
    let text = as_text(value);
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(&*text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or(("", unsigned));

    !fraction.is_empty()
        && fraction.bytes().all(|b| b.is_ascii_digit())
        && whole.bytes().all(|b| b.is_ascii_digit())
}

pub fn greater_than_zero(value: Option<&Value>) -> bool {
    let number = loose_number(value);
    number.is_finite() && number > 0.0
}

pub fn is_boolean(value: Option<&Value>) -> bool {
    loose_bool(value).is_some()
}
