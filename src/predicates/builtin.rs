//! Builtin predicates
//!
//! Every builtin except `empty` coerces its input to a string first:
//! - `null` becomes `""`
//! - numbers and booleans use their textual form
//! - arrays are joined with `,`
//! - objects become `[object Object]`
//!
//! Positional options arrive as JSON values and are coerced the same way.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Number, Value};

use super::registry::PredicateRegistry;

/// Registers every builtin predicate on the given registry.
pub fn register_builtins(registry: &mut PredicateRegistry) {
    registry.register("isNull", is_null);
    registry.register("isInt", is_int);
    registry.register("isLength", is_length);
    registry.register("empty", empty);
    registry.register("notContains", not_contains);
    registry.register("contains", contains);
    registry.register("isNumeric", is_numeric);
    registry.register("isAlpha", is_alpha);
    registry.register("isAlphanumeric", is_alphanumeric);
    registry.register("isEmail", is_email);
    registry.register("isUrl", is_url);
    registry.register("isIn", is_in);
    registry.register("matches", matches);
}

/// Coerces a JSON value to the string a predicate operates on.
pub fn coerce_str(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(number_str(n)),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|item| coerce_str(item).into_owned())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

/// Renders a number the way JavaScript's `Number#toString` does.
///
/// Whole floats drop the fraction (`1.0` is `"1"`). Magnitudes of `1e21` and
/// above, or below `1e-6`, use exponent notation with an explicit sign.
fn number_str(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };

    let magnitude = f.abs();
    if f == 0.0 {
        "0".to_string()
    } else if magnitude >= 1e21 || magnitude < 1e-6 {
        let exp = format!("{:e}", f);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else if f.fract() == 0.0 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

/// Reads a positional option as a non-negative bound.
fn bound_arg(options: &[Value], index: usize) -> Option<usize> {
    match options.get(index)? {
        Value::Number(n) => n
            .as_u64()
            .map(|n| n as usize)
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as usize)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn str_arg(options: &[Value], index: usize) -> Cow<'_, str> {
    options
        .get(index)
        .map(coerce_str)
        .unwrap_or(Cow::Borrowed(""))
}

fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("builtin pattern compiles"))
}

/// True when the coerced string has zero length.
pub fn is_null(value: &Value, _options: &[Value]) -> bool {
    coerce_str(value).is_empty()
}

/// True when the coerced string is a base-10 integer without leading zeros.
pub fn is_int(value: &Value, _options: &[Value]) -> bool {
    static INT: OnceLock<Regex> = OnceLock::new();
    cached(&INT, r"^-?(?:0|[1-9][0-9]*)$").is_match(&coerce_str(value))
}

/// True when the character count lies within `[min, max]`.
///
/// `min` defaults to 0; an absent `max` leaves the upper end open.
pub fn is_length(value: &Value, options: &[Value]) -> bool {
    let len = coerce_str(value).chars().count();
    let min = bound_arg(options, 0).unwrap_or(0);
    let within_max = bound_arg(options, 1).map_or(true, |max| len <= max);
    len >= min && within_max
}

/// True for `null` and for zero-length strings, arrays and objects.
pub fn empty(value: &Value, _options: &[Value]) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// True when the coerced string contains the first option.
pub fn contains(value: &Value, options: &[Value]) -> bool {
    coerce_str(value).contains(str_arg(options, 0).as_ref())
}

/// Negation of [`contains`].
pub fn not_contains(value: &Value, options: &[Value]) -> bool {
    !contains(value, options)
}

/// True for an optionally signed run of ASCII digits.
pub fn is_numeric(value: &Value, _options: &[Value]) -> bool {
    static NUMERIC: OnceLock<Regex> = OnceLock::new();
    cached(&NUMERIC, r"^-?[0-9]+$").is_match(&coerce_str(value))
}

pub fn is_alpha(value: &Value, _options: &[Value]) -> bool {
    static ALPHA: OnceLock<Regex> = OnceLock::new();
    cached(&ALPHA, r"^[a-zA-Z]+$").is_match(&coerce_str(value))
}

pub fn is_alphanumeric(value: &Value, _options: &[Value]) -> bool {
    static ALNUM: OnceLock<Regex> = OnceLock::new();
    cached(&ALNUM, r"^[a-zA-Z0-9]+$").is_match(&coerce_str(value))
}

pub fn is_email(value: &Value, _options: &[Value]) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    cached(&EMAIL, r"^[^\s@]+@[^\s@]+\.[^\s@.]{2,}$").is_match(&coerce_str(value))
}

/// Protocol is optional; only http, https and ftp are accepted when present.
pub fn is_url(value: &Value, _options: &[Value]) -> bool {
    static URL: OnceLock<Regex> = OnceLock::new();
    let s = coerce_str(value);
    if s.len() > 2083 {
        return false;
    }
    cached(
        &URL,
        concat!(
            r"(?i)^(?:(?:https?|ftp)://)?",
            r"(?:localhost|(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,})",
            r"(?::[0-9]{1,5})?(?:[/?#]\S*)?$",
        ),
    )
    .is_match(&s)
}

/// Membership test against the first option.
///
/// An array option is an exact match against its coerced elements. An object
/// option checks for a key. Any other option is a substring test.
pub fn is_in(value: &Value, options: &[Value]) -> bool {
    let s = coerce_str(value);
    match options.first() {
        Some(Value::Array(items)) => items.iter().any(|item| coerce_str(item) == s),
        Some(Value::Object(map)) => map.contains_key(s.as_ref()),
        Some(other) => coerce_str(other).contains(s.as_ref()),
        None => false,
    }
}

/// Regular-expression match. The optional second option carries flags
/// (`i`, `m`, `s`, `x`); unsupported flags are ignored. An invalid pattern
/// never matches.
pub fn matches(value: &Value, options: &[Value]) -> bool {
    let pattern = str_arg(options, 0);
    let flags: String = str_arg(options, 1)
        .chars()
        .filter(|c| matches!(c, 'i' | 'm' | 's' | 'x'))
        .collect();
    let full = if flags.is_empty() {
        pattern.into_owned()
    } else {
        format!("(?{}){}", flags, pattern)
    };
    match Regex::new(&full) {
        Ok(re) => re.is_match(&coerce_str(value)),
        Err(e) => {
            tracing::warn!(pattern = %full, error = %e, "invalid pattern in matches rule");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_str() {
        assert_eq!(coerce_str(&Value::Null), "");
        assert_eq!(coerce_str(&json!(42)), "42");
        assert_eq!(coerce_str(&json!(true)), "true");
        assert_eq!(coerce_str(&json!(["a", 1])), "a,1");
        assert_eq!(coerce_str(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn test_coerce_float_like_javascript() {
        assert_eq!(coerce_str(&json!(1.0)), "1");
        assert_eq!(coerce_str(&json!(-42.0)), "-42");
        assert_eq!(coerce_str(&json!(-0.0)), "0");
        assert_eq!(coerce_str(&json!(1.5)), "1.5");
        assert_eq!(coerce_str(&json!(1e20)), "100000000000000000000");
        assert_eq!(coerce_str(&json!(1e21)), "1e+21");
        assert_eq!(coerce_str(&json!(2.5e-7)), "2.5e-7");
    }

    #[test]
    fn test_whole_float_is_int() {
        let doc: Value = serde_json::from_str(r#"{"n": 1.0}"#).unwrap();
        assert!(is_int(&doc["n"], &[]));
        assert!(is_length(&doc["n"], &[json!(0), json!(1)]));
    }

    #[test]
    fn test_is_null() {
        assert!(is_null(&Value::Null, &[]));
        assert!(is_null(&json!(""), &[]));
        assert!(!is_null(&json!("x"), &[]));
        assert!(!is_null(&json!(0), &[]));
    }

    #[test]
    fn test_is_int() {
        assert!(is_int(&json!("42"), &[]));
        assert!(is_int(&json!(-7), &[]));
        assert!(is_int(&json!("0"), &[]));
        assert!(!is_int(&json!("abc"), &[]));
        assert!(!is_int(&json!("007"), &[]));
        assert!(!is_int(&json!(4.5), &[]));
        assert!(!is_int(&json!(""), &[]));
    }

    #[test]
    fn test_is_length_bounds() {
        let opts = [json!(20), json!(40)];
        assert!(!is_length(&json!("a".repeat(10)), &opts));
        assert!(is_length(&json!("a".repeat(30)), &opts));
        assert!(is_length(&json!("a".repeat(40)), &opts));
        assert!(!is_length(&json!("a".repeat(41)), &opts));
    }

    #[test]
    fn test_is_length_open_max() {
        assert!(is_length(&json!("abc"), &[json!(1)]));
        assert!(!is_length(&json!(""), &[json!(1)]));
        assert!(is_length(&json!("anything"), &[]));
    }

    #[test]
    fn test_is_length_counts_chars() {
        assert!(is_length(&json!("héllo"), &[json!(0), json!(5)]));
    }

    #[test]
    fn test_empty() {
        assert!(empty(&Value::Null, &[]));
        assert!(empty(&json!(""), &[]));
        assert!(empty(&json!([]), &[]));
        assert!(empty(&json!({}), &[]));
        assert!(!empty(&json!(" "), &[]));
        assert!(!empty(&json!(0), &[]));
        assert!(!empty(&json!(false), &[]));
        assert!(!empty(&json!(["x"]), &[]));
    }

    #[test]
    fn test_contains_and_not_contains() {
        let opts = [json!("ghost")];
        assert!(contains(&json!("a ghost story"), &opts));
        assert!(!not_contains(&json!("a ghost story"), &opts));
        assert!(not_contains(&json!("plain"), &opts));
    }

    #[test]
    fn test_character_classes() {
        assert!(is_numeric(&json!("-123"), &[]));
        assert!(!is_numeric(&json!("12a"), &[]));
        assert!(is_alpha(&json!("abcXYZ"), &[]));
        assert!(!is_alpha(&json!("abc1"), &[]));
        assert!(is_alphanumeric(&json!("abc1"), &[]));
        assert!(!is_alphanumeric(&json!("abc-1"), &[]));
    }

    #[test]
    fn test_is_email() {
        assert!(is_email(&json!("owner@example.com"), &[]));
        assert!(!is_email(&json!("owner@localhost"), &[]));
        assert!(!is_email(&json!("not an email"), &[]));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url(&json!("http://example.com"), &[]));
        assert!(is_url(&json!("https://blog.example.com:2368/path?q=1"), &[]));
        assert!(is_url(&json!("example.com"), &[]));
        assert!(is_url(&json!("http://localhost:2368"), &[]));
        assert!(!is_url(&json!("mailto:someone"), &[]));
        assert!(!is_url(&json!("not a url"), &[]));
    }

    #[test]
    fn test_is_in() {
        assert!(is_in(&json!("casper"), &[json!(["casper", "london"])]));
        assert!(!is_in(&json!("other"), &[json!(["casper", "london"])]));
        assert!(is_in(&json!("en"), &[json!({"en": 1})]));
        assert!(is_in(&json!("cas"), &[json!("casper")]));
        assert!(!is_in(&json!("x"), &[]));
    }

    #[test]
    fn test_matches() {
        assert!(matches(&json!("Hello"), &[json!("^hello$"), json!("i")]));
        assert!(!matches(&json!("Hello"), &[json!("^hello$")]));
        assert!(!matches(&json!("Hello"), &[json!("(")]));
    }
}
