//! Storage-to-contract field rules.
//!
//! Every function here is total: a value that cannot be coerced is replaced
//! by the field's documented fallback, never reported as an error. Clients
//! reject a string where they expect a number, so loose storage values must
//! be normalized before they reach the wire.

use serde_json::Value;

use crate::util::ts_to_rfc3339;

/// Cipher type used when the stored discriminator is missing or unusable (Login).
pub const DEFAULT_CIPHER_TYPE: i64 = 1;

/// Attachment size used when the stored size is missing or unusable.
pub const DEFAULT_ATTACHMENT_SIZE: i64 = 0;

/// Parse an integer out of a loosely typed value.
///
/// Accepts JSON integers, integral floats, and strings holding either. Anything
/// else, including `None`, yields `fallback`.
pub fn coerce_int(value: Option<&Value>, fallback: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral_f64))
            .unwrap_or(fallback),
        Some(Value::String(s)) => parse_int_str(s).unwrap_or(fallback),
        _ => fallback,
    }
}

fn parse_int_str(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().and_then(integral_f64))
}

fn integral_f64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Cipher discriminator. Always a positive integer.
pub fn cipher_type(value: Option<&Value>) -> i64 {
    let t = coerce_int(value, DEFAULT_CIPHER_TYPE);
    if t > 0 {
        t
    } else {
        DEFAULT_CIPHER_TYPE
    }
}

/// Attachment byte count. Always `>= 0`.
pub fn attachment_size(value: Option<&Value>) -> i64 {
    coerce_int(value, DEFAULT_ATTACHMENT_SIZE).max(0)
}

/// Master password re-prompt flag; missing means "no re-prompt".
pub fn reprompt(value: Option<i32>) -> i32 {
    value.unwrap_or(0)
}

/// The stored stamp, or the user's own id when the stamp is missing or blank.
///
/// Clients compare this value to detect session invalidation, so it must never
/// be empty.
pub fn security_stamp(stamp: Option<&str>, user_id: &str) -> String {
    match stamp.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => user_id.to_string(),
    }
}

/// Argon2 memory / parallelism cost. Zero is treated like absence.
pub fn kdf_cost(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v != 0)
}

/// Human-readable size label, e.g. `"512 Bytes"` or `"1.5 MB"`.
pub fn display_size(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

    let mut size = bytes.max(0) as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    let rounded = (size * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[unit])
}

pub fn timestamp(ts: i64) -> String {
    ts_to_rfc3339(ts)
}

pub fn optional_timestamp(ts: Option<i64>) -> Option<String> {
    ts.map(ts_to_rfc3339)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn coerce_int_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_int(Some(&json!(3)), 1), 3);
        assert_eq!(coerce_int(Some(&json!(4.0)), 1), 4);
        assert_eq!(coerce_int(Some(&json!("12")), 0), 12);
        assert_eq!(coerce_int(Some(&json!(" 2048 ")), 0), 2048);
        assert_eq!(coerce_int(Some(&json!("5.0")), 0), 5);
    }

    #[test]
    fn coerce_int_falls_back_on_garbage() {
        assert_eq!(coerce_int(None, 7), 7);
        assert_eq!(coerce_int(Some(&Value::Null), 7), 7);
        assert_eq!(coerce_int(Some(&json!("not-a-number")), 7), 7);
        assert_eq!(coerce_int(Some(&json!("")), 7), 7);
        assert_eq!(coerce_int(Some(&json!(2.5)), 7), 7);
        assert_eq!(coerce_int(Some(&json!(true)), 7), 7);
        assert_eq!(coerce_int(Some(&json!({"n": 1})), 7), 7);
    }

    #[test]
    fn cipher_type_is_always_positive() {
        assert_eq!(cipher_type(None), 1);
        assert_eq!(cipher_type(Some(&json!("not-a-number"))), 1);
        assert_eq!(cipher_type(Some(&json!("0"))), 1);
        assert_eq!(cipher_type(Some(&json!(-3))), 1);
        assert_eq!(cipher_type(Some(&json!("2"))), 2);
        assert_eq!(cipher_type(Some(&json!(5))), 5);
    }

    #[test]
    fn attachment_size_never_negative() {
        assert_eq!(attachment_size(None), 0);
        assert_eq!(attachment_size(Some(&json!("abc"))), 0);
        assert_eq!(attachment_size(Some(&json!("12"))), 12);
        assert_eq!(attachment_size(Some(&json!(-40))), 0);
        assert_eq!(attachment_size(Some(&json!(2048))), 2048);
    }

    #[test]
    fn security_stamp_defaults_to_user_id() {
        assert_eq!(security_stamp(Some("stamp-1"), "u1"), "stamp-1");
        assert_eq!(security_stamp(None, "u1"), "u1");
        assert_eq!(security_stamp(Some(""), "u1"), "u1");
        assert_eq!(security_stamp(Some("   "), "u1"), "u1");
    }

    #[test]
    fn kdf_cost_treats_zero_as_absent() {
        assert_eq!(kdf_cost(None), None);
        assert_eq!(kdf_cost(Some(0)), None);
        assert_eq!(kdf_cost(Some(64)), Some(64));
    }

    #[test]
    fn display_size_picks_unit() {
        assert_eq!(display_size(0), "0 Bytes");
        assert_eq!(display_size(512), "512 Bytes");
        assert_eq!(display_size(2048), "2 KB");
        assert_eq!(display_size(1536 * 1024), "1.5 MB");
        assert_eq!(display_size(-1), "0 Bytes");
    }
}
