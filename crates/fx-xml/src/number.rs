//! Locale-invariant number and boolean parsing.
//!
//! Flowsheet documents are machine written: `.` is the only decimal separator
//! and there are no grouping separators. Anything else is rejected rather
//! than guessed.

use fx_props::NativeValue;

/// Parse an invariant-culture floating point number.
pub fn parse_f64(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() || text.contains(',') {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Parse a finite invariant-culture number.
pub fn parse_finite(text: &str) -> Option<f64> {
    parse_f64(text).filter(|v| v.is_finite())
}

/// Parse `true`/`false` (any case) or `1`/`0`.
pub fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") || text == "1" {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") || text == "0" {
        Some(false)
    } else {
        None
    }
}

/// Interpret element text as a native value.
///
/// Numbers win over booleans so `1` stays numeric; only the words
/// `true`/`false` become booleans. Blank text is null.
pub fn native_from_text(text: &str) -> NativeValue {
    let text = text.trim();
    if text.is_empty() {
        return NativeValue::Null;
    }
    if let Some(v) = parse_f64(text) {
        return NativeValue::Float(v);
    }
    if text.eq_ignore_ascii_case("true") {
        return NativeValue::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return NativeValue::Bool(false);
    }
    NativeValue::Text(text.to_string())
}
