//! Unit coercion for raw form input.
//!
//! Offsets are expressed in pixels and rotations in degrees. Values typed
//! without a unit get one appended; values that already carry letters or a
//! percent sign are trusted as pre-formatted.

use std::fmt;

/// Physical unit appended to bare numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// CSS pixels, used by the translate offsets.
    Px,
    /// Degrees, used by rotation.
    Deg,
}

impl Unit {
    /// Suffix written after the number.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Deg => "deg",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Coerce `raw` into a value carrying `unit`.
///
/// Input containing an ASCII letter or `%` is returned unchanged. Anything
/// else is read as a leading float (`"12.5abc"` style prefixes never reach
/// this branch since they contain letters); unparseable input becomes `0`.
#[must_use]
pub fn format_with_unit(raw: &str, unit: Unit) -> String {
    if is_preformatted(raw) {
        return raw.to_owned();
    }
    let number = parse_float_prefix(raw).unwrap_or(0.0);
    format!("{}{unit}", format_number(number))
}

/// Whether `raw` already spells out its own unit.
#[must_use]
pub fn is_preformatted(raw: &str) -> bool {
    raw.chars().any(|c| c.is_ascii_alphabetic() || c == '%')
}

/// Parse the longest leading decimal number of `raw`, skipping leading
/// whitespace. Returns `None` when no digit is found.
#[must_use]
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if frac_end > frac_start {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the leading integer of `raw` (sign and digits after optional
/// whitespace). Values beyond the `i64` range saturate.
#[must_use]
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let magnitude = digits[..len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Render a number the way a browser prints it: integers without a
/// trailing `.0`, negative zero as `0`, and magnitudes below `1e-6` or from
/// `1e21` up in exponent form (`1e-7`, `1.5e+21`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => {
                format!("{mantissa}e+{exp}")
            }
            _ => text,
        };
    }
    format!("{value}")
}
