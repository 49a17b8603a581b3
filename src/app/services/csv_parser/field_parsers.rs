//! Field parsing utilities for relayed CSV rows
//!
//! Helpers for splitting a row into trimmed fields and for reading the typed
//! columns. None of these functions fail loudly: invalid input yields `None`
//! or `false`.

use crate::constants::{FIELD_DELIMITER, HEX_LENGTH, HEX_PATTERN};
use regex::Regex;
use std::sync::LazyLock;

static HEX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_PATTERN).expect("hex pattern is a valid regex"));

/// Split a row on the field delimiter, trimming surrounding whitespace
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).map(str::trim).collect()
}

/// Check whether a value is exactly 32 hexadecimal characters (either case)
pub fn is_valid_hex(value: &str) -> bool {
    value.len() == HEX_LENGTH && HEX_REGEX.is_match(value)
}

/// Read the leading base-10 integer of a field
///
/// Accepts an optional sign followed by at least one ASCII digit and ignores
/// whatever follows the digits, so `"123abc"` reads as `123` and `"12.7"` as
/// `12`. Returns `None` when there is no digit prefix or the value does not
/// fit in an `i64`.
pub fn parse_integer_prefix(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign_len, rest) = match value.as_bytes().first() {
        Some(&b'+') | Some(&b'-') => (1, &value[1..]),
        _ => (0, value),
    };

    let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    value[..sign_len + digit_count].parse::<i64>().ok()
}
