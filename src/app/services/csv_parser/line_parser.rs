//! Individual row parsing for relayed CSV files

use super::field_parsers::{is_valid_hex, parse_integer_prefix, split_fields};
use crate::app::models::ParsedLine;
use crate::constants::REQUIRED_FIELDS;

/// Parse a single `filename,text,number,hex` row
///
/// Returns `None` for an empty row, a field count other than four, any empty
/// field, a number column without a leading integer, or an invalid hex column.
/// The per-row filename is checked for presence and then discarded.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    if line.is_empty() {
        return None;
    }

    let fields = split_fields(line);
    if fields.len() != REQUIRED_FIELDS {
        return None;
    }

    let [file, text, number, hex] = [fields[0], fields[1], fields[2], fields[3]];
    if file.is_empty() || text.is_empty() || number.is_empty() || hex.is_empty() {
        return None;
    }

    let number = parse_integer_prefix(number)?;

    if !is_valid_hex(hex) {
        return None;
    }

    Some(ParsedLine {
        text: text.to_string(),
        number,
        hex: hex.to_string(),
    })
}
