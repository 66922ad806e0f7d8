use crate::error::DecodeEntryError;
use crate::segment::{is_blank, is_space};

/// Split a decode request on commas and parse each trimmed piece.
///
/// A piece parses when it starts with an optional sign followed by ASCII
/// digits; anything after the digit run is ignored (`"12px"` is 12). A
/// `0x`/`0X` prefix switches to hexadecimal (`"0x2a"` is 42).
/// Blank input yields no entries.
pub fn parse_id_list(input: &str) -> Vec<Result<i64, DecodeEntryError>> {
    if is_blank(input) {
        return Vec::new();
    }
    input.split(',').map(|piece| parse_leading_int(piece.trim_matches(is_space))).collect()
}

fn parse_leading_int(piece: &str) -> Result<i64, DecodeEntryError> {
    let unsigned = piece.strip_prefix(['+', '-']).unwrap_or(piece);
    let negative = piece.starts_with('-');
    let (body, radix) = match unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };
    let digits = body.chars().take_while(|c| c.is_digit(radix)).count();
    if digits == 0 {
        return Err(DecodeEntryError::NotAnInteger(piece.to_string()));
    }
    let magnitude = body
        .get(..digits)
        .and_then(|run| i64::from_str_radix(run, radix).ok())
        .ok_or_else(|| DecodeEntryError::OutOfRange(piece.to_string()))?;
    Ok(if negative { -magnitude } else { magnitude })
}
