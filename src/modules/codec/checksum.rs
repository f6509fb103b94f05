// Check character computation for both ISBN formats.
//
// The public functions guard the stem precondition; the crate-internal
// variants assume the caller already validated the digits.

use super::{ISBN10_STEM_LEN, ISBN13_STEM_LEN};
use crate::domain::IsbnError;

/// Compute the ISBN-13 check digit for a 12-digit stem.
///
/// Weights alternate 1 and 3 starting at index 0. Returns
/// `IsbnError::MalformedStem` unless `stem` is exactly 12 ASCII digits.
pub fn compute_check13(stem: &str) -> Result<char, IsbnError> {
    ensure_stem(stem, ISBN13_STEM_LEN)?;
    Ok(check13(stem.as_bytes()))
}

/// Compute the ISBN-10 check character for a 9-digit stem.
///
/// The result is a digit or `X` (for a value of 10). Returns
/// `IsbnError::MalformedStem` unless `stem` is exactly 9 ASCII digits.
pub fn compute_check10(stem: &str) -> Result<char, IsbnError> {
    ensure_stem(stem, ISBN10_STEM_LEN)?;
    Ok(check10(stem.as_bytes()))
}

pub(crate) fn check13(stem: &[u8]) -> char {
    let sum: u32 = stem
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let digit = digit_value(*b);
            if i % 2 == 0 { digit } else { digit * 3 }
        })
        .sum();

    digit_char((10 - sum % 10) % 10)
}

pub(crate) fn check10(stem: &[u8]) -> char {
    let sum: u32 = stem
        .iter()
        .enumerate()
        .map(|(i, b)| (10 - i as u32) * digit_value(*b))
        .sum();

    // 11 - (sum mod 11) is in 1..=11
    match 11 - sum % 11 {
        10 => 'X',
        11 => '0',
        value => digit_char(value),
    }
}

fn ensure_stem(stem: &str, expected_len: usize) -> Result<(), IsbnError> {
    if stem.len() != expected_len || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IsbnError::MalformedStem { expected_len });
    }
    Ok(())
}

fn digit_value(b: u8) -> u32 {
    u32::from(b - b'0')
}

fn digit_char(value: u32) -> char {
    char::from(b'0' + value as u8)
}
