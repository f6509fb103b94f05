// ISBN validation
//
// `check_*` report the first rule an input breaks; `is_valid_*` are the
// boolean views of the same checks. Neither ever panics on arbitrary input.

use super::checksum::{check10, check13};
use super::{BOOKLAND_PREFIX, ISBN10_LEN, ISBN13_LEN};
use crate::domain::IsbnError;
use crate::models::IsbnFormat;

/// Check an ISBN-10 and report why it is invalid.
///
/// Rules, in order: 10 characters; last character is a digit or `X`;
/// the first nine are digits; the check character matches.
pub fn check_isbn10(s: &str) -> Result<(), IsbnError> {
    let actual = s.chars().count();
    if actual != ISBN10_LEN {
        return Err(IsbnError::InvalidLength {
            expected: ISBN10_LEN,
            actual,
        });
    }

    let last = s.chars().last().unwrap_or_default();
    if last != 'X' && !last.is_ascii_digit() {
        return Err(IsbnError::InvalidCharacter {
            position: ISBN10_LEN - 1,
            found: last,
        });
    }

    ensure_digits(s.chars().take(ISBN10_LEN - 1))?;

    // Every character is ASCII from here on, so byte slicing is safe
    let expected = check10(&s.as_bytes()[..ISBN10_LEN - 1]);
    if expected != last {
        return Err(IsbnError::ChecksumMismatch {
            expected,
            found: last,
        });
    }
    Ok(())
}

/// Check a 978 ISBN-13 and report why it is invalid.
///
/// Rules, in order: 13 characters; starts with `978`; all digits;
/// the check digit matches.
pub fn check_isbn13(s: &str) -> Result<(), IsbnError> {
    let actual = s.chars().count();
    if actual != ISBN13_LEN {
        return Err(IsbnError::InvalidLength {
            expected: ISBN13_LEN,
            actual,
        });
    }

    if !s.starts_with(BOOKLAND_PREFIX) {
        return Err(IsbnError::InvalidPrefix);
    }

    ensure_digits(s.chars())?;

    let bytes = s.as_bytes();
    let expected = check13(&bytes[..ISBN13_LEN - 1]);
    let found = char::from(bytes[ISBN13_LEN - 1]);
    if expected != found {
        return Err(IsbnError::ChecksumMismatch { expected, found });
    }
    Ok(())
}

pub fn is_valid_isbn10(s: &str) -> bool {
    check_isbn10(s).is_ok()
}

pub fn is_valid_isbn13(s: &str) -> bool {
    check_isbn13(s).is_ok()
}

/// Guess the format from the character count alone.
pub fn detect_format(s: &str) -> Result<IsbnFormat, IsbnError> {
    match s.chars().count() {
        ISBN10_LEN => Ok(IsbnFormat::Isbn10),
        ISBN13_LEN => Ok(IsbnFormat::Isbn13),
        length => Err(IsbnError::UnknownFormat { length }),
    }
}

fn ensure_digits(chars: impl Iterator<Item = char>) -> Result<(), IsbnError> {
    for (position, found) in chars.enumerate() {
        if !found.is_ascii_digit() {
            return Err(IsbnError::InvalidCharacter { position, found });
        }
    }
    Ok(())
}
