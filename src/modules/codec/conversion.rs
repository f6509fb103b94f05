// ISBN-10 <-> ISBN-13 conversion

use super::checksum::{check10, check13};
use super::validation::{check_isbn10, check_isbn13};
use super::{BOOKLAND_PREFIX, ISBN10_LEN, ISBN13_LEN, SENTINEL_ISBN10, SENTINEL_ISBN13};
use crate::domain::IsbnError;

/// Convert a valid ISBN-10 to its 978 ISBN-13.
pub fn convert_10_to_13(isbn10: &str) -> Result<String, IsbnError> {
    check_isbn10(isbn10)?;
    Ok(isbn10_to_isbn13(isbn10))
}

/// Convert a valid 978 ISBN-13 to its ISBN-10.
pub fn convert_13_to_10(isbn13: &str) -> Result<String, IsbnError> {
    check_isbn13(isbn13)?;
    Ok(isbn13_to_isbn10(isbn13))
}

/// Like [`convert_10_to_13`], but returns [`SENTINEL_ISBN13`] on invalid input.
pub fn convert_10_to_13_or_sentinel(isbn10: &str) -> String {
    convert_10_to_13(isbn10).unwrap_or_else(|_| SENTINEL_ISBN13.to_string())
}

/// Like [`convert_13_to_10`], but returns [`SENTINEL_ISBN10`] on invalid input.
pub fn convert_13_to_10_or_sentinel(isbn13: &str) -> String {
    convert_13_to_10(isbn13).unwrap_or_else(|_| SENTINEL_ISBN10.to_string())
}

/// `isbn10` must already be a valid ISBN-10.
pub(crate) fn isbn10_to_isbn13(isbn10: &str) -> String {
    let mut isbn13 = String::with_capacity(ISBN13_LEN);
    isbn13.push_str(BOOKLAND_PREFIX);
    isbn13.push_str(&isbn10[..ISBN10_LEN - 1]);
    let check = check13(isbn13.as_bytes());
    isbn13.push(check);
    isbn13
}

/// `isbn13` must already be a valid 978 ISBN-13.
pub(crate) fn isbn13_to_isbn10(isbn13: &str) -> String {
    let stem = &isbn13[BOOKLAND_PREFIX.len()..ISBN13_LEN - 1];
    let mut isbn10 = String::with_capacity(ISBN10_LEN);
    isbn10.push_str(stem);
    isbn10.push(check10(stem.as_bytes()));
    isbn10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_10_to_13() {
        assert_eq!(convert_10_to_13("0306406152").unwrap(), "9780306406157");
        assert_eq!(convert_10_to_13("048665088X").unwrap(), "9780486650883");
    }

    #[test]
    fn test_convert_13_to_10() {
        assert_eq!(convert_13_to_10("9780306406157").unwrap(), "0306406152");
        assert_eq!(convert_13_to_10("9780804429573").unwrap(), "080442957X");
    }

    #[test]
    fn test_invalid_input_is_an_error() {
        assert!(matches!(
            convert_10_to_13("030640615X"),
            Err(IsbnError::ChecksumMismatch { .. })
        ));
        assert!(matches!(
            convert_13_to_10("9790306406157"),
            Err(IsbnError::InvalidPrefix)
        ));
        assert!(matches!(
            convert_13_to_10(""),
            Err(IsbnError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_sentinel_on_invalid_input() {
        assert_eq!(convert_10_to_13_or_sentinel("030640615X"), "9999999999999");
        assert_eq!(convert_13_to_10_or_sentinel("9780306406151"), "9999999999");
        // Valid input passes through untouched
        assert_eq!(convert_10_to_13_or_sentinel("0306406152"), "9780306406157");
        assert_eq!(convert_13_to_10_or_sentinel("9780306406157"), "0306406152");
    }

    #[test]
    fn test_sentinel_validity() {
        use super::super::{is_valid_isbn10, is_valid_isbn13};

        assert!(!is_valid_isbn13(SENTINEL_ISBN13));
        // Ten 9s carry a correct check character
        assert!(is_valid_isbn10(SENTINEL_ISBN10));
    }
}
