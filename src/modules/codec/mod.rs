//! ISBN Codec
//!
//! Checksum computation, validation and conversion between ISBN-10 and
//! 978-prefixed ISBN-13. Everything here is pure: no I/O, no logging, no
//! shared state, safe to call from any thread.
//!
//! Conversion validates its input, and validation computes the checksum:
//!
//! ```
//! use isbn_codec::modules::codec;
//!
//! assert!(codec::is_valid_isbn10("048665088X"));
//! assert_eq!(codec::convert_10_to_13("048665088X").unwrap(), "9780486650883");
//! assert_eq!(codec::convert_13_to_10("9780486650883").unwrap(), "048665088X");
//! ```

pub mod checksum;
pub mod conversion;
pub mod validation;

pub use checksum::{compute_check10, compute_check13};
pub use conversion::{
    convert_10_to_13, convert_10_to_13_or_sentinel, convert_13_to_10,
    convert_13_to_10_or_sentinel,
};
pub use validation::{check_isbn10, check_isbn13, detect_format, is_valid_isbn10, is_valid_isbn13};

pub const ISBN10_LEN: usize = 10;
pub const ISBN13_LEN: usize = 13;
pub const ISBN10_STEM_LEN: usize = ISBN10_LEN - 1;
pub const ISBN13_STEM_LEN: usize = ISBN13_LEN - 1;

/// The only ISBN-13 prefix with an ISBN-10 equivalent.
pub const BOOKLAND_PREFIX: &str = "978";

/// Returned by [`convert_10_to_13_or_sentinel`] when the input is invalid.
pub const SENTINEL_ISBN13: &str = "9999999999999";

/// Returned by [`convert_13_to_10_or_sentinel`] when the input is invalid.
///
/// Note this string passes ISBN-10 validation, so callers can only recognise
/// it by convention. Prefer the `Result`-returning conversions.
pub const SENTINEL_ISBN10: &str = "9999999999";
