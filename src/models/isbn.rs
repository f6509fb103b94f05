use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::IsbnError;
use crate::modules::codec::{self, conversion};

/// Which of the two identifier formats a value is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsbnFormat {
    #[serde(rename = "ISBN-10")]
    Isbn10,
    #[serde(rename = "ISBN-13")]
    Isbn13,
}

impl fmt::Display for IsbnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnFormat::Isbn10 => write!(f, "ISBN-10"),
            IsbnFormat::Isbn13 => write!(f, "ISBN-13"),
        }
    }
}

/// A checksum-valid ISBN-10.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn10(String);

/// A checksum-valid ISBN-13 with the 978 prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn13(String);

impl Isbn10 {
    pub fn parse(s: &str) -> Result<Self, IsbnError> {
        codec::check_isbn10(s)?;
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing digit or `X`.
    pub fn check_char(&self) -> char {
        self.0.chars().last().unwrap_or('0')
    }

    pub fn to_isbn13(&self) -> Isbn13 {
        Isbn13(conversion::isbn10_to_isbn13(&self.0))
    }
}

impl Isbn13 {
    pub fn parse(s: &str) -> Result<Self, IsbnError> {
        codec::check_isbn13(s)?;
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn check_char(&self) -> char {
        self.0.chars().last().unwrap_or('0')
    }

    pub fn to_isbn10(&self) -> Isbn10 {
        Isbn10(conversion::isbn13_to_isbn10(&self.0))
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Isbn10 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for Isbn13 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Isbn10 {
    type Error = IsbnError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        codec::check_isbn10(&s)?;
        Ok(Self(s))
    }
}

impl TryFrom<String> for Isbn13 {
    type Error = IsbnError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        codec::check_isbn13(&s)?;
        Ok(Self(s))
    }
}

impl TryFrom<&str> for Isbn10 {
    type Error = IsbnError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Isbn13 {
    type Error = IsbnError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Isbn10> for String {
    fn from(isbn: Isbn10) -> Self {
        isbn.0
    }
}

impl From<Isbn13> for String {
    fn from(isbn: Isbn13) -> Self {
        isbn.0
    }
}

impl From<Isbn10> for Isbn13 {
    fn from(isbn: Isbn10) -> Self {
        isbn.to_isbn13()
    }
}

impl From<Isbn13> for Isbn10 {
    fn from(isbn: Isbn13) -> Self {
        isbn.to_isbn10()
    }
}

/// An ISBN in either format, detected by length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Isbn {
    Ten(Isbn10),
    Thirteen(Isbn13),
}

impl Isbn {
    pub fn parse(s: &str) -> Result<Self, IsbnError> {
        match codec::detect_format(s)? {
            IsbnFormat::Isbn10 => Isbn10::parse(s).map(Isbn::Ten),
            IsbnFormat::Isbn13 => Isbn13::parse(s).map(Isbn::Thirteen),
        }
    }

    pub fn format(&self) -> IsbnFormat {
        match self {
            Isbn::Ten(_) => IsbnFormat::Isbn10,
            Isbn::Thirteen(_) => IsbnFormat::Isbn13,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Isbn::Ten(isbn) => isbn.as_str(),
            Isbn::Thirteen(isbn) => isbn.as_str(),
        }
    }

    /// Normalize to ISBN-13, the form most catalogues key on.
    pub fn to_isbn13(&self) -> Isbn13 {
        match self {
            Isbn::Ten(isbn) => isbn.to_isbn13(),
            Isbn::Thirteen(isbn) => isbn.clone(),
        }
    }

    pub fn to_isbn10(&self) -> Isbn10 {
        match self {
            Isbn::Ten(isbn) => isbn.clone(),
            Isbn::Thirteen(isbn) => isbn.to_isbn10(),
        }
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Isbn10> for Isbn {
    fn from(isbn: Isbn10) -> Self {
        Isbn::Ten(isbn)
    }
}

impl From<Isbn13> for Isbn {
    fn from(isbn: Isbn13) -> Self {
        Isbn::Thirteen(isbn)
    }
}
