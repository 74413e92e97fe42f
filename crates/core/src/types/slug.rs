//! URL slug type for categories and products.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The input is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains something other than ASCII letters, digits, `-` and `_`.
    #[error("slug may only contain letters, digits, hyphens and underscores")]
    InvalidCharacter,
}

/// A product or category identifier usable as one URL path segment, such
/// as `a2-desi-cow-ghee`.
///
/// Catalog editors own the slugs in the hosted tables, so casing and word
/// separators are not policed; only characters that would need escaping in
/// a path are rejected.
///
/// ```
/// use pure_angan_core::Slug;
///
/// assert!(Slug::parse("vermicompost").is_ok());
/// assert!(Slug::parse("ghee-a2").is_ok());
/// assert!(Slug::parse("Wild_Honey").is_ok());
/// assert!(Slug::parse("wild honey").is_err());
/// assert!(Slug::parse("../ghee").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a slug.
    ///
    /// # Errors
    ///
    /// Returns a [`SlugError`] if the input is not a well-formed slug.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(SlugError::InvalidCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
