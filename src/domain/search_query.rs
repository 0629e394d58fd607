use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};

const MAX_LEN: usize = 256;

/// Normalized free-text event search, trimmed and lowercased
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// A blank query matches nothing
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for SearchQuery {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.graphemes(true).count() > MAX_LEN {
            return Err(Error::ParsingError("Search query too long".into()));
        }

        Ok(Self(value.to_lowercase()))
    }
}
