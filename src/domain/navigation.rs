use std::str::FromStr;

use crate::error::{Error, Result};

/// Calendar month navigation command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
}

impl FromStr for Navigation {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "next" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Previous),
            other => Err(Error::ParsingError(format!(
                "{} is not a valid navigation command",
                other
            ))),
        }
    }
}
