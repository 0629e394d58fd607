use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use uuid::Uuid;

use crate::error::{Error, Result};

const ALL: &str = "all";

/// Calendar area filter, either every area or a single area by ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaSelector {
    #[default]
    All,
    Area(Uuid),
}

impl AreaSelector {
    /// Whether an event with the given area reference passes the filter
    pub fn matches(&self, area_id: Option<Uuid>) -> bool {
        match self {
            Self::All => true,
            Self::Area(id) => area_id == Some(*id),
        }
    }
}

impl FromStr for AreaSelector {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }

        Uuid::parse_str(value)
            .map(Self::Area)
            .map_err(|_| Error::ParsingError(format!("{} is not a valid area", value)))
    }
}

impl fmt::Display for AreaSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Area(id) => id.fmt(f),
        }
    }
}

impl Serialize for AreaSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
