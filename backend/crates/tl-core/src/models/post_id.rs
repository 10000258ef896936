use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a post by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PostId(i64);

impl PostId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    #[track_caller]
    pub fn parse(value: &str) -> CoreErrorResult<Self> {
        value
            .trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidPostId {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl From<i64> for PostId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
