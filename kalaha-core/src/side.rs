//! Board sides and the derived winner

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One half of the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    South = 0,
    North = 1,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::South, Side::North];

    pub fn opposite(self) -> Self {
        match self {
            Side::South => Side::North,
            Side::North => Side::South,
        }
    }

    /// Storage slot for per-side arrays
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::South => f.write_str("SOUTH"),
            Side::North => f.write_str("NORTH"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "south" | "s" => Ok(Side::South),
            "north" | "n" => Ok(Side::North),
            other => Err(format!("unknown side: {}", other)),
        }
    }
}

/// Outcome of a finished (or hypothetically finished) game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Winner {
    South,
    North,
    Tied,
}

impl Winner {
    /// Compare store counts
    pub fn from_stores(south_kalaha: u32, north_kalaha: u32) -> Self {
        match south_kalaha.cmp(&north_kalaha) {
            std::cmp::Ordering::Greater => Winner::South,
            std::cmp::Ordering::Less => Winner::North,
            std::cmp::Ordering::Equal => Winner::Tied,
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Winner::South => Some(Side::South),
            Winner::North => Some(Side::North),
            Winner::Tied => None,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::South => f.write_str("SOUTH"),
            Winner::North => f.write_str("NORTH"),
            Winner::Tied => f.write_str("TIED"),
        }
    }
}
