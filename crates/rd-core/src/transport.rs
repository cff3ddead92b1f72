//! Travel capability shared by the network, the fleet and the planners.
//!
//! An edge is traversable by a vehicle iff the modes match and the vehicle's
//! access level is at least the edge's requirement.

use std::fmt;
use std::str::FromStr;

use crate::RdError;

/// The medium a vehicle moves through and an edge is built for.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelMode {
    Land,
    Air,
    Water,
}

impl TravelMode {
    /// Lower-case label, used for CSV column values and scenario parsing.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Land  => "land",
            TravelMode::Air   => "air",
            TravelMode::Water => "water",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = RdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "land"  => Ok(TravelMode::Land),
            "air"   => Ok(TravelMode::Air),
            "water" => Ok(TravelMode::Water),
            other   => Err(RdError::Parse(format!(
                "invalid travel mode {other:?}: expected \"land\", \"air\" or \"water\""
            ))),
        }
    }
}

/// Ordinal terrain-access gate, 1 (low) to 3 (high).  Higher subsumes lower.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessLevel(u8);

impl AccessLevel {
    pub const LOW:    AccessLevel = AccessLevel(1);
    pub const MEDIUM: AccessLevel = AccessLevel(2);
    pub const HIGH:   AccessLevel = AccessLevel(3);

    /// Validate an ordinal level; anything outside `1..=3` is a configuration
    /// error.
    pub fn new(level: u8) -> Result<Self, RdError> {
        if (1..=3).contains(&level) {
            Ok(AccessLevel(level))
        } else {
            Err(RdError::Config(format!("access level {level} outside 1..=3")))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// `true` if a holder of `self` may use an edge requiring `required`.
    #[inline]
    pub fn satisfies(self, required: AccessLevel) -> bool {
        self >= required
    }

    pub fn as_str(self) -> &'static str {
        match self.0 {
            1 => "low",
            2 => "medium",
            _ => "high",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
