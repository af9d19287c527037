//! Days of the Vana'diel week
//!
//! The week has eight days, one per element, starting with Firesday.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DAY_NAMES, DAY_NAMES_JA};

/// One of the eight elemental weekdays
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Firesday,
    Earthsday,
    Watersday,
    Windsday,
    Iceday,
    Lightningday,
    Lightsday,
    Darksday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 8] = [
        Weekday::Firesday,
        Weekday::Earthsday,
        Weekday::Watersday,
        Weekday::Windsday,
        Weekday::Iceday,
        Weekday::Lightningday,
        Weekday::Lightsday,
        Weekday::Darksday,
    ];

    /// Returns the weekday for an index, wrapping every eight days.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 8) as usize]
    }

    /// Returns the 0-origin position within the week (Firesday = 0).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns the English day name.
    pub fn name(&self) -> &'static str {
        DAY_NAMES[self.index() as usize]
    }

    /// Returns the Japanese day name.
    pub fn name_ja(&self) -> &'static str {
        DAY_NAMES_JA[self.index() as usize]
    }

    /// Returns the following day, wrapping Darksday to Firesday.
    pub fn next(&self) -> Weekday {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index() as usize, i);
            assert_eq!(Weekday::from_index(i as u8), *day);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Weekday::from_index(8), Weekday::Firesday);
        assert_eq!(Weekday::from_index(15), Weekday::Darksday);
    }

    #[test]
    fn names() {
        assert_eq!(Weekday::Firesday.name(), "Firesday");
        assert_eq!(Weekday::Lightningday.name(), "Lightningday");
        assert_eq!(Weekday::Darksday.name_ja(), "闇曜日");
        assert_eq!(Weekday::Watersday.to_string(), "Watersday");
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(Weekday::Iceday.next(), Weekday::Lightningday);
        assert_eq!(Weekday::Darksday.next(), Weekday::Firesday);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&Weekday::Lightsday).unwrap();
        assert_eq!(json, "\"lightsday\"");
    }
}
