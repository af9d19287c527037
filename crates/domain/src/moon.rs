//! Moon phases of the 84-day lunar cycle
//!
//! Two display conventions discretize the same cycle:
//! - [`MoonPhase`]: 12 steps of 7 days (Japanese service)
//! - [`MoonPhase7`]: 8 named phases (other services)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MOON7_NAMES, MOON_NAMES, MOON_NAMES_JA};

// ============================================================================
// MoonPhase (12 steps)
// ============================================================================

/// Moon age in 12 steps of 7 days each
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    /// 新月
    NewMoon,
    /// 三日月
    WaxingCrescent1,
    /// 七日月
    WaxingCrescent2,
    /// 上弦の月
    FirstQuarter,
    /// 十日夜
    WaxingGibbous1,
    /// 十三夜
    WaxingGibbous2,
    /// 満月
    FullMoon,
    /// 十六夜
    WaningGibbous1,
    /// 居待月
    WaningGibbous2,
    /// 下弦の月
    LastQuarter,
    /// 二十日余月
    WaningCrescent1,
    /// 二十六夜
    WaningCrescent2,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 12] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent1,
        MoonPhase::WaxingCrescent2,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous1,
        MoonPhase::WaxingGibbous2,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous1,
        MoonPhase::WaningGibbous2,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent1,
        MoonPhase::WaningCrescent2,
    ];

    /// Returns the phase for a moon age, wrapping every twelve steps.
    pub fn from_age(age: u8) -> Self {
        Self::ALL[(age % 12) as usize]
    }

    /// Returns the moon age (0..=11).
    pub fn age(&self) -> u8 {
        *self as u8
    }

    /// Returns the English phase name.
    pub fn name(&self) -> &'static str {
        MOON_NAMES[self.age() as usize]
    }

    /// Returns the Japanese phase name.
    pub fn name_ja(&self) -> &'static str {
        MOON_NAMES_JA[self.age() as usize]
    }

    /// Collapses the 12-step age into the 8-phase convention.
    ///
    /// New, first quarter, full and last quarter keep a single step; the
    /// crescents and gibbous phases each absorb two.
    pub fn to_phase7(&self) -> MoonPhase7 {
        match self {
            MoonPhase::NewMoon => MoonPhase7::NewMoon,
            MoonPhase::WaxingCrescent1 | MoonPhase::WaxingCrescent2 => MoonPhase7::WaxingCrescent,
            MoonPhase::FirstQuarter => MoonPhase7::FirstQuarter,
            MoonPhase::WaxingGibbous1 | MoonPhase::WaxingGibbous2 => MoonPhase7::WaxingGibbous,
            MoonPhase::FullMoon => MoonPhase7::FullMoon,
            MoonPhase::WaningGibbous1 | MoonPhase::WaningGibbous2 => MoonPhase7::WaningGibbous,
            MoonPhase::LastQuarter => MoonPhase7::LastQuarter,
            MoonPhase::WaningCrescent1 | MoonPhase::WaningCrescent2 => MoonPhase7::WaningCrescent,
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// MoonPhase7 (8 phases)
// ============================================================================

/// Moon phase in the 8-phase convention (indexed 0..=7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase7 {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase7 {
    /// Returns the 0-origin phase index.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        MOON7_NAMES[self.index() as usize]
    }
}

impl fmt::Display for MoonPhase7 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<MoonPhase> for MoonPhase7 {
    fn from(phase: MoonPhase) -> Self {
        phase.to_phase7()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_table() {
        let expected = [0, 1, 1, 2, 3, 3, 4, 5, 5, 6, 7, 7];
        for (age, want) in expected.iter().enumerate() {
            assert_eq!(
                MoonPhase::from_age(age as u8).to_phase7().index(),
                *want,
                "age {}",
                age
            );
        }
    }

    #[test]
    fn names_follow_tables() {
        assert_eq!(MoonPhase::NewMoon.name(), "New Moon");
        assert_eq!(MoonPhase::WaxingCrescent2.name(), "Waxing Crescent");
        assert_eq!(MoonPhase::WaxingCrescent2.name_ja(), "七日月");
        assert_eq!(MoonPhase::WaningCrescent2.name_ja(), "二十六夜");
        assert_eq!(MoonPhase7::FullMoon.name(), "Full Moon");
        assert_eq!(MoonPhase7::LastQuarter.to_string(), "Last Quarter");
    }

    #[test]
    fn from_age_wraps() {
        assert_eq!(MoonPhase::from_age(12), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_age(6).age(), 6);
    }

    #[test]
    fn seven_phase_conversion() {
        let phase: MoonPhase7 = MoonPhase::WaningGibbous2.into();
        assert_eq!(phase, MoonPhase7::WaningGibbous);
    }
}
