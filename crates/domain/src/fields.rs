//! Calendar field decomposition
//!
//! Every calendar field is derived from the single internal scalar
//! (microseconds since Vana'diel 0001-01-01 00:00:00). Divisions use floor
//! semantics so times before the epoch decompose the same way as later ones.

use serde::{Deserialize, Serialize};

use crate::constants::{
    MOON_AGE_OFFSET_DAYS, MOON_CYCLE_DAYS, MOON_PERCENT_OFFSET_DAYS, MOON_STEP_DAYS, ONE_DAY,
    ONE_HOUR, ONE_MINUTE, ONE_MONTH, ONE_SECOND, ONE_WEEK, ONE_YEAR,
};
use crate::day::Weekday;
use crate::moon::{MoonPhase, MoonPhase7};

/// All calendar fields of one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSet {
    /// Year (0 and below for times before the epoch)
    pub year: i64,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-30)
    pub day: u8,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
    /// Microsecond (0-999999)
    pub usec: u32,
    pub weekday: Weekday,
    /// Day of year (1-360)
    pub yday: u16,
    /// Moon age in 12 steps
    pub moon_phase: MoonPhase,
    /// Moon age in the 8-phase convention
    pub moon_phase7: MoonPhase7,
    /// Moon fullness (0-100)
    pub moon_percent: u8,
    /// Microseconds elapsed within the current 7-day moon step
    pub time_of_moon: i64,
}

/// Decomposes an internal time into its calendar fields.
pub fn compute_fields(time: i64) -> FieldSet {
    let year = time.div_euclid(ONE_YEAR) + 1;
    let month = (time.rem_euclid(ONE_YEAR) / ONE_MONTH) as u8 + 1;
    let day = (time.rem_euclid(ONE_MONTH) / ONE_DAY) as u8 + 1;
    let hour = (time.rem_euclid(ONE_DAY) / ONE_HOUR) as u8;
    let minute = (time.rem_euclid(ONE_HOUR) / ONE_MINUTE) as u8;
    let second = (time.rem_euclid(ONE_MINUTE) / ONE_SECOND) as u8;
    let usec = time.rem_euclid(ONE_SECOND) as u32;

    let weekday = Weekday::from_index((time.rem_euclid(ONE_WEEK) / ONE_DAY) as u8);
    let yday = (month as u16 - 1) * 30 + day as u16;

    // The moon runs on whole days and ignores month boundaries.
    let days = time.div_euclid(ONE_DAY);
    let moon_phase = moon_phase_for_day(days);

    FieldSet {
        year,
        month,
        day,
        hour,
        minute,
        second,
        usec,
        weekday,
        yday,
        moon_phase,
        moon_phase7: moon_phase.to_phase7(),
        moon_percent: moon_percent_for_day(days),
        time_of_moon: (days + MOON_AGE_OFFSET_DAYS).rem_euclid(MOON_STEP_DAYS) * ONE_DAY
            + time.rem_euclid(ONE_DAY),
    }
}

/// Moon fullness for a whole-day count as a triangular wave.
///
/// Rounds first, then reflects values above 100.
pub fn moon_percent_for_day(days: i64) -> u8 {
    let position = (days + MOON_PERCENT_OFFSET_DAYS).rem_euclid(MOON_CYCLE_DAYS);
    // round(position * 200 / 84), half up
    let raw = (position * 200 + MOON_CYCLE_DAYS / 2) / MOON_CYCLE_DAYS;
    let percent = if raw > 100 { 200 - raw } else { raw };
    percent as u8
}

/// 12-step moon age for a whole-day count.
pub fn moon_phase_for_day(days: i64) -> MoonPhase {
    let age = (days + MOON_AGE_OFFSET_DAYS)
        .div_euclid(MOON_STEP_DAYS)
        .rem_euclid(12);
    MoonPhase::from_age(age as u8)
}
