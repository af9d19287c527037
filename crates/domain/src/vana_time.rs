//! Vana'diel time value
//!
//! [`VanaTime`] stores a single integer: microseconds since Vana'diel
//! 0001-01-01 00:00:00. All calendar fields are recomputed from it whenever
//! it is replaced, never set on their own.
//!
//! Earth and Vana'diel time are related by a linear transform. Vana'diel
//! time runs 25 times faster, and Vana'diel 0886-01-01 00:00:00 lines up
//! with Earth 2002-01-01 00:00:00 JST.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Sub;

use crate::clock::ClockPort;
use crate::constants::{
    DIFF_TIME, MAX_MDAY, MAX_MONTH, ONE_DAY, ONE_HOUR, ONE_MINUTE, ONE_MONTH, ONE_SECOND, ONE_YEAR,
    VANA_TIME_SCALE,
};
use crate::day::Weekday;
use crate::error::VanaError;
use crate::fields::{compute_fields, FieldSet};
use crate::format::strftime;
use crate::moon::{MoonPhase, MoonPhase7};

/// Format used by `Display`.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Conversions
// ============================================================================

/// Converts Earth time (unix microseconds) to Vana'diel time (microseconds).
///
/// # Errors
///
/// Returns `VanaError::OutOfRange` if the result does not fit in an `i64`.
pub fn earth_to_vana(earth_micros: i64) -> Result<i64, VanaError> {
    earth_micros
        .checked_add(DIFF_TIME)
        .and_then(|t| t.checked_mul(VANA_TIME_SCALE))
        .and_then(|t| t.checked_sub(ONE_YEAR))
        .ok_or_else(|| VanaError::out_of_range("time", earth_micros))
}

/// Converts Vana'diel time (microseconds) to Earth time (unix microseconds).
///
/// Exact inverse of [`earth_to_vana`]; Vana'diel times between two Earth
/// microseconds round toward negative infinity.
pub fn vana_to_earth(vana_micros: i64) -> Result<i64, VanaError> {
    vana_micros
        .checked_add(ONE_YEAR)
        .map(|t| t.div_euclid(VANA_TIME_SCALE))
        .and_then(|t| t.checked_sub(DIFF_TIME))
        .ok_or_else(|| VanaError::out_of_range("time", vana_micros))
}

/// Validates calendar components and returns the internal time.
fn ymdhms_to_micros(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    usec: i64,
) -> Result<i64, VanaError> {
    if year < 0 {
        return Err(VanaError::out_of_range("year", year));
    }
    if !(1..=MAX_MONTH as i64).contains(&month) {
        return Err(VanaError::out_of_range("mon", month));
    }
    if !(1..=MAX_MDAY as i64).contains(&day) {
        return Err(VanaError::out_of_range("day", day));
    }
    if !(0..=23).contains(&hour) {
        return Err(VanaError::out_of_range("hour", hour));
    }
    if !(0..=59).contains(&minute) {
        return Err(VanaError::out_of_range("min", minute));
    }
    if !(0..=59).contains(&second) {
        return Err(VanaError::out_of_range("sec", second));
    }
    if !(0..=999_999).contains(&usec) {
        return Err(VanaError::out_of_range("usec", usec));
    }

    let within_year = (month - 1) * ONE_MONTH
        + (day - 1) * ONE_DAY
        + hour * ONE_HOUR
        + minute * ONE_MINUTE
        + second * ONE_SECOND
        + usec;

    (year - 1)
        .checked_mul(ONE_YEAR)
        .and_then(|t| t.checked_add(within_year))
        .ok_or_else(|| VanaError::out_of_range("year", year))
}

/// Converts a fractional scalar to whole microseconds, rejecting values
/// that are not finite or do not fit in an `i64`.
fn fractional_to_micros(value: f64, what: &str) -> Result<i64, VanaError> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(VanaError::invalid_argument(format!(
            "{} is not a representable time: {}",
            what, value
        )));
    }
    Ok(value as i64)
}

// ============================================================================
// TimeSource
// ============================================================================

/// Input accepted by [`VanaTime::at`] and [`VanaTime::cmp_source`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeSource {
    /// An Earth instant, converted through the time scale
    Earth(DateTime<Utc>),
    /// Another Vana'diel time, copied as is
    Vana(VanaTime),
    /// A raw internal scalar in microseconds
    Scalar(i64),
    /// A fractional internal scalar in microseconds, truncated toward negative infinity
    Fractional(f64),
}

impl TimeSource {
    /// Resolves the source to an internal Vana'diel scalar.
    pub fn to_vana_micros(&self) -> Result<i64, VanaError> {
        match self {
            TimeSource::Earth(instant) => earth_to_vana(instant.timestamp_micros()),
            TimeSource::Vana(time) => Ok(time.as_micros()),
            TimeSource::Scalar(micros) => Ok(*micros),
            TimeSource::Fractional(micros) => fractional_to_micros(micros.floor(), "scalar"),
        }
    }
}

impl From<DateTime<Utc>> for TimeSource {
    fn from(instant: DateTime<Utc>) -> Self {
        TimeSource::Earth(instant)
    }
}

impl From<VanaTime> for TimeSource {
    fn from(time: VanaTime) -> Self {
        TimeSource::Vana(time)
    }
}

impl From<i64> for TimeSource {
    fn from(micros: i64) -> Self {
        TimeSource::Scalar(micros)
    }
}

impl From<f64> for TimeSource {
    fn from(micros: f64) -> Self {
        TimeSource::Fractional(micros)
    }
}

// ============================================================================
// VanaTime
// ============================================================================

/// A point in Vana'diel time with its decomposed calendar fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct VanaTime {
    time: i64,
    fields: FieldSet,
}

impl VanaTime {
    // Construction

    /// Creates a time from a raw internal scalar. No validation is performed.
    pub fn from_scalar(micros: i64) -> Self {
        Self {
            time: micros,
            fields: compute_fields(micros),
        }
    }

    /// Creates a time from calendar components.
    ///
    /// # Errors
    ///
    /// Returns `VanaError::OutOfRange` naming the first component outside
    /// its range: year >= 0, month 1-12, day 1-30, hour 0-23,
    /// minute and second 0-59, usec 0-999999.
    pub fn from_components(
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        usec: u32,
    ) -> Result<Self, VanaError> {
        ymdhms_to_micros(
            year,
            month as i64,
            day as i64,
            hour as i64,
            minute as i64,
            second as i64,
            usec as i64,
        )
        .map(Self::from_scalar)
    }

    /// Creates midnight of the given date.
    pub fn from_ymd(year: i64, month: u32, day: u32) -> Result<Self, VanaError> {
        Self::from_components(year, month, day, 0, 0, 0, 0)
    }

    /// Creates the given date and time with zero microseconds.
    pub fn from_ymd_hms(
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, VanaError> {
        Self::from_components(year, month, day, hour, minute, second, 0)
    }

    /// Creates a time from up to seven components in the order
    /// year, month, day, hour, minute, second, usec.
    ///
    /// Missing trailing components default to the start of their range.
    ///
    /// # Errors
    ///
    /// - `VanaError::MissingArguments` if `components` is empty
    /// - `VanaError::InvalidArgument` if more than seven are given
    /// - `VanaError::OutOfRange` if a component is outside its range
    pub fn mktime(components: &[i64]) -> Result<Self, VanaError> {
        let (&year, rest) = components
            .split_first()
            .ok_or(VanaError::MissingArguments)?;
        if rest.len() > 6 {
            return Err(VanaError::invalid_argument(format!(
                "wrong number of arguments ({} for 1..7)",
                components.len()
            )));
        }

        let part = |index: usize, default: i64| rest.get(index).copied().unwrap_or(default);
        ymdhms_to_micros(
            year,
            part(0, 1),
            part(1, 1),
            part(2, 0),
            part(3, 0),
            part(4, 0),
            part(5, 0),
        )
        .map(Self::from_scalar)
    }

    /// Creates the Vana'diel time matching an Earth instant.
    pub fn from_earth(instant: DateTime<Utc>) -> Result<Self, VanaError> {
        earth_to_vana(instant.timestamp_micros()).map(Self::from_scalar)
    }

    /// Creates the current Vana'diel time from the given clock.
    pub fn now(clock: &dyn ClockPort) -> Result<Self, VanaError> {
        Self::from_earth(clock.now())
    }

    /// Creates a time from any supported source.
    pub fn at(source: impl Into<TimeSource>) -> Result<Self, VanaError> {
        source.into().to_vana_micros().map(Self::from_scalar)
    }

    // Mutation

    /// Replaces the internal time and recomputes every field.
    pub fn set_time(&mut self, micros: i64) {
        *self = Self::from_scalar(micros);
    }

    // Conversion

    /// Returns the internal scalar (microseconds since the epoch).
    pub fn as_micros(&self) -> i64 {
        self.time
    }

    /// Returns the internal scalar as a float.
    pub fn as_f64(&self) -> f64 {
        self.time as f64
    }

    /// Returns the matching Earth time in unix microseconds.
    pub fn to_earth_micros(&self) -> Result<i64, VanaError> {
        vana_to_earth(self.time)
    }

    /// Returns the matching Earth instant.
    ///
    /// # Errors
    ///
    /// Returns `VanaError::OutOfRange` if the instant is outside the range
    /// chrono can represent.
    pub fn to_earth_time(&self) -> Result<DateTime<Utc>, VanaError> {
        let micros = self.to_earth_micros()?;
        DateTime::from_timestamp(
            micros.div_euclid(ONE_SECOND),
            (micros.rem_euclid(ONE_SECOND) * 1_000) as u32,
        )
        .ok_or_else(|| VanaError::out_of_range("time", self.time))
    }

    // Arithmetic

    /// Returns a new time offset by whole microseconds.
    pub fn checked_add_micros(&self, micros: i64) -> Result<Self, VanaError> {
        self.time
            .checked_add(micros)
            .map(Self::from_scalar)
            .ok_or_else(|| VanaError::out_of_range("time", self.time))
    }

    /// Returns a new time offset by Vana'diel seconds, rounded to the
    /// nearest microsecond.
    ///
    /// # Errors
    ///
    /// - `VanaError::InvalidArgument` if `seconds` is not finite
    /// - `VanaError::OutOfRange` if the result overflows
    pub fn add_seconds(&self, seconds: f64) -> Result<Self, VanaError> {
        let micros = fractional_to_micros((seconds * ONE_SECOND as f64).round(), "seconds")?;
        self.checked_add_micros(micros)
    }

    /// Returns a new time moved back by Vana'diel seconds.
    pub fn sub_seconds(&self, seconds: f64) -> Result<Self, VanaError> {
        self.add_seconds(-seconds)
    }

    /// Returns the Vana'diel seconds from `other` to `self`.
    pub fn seconds_since(&self, other: &VanaTime) -> f64 {
        (self.time as i128 - other.time as i128) as f64 / ONE_SECOND as f64
    }

    // Comparison

    /// Returns true if `min <= self <= max`.
    pub fn between(&self, min: &VanaTime, max: &VanaTime) -> bool {
        min <= self && self <= max
    }

    /// Compares against any supported source.
    pub fn cmp_source(&self, other: &TimeSource) -> Result<Ordering, VanaError> {
        Ok(self.time.cmp(&other.to_vana_micros()?))
    }

    // Fields

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn year(&self) -> i64 {
        self.fields.year
    }

    pub fn month(&self) -> u8 {
        self.fields.month
    }

    /// Alias of [`VanaTime::month`].
    pub fn mon(&self) -> u8 {
        self.fields.month
    }

    pub fn day(&self) -> u8 {
        self.fields.day
    }

    /// Alias of [`VanaTime::day`].
    pub fn mday(&self) -> u8 {
        self.fields.day
    }

    pub fn hour(&self) -> u8 {
        self.fields.hour
    }

    pub fn minute(&self) -> u8 {
        self.fields.minute
    }

    pub fn second(&self) -> u8 {
        self.fields.second
    }

    pub fn usec(&self) -> u32 {
        self.fields.usec
    }

    pub fn weekday(&self) -> Weekday {
        self.fields.weekday
    }

    /// Day of year (1-360).
    pub fn yday(&self) -> u16 {
        self.fields.yday
    }

    pub fn moon_phase(&self) -> MoonPhase {
        self.fields.moon_phase
    }

    /// Moon age in 12 steps (0-11).
    pub fn moon_age12(&self) -> u8 {
        self.fields.moon_phase.age()
    }

    pub fn moon_phase7(&self) -> MoonPhase7 {
        self.fields.moon_phase7
    }

    /// Moon phase in the 8-phase convention (0-7).
    pub fn moon_age7(&self) -> u8 {
        self.fields.moon_phase7.index()
    }

    /// Moon fullness (0-100).
    pub fn moon_percent(&self) -> u8 {
        self.fields.moon_percent
    }

    /// Microseconds elapsed within the current 7-day moon step.
    pub fn time_of_moon(&self) -> i64 {
        self.fields.time_of_moon
    }

    // Formatting

    /// Formats the time with strftime-style directives.
    pub fn strftime(&self, format: &str) -> String {
        strftime(&self.fields, self.time, format)
    }
}

impl PartialEq for VanaTime {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
    }
}

impl Eq for VanaTime {}

impl Hash for VanaTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.time.hash(state);
    }
}

impl PartialOrd for VanaTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VanaTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time)
    }
}

impl Sub for VanaTime {
    type Output = f64;

    fn sub(self, other: VanaTime) -> f64 {
        self.seconds_since(&other)
    }
}

impl From<i64> for VanaTime {
    fn from(micros: i64) -> Self {
        Self::from_scalar(micros)
    }
}

impl From<VanaTime> for i64 {
    fn from(time: VanaTime) -> i64 {
        time.time
    }
}

impl fmt::Display for VanaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.strftime(DISPLAY_FORMAT))
    }
}

// ============================================================================
// Tests
// ============================================================================
