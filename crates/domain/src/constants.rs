//! Fixed conversion factors and name tables for the Vana'diel calendar
//!
//! Every value here is compile-time data. All durations are expressed in
//! microseconds of the timeline they belong to.
//!
//! Alignment points:
//! - Earth 1967-02-10 00:00:00 JST (unix -91270800) is Vana'diel 0001-01-01 00:00:00
//! - Earth 2002-01-01 00:00:00 JST is Vana'diel 0886-01-01 00:00:00 (Firesday)

// ============================================================================
// Units
// ============================================================================

pub const ONE_SECOND: i64 = 1_000_000;
pub const ONE_MINUTE: i64 = 60 * ONE_SECOND;
pub const ONE_HOUR: i64 = 60 * ONE_MINUTE;
pub const ONE_DAY: i64 = 24 * ONE_HOUR;
/// A Vana'diel week has one day per element.
pub const ONE_WEEK: i64 = 8 * ONE_DAY;
pub const ONE_MONTH: i64 = 30 * ONE_DAY;
pub const ONE_YEAR: i64 = 360 * ONE_DAY;

// ============================================================================
// Calendar limits
// ============================================================================

pub const MAX_MDAY: u32 = 30; // 1-origin
pub const MAX_MONTH: u32 = 12; // 1-origin
pub const MAX_WDAY: u8 = 7; // 0-origin
pub const MAX_YDAY: u16 = 360; // 1-origin
pub const MAX_MOON_AGE: u8 = 11; // 0-origin

// ============================================================================
// Time scale
// ============================================================================

/// Vana'diel time runs this many times faster than Earth time.
pub const VANA_TIME_SCALE: i64 = 25;
pub const VANA_BASE_YEAR: i64 = 886;
/// Start of Vana'diel year 886 on the Earth scale.
pub const VANA_BASE_TIME: i64 = VANA_BASE_YEAR * ONE_YEAR / VANA_TIME_SCALE;
/// 2002-01-01 00:00:00 JST in unix microseconds.
pub const EARTH_BASE_TIME: i64 = 1_009_810_800 * ONE_SECOND;
pub const DIFF_TIME: i64 = VANA_BASE_TIME - EARTH_BASE_TIME;

// ============================================================================
// Moon
// ============================================================================

/// Days in one full lunar cycle.
pub const MOON_CYCLE_DAYS: i64 = 84;
/// Days the moon age advances per step of the 12-step table.
pub const MOON_STEP_DAYS: i64 = 7;
/// Day offset of the moon percent wave; day 0 sits 8 days into the cycle.
pub const MOON_PERCENT_OFFSET_DAYS: i64 = 8;
/// Day offset of the moon age; day 0 sits 12 days after a new moon.
pub const MOON_AGE_OFFSET_DAYS: i64 = 12;

// ============================================================================
// Name tables
// ============================================================================

pub const DAY_NAMES: [&str; 8] = [
    "Firesday",
    "Earthsday",
    "Watersday",
    "Windsday",
    "Iceday",
    "Lightningday",
    "Lightsday",
    "Darksday",
];

pub const DAY_NAMES_JA: [&str; 8] = [
    "火曜日",
    "土曜日",
    "水曜日",
    "風曜日",
    "氷曜日",
    "雷曜日",
    "光曜日",
    "闇曜日",
];

pub const MOON_NAMES: [&str; 12] = [
    "New Moon",
    "Waxing Crescent",
    "Waxing Crescent",
    "First Quarter",
    "Waxing Gibbous",
    "Waxing Gibbous",
    "Full Moon",
    "Waning Gibbous",
    "Waning Gibbous",
    "Last Quarter",
    "Waning Crescent",
    "Waning Crescent",
];

pub const MOON_NAMES_JA: [&str; 12] = [
    "新月",
    "三日月",
    "七日月",
    "上弦の月",
    "十日夜",
    "十三夜",
    "満月",
    "十六夜",
    "居待月",
    "下弦の月",
    "二十日余月",
    "二十六夜",
];

pub const MOON7_NAMES: [&str; 8] = [
    "New Moon",
    "Waxing Crescent",
    "First Quarter",
    "Waxing Gibbous",
    "Full Moon",
    "Waning Gibbous",
    "Last Quarter",
    "Waning Crescent",
];
