//! Vana'diel time
//!
//! Converts between Earth time and Vana'diel time, derives calendar fields
//! (date, time, weekday, day of year, moon phase) from a single microsecond
//! scalar, and formats them with strftime-style directives.

pub mod clock;
pub mod constants;
pub mod day;
pub mod error;
pub mod fields;
pub mod format;
pub mod moon;
pub mod vana_time;

pub use clock::{ClockPort, FixedClock};
pub use day::Weekday;
pub use error::VanaError;
pub use fields::{compute_fields, FieldSet};
pub use format::strftime;
pub use moon::{MoonPhase, MoonPhase7};
pub use vana_time::{earth_to_vana, vana_to_earth, TimeSource, VanaTime};
