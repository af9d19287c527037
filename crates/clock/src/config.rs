//! Clock configuration loaded from the environment.
//!
//! | Variable      | Default                 | Meaning                                 |
//! |---------------|-------------------------|-----------------------------------------|
//! | `VANA_FORMAT` | `%Y-%m-%d %H:%M:%S %A`  | Format for the Earth and Vana'diel line |
//! | `VANA_LANG`   | `en`                    | Moon name table (`en` or `ja`)          |
//! | `VANA_AT`     | unset (current time)    | RFC 3339 instant to print instead       |

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use vanadiel_domain::MoonPhase;

pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %A";

/// Name table used for the moon phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoonLanguage {
    #[default]
    English,
    Japanese,
}

impl MoonLanguage {
    pub fn phase_name(&self, phase: MoonPhase) -> &'static str {
        match self {
            MoonLanguage::English => phase.name(),
            MoonLanguage::Japanese => phase.name_ja(),
        }
    }
}

impl FromStr for MoonLanguage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(MoonLanguage::English),
            "ja" | "japanese" => Ok(MoonLanguage::Japanese),
            other => bail!("Unknown moon language: '{}' (expected 'en' or 'ja')", other),
        }
    }
}

impl fmt::Display for MoonLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoonLanguage::English => write!(f, "en"),
            MoonLanguage::Japanese => write!(f, "ja"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    pub format: String,
    pub language: MoonLanguage,
    /// Fixed Earth instant; `None` reads the system clock
    pub at: Option<DateTime<Utc>>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            language: MoonLanguage::default(),
            at: None,
        }
    }
}

impl ClockConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let format = get("VANA_FORMAT").unwrap_or_else(|| DEFAULT_FORMAT.to_string());

        let language = match get("VANA_LANG") {
            Some(lang) => lang.parse().context("Invalid VANA_LANG")?,
            None => MoonLanguage::default(),
        };

        let at = get("VANA_AT")
            .map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .with_context(|| format!("Invalid VANA_AT: '{}'", s))
            })
            .transpose()?;

        Ok(Self {
            format,
            language,
            at,
        })
    }
}
