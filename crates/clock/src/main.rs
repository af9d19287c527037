//! Vana'diel clock - prints the current Earth and Vana'diel time.

use std::fmt::{self, Write};

use chrono::{DateTime, Local, TimeZone};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vanadiel_domain::{ClockPort, FixedClock, VanaTime};

mod clock;
mod config;

use clock::SystemClock;
use config::{ClockConfig, DEFAULT_FORMAT};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/clock`).
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vanadiel_clock=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClockConfig::from_env()?;
    tracing::debug!(?config, "Loaded clock configuration");

    let clock: Box<dyn ClockPort> = match config.at {
        Some(instant) => {
            tracing::info!(%instant, "Using fixed Earth time");
            Box::new(FixedClock(instant))
        }
        None => Box::new(SystemClock::new()),
    };

    let vana = VanaTime::now(clock.as_ref())?;
    let earth = vana.to_earth_time()?;
    tracing::debug!(vana_micros = vana.as_micros(), "Converted Earth time");

    let local = earth.with_timezone(&Local);
    for line in report_lines(&config, &format_earth(&local, &config.format), &vana) {
        println!("{}", line);
    }

    Ok(())
}

/// Earth line, Vana'diel line and the moon line underneath them.
fn report_lines(config: &ClockConfig, earth: &str, vana: &VanaTime) -> [String; 3] {
    [
        format!("Earth    : {}", earth),
        format!("Vana'diel: {}", vana.strftime(&config.format)),
        format!(
            "           {} ({}%)",
            config.language.phase_name(vana.moon_phase()),
            vana.moon_percent()
        ),
    ]
}

/// Formats the Earth instant with chrono, falling back to the default format
/// when chrono rejects a directive (for example `%L`).
fn format_earth<Tz>(earth: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut text = String::new();
    if write!(text, "{}", earth.format(format)).is_ok() {
        return text;
    }
    tracing::warn!(format, "Earth time does not support this format, using default");
    earth.format(DEFAULT_FORMAT).to_string()
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use config::MoonLanguage;

    fn fixed(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().into()
    }

    #[test]
    fn report_for_vanadiel_epoch() {
        let earth = fixed("2002-01-01T00:00:00+09:00");
        let vana = VanaTime::now(&FixedClock(earth)).unwrap();
        let config = ClockConfig::default();

        let lines = report_lines(&config, &format_earth(&earth, &config.format), &vana);
        assert_eq!(lines[0], "Earth    : 2001-12-31 15:00:00 Monday");
        assert_eq!(lines[1], "Vana'diel: 886-01-01 00:00:00 Firesday");
        assert_eq!(lines[2], "           New Moon (10%)");
    }

    #[test]
    fn report_in_japanese() {
        let vana = VanaTime::mktime(&[1156, 2, 5]).unwrap();
        let config = ClockConfig {
            format: "%F".to_string(),
            language: MoonLanguage::Japanese,
            at: None,
        };

        let lines = report_lines(&config, "-", &vana);
        assert_eq!(lines[1], "Vana'diel: 1156-02-05");
        assert_eq!(lines[2], "           満月 (100%)");
    }

    #[test]
    fn unsupported_earth_format_falls_back() {
        let earth = fixed("2002-01-01T00:00:00Z");
        assert_eq!(format_earth(&earth, "%F %L"), "2002-01-01 00:00:00 Tuesday");
        assert_eq!(format_earth(&earth, "%F"), "2002-01-01");
    }
}
