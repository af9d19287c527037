//! Moon age and moon percent across a full lunar cycle.

#![allow(clippy::unwrap_used)]

use vanadiel_domain::constants::ONE_DAY;
use vanadiel_domain::{MoonPhase, MoonPhase7, VanaTime};

fn at(components: &[i64]) -> VanaTime {
    VanaTime::mktime(components).unwrap()
}

#[test]
fn phase_table() {
    // (time, moon age, 8-phase index, percent)
    let rows: [(&[i64], u8, u8, u8); 36] = [
        (&[1, 1, 1], 1, 1, 19),
        (&[886, 1, 1], 0, 0, 10),
        (&[1155, 12, 18, 23, 59, 59, 999_999], 11, 7, 12),
        (&[1155, 12, 19], 0, 0, 10),
        (&[1155, 12, 19, 23, 59, 59, 999_999], 0, 0, 10),
        (&[1155, 12, 20], 0, 0, 7),
        (&[1155, 12, 21], 0, 0, 5),
        (&[1155, 12, 22], 0, 0, 2),
        (&[1155, 12, 22, 23, 59, 59, 999_999], 0, 0, 2),
        (&[1155, 12, 23], 0, 0, 0),
        (&[1156, 1, 2], 1, 1, 21),
        (&[1156, 1, 3], 2, 1, 24),
        (&[1156, 1, 9], 2, 1, 38),
        (&[1156, 1, 10], 3, 2, 40),
        (&[1156, 1, 16], 3, 2, 55),
        (&[1156, 1, 17], 4, 3, 57),
        (&[1156, 1, 23], 4, 3, 71),
        (&[1156, 1, 24], 5, 3, 74),
        (&[1156, 1, 30], 5, 3, 88),
        (&[1156, 2, 1], 6, 4, 90),
        (&[1156, 2, 5], 6, 4, 100),
        (&[1156, 2, 7], 6, 4, 95),
        (&[1156, 2, 8], 7, 5, 93),
        (&[1156, 2, 14], 7, 5, 79),
        (&[1156, 2, 15], 8, 5, 76),
        (&[1156, 2, 21], 8, 5, 62),
        (&[1156, 2, 22], 9, 6, 60),
        (&[1156, 2, 28], 9, 6, 45),
        (&[1156, 2, 29], 10, 7, 43),
        (&[1156, 3, 5], 10, 7, 29),
        (&[1156, 3, 6], 11, 7, 26),
        (&[1156, 3, 12], 11, 7, 12),
        (&[1156, 3, 13], 0, 0, 10),
        (&[1156, 3, 17], 0, 0, 0),
        (&[1156, 3, 19], 0, 0, 5),
        (&[1156, 3, 20], 1, 1, 7),
    ];

    for (components, age, age7, percent) in rows {
        let time = at(components);
        let label = time.strftime("%F %T.%N");
        assert_eq!(time.moon_age12(), age, "moon age at {}", label);
        assert_eq!(time.moon_age7(), age7, "moon age7 at {}", label);
        assert_eq!(time.moon_percent(), percent, "moon percent at {}", label);
    }
}

#[test]
fn daily_percent_over_one_cycle() {
    let expected: [u8; 107] = [
        // 1155-12-18 .. 1155-12-30
        12, 10, 7, 5, 2, 0, 2, 5, 7, 10, 12, 14, 17, //
        // 1156-01-01 .. 1156-01-30
        19, 21, 24, 26, 29, 31, 33, 36, 38, 40, 43, 45, 48, 50, 52, 55, 57, 60, 62, 64, 67, 69,
        71, 74, 76, 79, 81, 83, 86, 88, //
        // 1156-02-01 .. 1156-02-30
        90, 93, 95, 98, 100, 98, 95, 93, 90, 88, 86, 83, 81, 79, 76, 74, 71, 69, 67, 64, 62, 60,
        57, 55, 52, 50, 48, 45, 43, 40, //
        // 1156-03-01 .. 1156-03-30
        38, 36, 33, 31, 29, 26, 24, 21, 19, 17, 14, 12, 10, 7, 5, 2, 0, 2, 5, 7, 10, 12, 14, 17,
        19, 21, 24, 26, 29, 31, //
        // 1156-04-01 .. 1156-04-04
        33, 36, 38, 40,
    ];

    let mut time = at(&[1155, 12, 18]);
    for percent in expected {
        assert_eq!(
            time.moon_percent(),
            percent,
            "moon percent at {}",
            time.strftime("%F")
        );
        time = time.checked_add_micros(ONE_DAY).unwrap();
    }
    assert_eq!(time, at(&[1156, 4, 5]));
}

#[test]
fn phase_names() {
    let time = at(&[1156, 2, 5]);
    assert_eq!(time.moon_phase(), MoonPhase::FullMoon);
    assert_eq!(time.moon_phase().name_ja(), "満月");
    assert_eq!(time.moon_phase7(), MoonPhase7::FullMoon);

    let time = at(&[1156, 3, 6]);
    assert_eq!(time.moon_phase().name(), "Waning Crescent");
    assert_eq!(time.moon_phase().name_ja(), "二十六夜");
    assert_eq!(time.moon_phase7().name(), "Waning Crescent");
}

#[test]
fn moon_ignores_time_of_day() {
    let morning = at(&[1156, 1, 10]);
    let night = at(&[1156, 1, 10, 23, 59, 59, 999_999]);
    assert_eq!(morning.moon_percent(), night.moon_percent());
    assert_eq!(morning.moon_phase(), night.moon_phase());
    assert!(night.time_of_moon() > morning.time_of_moon());
}
