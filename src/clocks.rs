//! City clock panels.
//!
//! Each panel line shows one city's wall-clock time, date, UTC offset and a
//! time-of-day label, as style markup. Local time comes from the IANA zone
//! stored on the catalog city, so daylight saving follows the zone rules.

use crate::geography::{find_city, City};
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use std::fmt;

/// Time-of-day label from the local wall clock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayPart {
    Dawn,
    Morning,
    Afternoon,
    Evening,
    Dusk,
    Night,
}

impl DayPart {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=7 => DayPart::Dawn,
            8..=11 => DayPart::Morning,
            12..=16 => DayPart::Afternoon,
            17..=19 => DayPart::Evening,
            20..=21 => DayPart::Dusk,
            _ => DayPart::Night,
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            DayPart::Dawn => "#FFA07A",
            DayPart::Morning => "yellow",
            DayPart::Afternoon => "#FFD700",
            DayPart::Evening => "orange",
            DayPart::Dusk => "#CD853F",
            DayPart::Night => "#6A5ACD",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DayPart::Dawn => "Dawn",
            DayPart::Morning => "Morning",
            DayPart::Afternoon => "Afternoon",
            DayPart::Evening => "Evening",
            DayPart::Dusk => "Dusk",
            DayPart::Night => "Night",
        }
    }
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A titled group of catalog cities
pub struct ClockPanel {
    pub title: &'static str,
    pub border: &'static str,
    pub cities: [&'static str; 8],
}

pub static PANELS: [ClockPanel; 2] = [
    ClockPanel {
        title: " Americas & Europe ",
        border: "green",
        cities: [
            "Honolulu",
            "Anchorage",
            "Los Angeles",
            "New York",
            "Sao Paulo",
            "London",
            "Paris",
            "Moscow",
        ],
    },
    ClockPanel {
        title: " Asia, Africa & Oceania ",
        border: "orange",
        cities: [
            "Cairo",
            "Nairobi",
            "Dubai",
            "Mumbai",
            "Singapore",
            "Shanghai",
            "Tokyo",
            "Sydney",
        ],
    },
];

/// One panel row for `city` at `now`
pub fn clock_line(city: &City, now: DateTime<Utc>) -> String {
    let Ok(tz) = city.timezone.parse::<Tz>() else {
        return format!("  [red]{:<13}  ERROR[-]", city.name);
    };
    let local = now.with_timezone(&tz);
    let part = DayPart::from_hour(local.hour());

    format!(
        "  [{}::b]{:<13}[-::-] [white::b]{}[-::-]  [silver]{}  [darkgray]UTC{}  [{}]{}[-]",
        city.color,
        city.name,
        local.format("%H:%M:%S"),
        local.format("%a, %d %b %Y"),
        local.format("%:z"),
        part.color(),
        part,
    )
}

impl ClockPanel {
    /// Markup lines for every city in the panel, in panel order
    pub fn lines(&self, now: DateTime<Utc>) -> Vec<String> {
        self.cities
            .iter()
            .filter_map(|name| find_city(name))
            .map(|city| clock_line(city, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geography::Region;
    use crate::markup::strip_tags;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 58).unwrap()
    }

    fn line_for(name: &str) -> String {
        strip_tags(&clock_line(find_city(name).unwrap(), now()))
    }

    #[test]
    fn every_panel_city_is_in_the_catalog() {
        for panel in &PANELS {
            for name in panel.cities {
                assert!(find_city(name).is_some(), "{name}");
            }
            assert_eq!(panel.lines(now()).len(), 8);
        }
    }

    #[test]
    fn local_time_date_and_offset() {
        let honolulu = line_for("Honolulu");
        assert!(honolulu.contains("13:59:58"), "{honolulu}");
        assert!(honolulu.contains("Tue, 31 Dec 2024"));
        assert!(honolulu.contains("UTC-10:00"));
        assert!(honolulu.ends_with("Afternoon"));

        let tokyo = line_for("Tokyo");
        assert!(tokyo.contains("08:59:58"), "{tokyo}");
        assert!(tokyo.contains("Wed, 01 Jan 2025"));
        assert!(tokyo.contains("UTC+09:00"));
        assert!(tokyo.ends_with("Morning"));
    }

    #[test]
    fn half_hour_and_summer_offsets() {
        let mumbai = line_for("Mumbai");
        assert!(mumbai.contains("05:29:58"), "{mumbai}");
        assert!(mumbai.contains("UTC+05:30"));
        assert!(mumbai.ends_with("Dawn"));

        // Southern hemisphere summer time
        let sydney = line_for("Sydney");
        assert!(sydney.contains("10:59:58"), "{sydney}");
        assert!(sydney.contains("UTC+11:00"));
    }

    #[test]
    fn line_layout() {
        let london = clock_line(find_city("London").unwrap(), now());
        assert_eq!(
            london,
            "  [green::b]London       [-::-] [white::b]23:59:58[-::-]  [silver]Tue, 31 Dec 2024  \
             [darkgray]UTC+00:00  [#6A5ACD]Night[-]"
        );
    }

    #[test]
    fn unknown_zone_is_an_error_line() {
        let city = City {
            name: "Atlantis",
            code: "ATL",
            timezone: "Atlantic/Atlantis",
            country: "Nowhere",
            region: Region::Europe,
            lat: 0.0,
            lon: 0.0,
            color: "aqua",
        };
        assert_eq!(clock_line(&city, now()), "  [red]Atlantis       ERROR[-]");
    }

    #[test]
    fn day_part_bands() {
        let expected = [
            (4, DayPart::Night),
            (5, DayPart::Dawn),
            (7, DayPart::Dawn),
            (8, DayPart::Morning),
            (12, DayPart::Afternoon),
            (17, DayPart::Evening),
            (20, DayPart::Dusk),
            (22, DayPart::Night),
        ];
        for (hour, part) in expected {
            assert_eq!(DayPart::from_hour(hour), part, "hour {hour}");
        }
    }
}
