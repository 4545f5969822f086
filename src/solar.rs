//! Coarse day/night model.
//!
//! Local solar time is UTC shifted by one hour per 15 degrees of longitude,
//! bucketed into six fixed bands. There is no latitude or seasonal term: the
//! terminator is always a straight north-south line and dawn is always at
//! 06:00 local solar time.

use chrono::{DateTime, Timelike, Utc};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Dawn,
    Morning,
    Day,
    Dusk,
    Evening,
    Night,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Dawn,
        Phase::Morning,
        Phase::Day,
        Phase::Dusk,
        Phase::Evening,
        Phase::Night,
    ];

    /// Band containing the given whole local hour
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6 => Phase::Dawn,
            7 => Phase::Morning,
            8..=16 => Phase::Day,
            17 => Phase::Dusk,
            18 | 19 => Phase::Evening,
            _ => Phase::Night,
        }
    }

    /// Markup color token for land in this phase
    pub const fn color(self) -> &'static str {
        match self {
            Phase::Dawn => "#FFA500",    // amber
            Phase::Morning => "yellow",
            Phase::Day => "green",
            Phase::Dusk => "#CD853F",    // tan
            Phase::Evening => "#6A5ACD", // slate blue
            Phase::Night => "#2F4F4F",   // dark slate
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Phase::Dawn => "Dawn",
            Phase::Morning => "Morning",
            Phase::Day => "Day",
            Phase::Dusk => "Dusk",
            Phase::Evening => "Evening",
            Phase::Night => "Night",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Local solar hour at `longitude` degrees east, in [0, 24).
///
/// Only the whole UTC hour counts; minutes and seconds are ignored, so a
/// given longitude changes phase on the UTC hour.
pub fn local_solar_hour(now: DateTime<Utc>, longitude: f64) -> f64 {
    let hour = (now.hour() as f64 + longitude / 15.0).rem_euclid(24.0);
    // rem_euclid can round up to exactly 24.0 for tiny negative inputs
    if hour >= 24.0 {
        0.0
    } else {
        hour
    }
}

/// Solar phase at `longitude` degrees east at `now`
pub fn phase_at(now: DateTime<Utc>, longitude: f64) -> Phase {
    Phase::from_hour(local_solar_hour(now, longitude).floor() as u32)
}
