use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::units::{Pressure, Speed, Temperature};

/// Provider-agnostic classification of the current sky and precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
    Mist,
    Fog,
    Rain,
    Drizzle,
    Sleet,
    Snow,
    Hail,
    Thunderstorm,
    /// Any state the provider reported that has no canonical counterpart.
    ConditionUnknown,
}

impl Condition {
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Cloudy => "Cloudy",
            Self::Overcast => "Overcast",
            Self::Mist => "Mist",
            Self::Fog => "Fog",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Sleet => "Sleet",
            Self::Snow => "Snow",
            Self::Hail => "Hail",
            Self::Thunderstorm => "Thunderstorm",
            Self::ConditionUnknown => "Unknown",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Compass bearing the wind blows from, in whole degrees (0-359).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction(u16);

impl Direction {
    /// Bearings outside 0..360 are wrapped, so 360 is north and -90 is west.
    pub fn new(degrees: i64) -> Self {
        // rem_euclid(360) always fits in u16
        Self(degrees.rem_euclid(360) as u16)
    }

    pub fn degrees(self) -> u16 {
        self.0
    }

    /// 16-point compass abbreviation, e.g. "NE" or "SSW".
    pub fn cardinal(self) -> &'static str {
        const POINTS: [&str; 16] = [
            "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
            "NW", "NNW",
        ];
        // Each point covers 22.5°, centred on its bearing.
        let idx = ((u32::from(self.0) * 4 + 45) / 90) % 16;
        POINTS[idx as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: Speed,
    pub direction: Direction,
}

/// Canonical current-conditions record, independent of the provider that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub location: String,
    pub condition: Condition,
    /// Provider-supplied free text, e.g. "Light rain".
    pub description: String,
    /// Relative humidity as a fraction in [0.0, 1.0].
    pub humidity: f64,
    pub pressure: Pressure,
    pub temperature: Temperature,
    pub wind: Wind,
    /// Cloud cover as a fraction in [0.0, 1.0].
    pub cloud_cover: f64,
    pub updated: DateTime<Utc>,
    pub attribution: String,
}
