use chrono::DateTime;
use serde::Deserialize;

use super::{ATTRIBUTION, conditions::condition_for};
use crate::{
    Weather, WeatherError,
    model::{Direction, Wind},
    units::{Pressure, Speed, Temperature},
};

#[derive(Debug, Deserialize)]
struct ApxResponse {
    #[serde(default)]
    location: ApxLocation,
    current: ApxCurrent,
}

#[derive(Debug, Default, Deserialize)]
struct ApxLocation {
    #[serde(default)]
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApxCurrent {
    condition: ApxCondition,
    humidity: f64,
    cloud: f64,
    pressure_mb: f64,
    temp_f: f64,
    wind_mph: f64,
    wind_degree: i64,
    last_updated_epoch: i64,
}

#[derive(Debug, Deserialize)]
struct ApxCondition {
    code: ApxCode,
    #[serde(default)]
    text: String,
}

/// Condition codes arrive as numbers, though some fixtures quote them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApxCode {
    Number(i64),
    Text(String),
}

impl ApxCode {
    fn key(&self) -> String {
        match self {
            ApxCode::Number(n) => n.to_string(),
            ApxCode::Text(s) => s.trim().to_string(),
        }
    }
}

/// Translates a successful current-conditions body into a [`Weather`].
pub fn translate(body: &str) -> Result<Weather, WeatherError> {
    let parsed: ApxResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;
    let current = parsed.current;

    let updated = DateTime::from_timestamp(current.last_updated_epoch, 0).ok_or_else(|| {
        WeatherError::MalformedResponse(format!(
            "last_updated_epoch out of range: {}",
            current.last_updated_epoch
        ))
    })?;

    Ok(Weather {
        location: display_location(&parsed.location),
        condition: condition_for(&current.condition.code.key()),
        description: current.condition.text,
        humidity: fraction(current.humidity),
        pressure: Pressure::from_millibars(current.pressure_mb),
        temperature: Temperature::from_fahrenheit(current.temp_f),
        wind: Wind {
            speed: Speed::from_miles_per_hour(current.wind_mph),
            direction: Direction::new(current.wind_degree),
        },
        cloud_cover: fraction(current.cloud),
        updated,
        attribution: ATTRIBUTION.to_string(),
    })
}

/// Name, region and country exactly as supplied, joined with ", ".
fn display_location(loc: &ApxLocation) -> String {
    format!("{}, {}, {}", loc.name, loc.region, loc.country)
}

fn fraction(percent: f64) -> f64 {
    (percent / 100.0).clamp(0.0, 1.0)
}
