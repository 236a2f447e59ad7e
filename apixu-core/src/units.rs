//! Physical quantities carried by a [`Weather`](crate::Weather) record.
//!
//! Each quantity is stored in its SI unit so values from different providers
//! compare directly; constructors and accessors convert at the edges.

use serde::{Deserialize, Serialize};
use std::fmt;

const ZERO_CELSIUS_K: f64 = 273.15;
const PA_PER_MILLIBAR: f64 = 100.0;
const PA_PER_INCH_HG: f64 = 3386.389;
const MPS_PER_MPH: f64 = 0.447_04;
const MPS_PER_KPH: f64 = 1.0 / 3.6;

/// Temperature, stored in kelvin.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Temperature(f64);

impl Temperature {
    pub fn from_kelvin(k: f64) -> Self {
        Self(k)
    }

    pub fn from_celsius(c: f64) -> Self {
        Self(c + ZERO_CELSIUS_K)
    }

    pub fn from_fahrenheit(f: f64) -> Self {
        Self((f - 32.0) * 5.0 / 9.0 + ZERO_CELSIUS_K)
    }

    pub fn kelvin(self) -> f64 {
        self.0
    }

    pub fn celsius(self) -> f64 {
        self.0 - ZERO_CELSIUS_K
    }

    pub fn fahrenheit(self) -> f64 {
        self.celsius() * 9.0 / 5.0 + 32.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.celsius())
    }
}

/// Atmospheric pressure, stored in pascals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Pressure(f64);

impl Pressure {
    pub fn from_pascals(pa: f64) -> Self {
        Self(pa)
    }

    /// Millibars are numerically identical to hectopascals.
    pub fn from_millibars(mb: f64) -> Self {
        Self(mb * PA_PER_MILLIBAR)
    }

    pub fn from_inches_hg(inhg: f64) -> Self {
        Self(inhg * PA_PER_INCH_HG)
    }

    pub fn pascals(self) -> f64 {
        self.0
    }

    pub fn millibars(self) -> f64 {
        self.0 / PA_PER_MILLIBAR
    }

    pub fn inches_hg(self) -> f64 {
        self.0 / PA_PER_INCH_HG
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} hPa", self.millibars())
    }
}

/// Speed, stored in metres per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Speed(f64);

impl Speed {
    pub fn from_meters_per_second(mps: f64) -> Self {
        Self(mps)
    }

    pub fn from_miles_per_hour(mph: f64) -> Self {
        Self(mph * MPS_PER_MPH)
    }

    pub fn from_kilometers_per_hour(kph: f64) -> Self {
        Self(kph * MPS_PER_KPH)
    }

    pub fn meters_per_second(self) -> f64 {
        self.0
    }

    pub fn miles_per_hour(self) -> f64 {
        self.0 / MPS_PER_MPH
    }

    pub fn kilometers_per_hour(self) -> f64 {
        self.0 / MPS_PER_KPH
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km/h", self.kilometers_per_hour())
    }
}
