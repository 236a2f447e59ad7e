//! Core library for the `apixu` weather client.
//!
//! This crate defines:
//! - The canonical weather record and its physical units
//! - The Apixu translation layer: query URLs, error classification,
//!   condition-code mapping and payload translation
//! - A transport abstraction over the HTTP GET it depends on
//! - Configuration & credentials handling
//!
//! It is used by `apixu-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod transport;
pub mod units;

pub use config::Config;
pub use error::WeatherError;
pub use model::{Condition, Direction, Weather, Wind};
pub use provider::{WeatherProvider, apixu::ApixuProvider, provider_from_config, provider_with_key};
pub use transport::{HttpReply, ReqwestTransport, Transport};
pub use units::{Pressure, Speed, Temperature};
