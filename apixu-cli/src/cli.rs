use anyhow::Context;
use apixu_core::{
    Config, Weather, WeatherProvider, provider::apixu::DEFAULT_LOCATION, provider_from_config,
    provider_with_key,
};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::fmt::Write as _;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "apixu", version, about = "Current weather from Apixu")]
pub struct Cli {
    /// Verbose logging to stderr (RUST_LOG overrides).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default location.
    Configure,

    /// Show the current weather.
    Show {
        /// Zip code, city, "lat,long", "metar:<ICAO>", "iata:<code>", IP or "auto:ip".
        /// Falls back to the configured location.
        location: Option<String>,

        /// Print the weather record as JSON.
        #[arg(long)]
        json: bool,

        /// API key; takes precedence over the configured one.
        #[arg(long, env = "APIXU_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, json, api_key } => {
                let config = Config::load()?;
                let mut provider = match non_blank(api_key.as_deref()) {
                    Some(key) => provider_with_key(key, &config)?,
                    None => provider_from_config(&config)?,
                };
                if let Some(location) = location {
                    provider = provider.query(location);
                }

                let weather = provider
                    .get_weather()
                    .await
                    .with_context(|| format!("Failed to fetch weather for '{}'", provider.location()))?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&weather)?);
                } else {
                    print!("{}", render(&weather));
                }
                Ok(())
            }
        }
    }
}

/// A blank `--api-key` or `APIXU_API_KEY` defers to the configured key.
fn non_blank(api_key: Option<&str>) -> Option<&str> {
    api_key.map(str::trim).filter(|k| !k.is_empty())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("Apixu API key:")
        .without_confirmation()
        .with_help_message("Leave empty to keep the current key")
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.set_api_key(api_key.trim().to_string());
    }

    let current = config.location.clone().unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let location = inquire::Text::new("Default location:")
        .with_default(&current)
        .with_help_message("Zip, city, lat,long, metar:<ICAO>, iata:<code>, IP or auto:ip")
        .prompt()
        .context("Failed to read default location")?;
    config.set_location(Some(location));

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn render(weather: &Weather) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", weather.location);
    if weather.description.is_empty() {
        let _ = writeln!(out, "  {}", weather.condition);
    } else {
        let _ = writeln!(out, "  {} ({})", weather.description, weather.condition);
    }
    let _ = writeln!(
        out,
        "  Temperature: {} ({:.1}°F)",
        weather.temperature,
        weather.temperature.fahrenheit()
    );
    let _ = writeln!(out, "  Humidity:    {:.0}%", weather.humidity * 100.0);
    let _ = writeln!(out, "  Cloud cover: {:.0}%", weather.cloud_cover * 100.0);
    let _ = writeln!(out, "  Pressure:    {}", weather.pressure);
    let _ = writeln!(
        out,
        "  Wind:        {} {} ({}°)",
        weather.wind.speed,
        weather.wind.direction.cardinal(),
        weather.wind.direction.degrees()
    );
    let _ = writeln!(
        out,
        "  Updated:     {}",
        weather.updated.with_timezone(&Local).format("%Y-%m-%d %H:%M %Z")
    );
    let _ = writeln!(out, "  Source:      {}", weather.attribution);
    out
}
