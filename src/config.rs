use anyhow::{bail, Context, Result};

use crate::cost::{CostModel, DEFAULT_EMISSION_FACTOR, DEFAULT_TARIFF_RATE};

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Currency units per kWh
    pub tariff_rate: f64,
    /// kg CO₂ per kWh
    pub emission_factor: f64,
    /// Label reported next to monetary values, e.g. `"S/"`.
    pub currency: String,
    /// Load the sample campus on start-up.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value source. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        Ok(Self {
            server_host: optional("SERVER_HOST", "0.0.0.0"),
            server_port: optional("SERVER_PORT", "8080")
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            tariff_rate: parse_factor(
                "TARIFF_RATE",
                &optional("TARIFF_RATE", &DEFAULT_TARIFF_RATE.to_string()),
            )?,
            emission_factor: parse_factor(
                "EMISSION_FACTOR",
                &optional("EMISSION_FACTOR", &DEFAULT_EMISSION_FACTOR.to_string()),
            )?,
            currency: optional("CURRENCY", "S/"),
            seed_demo_data: parse_flag("SEED_DEMO_DATA", &optional("SEED_DEMO_DATA", "true"))?,
        })
    }

    pub fn cost_model(&self) -> CostModel {
        CostModel::new(self.tariff_rate, self.emission_factor)
    }
}

/// Conversion factors must be finite and non-negative.
fn parse_factor(key: &str, raw: &str) -> Result<f64> {
    let v: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a number, got: {raw:?}"))?;
    if !v.is_finite() || v < 0.0 {
        bail!("{key} must be a finite, non-negative number, got: {raw:?}");
    }
    Ok(v)
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("{key} must be a boolean (true/false), got: {raw:?}"),
    }
}
