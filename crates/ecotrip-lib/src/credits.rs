//! Carbon-credit conversion and price estimation.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rounding::{round2, round4};

/// Carbon-credit configuration: how many kg of CO₂ one credit offsets and
/// the per-credit market price band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditConfig {
    /// Kilograms of CO₂ offset by one credit.
    pub kg_per_credit: f64,
    /// Lower bound of the per-credit price, in the configured currency.
    pub price_min_per_credit: f64,
    /// Upper bound of the per-credit price.
    pub price_max_per_credit: f64,
}

impl Default for CreditConfig {
    fn default() -> Self {
        // Reference values: 1 credit = 1 tonne, priced 50-150 BRL.
        Self {
            kg_per_credit: 1000.0,
            price_min_per_credit: 50.0,
            price_max_per_credit: 150.0,
        }
    }
}

impl CreditConfig {
    /// Load a credit configuration from a JSON file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a credit configuration from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// A zero or negative `kg_per_credit` would turn the credit conversion
    /// into a division by zero (or a sign flip), so it is rejected up front
    /// instead of silently producing infinity.
    pub fn validate(&self) -> Result<()> {
        if !self.kg_per_credit.is_finite() || self.kg_per_credit <= 0.0 {
            return Err(Error::InvalidCreditConfig {
                message: format!("kg_per_credit must be positive, got {}", self.kg_per_credit),
            });
        }
        for (label, price) in [
            ("price_min_per_credit", self.price_min_per_credit),
            ("price_max_per_credit", self.price_max_per_credit),
        ] {
            if !price.is_finite() || price < 0.0 {
                return Err(Error::InvalidCreditConfig {
                    message: format!("{label} must be non-negative, got {price}"),
                });
            }
        }
        if self.price_min_per_credit > self.price_max_per_credit {
            return Err(Error::InvalidCreditConfig {
                message: format!(
                    "price_min_per_credit ({}) exceeds price_max_per_credit ({})",
                    self.price_min_per_credit, self.price_max_per_credit
                ),
            });
        }
        Ok(())
    }
}

/// Estimated monetary value of a number of carbon credits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditEstimate {
    pub credits: f64,
    pub price_min: f64,
    pub price_max: f64,
    pub price_average: f64,
}

/// Convert an emission mass into carbon credits, rounded to four decimals.
pub fn calculate_carbon_credits(config: &CreditConfig, emission_kg: f64) -> Result<f64> {
    config.validate()?;
    let kg = if emission_kg.is_finite() { emission_kg } else { 0.0 };
    Ok(round4(kg / config.kg_per_credit))
}

/// Price band for a number of credits: min, max, and the midpoint average,
/// each rounded to two decimals.
pub fn estimate_credit_price(config: &CreditConfig, credits: f64) -> Result<CreditEstimate> {
    config.validate()?;
    let credits_value = if credits.is_finite() { credits } else { 0.0 };
    let min = credits_value * config.price_min_per_credit;
    let max = credits_value * config.price_max_per_credit;
    Ok(CreditEstimate {
        credits: credits_value,
        price_min: round2(min),
        price_max: round2(max),
        price_average: round2((min + max) / 2.0),
    })
}
