//! Emission calculations: per-mode emission, comparative ranking, and
//! savings against the car baseline.
//!
//! Every function is a pure, stateless mapping of its explicit inputs; the
//! factor table is passed in rather than looked up globally, so tests can run
//! against fabricated tables.

use serde::Serialize;

use crate::factors::{FactorTable, ModeFactor, BASELINE_MODE};
use crate::rounding::round2;

/// Emission figure for a single mode, with its percentage relative to the
/// car baseline. `percentage_vs_baseline` is `None` when the baseline
/// emission is exactly zero (never 0 or NaN).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeEmission {
    pub mode: String,
    pub emission_kg: f64,
    /// Serialized as an explicit `null` when absent, so consumers can rely
    /// on the field being present.
    pub percentage_vs_baseline: Option<f64>,
}

/// Emission saved by choosing a mode instead of the baseline.
///
/// `saved_kg` may be negative: the chosen mode emits more than the baseline.
/// That is a valid comparison result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    pub saved_kg: f64,
    pub percentage: Option<f64>,
}

/// Coerce a distance to the valid domain: non-finite or negative values
/// become zero.
///
/// This preserves the permissive-input behavior of the original system.
/// Callers that want to reject bad input instead should validate before
/// calling into the engine; this is the single place coercion happens.
pub fn sanitize_distance(distance_km: f64) -> f64 {
    if distance_km.is_finite() && distance_km > 0.0 {
        distance_km
    } else {
        0.0
    }
}

/// Emission in kg CO₂ for travelling `distance_km` with `mode`, rounded to
/// two decimals.
///
/// A mode absent from the table contributes a zero factor rather than
/// failing, matching the catalog-driven, open-ended mode set.
pub fn calculate_emission(table: &FactorTable, distance_km: f64, mode: &str) -> f64 {
    let factor = match table.resolve(mode) {
        ModeFactor::Known(factor) => factor,
        ModeFactor::Unknown => {
            tracing::debug!(mode, "unknown transport mode, treating factor as zero");
            0.0
        }
    };
    round2(sanitize_distance(distance_km) * factor)
}

/// Emissions for every mode in the table, ranked ascending by emission.
///
/// The entry for [`BASELINE_MODE`] serves as the 100% reference. Ties keep
/// the table's insertion order (stable sort).
pub fn calculate_all_modes(table: &FactorTable, distance_km: f64) -> Vec<ModeEmission> {
    let baseline = calculate_emission(table, distance_km, BASELINE_MODE);

    let mut results: Vec<ModeEmission> = table
        .iter()
        .map(|(mode, _)| {
            let emission_kg = calculate_emission(table, distance_km, mode);
            let percentage_vs_baseline = if baseline != 0.0 {
                Some(round2(emission_kg / baseline * 100.0))
            } else {
                None
            };
            ModeEmission {
                mode: mode.to_string(),
                emission_kg,
                percentage_vs_baseline,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        a.emission_kg
            .partial_cmp(&b.emission_kg)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results
}

/// Savings of `emission_kg` relative to `baseline_kg`, both in kg CO₂.
///
/// Non-finite arguments are coerced to zero, so a NaN baseline behaves as a
/// zero baseline. `percentage` is `None` exactly when the baseline is zero.
pub fn calculate_saving(emission_kg: f64, baseline_kg: f64) -> Savings {
    let emission_kg = if emission_kg.is_finite() { emission_kg } else { 0.0 };
    let baseline_kg = if baseline_kg.is_finite() { baseline_kg } else { 0.0 };
    let saved = baseline_kg - emission_kg;
    let percentage = if baseline_kg != 0.0 {
        Some(round2(saved / baseline_kg * 100.0))
    } else {
        None
    };
    Savings {
        saved_kg: round2(saved),
        percentage,
    }
}
