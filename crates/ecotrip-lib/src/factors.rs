//! Emission-factor table: transport mode to kg CO₂ per kilometer.
//!
//! The table is external configuration (a JSON object) and is treated as
//! read-only once loaded. Insertion order matters: it is the tie-breaker when
//! ranking modes with equal emissions, so entries are kept as an ordered list
//! rather than a hash map.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Mode identifier for the baseline used in comparative calculations.
pub const BASELINE_MODE: &str = "car";

/// Result of resolving a mode identifier against the table.
///
/// An unknown mode is not an error in the computation pipeline (it
/// contributes a zero factor), but callers see the distinction explicitly
/// instead of a silent default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeFactor {
    /// The mode is present in the table with this factor.
    Known(f64),
    /// The mode is absent from the table.
    Unknown,
}

/// Ordered mapping from transport mode to emission factor (kg CO₂/km).
#[derive(Debug, Clone, Default)]
pub struct FactorTable {
    entries: Vec<(String, f64)>,
}

impl FactorTable {
    /// Build a table from mode/factor pairs, validating every factor.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, f64)> = Vec::new();
        for (mode, factor) in pairs {
            let mode = mode.into();
            if mode.trim().is_empty() {
                return Err(Error::InvalidFactorTable {
                    message: "mode identifier must not be empty".to_string(),
                });
            }
            if !factor.is_finite() || factor < 0.0 {
                return Err(Error::InvalidFactorTable {
                    message: format!("factor for mode '{mode}' must be non-negative, got {factor}"),
                });
            }
            if entries.iter().any(|(known, _)| known == &mode) {
                return Err(Error::InvalidFactorTable {
                    message: format!("duplicate mode identifier: {mode}"),
                });
            }
            entries.push((mode, factor));
        }
        if entries.is_empty() {
            return Err(Error::InvalidFactorTable {
                message: "factor table must contain at least one mode".to_string(),
            });
        }
        Ok(Self { entries })
    }

    /// Load a table from a JSON file holding an object of mode → factor.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a table from a reader. Key order in the JSON object is preserved.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Parse a table from an in-memory JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| Error::InvalidFactorTable {
            message: "expected a JSON object of mode -> factor".to_string(),
        })?;

        let mut pairs: Vec<(String, f64)> = Vec::with_capacity(object.len());
        for (mode, factor) in object {
            let factor = factor.as_f64().ok_or_else(|| Error::InvalidFactorTable {
                message: format!("factor for mode '{mode}' is not a number"),
            })?;
            pairs.push((mode.clone(), factor));
        }
        Self::from_pairs(pairs)
    }

    /// The factor set bundled with the library (kg CO₂/km per mode).
    pub fn builtin() -> Self {
        Self::from_pairs([
            ("bicycle", 0.0),
            ("car", 0.12),
            ("bus", 0.0089),
            ("truck", 0.96),
        ])
        .expect("builtin factor table must be valid")
    }

    /// Resolve a mode identifier to its factor, or `Unknown` if absent.
    pub fn resolve(&self, mode: &str) -> ModeFactor {
        self.entries
            .iter()
            .find(|(known, _)| known == mode)
            .map(|(_, factor)| ModeFactor::Known(*factor))
            .unwrap_or(ModeFactor::Unknown)
    }

    /// Iterate over modes and factors in table insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(mode, factor)| (mode.as_str(), *factor))
    }

    /// Number of modes in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (never true for a validated table).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
