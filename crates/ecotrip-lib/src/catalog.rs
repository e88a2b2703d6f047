//! Route catalog loading and distance lookup.
//!
//! The catalog is an ordered list of undirected routes between named
//! locations. It is loaded once (from JSON or from the embedded default
//! dataset) and is read-only afterwards; every lookup is a pure function of
//! the catalog contents.

use std::fs;
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::collate::{collate, collation_key};
use crate::error::{Error, Result};

/// Default route dataset bundled with the library (Brazilian intercity
/// routes, distances approximate).
static DEFAULT_ROUTES_JSON: &str = include_str!("../data/routes.json");

static DEFAULT_CATALOG: Lazy<RouteCatalog> = Lazy::new(|| {
    RouteCatalog::from_json_str(DEFAULT_ROUTES_JSON)
        .expect("embedded route dataset must be valid")
});

/// A single undirected route between two named locations.
///
/// The order of `location_a` and `location_b` carries no meaning; lookups
/// match either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    pub location_a: String,
    pub location_b: String,
    pub distance_km: f64,
}

/// Collection of known routes with normalized, direction-agnostic lookup.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    entries: Vec<RouteEntry>,
}

impl RouteCatalog {
    /// Build a catalog from a list of entries, validating each one.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.location_a.trim().is_empty() || entry.location_b.trim().is_empty() {
                return Err(Error::InvalidCatalog {
                    message: format!("entry {index} has an empty location name"),
                });
            }
            if !entry.distance_km.is_finite() || entry.distance_km < 0.0 {
                return Err(Error::InvalidCatalog {
                    message: format!(
                        "entry {index} ({} - {}) has invalid distance {}",
                        entry.location_a, entry.location_b, entry.distance_km
                    ),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Load a catalog from a JSON file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            routes = catalog.len(),
            "loaded route catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog from a reader yielding a JSON array of route entries.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: Vec<RouteEntry> = serde_json::from_reader(reader)?;
        Self::new(entries)
    }

    /// Parse a catalog from an in-memory JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<RouteEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The catalog bundled with the library.
    pub fn builtin() -> &'static Self {
        &DEFAULT_CATALOG
    }

    /// Number of route entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Find the distance in kilometers between two locations.
    ///
    /// Both inputs are trimmed and case-folded before comparison; the search
    /// walks entries in insertion order and matches `(a, b)` or `(b, a)`,
    /// returning the first hit. Returns `None` when either input is empty
    /// after trimming or no entry matches. Matching is exact, never fuzzy.
    pub fn find_distance(&self, a: &str, b: &str) -> Option<f64> {
        let a = normalize(a);
        let b = normalize(b);
        if a.is_empty() || b.is_empty() {
            return None;
        }

        self.entries.iter().find_map(|entry| {
            let ea = normalize(&entry.location_a);
            let eb = normalize(&entry.location_b);
            if (ea == a && eb == b) || (ea == b && eb == a) {
                Some(entry.distance_km)
            } else {
                None
            }
        })
    }

    /// Every location that appears as either endpoint, deduplicated and
    /// sorted with diacritic- and case-insensitive collation.
    pub fn all_locations(&self) -> Vec<String> {
        let mut locations: Vec<String> = Vec::new();
        for entry in &self.entries {
            for name in [&entry.location_a, &entry.location_b] {
                let name = name.trim();
                if !locations.iter().any(|known| known == name) {
                    locations.push(name.to_string());
                }
            }
        }
        locations.sort_by(|a, b| collate(a, b));
        locations
    }

    /// Whether the given name matches any known location after normalization.
    pub fn contains_location(&self, name: &str) -> bool {
        let name = normalize(name);
        !name.is_empty()
            && self.entries.iter().any(|entry| {
                normalize(&entry.location_a) == name || normalize(&entry.location_b) == name
            })
    }

    /// Suggest up to `limit` known locations similar to `name`, ranked by
    /// Jaro-Winkler similarity over collation keys (so a missing accent does
    /// not penalize the match). Used to decorate unknown-location errors.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = collation_key(name.trim());
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, String)> = self
            .all_locations()
            .into_iter()
            .map(|location| {
                let score = strsim::jaro_winkler(&needle, &collation_key(&location));
                (score, location)
            })
            .filter(|(score, _)| *score >= 0.8)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(limit).map(|(_, name)| name).collect()
    }

    /// Resolve a distance or produce the caller-facing error taxonomy:
    /// `UnknownLocation` (with suggestions) when an endpoint is not in the
    /// catalog, `RouteNotFound` when both endpoints are known but no entry
    /// connects them.
    pub fn resolve_distance(&self, from: &str, to: &str) -> Result<f64> {
        if let Some(km) = self.find_distance(from, to) {
            return Ok(km);
        }

        for name in [from, to] {
            if !self.contains_location(name) {
                return Err(Error::UnknownLocation {
                    name: name.trim().to_string(),
                    suggestions: self.suggest(name, 3),
                });
            }
        }

        Err(Error::RouteNotFound {
            from: from.trim().to_string(),
            to: to.trim().to_string(),
        })
    }
}

/// Normalization used for lookups: trim plus Unicode lowercase.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
