//! ecotrip library entry points.
//!
//! This crate exposes the trip emission pipeline: resolving distances between
//! named locations from a route catalog, computing emissions per transport
//! mode, ranking modes against the car baseline, and converting emission mass
//! into carbon credits with a price estimate. Higher-level consumers (CLI,
//! HTTP service) should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod catalog;
pub mod collate;
pub mod credits;
pub mod emission;
pub mod error;
pub mod factors;

mod rounding;

pub use catalog::{RouteCatalog, RouteEntry};
pub use collate::{collate, collation_key};
pub use credits::{calculate_carbon_credits, estimate_credit_price, CreditConfig, CreditEstimate};
pub use emission::{
    calculate_all_modes, calculate_emission, calculate_saving, sanitize_distance, ModeEmission,
    Savings,
};
pub use error::{Error, Result};
pub use factors::{FactorTable, ModeFactor, BASELINE_MODE};
