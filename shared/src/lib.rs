//! Shared types and models for the Inventory Monitoring Dashboard
//!
//! This crate contains the data model, risk indicators and the product/overlay
//! merge shared between the dashboard client, the browser front-end (via WASM),
//! and other components of the system.

pub mod indicators;
pub mod models;
pub mod types;
pub mod validation;

pub use indicators::*;
pub use models::*;
pub use types::*;
pub use validation::*;
