//! Inventory Monitoring Dashboard
//!
//! Client-side view-model layer of the inventory dashboard: renders the stock
//! records served by the inventory service, previews a demand spike for one
//! product at a time, and shows the on-demand reorder report.

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod external;
pub mod report;
pub mod simulation;
pub mod store;
pub mod view;

pub use config::Config;
pub use coordinator::{DashboardAction, DashboardCoordinator, LoadState};
pub use error::{DashboardError, DashboardResult, Notice};
pub use external::{InventoryApi, InventoryClient};
pub use report::ReportController;
pub use simulation::{SimulationController, ToggleOutcome};
pub use store::ProductOverlayStore;
