//! External API integrations

pub mod inventory;

pub use inventory::{InventoryApi, InventoryClient};
