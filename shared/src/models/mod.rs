//! Domain models for the Inventory Monitoring Dashboard

mod product;
mod report;
mod simulation;
mod view;

pub use product::*;
pub use report::*;
pub use simulation::*;
pub use view::*;
