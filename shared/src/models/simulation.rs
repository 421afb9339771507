//! Demand spike simulation request

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Demand multiplier applied by the dashboard's spike preview
pub const SPIKE_FACTOR: u32 = 3;

/// Horizon of the spike preview in days
pub const SPIKE_DURATION_DAYS: u32 = 7;

/// Body of `POST /simulate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationRequest {
    pub product_id: ProductId,
    pub spike_factor: u32,
    pub duration: u32,
}

impl SimulationRequest {
    /// The dashboard's fixed spike scenario for a product
    pub fn demand_spike(product_id: ProductId) -> Self {
        Self {
            product_id,
            spike_factor: SPIKE_FACTOR,
            duration: SPIKE_DURATION_DAYS,
        }
    }
}
