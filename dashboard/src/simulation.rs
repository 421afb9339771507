//! Demand spike simulation lifecycle

use std::sync::Arc;

use shared::{ProductId, SimulatedOverlay, SimulationRequest};

use crate::error::{DashboardError, DashboardResult};
use crate::external::InventoryApi;
use crate::store::ProductOverlayStore;

/// What a row's simulation button did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Activated,
    Reset,
}

/// Drives the simulate/reset button of each dashboard row
pub struct SimulationController<A> {
    api: Arc<A>,
}

impl<A: InventoryApi> SimulationController<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Ask the inventory service for a spike preview, without touching state.
    pub async fn request(&self, product_id: ProductId) -> DashboardResult<SimulatedOverlay> {
        let request = SimulationRequest::demand_spike(product_id);
        tracing::info!(
            product_id = %product_id,
            spike_factor = request.spike_factor,
            duration = request.duration,
            "Requesting demand spike simulation"
        );
        self.api.simulate(&request).await
    }

    /// Install a simulation response for `requested` into the store.
    ///
    /// A response for another product, or for a product that is not loaded,
    /// is rejected and the store is left unchanged.
    pub fn install(
        store: &mut ProductOverlayStore,
        requested: ProductId,
        overlay: SimulatedOverlay,
    ) -> DashboardResult<()> {
        if overlay.id() != requested {
            tracing::warn!(
                requested = %requested,
                received = %overlay.id(),
                "Discarding simulation for the wrong product"
            );
            return Err(DashboardError::SimulationMismatch {
                requested,
                received: overlay.id(),
            });
        }
        if !store.contains(requested) {
            tracing::warn!(product_id = %requested, "Discarding simulation for unloaded product");
            return Err(DashboardError::UnknownProduct(requested));
        }

        store.set_overlay(overlay);
        Ok(())
    }

    /// Simulate a demand spike for a product and show it on its row
    pub async fn activate(
        &self,
        store: &mut ProductOverlayStore,
        product_id: ProductId,
    ) -> DashboardResult<()> {
        let overlay = self.request(product_id).await?;
        Self::install(store, product_id, overlay)
    }

    /// Reset the row if it is the simulated one, otherwise simulate it
    pub async fn toggle(
        &self,
        store: &mut ProductOverlayStore,
        product_id: ProductId,
    ) -> DashboardResult<ToggleOutcome> {
        if store.is_simulated(product_id) {
            tracing::info!(product_id = %product_id, "Resetting simulation");
            store.clear_overlay();
            return Ok(ToggleOutcome::Reset);
        }
        if !store.contains(product_id) {
            return Err(DashboardError::UnknownProduct(product_id));
        }

        self.activate(store, product_id).await?;
        Ok(ToggleOutcome::Activated)
    }
}
