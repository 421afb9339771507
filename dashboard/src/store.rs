//! Product collection with a single simulated overlay slot

use shared::{merge_view, Product, ProductId, ProductView, SimulatedOverlay};

/// Authoritative products plus at most one simulated overlay
///
/// The overlay is a single optional slot, so installing a simulation for one
/// product discards any simulation for another.
#[derive(Debug, Clone, Default)]
pub struct ProductOverlayStore {
    products: Vec<Product>,
    overlay: Option<SimulatedOverlay>,
}

impl ProductOverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the product collection wholesale. The overlay is kept.
    pub fn load(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Install an overlay, replacing whichever overlay was active
    pub fn set_overlay(&mut self, overlay: SimulatedOverlay) {
        if let Some(previous) = self.overlay.as_ref().filter(|o| o.id() != overlay.id()) {
            tracing::debug!(
                replaced = %previous.id(),
                product_id = %overlay.id(),
                "Replacing simulated overlay"
            );
        }
        self.overlay = Some(overlay);
    }

    pub fn clear_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.product(id).is_some()
    }

    pub fn overlay(&self) -> Option<&SimulatedOverlay> {
        self.overlay.as_ref()
    }

    pub fn active_overlay_id(&self) -> Option<ProductId> {
        self.overlay.as_ref().map(SimulatedOverlay::id)
    }

    pub fn is_simulated(&self, id: ProductId) -> bool {
        self.active_overlay_id() == Some(id)
    }

    /// An overlay whose product is no longer loaded
    pub fn has_dangling_overlay(&self) -> bool {
        self.active_overlay_id().is_some_and(|id| !self.contains(id))
    }

    /// What the dashboard displays for a product
    pub fn view_for(&self, product: &Product) -> ProductView {
        merge_view(product, self.overlay.as_ref())
    }

    /// Views for every product, in store order
    pub fn views(&self) -> impl Iterator<Item = ProductView> + '_ {
        self.products.iter().map(|p| self.view_for(p))
    }
}
