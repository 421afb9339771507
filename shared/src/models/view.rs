//! Merged display view of a product

use serde::{Deserialize, Serialize};

use super::{Product, SimulatedOverlay};

/// What a dashboard row displays for one product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductView {
    pub display: Product,
    pub is_simulated: bool,
}

/// Merge a base product with the active overlay, if it targets this product.
///
/// Only the forecast fields (`current_stock`, `average_daily_sales`,
/// `days_remaining`, `needs_reorder`, `reorder_qty`) are taken from the
/// overlay. Identity and classification (`id`, `name`, `criticality`,
/// `lead_time`) always come from the base record, even though the overlay
/// carries its own copies.
pub fn merge_view(product: &Product, overlay: Option<&SimulatedOverlay>) -> ProductView {
    let Some(simulated) = overlay
        .filter(|o| o.id() == product.id)
        .map(SimulatedOverlay::record)
    else {
        return ProductView {
            display: product.clone(),
            is_simulated: false,
        };
    };

    ProductView {
        display: Product {
            id: product.id,
            name: product.name.clone(),
            current_stock: simulated.current_stock,
            average_daily_sales: simulated.average_daily_sales,
            days_remaining: simulated.days_remaining,
            criticality: product.criticality.clone(),
            lead_time: product.lead_time,
            needs_reorder: simulated.needs_reorder,
            reorder_qty: simulated.reorder_qty,
        },
        is_simulated: true,
    }
}
