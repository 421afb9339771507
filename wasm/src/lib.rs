//! WebAssembly module for the Inventory Monitoring Dashboard
//!
//! Provides client-side computation for a browser front-end:
//! - Risk color bands and stockout progress
//! - Merging a product with the active spike simulation
//! - Validation of records received from the inventory service

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::indicators::*;
pub use shared::models::*;
pub use shared::types::*;

fn invalid(what: &str, e: impl std::fmt::Display) -> JsValue {
    let message = format!("Invalid {} JSON: {}", what, e);
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Color band key (`error`, `warning`, `success`, `default`) for a criticality label
#[wasm_bindgen]
pub fn criticality_band(criticality: &str) -> String {
    criticality_color(&Criticality::from(criticality))
        .key()
        .to_string()
}

/// Color band key for days remaining against a lead time
#[wasm_bindgen]
pub fn days_remaining_band(days_remaining: f64, lead_time: u32) -> String {
    days_remaining_color(days_remaining, lead_time).key().to_string()
}

/// Stockout progress in percent, capped at 100
#[wasm_bindgen]
pub fn stockout_progress(days_remaining: f64, lead_time: u32) -> f64 {
    stockout_progress_fraction(days_remaining, lead_time)
}

/// A merged row with its indicators, as handed to JavaScript
#[derive(Serialize)]
struct RowPayload {
    #[serde(flatten)]
    view: ProductView,
    indicators: RiskIndicators,
}

/// Merge a product with the active overlay (or `null`) and derive its indicators
#[wasm_bindgen]
pub fn merge_product_row(product_json: &str, overlay_json: &str) -> Result<String, JsValue> {
    let product: Product =
        serde_json::from_str(product_json).map_err(|e| invalid("product", e))?;
    let overlay: Option<SimulatedOverlay> =
        serde_json::from_str(overlay_json).map_err(|e| invalid("overlay", e))?;

    let view = merge_view(&product, overlay.as_ref());
    let payload = RowPayload {
        indicators: RiskIndicators::for_display(&view.display),
        view,
    };

    serde_json::to_string(&payload).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check a product record against the data contract
#[wasm_bindgen]
pub fn validate_product_record(product_json: &str) -> Result<bool, JsValue> {
    let product: Product =
        serde_json::from_str(product_json).map_err(|e| invalid("product", e))?;
    Ok(shared::validate_product(&product).is_ok())
}
