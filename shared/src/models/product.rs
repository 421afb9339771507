//! Product stock records

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// An authoritative stock record as delivered by the inventory service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub current_stock: f64,
    pub average_daily_sales: f64,
    /// Forecast days until stockout, computed by the backend
    pub days_remaining: f64,
    pub criticality: Criticality,
    /// Supplier replenishment delay in days
    pub lead_time: u32,
    pub needs_reorder: bool,
    pub reorder_qty: u32,
}

/// Server-assigned priority of a product
///
/// Unknown labels are kept verbatim so they can still be displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Criticality {
    High,
    Medium,
    Low,
    Other(String),
}

impl Criticality {
    pub fn label(&self) -> &str {
        match self {
            Criticality::High => "high",
            Criticality::Medium => "medium",
            Criticality::Low => "low",
            Criticality::Other(label) => label,
        }
    }
}

impl From<String> for Criticality {
    fn from(label: String) -> Self {
        match label.as_str() {
            "high" => Criticality::High,
            "medium" => Criticality::Medium,
            "low" => Criticality::Low,
            _ => Criticality::Other(label),
        }
    }
}

impl From<&str> for Criticality {
    fn from(label: &str) -> Self {
        Criticality::from(label.to_string())
    }
}

impl From<Criticality> for String {
    fn from(criticality: Criticality) -> Self {
        match criticality {
            Criticality::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl std::fmt::Display for Criticality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A simulated replacement for one product's record
///
/// Same shape as [`Product`]; its `id` names the product it overlays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SimulatedOverlay {
    record: Product,
}

impl SimulatedOverlay {
    pub fn id(&self) -> ProductId {
        self.record.id
    }

    pub fn record(&self) -> &Product {
        &self.record
    }
}

impl From<Product> for SimulatedOverlay {
    fn from(record: Product) -> Self {
        Self { record }
    }
}
