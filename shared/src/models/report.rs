//! Reorder report models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Criticality;

/// Backend-computed aggregate of all products needing replenishment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReorderReport {
    pub total_items: u32,
    pub total_cost: Decimal,
    /// Items in server-delivered order
    pub items: Vec<ReorderItem>,
}

/// A single line of the reorder report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReorderItem {
    pub name: String,
    pub current_stock: f64,
    pub days_remaining: f64,
    pub reorder_qty: u32,
    pub cost_per_unit: Decimal,
    pub estimated_cost: Decimal,
    pub criticality: Criticality,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_report_from_numbers() {
        let json = r#"{
            "items": [
                {"name": "Bolts", "current_stock": 40, "days_remaining": 4.0, "reorder_qty": 200,
                 "cost_per_unit": 1.25, "estimated_cost": 250.0, "criticality": "high"},
                {"name": "Nuts", "current_stock": 90, "days_remaining": 9.0, "reorder_qty": 160,
                 "cost_per_unit": 1.25, "estimated_cost": 200.5, "criticality": "low"}
            ],
            "total_cost": 450.5,
            "total_items": 2
        }"#;

        let report: ReorderReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.total_items, 2);
        assert_eq!(report.total_cost, Decimal::from_str("450.5").unwrap());
        assert_eq!(report.items[0].name, "Bolts");
        assert_eq!(report.items[1].criticality, Criticality::Low);
    }
}
