//! Validation of records received from the inventory service
//!
//! The dashboard never recomputes forecasts, but it refuses records that break
//! the data contract (negative or non-numeric quantities) rather than render
//! them.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Product, ReorderReport};
use crate::types::ProductId;

/// A record that violates the inventory data contract
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("product {id}: {field} must be a non-negative number, got {value}")]
    NegativeProductField {
        id: ProductId,
        field: &'static str,
        value: f64,
    },

    #[error("report item '{name}': {field} must be non-negative")]
    NegativeReportField { name: String, field: &'static str },

    #[error("report total_cost must be non-negative, got {0}")]
    NegativeTotalCost(Decimal),
}

fn non_negative(value: f64) -> bool {
    // NaN fails this comparison too
    value >= 0.0
}

/// Validate the numeric fields of a product or overlay record
pub fn validate_product(product: &Product) -> Result<(), RecordError> {
    let fields = [
        ("current_stock", product.current_stock),
        ("average_daily_sales", product.average_daily_sales),
        ("days_remaining", product.days_remaining),
    ];

    for (field, value) in fields {
        if !non_negative(value) {
            return Err(RecordError::NegativeProductField {
                id: product.id,
                field,
                value,
            });
        }
    }
    Ok(())
}

/// Validate every product of a collection
pub fn validate_products(products: &[Product]) -> Result<(), RecordError> {
    products.iter().try_for_each(validate_product)
}

/// Validate the amounts of a reorder report
pub fn validate_report(report: &ReorderReport) -> Result<(), RecordError> {
    if report.total_cost < Decimal::ZERO {
        return Err(RecordError::NegativeTotalCost(report.total_cost));
    }

    for item in &report.items {
        let negative = if !non_negative(item.current_stock) {
            Some("current_stock")
        } else if !non_negative(item.days_remaining) {
            Some("days_remaining")
        } else if item.cost_per_unit < Decimal::ZERO {
            Some("cost_per_unit")
        } else if item.estimated_cost < Decimal::ZERO {
            Some("estimated_cost")
        } else {
            None
        };

        if let Some(field) = negative {
            return Err(RecordError::NegativeReportField {
                name: item.name.clone(),
                field,
            });
        }
    }
    Ok(())
}
