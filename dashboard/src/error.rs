//! Error handling for the Inventory Monitoring Dashboard
//!
//! Every failure is recoverable: errors are turned into a user-facing
//! [`Notice`] and the dashboard stays interactive.

use shared::{ProductId, RecordError};
use thiserror::Error;

/// Dashboard error types
#[derive(Error, Debug)]
pub enum DashboardError {
    // Inventory service errors
    #[error("Inventory service request failed: {0}")]
    Transport(String),

    #[error("Inventory service returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),

    // Simulation contract errors
    #[error("Simulation for product {requested} answered for product {received}")]
    SimulationMismatch {
        requested: ProductId,
        received: ProductId,
    },

    #[error("Product {0} is not on the dashboard")]
    UnknownProduct(ProductId),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

/// User-facing description of a failed action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub code: String,
    pub message: String,
}

impl DashboardError {
    /// Stable code identifying the kind of failure
    pub fn code(&self) -> &'static str {
        match self {
            DashboardError::Transport(_) => "TRANSPORT_ERROR",
            DashboardError::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            DashboardError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            DashboardError::InvalidRecord(_) => "INVALID_RECORD",
            DashboardError::SimulationMismatch { .. } => "SIMULATION_MISMATCH",
            DashboardError::UnknownProduct(_) => "UNKNOWN_PRODUCT",
            DashboardError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Convert into the notice shown to the operator
    pub fn into_notice(self) -> Notice {
        let message = match &self {
            DashboardError::Transport(_) => {
                "The inventory service could not be reached. Please try again.".to_string()
            }
            DashboardError::UnexpectedStatus { status, .. } => {
                format!("The inventory service answered with status {}.", status)
            }
            DashboardError::MalformedResponse(_) | DashboardError::InvalidRecord(_) => {
                "The inventory service sent data the dashboard cannot display.".to_string()
            }
            DashboardError::SimulationMismatch { requested, .. } => format!(
                "The spike simulation for product {} returned another product.",
                requested
            ),
            DashboardError::UnknownProduct(id) => {
                format!("Product {} is not on the dashboard.", id)
            }
            DashboardError::Configuration(e) => format!("Configuration error: {}", e),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        Notice {
            code: self.code().to_string(),
            message,
        }
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
