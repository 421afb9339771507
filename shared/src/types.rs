//! Common types used across the dashboard

use serde::{Deserialize, Serialize};

/// Backend identifier of a product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

/// Presentation-neutral color band for risk indicators
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorBand {
    Error,
    Warning,
    Success,
    #[serde(rename = "default")]
    Neutral,
}

impl ColorBand {
    pub fn key(&self) -> &'static str {
        match self {
            ColorBand::Error => "error",
            ColorBand::Warning => "warning",
            ColorBand::Success => "success",
            ColorBand::Neutral => "default",
        }
    }
}

impl std::fmt::Display for ColorBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
