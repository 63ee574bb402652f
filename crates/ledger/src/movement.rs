//! Movement history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ProductCode;

/// Direction of a stock posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Entry,
    Exit,
}

impl core::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MovementKind::Entry => f.write_str("entry"),
            MovementKind::Exit => f.write_str("exit"),
        }
    }
}

/// One history row: a single applied posting, immutable once written.
///
/// `product_code` is a historical reference, not a live foreign key — the
/// product may be deleted later and the movement still stands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub product_code: ProductCode,
    pub kind: MovementKind,
    #[serde(default)]
    pub quantity: f64,
    /// Catalog balance immediately after this movement was applied.
    #[serde(default)]
    pub balance_after: f64,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}
