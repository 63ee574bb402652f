//! Product record and unit-of-measure vocabulary.

use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::ProductCode;

/// Closed set of accepted units of measure.
///
/// Persisted in lowercase wire form; parsing is case-insensitive. `l` is
/// accepted as a legacy spelling of `lt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfMeasure {
    #[default]
    #[serde(rename = "un")]
    Unit,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "lt", alias = "l")]
    Liter,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cx")]
    Box,
    #[serde(rename = "pc")]
    Piece,
    #[serde(rename = "dz")]
    Dozen,
    #[serde(rename = "ton")]
    Ton,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 12] = [
        UnitOfMeasure::Unit,
        UnitOfMeasure::Kilogram,
        UnitOfMeasure::Gram,
        UnitOfMeasure::Liter,
        UnitOfMeasure::Milliliter,
        UnitOfMeasure::Meter,
        UnitOfMeasure::Centimeter,
        UnitOfMeasure::Millimeter,
        UnitOfMeasure::Box,
        UnitOfMeasure::Piece,
        UnitOfMeasure::Dozen,
        UnitOfMeasure::Ton,
    ];

    /// Lowercase wire form, as persisted in the catalog table.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitOfMeasure::Unit => "un",
            UnitOfMeasure::Kilogram => "kg",
            UnitOfMeasure::Gram => "g",
            UnitOfMeasure::Liter => "lt",
            UnitOfMeasure::Milliliter => "ml",
            UnitOfMeasure::Meter => "m",
            UnitOfMeasure::Centimeter => "cm",
            UnitOfMeasure::Millimeter => "mm",
            UnitOfMeasure::Box => "cx",
            UnitOfMeasure::Piece => "pc",
            UnitOfMeasure::Dozen => "dz",
            UnitOfMeasure::Ton => "ton",
        }
    }
}

impl core::fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit string outside the accepted vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit of measure: {0} (expected one of un, kg, g, lt, ml, m, cm, mm, cx, pc, dz, ton)")]
pub struct UnknownUnit(pub String);

impl FromStr for UnitOfMeasure {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "un" => Ok(UnitOfMeasure::Unit),
            "kg" => Ok(UnitOfMeasure::Kilogram),
            "g" => Ok(UnitOfMeasure::Gram),
            "lt" | "l" => Ok(UnitOfMeasure::Liter),
            "ml" => Ok(UnitOfMeasure::Milliliter),
            "m" => Ok(UnitOfMeasure::Meter),
            "cm" => Ok(UnitOfMeasure::Centimeter),
            "mm" => Ok(UnitOfMeasure::Millimeter),
            "cx" => Ok(UnitOfMeasure::Box),
            "pc" => Ok(UnitOfMeasure::Piece),
            "dz" => Ok(UnitOfMeasure::Dozen),
            "ton" => Ok(UnitOfMeasure::Ton),
            other => Err(UnknownUnit(other.to_owned())),
        }
    }
}

/// One catalog row.
///
/// # Invariants
/// - `code` is unique within the catalog and immutable once registered.
/// - `quantity >= 0` always; only the ledger engine may change it.
/// - `minimum_stock` is an informational threshold, never enforced as a
///   hard floor on exits.
///
/// Every field carries a serde default so rows from older or hand-edited
/// files load with backfilled values instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub code: ProductCode,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: UnitOfMeasure,
    #[serde(default)]
    pub storage_location: String,
    #[serde(default)]
    pub minimum_stock: f64,
    #[serde(default)]
    pub supplier: Option<String>,
    /// Set at registration and refreshed on every entry posting.
    #[serde(default)]
    pub last_entry_date: Option<NaiveDate>,
}

impl Product {
    /// Informational only: callers may warn, the ledger never blocks on it.
    pub fn below_minimum(&self) -> bool {
        self.quantity < self.minimum_stock
    }
}
