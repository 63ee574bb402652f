//! Durable storage of the full product set.

use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use stockroom_core::{InvalidCode, ProductCode};
use stockroom_infra::{DataPaths, StorageError, load_table, save_table};

use crate::product::{Product, UnitOfMeasure, UnknownUnit};

/// Catalog operation error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product code already registered: {code}")]
    CodeTaken { code: ProductCode },

    #[error("initial quantity cannot be negative: {quantity}")]
    NegativeQuantity { quantity: f64 },

    #[error(transparent)]
    InvalidCode(#[from] InvalidCode),

    #[error(transparent)]
    UnknownUnit(#[from] UnknownUnit),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Registration input, validated at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub code: ProductCode,
    pub name: String,
    pub quantity: f64,
    pub unit: UnitOfMeasure,
    pub storage_location: String,
    pub minimum_stock: f64,
    pub supplier: Option<String>,
}

impl NewProduct {
    /// Build a registration from boundary strings, normalizing the code and
    /// unit on the way in.
    pub fn new(
        code: impl ToString,
        name: impl Into<String>,
        quantity: f64,
        unit: &str,
        storage_location: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        if quantity < 0.0 {
            return Err(CatalogError::NegativeQuantity { quantity });
        }
        Ok(Self {
            code: ProductCode::parse(code)?,
            name: name.into(),
            quantity,
            unit: unit.parse()?,
            storage_location: storage_location.into(),
            minimum_stock: 0.0,
            supplier: None,
        })
    }

    pub fn with_minimum_stock(mut self, minimum_stock: f64) -> Self {
        self.minimum_stock = minimum_stock;
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }
}

/// File-backed product catalog.
///
/// The whole table is loaded and rewritten on every operation; there are no
/// partial reads or writes.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open(paths: &DataPaths) -> Self {
        Self::new(paths.catalog())
    }

    /// Load the current catalog. A store that was never saved is empty.
    pub fn load(&self) -> Result<Vec<Product>, StorageError> {
        load_table(&self.path)
    }

    /// Replace the persisted catalog wholesale.
    pub fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        save_table(&self.path, products)
    }

    /// Register a new product, rejecting codes already in the catalog.
    pub fn register(&self, new: NewProduct) -> Result<Product, CatalogError> {
        let mut products = self.load()?;
        if products.iter().any(|p| p.code == new.code) {
            return Err(CatalogError::CodeTaken { code: new.code });
        }

        let product = Product {
            code: new.code,
            name: new.name,
            quantity: new.quantity,
            unit: new.unit,
            storage_location: new.storage_location,
            minimum_stock: new.minimum_stock,
            supplier: new.supplier,
            last_entry_date: Some(Utc::now().date_naive()),
        };
        products.push(product.clone());
        self.save(&products)?;

        tracing::info!(code = %product.code, name = %product.name, "product registered");
        Ok(product)
    }

    /// Look up a product by its canonical code.
    pub fn find(&self, code: &ProductCode) -> Result<Option<Product>, StorageError> {
        Ok(self.load()?.into_iter().find(|p| p.code == *code))
    }

    /// The full catalog, in stored order.
    pub fn list(&self) -> Result<Vec<Product>, StorageError> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, CatalogStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(&DataPaths::new(dir.path()));
        (dir, store)
    }

    fn bolts() -> NewProduct {
        NewProduct::new("A1", "Bolts M8", 10.0, "un", "Shelf A-01").unwrap()
    }

    #[test]
    fn unsaved_catalog_loads_empty() {
        let (_dir, store) = store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn register_then_find_round_trips() {
        let (_dir, store) = store();
        let registered = store.register(bolts()).unwrap();
        assert_eq!(registered.quantity, 10.0);
        assert!(registered.last_entry_date.is_some());

        let found = store
            .find(&ProductCode::parse("A1").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(found, registered);
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let (_dir, store) = store();
        store.register(bolts()).unwrap();

        let err = store.register(bolts()).unwrap_err();
        assert!(matches!(err, CatalogError::CodeTaken { code } if code.as_str() == "A1"));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn numeric_codes_match_their_text_form() {
        let (_dir, store) = store();
        store
            .register(NewProduct::new(1001, "Washers", 0.0, "pc", "Bin 3").unwrap())
            .unwrap();

        let found = store.find(&ProductCode::parse("1001").unwrap()).unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn registration_validates_unit_and_quantity() {
        assert!(matches!(
            NewProduct::new("A1", "Bolts", 1.0, "furlong", "A-01"),
            Err(CatalogError::UnknownUnit(_))
        ));
        assert!(matches!(
            NewProduct::new("A1", "Bolts", -1.0, "un", "A-01"),
            Err(CatalogError::NegativeQuantity { .. })
        ));
    }

    #[test]
    fn legacy_files_load_with_backfilled_columns() {
        let (_dir, store) = store();
        let mut products = store.load().unwrap();
        assert!(products.is_empty());

        // Hand-edited file from before supplier/minimum_stock existed.
        std::fs::write(
            _dir.path().join("catalog.csv"),
            "code,name,quantity,unit\nA1,Bolts M8,4,un\n",
        )
        .unwrap();

        products = store.load().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 4.0);
        assert_eq!(products[0].minimum_stock, 0.0);
        assert_eq!(products[0].supplier, None);
        assert_eq!(products[0].last_entry_date, None);
        assert_eq!(products[0].storage_location, "");
    }

    #[test]
    fn save_load_round_trip_preserves_rows() {
        let (_dir, store) = store();
        store.register(bolts()).unwrap();
        store
            .register(
                NewProduct::new("B2", "Grease", 2.5, "KG", "Shelf B-02")
                    .unwrap()
                    .with_minimum_stock(1.0)
                    .with_supplier("Acme"),
            )
            .unwrap();

        let products = store.load().unwrap();
        store.save(&products).unwrap();
        assert_eq!(store.load().unwrap(), products);
        assert_eq!(products[1].unit, UnitOfMeasure::Kilogram);
        assert_eq!(products[1].supplier.as_deref(), Some("Acme"));
    }
}
