//! Entry/exit posting logic.

use chrono::{DateTime, Utc};
use thiserror::Error;

use stockroom_catalog::CatalogStore;
use stockroom_core::ProductCode;
use stockroom_infra::{DataPaths, StorageError};

use crate::log::MovementLog;
use crate::movement::{Movement, MovementKind};

/// Posting failure.
///
/// The first three variants are validation failures: the catalog and the
/// log are left exactly as they were. `Storage` means nothing was
/// persisted. `HistoryNotRecorded` is the one partial-success state: the
/// balance was saved but the audit row was not.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("product not found: {code}")]
    ProductNotFound { code: ProductCode },

    #[error("quantity must be positive, got {quantity}")]
    InvalidQuantity { quantity: f64 },

    #[error("insufficient stock for {code}: requested {requested}, available {available}")]
    InsufficientStock {
        code: ProductCode,
        requested: f64,
        available: f64,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("balance updated to {balance_after} but the movement was not recorded: {source}")]
    HistoryNotRecorded {
        balance_after: f64,
        #[source]
        source: StorageError,
    },
}

/// Receipt for an applied posting.
#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    pub code: ProductCode,
    pub kind: MovementKind,
    pub quantity: f64,
    pub balance_after: f64,
    pub timestamp: DateTime<Utc>,
}

/// Orchestrates stock postings.
///
/// Each posting is one blocking load → validate → mutate → save cycle over
/// the catalog, followed by one append to the movement log. The catalog is
/// always written before the log, so a crash between the two writes loses
/// an audit row, never a balance. At most one writer at a time is assumed;
/// there is no cross-process lock.
#[derive(Debug, Clone)]
pub struct LedgerEngine {
    catalog: CatalogStore,
    log: MovementLog,
}

impl LedgerEngine {
    pub fn new(catalog: CatalogStore, log: MovementLog) -> Self {
        Self { catalog, log }
    }

    pub fn open(paths: &DataPaths) -> Self {
        Self::new(CatalogStore::open(paths), MovementLog::open(paths))
    }

    /// Post a stock entry: add `quantity` to the product's balance and
    /// record one `entry` movement. Also refreshes `last_entry_date`.
    pub fn post_entry(
        &self,
        code: &ProductCode,
        quantity: f64,
        reason: Option<&str>,
        actor: Option<&str>,
    ) -> Result<Posting, LedgerError> {
        self.post(code, MovementKind::Entry, quantity, reason, actor)
    }

    /// Post a stock exit: subtract `quantity` from the product's balance
    /// and record one `exit` movement.
    ///
    /// An exit that would drive the balance negative is rejected whole:
    /// no mutation, no log row. Exits below `minimum_stock` are allowed
    /// silently; the threshold is informational.
    pub fn post_exit(
        &self,
        code: &ProductCode,
        quantity: f64,
        reason: Option<&str>,
        actor: Option<&str>,
    ) -> Result<Posting, LedgerError> {
        self.post(code, MovementKind::Exit, quantity, reason, actor)
    }

    fn post(
        &self,
        code: &ProductCode,
        kind: MovementKind,
        quantity: f64,
        reason: Option<&str>,
        actor: Option<&str>,
    ) -> Result<Posting, LedgerError> {
        if quantity.is_nan() || quantity <= 0.0 {
            return Err(LedgerError::InvalidQuantity { quantity });
        }

        let mut products = self.catalog.load()?;
        let product = products
            .iter_mut()
            .find(|p| p.code == *code)
            .ok_or_else(|| LedgerError::ProductNotFound { code: code.clone() })?;

        let balance_after = match kind {
            MovementKind::Entry => product.quantity + quantity,
            MovementKind::Exit => {
                if product.quantity < quantity {
                    return Err(LedgerError::InsufficientStock {
                        code: code.clone(),
                        requested: quantity,
                        available: product.quantity,
                    });
                }
                product.quantity - quantity
            }
        };

        let timestamp = Utc::now();
        product.quantity = balance_after;
        if kind == MovementKind::Entry {
            product.last_entry_date = Some(timestamp.date_naive());
        }

        // Catalog first, log second: on a crash between the two writes the
        // worst case is a missing audit row, never a corrupted balance.
        self.catalog.save(&products)?;

        let movement = Movement {
            timestamp,
            product_code: code.clone(),
            kind,
            quantity,
            balance_after,
            actor: actor.map(str::to_owned),
            reason: reason.map(str::to_owned),
        };
        if let Err(source) = self.log.append(movement) {
            tracing::warn!(
                code = %code,
                %kind,
                balance_after,
                error = %source,
                "balance saved but movement history append failed"
            );
            return Err(LedgerError::HistoryNotRecorded {
                balance_after,
                source,
            });
        }

        tracing::info!(code = %code, %kind, quantity, balance_after, "movement posted");
        Ok(Posting {
            code: code.clone(),
            kind,
            quantity,
            balance_after,
            timestamp,
        })
    }
}
