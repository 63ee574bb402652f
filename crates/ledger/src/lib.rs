//! `stockroom-ledger` — stock postings and the movement history they leave.
//!
//! The ledger engine is the only code path allowed to change a product's
//! balance, and the only source of movement records. Everything else reads.

pub mod engine;
pub mod log;
pub mod movement;

pub use engine::{LedgerEngine, LedgerError, Posting};
pub use log::MovementLog;
pub use movement::{Movement, MovementKind};
