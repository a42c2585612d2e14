//! # bank-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `EntityStore` port defined in `bank-app::ports::storage`
//!   once, generically, over a [`Table`] description
//! - Describe one table per record kind (account details, suspicious card
//!   transfers, ATMs): SQL, parameter binding, row decoding
//! - Manage `SQLite` connection pool lifecycle and embedded migrations
//!
//! ## Dependency rule
//! Depends on `bank-app` (for port traits) and `bank-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod account_details_repo;
mod atm_repo;
mod error;
mod pool;
mod store;
mod suspicious_card_transfer_repo;

pub use account_details_repo::{AccountDetailsTable, SqliteAccountDetailsRepository};
pub use atm_repo::{AtmTable, SqliteAtmRepository};
pub use error::StorageError;
pub use pool::{Config, Database};
pub use store::{SqliteQuery, SqliteStore, SqliteTransaction, Table};
pub use suspicious_card_transfer_repo::{
    SqliteSuspiciousCardTransferRepository, SuspiciousCardTransferTable,
};
