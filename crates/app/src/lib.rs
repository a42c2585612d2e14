//! # bank-app
//!
//! Application layer: the generic CRUD service contract and the **port
//! definitions** (traits) it relies on.
//!
//! ## Responsibilities
//! - Define the driven port adapters must implement:
//!   - `EntityStore`: point lookup, bulk lookup, upsert, transactions
//! - Provide the pure collaborators of the contract:
//!   - `RecordMapper` and one mapper per record kind
//!   - the bulk-result validator
//! - Provide the driving side: `CrudService`, instantiated once per service
//!   (account, antifraud, public-info)
//!
//! ## Dependency rule
//! Depends on `bank-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod mapping;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod test_support;
