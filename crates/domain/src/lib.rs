//! # bank-domain
//!
//! Pure domain model shared by the account, antifraud and public-info services.
//!
//! ## Responsibilities
//! - Foundational types: typed numeric identifiers, error conventions
//! - The [`Record`](record::Record) abstraction every persisted entity implements
//! - **Records** (persisted shape) and **transfer objects** (boundary shape,
//!   all fields optional) for each service:
//!   - `AccountDetails`: account service
//!   - `SuspiciousCardTransfer`: antifraud service
//!   - `Atm`: public-info service
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod record;

pub mod account_details;
pub mod atm;
pub mod suspicious_card_transfer;
