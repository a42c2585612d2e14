//! # bank-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Expose read, bulk read, create and update of every bank service as a
//!   JSON API (`/account-details`, `/suspicious-card-transfers`, `/atms`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map [`BankError`](bank_domain::error::BankError) into status codes
//!
//! ## Dependency rule
//! Depends on `bank-app` (for port traits and services) and `bank-domain`
//! (for transfer objects used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
