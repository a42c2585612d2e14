//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! The three bank services share one generic implementation and differ only in
//! the record kind and mapper they are instantiated with.

pub mod crud_service;

use crate::mapping::{AccountDetailsMapper, AtmMapper, SuspiciousCardTransferMapper};

pub use crud_service::CrudService;

/// Account service: CRUD over account details.
pub type AccountDetailsService<S> = CrudService<S, AccountDetailsMapper>;

/// Antifraud service: CRUD over suspicious card transfers.
pub type SuspiciousCardTransferService<S> = CrudService<S, SuspiciousCardTransferMapper>;

/// Public-info service: CRUD over ATMs.
pub type AtmService<S> = CrudService<S, AtmMapper>;
