//! Shared application state for axum handlers.

use std::sync::Arc;

use bank_app::services::{AccountDetailsService, AtmService, SuspiciousCardTransferService};

/// The three bank services served by one router.
///
/// Generic over the store behind each service to avoid dynamic dispatch.
/// `Clone` is implemented manually so the stores themselves do not need to
/// be `Clone`, only the `Arc` wrappers are cloned.
pub struct AppState<AS, TS, MS> {
    /// Account service.
    pub account_details: Arc<AccountDetailsService<AS>>,
    /// Antifraud service.
    pub suspicious_card_transfers: Arc<SuspiciousCardTransferService<TS>>,
    /// Public-info service.
    pub atms: Arc<AtmService<MS>>,
}

impl<AS, TS, MS> Clone for AppState<AS, TS, MS> {
    fn clone(&self) -> Self {
        Self {
            account_details: Arc::clone(&self.account_details),
            suspicious_card_transfers: Arc::clone(&self.suspicious_card_transfers),
            atms: Arc::clone(&self.atms),
        }
    }
}

impl<AS, TS, MS> AppState<AS, TS, MS> {
    /// Create a new application state from service instances.
    pub fn new(
        account_details: AccountDetailsService<AS>,
        suspicious_card_transfers: SuspiciousCardTransferService<TS>,
        atms: AtmService<MS>,
    ) -> Self {
        Self {
            account_details: Arc::new(account_details),
            suspicious_card_transfers: Arc::new(suspicious_card_transfers),
            atms: Arc::new(atms),
        }
    }
}
