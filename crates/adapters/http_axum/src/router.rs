//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use bank_app::ports::EntityStore;
use bank_domain::account_details::AccountDetails;
use bank_domain::atm::Atm;
use bank_domain::suspicious_card_transfer::SuspiciousCardTransfer;

use crate::api::crud;
use crate::state::AppState;

/// Base path of the account service.
pub const ACCOUNT_DETAILS_PATH: &str = "/account-details";
/// Base path of the antifraud service.
pub const SUSPICIOUS_CARD_TRANSFERS_PATH: &str = "/suspicious-card-transfers";
/// Base path of the public-info service.
pub const ATMS_PATH: &str = "/atms";

/// Build the top-level axum [`Router`].
///
/// Mounts the CRUD routes of each service under its base path.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<AS, TS, MS>(state: AppState<AS, TS, MS>) -> Router
where
    AS: EntityStore<Record = AccountDetails> + 'static,
    TS: EntityStore<Record = SuspiciousCardTransfer> + 'static,
    MS: EntityStore<Record = Atm> + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest(ACCOUNT_DETAILS_PATH, crud::routes(state.account_details))
        .nest(
            SUSPICIOUS_CARD_TRANSFERS_PATH,
            crud::routes(state.suspicious_card_transfers),
        )
        .nest(ATMS_PATH, crud::routes(state.atms))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
