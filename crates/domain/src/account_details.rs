//! Account details: the record owned by the account service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::id::AccountDetailsId;
use crate::record::Record;

/// A customer's account as persisted by the account service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub id: Option<AccountDetailsId>,
    pub passport_id: i64,
    pub account_number: i64,
    pub bank_details_id: i64,
    pub money: Decimal,
    pub negative_balance: bool,
    pub profile_id: i64,
}

impl Record for AccountDetails {
    type Id = AccountDetailsId;

    const KIND: &'static str = "AccountDetails";

    fn id(&self) -> Option<AccountDetailsId> {
        self.id
    }

    fn with_id(self, id: AccountDetailsId) -> Self {
        Self { id: Some(id), ..self }
    }
}

/// Boundary representation of [`AccountDetails`].
///
/// Every field is optional: `create` requires all of them except `id`, while
/// `update` overwrites only the ones that are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetailsDto {
    pub id: Option<AccountDetailsId>,
    pub passport_id: Option<i64>,
    pub account_number: Option<i64>,
    pub bank_details_id: Option<i64>,
    pub money: Option<Decimal>,
    pub negative_balance: Option<bool>,
    pub profile_id: Option<i64>,
}
