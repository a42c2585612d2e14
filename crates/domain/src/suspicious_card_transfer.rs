//! Suspicious card transfer: the record owned by the antifraud service.

use serde::{Deserialize, Serialize};

use crate::id::SuspiciousCardTransferId;
use crate::record::Record;

/// A card transfer flagged by the antifraud checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspiciousCardTransfer {
    pub id: Option<SuspiciousCardTransferId>,
    pub card_transfer_id: i64,
    pub is_blocked: bool,
    pub is_suspicious: bool,
    pub blocked_reason: Option<String>,
    pub suspicious_reason: String,
}

impl Record for SuspiciousCardTransfer {
    type Id = SuspiciousCardTransferId;

    const KIND: &'static str = "SuspiciousCardTransfer";

    fn id(&self) -> Option<SuspiciousCardTransferId> {
        self.id
    }

    fn with_id(self, id: SuspiciousCardTransferId) -> Self {
        Self { id: Some(id), ..self }
    }
}

/// Boundary representation of [`SuspiciousCardTransfer`].
///
/// `card_transfer_id`, `is_blocked`, `is_suspicious` and `suspicious_reason`
/// must be present at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspiciousCardTransferDto {
    pub id: Option<SuspiciousCardTransferId>,
    pub card_transfer_id: Option<i64>,
    pub is_blocked: Option<bool>,
    pub is_suspicious: Option<bool>,
    pub blocked_reason: Option<String>,
    pub suspicious_reason: Option<String>,
}
