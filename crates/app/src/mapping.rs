//! Record mappers: explicit conversions between transfer objects and records.
//!
//! Mappers are stateless and pure. Each record kind gets one hand-written
//! field-by-field implementation of [`RecordMapper`].

pub mod account_details;
pub mod atm;
pub mod suspicious_card_transfer;

pub use account_details::AccountDetailsMapper;
pub use atm::AtmMapper;
pub use suspicious_card_transfer::SuspiciousCardTransferMapper;

use bank_domain::error::ValidationError;
use bank_domain::record::Record;

/// Converts between a transfer object and the persisted record.
pub trait RecordMapper: Send + Sync {
    type Record: Record;
    type Dto: Send + Sync + 'static;

    /// Build a new, id-less record from a creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when a field required at
    /// creation is absent.
    fn to_entity(&self, dto: &Self::Dto) -> Result<Self::Record, ValidationError>;

    fn to_dto(&self, record: &Self::Record) -> Self::Dto;

    /// One transfer object per record, in input order.
    fn to_list_dto(&self, records: &[Self::Record]) -> Vec<Self::Dto> {
        records.iter().map(|record| self.to_dto(record)).collect()
    }

    /// Overlay the fields present in `dto` onto `existing`.
    ///
    /// Absent fields keep their current value and the identifier always comes
    /// from `existing`. A `None` payload returns `existing` unchanged.
    fn merge_to_entity(&self, dto: Option<&Self::Dto>, existing: Self::Record) -> Self::Record;
}

/// Replace `target` when `value` is present.
fn overwrite<T: Clone>(target: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

/// Replace an optional `target` when `value` is present. `None` never clears it.
fn overwrite_optional<T: Clone>(target: &mut Option<T>, value: Option<&T>) {
    if let Some(value) = value {
        *target = Some(value.clone());
    }
}
