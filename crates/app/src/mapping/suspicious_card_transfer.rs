//! Mapper for [`SuspiciousCardTransfer`].

use bank_domain::error::{ValidationError, required};
use bank_domain::record::Record;
use bank_domain::suspicious_card_transfer::{SuspiciousCardTransfer, SuspiciousCardTransferDto};

use super::{RecordMapper, overwrite, overwrite_optional};

/// Maps [`SuspiciousCardTransferDto`] to and from [`SuspiciousCardTransfer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SuspiciousCardTransferMapper;

impl RecordMapper for SuspiciousCardTransferMapper {
    type Record = SuspiciousCardTransfer;
    type Dto = SuspiciousCardTransferDto;

    fn to_entity(
        &self,
        dto: &SuspiciousCardTransferDto,
    ) -> Result<SuspiciousCardTransfer, ValidationError> {
        let kind = SuspiciousCardTransfer::KIND;
        Ok(SuspiciousCardTransfer {
            id: None,
            card_transfer_id: required(dto.card_transfer_id, kind, "card_transfer_id")?,
            is_blocked: required(dto.is_blocked, kind, "is_blocked")?,
            is_suspicious: required(dto.is_suspicious, kind, "is_suspicious")?,
            blocked_reason: dto.blocked_reason.clone(),
            suspicious_reason: required(dto.suspicious_reason.clone(), kind, "suspicious_reason")?,
        })
    }

    fn to_dto(&self, record: &SuspiciousCardTransfer) -> SuspiciousCardTransferDto {
        SuspiciousCardTransferDto {
            id: record.id,
            card_transfer_id: Some(record.card_transfer_id),
            is_blocked: Some(record.is_blocked),
            is_suspicious: Some(record.is_suspicious),
            blocked_reason: record.blocked_reason.clone(),
            suspicious_reason: Some(record.suspicious_reason.clone()),
        }
    }

    fn merge_to_entity(
        &self,
        dto: Option<&SuspiciousCardTransferDto>,
        existing: SuspiciousCardTransfer,
    ) -> SuspiciousCardTransfer {
        let Some(dto) = dto else {
            return existing;
        };

        let mut merged = existing;
        overwrite(&mut merged.card_transfer_id, dto.card_transfer_id.as_ref());
        overwrite(&mut merged.is_blocked, dto.is_blocked.as_ref());
        overwrite(&mut merged.is_suspicious, dto.is_suspicious.as_ref());
        overwrite_optional(&mut merged.blocked_reason, dto.blocked_reason.as_ref());
        overwrite(&mut merged.suspicious_reason, dto.suspicious_reason.as_ref());
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_domain::id::SuspiciousCardTransferId;

    fn existing() -> SuspiciousCardTransfer {
        SuspiciousCardTransfer {
            id: Some(SuspiciousCardTransferId::new(3)),
            card_transfer_id: 100,
            is_blocked: true,
            is_suspicious: true,
            blocked_reason: Some("velocity limit".to_string()),
            suspicious_reason: "foreign merchant".to_string(),
        }
    }

    #[test]
    fn should_allow_missing_blocked_reason_at_creation() {
        let dto = SuspiciousCardTransferDto {
            card_transfer_id: Some(100),
            is_blocked: Some(false),
            is_suspicious: Some(true),
            suspicious_reason: Some("foreign merchant".to_string()),
            ..SuspiciousCardTransferDto::default()
        };

        let entity = SuspiciousCardTransferMapper.to_entity(&dto).unwrap();
        assert!(entity.id.is_none());
        assert!(entity.blocked_reason.is_none());
        assert_eq!(entity.suspicious_reason, "foreign merchant");
    }

    #[test]
    fn should_reject_creation_without_suspicious_reason() {
        let dto = SuspiciousCardTransferDto {
            card_transfer_id: Some(100),
            is_blocked: Some(false),
            is_suspicious: Some(true),
            ..SuspiciousCardTransferDto::default()
        };

        let result = SuspiciousCardTransferMapper.to_entity(&dto);
        assert!(matches!(
            result,
            Err(ValidationError::MissingField {
                field: "suspicious_reason",
                ..
            })
        ));
    }

    #[test]
    fn should_not_clear_blocked_reason_when_absent_from_update() {
        let dto = SuspiciousCardTransferDto {
            is_blocked: Some(false),
            ..SuspiciousCardTransferDto::default()
        };

        let merged = SuspiciousCardTransferMapper.merge_to_entity(Some(&dto), existing());
        assert!(!merged.is_blocked);
        assert_eq!(merged.blocked_reason.as_deref(), Some("velocity limit"));
        assert_eq!(merged.id, Some(SuspiciousCardTransferId::new(3)));
    }

    #[test]
    fn should_replace_reasons_when_present() {
        let dto = SuspiciousCardTransferDto {
            blocked_reason: Some("manual review".to_string()),
            suspicious_reason: Some("card testing".to_string()),
            ..SuspiciousCardTransferDto::default()
        };

        let merged = SuspiciousCardTransferMapper.merge_to_entity(Some(&dto), existing());
        assert_eq!(merged.blocked_reason.as_deref(), Some("manual review"));
        assert_eq!(merged.suspicious_reason, "card testing");
        assert_eq!(merged.card_transfer_id, 100);
    }
}
