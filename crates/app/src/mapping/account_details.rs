//! Mapper for [`AccountDetails`].

use bank_domain::account_details::{AccountDetails, AccountDetailsDto};
use bank_domain::error::{ValidationError, required};
use bank_domain::record::Record;

use super::{RecordMapper, overwrite};

/// Maps [`AccountDetailsDto`] to and from [`AccountDetails`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountDetailsMapper;

impl RecordMapper for AccountDetailsMapper {
    type Record = AccountDetails;
    type Dto = AccountDetailsDto;

    fn to_entity(&self, dto: &AccountDetailsDto) -> Result<AccountDetails, ValidationError> {
        let kind = AccountDetails::KIND;
        Ok(AccountDetails {
            id: None,
            passport_id: required(dto.passport_id, kind, "passport_id")?,
            account_number: required(dto.account_number, kind, "account_number")?,
            bank_details_id: required(dto.bank_details_id, kind, "bank_details_id")?,
            money: required(dto.money, kind, "money")?,
            negative_balance: required(dto.negative_balance, kind, "negative_balance")?,
            profile_id: required(dto.profile_id, kind, "profile_id")?,
        })
    }

    fn to_dto(&self, record: &AccountDetails) -> AccountDetailsDto {
        AccountDetailsDto {
            id: record.id,
            passport_id: Some(record.passport_id),
            account_number: Some(record.account_number),
            bank_details_id: Some(record.bank_details_id),
            money: Some(record.money),
            negative_balance: Some(record.negative_balance),
            profile_id: Some(record.profile_id),
        }
    }

    fn merge_to_entity(
        &self,
        dto: Option<&AccountDetailsDto>,
        existing: AccountDetails,
    ) -> AccountDetails {
        let Some(dto) = dto else {
            return existing;
        };

        let mut merged = existing;
        overwrite(&mut merged.passport_id, dto.passport_id.as_ref());
        overwrite(&mut merged.account_number, dto.account_number.as_ref());
        overwrite(&mut merged.bank_details_id, dto.bank_details_id.as_ref());
        overwrite(&mut merged.money, dto.money.as_ref());
        overwrite(&mut merged.negative_balance, dto.negative_balance.as_ref());
        overwrite(&mut merged.profile_id, dto.profile_id.as_ref());
        merged
    }
}
