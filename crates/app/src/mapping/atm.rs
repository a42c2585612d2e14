//! Mapper for [`Atm`].

use bank_domain::atm::{Atm, AtmDto};
use bank_domain::error::{ValidationError, required};
use bank_domain::record::Record;

use super::{RecordMapper, overwrite, overwrite_optional};

/// Maps [`AtmDto`] to and from [`Atm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AtmMapper;

impl RecordMapper for AtmMapper {
    type Record = Atm;
    type Dto = AtmDto;

    fn to_entity(&self, dto: &AtmDto) -> Result<Atm, ValidationError> {
        Ok(Atm {
            id: None,
            address: required(dto.address.clone(), Atm::KIND, "address")?,
            start_of_work: dto.start_of_work,
            end_of_work: dto.end_of_work,
            all_hours: required(dto.all_hours, Atm::KIND, "all_hours")?,
            branch_id: dto.branch_id,
        })
    }

    fn to_dto(&self, record: &Atm) -> AtmDto {
        AtmDto {
            id: record.id,
            address: Some(record.address.clone()),
            start_of_work: record.start_of_work,
            end_of_work: record.end_of_work,
            all_hours: Some(record.all_hours),
            branch_id: record.branch_id,
        }
    }

    fn merge_to_entity(&self, dto: Option<&AtmDto>, existing: Atm) -> Atm {
        let Some(dto) = dto else {
            return existing;
        };

        let mut merged = existing;
        overwrite(&mut merged.address, dto.address.as_ref());
        overwrite_optional(&mut merged.start_of_work, dto.start_of_work.as_ref());
        overwrite_optional(&mut merged.end_of_work, dto.end_of_work.as_ref());
        overwrite(&mut merged.all_hours, dto.all_hours.as_ref());
        overwrite_optional(&mut merged.branch_id, dto.branch_id.as_ref());
        merged
    }
}
