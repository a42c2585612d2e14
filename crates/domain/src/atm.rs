//! ATM: a record published by the public-info service.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::id::AtmId;
use crate::record::Record;

/// A cash machine and its opening hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atm {
    pub id: Option<AtmId>,
    pub address: String,
    pub start_of_work: Option<NaiveTime>,
    pub end_of_work: Option<NaiveTime>,
    pub all_hours: bool,
    /// Bank branch hosting the machine, if any.
    pub branch_id: Option<i64>,
}

impl Record for Atm {
    type Id = AtmId;

    const KIND: &'static str = "Atm";

    fn id(&self) -> Option<AtmId> {
        self.id
    }

    fn with_id(self, id: AtmId) -> Self {
        Self { id: Some(id), ..self }
    }
}

/// Boundary representation of [`Atm`]. `address` and `all_hours` are
/// required at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmDto {
    pub id: Option<AtmId>,
    pub address: Option<String>,
    pub start_of_work: Option<NaiveTime>,
    pub end_of_work: Option<NaiveTime>,
    pub all_hours: Option<bool>,
    pub branch_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_opening_hours_from_json() {
        let dto: AtmDto = serde_json::from_str(
            r#"{"address": "Main st. 1", "startOfWork": "09:00:00", "endOfWork": "18:30:00", "allHours": false}"#,
        )
        .unwrap();
        assert_eq!(dto.start_of_work, NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(dto.end_of_work, NaiveTime::from_hms_opt(18, 30, 0));
        assert_eq!(dto.all_hours, Some(false));
        assert!(dto.branch_id.is_none());
    }
}
