//! `SQLite` table description for [`Atm`].
//!
//! Opening hours are stored as `HH:MM:SS` text.

use chrono::NaiveTime;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use bank_domain::atm::Atm;
use bank_domain::id::AtmId;

use crate::store::{SqliteQuery, SqliteStore, Table};

const TIME_FORMAT: &str = "%H:%M:%S";

const SELECT_BY_ID: &str = "SELECT * FROM atms WHERE id = ?";
const UPSERT: &str = "INSERT INTO atms \
    (id, address, start_of_work, end_of_work, all_hours, branch_id) \
    VALUES (?, ?, ?, ?, ?, ?) \
    ON CONFLICT(id) DO UPDATE SET \
    address = excluded.address, \
    start_of_work = excluded.start_of_work, \
    end_of_work = excluded.end_of_work, \
    all_hours = excluded.all_hours, \
    branch_id = excluded.branch_id";

/// The `atms` table. Opening hours are stored as `HH:MM:SS` text.
pub struct AtmTable;

/// `SQLite`-backed ATM repository.
pub type SqliteAtmRepository = SqliteStore<AtmTable>;

fn encode_time(time: Option<NaiveTime>) -> Option<String> {
    time.map(|t| t.format(TIME_FORMAT).to_string())
}

fn decode_time(row: &SqliteRow, column: &str) -> Result<Option<NaiveTime>, sqlx::Error> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|text| NaiveTime::parse_from_str(&text, TIME_FORMAT))
        .transpose()
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl Table for AtmTable {
    type Record = Atm;

    const NAME: &'static str = "atms";
    const SELECT_BY_ID: &'static str = SELECT_BY_ID;
    const UPSERT: &'static str = UPSERT;

    fn bind_upsert<'q>(query: SqliteQuery<'q>, record: &Atm) -> SqliteQuery<'q> {
        query
            .bind(record.id.map(i64::from))
            .bind(record.address.clone())
            .bind(encode_time(record.start_of_work))
            .bind(encode_time(record.end_of_work))
            .bind(record.all_hours)
            .bind(record.branch_id)
    }

    fn decode(row: &SqliteRow) -> Result<Atm, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        Ok(Atm {
            id: Some(AtmId::new(id)),
            address: row.try_get("address")?,
            start_of_work: decode_time(row, "start_of_work")?,
            end_of_work: decode_time(row, "end_of_work")?,
            all_hours: row.try_get("all_hours")?,
            branch_id: row.try_get("branch_id")?,
        })
    }
}
