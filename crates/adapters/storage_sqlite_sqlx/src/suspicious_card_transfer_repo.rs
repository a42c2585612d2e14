//! `SQLite` table description for [`SuspiciousCardTransfer`].

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use bank_domain::id::SuspiciousCardTransferId;
use bank_domain::suspicious_card_transfer::SuspiciousCardTransfer;

use crate::store::{SqliteQuery, SqliteStore, Table};

const SELECT_BY_ID: &str = "SELECT * FROM suspicious_card_transfers WHERE id = ?";
const UPSERT: &str = "INSERT INTO suspicious_card_transfers \
    (id, card_transfer_id, is_blocked, is_suspicious, blocked_reason, suspicious_reason) \
    VALUES (?, ?, ?, ?, ?, ?) \
    ON CONFLICT(id) DO UPDATE SET \
    card_transfer_id = excluded.card_transfer_id, \
    is_blocked = excluded.is_blocked, \
    is_suspicious = excluded.is_suspicious, \
    blocked_reason = excluded.blocked_reason, \
    suspicious_reason = excluded.suspicious_reason";

/// The `suspicious_card_transfers` table.
pub struct SuspiciousCardTransferTable;

/// `SQLite`-backed suspicious card transfer repository.
pub type SqliteSuspiciousCardTransferRepository = SqliteStore<SuspiciousCardTransferTable>;

impl Table for SuspiciousCardTransferTable {
    type Record = SuspiciousCardTransfer;

    const NAME: &'static str = "suspicious_card_transfers";
    const SELECT_BY_ID: &'static str = SELECT_BY_ID;
    const UPSERT: &'static str = UPSERT;

    fn bind_upsert<'q>(query: SqliteQuery<'q>, record: &SuspiciousCardTransfer) -> SqliteQuery<'q> {
        query
            .bind(record.id.map(i64::from))
            .bind(record.card_transfer_id)
            .bind(record.is_blocked)
            .bind(record.is_suspicious)
            .bind(record.blocked_reason.clone())
            .bind(record.suspicious_reason.clone())
    }

    fn decode(row: &SqliteRow) -> Result<SuspiciousCardTransfer, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        Ok(SuspiciousCardTransfer {
            id: Some(SuspiciousCardTransferId::new(id)),
            card_transfer_id: row.try_get("card_transfer_id")?,
            is_blocked: row.try_get("is_blocked")?,
            is_suspicious: row.try_get("is_suspicious")?,
            blocked_reason: row.try_get("blocked_reason")?,
            suspicious_reason: row.try_get("suspicious_reason")?,
        })
    }
}
