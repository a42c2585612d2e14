//! `SQLite` table description for [`AccountDetails`].

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use bank_domain::account_details::AccountDetails;
use bank_domain::id::AccountDetailsId;

use crate::store::{SqliteQuery, SqliteStore, Table};

const SELECT_BY_ID: &str = "SELECT * FROM account_details WHERE id = ?";
const UPSERT: &str = "INSERT INTO account_details \
    (id, passport_id, account_number, bank_details_id, money, negative_balance, profile_id) \
    VALUES (?, ?, ?, ?, ?, ?, ?) \
    ON CONFLICT(id) DO UPDATE SET \
    passport_id = excluded.passport_id, \
    account_number = excluded.account_number, \
    bank_details_id = excluded.bank_details_id, \
    money = excluded.money, \
    negative_balance = excluded.negative_balance, \
    profile_id = excluded.profile_id";

/// The `account_details` table. Money is stored as decimal text.
pub struct AccountDetailsTable;

/// `SQLite`-backed account details repository.
pub type SqliteAccountDetailsRepository = SqliteStore<AccountDetailsTable>;

impl Table for AccountDetailsTable {
    type Record = AccountDetails;

    const NAME: &'static str = "account_details";
    const SELECT_BY_ID: &'static str = SELECT_BY_ID;
    const UPSERT: &'static str = UPSERT;

    fn bind_upsert<'q>(query: SqliteQuery<'q>, record: &AccountDetails) -> SqliteQuery<'q> {
        query
            .bind(record.id.map(i64::from))
            .bind(record.passport_id)
            .bind(record.account_number)
            .bind(record.bank_details_id)
            .bind(record.money.to_string())
            .bind(record.negative_balance)
            .bind(record.profile_id)
    }

    fn decode(row: &SqliteRow) -> Result<AccountDetails, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let money: String = row.try_get("money")?;
        let money = Decimal::from_str(&money).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(AccountDetails {
            id: Some(AccountDetailsId::new(id)),
            passport_id: row.try_get("passport_id")?,
            account_number: row.try_get("account_number")?,
            bank_details_id: row.try_get("bank_details_id")?,
            money,
            negative_balance: row.try_get("negative_balance")?,
            profile_id: row.try_get("profile_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use bank_app::ports::{EntityStore, StoreTransaction};
    use bank_domain::error::BankError;

    async fn setup() -> SqliteAccountDetailsRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteAccountDetailsRepository::new(db.pool().clone())
    }

    fn new_account(account_number: i64) -> AccountDetails {
        AccountDetails {
            id: None,
            passport_id: 1,
            account_number,
            bank_details_id: 1,
            money: Decimal::new(30_050, 2),
            negative_balance: true,
            profile_id: 1,
        }
    }

    #[tokio::test]
    async fn should_assign_id_and_retrieve_when_saving_new_record() {
        let repo = setup().await;

        let saved = repo.save(new_account(1)).await.unwrap();
        let id = saved.id.unwrap();

        let fetched = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, saved);
        assert_eq!(fetched.money, Decimal::new(30_050, 2));
    }

    #[tokio::test]
    async fn should_return_none_when_record_not_found() {
        let repo = setup().await;
        let result = repo.find_by_id(AccountDetailsId::new(404)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_replace_record_when_saving_existing_id() {
        let repo = setup().await;
        let saved = repo.save(new_account(1)).await.unwrap();

        let changed = AccountDetails {
            money: Decimal::from(-5),
            ..saved.clone()
        };
        repo.save(changed.clone()).await.unwrap();

        let fetched = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(fetched, changed);
    }

    #[tokio::test]
    async fn should_find_only_existing_records_ordered_by_id() {
        let repo = setup().await;
        let first = repo.save(new_account(1)).await.unwrap();
        let second = repo.save(new_account(2)).await.unwrap();

        let found = repo
            .find_all_by_id(&[
                second.id.unwrap(),
                AccountDetailsId::new(404),
                first.id.unwrap(),
            ])
            .await
            .unwrap();
        assert_eq!(found, vec![first, second]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_ids_given() {
        let repo = setup().await;
        repo.save(new_account(1)).await.unwrap();
        assert!(repo.find_all_by_id(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_surface_constraint_violation_as_storage_error() {
        let repo = setup().await;
        repo.save(new_account(1)).await.unwrap();

        let result = repo.save(new_account(1)).await;
        assert!(matches!(result, Err(BankError::Storage(_))));
    }

    #[tokio::test]
    async fn should_persist_writes_when_transaction_committed() {
        let repo = setup().await;

        let mut tx = repo.begin().await.unwrap();
        let saved = tx.save(new_account(1)).await.unwrap();
        let seen = tx.find_by_id(saved.id.unwrap()).await.unwrap();
        assert_eq!(seen.as_ref(), Some(&saved));
        tx.commit().await.unwrap();

        let fetched = repo.find_by_id(saved.id.unwrap()).await.unwrap();
        assert_eq!(fetched, Some(saved));
    }

    async fn raise_balance(
        repo: &SqliteAccountDetailsRepository,
        id: AccountDetailsId,
    ) -> Result<(), BankError> {
        let mut tx = repo.begin().await?;
        let mut account = tx.find_by_id(id).await?.unwrap();
        account.money += Decimal::ONE;
        tx.save(account).await?;
        tx.commit().await
    }

    #[tokio::test]
    async fn should_serialize_overlapping_writers_on_different_ids() {
        let dir = tempfile::tempdir().unwrap();
        let db = Config {
            database_url: format!("sqlite://{}", dir.path().join("bank.db").display()),
        }
        .build()
        .await
        .unwrap();
        let repo = SqliteAccountDetailsRepository::new(db.pool().clone());
        let first = repo.save(new_account(1)).await.unwrap().id.unwrap();
        let second = repo.save(new_account(2)).await.unwrap().id.unwrap();

        let (left, right) = tokio::join!(
            raise_balance(&repo, first),
            raise_balance(&repo, second)
        );

        assert!(left.is_ok(), "{left:?}");
        assert!(right.is_ok(), "{right:?}");
        for id in [first, second] {
            let account = repo.find_by_id(id).await.unwrap().unwrap();
            assert_eq!(account.money, Decimal::new(30_150, 2));
        }
        db.close().await;
    }
}
