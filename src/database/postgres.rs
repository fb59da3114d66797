use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::database::models::{Account, NewAccount};
use crate::database::store::{AccountStore, StoreError};

/// Postgres-backed account store. One row per account in the `accounts`
/// table, primary key only.
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the accounts table if it does not exist yet. Called once at
    /// startup.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                address TEXT NOT NULL,
                phone_number TEXT,
                date_joined TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Accounts table ready");
        Ok(())
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, fields: NewAccount) -> Result<Account, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (name, email, address, phone_number)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.address)
        .bind(&fields.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, address, phone_number, date_joined FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_all(&self) -> Result<Vec<Account>, StoreError> {
        let accounts = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, address, phone_number, date_joined FROM accounts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn update(&self, id: i64, fields: NewAccount) -> Result<Account, StoreError> {
        let updated = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET name = $2, email = $3, address = $4, phone_number = $5
            WHERE id = $1
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.address)
        .bind(&fields.phone_number)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        // Idempotent: zero rows affected is still success
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
