//! Repository for the `accounts` table.

use sqlx::PgPool;

use beatstore_core::types::DbId;

use crate::error::{DbError, DbResult};
use crate::models::account::{Account, CreateAccount, UpdateAccount};
use crate::update::UpdateBuilder;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, name, confirmed, created_at, updated_at";

/// Provides CRUD operations for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new (unconfirmed) account, returning the assigned id.
    ///
    /// A duplicate email surfaces as [`DbError::ConstraintViolation`].
    pub async fn create(pool: &PgPool, input: &CreateAccount) -> DbResult<DbId> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO accounts (email, password_hash, name) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.name)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Look up an account id by sign-in credentials.
    ///
    /// The credential arrives already hashed; no match is a plain
    /// [`DbError::NotFound`], indistinguishable from a wrong password.
    pub async fn find_by_credentials(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> DbResult<DbId> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM accounts WHERE email = $1 AND password_hash = $2",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound("account"))
    }

    /// Fetch an account by id.
    pub async fn get(pool: &PgPool, id: DbId) -> DbResult<Account> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound("account"))
    }

    /// List all accounts ordered by creation time.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Account>> {
        let query = format!("SELECT {COLUMNS} FROM accounts ORDER BY id");
        let accounts = sqlx::query_as::<_, Account>(&query).fetch_all(pool).await?;
        Ok(accounts)
    }

    /// Flip the one-time confirmation flag.
    pub async fn confirm(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("UPDATE accounts SET confirmed = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("account"));
        }
        Ok(())
    }

    /// Partial update: only non-`None` fields in `input` are applied.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateAccount) -> DbResult<()> {
        let mut qb = UpdateBuilder::new();
        qb.set_opt("email", input.email.clone())?;
        qb.set_opt("password_hash", input.password_hash.clone())?;
        qb.set_opt("name", input.name.clone())?;

        if qb.is_empty() {
            return Err(DbError::InvalidPartialUpdate);
        }

        let id_idx = qb.bind(id)?;
        let query = format!(
            "UPDATE accounts SET {} WHERE id = ${id_idx}",
            qb.set_clause()
        );

        let result = sqlx::query_with(&query, qb.into_arguments()?)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("account"));
        }
        Ok(())
    }

    /// Fetch the stored credential hash for re-verification flows
    /// (e.g. confirming a password before account deletion).
    pub async fn password_hash(pool: &PgPool, id: DbId) -> DbResult<String> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::NotFound("account"))
    }

    /// Delete an account by id.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("account"));
        }
        Ok(())
    }
}
