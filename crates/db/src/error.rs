//! Repository error taxonomy.
//!
//! Repositories never swallow driver errors: everything that is not a typed
//! absence or a constraint rejection keeps the original [`sqlx::Error`] as its
//! source and propagates unchanged up to the service layer.

/// Error kinds surfaced by the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No row satisfies the requested identifier/ownership predicate.
    ///
    /// Owner-scoped reads return this both when the entity is absent and when
    /// it exists but belongs to someone else, so existence is never leaked.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The store rejected a statement with a unique/foreign-key/check
    /// constraint violation (Postgres error class 23).
    #[error("constraint violation (code {code})")]
    ConstraintViolation {
        code: String,
        constraint: Option<String>,
    },

    /// Connectivity or driver failure talking to the store.
    #[error("store unavailable")]
    StoreUnavailable(#[source] sqlx::Error),

    /// A partial update was invoked with zero fields set; rejected before any
    /// statement reaches the store.
    #[error("update supplied no fields")]
    InvalidPartialUpdate,
}

pub type DbResult<T> = Result<T, DbError>;

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound("row"),
            sqlx::Error::Database(db_err) => {
                // Postgres integrity-constraint violations are class 23
                // (23505 unique, 23503 foreign key, 23514 check, ...).
                if db_err.code().is_some_and(|c| c.starts_with("23")) {
                    DbError::ConstraintViolation {
                        code: db_err
                            .code()
                            .map(|c| c.into_owned())
                            .unwrap_or_default(),
                        constraint: db_err.constraint().map(str::to_owned),
                    }
                } else {
                    DbError::StoreUnavailable(sqlx::Error::Database(db_err))
                }
            }
            other => DbError::StoreUnavailable(other),
        }
    }
}
