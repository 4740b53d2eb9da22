//! Dynamic SET-clause assembly for partial updates.
//!
//! Builds `column = $n` fragments and a positionally aligned bind list from
//! sparse optional inputs. Column names are `&'static str` supplied at the
//! call site, never derived from caller data, and values only ever travel as
//! bound parameters.

use sqlx::postgres::PgArguments;
use sqlx::{Arguments, Encode, Postgres, Type};

use crate::error::{DbError, DbResult};

/// Accumulates `column = $n` fragments plus the matching bound values.
///
/// Placeholder indices start at `$1` and stay contiguous across both `set`
/// fragments and trailing [`bind`](Self::bind) parameters, so the final
/// statement can splice `set_clause()` and reference the indices returned by
/// `bind` in its WHERE clause.
pub struct UpdateBuilder {
    clauses: Vec<String>,
    args: PgArguments,
    next_idx: usize,
}

impl UpdateBuilder {
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
            args: PgArguments::default(),
            next_idx: 1,
        }
    }

    /// Append `column = $n` and bind `value` at that position.
    pub fn set<T>(&mut self, column: &'static str, value: T) -> DbResult<()>
    where
        T: for<'q> Encode<'q, Postgres> + Type<Postgres> + Send + 'static,
    {
        self.args.add(value).map_err(sqlx::Error::Encode)?;
        self.clauses.push(format!("{column} = ${}", self.next_idx));
        self.next_idx += 1;
        Ok(())
    }

    /// Append `column = $n` only when `value` is `Some`.
    pub fn set_opt<T>(&mut self, column: &'static str, value: Option<T>) -> DbResult<()>
    where
        T: for<'q> Encode<'q, Postgres> + Type<Postgres> + Send + 'static,
    {
        match value {
            Some(value) => self.set(column, value),
            None => Ok(()),
        }
    }

    /// Bind a trailing parameter (WHERE-clause scoping ids), returning the
    /// placeholder index it occupies.
    pub fn bind<T>(&mut self, value: T) -> DbResult<usize>
    where
        T: for<'q> Encode<'q, Postgres> + Type<Postgres> + Send + 'static,
    {
        self.args.add(value).map_err(sqlx::Error::Encode)?;
        let idx = self.next_idx;
        self.next_idx += 1;
        Ok(idx)
    }

    /// True when no SET fragment has been added. Callers must check this and
    /// reject the operation with [`DbError::InvalidPartialUpdate`] instead of
    /// executing an UPDATE with an empty SET clause.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The joined SET clause, e.g. `"bpm = $1, price = $2"`.
    pub fn set_clause(&self) -> String {
        self.clauses.join(", ")
    }

    /// Consume the builder, yielding the bind list for `sqlx::query_with`.
    ///
    /// Fails with [`DbError::InvalidPartialUpdate`] if no field was set.
    pub fn into_arguments(self) -> DbResult<PgArguments> {
        if self.clauses.is_empty() {
            return Err(DbError::InvalidPartialUpdate);
        }
        Ok(self.args)
    }
}

impl Default for UpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
