//! Generic Table Repository
//!
//! Read and delete primitives shared by every catalog table. Inserts and
//! updates bind entity-specific columns and live in the per-entity
//! repositories.

use std::marker::PhantomData;

use sqlx::{FromRow, Postgres, QueryBuilder, Transaction, postgres::PgRow};

/// A row type stored in its own table with an integer `id` primary key.
pub(crate) trait Table: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Table name.
    const TABLE: &'static str;

    /// Comma separated list of selected columns.
    const COLUMNS: &'static str;

    /// Column holding the human-facing unique name.
    const NAME_COLUMN: &'static str;

    /// Primary key of this row.
    fn id(&self) -> i64;
}

/// Row selection predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Filter {
    /// Every row.
    Any,

    /// Row with the given primary key.
    Id(i64),

    /// Rows whose name matches, ignoring case.
    Name(String),
}

/// Whether a read is bound for mutation within the same transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tracking {
    /// Lock the selected row until the transaction ends.
    Tracked,

    /// Plain read-only view.
    Untracked,
}

#[derive(Debug)]
pub(crate) struct PgRepository<T> {
    table: PhantomData<fn() -> T>,
}

impl<T> Clone for PgRepository<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Default for PgRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PgRepository<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { table: PhantomData }
    }
}

impl<T: Table> PgRepository<T> {
    /// First row matching `filter`, lowest id first.
    pub(crate) async fn get(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &Filter,
        tracking: Tracking,
    ) -> Result<Option<T>, sqlx::Error> {
        let mut builder = select::<T>(filter);

        builder.push(" ORDER BY id LIMIT 1");

        if tracking == Tracking::Tracked {
            builder.push(" FOR UPDATE");
        }

        builder.build_query_as::<T>().fetch_optional(&mut **tx).await
    }

    /// Every row matching `filter`, ordered by id.
    pub(crate) async fn get_all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &Filter,
    ) -> Result<Vec<T>, sqlx::Error> {
        let mut builder = select::<T>(filter);

        builder.push(" ORDER BY id");

        builder.build_query_as::<T>().fetch_all(&mut **tx).await
    }

    /// Delete `record` by primary key, returning the number of rows removed.
    pub(crate) async fn remove(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: &T,
    ) -> Result<u64, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new("DELETE FROM ");

        builder.push(T::TABLE).push(" WHERE id = ").push_bind(record.id());

        let rows_affected = builder.build().execute(&mut **tx).await?.rows_affected();

        Ok(rows_affected)
    }
}

fn select<T: Table>(filter: &Filter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT ");

    builder.push(T::COLUMNS).push(" FROM ").push(T::TABLE);

    match filter {
        Filter::Any => {}
        Filter::Id(id) => {
            builder.push(" WHERE id = ").push_bind(*id);
        }
        Filter::Name(name) => {
            builder
                .push(" WHERE lower(")
                .push(T::NAME_COLUMN)
                .push(") = lower(")
                .push_bind(name.clone())
                .push(")");
        }
    }

    builder
}
