//! Providers Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    providers::{
        data::{NewProvider, ProviderUpdate},
        records::{ProviderId, ProviderRecord},
    },
    repository::{Filter, PgRepository, Table, Tracking},
};

const CREATE_PROVIDER_SQL: &str = include_str!("sql/create_provider.sql");
const UPDATE_PROVIDER_SQL: &str = include_str!("sql/update_provider.sql");

impl Table for ProviderRecord {
    const TABLE: &'static str = "providers";
    const COLUMNS: &'static str =
        "id, name, address, email, product_price, registered_at, updated_at";
    const NAME_COLUMN: &'static str = "name";

    fn id(&self) -> i64 {
        self.id.into_i64()
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProvidersRepository {
    table: PgRepository<ProviderRecord>,
}

impl PgProvidersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            table: PgRepository::new(),
        }
    }

    pub(crate) async fn list_providers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProviderRecord>, sqlx::Error> {
        self.table.get_all(tx, &Filter::Any).await
    }

    pub(crate) async fn get_provider(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderId,
        tracking: Tracking,
    ) -> Result<Option<ProviderRecord>, sqlx::Error> {
        self.table
            .get(tx, &Filter::Id(provider.into_i64()), tracking)
            .await
    }

    pub(crate) async fn find_provider_by_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<ProviderRecord>, sqlx::Error> {
        self.table
            .get(tx, &Filter::Name(name.to_string()), Tracking::Untracked)
            .await
    }

    pub(crate) async fn create_provider(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: &NewProvider,
    ) -> Result<ProviderRecord, sqlx::Error> {
        query_as::<Postgres, ProviderRecord>(CREATE_PROVIDER_SQL)
            .bind(&provider.name)
            .bind(&provider.address)
            .bind(&provider.email)
            .bind(provider.product_price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_provider(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderId,
        update: &ProviderUpdate,
    ) -> Result<Option<ProviderRecord>, sqlx::Error> {
        query_as::<Postgres, ProviderRecord>(UPDATE_PROVIDER_SQL)
            .bind(provider.into_i64())
            .bind(&update.name)
            .bind(&update.address)
            .bind(&update.email)
            .bind(update.product_price)
            .bind(SqlxTimestamp::from(Timestamp::now()))
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn remove_provider(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: &ProviderRecord,
    ) -> Result<u64, sqlx::Error> {
        self.table.remove(tx, provider).await
    }
}

impl<'r> FromRow<'r, PgRow> for ProviderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProviderId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            email: row.try_get("email")?,
            product_price: row.try_get("product_price")?,
            registered_at: row.try_get::<SqlxTimestamp, _>("registered_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn acme() -> NewProvider {
        NewProvider {
            name: "Acme".to_string(),
            address: Some("1 Main St".to_string()),
            email: None,
            product_price: Decimal::new(1250, 2),
        }
    }

    #[tokio::test]
    async fn update_provider_returns_none_for_unknown_id() -> TestResult {
        let ctx = TestContext::new().await;
        let mut tx = ctx.db.begin_test_transaction().await;

        let updated = ctx
            .providers_repository
            .update_provider(
                &mut tx,
                ProviderId::from_i64(77),
                &ProviderUpdate {
                    name: "Nobody".to_string(),
                    address: None,
                    email: None,
                    product_price: Decimal::ZERO,
                },
            )
            .await?;

        assert!(updated.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn tracked_get_sees_uncommitted_insert() -> TestResult {
        let ctx = TestContext::new().await;
        let mut tx = ctx.db.begin_test_transaction().await;

        let created = ctx
            .providers_repository
            .create_provider(&mut tx, &acme())
            .await?;

        let found = ctx
            .providers_repository
            .get_provider(&mut tx, created.id, Tracking::Tracked)
            .await?;

        assert_eq!(found, Some(created));

        Ok(())
    }

    #[tokio::test]
    async fn find_provider_by_name_ignores_case() -> TestResult {
        let ctx = TestContext::new().await;
        let mut tx = ctx.db.begin_test_transaction().await;

        let created = ctx
            .providers_repository
            .create_provider(&mut tx, &acme())
            .await?;

        let found = ctx
            .providers_repository
            .find_provider_by_name(&mut tx, "ACME")
            .await?;

        assert_eq!(found.map(|p| p.id), Some(created.id));

        Ok(())
    }
}
