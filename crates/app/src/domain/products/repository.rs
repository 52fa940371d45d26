//! Products Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    products::{
        data::{NewProduct, ProductUpdate},
        records::{ProductId, ProductRecord},
    },
    repository::{Filter, PgRepository, Table, Tracking},
};

const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");

impl Table for ProductRecord {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static str = "id, name, description, price, active, created_at, updated_at";
    const NAME_COLUMN: &'static str = "name";

    fn id(&self) -> i64 {
        self.id.into_i64()
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository {
    table: PgRepository<ProductRecord>,
}

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            table: PgRepository::new(),
        }
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        self.table.get_all(tx, &Filter::Any).await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        tracking: Tracking,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        self.table
            .get(tx, &Filter::Id(product.into_i64()), tracking)
            .await
    }

    pub(crate) async fn find_product_by_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        self.table
            .get(tx, &Filter::Name(name.to_string()), Tracking::Untracked)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        update: &ProductUpdate,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(&update.name)
            .bind(&update.description)
            .bind(update.price)
            .bind(update.active)
            .bind(SqlxTimestamp::from(Timestamp::now()))
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn remove_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ProductRecord,
    ) -> Result<u64, sqlx::Error> {
        self.table.remove(tx, product).await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            active: row.try_get("active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
