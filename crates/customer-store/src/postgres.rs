use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    Customer, CustomerFields, CustomerId, CustomerQuery, Result, StoreError, Version,
    store::CustomerStore,
};

/// PostgreSQL-backed customer store.
///
/// One row per customer record. Version bumps and timestamp refreshes
/// happen inside the SQL write path, so the persisted row is always the
/// authority on `version`, `created_time`, and `last_modified_time`.
#[derive(Clone)]
pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    /// Creates a new PostgreSQL customer store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        tracing::debug!("applying customer store migrations");
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_customer(row: PgRow) -> Result<Customer> {
        Ok(Customer {
            customer_id: CustomerId::from_uuid(row.try_get::<Uuid, _>("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            national_id: row.try_get("national_id")?,
            phone_number: row.try_get("phone_number")?,
            account_id: row.try_get("account_id")?,
            version: Version::new(row.try_get("version")?),
            created_time: row.try_get("created_time")?,
            last_modified_time: row.try_get("last_modified_time")?,
        })
    }
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn insert(&self, customer_id: CustomerId, fields: CustomerFields) -> Result<Customer> {
        // now() is the transaction timestamp, so both columns get the
        // same instant.
        let row = sqlx::query(
            r#"
            INSERT INTO customers
                (id, first_name, last_name, national_id, phone_number, account_id,
                 version, created_time, last_modified_time)
            VALUES ($1, $2, $3, $4, $5, $6, 1, now(), now())
            RETURNING id, first_name, last_name, national_id, phone_number, account_id,
                      version, created_time, last_modified_time
            "#,
        )
        .bind(customer_id.as_uuid())
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.national_id)
        .bind(&fields.phone_number)
        .bind(&fields.account_id)
        .fetch_one(&self.pool)
        .await?;

        Self::row_to_customer(row)
    }

    async fn retrieve(&self, customer_id: CustomerId) -> Result<Customer> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, national_id, phone_number, account_id,
                   version, created_time, last_modified_time
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(customer_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Self::row_to_customer(row),
            None => Err(StoreError::NotFound(customer_id)),
        }
    }

    async fn retrieve_many(&self, _query: CustomerQuery) -> Result<Vec<Customer>> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, national_id, phone_number, account_id,
                   version, created_time, last_modified_time
            FROM customers
            ORDER BY created_time ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_customer).collect()
    }

    async fn update(&self, customer_id: CustomerId, fields: CustomerFields) -> Result<Customer> {
        let row = sqlx::query(
            r#"
            UPDATE customers
            SET first_name = $2,
                last_name = $3,
                national_id = $4,
                phone_number = $5,
                account_id = $6,
                version = version + 1,
                last_modified_time = now()
            WHERE id = $1
            RETURNING id, first_name, last_name, national_id, phone_number, account_id,
                      version, created_time, last_modified_time
            "#,
        )
        .bind(customer_id.as_uuid())
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.national_id)
        .bind(&fields.phone_number)
        .bind(&fields.account_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Self::row_to_customer(row),
            None => Err(StoreError::NotFound(customer_id)),
        }
    }

    async fn remove(&self, customer_id: CustomerId) -> Result<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(customer_id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(customer_id));
        }
        Ok(())
    }
}
