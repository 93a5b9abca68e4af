//! # Customer Repository
//!
//! Database operations for customers.

use sqlx::{FromRow, SqlitePool};
use tracing::{debug, warn};

use super::parse_timestamp;
use crate::error::{DbError, DbResult};
use gazie_core::{Customer, NewCustomer};

/// A `customers` row as SQLite hands it back.
///
/// `active` and `created` are cast in the SELECT so rows written by other
/// tools decode the same way.
#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    code: String,
    name: String,
    city: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    active: i64,
    created: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            code: row.code,
            name: row.name,
            city: row.city,
            phone: row.phone,
            email: row.email,
            active: row.active != 0,
            created_at: parse_timestamp(row.created.as_deref()),
        }
    }
}

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists every customer ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                id,
                code,
                name,
                city,
                phone,
                email,
                CAST(COALESCE(active, 1) AS INTEGER) AS active,
                CAST(created AS TEXT) AS created
            FROM customers
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded customers");
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Lists customers, logging any failure and returning an empty list.
    ///
    /// The UI shows the empty-list text instead of crashing when the
    /// store can't be read.
    pub async fn list_or_empty(&self) -> Vec<Customer> {
        match self.list().await {
            Ok(customers) => customers,
            Err(err) => {
                warn!(error = %err, "Failed to load customers");
                Vec::new()
            }
        }
    }

    /// Inserts a new, active customer.
    ///
    /// ## Returns
    /// * `Ok(id)` - Row id assigned by SQLite
    /// * `Err(DbError::UniqueViolation)` - Code already exists
    pub async fn insert(&self, customer: &NewCustomer) -> DbResult<i64> {
        debug!(code = %customer.code, "Inserting customer");

        let result = sqlx::query(
            r#"
            INSERT INTO customers (code, name, city, phone, email, active)
            VALUES (?1, ?2, ?3, ?4, ?5, 1)
            "#,
        )
        .bind(&customer.code)
        .bind(&customer.name)
        .bind(&customer.city)
        .bind(&customer.phone)
        .bind(&customer.email)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_value(&customer.code))?;

        Ok(result.last_insert_rowid())
    }

    /// Counts all customers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
