//! # Product Repository
//!
//! Database operations for products.
//!
//! Prices live in a REAL column; they become [`Money`] cents on the way out
//! and go back to a decimal on the way in.

use sqlx::{FromRow, SqlitePool};
use tracing::{debug, warn};

use super::parse_timestamp;
use crate::error::{DbError, DbResult};
use gazie_core::{Money, NewProduct, Product};

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    code: String,
    name: String,
    description: Option<String>,
    price: f64,
    stock: i64,
    min_stock: i64,
    active: i64,
    created: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            code: row.code,
            name: row.name,
            description: row.description,
            price: Money::from_decimal(row.price),
            stock: row.stock,
            min_stock: row.min_stock,
            active: row.active != 0,
            created_at: parse_timestamp(row.created.as_deref()),
        }
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
/// let id = repo.insert(&new_product).await?;
/// let products = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                id,
                code,
                name,
                description,
                CAST(COALESCE(price, 0) AS REAL) AS price,
                CAST(COALESCE(stock, 0) AS INTEGER) AS stock,
                CAST(COALESCE(min_stock, 0) AS INTEGER) AS min_stock,
                CAST(COALESCE(active, 1) AS INTEGER) AS active,
                CAST(created AS TEXT) AS created
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded products");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Lists products, logging any failure and returning an empty list.
    pub async fn list_or_empty(&self) -> Vec<Product> {
        match self.list().await {
            Ok(products) => products,
            Err(err) => {
                warn!(error = %err, "Failed to load products");
                Vec::new()
            }
        }
    }

    /// Inserts a new, active product with no stock.
    ///
    /// ## Returns
    /// * `Ok(id)` - Row id assigned by SQLite
    /// * `Err(DbError::UniqueViolation)` - Code already exists
    pub async fn insert(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(code = %product.code, price = %product.price, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (code, name, description, price, stock, min_stock, active)
            VALUES (?1, ?2, ?3, ?4, 0, 0, 1)
            "#,
        )
        .bind(&product.code)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_decimal())
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_value(&product.code))?;

        Ok(result.last_insert_rowid())
    }

    /// Inserts a product with explicit stock levels.
    ///
    /// Only sample data uses this; the form always creates empty stock.
    pub(crate) async fn insert_with_stock(
        &self,
        product: &NewProduct,
        stock: i64,
        min_stock: i64,
    ) -> DbResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (code, name, description, price, stock, min_stock, active)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1)
            "#,
        )
        .bind(&product.code)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_decimal())
        .bind(stock)
        .bind(min_stock)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_value(&product.code))?;

        Ok(result.last_insert_rowid())
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
