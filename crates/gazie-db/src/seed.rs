//! # Sample Data
//!
//! Fills empty tables with a few example records so a fresh install has
//! something to show.
//!
//! Each table is checked on its own: a database with customers but no
//! products only gets the sample products.

use gazie_core::{Money, NewCustomer, NewProduct};
use tracing::info;

use crate::error::DbResult;
use crate::pool::Database;

/// Sample customers: (name, code, city, phone, email).
const SAMPLE_CUSTOMERS: &[(&str, &str, &str, &str, &str)] = &[
    ("ABC SRL", "CLI001", "Roma", "06-123456", "info@abc.it"),
    ("XYZ SPA", "CLI002", "Milano", "02-789012", "contatti@xyz.it"),
    ("DEF SRL", "CLI003", "Napoli", "081-345678", "office@def.it"),
];

/// Sample products: (name, code, price in cents, description).
const SAMPLE_PRODUCTS: &[(&str, &str, i64, &str)] = &[
    ("Prodotto Esempio", "PROD001", 2550, "Questo è un prodotto di esempio"),
    ("Articolo Esempio", "ART002", 1525, "Altro articolo di qualità"),
    ("Merce Esempio", "MERC003", 9999, "Merce di lusso"),
];

const SAMPLE_STOCK: i64 = 10;
const SAMPLE_MIN_STOCK: i64 = 2;

/// Inserts the sample records into each table that has no rows.
pub async fn seed_if_empty(db: &Database) -> DbResult<()> {
    let customers = db.customers();
    if customers.count().await? == 0 {
        for (name, code, city, phone, email) in SAMPLE_CUSTOMERS {
            customers
                .insert(&NewCustomer {
                    code: code.to_string(),
                    name: name.to_string(),
                    city: Some(city.to_string()),
                    phone: Some(phone.to_string()),
                    email: Some(email.to_string()),
                })
                .await?;
        }
        info!(count = SAMPLE_CUSTOMERS.len(), "Seeded sample customers");
    }

    let products = db.products();
    if products.count().await? == 0 {
        for (name, code, cents, description) in SAMPLE_PRODUCTS {
            let product = NewProduct {
                code: code.to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
                price: Money::from_cents(*cents),
            };
            products
                .insert_with_stock(&product, SAMPLE_STOCK, SAMPLE_MIN_STOCK)
                .await?;
        }
        info!(count = SAMPLE_PRODUCTS.len(), "Seeded sample products");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbConfig;

    async fn unseeded() -> Database {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();
        crate::migrations::run_migrations(db.pool()).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_seeds_both_tables() {
        let db = unseeded().await;
        seed_if_empty(&db).await.unwrap();

        let customers = db.customers().list().await.unwrap();
        let codes: Vec<_> = customers.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CLI001", "CLI003", "CLI002"]);

        let products = db.products().list().await.unwrap();
        assert_eq!(products.len(), 3);
        for product in &products {
            assert_eq!(product.stock, 10);
            assert_eq!(product.min_stock, 2);
        }
        let merce = products.iter().find(|p| p.code == "MERC003").unwrap();
        assert_eq!(merce.price, Money::from_cents(9999));
    }

    #[tokio::test]
    async fn test_seeding_twice_changes_nothing() {
        let db = unseeded().await;
        seed_if_empty(&db).await.unwrap();
        seed_if_empty(&db).await.unwrap();

        assert_eq!(db.customers().count().await.unwrap(), 3);
        assert_eq!(db.products().count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_seeding_is_per_table() {
        let db = unseeded().await;
        db.customers()
            .insert(&NewCustomer {
                code: "MINE".to_string(),
                name: "Mio Cliente".to_string(),
                city: None,
                phone: None,
                email: None,
            })
            .await
            .unwrap();

        seed_if_empty(&db).await.unwrap();

        assert_eq!(db.customers().count().await.unwrap(), 1);
        assert_eq!(db.products().count().await.unwrap(), 3);
    }
}
