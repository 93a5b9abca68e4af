//! # Repository Module
//!
//! Database repository implementations for GAzie TUI.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Runtime                                                               │
//! │       │  db.customers().insert(&new_customer)                          │
//! │       ▼                                                                 │
//! │  CustomerRepository / ProductRepository                                │
//! │  ├── list()            ordered by name                                 │
//! │  ├── list_or_empty()   list(), logging failures and yielding []        │
//! │  ├── insert(&new)      one INSERT, returns the new row id              │
//! │  └── count()                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Row struct (FromRow) ──► gazie_core domain type                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository)
//! - [`ProductRepository`](product::ProductRepository)

use chrono::{DateTime, NaiveDateTime, Utc};

pub mod customer;
pub mod product;

/// Layout SQLite's CURRENT_TIMESTAMP writes.
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a stored creation timestamp.
///
/// Accepts SQLite's `CURRENT_TIMESTAMP` layout and RFC 3339. NULL or
/// unreadable text yields the Unix epoch instead of failing the read.
pub(crate) fn parse_timestamp(raw: Option<&str>) -> NaiveDateTime {
    let epoch = DateTime::<Utc>::UNIX_EPOCH.naive_utc();
    let Some(raw) = raw.map(str::trim) else {
        return epoch;
    };

    NaiveDateTime::parse_from_str(raw, SQLITE_TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.naive_utc()))
        .unwrap_or(epoch)
}
