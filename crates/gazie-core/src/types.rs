//! # Domain Types
//!
//! Core domain types used throughout GAzie TUI.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │    Product      │   │     Screen      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (rowid)     │   │  id (rowid)     │   │  MainMenu       │       │
//! │  │  code (unique)  │   │  code (unique)  │   │  CustomerList   │       │
//! │  │  name           │   │  name           │   │  ProductList    │       │
//! │  │  city / phone   │   │  price (Money)  │   │  CustomerForm   │       │
//! │  │  email          │   │  stock          │   │  ProductForm    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  NewCustomer / NewProduct: validated payloads heading for an INSERT    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every record has:
//! - `id`: assigned by SQLite, immutable
//! - `code`: human-readable business key (`CLI001`, `P004`), unique

use chrono::NaiveDateTime;

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A customer record as read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Identifier assigned by the store.
    pub id: i64,

    /// Business code, unique across customers.
    pub code: String,

    /// Display name (company or person).
    pub name: String,

    pub city: Option<String>,

    pub phone: Option<String>,

    pub email: Option<String>,

    /// Whether the customer is active. New customers are always active.
    pub active: bool,

    /// When the row was inserted. Unix epoch if the stored text was unreadable.
    pub created_at: NaiveDateTime,
}

/// A customer that passed form validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub code: String,
    pub name: String,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A product record as read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Identifier assigned by the store.
    pub id: i64,

    /// Business code, unique across products.
    pub code: String,

    pub name: String,

    pub description: Option<String>,

    /// Unit price.
    pub price: Money,

    /// Quantity on hand. Zero for products created from the form.
    pub stock: i64,

    /// Reorder threshold. Zero for products created from the form.
    pub min_stock: i64,

    pub active: bool,

    pub created_at: NaiveDateTime,
}

/// A product that passed form validation and is ready to be inserted.
///
/// Stock and minimum stock are not part of the payload: the form never
/// collects them and the insert always writes zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
}

// =============================================================================
// Screen
// =============================================================================

/// The screen currently shown. `MainMenu` is the initial screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    CustomerList,
    ProductList,
    CustomerForm,
    ProductForm,
}

impl Screen {
    /// Returns true for the two text-entry screens.
    #[inline]
    pub const fn is_form(&self) -> bool {
        matches!(self, Screen::CustomerForm | Screen::ProductForm)
    }

    /// Returns true for the two record list screens.
    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self, Screen::CustomerList | Screen::ProductList)
    }
}

// =============================================================================
// Form Mode
// =============================================================================

/// Whether a form creates a record or edits one.
///
/// Only `New` is ever produced by a transition. `Edit` exists so the form
/// view can title itself for editing once editing is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit,
}

// =============================================================================
// Main Menu
// =============================================================================

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuItem {
    Customers,
    Products,
    Exit,
}

impl MainMenuItem {
    /// All entries in display order; the index is the selection index.
    pub const ALL: [MainMenuItem; 3] = [
        MainMenuItem::Customers,
        MainMenuItem::Products,
        MainMenuItem::Exit,
    ];

    /// Returns the entry at a selection index.
    pub fn from_index(index: usize) -> Option<MainMenuItem> {
        Self::ALL.get(index).copied()
    }

    /// Label shown in the menu.
    pub const fn label(&self) -> &'static str {
        match self {
            MainMenuItem::Customers => "📋 Anagrafica Clienti",
            MainMenuItem::Products => "📦 Anagrafica Prodotti",
            MainMenuItem::Exit => "❌ Esci",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
