//! # gazie-core: Pure Logic for GAzie TUI
//!
//! This crate holds everything GAzie TUI decides without touching the outside
//! world: the domain records, money arithmetic, the pipe-delimited form
//! parser and the screen state machine.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GAzie TUI Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal (ratatui)                           │   │
//! │  │        key press ──► Input            AppState ──► frame        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gazie-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   form    │  │    app    │  │   │
//! │  │   │ Customer  │  │   Money   │  │  parsing  │  │  AppState │  │   │
//! │  │   │  Product  │  │  (cents)  │  │  codes    │  │  Command  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ Command                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    gazie-db (Database Layer)                    │   │
//! │  │              SQLite schema, seeding, repositories               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Product, Screen, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Accepted characters, code generation, price rules
//! - [`form`] - Pipe-delimited form parsing
//! - [`app`] - The application state machine
//!
//! ## Example Usage
//!
//! ```rust
//! use gazie_core::app::{AppState, Command, Input};
//! use gazie_core::Screen;
//!
//! let state = AppState::new(Vec::new(), Vec::new());
//! let (state, command) = state.update(Input::Confirm);
//!
//! assert_eq!(state.screen, Screen::CustomerList);
//! assert!(command.is_none());
//!
//! let (_, command) = state.update(Input::Cancel);
//! assert_eq!(command, Some(Command::Quit));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod app;
pub mod error;
pub mod form;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{FormKind, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Separator between fields of a form buffer.
pub const FIELD_SEPARATOR: char = '|';

/// Number of fields a form needs before it can be submitted.
///
/// Both forms share it: name, code, city, phone for customers and
/// name, code, price, description for products.
pub const MIN_FORM_FIELDS: usize = 4;

/// Prefix of auto-generated customer codes (`C001`, `C002`, ...).
pub const CUSTOMER_CODE_PREFIX: char = 'C';

/// Prefix of auto-generated product codes (`P001`, `P002`, ...).
pub const PRODUCT_CODE_PREFIX: char = 'P';
