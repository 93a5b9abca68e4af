//! # Error Types
//!
//! Domain-specific error types for gazie-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gazie-core errors (this file)                                         │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  gazie-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  gazie-tui errors (in app)                                             │
//! │  └── AppError         - Startup failures (exit non-zero)               │
//! │                                                                         │
//! │  ValidationError / DbError ──► status line text                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Strings
//! `ValidationError` messages are shown verbatim in the status bar, so they
//! are written in the same language as the rest of the interface.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Which form a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Customer,
    Product,
}

impl FormKind {
    /// Field layout hint shown to the user when a form is incomplete.
    pub fn layout_hint(&self) -> &'static str {
        match self {
            FormKind::Customer => "Nome|Code|Città|Telefono",
            FormKind::Product => "Nome|Code|Prezzo|Descrizione",
        }
    }
}

/// Form input errors.
///
/// These occur before anything reaches the database. The form buffer is
/// kept so the user can correct it and resubmit.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// The buffer has fewer `|`-separated fields than the form needs.
    ///
    /// ## When This Occurs
    /// ```text
    /// "Mario Rossi|C001|Roma"   → 3 fields, customer form needs 4
    /// ""                        → 1 (empty) field
    /// ```
    #[error("Errore: insufficienti dati ({})", .form.layout_hint())]
    TooFewFields {
        form: FormKind,
        expected: usize,
        found: usize,
    },

    /// The price field is not a finite decimal number.
    #[error("Errore: prezzo non valido")]
    InvalidPrice { value: String },

    /// The price parsed but is below zero.
    #[error("Errore: il prezzo non può essere negativo")]
    NegativePrice,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_fields_message_names_layout() {
        let err = ValidationError::TooFewFields {
            form: FormKind::Customer,
            expected: 4,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "Errore: insufficienti dati (Nome|Code|Città|Telefono)"
        );

        let err = ValidationError::TooFewFields {
            form: FormKind::Product,
            expected: 4,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "Errore: insufficienti dati (Nome|Code|Prezzo|Descrizione)"
        );
    }

    #[test]
    fn test_invalid_price_message() {
        let err = ValidationError::InvalidPrice {
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Errore: prezzo non valido");
    }
}
