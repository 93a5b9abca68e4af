//! # Validation Module
//!
//! Input rules for GAzie TUI forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Key filter (is_accepted_form_char)                           │
//! │  └── Only letters, digits and | . @ - _ reach the form buffer          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Form parsing (form.rs + validate_price)                      │
//! │  ├── Field count                                                       │
//! │  └── Numeric, non-negative price                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE code constraint                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Character Filter
// =============================================================================

/// Punctuation accepted in form text besides letters and digits.
const ACCEPTED_PUNCTUATION: [char; 5] = ['|', '.', '@', '-', '_'];

/// Returns true if a typed character may be appended to a form buffer.
///
/// ## Rules
/// - ASCII letters and ASCII digits
/// - The literal characters `| . @ - _`
/// - Space has its own key and is not covered here
///
/// ## Example
/// ```rust
/// use gazie_core::validation::is_accepted_form_char;
///
/// assert!(is_accepted_form_char('a'));
/// assert!(is_accepted_form_char('|'));
/// assert!(!is_accepted_form_char('è'));
/// assert!(!is_accepted_form_char(','));
/// ```
pub fn is_accepted_form_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ACCEPTED_PUNCTUATION.contains(&c)
}

// =============================================================================
// Code Generation
// =============================================================================

/// Generates a business code for a record submitted with an empty code.
///
/// The sequence number is `current_count + 1`, zero-padded to three digits.
/// It is not checked against existing codes: if a `C004` already exists the
/// insert fails on the UNIQUE constraint and the user is told so.
///
/// ## Example
/// ```rust
/// use gazie_core::validation::generate_code;
///
/// assert_eq!(generate_code('C', 3), "C004");
/// assert_eq!(generate_code('P', 0), "P001");
/// assert_eq!(generate_code('C', 999), "C1000");
/// ```
pub fn generate_code(prefix: char, current_count: usize) -> String {
    format!("{}{:03}", prefix, current_count + 1)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<Money> {
    if price.is_negative() {
        return Err(ValidationError::NegativePrice);
    }

    Ok(price)
}

/// Parses and validates the price field of a product form.
pub fn parse_price(text: &str) -> ValidationResult<Money> {
    let price = Money::parse_decimal(text).ok_or_else(|| ValidationError::InvalidPrice {
        value: text.to_string(),
    })?;

    validate_price(price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_chars() {
        for c in ['a', 'Z', '0', '9', '|', '.', '@', '-', '_'] {
            assert!(is_accepted_form_char(c), "{c:?} should be accepted");
        }
    }

    #[test]
    fn test_rejected_chars() {
        for c in [' ', ',', '/', 'à', 'é', '€', '\t', '\n', '#', '+'] {
            assert!(!is_accepted_form_char(c), "{c:?} should be rejected");
        }
    }

    #[test]
    fn test_generate_code_padding() {
        assert_eq!(generate_code('C', 0), "C001");
        assert_eq!(generate_code('C', 3), "C004");
        assert_eq!(generate_code('P', 41), "P042");
        assert_eq!(generate_code('P', 998), "P999");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("15.50"), Ok(Money::from_cents(1550)));
        assert_eq!(parse_price("0"), Ok(Money::zero()));
        assert_eq!(
            parse_price("notanumber"),
            Err(ValidationError::InvalidPrice {
                value: "notanumber".to_string()
            })
        );
        assert_eq!(parse_price("-1"), Err(ValidationError::NegativePrice));
    }
}
