//! # Form Parsing
//!
//! Turns the single-line form buffer into insert payloads.
//!
//! ## Buffer Layout
//! ```text
//! Customer:  Nome|Codice|Città|Telefono[|Email]
//!            Mario Rossi||Roma|06-123456|mario@email.it
//!                       ▲
//!                       └── empty code → generated "C004"
//!
//! Product:   Nome|Codice|Prezzo|Descrizione
//!            Widget|P100|15.50|Descrizione del prodotto
//! ```
//!
//! Fields are trimmed. Fields past the expected layout are ignored, and
//! empty optional fields are stored as NULL.

use crate::error::{FormKind, ValidationError};
use crate::types::{NewCustomer, NewProduct};
use crate::validation::{generate_code, parse_price, ValidationResult};
use crate::{CUSTOMER_CODE_PREFIX, FIELD_SEPARATOR, MIN_FORM_FIELDS, PRODUCT_CODE_PREFIX};

/// Splits a form buffer on `|` and trims every field.
///
/// An empty buffer yields one empty field, like `str::split` does.
pub fn split_fields(buffer: &str) -> Vec<&str> {
    buffer.split(FIELD_SEPARATOR).map(str::trim).collect()
}

/// Parses a customer form buffer.
///
/// ## Arguments
/// * `buffer` - Raw form text
/// * `customer_count` - Customers currently loaded, used for code generation
///
/// ## Example
/// ```rust
/// use gazie_core::form::parse_customer_form;
///
/// let customer = parse_customer_form("Mario Rossi||Roma|06-123456|mario@email.it", 3).unwrap();
/// assert_eq!(customer.code, "C004");
/// assert_eq!(customer.email.as_deref(), Some("mario@email.it"));
///
/// assert!(parse_customer_form("Mario Rossi|C001|Roma", 3).is_err());
/// ```
pub fn parse_customer_form(buffer: &str, customer_count: usize) -> ValidationResult<NewCustomer> {
    let fields = split_fields(buffer);
    require_fields(FormKind::Customer, &fields)?;

    Ok(NewCustomer {
        name: fields[0].to_string(),
        code: code_or_generated(fields[1], CUSTOMER_CODE_PREFIX, customer_count),
        city: optional(fields[2]),
        phone: optional(fields[3]),
        email: fields.get(4).copied().and_then(optional),
    })
}

/// Parses a product form buffer.
///
/// The price is checked before the code is generated, so a bad price
/// never consumes a sequence number.
///
/// ## Example
/// ```rust
/// use gazie_core::form::parse_product_form;
///
/// let product = parse_product_form("Widget||15.50|Blue widget", 3).unwrap();
/// assert_eq!(product.code, "P004");
/// assert_eq!(product.price.cents(), 1550);
///
/// assert!(parse_product_form("Widget|P100|notanumber|desc", 3).is_err());
/// ```
pub fn parse_product_form(buffer: &str, product_count: usize) -> ValidationResult<NewProduct> {
    let fields = split_fields(buffer);
    require_fields(FormKind::Product, &fields)?;

    let price = parse_price(fields[2])?;

    Ok(NewProduct {
        name: fields[0].to_string(),
        code: code_or_generated(fields[1], PRODUCT_CODE_PREFIX, product_count),
        price,
        description: optional(fields[3]),
    })
}

fn require_fields(form: FormKind, fields: &[&str]) -> ValidationResult<()> {
    if fields.len() < MIN_FORM_FIELDS {
        return Err(ValidationError::TooFewFields {
            form,
            expected: MIN_FORM_FIELDS,
            found: fields.len(),
        });
    }
    Ok(())
}

fn code_or_generated(code: &str, prefix: char, count: usize) -> String {
    if code.is_empty() {
        generate_code(prefix, count)
    } else {
        code.to_string()
    }
}

fn optional(field: &str) -> Option<String> {
    (!field.is_empty()).then(|| field.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
