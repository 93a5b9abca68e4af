//! Body content for each screen.
//!
//! Every function here is a pure mapping from the snapshot to text lines;
//! [`super::render`] places them in the bordered body block.

use gazie_core::app::AppState;
use gazie_core::{Customer, FormMode, MainMenuItem, Money, Product, Screen};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::widgets::{marker, pad_str};

pub const CUSTOMER_TABLE_HEADER: &str = "Codice    Nome                    Città           Telefono";
pub const CUSTOMER_TABLE_RULE: &str = "--------  ----------------------  --------------  ------------";
pub const PRODUCT_TABLE_HEADER: &str = "Codice    Nome                    Prezzo    Giacenza";
pub const PRODUCT_TABLE_RULE: &str = "--------  ----------------------  --------  --------";

pub const NO_CUSTOMERS: &str = "Nessun cliente presente. Premi 'N' per aggiungerne uno.";
pub const NO_PRODUCTS: &str = "Nessun prodotto presente. Premi 'N' per aggiungerne uno.";

const NAME_WIDTH: usize = 22;
const CITY_WIDTH: usize = 14;
const PHONE_WIDTH: usize = 12;

/// Lines of the body for the current screen.
pub fn body_lines(state: &AppState) -> Vec<Line<'static>> {
    match state.screen {
        Screen::MainMenu => menu_lines(state.selected),
        Screen::CustomerList => customer_lines(&state.customers, state.selected),
        Screen::ProductList => product_lines(&state.products, state.selected),
        Screen::CustomerForm | Screen::ProductForm => form_lines(state),
    }
}

fn selected_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn row(index: usize, selected: usize, text: String) -> Line<'static> {
    let text = format!("{}{}", marker(index, selected), text);
    if index == selected {
        Line::styled(text, selected_style())
    } else {
        Line::raw(text)
    }
}

// =============================================================================
// Main Menu
// =============================================================================

pub fn menu_lines(selected: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::raw("Seleziona un'opzione:"), Line::raw("")];
    lines.extend(
        MainMenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| row(i, selected, item.label().to_string())),
    );
    lines
}

// =============================================================================
// Lists
// =============================================================================

pub fn customer_row(customer: &Customer) -> String {
    format!(
        "{:<8}  {}  {}  {}",
        customer.code,
        pad_str(&customer.name, NAME_WIDTH),
        pad_str(customer.city.as_deref().unwrap_or(""), CITY_WIDTH),
        pad_str(customer.phone.as_deref().unwrap_or(""), PHONE_WIDTH),
    )
}

pub fn customer_lines(customers: &[Customer], selected: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled("📋 GESTIONE CLIENTI", title_style()),
        Line::raw(""),
        Line::raw(CUSTOMER_TABLE_HEADER),
        Line::raw(CUSTOMER_TABLE_RULE),
    ];

    lines.extend(
        customers
            .iter()
            .enumerate()
            .map(|(i, customer)| row(i, selected, customer_row(customer))),
    );

    if customers.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::raw(NO_CUSTOMERS));
    }
    lines
}

/// Price column text: the amount without the currency sign, two decimals.
fn price_amount(price: Money) -> String {
    let sign = if price.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, price.euros().abs(), price.cents_part())
}

pub fn product_row(product: &Product) -> String {
    format!(
        "{:<8}  {}  €{:<7}  {}",
        product.code,
        pad_str(&product.name, NAME_WIDTH),
        price_amount(product.price),
        product.stock,
    )
}

pub fn product_lines(products: &[Product], selected: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled("📦 GESTIONE PRODOTTI", title_style()),
        Line::raw(""),
        Line::raw(PRODUCT_TABLE_HEADER),
        Line::raw(PRODUCT_TABLE_RULE),
    ];

    lines.extend(
        products
            .iter()
            .enumerate()
            .map(|(i, product)| row(i, selected, product_row(product))),
    );

    if products.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::raw(NO_PRODUCTS));
    }
    lines
}

// =============================================================================
// Forms
// =============================================================================

pub fn form_title(screen: Screen, mode: Option<FormMode>) -> &'static str {
    let editing = mode == Some(FormMode::Edit);
    match (screen, editing) {
        (Screen::ProductForm, false) => "Nuovo Prodotto",
        (Screen::ProductForm, true) => "Modifica Prodotto",
        (_, false) => "Nuovo Cliente",
        (_, true) => "Modifica Cliente",
    }
}

pub fn form_lines(state: &AppState) -> Vec<Line<'static>> {
    let (subject, layout, example) = if state.screen == Screen::ProductForm {
        (
            "prodotto",
            "Nome|Codice|Prezzo|Descrizione",
            "Widget|P001|15.50|Descrizione del prodotto",
        )
    } else {
        (
            "cliente",
            "Nome|Codice|Città|Telefono|Email",
            "Mario Rossi|C001|Roma|06-123456|mario@email.it",
        )
    };

    vec![
        Line::styled(form_title(state.screen, state.form_mode), title_style()),
        Line::raw(""),
        Line::raw(format!("Inserisci i dati del {subject} separati da |:")),
        Line::raw(layout),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Dati attuali: "),
            Span::styled(state.form_buffer.clone(), selected_style()),
        ]),
        Line::raw(""),
        Line::raw(format!("Esempio: {example}")),
        Line::raw(""),
        Line::raw("Premi INVIO per salvare, ESC per annullare"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn customer(code: &str, name: &str, city: Option<&str>) -> Customer {
        Customer {
            id: 1,
            code: code.to_string(),
            name: name.to_string(),
            city: city.map(str::to_string),
            phone: Some("06-123456".to_string()),
            email: None,
            active: true,
            created_at: NaiveDateTime::default(),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_customer_row_columns() {
        let text = customer_row(&customer("CLI001", "ABC SRL", Some("Roma")));
        assert_eq!(
            text,
            "CLI001    ABC SRL                 Roma            06-123456   "
        );
    }

    #[test]
    fn test_customer_row_truncates_long_name() {
        let text = customer_row(&customer(
            "C004",
            "Industria Metalmeccanica Lombarda",
            None,
        ));
        assert!(text.contains("Industria Metalmecc..."));
    }

    #[test]
    fn test_customer_row_aligns_wide_names() {
        let narrow = customer_row(&customer("C1", "Rossi", Some("Roma")));
        let wide = customer_row(&customer("C2", "東京商事", Some("東京")));

        // Display columns before the phone number.
        let phone_col =
            |row: &str| unicode_width::UnicodeWidthStr::width(&row[..row.find("06-").unwrap()]);
        assert_eq!(phone_col(&narrow), phone_col(&wide));
    }

    #[test]
    fn test_product_row_price() {
        let product = Product {
            id: 1,
            code: "PROD001".to_string(),
            name: "Prodotto Esempio".to_string(),
            description: None,
            price: Money::from_cents(2550),
            stock: 10,
            min_stock: 2,
            active: true,
            created_at: NaiveDateTime::default(),
        };
        assert_eq!(
            product_row(&product),
            "PROD001   Prodotto Esempio        €25.50    10"
        );
    }

    #[test]
    fn test_list_selection_marker() {
        let customers = vec![
            customer("A", "Alfa", None),
            customer("B", "Beta", None),
        ];
        let lines = customer_lines(&customers, 1);
        assert!(line_text(&lines[4]).starts_with("  A"));
        assert!(line_text(&lines[5]).starts_with("▶ B"));
    }

    #[test]
    fn test_empty_lists_show_hint() {
        let lines = customer_lines(&[], 0);
        assert_eq!(line_text(lines.last().unwrap()), NO_CUSTOMERS);

        let lines = product_lines(&[], 0);
        assert_eq!(line_text(lines.last().unwrap()), NO_PRODUCTS);
    }

    #[test]
    fn test_form_titles() {
        assert_eq!(form_title(Screen::CustomerForm, Some(FormMode::New)), "Nuovo Cliente");
        assert_eq!(form_title(Screen::ProductForm, Some(FormMode::New)), "Nuovo Prodotto");
        assert_eq!(form_title(Screen::CustomerForm, Some(FormMode::Edit)), "Modifica Cliente");
        assert_eq!(form_title(Screen::ProductForm, Some(FormMode::Edit)), "Modifica Prodotto");
    }

    #[test]
    fn test_form_shows_buffer() {
        let mut state = AppState::default();
        state.screen = Screen::ProductForm;
        state.form_buffer = "Widget|P1".to_string();

        let lines = form_lines(&state);
        assert_eq!(line_text(&lines[0]), "Nuovo Prodotto");
        assert!(lines
            .iter()
            .any(|line| line_text(line) == "Dati attuali: Widget|P1"));
    }
}
