//! # Application State Machine
//!
//! The whole interactive flow of GAzie TUI as a pure reducer.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Event, One Transition                            │
//! │                                                                         │
//! │  key press ──► Input                                                   │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  AppState::update(old, input) ──► (new AppState, Option<Command>)      │
//! │                                          │                              │
//! │                          ┌───────────────┴───────────────┐              │
//! │                          ▼                               ▼              │
//! │                   None: render               Some(cmd): runtime runs    │
//! │                                              it against gazie-db and    │
//! │                                              feeds the outcome back:    │
//! │                                              apply_reload /             │
//! │                                              apply_customer_saved /     │
//! │                                              apply_product_saved        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Transition Table
//! ```text
//! From            Key                 To                 Effect
//! ──────────────  ──────────────────  ─────────────────  ─────────────────────
//! form            Cancel              MainMenu           drop buffer
//! non-form        Cancel              -                  Quit
//! MainMenu        Confirm (sel 0)     CustomerList       -
//! MainMenu        Confirm (sel 1)     ProductList        -
//! MainMenu        Confirm (sel 2)     -                  Quit
//! list            'n'                 matching form      clear buffer
//! list            'r'                 same               Reload
//! CustomerForm    Confirm             (after outcome)    InsertCustomer
//! ProductForm     Confirm             (after outcome)    InsertProduct
//! any             Up / Down           same               move selection
//! form            Backspace/Space/ch  same               edit buffer
//! ```
//!
//! The selection index is reset to 0 whenever the screen changes and is
//! clamped after every reload, so it always lies in `[0, N-1]` of the list
//! on screen (or is 0 when that list is empty).

use crate::form::{parse_customer_form, parse_product_form};
use crate::types::{
    Customer, FormMode, MainMenuItem, NewCustomer, NewProduct, Product, Screen,
};
use crate::validation::is_accepted_form_char;

/// Status line texts.
pub mod status {
    pub const WELCOME: &str = "Benvenuto in GAzie TUI";
    pub const CUSTOMERS: &str = "Gestione Clienti";
    pub const PRODUCTS: &str = "Gestione Prodotti";
    pub const NEW_CUSTOMER: &str = "Nuovo cliente";
    pub const NEW_PRODUCT: &str = "Nuovo prodotto";
    pub const CANCELLED: &str = "Annullato";
    pub const RELOADED: &str = "Dati aggiornati";
    pub const CUSTOMER_SAVED: &str = "Cliente salvato con successo";
    pub const PRODUCT_SAVED: &str = "Prodotto salvato con successo";
}

/// Key that opens a new-record form on a list screen.
pub const NEW_RECORD_KEY: char = 'n';

/// Key that reloads both lists on a list screen.
pub const RELOAD_KEY: char = 'r';

// =============================================================================
// Input & Command
// =============================================================================

/// A discrete user event, already decoupled from the terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Confirm,
    Cancel,
    Backspace,
    Space,
    Char(char),
    Resize { width: u16, height: u16 },
}

/// A side effect requested by a transition.
///
/// The state machine never performs I/O. The runtime executes the command
/// and reports the outcome through the `apply_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Terminate the process.
    Quit,
    /// Re-read both lists from the store.
    Reload,
    /// Insert a customer, then re-read the customer list.
    InsertCustomer(NewCustomer),
    /// Insert a product, then re-read the product list.
    InsertProduct(NewProduct),
}

// =============================================================================
// Application Snapshot
// =============================================================================

/// Everything the UI renders from.
///
/// Transitions take the snapshot by value and hand back a new one, so no
/// half-applied state is ever visible to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    /// Zero-based index into the list shown on `screen`.
    pub selected: usize,
    /// Customers ordered by name, as last read from the store.
    pub customers: Vec<Customer>,
    /// Products ordered by name, as last read from the store.
    pub products: Vec<Product>,
    /// Raw text of the form being typed.
    pub form_buffer: String,
    /// Set when a form is opened.
    pub form_mode: Option<FormMode>,
    pub status: String,
    /// Last known terminal size.
    pub width: u16,
    pub height: u16,
}

impl AppState {
    /// Creates the initial snapshot on the main menu.
    pub fn new(customers: Vec<Customer>, products: Vec<Product>) -> Self {
        AppState {
            screen: Screen::MainMenu,
            selected: 0,
            customers,
            products,
            form_buffer: String::new(),
            form_mode: None,
            status: status::WELCOME.to_string(),
            width: 0,
            height: 0,
        }
    }

    /// Length of the list the selection currently moves through.
    ///
    /// Form screens have no list of their own and use the menu bound.
    pub fn selection_len(&self) -> usize {
        match self.screen {
            Screen::CustomerList => self.customers.len(),
            Screen::ProductList => self.products.len(),
            Screen::MainMenu | Screen::CustomerForm | Screen::ProductForm => {
                MainMenuItem::ALL.len()
            }
        }
    }

    // =========================================================================
    // Transition Function
    // =========================================================================

    /// Applies one input and returns the next snapshot plus any side effect.
    pub fn update(mut self, input: Input) -> (Self, Option<Command>) {
        let command = match input {
            Input::Cancel => self.cancel(),
            Input::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            Input::Down => {
                if self.selected + 1 < self.selection_len() {
                    self.selected += 1;
                }
                None
            }
            Input::Confirm => self.confirm(),
            Input::Backspace => {
                if self.screen.is_form() {
                    self.form_buffer.pop();
                }
                None
            }
            Input::Space => {
                if self.screen.is_form() {
                    self.form_buffer.push(' ');
                }
                None
            }
            Input::Char(c) => self.char_typed(c),
            Input::Resize { width, height } => {
                self.width = width;
                self.height = height;
                None
            }
        };

        (self, command)
    }

    fn cancel(&mut self) -> Option<Command> {
        if !self.screen.is_form() {
            return Some(Command::Quit);
        }

        self.form_buffer.clear();
        self.status = status::CANCELLED.to_string();
        self.go_to(Screen::MainMenu);
        None
    }

    fn confirm(&mut self) -> Option<Command> {
        match self.screen {
            Screen::MainMenu => match MainMenuItem::from_index(self.selected)? {
                MainMenuItem::Customers => {
                    self.status = status::CUSTOMERS.to_string();
                    self.go_to(Screen::CustomerList);
                    None
                }
                MainMenuItem::Products => {
                    self.status = status::PRODUCTS.to_string();
                    self.go_to(Screen::ProductList);
                    None
                }
                MainMenuItem::Exit => Some(Command::Quit),
            },
            Screen::CustomerForm => {
                match parse_customer_form(&self.form_buffer, self.customers.len()) {
                    Ok(customer) => Some(Command::InsertCustomer(customer)),
                    Err(err) => {
                        self.status = err.to_string();
                        None
                    }
                }
            }
            Screen::ProductForm => {
                match parse_product_form(&self.form_buffer, self.products.len()) {
                    Ok(product) => Some(Command::InsertProduct(product)),
                    Err(err) => {
                        self.status = err.to_string();
                        None
                    }
                }
            }
            Screen::CustomerList | Screen::ProductList => None,
        }
    }

    fn char_typed(&mut self, c: char) -> Option<Command> {
        if self.screen.is_form() {
            if is_accepted_form_char(c) {
                self.form_buffer.push(c);
            }
            return None;
        }
        if !self.screen.is_list() {
            return None;
        }

        match c {
            NEW_RECORD_KEY => {
                self.open_form();
                None
            }
            RELOAD_KEY => Some(Command::Reload),
            _ => None,
        }
    }

    fn open_form(&mut self) {
        let (form, message) = match self.screen {
            Screen::CustomerList => (Screen::CustomerForm, status::NEW_CUSTOMER),
            Screen::ProductList => (Screen::ProductForm, status::NEW_PRODUCT),
            _ => return,
        };

        self.form_buffer.clear();
        self.form_mode = Some(FormMode::New);
        self.status = message.to_string();
        self.go_to(form);
    }

    fn go_to(&mut self, screen: Screen) {
        self.screen = screen;
        self.selected = 0;
    }

    fn clamp_selection(&mut self) {
        let len = self.selection_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    // =========================================================================
    // Command Outcomes
    // =========================================================================

    /// Replaces both lists after a reload.
    pub fn apply_reload(mut self, customers: Vec<Customer>, products: Vec<Product>) -> Self {
        self.customers = customers;
        self.products = products;
        self.status = status::RELOADED.to_string();
        self.clamp_selection();
        self
    }

    /// Applies the outcome of an `InsertCustomer` command.
    ///
    /// ## Arguments
    /// * `outcome` - the freshly re-read customer list, or the error text of
    ///   the failed insert
    ///
    /// On failure the screen and form buffer are left as they were so the
    /// user can fix the input and resubmit.
    pub fn apply_customer_saved(mut self, outcome: Result<Vec<Customer>, String>) -> Self {
        match outcome {
            Ok(customers) => {
                self.customers = customers;
                self.finish_form(Screen::CustomerList, status::CUSTOMER_SAVED);
            }
            Err(message) => self.status = format!("Errore: {message}"),
        }
        self
    }

    /// Applies the outcome of an `InsertProduct` command.
    pub fn apply_product_saved(mut self, outcome: Result<Vec<Product>, String>) -> Self {
        match outcome {
            Ok(products) => {
                self.products = products;
                self.finish_form(Screen::ProductList, status::PRODUCT_SAVED);
            }
            Err(message) => self.status = format!("Errore: {message}"),
        }
        self
    }

    fn finish_form(&mut self, list: Screen, message: &str) {
        self.form_buffer.clear();
        self.status = message.to_string();
        self.go_to(list);
    }
}

/// An empty snapshot on the main menu.
impl Default for AppState {
    fn default() -> Self {
        AppState::new(Vec::new(), Vec::new())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
