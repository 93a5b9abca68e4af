//! # Effect Runtime
//!
//! Runs the state machine and carries out the commands it returns.
//!
//! ## Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dispatch(input)                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppState::update ──► (state, command)                                 │
//! │       │                                                                 │
//! │       ├── None                 → Flow::Continue                        │
//! │       ├── Quit                 → Flow::Quit                            │
//! │       ├── Reload               → list both tables → apply_reload       │
//! │       ├── InsertCustomer(new)  → insert → list customers               │
//! │       │                          → apply_customer_saved                │
//! │       └── InsertProduct(new)   → insert → list products                │
//! │                                  → apply_product_saved                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command finishes before `dispatch` returns, so the next key press
//! always sees the outcome of the previous one.

use gazie_core::app::{AppState, Command, Input};
use gazie_core::{Customer, NewCustomer, NewProduct, Product};
use gazie_db::Database;
use tracing::{debug, info, warn};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the current snapshot and the database handle.
pub struct Runtime {
    state: AppState,
    db: Database,
}

impl Runtime {
    /// Loads both lists and builds the initial snapshot.
    pub async fn start(db: Database) -> Self {
        let (customers, products) = load_lists(&db).await;
        info!(
            customers = customers.len(),
            products = products.len(),
            "Initial data loaded"
        );

        Runtime {
            state: AppState::new(customers, products),
            db,
        }
    }

    /// The snapshot to render.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies one input and executes the command it produces.
    pub async fn dispatch(&mut self, input: Input) -> Flow {
        let (state, command) = std::mem::take(&mut self.state).update(input);
        self.state = state;

        let Some(command) = command else {
            return Flow::Continue;
        };
        debug!(?command, "Executing command");

        match command {
            Command::Quit => return Flow::Quit,
            Command::Reload => {
                let (customers, products) = load_lists(&self.db).await;
                self.state = std::mem::take(&mut self.state).apply_reload(customers, products);
            }
            Command::InsertCustomer(customer) => {
                let outcome = self.insert_customer(&customer).await;
                self.state = std::mem::take(&mut self.state).apply_customer_saved(outcome);
            }
            Command::InsertProduct(product) => {
                let outcome = self.insert_product(&product).await;
                self.state = std::mem::take(&mut self.state).apply_product_saved(outcome);
            }
        }

        Flow::Continue
    }

    async fn insert_customer(&self, customer: &NewCustomer) -> Result<Vec<Customer>, String> {
        let repo = self.db.customers();
        match repo.insert(customer).await {
            Ok(id) => {
                info!(id, code = %customer.code, "Customer saved");
                Ok(repo.list_or_empty().await)
            }
            Err(err) => {
                warn!(code = %customer.code, error = %err, "Customer insert failed");
                Err(err.to_string())
            }
        }
    }

    async fn insert_product(&self, product: &NewProduct) -> Result<Vec<Product>, String> {
        let repo = self.db.products();
        match repo.insert(product).await {
            Ok(id) => {
                info!(id, code = %product.code, "Product saved");
                Ok(repo.list_or_empty().await)
            }
            Err(err) => {
                warn!(code = %product.code, error = %err, "Product insert failed");
                Err(err.to_string())
            }
        }
    }
}

async fn load_lists(db: &Database) -> (Vec<Customer>, Vec<Product>) {
    let customers = db.customers().list_or_empty().await;
    let products = db.products().list_or_empty().await;
    (customers, products)
}

// =============================================================================
// End-to-End Tests
// =============================================================================
