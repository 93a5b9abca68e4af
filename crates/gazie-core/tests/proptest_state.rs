//! Property-based tests for the application state machine.
//!
//! These tests drive `AppState::update` with arbitrary key sequences and
//! check the invariants that must hold after every single transition.

use chrono::NaiveDateTime;
use gazie_core::app::{AppState, Command, Input};
use gazie_core::money::Money;
use gazie_core::{Customer, Product, Screen};
use proptest::prelude::*;

fn customers(count: usize) -> Vec<Customer> {
    (0..count)
        .map(|i| Customer {
            id: i as i64 + 1,
            code: format!("CLI{:03}", i + 1),
            name: format!("Cliente {i}"),
            city: None,
            phone: None,
            email: None,
            active: true,
            created_at: NaiveDateTime::default(),
        })
        .collect()
}

fn products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            id: i as i64 + 1,
            code: format!("P{:03}", i + 1),
            name: format!("Prodotto {i}"),
            description: None,
            price: Money::from_cents(100 * i as i64),
            stock: 0,
            min_stock: 0,
            active: true,
            created_at: NaiveDateTime::default(),
        })
        .collect()
}

fn arb_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => Just(Input::Up),
        4 => Just(Input::Down),
        2 => Just(Input::Confirm),
        1 => Just(Input::Cancel),
        1 => Just(Input::Backspace),
        1 => Just(Input::Space),
        3 => any::<char>().prop_map(Input::Char),
        2 => Just(Input::Char('n')),
        1 => Just(Input::Char('r')),
        1 => (1u16..300, 1u16..100).prop_map(|(width, height)| Input::Resize { width, height }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The selection always lies inside the list on screen.
    #[test]
    fn selection_stays_in_bounds(
        customer_count in 0usize..6,
        product_count in 0usize..6,
        inputs in prop::collection::vec(arb_input(), 0..60),
    ) {
        let mut state = AppState::new(customers(customer_count), products(product_count));

        for input in inputs {
            let (next, command) = state.update(input);
            state = next;
            if command == Some(Command::Quit) {
                break;
            }

            let len = state.selection_len();
            if len == 0 {
                prop_assert_eq!(state.selected, 0);
            } else {
                prop_assert!(state.selected < len, "selected {} of {}", state.selected, len);
            }
        }
    }

    /// Only accepted characters ever reach the form buffer.
    #[test]
    fn form_buffer_holds_only_accepted_chars(
        inputs in prop::collection::vec(arb_input(), 0..60),
    ) {
        let mut state = AppState::new(customers(2), products(2));

        for input in inputs {
            let (next, command) = state.update(input);
            state = next;
            if command == Some(Command::Quit) {
                break;
            }

            prop_assert!(state
                .form_buffer
                .chars()
                .all(|c| c == ' ' || gazie_core::validation::is_accepted_form_char(c)));
        }
    }

    /// Cancelling a form always lands on the main menu with an empty buffer.
    #[test]
    fn cancel_from_form_returns_to_menu(
        text in "[a-zA-Z0-9|.@_-]{0,40}",
        products_form in any::<bool>(),
    ) {
        let opening = if products_form {
            vec![Input::Down, Input::Confirm, Input::Char('n')]
        } else {
            vec![Input::Confirm, Input::Char('n')]
        };

        let mut state = AppState::new(customers(3), products(3));
        for input in opening.into_iter().chain(text.chars().map(Input::Char)) {
            state = state.update(input).0;
        }
        prop_assert!(state.screen.is_form());

        let (state, command) = state.update(Input::Cancel);
        prop_assert_eq!(command, None);
        prop_assert_eq!(state.screen, Screen::MainMenu);
        prop_assert!(state.form_buffer.is_empty());
        prop_assert_eq!(state.selected, 0);
    }

    /// A form with fewer than four fields never produces an insert.
    #[test]
    fn short_form_never_inserts(
        fields in prop::collection::vec("[a-zA-Z0-9]{0,8}", 0..4),
    ) {
        let mut state = AppState::new(customers(3), products(3));
        for input in [Input::Confirm, Input::Char('n')] {
            state = state.update(input).0;
        }
        for c in fields.join("|").chars() {
            state = state.update(Input::Char(c)).0;
        }

        let before = state.form_buffer.clone();
        let (state, command) = state.update(Input::Confirm);

        prop_assert_eq!(command, None);
        prop_assert_eq!(state.screen, Screen::CustomerForm);
        prop_assert_eq!(state.form_buffer, before);
        prop_assert!(state.status.starts_with("Errore: "));
    }
}
