//! End-to-end sign-up flows, from key presses to the account hook.

use fruitstand::account::{submit, AccountReceipt, AccountService, DiagnosticAccountService, SignUpRequest};
use fruitstand::app::{map_key, FormField};
use fruitstand::ui::render_to_string;
use fruitstand::{handle_event, initialize, Action, AppState, Config, Event, FruitstandError, Screen};
use zellij_tile::prelude::{BareKey, KeyWithModifier};

fn press(state: &mut AppState, bare: BareKey) -> Vec<Action> {
    let key = KeyWithModifier::new(bare);
    match map_key(state, &key) {
        Some(event) => handle_event(state, &event).unwrap().1,
        None => vec![],
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, BareKey::Char(c));
    }
}

fn sign_up_state() -> AppState {
    let mut state = initialize(&Config::default());
    press(&mut state, BareKey::Tab);
    assert_eq!(state.screen, Screen::SignUp);
    state
}

/// Refuses every submission.
struct ClosedRegistry;

impl AccountService for ClosedRegistry {
    fn create_account(&mut self, _request: &SignUpRequest) -> fruitstand::Result<AccountReceipt> {
        Err(FruitstandError::Account("registrations are closed".to_string()))
    }
}

#[test]
fn field_errors_follow_every_keystroke() {
    let mut state = sign_up_state();
    let frame = render_to_string(&state, 30, 80);
    assert!(!frame.contains("Invalid email"));
    assert!(!frame.contains("Email is required"));

    press(&mut state, BareKey::Down);
    type_text(&mut state, "ana");
    assert!(render_to_string(&state, 30, 80).contains("Invalid email"));

    type_text(&mut state, "@fruit.co");
    assert!(!render_to_string(&state, 30, 80).contains("Invalid email"));

    press(&mut state, BareKey::Tab);
    type_text(&mut state, "123");
    let frame = render_to_string(&state, 30, 80);
    assert!(frame.contains("Password must be at least 6 digits"));
    assert!(frame.contains("•••"));
    assert!(!frame.contains("123"));
}

#[test]
fn untouched_form_shows_generic_alert() {
    let mut state = sign_up_state();
    press(&mut state, BareKey::Up);
    assert_eq!(state.form.focus, FormField::Submit);

    let actions = press(&mut state, BareKey::Enter);
    assert!(actions.is_empty());
    assert!(render_to_string(&state, 30, 80).contains("Please enter valid information"));

    press(&mut state, BareKey::Enter);
    assert!(!state.form.showing_alert);
    assert_eq!(state.screen, Screen::SignUp);
}

#[test]
fn valid_form_reaches_account_service() {
    let mut state = sign_up_state();
    type_text(&mut state, "Ana");
    press(&mut state, BareKey::Enter);
    type_text(&mut state, "ana@fruit.co");
    press(&mut state, BareKey::Enter);
    type_text(&mut state, "secret1");
    press(&mut state, BareKey::Enter);
    assert_eq!(state.form.focus, FormField::Submit);

    let actions = press(&mut state, BareKey::Enter);
    let [Action::SubmitSignUp(request)] = actions.as_slice() else {
        panic!("expected one submit action, got {actions:?}");
    };

    let mut service = DiagnosticAccountService::default();
    let outcome = submit(&mut service, request);
    handle_event(&mut state, &outcome).unwrap();

    assert_eq!(service.submissions(), 1);
    assert!(render_to_string(&state, 30, 80).contains("Signed up ana@fruit.co"));
}

#[test]
fn failing_service_leaves_form_in_place() {
    let mut state = sign_up_state();
    for (field, value) in [(FormField::Email, "ana@fruit.co"), (FormField::Password, "secret1")] {
        handle_event(
            &mut state,
            &Event::FieldChanged {
                field,
                value: value.to_string(),
            },
        )
        .unwrap();
    }

    let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
    let [Action::SubmitSignUp(request)] = actions.as_slice() else {
        panic!("expected one submit action");
    };
    let outcome = submit(&mut ClosedRegistry, request);
    assert_eq!(handle_event(&mut state, &outcome).unwrap(), (false, vec![]));
    assert_eq!(state.form.receipt, None);
    assert_eq!(state.form.email, "ana@fruit.co");
}

#[test]
fn leaving_the_tab_discards_input() {
    let mut state = sign_up_state();
    type_text(&mut state, "Ana");
    press(&mut state, BareKey::Esc);
    assert_eq!(state.screen, Screen::Catalog);

    press(&mut state, BareKey::Tab);
    assert_eq!(state.form.name, "");
    assert_eq!(state.form.focus, FormField::Name);
}
