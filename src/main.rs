//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the fruitstand library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait, turns
//! host events into reducer events and runs the actions the reducer returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build the catalog and `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult` and `PermissionRequestResult`
//! 3. **Permissions**: On grant, the reducer requests every card image
//! 4. **Update**: Map events, run the reducer, execute actions
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key` → [`fruitstand::app::map_key`] (depends on screen and input mode)
//! - `WebRequestResult` → `Event::ImageLoaded` / `Event::ImageFailed`
//! - `PermissionRequestResult` → `Event::PermissionsGranted` / `Event::PermissionsDenied`
//!
//! # Action Execution
//!
//! - `CloseFocus` → `hide_self()`
//! - `FetchImage` → `web_request` to the escaped URL, with the card id in the request context
//! - `SubmitSignUp` → the [`AccountService`]; its outcome is fed back to the reducer
//!
//! Outside `wasm32` the plugin cannot run, and `main` only prints a hint.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use fruitstand::account::{self, AccountService, DiagnosticAccountService};
#[cfg(target_family = "wasm")]
use fruitstand::{handle_event, Action, Config, Event};
#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!(
        "fruitstand {} is a Zellij plugin: build it with `cargo build --target wasm32-wasip1` and load the .wasm from a layout",
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(target_family = "wasm")]
struct State {
    app: fruitstand::AppState,

    accounts: Box<dyn AccountService>,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: fruitstand::initialize(&Config::default()),
            accounts: Box::new(DiagnosticAccountService::default()),
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        let tracing_enabled = fruitstand::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(tracing_enabled = tracing_enabled, config = ?config, "parsed configuration");
        self.app = fruitstand::initialize(&config);

        request_permission(&fruitstand::infrastructure::REQUIRED_PERMISSIONS);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match fruitstand::app::map_key(&self.app, key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match fruitstand::infrastructure::image_event(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                Event::PermissionsGranted
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                Event::PermissionsDenied
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        fruitstand::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Runs one event through the reducer, then its actions.
    ///
    /// Actions that produce a follow-up event (the account hook) dispatch it in
    /// turn. Returns whether any step asked for a render.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                let mut render = should_render;
                for action in actions {
                    if let Some(follow_up) = self.execute_action(action) {
                        render |= self.dispatch(&follow_up);
                    }
                }
                render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) -> Option<Event> {
        match action {
            Action::CloseFocus => {
                hide_self();
                None
            }
            Action::FetchImage { id, url } => {
                web_request(
                    fruitstand::infrastructure::request_url(&url),
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    fruitstand::infrastructure::request_context(&id),
                );
                None
            }
            Action::SubmitSignUp(request) => Some(account::submit(self.accounts.as_mut(), &request)),
        }
    }
}
