//! Zellij plugin entry point.
//!
//! This is the thin shim between the Zellij runtime and the library: it maps
//! Zellij events and keys to [`toolshelf::Event`]s, runs them through
//! [`handle_event`], and executes the resulting actions.
//!
//! # Permissions
//!
//! - `RunCommands`: open an entry's website with `xdg-open`
//! - `FullHdAccess`: read a `catalog_file` outside the plugin sandbox
//!
//! The built-in catalog needs neither, so the directory is usable while the
//! permission prompt is still open.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use toolshelf::app::AppState;
use toolshelf::catalog::Catalog;
use toolshelf::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Plugin state owned by the Zellij runtime.
struct State {
    app: AppState,

    /// Catalog file waiting on the `FullHdAccess` permission.
    catalog_file: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: toolshelf::initialize(&Config::default()),
            catalog_file: None,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        toolshelf::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            catalog_file = ?config.catalog_file,
            theme = ?config.theme_name,
            sort = %config.sort.as_str(),
            "parsed configuration"
        );
        self.app = toolshelf::initialize(&config);
        self.catalog_file.clone_from(&config.catalog_file);

        request_permission(&[PermissionType::RunCommands, PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::PermissionRequestResult,
            EventType::RunCommandResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _span = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match self.handle_permission_result(status) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, _context) => {
                if exit_code != Some(0) {
                    let error = String::from_utf8_lossy(&stderr);
                    tracing::warn!(exit_code = ?exit_code, error = %error, "open command failed");
                }
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        toolshelf::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps a key press to an application event for the current mode.
    ///
    /// The detail overlay takes precedence over the input mode. While the
    /// query has focus, every printable key is text.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        if self.app.selection.is_open() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseDetails),
                BareKey::Char('o') => Some(Event::OpenWebsite),
                BareKey::Down | BareKey::Char('j') => Some(Event::NextDetails),
                BareKey::Up | BareKey::Char('k') => Some(Event::PreviousDetails),
                BareKey::Char('n') if ctrl => Some(Event::NextDetails),
                BareKey::Char('p') if ctrl => Some(Event::PreviousDetails),
                _ => None,
            };
        }

        if ctrl {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Search(SearchFocus::Typing) => Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::FocusResults,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Search(SearchFocus::Navigating) => Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::OpenDetails,
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('/') => Event::FocusSearchBar,
                BareKey::Backspace => Event::FocusSearchBar,
                BareKey::Char('o') => Event::OpenWebsite,
                BareKey::Char('x') => Event::ClearAll,
                _ => return None,
            }),
            InputMode::Browse => Self::map_browse_key(key.bare_key),
        }
    }

    fn map_browse_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::OpenDetails,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('c') => Event::CycleCategory { forward: true },
            BareKey::Char('C') => Event::CycleCategory { forward: false },
            BareKey::Char('p') => Event::CyclePrice { forward: true },
            BareKey::Char('P') => Event::CyclePrice { forward: false },
            BareKey::Char('s') => Event::CycleSort { forward: true },
            BareKey::Char('S') => Event::CycleSort { forward: false },
            BareKey::Char('x') => Event::ClearAll,
            BareKey::Char('o') => Event::OpenWebsite,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::ClearSearch,
            _ => return None,
        })
    }

    /// Loads the configured catalog file once the host allows it.
    ///
    /// Returns the `CatalogLoaded` event to feed back through the handler,
    /// or `None` when the built-in catalog is in use.
    fn handle_permission_result(&self, status: PermissionStatus) -> Option<Event> {
        let path = self.catalog_file.as_ref()?;

        match status {
            PermissionStatus::Granted => {
                tracing::debug!(path = %path, "permissions granted - loading catalog file");
                let result = Catalog::from_file(path).map_err(|e| e.to_string());
                if let Err(error) = &result {
                    tracing::error!(path = %path, error = %error, "catalog file rejected");
                }
                Some(Event::CatalogLoaded(result))
            }
            PermissionStatus::Denied => {
                tracing::warn!(path = %path, "permissions denied - cannot read catalog file");
                Some(Event::CatalogLoaded(Err(format!(
                    "permission to read {path} was denied"
                ))))
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::OpenWebsite { url } => {
                tracing::debug!(url = %url, "opening website");
                run_command(&["xdg-open", url.as_str()], BTreeMap::new());
            }
        }
    }
}
