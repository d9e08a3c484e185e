//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain,
//! catalog and engine layers. It owns the session state and implements the
//! event-driven flow that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                            │
//!                                            └→ View Model → Render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`intro`]: Intro panel visibility rules
//! - [`modes`]: Input mode state machine types
//! - [`selection`]: Detail overlay selection
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use toolshelf::app::{handle_event, AppState, Event};
//! use toolshelf::catalog::Catalog;
//! use toolshelf::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin()?, Theme::default());
//! handle_event(&mut state, &Event::OpenDetails)?;
//! assert!(state.selection.is_open());
//! # Ok::<(), toolshelf::ToolshelfError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod intro;
pub mod modes;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use intro::IntroPanel;
pub use modes::{InputMode, SearchFocus};
pub use selection::Selection;
pub use state::{AppState, CatalogStatus};
