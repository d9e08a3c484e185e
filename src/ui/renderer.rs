//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the browse or detail layout
//!
//! # Example
//!
//! ```rust
//! use toolshelf::app::AppState;
//! use toolshelf::catalog::Catalog;
//! use toolshelf::ui::{render, Theme};
//!
//! let state = AppState::new(Catalog::builtin()?, Theme::default());
//! render(&state, 24, 80); // Renders to stdout
//! # Ok::<(), toolshelf::ToolshelfError>(())
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; the
/// host redraws the pane before each call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Chooses the detail overlay while an entry is selected, the browse layout
/// otherwise.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(detail) = &vm.detail {
        components::render_detail_mode(vm, detail, theme, cols, rows);
    } else {
        components::render_browse_mode(vm, theme, cols, rows);
    }
}
