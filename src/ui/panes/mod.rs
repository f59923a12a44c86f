//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over the current [`Step`] and
//! a few bits of app state.
//!
//! # Pane Modules
//!
//! - [`bars`]: the array as a bar chart, colored by what each index is doing
//! - [`source`]: the reference listing with the current line marked
//! - [`narrative`]: phase badge and plain-language description of the step
//! - [`guide`]: what selection sort does, its complexity and stability
//! - [`editor`]: popup for typing in custom data
//! - [`status`]: status bar with keybindings and playback state
//!
//! [`Step`]: crate::trace::Step

pub mod bars;
pub mod editor;
pub mod guide;
pub mod narrative;
pub mod source;
pub mod status;

pub use bars::{bar_role, render_bars_pane, BarRole};
pub use editor::{render_editor_popup, DataEditor};
pub use guide::render_guide_pane;
pub use narrative::render_narrative_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
