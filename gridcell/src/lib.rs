//! Pluggable cell renderers for ratatui data grids.
//!
//! A host grid draws most cells itself; for cells that need interactive
//! editors it delegates to a [`cell::CellRenderer`]. The host hands the
//! renderer a [`context::CellContext`] carrying the cell's current data
//! value and a `set_value` callback, and drives the renderer through
//! sync, render, and event dispatch.
//!
//! The one renderer shipped here is [`checkbox::CheckboxCell`]: a boolean
//! editor that mirrors the external value, toggles on click or Space/Enter,
//! and reports each toggle upward exactly once.

pub mod cell;
pub mod checkbox;
pub mod context;
pub mod events;
pub mod keybinds;
pub mod state;

pub mod prelude {
    //! Prelude module for convenient imports.
    //!
    //! ```ignore
    //! use gridcell::prelude::*;
    //! ```

    pub use crate::cell::CellRenderer;
    pub use crate::checkbox::{CheckboxCell, CheckboxCellId, CheckboxStyle};
    pub use crate::context::{CellContext, CellContextBuilder, CellContextError};
    pub use crate::events::{CellEvent, CellEventKind, EventResult};
    pub use crate::keybinds::{Key, KeyCombo, Modifiers};
    pub use crate::state::State;
}
