//! Checkbox cell renderer - a toggleable checkbox bound to a grid cell's
//! boolean value.

pub mod events;
pub mod render;
mod state;

pub use state::{CheckboxCell, CheckboxCellId, CheckboxStyle};
