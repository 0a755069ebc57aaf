//! Checkbox cell state.

use std::sync::atomic::{AtomicUsize, Ordering};

use ratatui::layout::Alignment;
use serde::{Deserialize, Serialize};

use crate::state::State;

/// Serde mirror for [`Alignment`], which lacks serde impls in ratatui 0.29.
#[derive(Serialize, Deserialize)]
#[serde(remote = "Alignment")]
enum AlignmentDef {
    Left,
    Center,
    Right,
}

/// Unique identifier for a CheckboxCell instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckboxCellId(usize);

impl CheckboxCellId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for CheckboxCellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__checkbox_cell_{}", self.0)
    }
}

/// Presentation knobs for a checkbox cell.
///
/// Presentational only; not part of the functional contract. The default
/// packs the indicator against the cell's trailing edge, where grids
/// conventionally place boolean editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxStyle {
    /// Character to display when checked.
    pub checked_char: char,
    /// Character to display when unchecked.
    pub unchecked_char: char,
    /// Horizontal alignment within the cell area.
    #[serde(with = "AlignmentDef")]
    pub align: Alignment,
}

impl Default for CheckboxStyle {
    fn default() -> Self {
        Self {
            checked_char: '■',
            unchecked_char: '□',
            align: Alignment::Right,
        }
    }
}

/// A checkbox renderer for one grid cell.
///
/// The cell mirrors an externally owned boolean: display state initializes
/// from the external value and is re-derived from it on every
/// [`sync_value`](CheckboxCell::sync_value). A user toggle flips display
/// state locally so the control responds immediately, and the new value is
/// reported upward through the cell context; the host remains the source of
/// truth and may push any value back on the next sync.
///
/// Clones share state, so the host can keep a handle to a renderer it has
/// boxed into its cell table.
#[derive(Debug)]
pub struct CheckboxCell {
    /// Unique identifier for this cell instance.
    id: CheckboxCellId,
    /// Local display state.
    checked: State<bool>,
    /// Presentation configuration, fixed at construction.
    style: CheckboxStyle,
}

impl CheckboxCell {
    /// Create a cell whose display state starts at the given external value.
    pub fn new(value: bool) -> Self {
        Self {
            id: CheckboxCellId::new(),
            checked: State::new(value),
            style: CheckboxStyle::default(),
        }
    }

    /// Replace the presentation configuration.
    pub fn with_style(mut self, style: CheckboxStyle) -> Self {
        self.style = style;
        self
    }

    /// Set custom indicator characters.
    pub fn with_indicators(mut self, checked: char, unchecked: char) -> Self {
        self.style.checked_char = checked;
        self.style.unchecked_char = unchecked;
        self
    }

    /// Set the horizontal alignment within the cell.
    pub fn align(mut self, align: Alignment) -> Self {
        self.style.align = align;
        self
    }

    /// Get the unique ID for this cell.
    pub fn id(&self) -> CheckboxCellId {
        self.id
    }

    /// Get the ID as a string (for event correlation).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Check if the checkbox is displayed as checked.
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Get the presentation configuration.
    pub fn style(&self) -> CheckboxStyle {
        self.style
    }

    /// Re-derive display state from the external value.
    ///
    /// Returns `true` if the display state changed. An external value equal
    /// to the current display state is a no-op: no dirty mark, no re-render.
    pub fn sync_value(&self, value: bool) -> bool {
        self.checked.set_if_changed(value)
    }

    /// Flip the display state, returning the new value.
    pub fn toggle(&self) -> bool {
        let mut next = false;
        self.checked.update(|v| {
            *v = !*v;
            next = *v;
        });
        next
    }

    /// Check if the display state changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.checked.is_dirty()
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.checked.clear_dirty();
    }
}

impl Clone for CheckboxCell {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            checked: self.checked.clone(),
            style: self.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_reflects_external_value() {
        assert!(CheckboxCell::new(true).is_checked());
        assert!(!CheckboxCell::new(false).is_checked());
    }

    #[test]
    fn sync_follows_external_changes() {
        let cell = CheckboxCell::new(false);
        assert!(cell.sync_value(true));
        assert!(cell.is_checked());
        assert!(cell.sync_value(false));
        assert!(!cell.is_checked());
    }

    #[test]
    fn sync_with_unchanged_value_is_a_noop() {
        let cell = CheckboxCell::new(true);
        cell.clear_dirty();
        assert!(!cell.sync_value(true));
        assert!(!cell.is_dirty());
    }

    #[test]
    fn toggle_flips_and_marks_dirty() {
        let cell = CheckboxCell::new(false);
        assert!(cell.toggle());
        assert!(cell.is_checked());
        assert!(cell.is_dirty());
        assert!(!cell.toggle());
        assert!(!cell.is_checked());
    }

    #[test]
    fn clones_share_display_state() {
        let cell = CheckboxCell::new(false);
        let clone = cell.clone();
        clone.toggle();
        assert!(cell.is_checked());
        assert_eq!(cell.id(), clone.id());
    }

    #[test]
    fn ids_are_unique() {
        let a = CheckboxCell::new(false);
        let b = CheckboxCell::new(false);
        assert_ne!(a.id(), b.id());
    }
}
