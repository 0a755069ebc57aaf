//! The cell-renderer extension seam.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::context::CellContext;
use crate::events::EventResult;
use crate::keybinds::KeyCombo;

/// Trait for pluggable cell renderers.
///
/// A host grid stores one renderer per interactive cell (typically as
/// `Box<dyn CellRenderer>`) and drives it through three duties:
///
/// - **Synchronization**: [`sync`](CellRenderer::sync) is called every render
///   pass with the current [`CellContext`]; the renderer re-derives its local
///   display state from `cx.value()`. The external value is the source of
///   truth — local state only ever mirrors it or a pending toggle that has
///   already been reported upward.
/// - **Rendering**: [`render`](CellRenderer::render) draws into the
///   host-provided cell area.
/// - **Dispatch**: clicks landing in the cell's hit area and keys pressed
///   while the cell is focused are routed to the renderer. Returning
///   [`EventResult::Consumed`] stops propagation; the host must not run its
///   own selection or keybind handling for a consumed event.
///
/// All methods have default implementations where a default makes sense, so
/// renderers only implement what they care about.
pub trait CellRenderer: Send + Sync {
    /// Stable widget ID, used to correlate queued events with this cell.
    fn id(&self) -> String;

    /// Re-derive local display state from the external value.
    fn sync(&self, cx: &CellContext);

    /// Check if the renderer needs a re-render.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after rendering.
    fn clear_dirty(&self);

    /// Whether the cell can take keyboard focus.
    fn is_focusable(&self) -> bool {
        true
    }

    /// Preferred width in terminal columns.
    fn intrinsic_width(&self) -> u16 {
        1
    }

    /// Preferred height in terminal rows.
    fn intrinsic_height(&self) -> u16 {
        1
    }

    /// Handle a click at the given position within the cell area.
    fn dispatch_click(&self, x: u16, y: u16, cx: &CellContext) -> EventResult;

    /// Handle a key event while the cell is focused.
    fn dispatch_key(&self, _key: &KeyCombo, _cx: &CellContext) -> EventResult {
        EventResult::Ignored
    }

    /// Draw the cell content into the given area.
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool);
}
