//! Cell event handling types.
//!
//! Renderers push events onto the [`CellContext`](crate::context::CellContext)
//! queue during dispatch; the host grid drains the queue after each user
//! interaction and routes the events to its own handlers.

/// Identifies which handler the host should call for a cell event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEventKind {
    /// The cell's value changed through user interaction.
    ///
    /// The only kind a leaf value editor emits today; the new value itself
    /// travels through `set_value`, not through the event.
    Change,
}

/// A cell event to be dispatched by the host grid.
#[derive(Debug, Clone)]
pub struct CellEvent {
    /// Which kind of event.
    pub kind: CellEventKind,
    /// Widget ID of the renderer that triggered the event.
    pub widget_id: String,
}

impl CellEvent {
    /// Create a new cell event.
    pub fn new(kind: CellEventKind, widget_id: impl Into<String>) -> Self {
        Self {
            kind,
            widget_id: widget_id.into(),
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    ///
    /// A `Consumed` click must not reach the host's row or cell selection
    /// handlers; the renderer has fully absorbed the interaction.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
