//! Per-cell capability set handed to renderers by the host grid.

use std::fmt;
use std::sync::{Arc, Mutex};

use log::{debug, trace};
use thiserror::Error;

use crate::events::CellEvent;

/// Callback through which a renderer reports a new value to the owning grid.
pub type SetValueFn = Arc<dyn Fn(bool) + Send + Sync>;

/// Errors raised while wiring a [`CellContext`].
#[derive(Debug, Error)]
pub enum CellContextError {
    /// The host never supplied a `set_value` callback.
    #[error("cell context is missing the set_value capability")]
    MissingSetValue,
}

/// The capability set a host grid supplies to a cell renderer.
///
/// Carries a snapshot of the cell's current external value, the `set_value`
/// callback that reports a new value upward, and a queue of [`CellEvent`]s
/// the host drains after dispatching an interaction.
///
/// The host rebuilds (or at least refreshes) the context every render pass
/// so the value snapshot tracks its data source. The context performs no
/// validation of the value and no retry of the callback: a `set_value` that
/// panics unwinds into the host.
pub struct CellContext {
    value: bool,
    set_value: SetValueFn,
    events: Mutex<Vec<CellEvent>>,
}

impl CellContext {
    /// Start building a context.
    pub fn builder() -> CellContextBuilder {
        CellContextBuilder::default()
    }

    /// The cell's current external value.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Report a new value to the owning grid.
    pub fn set_value(&self, next: bool) {
        debug!("cell context: set_value({next})");
        (self.set_value)(next);
    }

    /// Queue an event for the host to dispatch.
    pub fn push_event(&self, event: CellEvent) {
        trace!("cell context: push_event {event:?}");
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }

    /// Drain all queued events, oldest first.
    pub fn drain_events(&self) -> Vec<CellEvent> {
        match self.events.lock() {
            Ok(mut events) => events.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }
}

impl fmt::Debug for CellContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellContext")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CellContext`].
///
/// The value snapshot defaults to `false` when the host omits it; the
/// `set_value` capability is required.
#[derive(Default)]
pub struct CellContextBuilder {
    value: Option<bool>,
    set_value: Option<SetValueFn>,
}

impl CellContextBuilder {
    /// Set the cell's current external value.
    pub fn value(mut self, value: bool) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the callback invoked when the renderer reports a new value.
    pub fn on_set_value<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.set_value = Some(Arc::new(f));
        self
    }

    /// Build the context.
    pub fn build(self) -> Result<CellContext, CellContextError> {
        let set_value = self.set_value.ok_or(CellContextError::MissingSetValue)?;
        Ok(CellContext {
            value: self.value.unwrap_or_default(),
            set_value,
            events: Mutex::new(Vec::new()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::events::CellEventKind;

    #[test]
    fn builder_requires_set_value() {
        let err = CellContext::builder().value(true).build().unwrap_err();
        assert!(matches!(err, CellContextError::MissingSetValue));
    }

    #[test]
    fn set_value_invokes_host_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = {
            let calls = Arc::clone(&calls);
            CellContext::builder()
                .value(false)
                .on_set_value(move |next| {
                    assert!(next);
                    calls.fetch_add(1, Ordering::SeqCst);
                })
                .build()
                .unwrap()
        };
        seen.set_value(true);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn events_drain_in_order() {
        let cx = CellContext::builder().on_set_value(|_| {}).build().unwrap();
        cx.push_event(CellEvent::new(CellEventKind::Change, "a"));
        cx.push_event(CellEvent::new(CellEventKind::Change, "b"));

        let drained = cx.drain_events();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].widget_id, "a");
        assert_eq!(drained[1].widget_id, "b");
        assert!(cx.drain_events().is_empty());
    }
}
