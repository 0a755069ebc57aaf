//! Event handling for the checkbox cell.

use log::trace;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::cell::CellRenderer;
use crate::context::CellContext;
use crate::events::{CellEvent, CellEventKind, EventResult};
use crate::keybinds::{Key, KeyCombo};

use super::CheckboxCell;

impl CheckboxCell {
    /// Flip display state and notify the host: exactly one `set_value` call
    /// and one queued Change event per user toggle.
    fn activate(&self, cx: &CellContext) -> EventResult {
        let next = self.toggle();
        cx.set_value(next);
        cx.push_event(CellEvent::new(CellEventKind::Change, self.id_string()));
        EventResult::Consumed
    }
}

impl CellRenderer for CheckboxCell {
    fn id(&self) -> String {
        self.id_string()
    }

    fn sync(&self, cx: &CellContext) {
        if self.sync_value(cx.value()) {
            trace!("{}: display state resynced to {}", self.id_string(), cx.value());
        }
    }

    fn is_dirty(&self) -> bool {
        CheckboxCell::is_dirty(self)
    }

    fn clear_dirty(&self) {
        CheckboxCell::clear_dirty(self)
    }

    fn dispatch_click(&self, _x: u16, _y: u16, cx: &CellContext) -> EventResult {
        // Any click in the cell's hit area toggles.
        self.activate(cx)
    }

    fn dispatch_key(&self, key: &KeyCombo, cx: &CellContext) -> EventResult {
        // Only handle keys without modifiers
        if key.modifiers.any() {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Char(' ') | Key::Enter => self.activate(cx),
            _ => EventResult::Ignored,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let style = self.style();
        super::render::render_checkbox_cell(
            frame,
            self.is_checked(),
            style,
            ratatui::style::Style::default(),
            focused,
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Fake host: records every reported value.
    fn host_context(value: bool, reported: &Arc<Mutex<Vec<bool>>>) -> CellContext {
        let reported = Arc::clone(reported);
        CellContext::builder()
            .value(value)
            .on_set_value(move |next| {
                if let Ok(mut values) = reported.lock() {
                    values.push(next);
                }
            })
            .build()
            .unwrap()
    }

    #[test]
    fn click_when_unchecked_reports_true_once() {
        let reported = Arc::new(Mutex::new(Vec::new()));
        let cell = CheckboxCell::new(false);
        let cx = host_context(false, &reported);

        let result = cell.dispatch_click(0, 0, &cx);

        assert_eq!(result, EventResult::Consumed);
        assert!(cell.is_checked());
        assert_eq!(*reported.lock().unwrap(), vec![true]);

        let events = cx.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, CellEventKind::Change);
        assert_eq!(events[0].widget_id, cell.id_string());
    }

    #[test]
    fn click_when_checked_reports_false() {
        let reported = Arc::new(Mutex::new(Vec::new()));
        let cell = CheckboxCell::new(true);
        let cx = host_context(true, &reported);

        cell.dispatch_click(0, 0, &cx);

        assert!(!cell.is_checked());
        assert_eq!(*reported.lock().unwrap(), vec![false]);
    }

    #[test]
    fn click_is_consumed_so_host_selection_never_fires() {
        // The host only runs its own selection handler for Ignored results;
        // count how many clicks would fall through.
        let fell_through = AtomicUsize::new(0);
        let cell = CheckboxCell::new(false);
        let cx = CellContext::builder().on_set_value(|_| {}).build().unwrap();

        for _ in 0..3 {
            if !cell.dispatch_click(0, 0, &cx).is_handled() {
                fell_through.fetch_add(1, Ordering::SeqCst);
            }
        }
        assert_eq!(fell_through.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn sync_never_reports_upward() {
        let reported = Arc::new(Mutex::new(Vec::new()));
        let cell = CheckboxCell::new(false);

        let cx = host_context(true, &reported);
        cell.sync(&cx);
        assert!(cell.is_checked());

        let cx = host_context(true, &reported);
        cell.sync(&cx);

        assert!(reported.lock().unwrap().is_empty());
        assert!(cx.drain_events().is_empty());
    }

    #[test]
    fn redundant_sync_does_not_mark_dirty() {
        let cell = CheckboxCell::new(true);
        cell.clear_dirty();
        let cx = CellContext::builder()
            .value(true)
            .on_set_value(|_| {})
            .build()
            .unwrap();
        cell.sync(&cx);
        assert!(!CellRenderer::is_dirty(&cell));
    }

    #[test]
    fn space_and_enter_toggle_like_click() {
        let reported = Arc::new(Mutex::new(Vec::new()));
        let cell = CheckboxCell::new(false);
        let cx = host_context(false, &reported);

        assert_eq!(
            cell.dispatch_key(&KeyCombo::key(Key::Char(' ')), &cx),
            EventResult::Consumed
        );
        assert_eq!(
            cell.dispatch_key(&KeyCombo::key(Key::Enter), &cx),
            EventResult::Consumed
        );
        assert_eq!(*reported.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn modified_and_unrelated_keys_are_ignored() {
        let reported = Arc::new(Mutex::new(Vec::new()));
        let cell = CheckboxCell::new(false);
        let cx = host_context(false, &reported);

        assert_eq!(
            cell.dispatch_key(&KeyCombo::key(Key::Enter).ctrl(), &cx),
            EventResult::Ignored
        );
        assert_eq!(
            cell.dispatch_key(&KeyCombo::key(Key::Char('x')), &cx),
            EventResult::Ignored
        );
        assert!(reported.lock().unwrap().is_empty());
        assert!(!cell.is_checked());
    }

    #[test]
    fn toggle_then_row_reload_scenario() {
        // Mount unchecked, user toggles, then the host reloads row data and
        // pushes the old value back down.
        let reported = Arc::new(Mutex::new(Vec::new()));
        let cell = CheckboxCell::new(false);

        let cx = host_context(false, &reported);
        cell.sync(&cx);
        cell.dispatch_click(0, 0, &cx);
        assert!(cell.is_checked());
        assert_eq!(*reported.lock().unwrap(), vec![true]);
        assert_eq!(cx.drain_events().len(), 1);

        // Row reload: external value is false again.
        let cx = host_context(false, &reported);
        cell.sync(&cx);
        assert!(!cell.is_checked());
        // The sync triggered no further notification.
        assert_eq!(*reported.lock().unwrap(), vec![true]);
        assert!(cx.drain_events().is_empty());
    }
}
