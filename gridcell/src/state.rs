use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Reactive state wrapper with interior mutability.
///
/// `State<T>` backs a renderer's local display state. It uses
/// `Arc<RwLock<T>>` internally, making it cheap to clone: clones share the
/// same value, so a renderer handed out to a host grid and the copy kept by
/// the caller observe the same state.
///
/// A dirty flag records that the value changed since the host last rendered;
/// the host checks it to schedule re-renders and clears it after drawing.
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new state with the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Set a new value unconditionally.
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set a new value only if it differs from the current one.
    ///
    /// Returns `true` if the value changed. An unchanged value neither
    /// writes nor marks the state dirty, so callers can feed this from a
    /// source that re-presents the same value every pass without triggering
    /// redundant re-renders.
    pub fn set_if_changed(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        if let Ok(mut guard) = self.inner.write()
            && *guard != value
        {
            *guard = value;
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Update the value using a closure.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the state has been modified since last check.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_marks_dirty() {
        let state = State::new(1);
        assert!(!state.is_dirty());
        state.set(2);
        assert_eq!(state.get(), 2);
        assert!(state.is_dirty());
    }

    #[test]
    fn set_if_changed_short_circuits_on_equal_value() {
        let state = State::new(true);
        assert!(!state.set_if_changed(true));
        assert!(!state.is_dirty());

        assert!(state.set_if_changed(false));
        assert!(!state.get());
        assert!(state.is_dirty());
    }

    #[test]
    fn clones_share_state() {
        let state = State::new(false);
        let clone = state.clone();
        clone.set(true);
        assert!(state.get());
        assert!(state.is_dirty());
        state.clear_dirty();
        assert!(!clone.is_dirty());
    }
}
