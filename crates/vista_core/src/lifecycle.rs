//! Deferred-initialization cells
//!
//! Some page state is only known after mount: the persisted theme preference
//! is the canonical example. Rather than scattering a `mounted` flag through
//! render code, such state lives in a [`Lifecycle`] cell. Consumers treat
//! `Uninitialized` as a distinct state that renders as nothing.
//!
//! The transition is one-directional: once a cell is `Ready` it never goes
//! back to `Uninitialized`.

/// State with a one-time `Uninitialized -> Ready(T)` transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle<T> {
    /// Value not yet known; render must be suppressed
    Uninitialized,
    /// Value known and held for the rest of the page's lifetime
    Ready(T),
}

impl<T> Default for Lifecycle<T> {
    fn default() -> Self {
        Lifecycle::Uninitialized
    }
}

impl<T> Lifecycle<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Lifecycle::Ready(_))
    }

    /// Borrow the value if the cell is ready
    pub fn get(&self) -> Option<&T> {
        match self {
            Lifecycle::Ready(value) => Some(value),
            Lifecycle::Uninitialized => None,
        }
    }

    /// Consume the cell, returning the value if ready
    pub fn ready(self) -> Option<T> {
        match self {
            Lifecycle::Ready(value) => Some(value),
            Lifecycle::Uninitialized => None,
        }
    }

    pub fn as_ref(&self) -> Lifecycle<&T> {
        match self {
            Lifecycle::Ready(value) => Lifecycle::Ready(value),
            Lifecycle::Uninitialized => Lifecycle::Uninitialized,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lifecycle<U> {
        match self {
            Lifecycle::Ready(value) => Lifecycle::Ready(f(value)),
            Lifecycle::Uninitialized => Lifecycle::Uninitialized,
        }
    }

    /// Perform the one-time transition to `Ready`.
    ///
    /// Returns `false` (leaving the current value untouched) if the cell was
    /// already initialized.
    pub fn initialize(&mut self, value: T) -> bool {
        if self.is_ready() {
            return false;
        }
        *self = Lifecycle::Ready(value);
        true
    }

    /// Replace the value of a ready cell.
    ///
    /// Returns the previous value, or `None` (without storing anything) if
    /// the cell is still uninitialized.
    pub fn replace(&mut self, value: T) -> Option<T> {
        match self {
            Lifecycle::Ready(current) => Some(std::mem::replace(current, value)),
            Lifecycle::Uninitialized => None,
        }
    }
}

impl<T> From<Option<T>> for Lifecycle<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lifecycle::Ready(value),
            None => Lifecycle::Uninitialized,
        }
    }
}
