//! Theme state holder
//!
//! The active color scheme is unknown until the page mounts and reads the
//! stored preference. Until then the holder reports
//! [`Lifecycle::Uninitialized`] and theme-dependent output must not render,
//! which avoids a flash of the wrong scheme.

use vista_core::{Lifecycle, ListenerId, Listeners};

use crate::scheme::ColorScheme;
use crate::store::PreferenceStore;

/// Color scheme holder backed by a preference store
pub struct ThemeState<S> {
    scheme: Lifecycle<ColorScheme>,
    default: ColorScheme,
    store: S,
    listeners: Listeners<ColorScheme>,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Uninitialized holder falling back to [`ColorScheme::Dark`]
    pub fn new(store: S) -> Self {
        Self {
            scheme: Lifecycle::Uninitialized,
            default: ColorScheme::default(),
            store,
            listeners: Listeners::new(),
        }
    }

    /// Builder: scheme used when the store holds no preference
    pub fn with_default(mut self, scheme: ColorScheme) -> Self {
        self.default = scheme;
        self
    }

    pub fn get(&self) -> Lifecycle<ColorScheme> {
        self.scheme
    }

    pub fn default_scheme(&self) -> ColorScheme {
        self.default
    }

    /// Read the stored preference (the mount step).
    ///
    /// Returns `true` if the holder became ready. A failed read leaves the
    /// holder uninitialized so a later call can retry; once ready, further
    /// calls do nothing.
    pub fn initialize(&mut self) -> bool {
        if self.scheme.is_ready() {
            return false;
        }

        let scheme = match self.store.read() {
            Ok(Some(stored)) => stored,
            Ok(None) => self.default,
            Err(err) => {
                tracing::warn!("theme preference unavailable, staying uninitialized: {err}");
                return false;
            }
        };

        self.scheme.initialize(scheme);
        tracing::debug!(%scheme, "theme initialized");
        self.listeners.notify(&scheme);
        true
    }

    /// Switch to `scheme` and persist it.
    ///
    /// An uninitialized holder becomes ready with the explicit choice. A
    /// failed write is logged; the in-memory value still changes.
    pub fn set(&mut self, scheme: ColorScheme) {
        if self.scheme == Lifecycle::Ready(scheme) {
            return;
        }

        let previous = self.scheme.get().copied();
        self.scheme = Lifecycle::Ready(scheme);
        tracing::debug!(from = ?previous, to = %scheme, "theme changed");

        if let Err(err) = self.store.write(scheme) {
            tracing::warn!("failed to persist theme preference: {err}");
        }
        self.listeners.notify(&scheme);
    }

    /// Switch to the opposite scheme. Does nothing while uninitialized.
    pub fn toggle(&mut self) {
        if let Some(current) = self.scheme.get().copied() {
            self.set(current.toggle());
        }
    }

    /// Register a callback for scheme changes (including initialization)
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ColorScheme) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for ThemeState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("scheme", &self.scheme)
            .field("default", &self.default)
            .field("store", &self.store)
            .finish()
    }
}
