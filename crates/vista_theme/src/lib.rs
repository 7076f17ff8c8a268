//! Vista Theme
//!
//! Light/dark color scheme state with a persisted user preference.
//!
//! # Overview
//!
//! - [`ColorScheme`]: the two appearances
//! - [`ThemeState`]: holder that stays uninitialized until the page mounts,
//!   then tracks the scheme and writes every change through to its store
//! - [`PreferenceStore`]: persistence seam, with [`MemoryStore`] and a JSON
//!   [`FileStore`]
//!
//! # Quick Start
//!
//! ```rust
//! use vista_core::Lifecycle;
//! use vista_theme::{ColorScheme, MemoryStore, ThemeState};
//!
//! let mut theme = ThemeState::new(MemoryStore::new());
//! assert_eq!(theme.get(), Lifecycle::Uninitialized);
//!
//! // mount
//! theme.initialize();
//! assert_eq!(theme.get(), Lifecycle::Ready(ColorScheme::Dark));
//!
//! theme.toggle();
//! assert_eq!(theme.store().value(), Some(ColorScheme::Light));
//! ```

pub mod scheme;
pub mod state;
pub mod store;

pub use scheme::ColorScheme;
pub use state::ThemeState;
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, StoreResult, THEME_KEY};
