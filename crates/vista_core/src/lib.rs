//! Vista Core
//!
//! Foundational primitives shared by the Vista crates:
//!
//! - **Lifecycle**: `Uninitialized -> Ready(T)` cells for state that is only
//!   known after mount (e.g. a persisted theme preference)
//! - **Listeners**: slot-keyed callback registries used for reactive value
//!   subscriptions
//! - **Progress**: the clamped `[0, 1]` scroll progress value
//! - **Geometry**: region bounds along the scroll axis
//!
//! # Example
//!
//! ```rust
//! use vista_core::{Lifecycle, Listeners};
//!
//! let mut scheme: Lifecycle<&str> = Lifecycle::Uninitialized;
//! assert!(scheme.get().is_none());
//!
//! let mut listeners: Listeners<&str> = Listeners::new();
//! let id = listeners.subscribe(|value| println!("scheme is now {value}"));
//!
//! assert!(scheme.initialize("dark"));
//! if let Some(value) = scheme.get() {
//!     listeners.notify(value);
//! }
//! listeners.unsubscribe(id);
//! ```

pub mod error;
pub mod geometry;
pub mod lifecycle;
pub mod listeners;
pub mod progress;

pub use error::{Error, Result};
pub use geometry::{RegionBounds, Viewport};
pub use lifecycle::Lifecycle;
pub use listeners::{ListenerId, Listeners};
pub use progress::ScrollProgress;
