//! Vista Layout
//!
//! The stateful, per-element behaviour of a Vista page:
//!
//! - [`ScrollProgressTracker`]: progress of a region through a viewport window
//! - [`ScrollMotion`]: opacity/scale driven by that progress
//! - [`EntranceChoreography`]: one-shot entrance animations played on mount
//! - [`TabTransitionController`]: exit/enter sequencing for tab panels
//!
//! Every component is a long-lived object: create it once per page and feed
//! it events, rather than recreating it on every render pass. In-flight
//! animation state lives inside these objects and would be lost otherwise.
//!
//! # Example
//!
//! ```rust
//! use vista_core::RegionBounds;
//! use vista_layout::prelude::*;
//!
//! let mut tracker = ScrollProgressTracker::new(ScrollWindow::default(), 800.0)
//!     .with_region(RegionBounds::new(1200.0, 600.0));
//! let motion = ScrollMotion::fade_and_grow();
//!
//! tracker.on_scroll(1000.0);
//! let style = motion.style(tracker.progress());
//! assert!(style.opacity > 0.0 && style.opacity < 1.0);
//! ```

pub mod motion;
pub mod scroll_progress;
pub mod tabs;

pub use motion::{EntranceChoreography, EntranceElement, MotionStyle, ScrollMotion};
pub use scroll_progress::{ScrollEdge, ScrollProgressTracker, ScrollWindow};
pub use tabs::{
    AnimationTicket, PanelStyle, PhaseChange, TabTransitionController, TransitionPhase,
    DEFAULT_TRANSITION_MS,
};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::motion::{EntranceChoreography, EntranceElement, MotionStyle, ScrollMotion};
    pub use crate::scroll_progress::{ScrollEdge, ScrollProgressTracker, ScrollWindow};
    pub use crate::tabs::{PanelStyle, TabTransitionController, TransitionPhase};
}
