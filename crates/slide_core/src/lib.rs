//! Slide Core
//!
//! Foundational primitives shared by the Slide crates:
//!
//! - **Geometry**: points and offsets in anchored (parent-relative) space
//! - **Transforms**: the host seam that owns a widget's anchored position
//! - **Events**: drag gestures delivered by the host
//! - **Hooks**: named, ordered listener lists for widget notifications
//! - **State Machines**: flat FSMs describing widget interaction phases
//!
//! # Example
//!
//! ```rust
//! use slide_core::hooks::HookRegistry;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let fired = Arc::new(AtomicUsize::new(0));
//! let counter = fired.clone();
//!
//! let mut hooks = HookRegistry::new();
//! hooks.register("on_up", move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! assert_eq!(hooks.fire("on_up"), 1);
//! assert_eq!(fired.load(Ordering::SeqCst), 1);
//! ```

pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod hooks;
pub mod transform;

pub use error::{Result, SlideError};
pub use events::{Event, EventData, EventType};
pub use fsm::{StateId, StateMachine, Transition};
pub use geometry::{Axis, Point, Vec2};
pub use hooks::HookRegistry;
pub use transform::{AnchoredTransform, RectTransform};
