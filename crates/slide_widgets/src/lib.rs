//! Slide Widget Library
//!
//! Draggable UI components with FSM-driven settling.

pub mod context;
pub mod switch;
pub mod widget;

pub use context::WidgetContext;
pub use switch::{draggable_switch, DraggableSwitch, RestingSide, SwitchBuilder, SwitchConfig};
pub use widget::{Widget, WidgetId};
