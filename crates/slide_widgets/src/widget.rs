//! Base widget trait and types

use slotmap::{new_key_type, Key};

new_key_type! {
    pub struct WidgetId;
}

impl WidgetId {
    /// The id as an event target
    pub fn as_target(&self) -> u64 {
        self.data().as_ffi()
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Handle an event
    fn handle_event(&mut self, event: &slide_core::Event);

    /// Whether an event is addressed to this widget. Target 0 is a broadcast.
    fn accepts(&self, event: &slide_core::Event) -> bool {
        event.target == 0 || event.target == self.id().as_target()
    }
}
