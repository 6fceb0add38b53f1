//! Widget registration

use slotmap::SlotMap;

use crate::widget::WidgetId;

/// Hands out widget ids, keyed to the kind of widget that owns each one
pub struct WidgetContext {
    widgets: SlotMap<WidgetId, &'static str>,
}

impl WidgetContext {
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
        }
    }

    pub fn register_widget(&mut self, kind: &'static str) -> WidgetId {
        let id = self.widgets.insert(kind);
        tracing::debug!(?id, kind, "widget registered");
        id
    }

    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl Default for WidgetContext {
    fn default() -> Self {
        Self::new()
    }
}
