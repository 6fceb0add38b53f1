//! Drag events delivered by the host
//!
//! Hosts translate their native pointer callbacks into these events and hand
//! them to a widget's `handle_event`.

use crate::geometry::Vec2;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Drag began (pointer pressed and moved past the host's threshold)
    pub const DRAG_START: EventType = 5;
    /// Drag moved, carries the per-frame delta
    pub const DRAG: EventType = 6;
    /// Drag ended (pointer released after dragging)
    pub const DRAG_END: EventType = 7;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
    pub data: EventData,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    /// Positional delta since the previous drag event
    Drag {
        delta_x: f32,
        delta_y: f32,
    },
    None,
}

impl EventData {
    /// The drag delta, if this is drag data
    pub fn drag_delta(&self) -> Option<Vec2> {
        match self {
            EventData::Drag { delta_x, delta_y } => Some(Vec2::new(*delta_x, *delta_y)),
            _ => None,
        }
    }
}

impl Event {
    pub fn new(event_type: EventType, data: EventData) -> Self {
        Self {
            event_type,
            target: 0,
            data,
        }
    }

    pub fn drag_start() -> Self {
        Self::new(event_types::DRAG_START, EventData::None)
    }

    pub fn drag(delta: Vec2) -> Self {
        Self::new(
            event_types::DRAG,
            EventData::Drag {
                delta_x: delta.x,
                delta_y: delta.y,
            },
        )
    }

    pub fn drag_end() -> Self {
        Self::new(event_types::DRAG_END, EventData::None)
    }

    /// Address the event to a widget
    pub fn with_target(mut self, target: u64) -> Self {
        self.target = target;
        self
    }
}
