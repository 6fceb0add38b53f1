//! Flat state machines for widget interaction phases
//!
//! States and events are plain integer ids, usually declared as constants in
//! a `states` / `events` module next to the widget that owns the machine.
//! Events with no transition from the current state are ignored.

use rustc_hash::FxHashMap;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
}

impl Transition {
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: Vec<Transition>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
        }
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add the same transition from several source states
    pub fn on_any(mut self, from: &[StateId], event: EventId, to: StateId) -> Self {
        self.transitions
            .extend(from.iter().map(|&state| Transition::new(state, event, to)));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine {
        StateMachine::new(self.initial_state, self.transitions)
    }
}

/// A state machine instance
pub struct StateMachine {
    current_state: StateId,
    table: FxHashMap<(StateId, EventId), StateId>,
    /// History of state transitions (for debugging)
    history: Vec<(StateId, EventId, StateId)>,
}

impl StateMachine {
    /// Create a state machine from an initial state and transitions.
    ///
    /// A later transition for the same (state, event) pair replaces an
    /// earlier one.
    pub fn new(initial_state: StateId, transitions: Vec<Transition>) -> Self {
        let table = transitions
            .into_iter()
            .map(|t| ((t.from_state, t.event), t.to_state))
            .collect();

        Self {
            current_state: initial_state,
            table,
            history: Vec::new(),
        }
    }

    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    pub fn history(&self) -> &[(StateId, EventId, StateId)] {
        &self.history
    }

    /// Send an event, returning the (possibly unchanged) current state
    pub fn send(&mut self, event: EventId) -> StateId {
        let current = self.current_state;
        let Some(&to_state) = self.table.get(&(current, event)) else {
            return current;
        };

        tracing::trace!(from = current, event, to = to_state, "fsm transition");
        self.current_state = to_state;
        self.history.push((current, event, to_state));
        to_state
    }
}
