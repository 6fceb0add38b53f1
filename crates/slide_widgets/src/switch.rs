//! Draggable switch widget
//!
//! A rectangle dragged along one axis between two bounds. Releasing it starts
//! a glide that keeps the last drag velocity, gains one unit per frame and
//! stops once the switch reaches either bound:
//!
//! - reaching the lower bound rests the switch at [`RestingSide::End`] and
//!   fires the `on_up` hook
//! - reaching the upper bound rests it at [`RestingSide::Start`] and fires
//!   the `on_down` hook
//!
//! The glide is advanced by [`DraggableSwitch::update`], which the host calls
//! once per frame (directly or through a `FrameScheduler`). The dragging flag
//! guards every entry point, so a drag always wins over a glide.

use slide_animation::{Arrival, FrameInfo, FrameTask, Glide, TaskStatus, Track};
use slide_core::events::event_types;
use slide_core::fsm::StateMachine;
use slide_core::hooks::{HookRegistry, Listener};
use slide_core::{AnchoredTransform, Axis, Event, Point, RectTransform, Result, SlideError, Vec2};

use crate::context::WidgetContext;
use crate::widget::{Widget, WidgetId};

/// Switch states
pub mod states {
    pub const IDLE_START: u32 = 0;
    pub const IDLE_END: u32 = 1;
    pub const DRAGGING: u32 = 2;
    pub const SETTLING: u32 = 3;
}

/// Switch FSM events
pub mod events {
    pub const DRAG_START: u32 = 1;
    pub const DRAG_END: u32 = 2;
    /// Glide requested without a drag (`go_up`, `go_down`, `toggle`)
    pub const GLIDE: u32 = 3;
    pub const REACH_LOWER: u32 = 4;
    pub const REACH_UPPER: u32 = 5;
}

/// Hook names
pub mod hooks {
    pub const ON_UP: &str = "on_up";
    pub const ON_DOWN: &str = "on_down";
}

/// Velocity used by `go_up`, `go_down` and `toggle`
pub const DEFAULT_POWER: f32 = 0.5;

/// Which side the switch last settled on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RestingSide {
    #[default]
    Start,
    End,
}

impl RestingSide {
    fn idle_state(self) -> u32 {
        match self {
            RestingSide::Start => states::IDLE_START,
            RestingSide::End => states::IDLE_END,
        }
    }
}

/// Switch configuration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwitchConfig {
    /// Axis the switch moves along
    pub axis: Axis,
    /// Lower bound on the active axis
    pub lower: f32,
    /// Upper bound on the active axis
    pub upper: f32,
    /// Side the switch starts at rest on
    pub resting: RestingSide,
    /// Initial anchored position, `None` keeps the transform's own
    pub position: Option<Point>,
}

impl SwitchConfig {
    pub fn new(axis: Axis, lower: f32, upper: f32) -> Self {
        Self {
            axis,
            lower,
            upper,
            ..Default::default()
        }
    }

    /// Set both bounds
    pub fn bounds(mut self, lower: f32, upper: f32) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Set the initial resting side
    pub fn resting(mut self, side: RestingSide) -> Self {
        self.resting = side;
        self
    }

    /// Set the initial anchored position
    pub fn position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    /// Reject bounds that cannot form a track
    pub fn validate(&self) -> Result<()> {
        for bound in [self.lower, self.upper] {
            if !bound.is_finite() {
                return Err(SlideError::NonFiniteBound(bound));
            }
        }
        if self.lower > self.upper {
            return Err(SlideError::InvertedBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }

    pub fn track(&self) -> Track {
        Track::new(self.lower, self.upper)
    }
}

/// Draggable switch widget
pub struct DraggableSwitch<T: AnchoredTransform = RectTransform> {
    id: WidgetId,
    config: SwitchConfig,
    transform: T,
    resting: RestingSide,
    glide: Glide,
    dragging: bool,
    settling: bool,
    /// Set whenever the position changes (cleared after reading)
    moved: bool,
    fsm: StateMachine,
    hooks: HookRegistry,
}

impl<T: AnchoredTransform> DraggableSwitch<T> {
    /// Create a switch driving `transform`
    pub fn new(ctx: &mut WidgetContext, config: SwitchConfig, transform: T) -> Result<Self> {
        config.validate()?;

        let fsm = Self::create_fsm(config.resting);
        let id = ctx.register_widget("draggable_switch");

        let mut switch = Self {
            id,
            resting: config.resting,
            config,
            transform,
            glide: Glide::default(),
            dragging: false,
            settling: false,
            moved: false,
            fsm,
            hooks: HookRegistry::with_hooks(&[hooks::ON_UP, hooks::ON_DOWN]),
        };

        if let Some(position) = switch.config.position {
            switch.transform.set_anchored_position(position);
        }
        // Pull an out-of-range starting position onto the track
        switch.translate(Vec2::ZERO);
        switch.moved = false;

        Ok(switch)
    }

    /// Create the switch FSM
    fn create_fsm(resting: RestingSide) -> StateMachine {
        use states::*;

        StateMachine::builder(resting.idle_state())
            .on_any(&[IDLE_START, IDLE_END, SETTLING], events::DRAG_START, DRAGGING)
            .on(DRAGGING, events::DRAG_END, SETTLING)
            .on_any(&[IDLE_START, IDLE_END], events::GLIDE, SETTLING)
            .on(SETTLING, events::REACH_LOWER, IDLE_END)
            .on(SETTLING, events::REACH_UPPER, IDLE_START)
            .build()
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn axis(&self) -> Axis {
        self.config.axis
    }

    pub fn track(&self) -> Track {
        self.config.track()
    }

    /// Current anchored position
    pub fn position(&self) -> Point {
        self.transform.anchored_position()
    }

    /// Current coordinate on the active axis
    pub fn offset(&self) -> f32 {
        self.position().along(self.config.axis)
    }

    /// Side the switch last settled on. Meaningless while settling.
    pub fn resting_side(&self) -> RestingSide {
        self.resting
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_settling(&self) -> bool {
        self.settling
    }

    /// Velocity accumulator (last drag delta or current glide speed)
    pub fn velocity(&self) -> f32 {
        self.glide.velocity()
    }

    /// Current FSM state, one of [`states`]
    pub fn phase(&self) -> u32 {
        self.fsm.current_state()
    }

    pub fn state_machine(&self) -> &StateMachine {
        &self.fsm
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Check if the position changed and clear the flag
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }

    /// Register a listener fired when a settle reaches the lower bound
    pub fn on_up<F: FnMut() + Send + 'static>(&mut self, listener: F) {
        self.hooks.register(hooks::ON_UP, listener);
    }

    /// Register a listener fired when a settle reaches the upper bound
    pub fn on_down<F: FnMut() + Send + 'static>(&mut self, listener: F) {
        self.hooks.register(hooks::ON_DOWN, listener);
    }

    /// Register a listener by hook name
    pub fn add_listener<F>(&mut self, hook: &str, listener: F) -> Result<()>
    where
        F: FnMut() + Send + 'static,
    {
        match hook {
            hooks::ON_UP => self.on_up(listener),
            hooks::ON_DOWN => self.on_down(listener),
            other => return Err(SlideError::UnknownHook(other.to_string())),
        }
        Ok(())
    }

    pub fn listener_count(&self, hook: &str) -> usize {
        self.hooks.listener_count(hook)
    }

    /// Pointer drag began
    pub fn on_drag_start(&mut self) {
        self.glide.reset();
        self.enter_drag();
        tracing::debug!(id = ?self.id, "drag started");
    }

    /// Pointer moved by `delta` since the previous drag event
    pub fn on_drag_move(&mut self, delta: Vec2) {
        // A host may skip the start callback
        self.enter_drag();
        self.translate(delta);

        let velocity = delta.along(self.config.axis);
        if velocity.is_finite() {
            self.glide.set_velocity(velocity);
        }
    }

    /// Take over from any running settle
    fn enter_drag(&mut self) {
        self.dragging = true;
        if std::mem::take(&mut self.settling) {
            tracing::debug!(id = ?self.id, "settle superseded by drag");
        }
        self.fsm.send(events::DRAG_START);
    }

    /// Pointer released
    pub fn on_drag_end(&mut self) {
        self.dragging = false;
        tracing::debug!(id = ?self.id, velocity = self.glide.velocity(), "drag ended");
        self.start_settle();
    }

    /// Glide toward the upper bound with the default power
    pub fn go_up(&mut self) {
        self.go_up_with_power(DEFAULT_POWER);
    }

    /// Glide starting at `power`: toward the upper bound for positive power,
    /// toward the lower bound for negative power
    pub fn go_up_with_power(&mut self, power: f32) {
        self.glide_with_velocity(power);
    }

    /// Glide toward the lower bound with the default power
    pub fn go_down(&mut self) {
        self.go_down_with_power(DEFAULT_POWER);
    }

    /// Glide starting at `-power`: toward the lower bound for positive power,
    /// toward the upper bound for negative power
    pub fn go_down_with_power(&mut self, power: f32) {
        self.glide_with_velocity(-power);
    }

    fn glide_with_velocity(&mut self, velocity: f32) {
        if self.dragging {
            return;
        }
        if !velocity.is_finite() {
            tracing::warn!(id = ?self.id, velocity, "ignoring non-finite glide power");
            return;
        }
        self.glide.set_velocity(velocity);
        self.start_settle();
    }

    /// Glide away from the side the switch rests on
    pub fn toggle(&mut self) {
        // The release of a drag already schedules a settle
        if self.dragging {
            return;
        }
        match self.resting {
            RestingSide::End => self.go_up(),
            RestingSide::Start => self.go_down(),
        }
    }

    fn start_settle(&mut self) {
        if self.dragging {
            return;
        }
        if self.settling {
            tracing::trace!(id = ?self.id, "settle already running");
            return;
        }

        let event = if self.fsm.is_in(states::DRAGGING) {
            events::DRAG_END
        } else {
            events::GLIDE
        };
        self.fsm.send(event);
        self.settling = true;
        tracing::debug!(id = ?self.id, velocity = self.glide.velocity(), "settle started");
    }

    /// Advance the settle by one frame
    pub fn update(&mut self) -> TaskStatus {
        if !self.settling {
            return TaskStatus::Idle;
        }
        if self.dragging {
            self.settling = false;
            tracing::debug!(id = ?self.id, "settle superseded by drag");
            return TaskStatus::Idle;
        }

        let delta = self.glide.advance();
        self.translate(Vec2::on_axis(self.config.axis, delta));

        let offset = self.offset();
        tracing::trace!(id = ?self.id, delta, offset, "settle step");

        let track = self.track();
        if track.is_interior(offset) {
            return TaskStatus::Active;
        }
        self.finish_settle(track.arrival(offset));
        TaskStatus::Idle
    }

    fn finish_settle(&mut self, arrival: Arrival) {
        self.settling = false;
        self.glide.reset();

        let (side, event, hook) = match arrival {
            Arrival::Lower => (RestingSide::End, events::REACH_LOWER, hooks::ON_UP),
            Arrival::Upper => (RestingSide::Start, events::REACH_UPPER, hooks::ON_DOWN),
        };
        self.resting = side;
        self.fsm.send(event);
        tracing::debug!(id = ?self.id, ?side, "settle finished");

        self.hooks.fire(hook);
    }

    /// Move by `delta` along the active axis, clamped to the bounds.
    ///
    /// The other axis keeps its coordinate. Non-finite offsets are dropped.
    pub fn translate(&mut self, delta: Vec2) {
        let axis = self.config.axis;
        let amount = delta.along(axis);
        if !amount.is_finite() {
            tracing::warn!(id = ?self.id, amount, "ignoring non-finite offset");
            return;
        }

        let current = self.transform.anchored_position();
        let target = self.track().clamp(current.along(axis) + amount);
        self.set_offset(target);
    }

    /// Snap to the lower bound without animating
    pub fn move_to_start(&mut self) {
        self.set_offset(self.config.lower);
    }

    /// Snap to the upper bound without animating
    pub fn move_to_finish(&mut self) {
        self.set_offset(self.config.upper);
    }

    fn set_offset(&mut self, value: f32) {
        let current = self.transform.anchored_position();
        let next = current.with_along(self.config.axis, value);
        if next != current {
            self.moved = true;
        }
        self.transform.set_anchored_position(next);
    }
}

impl<T: AnchoredTransform> Widget for DraggableSwitch<T> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn handle_event(&mut self, event: &Event) {
        if !self.accepts(event) {
            return;
        }

        match event.event_type {
            event_types::DRAG_START => self.on_drag_start(),
            event_types::DRAG => {
                if let Some(delta) = event.data.drag_delta() {
                    self.on_drag_move(delta);
                }
            }
            event_types::DRAG_END => self.on_drag_end(),
            _ => {}
        }
    }
}

impl<T: AnchoredTransform> FrameTask for DraggableSwitch<T> {
    fn step(&mut self, _frame: &FrameInfo) -> TaskStatus {
        self.update()
    }

    fn is_active(&self) -> bool {
        self.settling
    }
}

/// Create a draggable switch builder
pub fn draggable_switch() -> SwitchBuilder {
    SwitchBuilder {
        config: SwitchConfig::default(),
        on_up: Vec::new(),
        on_down: Vec::new(),
    }
}

/// Builder for creating draggable switches
pub struct SwitchBuilder {
    config: SwitchConfig,
    on_up: Vec<Listener>,
    on_down: Vec<Listener>,
}

impl SwitchBuilder {
    /// Set the axis
    pub fn axis(mut self, axis: Axis) -> Self {
        self.config.axis = axis;
        self
    }

    pub fn horizontal(self) -> Self {
        self.axis(Axis::Horizontal)
    }

    pub fn vertical(self) -> Self {
        self.axis(Axis::Vertical)
    }

    /// Set both bounds
    pub fn bounds(mut self, lower: f32, upper: f32) -> Self {
        self.config = self.config.bounds(lower, upper);
        self
    }

    /// Set the initial resting side
    pub fn resting(mut self, side: RestingSide) -> Self {
        self.config.resting = side;
        self
    }

    /// Set the initial anchored position
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.config.position = Some(Point::new(x, y));
        self
    }

    /// Add an `on_up` listener
    pub fn on_up<F: FnMut() + Send + 'static>(mut self, listener: F) -> Self {
        self.on_up.push(Box::new(listener));
        self
    }

    /// Add an `on_down` listener
    pub fn on_down<F: FnMut() + Send + 'static>(mut self, listener: F) -> Self {
        self.on_down.push(Box::new(listener));
        self
    }

    /// Build the switch around a host transform
    pub fn build<T: AnchoredTransform>(
        self,
        ctx: &mut WidgetContext,
        transform: T,
    ) -> Result<DraggableSwitch<T>> {
        let mut switch = DraggableSwitch::new(ctx, self.config, transform)?;
        for listener in self.on_up {
            switch.on_up(listener);
        }
        for listener in self.on_down {
            switch.on_down(listener);
        }
        Ok(switch)
    }
}
