//! Integration tests for the draggable switch driven by the frame scheduler
//!
//! These tests verify that:
//! - A switch registered with the scheduler settles across ticks
//! - The scheduler goes idle once the switch rests
//! - Host transforms only ever see clamped positions
//! - Drags arriving between frames stop an in-flight settle

use slide_animation::FrameScheduler;
use slide_core::{AnchoredTransform, Event, Point, Vec2};
use slide_widgets::switch::states;
use slide_widgets::{draggable_switch, RestingSide, Widget, WidgetContext};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

/// Host transform that records every position written to it
#[derive(Default)]
struct RecordingTransform {
    position: Point,
    writes: Vec<Point>,
}

impl AnchoredTransform for RecordingTransform {
    fn anchored_position(&self) -> Point {
        self.position
    }

    fn set_anchored_position(&mut self, position: Point) {
        self.position = position;
        self.writes.push(position);
    }
}

#[test]
fn test_scheduler_settles_released_switch() {
    let downs = Arc::new(Mutex::new(0));
    let downs_clone = downs.clone();

    let mut ctx = WidgetContext::new();
    let switch = draggable_switch()
        .horizontal()
        .bounds(0.0, 200.0)
        .on_down(move || *downs_clone.lock().unwrap() += 1)
        .build(&mut ctx, RecordingTransform::default())
        .unwrap();
    let switch = Rc::new(RefCell::new(switch));

    let mut scheduler = FrameScheduler::new();
    scheduler.add_task(switch.clone());
    assert!(!scheduler.has_active_tasks());

    {
        let mut s = switch.borrow_mut();
        s.handle_event(&Event::drag_start());
        s.handle_event(&Event::drag(Vec2::new(50.0, 0.0)));
        s.handle_event(&Event::drag_end());
    }
    assert!(scheduler.has_active_tasks());

    let frames = scheduler.run_until_idle(100);
    assert_eq!(frames, 3);
    assert!(!scheduler.has_active_tasks());

    let s = switch.borrow();
    assert_eq!(s.offset(), 200.0);
    assert_eq!(s.resting_side(), RestingSide::Start);
    assert_eq!(s.phase(), states::IDLE_START);
    assert_eq!(*downs.lock().unwrap(), 1);

    let xs: Vec<f32> = s.transform().writes.iter().map(|p| p.x).collect();
    assert_eq!(xs.last(), Some(&200.0));
    assert!(xs.ends_with(&[50.0, 101.0, 153.0, 200.0]));
}

#[test]
fn test_positions_written_to_host_stay_clamped() {
    let mut ctx = WidgetContext::new();
    let switch = draggable_switch()
        .vertical()
        .bounds(-30.0, 30.0)
        .position(12.0, 0.0)
        .build(&mut ctx, RecordingTransform::default())
        .unwrap();
    let switch = Rc::new(RefCell::new(switch));

    let mut scheduler = FrameScheduler::new();
    scheduler.add_task(switch.clone());

    {
        let mut s = switch.borrow_mut();
        s.on_drag_start();
        for delta in [25.0, 25.0, -90.0, 4.0] {
            s.on_drag_move(Vec2::new(1000.0, delta));
        }
        s.on_drag_end();
    }
    scheduler.run_until_idle(1000);

    let s = switch.borrow();
    for write in &s.transform().writes {
        assert!((-30.0..=30.0).contains(&write.y));
        assert_eq!(write.x, 12.0);
    }
    // Last drag delta was positive, so the glide carries it to the upper bound
    assert_eq!(s.position(), Point::new(12.0, 30.0));
    assert_eq!(s.resting_side(), RestingSide::Start);
}

#[test]
fn test_drag_between_frames_stops_settle() {
    let ups = Arc::new(Mutex::new(0));
    let downs = Arc::new(Mutex::new(0));
    let ups_clone = ups.clone();
    let downs_clone = downs.clone();

    let mut ctx = WidgetContext::new();
    let switch = draggable_switch()
        .bounds(0.0, 500.0)
        .on_up(move || *ups_clone.lock().unwrap() += 1)
        .on_down(move || *downs_clone.lock().unwrap() += 1)
        .build(&mut ctx, RecordingTransform::default())
        .unwrap();
    let switch = Rc::new(RefCell::new(switch));

    let mut scheduler = FrameScheduler::new();
    scheduler.add_task(switch.clone());

    switch.borrow_mut().go_up_with_power(20.0);
    scheduler.tick_with(1.0 / 60.0);
    scheduler.tick_with(1.0 / 60.0);
    let offset = switch.borrow().offset();
    assert_eq!(offset, 21.0 + 22.0);

    switch.borrow_mut().on_drag_start();
    scheduler.tick_with(1.0 / 60.0);
    assert_eq!(switch.borrow().offset(), offset);
    assert!(!scheduler.has_active_tasks());

    {
        let mut s = switch.borrow_mut();
        s.on_drag_move(Vec2::new(-3.0, 0.0));
        s.on_drag_end();
    }
    scheduler.run_until_idle(1000);

    let s = switch.borrow();
    assert_eq!(s.offset(), 0.0);
    assert_eq!(s.resting_side(), RestingSide::End);
    assert_eq!(*ups.lock().unwrap(), 1);
    assert_eq!(*downs.lock().unwrap(), 0);
}

#[test]
fn test_toggle_from_button_alternates_sides() {
    let mut ctx = WidgetContext::new();
    let switch = draggable_switch()
        .bounds(0.0, 80.0)
        .resting(RestingSide::End)
        .build(&mut ctx, RecordingTransform::default())
        .unwrap();
    let switch = Rc::new(RefCell::new(switch));

    let mut scheduler = FrameScheduler::new();
    scheduler.add_task(switch.clone());

    let mut sides = Vec::new();
    for _ in 0..4 {
        switch.borrow_mut().toggle();
        scheduler.run_until_idle(1000);
        let s = switch.borrow();
        sides.push((s.resting_side(), s.offset()));
    }

    assert_eq!(
        sides,
        vec![
            (RestingSide::Start, 80.0),
            (RestingSide::End, 0.0),
            (RestingSide::Start, 80.0),
            (RestingSide::End, 0.0),
        ]
    );
}
