//! Headless switch sessions

use anyhow::{Context, Result};
use serde::Serialize;
use slide_animation::FrameScheduler;
use slide_core::{RectTransform, Vec2};
use slide_widgets::switch::hooks;
use slide_widgets::{DraggableSwitch, RestingSide, WidgetContext};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use crate::config::SlideConfig;

/// What the host does to the switch before letting it settle
#[derive(Debug, Clone)]
pub enum Script {
    /// Drag by each delta in turn, then release
    Drag(Vec<Vec2>),
    /// Press the toggle button
    Toggle,
    GoUp(f32),
    GoDown(f32),
}

/// Outcome of a session
#[derive(Debug, Serialize)]
pub struct Report {
    pub frames: u64,
    pub position: [f32; 2],
    pub resting: &'static str,
    pub notifications: Vec<&'static str>,
    /// FSM transitions taken during the session
    pub transitions: usize,
    pub settled: bool,
}

fn side_name(side: RestingSide) -> &'static str {
    match side {
        RestingSide::Start => "start",
        RestingSide::End => "end",
    }
}

pub fn run(config: &SlideConfig, script: &Script) -> Result<Report> {
    let mut ctx = WidgetContext::new();
    let mut switch =
        DraggableSwitch::new(&mut ctx, config.switch_config(), RectTransform::default())
            .context("Invalid [switch] section")?;

    let notifications = Arc::new(Mutex::new(Vec::new()));
    for hook in [hooks::ON_UP, hooks::ON_DOWN] {
        let log = notifications.clone();
        switch.add_listener(hook, move || {
            tracing::info!(hook, "notification");
            if let Ok(mut log) = log.lock() {
                log.push(hook);
            }
        })?;
    }

    let switch = Rc::new(RefCell::new(switch));
    let mut scheduler = FrameScheduler::new();
    scheduler.set_target_fps(config.simulation.fps);
    scheduler.add_task(switch.clone());

    {
        let mut s = switch.borrow_mut();
        match script {
            Script::Drag(deltas) => {
                s.on_drag_start();
                for delta in deltas {
                    s.on_drag_move(*delta);
                }
                s.on_drag_end();
            }
            Script::Toggle => s.toggle(),
            Script::GoUp(power) => s.go_up_with_power(*power),
            Script::GoDown(power) => s.go_down_with_power(*power),
        }
    }

    let frames = scheduler.run_until_idle(config.simulation.max_frames);
    let s = switch.borrow();
    let position = s.position();
    let notifications = notifications
        .lock()
        .map(|log| log.clone())
        .unwrap_or_default();

    Ok(Report {
        frames,
        position: [position.x, position.y],
        resting: side_name(s.resting_side()),
        notifications,
        transitions: s.state_machine().history().len(),
        settled: !s.is_settling(),
    })
}

/// Parse `dx,dy` into a drag delta
pub fn parse_delta(text: &str) -> Result<Vec2> {
    let (x, y) = text
        .split_once(',')
        .with_context(|| format!("Expected `dx,dy`, got `{text}`"))?;
    let x = x.trim().parse().with_context(|| format!("Invalid dx in `{text}`"))?;
    let y = y.trim().parse().with_context(|| format!("Invalid dy in `{text}`"))?;
    Ok(Vec2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml: &str) -> SlideConfig {
        SlideConfig::parse(toml).unwrap()
    }

    #[test]
    fn test_drag_session_report() {
        let config = config("[switch]\nlower = 0.0\nupper = 200.0\n");
        let report = run(&config, &Script::Drag(vec![Vec2::new(50.0, 0.0)])).unwrap();

        assert_eq!(report.frames, 3);
        assert_eq!(report.position, [200.0, 0.0]);
        assert_eq!(report.resting, "start");
        assert_eq!(report.notifications, vec![hooks::ON_DOWN]);
        // drag start, release, arrival
        assert_eq!(report.transitions, 3);
        assert!(report.settled);
    }

    #[test]
    fn test_frame_budget_reported_as_unsettled() {
        let mut config = config("[switch]\nupper = 100000.0\n");
        config.simulation.max_frames = 5;
        let report = run(&config, &Script::GoUp(0.5)).unwrap();

        assert_eq!(report.frames, 5);
        assert!(!report.settled);
        assert!(report.notifications.is_empty());
    }

    #[test]
    fn test_inverted_bounds_fail() {
        let config = config("[switch]\nlower = 10.0\nupper = 0.0\n");
        assert!(run(&config, &Script::Toggle).is_err());
    }

    #[test]
    fn test_parse_delta() {
        assert_eq!(parse_delta("12.5, -3").unwrap(), Vec2::new(12.5, -3.0));
        assert!(parse_delta("12").is_err());
        assert!(parse_delta("a,b").is_err());
    }
}
