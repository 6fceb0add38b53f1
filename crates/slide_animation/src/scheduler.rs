//! Frame scheduler
//!
//! Stands in for the host's per-frame callback. Each `tick` steps every
//! registered task once; tasks keep their own state between frames.

use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::Rc;

new_key_type! {
    pub struct TaskId;
}

/// Timing for the frame being stepped
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInfo {
    /// Zero-based frame counter
    pub index: u64,
    /// Seconds since the previous frame
    pub dt: f32,
}

/// What a task reported after its step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    /// Needs more frames
    Active,
    /// Nothing to do until something external wakes it
    Idle,
}

/// A unit of per-frame work
pub trait FrameTask {
    /// Advance by one frame
    fn step(&mut self, frame: &FrameInfo) -> TaskStatus;

    /// Whether the task currently wants frames
    fn is_active(&self) -> bool;
}

type SharedTask = Rc<RefCell<dyn FrameTask>>;

/// The scheduler that ticks all registered tasks
pub struct FrameScheduler {
    tasks: SlotMap<TaskId, SharedTask>,
    frame_index: u64,
    target_fps: u32,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            frame_index: 0,
            target_fps: 60,
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    /// Register a task. The caller keeps its own handle to the task.
    ///
    /// Tasks are borrowed mutably while they step, so a task must not
    /// reach back into itself through another handle from inside `step`.
    pub fn add_task<T: FrameTask + 'static>(&mut self, task: Rc<RefCell<T>>) -> TaskId {
        let shared: SharedTask = task;
        self.tasks.insert(shared)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frame_index
    }

    /// Tick all tasks with an explicit frame duration, returning how many
    /// reported themselves still active
    pub fn tick_with(&mut self, dt: f32) -> usize {
        let frame = FrameInfo {
            index: self.frame_index,
            dt,
        };
        self.frame_index += 1;

        let mut active = 0;
        for (_, task) in self.tasks.iter() {
            if task.borrow_mut().step(&frame) == TaskStatus::Active {
                active += 1;
            }
        }
        tracing::trace!(frame = frame.index, active, "frame ticked");
        active
    }

    /// Check if any task still wants frames
    pub fn has_active_tasks(&self) -> bool {
        self.tasks.iter().any(|(_, task)| task.borrow().is_active())
    }

    /// Tick at the target frame rate until every task is idle or
    /// `max_frames` is reached. Returns the number of frames ticked.
    pub fn run_until_idle(&mut self, max_frames: u64) -> u64 {
        let dt = 1.0 / self.target_fps as f32;
        let mut frames = 0;
        while frames < max_frames && self.has_active_tasks() {
            self.tick_with(dt);
            frames += 1;
        }
        if frames == max_frames && self.has_active_tasks() {
            tracing::warn!(max_frames, "tasks still active after frame limit");
        }
        frames
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts down to zero, one per frame
    struct Countdown {
        remaining: u32,
        steps: u32,
    }

    impl FrameTask for Countdown {
        fn step(&mut self, _frame: &FrameInfo) -> TaskStatus {
            self.steps += 1;
            if self.remaining > 0 {
                self.remaining -= 1;
            }
            if self.is_active() {
                TaskStatus::Active
            } else {
                TaskStatus::Idle
            }
        }

        fn is_active(&self) -> bool {
            self.remaining > 0
        }
    }

    fn countdown(remaining: u32) -> Rc<RefCell<Countdown>> {
        Rc::new(RefCell::new(Countdown {
            remaining,
            steps: 0,
        }))
    }

    #[test]
    fn test_tick_steps_every_task() {
        let mut scheduler = FrameScheduler::new();
        let a = countdown(2);
        let b = countdown(5);
        scheduler.add_task(a.clone());
        scheduler.add_task(b.clone());

        assert_eq!(scheduler.tick_with(1.0 / 60.0), 2);
        assert_eq!(scheduler.tick_with(1.0 / 60.0), 1);
        assert_eq!(a.borrow().steps, 2);
        assert_eq!(b.borrow().remaining, 3);
        assert_eq!(scheduler.frame_count(), 2);
    }

    #[test]
    fn test_run_until_idle() {
        let mut scheduler = FrameScheduler::new();
        let task = countdown(4);
        scheduler.add_task(task.clone());

        assert!(scheduler.has_active_tasks());
        assert_eq!(scheduler.run_until_idle(100), 4);
        assert!(!scheduler.has_active_tasks());
        assert_eq!(task.borrow().steps, 4);
    }

    #[test]
    fn test_run_until_idle_respects_limit() {
        let mut scheduler = FrameScheduler::new();
        scheduler.add_task(countdown(10));
        assert_eq!(scheduler.run_until_idle(3), 3);
        assert!(scheduler.has_active_tasks());
    }

    #[test]
    fn test_frame_info_uses_target_fps() {
        struct Recorder(Vec<FrameInfo>, u32);

        impl FrameTask for Recorder {
            fn step(&mut self, frame: &FrameInfo) -> TaskStatus {
                self.0.push(*frame);
                self.1 -= 1;
                if self.1 > 0 {
                    TaskStatus::Active
                } else {
                    TaskStatus::Idle
                }
            }

            fn is_active(&self) -> bool {
                self.1 > 0
            }
        }

        let mut scheduler = FrameScheduler::new();
        scheduler.set_target_fps(50);
        let task = Rc::new(RefCell::new(Recorder(Vec::new(), 2)));
        scheduler.add_task(task.clone());
        assert_eq!(scheduler.task_count(), 1);

        scheduler.run_until_idle(10);
        let task = task.borrow();
        let frames = &task.0;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].index, 1);
        assert_eq!(frames[1].dt, 1.0 / 50.0);
    }
}
