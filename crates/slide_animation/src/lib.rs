//! Slide Animation System
//!
//! Frame scheduling and momentum glides.
//!
//! # Features
//!
//! - **Frame Scheduler**: steps registered tasks once per host frame
//! - **Glides**: velocity that gains a fixed unit every frame
//! - **Tracks**: closed ranges a glide travels along, with arrival detection

pub mod glide;
pub mod scheduler;

pub use glide::{Arrival, Glide, Track};
pub use scheduler::{FrameInfo, FrameScheduler, FrameTask, TaskId, TaskStatus};
