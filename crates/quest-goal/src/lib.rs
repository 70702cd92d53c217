//! # quest-goal
//!
//! Goal domain model and progress accounting for Eternal Quest.
//!
//! A [`Goal`] is a named, point-valued objective with a completion policy
//! that depends on its kind: simple goals finish after one progress event,
//! eternal goals never finish, and checklist goals finish after a target
//! number of events (with a one-time bonus on the finishing event).
//!
//! ## Key components
//!
//! - [`Goal`] / [`GoalKind`] — the goal variants and their progress rules
//! - [`GoalManager`] — owns the goal list and the running score
//! - [`codec`] — the flat-text save-file format (encode/decode)
//! - [`QuestEvent`] — events emitted at key lifecycle points
//! - [`EventDispatcher`] — dispatches events to notification sinks
//! - [`NotificationSink`] — trait for receiving events (log file, etc.)

pub mod codec;
pub mod error;
pub mod events;
pub mod goal;
pub mod manager;

pub use error::GoalError;
pub use events::{EventDispatcher, LogSink, NotificationSink, QuestEvent};
pub use goal::{Goal, GoalKind};
pub use manager::GoalManager;
