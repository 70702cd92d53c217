// events.rs — Event model and notification dispatch.
//
// The library emits events at key lifecycle points; notification sinks
// (a JSONL log file, or anything else implementing the trait) subscribe
// to them. The shell decides which sinks exist. Dispatch is synchronous
// and a failing sink never blocks the others.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GoalError;

/// Events emitted at key lifecycle points.
///
/// These are stable types a sink can depend on; the variants cover the
/// full create/progress/complete/save/load cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum QuestEvent {
    /// A new goal was created.
    GoalCreated {
        name: String,
        kind: String,
        points: u32,
        timestamp: DateTime<Utc>,
    },

    /// A progress event was recorded on a goal.
    ProgressRecorded {
        name: String,
        awarded: u32,
        score: u32,
        timestamp: DateTime<Utc>,
    },

    /// A goal reached its completion state.
    GoalCompleted {
        name: String,
        score: u32,
        timestamp: DateTime<Utc>,
    },

    /// The goal list and score were written to a save file.
    SaveWritten {
        path: String,
        goal_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// The goal list and score were loaded from a save file.
    SaveLoaded {
        path: String,
        goal_count: usize,
        score: u32,
        timestamp: DateTime<Utc>,
    },
}

impl QuestEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            QuestEvent::GoalCreated { .. } => "goal_created",
            QuestEvent::ProgressRecorded { .. } => "progress_recorded",
            QuestEvent::GoalCompleted { .. } => "goal_completed",
            QuestEvent::SaveWritten { .. } => "save_written",
            QuestEvent::SaveLoaded { .. } => "save_loaded",
        }
    }

    pub fn goal_created(name: &str, kind: &str, points: u32) -> Self {
        QuestEvent::GoalCreated {
            name: name.to_string(),
            kind: kind.to_string(),
            points,
            timestamp: Utc::now(),
        }
    }

    pub fn progress_recorded(name: &str, awarded: u32, score: u32) -> Self {
        QuestEvent::ProgressRecorded {
            name: name.to_string(),
            awarded,
            score,
            timestamp: Utc::now(),
        }
    }

    pub fn goal_completed(name: &str, score: u32) -> Self {
        QuestEvent::GoalCompleted {
            name: name.to_string(),
            score,
            timestamp: Utc::now(),
        }
    }

    pub fn save_written(path: &Path, goal_count: usize) -> Self {
        QuestEvent::SaveWritten {
            path: path.display().to_string(),
            goal_count,
            timestamp: Utc::now(),
        }
    }

    pub fn save_loaded(path: &Path, goal_count: usize, score: u32) -> Self {
        QuestEvent::SaveLoaded {
            path: path.display().to_string(),
            goal_count,
            score,
            timestamp: Utc::now(),
        }
    }
}

/// Trait for receiving quest events.
///
/// Implementations decide what to do with each event: append to a log,
/// print, forward somewhere. Errors are reported but never fatal.
pub trait NotificationSink: Send {
    /// Handle an event. Errors are logged but don't stop the system.
    fn send(&self, event: &QuestEvent) -> Result<(), GoalError>;
}

/// Logs events as JSONL to a file (always-on sink).
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NotificationSink for LogSink {
    fn send(&self, event: &QuestEvent) -> Result<(), GoalError> {
        // Ensure parent directory exists.
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| GoalError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| GoalError::IoError {
                path: self.path.display().to_string(),
                source,
            })?;

        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json).map_err(|source| GoalError::IoError {
            path: self.path.display().to_string(),
            source,
        })?;

        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// Errors from individual sinks are logged via tracing but don't prevent
/// other sinks from receiving the event.
#[derive(Default)]
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification sink.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &QuestEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!("notification sink error: {}", e);
            }
        }
    }
}
