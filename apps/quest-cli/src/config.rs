// config.rs — Quest data layout.
//
// QuestConfig determines where quest state lives: the flat-text save file
// and the JSONL event log. The `for_root()` constructor generates the
// standard layout under a `.quest/` directory in the data root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem layout for quest state.
#[derive(Debug, Clone)]
pub struct QuestConfig {
    /// Directory the `.quest/` layout lives under.
    pub data_root: PathBuf,

    /// The flat-text save file (score + one line per goal).
    pub save_file: PathBuf,

    /// Path to the event notification log.
    pub events_log: PathBuf,
}

impl QuestConfig {
    /// Create a config with the standard `.quest/` layout for a data root.
    pub fn for_root(data_root: impl AsRef<Path>) -> Self {
        let root = data_root.as_ref().to_path_buf();
        let quest_dir = root.join(".quest");
        Self {
            save_file: quest_dir.join("goals.txt"),
            events_log: quest_dir.join("events.jsonl"),
            data_root: root,
        }
    }

    /// Create the `.quest/` directory if it doesn't exist yet.
    pub fn ensure_layout(&self) -> io::Result<()> {
        if let Some(parent) = self.save_file.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}
