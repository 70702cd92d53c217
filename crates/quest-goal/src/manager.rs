// manager.rs — GoalManager: the goal collection and the running score.
//
// The manager owns the only mutable state in the system: an ordered list
// of goals (insertion order is display order) and a non-negative score
// accumulator. Progress is a pure-return contract: the goal reports the
// delta it earned and the manager applies it, so no score reference is
// ever shared.
//
// Save and load go through the codec. Load is all-or-nothing: the whole
// file is decoded before any field of the manager is replaced.

use std::fs;
use std::path::Path;

use crate::codec;
use crate::error::GoalError;
use crate::goal::Goal;

/// Owns the goal list and cumulative score; mediates progress recording.
#[derive(Debug, Default)]
pub struct GoalManager {
    score: u32,
    goals: Vec<Goal>,
}

impl GoalManager {
    /// Create an empty manager with a zero score.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cumulative score: the sum of every delta ever applied. No
    /// operation subtracts from it.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The goals in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Create a goal of the given kind and append it to the list.
    ///
    /// Kind tags are matched case-insensitively. Checklist goals require
    /// both `target_count` and `bonus_points`; anything else fails with
    /// [`GoalError::MissingParameters`] and appends nothing. Returns a
    /// copy of the freshly created goal.
    pub fn create_goal(
        &mut self,
        kind: &str,
        name: impl Into<String>,
        points: u32,
        target_count: Option<u32>,
        bonus_points: Option<u32>,
    ) -> Result<Goal, GoalError> {
        let goal = if kind.eq_ignore_ascii_case("Simple") {
            Goal::simple(name, points)
        } else if kind.eq_ignore_ascii_case("Eternal") {
            Goal::eternal(name, points)
        } else if kind.eq_ignore_ascii_case("Checklist") {
            match (target_count, bonus_points) {
                (Some(target), Some(bonus)) => Goal::checklist(name, points, target, bonus),
                _ => return Err(GoalError::MissingParameters),
            }
        } else {
            return Err(GoalError::InvalidVariant(kind.to_string()));
        };

        tracing::debug!(goal = goal.name(), kind = goal.kind_tag(), points, "goal created");
        self.goals.push(goal.clone());
        Ok(goal)
    }

    /// Record one progress event on the first goal whose name matches.
    ///
    /// Applies the goal's delta to the score and returns it. An unknown
    /// name fails with [`GoalError::GoalNotFound`] and leaves the score
    /// untouched.
    pub fn record_progress(&mut self, name: &str) -> Result<u32, GoalError> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.name() == name)
            .ok_or_else(|| GoalError::GoalNotFound(name.to_string()))?;

        let awarded = goal.record_progress();
        self.score += awarded;
        tracing::debug!(goal = name, awarded, score = self.score, "progress recorded");
        Ok(awarded)
    }

    /// A read-only display snapshot: `(detail_line, status_line)` per goal,
    /// in insertion order.
    pub fn list_goals(&self) -> Vec<(String, String)> {
        self.goals
            .iter()
            .map(|g| (g.detail_line(), g.status_line()))
            .collect()
    }

    /// Serialize the score and all goals to the save file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GoalError> {
        let path = path.as_ref();
        let text = codec::encode(self.score, &self.goals);
        fs::write(path, text).map_err(|source| GoalError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), goals = self.goals.len(), "save written");
        Ok(())
    }

    /// Replace this manager's state with the contents of the save file.
    ///
    /// Fails with [`GoalError::NotFound`] if the file does not exist and
    /// [`GoalError::ParseFailure`] on malformed content. Either the whole
    /// load succeeds or the manager's prior state is left untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), GoalError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GoalError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| GoalError::IoError {
            path: path.display().to_string(),
            source,
        })?;

        // Decode fully before touching our fields.
        let (score, goals) = codec::decode(&text)?;
        self.score = score;
        self.goals = goals;
        tracing::debug!(path = %path.display(), goals = self.goals.len(), score, "save loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_goal_appends_in_insertion_order() {
        let mut manager = GoalManager::new();
        manager.create_goal("Simple", "Read", 100, None, None).unwrap();
        manager.create_goal("Eternal", "Pray", 5, None, None).unwrap();
        manager
            .create_goal("Checklist", "Gym", 50, Some(3), Some(20))
            .unwrap();

        let names: Vec<&str> = manager.goals().iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["Read", "Pray", "Gym"]);
    }

    #[test]
    fn create_goal_accepts_any_tag_case() {
        let mut manager = GoalManager::new();
        let goal = manager
            .create_goal("checklist", "Gym", 50, Some(3), Some(20))
            .unwrap();
        assert_eq!(goal.kind_tag(), "Checklist");
    }

    #[test]
    fn create_goal_unknown_kind_fails() {
        let mut manager = GoalManager::new();
        let result = manager.create_goal("Weekly", "X", 10, None, None);
        assert!(matches!(result, Err(GoalError::InvalidVariant(_))));
        assert!(manager.goals().is_empty());
    }

    #[test]
    fn create_checklist_without_parameters_fails_and_appends_nothing() {
        let mut manager = GoalManager::new();
        let result = manager.create_goal("Checklist", "X", 10, None, None);
        assert!(matches!(result, Err(GoalError::MissingParameters)));
        let result = manager.create_goal("Checklist", "X", 10, Some(3), None);
        assert!(matches!(result, Err(GoalError::MissingParameters)));
        assert!(manager.goals().is_empty());
    }

    #[test]
    fn record_progress_applies_delta_to_score() {
        let mut manager = GoalManager::new();
        manager.create_goal("Simple", "Read", 100, None, None).unwrap();

        assert_eq!(manager.record_progress("Read").unwrap(), 100);
        assert_eq!(manager.score(), 100);

        // Completed goal: zero delta, score unchanged.
        assert_eq!(manager.record_progress("Read").unwrap(), 0);
        assert_eq!(manager.score(), 100);
    }

    #[test]
    fn record_progress_unknown_name_leaves_score_unchanged() {
        let mut manager = GoalManager::new();
        manager.create_goal("Eternal", "Pray", 5, None, None).unwrap();
        manager.record_progress("Pray").unwrap();

        let result = manager.record_progress("Fast");
        assert!(matches!(result, Err(GoalError::GoalNotFound(_))));
        assert_eq!(manager.score(), 5);
    }

    #[test]
    fn score_is_the_sum_of_all_deltas() {
        // (50 + 50 + 70) + (5 + 5) + 100 = 280.
        let mut manager = GoalManager::new();
        manager.create_goal("Simple", "Read", 100, None, None).unwrap();
        manager.create_goal("Eternal", "Pray", 5, None, None).unwrap();
        manager
            .create_goal("Checklist", "Gym", 50, Some(3), Some(20))
            .unwrap();

        let mut total = 0;
        for _ in 0..3 {
            total += manager.record_progress("Gym").unwrap();
        }
        for _ in 0..2 {
            total += manager.record_progress("Pray").unwrap();
        }
        total += manager.record_progress("Read").unwrap();

        assert_eq!(total, 280);
        assert_eq!(manager.score(), 280);

        let complete: Vec<bool> = manager.goals().iter().map(|g| g.is_complete()).collect();
        assert_eq!(complete, vec![true, false, true]);
    }

    #[test]
    fn list_goals_pairs_detail_with_status() {
        let mut manager = GoalManager::new();
        manager.create_goal("Simple", "Read", 100, None, None).unwrap();
        manager.record_progress("Read").unwrap();

        let listed = manager.list_goals();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0, "Read (100 pts)");
        assert_eq!(listed[0].1, "[X] Completed");
    }

    #[test]
    fn duplicate_names_record_against_the_first_match() {
        let mut manager = GoalManager::new();
        manager.create_goal("Simple", "Read", 100, None, None).unwrap();
        manager.create_goal("Simple", "Read", 10, None, None).unwrap();

        assert_eq!(manager.record_progress("Read").unwrap(), 100);
        assert!(manager.goals()[0].is_complete());
        assert!(!manager.goals()[1].is_complete());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("goals.txt");

        let mut manager = GoalManager::new();
        manager.create_goal("Simple", "Read", 100, None, None).unwrap();
        manager.create_goal("Eternal", "Pray", 5, None, None).unwrap();
        manager
            .create_goal("Checklist", "Gym", 50, Some(3), Some(20))
            .unwrap();
        manager.record_progress("Gym").unwrap();
        manager.record_progress("Pray").unwrap();
        manager.save(&path).unwrap();

        let mut restored = GoalManager::new();
        restored.load(&path).unwrap();

        assert_eq!(restored.score(), manager.score());
        assert_eq!(restored.goals(), manager.goals());
    }

    #[test]
    fn load_missing_file_fails_with_not_found() {
        let dir = tempdir().unwrap();
        let mut manager = GoalManager::new();
        let result = manager.load(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(GoalError::NotFound(_))));
    }

    #[test]
    fn failed_load_leaves_prior_state_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("goals.txt");
        std::fs::write(&path, "Score:10\nSimple,Read,not-a-number,false\n").unwrap();

        let mut manager = GoalManager::new();
        manager.create_goal("Eternal", "Pray", 5, None, None).unwrap();
        manager.record_progress("Pray").unwrap();

        let result = manager.load(&path);
        assert!(matches!(result, Err(GoalError::ParseFailure { .. })));

        // All-or-nothing: the half-read file replaced nothing.
        assert_eq!(manager.score(), 5);
        assert_eq!(manager.goals().len(), 1);
        assert_eq!(manager.goals()[0].name(), "Pray");
    }

    #[test]
    fn loaded_manager_keeps_accumulating_on_top_of_saved_score() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("goals.txt");

        let mut manager = GoalManager::new();
        manager
            .create_goal("Checklist", "Gym", 50, Some(3), Some(20))
            .unwrap();
        manager.record_progress("Gym").unwrap();
        manager.record_progress("Gym").unwrap();
        manager.save(&path).unwrap();

        let mut resumed = GoalManager::new();
        resumed.load(&path).unwrap();
        assert_eq!(resumed.score(), 100);

        // Third event finishes the checklist and earns the bonus.
        assert_eq!(resumed.record_progress("Gym").unwrap(), 70);
        assert_eq!(resumed.score(), 170);
    }
}
