// goal.rs — Goal: a named, point-valued objective with a completion policy.
//
// The three kinds form a closed set, so they are modeled as one enum
// rather than a trait with three implementations; every operation
// dispatches with a single `match`.
//
// Progress rules:
//   Simple    — completes after exactly one progress event
//   Eternal   — never completes; every event awards points
//   Checklist — completes when the count reaches target; the finishing
//               event awards the bonus on top of the base points

/// The kind-specific state of a goal.
///
/// In Rust, enums can carry data per variant, so the checklist counters
/// live inside the `Checklist` variant and simply don't exist for the
/// other kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalKind {
    /// One-shot goal. Completed after a single progress event.
    Simple { completed: bool },

    /// Never completes. Every progress event awards points.
    Eternal,

    /// Completes after `target_count` progress events. Completion is
    /// derived from the count, never stored separately.
    Checklist {
        current_count: u32,
        target_count: u32,
        bonus_points: u32,
    },
}

/// A goal: name, base point value, and kind-specific completion state.
///
/// `points` is fixed at creation; there is no setter. The name is the
/// lookup key used by [`crate::GoalManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    name: String,
    points: u32,
    kind: GoalKind,
}

impl Goal {
    /// Create a simple (one-shot) goal.
    pub fn simple(name: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            points,
            kind: GoalKind::Simple { completed: false },
        }
    }

    /// Create an eternal goal.
    pub fn eternal(name: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            points,
            kind: GoalKind::Eternal,
        }
    }

    /// Create a checklist goal with a target count and a one-time bonus.
    pub fn checklist(
        name: impl Into<String>,
        points: u32,
        target_count: u32,
        bonus_points: u32,
    ) -> Self {
        Self {
            name: name.into(),
            points,
            kind: GoalKind::Checklist {
                current_count: 0,
                target_count,
                bonus_points,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn kind(&self) -> &GoalKind {
        &self.kind
    }

    /// The wire tag for this goal's kind, as used by the save-file codec
    /// and by [`crate::GoalManager::create_goal`].
    pub fn kind_tag(&self) -> &'static str {
        match self.kind {
            GoalKind::Simple { .. } => "Simple",
            GoalKind::Eternal => "Eternal",
            GoalKind::Checklist { .. } => "Checklist",
        }
    }

    /// Record one progress event and return the score delta it earned.
    ///
    /// Completed simple and checklist goals are absorbing states: further
    /// calls return 0 and change nothing. The checklist call that makes
    /// the count reach target returns `points + bonus_points`; earlier
    /// calls return `points` alone.
    pub fn record_progress(&mut self) -> u32 {
        match &mut self.kind {
            GoalKind::Simple { completed } => {
                if *completed {
                    0
                } else {
                    *completed = true;
                    self.points
                }
            }
            GoalKind::Eternal => self.points,
            GoalKind::Checklist {
                current_count,
                target_count,
                bonus_points,
            } => {
                if *current_count >= *target_count {
                    return 0;
                }
                *current_count += 1;
                if *current_count == *target_count {
                    self.points + *bonus_points
                } else {
                    self.points
                }
            }
        }
    }

    /// Whether this goal has reached its completion state.
    ///
    /// Pure query, no side effects. Eternal goals are never complete.
    pub fn is_complete(&self) -> bool {
        match &self.kind {
            GoalKind::Simple { completed } => *completed,
            GoalKind::Eternal => false,
            GoalKind::Checklist {
                current_count,
                target_count,
                ..
            } => current_count >= target_count,
        }
    }

    /// Human-readable completion summary, e.g. `[ ] Not Completed (2/3)`.
    pub fn status_line(&self) -> String {
        match &self.kind {
            GoalKind::Simple { completed: true } => "[X] Completed".to_string(),
            GoalKind::Simple { completed: false } => "[ ] Not Completed".to_string(),
            GoalKind::Eternal => "[ ] Always Active".to_string(),
            GoalKind::Checklist {
                current_count,
                target_count,
                ..
            } => {
                if current_count >= target_count {
                    "[X] Completed".to_string()
                } else {
                    format!("[ ] Not Completed ({current_count}/{target_count})")
                }
            }
        }
    }

    /// Static descriptive summary: name, kind, and point values.
    ///
    /// Does not change as progress is recorded; pair it with
    /// [`Goal::status_line`] for display.
    pub fn detail_line(&self) -> String {
        match &self.kind {
            GoalKind::Simple { .. } => format!("{} ({} pts)", self.name, self.points),
            GoalKind::Eternal => format!("{} ({} pts each)", self.name, self.points),
            GoalKind::Checklist {
                target_count,
                bonus_points,
                ..
            } => format!(
                "{} ({} pts, +{} bonus at {})",
                self.name, self.points, bonus_points, target_count
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_goal_completes_on_first_progress() {
        let mut goal = Goal::simple("Read the manual", 100);
        assert!(!goal.is_complete());

        assert_eq!(goal.record_progress(), 100);
        assert!(goal.is_complete());
    }

    #[test]
    fn simple_goal_repeat_progress_is_a_no_op() {
        let mut goal = Goal::simple("Read the manual", 100);
        goal.record_progress();

        assert_eq!(goal.record_progress(), 0);
        assert_eq!(goal.record_progress(), 0);
        assert!(goal.is_complete());
    }

    #[test]
    fn eternal_goal_always_awards_and_never_completes() {
        let mut goal = Goal::eternal("Daily review", 5);
        for _ in 0..10 {
            assert_eq!(goal.record_progress(), 5);
            assert!(!goal.is_complete());
        }
    }

    #[test]
    fn checklist_goal_awards_bonus_exactly_on_target() {
        let mut goal = Goal::checklist("Gym", 50, 3, 20);

        assert_eq!(goal.record_progress(), 50);
        assert!(!goal.is_complete());
        assert_eq!(goal.record_progress(), 50);
        assert!(!goal.is_complete());

        // Third event reaches the target: base + bonus, and completion flips.
        assert_eq!(goal.record_progress(), 70);
        assert!(goal.is_complete());
    }

    #[test]
    fn checklist_goal_past_target_is_a_no_op() {
        let mut goal = Goal::checklist("Gym", 50, 2, 10);
        goal.record_progress();
        goal.record_progress();
        assert!(goal.is_complete());

        // No double bonus, no count past target.
        assert_eq!(goal.record_progress(), 0);
        assert_eq!(goal.record_progress(), 0);
        assert_eq!(
            goal.kind(),
            &GoalKind::Checklist {
                current_count: 2,
                target_count: 2,
                bonus_points: 10
            }
        );
    }

    #[test]
    fn checklist_with_target_one_awards_bonus_immediately() {
        let mut goal = Goal::checklist("One-off", 10, 1, 5);
        assert_eq!(goal.record_progress(), 15);
        assert!(goal.is_complete());
    }

    #[test]
    fn status_line_tracks_checklist_count() {
        let mut goal = Goal::checklist("Gym", 50, 3, 20);
        assert_eq!(goal.status_line(), "[ ] Not Completed (0/3)");

        goal.record_progress();
        assert_eq!(goal.status_line(), "[ ] Not Completed (1/3)");

        goal.record_progress();
        goal.record_progress();
        assert_eq!(goal.status_line(), "[X] Completed");
    }

    #[test]
    fn status_line_for_simple_and_eternal() {
        let mut simple = Goal::simple("Read", 100);
        assert_eq!(simple.status_line(), "[ ] Not Completed");
        simple.record_progress();
        assert_eq!(simple.status_line(), "[X] Completed");

        let eternal = Goal::eternal("Pray", 5);
        assert_eq!(eternal.status_line(), "[ ] Always Active");
    }

    #[test]
    fn detail_line_is_independent_of_progress() {
        let mut goal = Goal::checklist("Gym", 50, 3, 20);
        let before = goal.detail_line();
        goal.record_progress();
        assert_eq!(goal.detail_line(), before);
        assert_eq!(before, "Gym (50 pts, +20 bonus at 3)");
    }

    #[test]
    fn kind_tags() {
        assert_eq!(Goal::simple("a", 1).kind_tag(), "Simple");
        assert_eq!(Goal::eternal("b", 1).kind_tag(), "Eternal");
        assert_eq!(Goal::checklist("c", 1, 2, 3).kind_tag(), "Checklist");
    }
}
