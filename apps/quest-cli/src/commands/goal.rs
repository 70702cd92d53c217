// goal.rs — Non-interactive goal commands: new, record, list, score.
//
// Each command loads the save file if one exists, performs its operation,
// and persists mutations before returning. Events are appended to the
// JSONL log as a side channel; the save file stays the source of truth.

use quest_goal::{EventDispatcher, GoalManager, LogSink, QuestEvent};

use crate::config::QuestConfig;

pub fn create(
    config: &QuestConfig,
    kind: &str,
    name: &str,
    points: u32,
    target: Option<u32>,
    bonus: Option<u32>,
) -> anyhow::Result<()> {
    let mut manager = load_or_new(config)?;
    let goal = manager.create_goal(kind, name, points, target, bonus)?;

    config.ensure_layout()?;
    manager.save(&config.save_file)?;

    let events = dispatcher(config);
    events.dispatch(&QuestEvent::goal_created(
        goal.name(),
        goal.kind_tag(),
        goal.points(),
    ));

    println!("Created {} goal: {}", goal.kind_tag(), goal.detail_line());
    Ok(())
}

pub fn record(config: &QuestConfig, name: &str) -> anyhow::Result<()> {
    let mut manager = load_or_new(config)?;

    let was_complete = goal_is_complete(&manager, name);
    let awarded = manager.record_progress(name)?;

    config.ensure_layout()?;
    manager.save(&config.save_file)?;

    let events = dispatcher(config);
    events.dispatch(&QuestEvent::progress_recorded(
        name,
        awarded,
        manager.score(),
    ));

    if !was_complete && goal_is_complete(&manager, name) {
        events.dispatch(&QuestEvent::goal_completed(name, manager.score()));
        println!(
            "'{}' completed! +{} point(s). Score: {}.",
            name,
            awarded,
            manager.score()
        );
    } else if awarded == 0 {
        println!("'{}' is already complete; no points awarded.", name);
    } else {
        println!("+{} point(s). Score: {}.", awarded, manager.score());
    }
    Ok(())
}

pub fn list(config: &QuestConfig) -> anyhow::Result<()> {
    let manager = load_or_new(config)?;
    print_goals(&manager);
    Ok(())
}

pub fn score(config: &QuestConfig) -> anyhow::Result<()> {
    let manager = load_or_new(config)?;
    println!("Score: {} point(s).", manager.score());
    Ok(())
}

/// Load the save file if present, otherwise start fresh.
fn load_or_new(config: &QuestConfig) -> anyhow::Result<GoalManager> {
    let mut manager = GoalManager::new();
    if config.save_file.exists() {
        manager.load(&config.save_file)?;
    }
    Ok(manager)
}

fn dispatcher(config: &QuestConfig) -> EventDispatcher {
    let mut events = EventDispatcher::new();
    events.add_sink(Box::new(LogSink::new(&config.events_log)));
    events
}

fn goal_is_complete(manager: &GoalManager, name: &str) -> bool {
    manager
        .goals()
        .iter()
        .find(|g| g.name() == name)
        .is_some_and(|g| g.is_complete())
}

pub(crate) fn print_goals(manager: &GoalManager) {
    let listed = manager.list_goals();
    if listed.is_empty() {
        println!("No goals yet. Create one with 'new'.");
        return;
    }

    println!("{:<28} {:<44}", "STATUS", "GOAL");
    println!("{}", "-".repeat(72));
    for (detail, status) in &listed {
        println!("{:<28} {:<44}", status, detail);
    }
    println!("\n{} goal(s), {} point(s).", listed.len(), manager.score());
}
