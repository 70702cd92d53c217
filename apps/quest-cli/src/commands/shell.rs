// shell.rs — Interactive quest session.
//
// A readline loop over the same operations the subcommands expose: new,
// record, list, score, save, load. The shell owns all raw-input
// validation; integers are parsed and checked here before anything
// reaches the manager. Manager errors are printed and the loop continues.

use anyhow::Result;
use quest_goal::{EventDispatcher, GoalManager, LogSink, QuestEvent};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::goal::print_goals;
use crate::config::QuestConfig;

/// One parsed shell command line.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    New,
    Record(String),
    List,
    Score,
    Save,
    Load,
    Help,
    Quit,
    Unknown(String),
}

impl ShellCommand {
    /// Split a line into a command word and its argument, if any.
    fn parse(line: &str) -> Self {
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        match head.to_ascii_lowercase().as_str() {
            "new" => ShellCommand::New,
            "record" => ShellCommand::Record(rest.to_string()),
            "list" => ShellCommand::List,
            "score" => ShellCommand::Score,
            "save" => ShellCommand::Save,
            "load" => ShellCommand::Load,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

pub fn execute(config: &QuestConfig) -> Result<()> {
    let mut manager = GoalManager::new();
    if config.save_file.exists() {
        manager.load(&config.save_file)?;
        println!(
            "Loaded {} goal(s), score {}.",
            manager.goals().len(),
            manager.score()
        );
    }

    let mut events = EventDispatcher::new();
    events.add_sink(Box::new(LogSink::new(&config.events_log)));

    println!("Eternal Quest. Type 'help' for commands, 'quit' to leave.");

    let mut rl = DefaultEditor::new()?;
    loop {
        let line = match rl.readline("quest> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(&line);

        match ShellCommand::parse(&line) {
            ShellCommand::Quit => break,
            cmd => {
                // Recoverable: print and return to the prompt.
                if let Err(e) = run_command(cmd, &mut manager, &events, config, &mut rl) {
                    println!("error: {e}");
                }
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn run_command(
    cmd: ShellCommand,
    manager: &mut GoalManager,
    events: &EventDispatcher,
    config: &QuestConfig,
    rl: &mut DefaultEditor,
) -> Result<()> {
    match cmd {
        ShellCommand::New => create_goal(manager, events, rl),
        ShellCommand::Record(name) if name.is_empty() => {
            println!("usage: record <name>");
            Ok(())
        }
        ShellCommand::Record(name) => record_progress(manager, events, &name),
        ShellCommand::List => {
            print_goals(manager);
            Ok(())
        }
        ShellCommand::Score => {
            println!("Score: {} point(s).", manager.score());
            Ok(())
        }
        ShellCommand::Save => {
            config.ensure_layout()?;
            manager.save(&config.save_file)?;
            events.dispatch(&QuestEvent::save_written(
                &config.save_file,
                manager.goals().len(),
            ));
            println!(
                "Saved {} goal(s) to {}.",
                manager.goals().len(),
                config.save_file.display()
            );
            Ok(())
        }
        ShellCommand::Load => {
            manager.load(&config.save_file)?;
            events.dispatch(&QuestEvent::save_loaded(
                &config.save_file,
                manager.goals().len(),
                manager.score(),
            ));
            println!(
                "Loaded {} goal(s), score {}.",
                manager.goals().len(),
                manager.score()
            );
            Ok(())
        }
        ShellCommand::Help => {
            print_help();
            Ok(())
        }
        // Handled by the caller; nothing to do here.
        ShellCommand::Quit => Ok(()),
        ShellCommand::Unknown(cmd) => {
            println!("unknown command '{cmd}', try 'help'");
            Ok(())
        }
    }
}

/// Prompt for each goal field in turn, validating before the manager is touched.
fn create_goal(
    manager: &mut GoalManager,
    events: &EventDispatcher,
    rl: &mut DefaultEditor,
) -> Result<()> {
    let kind = prompt(rl, "Kind (Simple/Eternal/Checklist): ")?;
    let kind = kind.trim();
    let name = prompt(rl, "Name: ")?;
    let points = prompt_number(rl, "Points: ")?;

    let (target, bonus) = if kind.eq_ignore_ascii_case("Checklist") {
        (
            Some(prompt_number(rl, "Target count: ")?),
            Some(prompt_number(rl, "Bonus points: ")?),
        )
    } else {
        (None, None)
    };

    let goal = manager.create_goal(kind, name.trim(), points, target, bonus)?;
    events.dispatch(&QuestEvent::goal_created(
        goal.name(),
        goal.kind_tag(),
        goal.points(),
    ));
    println!("Created: {}", goal.detail_line());
    Ok(())
}

fn record_progress(
    manager: &mut GoalManager,
    events: &EventDispatcher,
    name: &str,
) -> Result<()> {
    let was_complete = is_complete(manager, name);
    let awarded = manager.record_progress(name)?;
    events.dispatch(&QuestEvent::progress_recorded(
        name,
        awarded,
        manager.score(),
    ));

    if !was_complete && is_complete(manager, name) {
        events.dispatch(&QuestEvent::goal_completed(name, manager.score()));
        println!(
            "'{}' completed! +{} point(s). Score: {}.",
            name,
            awarded,
            manager.score()
        );
    } else if awarded == 0 {
        println!("'{name}' is already complete; no points awarded.");
    } else {
        println!("+{} point(s). Score: {}.", awarded, manager.score());
    }
    Ok(())
}

fn is_complete(manager: &GoalManager, name: &str) -> bool {
    manager
        .goals()
        .iter()
        .find(|g| g.name() == name)
        .is_some_and(|g| g.is_complete())
}

fn prompt(rl: &mut DefaultEditor, text: &str) -> Result<String> {
    Ok(rl.readline(text)?)
}

fn prompt_number(rl: &mut DefaultEditor, text: &str) -> Result<u32> {
    let raw = prompt(rl, text)?;
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| anyhow::anyhow!("'{raw}' is not a whole number"))
}

fn print_help() {
    println!("Commands:");
    println!("  new            create a goal (prompts for each field)");
    println!("  record <name>  record one progress event on a goal");
    println!("  list           show all goals with status");
    println!("  score          show the current score");
    println!("  save           write goals and score to the save file");
    println!("  load           replace goals and score from the save file");
    println!("  quit           leave the shell (unsaved changes are dropped)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_commands() {
        assert_eq!(ShellCommand::parse("list"), ShellCommand::List);
        assert_eq!(ShellCommand::parse("score"), ShellCommand::Score);
        assert_eq!(ShellCommand::parse("save"), ShellCommand::Save);
        assert_eq!(ShellCommand::parse("quit"), ShellCommand::Quit);
        assert_eq!(ShellCommand::parse("exit"), ShellCommand::Quit);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ShellCommand::parse("LIST"), ShellCommand::List);
        assert_eq!(ShellCommand::parse("Record Gym"), ShellCommand::Record("Gym".into()));
    }

    #[test]
    fn parse_record_keeps_the_full_name() {
        // Goal names may contain spaces.
        assert_eq!(
            ShellCommand::parse("record Morning run"),
            ShellCommand::Record("Morning run".into())
        );
    }

    #[test]
    fn parse_record_without_a_name() {
        assert_eq!(ShellCommand::parse("record"), ShellCommand::Record(String::new()));
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            ShellCommand::parse("destroy everything"),
            ShellCommand::Unknown("destroy".into())
        );
    }
}
