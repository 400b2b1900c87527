mod config;
mod console;
mod domain;
mod logging;
mod notifications;
mod persistence;
mod ticker;
mod validate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use console::TimerOptions;
use domain::{Pomodoro, PomodoroSettings, Task};
use persistence::{
    ensure_data_dir, init_local_data_dir, CardStore, NewTask, TaskStore, CARDS_FILE, TASKS_FILE,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "studydesk")]
#[command(about = "A terminal study desk: to-do list, flashcards and a pomodoro timer")]
#[command(long_about = None)]
struct Cli {
    /// Path to config.toml. Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .studydesk directory in the current directory
    Init,
    /// Show or write the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Manage the to-do list
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },
    /// Run a pomodoro cycle in the terminal
    Timer {
        /// Work session length in minutes (15-60)
        #[arg(long)]
        work: Option<u32>,
        /// Short break length in minutes (3-15)
        #[arg(long)]
        short: Option<u32>,
        /// Long break length in minutes (10-45)
        #[arg(long)]
        long: Option<u32>,
        /// Number of work sessions before the long break
        #[arg(long)]
        sessions: Option<u32>,
        /// One-minute work and break phases for trying the timer out
        #[arg(long)]
        demo: bool,
    },
    /// Manage and review flashcards
    Cards {
        #[command(subcommand)]
        action: CardsAction,
    },
    /// Run a single validator and print the verdict
    Check {
        #[command(subcommand)]
        field: CheckField,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config path and the effective settings
    Show,
    /// Write a config file with default settings if none exists
    Init,
}

#[derive(Subcommand)]
enum TodoAction {
    /// Add a task
    Add {
        /// Task title
        header: String,
        /// Longer description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Due date (MM/DD/YYYY)
        #[arg(long, default_value = "")]
        due: String,
        /// Due time (HH:MM), requires --due
        #[arg(long, default_value = "")]
        at: String,
        /// Tag, may be repeated
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// List tasks in order
    List,
    /// Mark a task as complete
    Done { number: usize },
    /// Mark a task as not complete
    Undo { number: usize },
    /// Move a task one place up
    Up { number: usize },
    /// Move a task one place down
    Down { number: usize },
    /// Delete a task
    Rm { number: usize },
}

#[derive(Subcommand)]
enum CardsAction {
    /// Add a flashcard
    Add { front: String, back: String },
    /// List all flashcards
    List,
    /// Show one card
    Show {
        number: usize,
        /// Show the back instead of the front
        #[arg(long)]
        back: bool,
    },
    /// Delete a flashcard
    Rm { number: usize },
    /// Flip through the deck interactively
    Review,
}

#[derive(Subcommand)]
enum CheckField {
    /// Task title
    Title { value: String },
    /// Task description
    Description { value: String },
    /// Task due date (MM/DD/YYYY, up to five years ahead)
    Due { value: String },
    /// Calendar date (MM/DD/YYYY, today or later)
    Date { value: String },
    /// Clock time (HH:MM)
    Time { value: String },
    /// Date and time together, not in the past
    Datetime { date: String, time: String },
    /// Task tags
    Tags { tags: Vec<String> },
    /// Flashcard front and back
    Card { front: String, back: String },
    /// Number of cards in a deck
    Deck {
        #[arg(allow_negative_numbers = true)]
        size: Option<i64>,
    },
    /// Card count between 1 and 1000
    Amount {
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
    /// Source text for a lookup
    Source { text: String },
    /// List of short strings
    List { items: Vec<String> },
    /// Work session minutes
    Work {
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
    /// Short break minutes
    Short {
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
    /// Long break minutes
    Long {
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref());

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_data_dir()?;
            println!("Initialized studydesk directory: {}", data_dir.display());
            println!();
            println!("Tasks and flashcards in this directory tree will now be stored there.");
            Ok(())
        }
        Some(Commands::Config { action }) => run_config(action, cli.config, &config),
        Some(Commands::Check { field }) => run_check(field),
        command => {
            let data_dir = ensure_data_dir(config.data_dir.as_deref())?;
            if let Err(e) = logging::init_logging(&config.log_level, &data_dir) {
                eprintln!("Warning: logging disabled: {:#}", e);
            }

            match command {
                Some(Commands::Todo { action }) => {
                    run_todo(action, TaskStore::open(data_dir.join(TASKS_FILE)))
                }
                Some(Commands::Timer {
                    work,
                    short,
                    long,
                    sessions,
                    demo,
                }) => run_timer(&config, work, short, long, sessions, demo),
                Some(Commands::Cards { action }) => {
                    run_cards(action, CardStore::open(data_dir.join(CARDS_FILE)))
                }
                _ => run_todo(TodoAction::List, TaskStore::open(data_dir.join(TASKS_FILE))),
            }
        }
    }
}

fn run_config(action: ConfigAction, path: Option<PathBuf>, config: &Config) -> Result<()> {
    let path = path.unwrap_or_else(Config::default_path);
    match action {
        ConfigAction::Show => {
            println!("# {}", path.display());
            print!(
                "{}",
                toml::to_string_pretty(config).context("Failed to render config")?
            );
        }
        ConfigAction::Init => {
            if path.exists() {
                anyhow::bail!("Config file already exists: {}", path.display());
            }
            Config::default().save(&path)?;
            println!("Wrote default config: {}", path.display());
        }
    }
    Ok(())
}

/// Convert a 1-based number from the command line to an index
fn to_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .context("Numbers start at 1; see `studydesk todo list`")
}

fn print_task(number: usize, task: &Task) {
    let mut line = format!("{:>3}. {} {}", number, task.check_mark(), task.header);
    if task.has_due_date() {
        line.push_str(&format!("  (due {}", task.due_date));
        if !task.due_time.is_empty() {
            line.push_str(&format!(" {}", task.due_time));
        }
        line.push(')');
    }
    for tag in &task.tags {
        line.push_str(&format!("  #{}", tag));
    }
    println!("{}", line);
    if !task.description.is_empty() {
        println!("         {}", task.description);
    }
}

fn run_todo(action: TodoAction, mut store: TaskStore) -> Result<()> {
    match action {
        TodoAction::Add {
            header,
            description,
            due,
            at,
            tags,
        } => {
            let new_task = NewTask::new(header)
                .description(description)
                .due_date(due)
                .due_time(at)
                .tags(tags);
            let index = store.add(new_task)?;
            if let Some(task) = store.get(index) {
                print_task(index + 1, task);
            }
        }
        TodoAction::List => {
            if store.is_empty() {
                println!("No tasks yet in {}.", store.path().display());
                println!("Add one with `studydesk todo add \"Title\"`.");
                return Ok(());
            }
            let summary = store.summary(chrono::Local::now().date_naive());
            println!(
                "Tasks: {} total, {} done, {} pending, {} overdue",
                summary.total, summary.done, summary.pending, summary.overdue
            );
            for (i, task) in store.tasks().iter().enumerate() {
                print_task(i + 1, task);
            }
        }
        TodoAction::Done { number } => {
            report_ignored(store.toggle_complete(to_index(number)?, true)?, number);
        }
        TodoAction::Undo { number } => {
            report_ignored(store.toggle_complete(to_index(number)?, false)?, number);
        }
        TodoAction::Up { number } => {
            report_ignored(store.move_up(to_index(number)?)?, number);
        }
        TodoAction::Down { number } => {
            report_ignored(store.move_down(to_index(number)?)?, number);
        }
        TodoAction::Rm { number } => match store.delete(to_index(number)?)? {
            Some(task) => println!("Deleted: {}", task.header),
            None => report_ignored(false, number),
        },
    }
    Ok(())
}

fn report_ignored(changed: bool, number: usize) {
    if !changed {
        println!("Nothing to do for task #{}.", number);
    }
}

fn run_timer(
    config: &Config,
    work: Option<u32>,
    short: Option<u32>,
    long: Option<u32>,
    sessions: Option<u32>,
    demo: bool,
) -> Result<()> {
    let mut pomodoro = config.pomodoro.clone();
    if let Some(sessions) = sessions {
        pomodoro.sessions = sessions;
    }

    let settings = if demo {
        PomodoroSettings {
            work_minutes: 1,
            short_break_minutes: 1,
            long_break_minutes: 2,
            sessions: pomodoro.sessions.max(1),
        }
    } else {
        if let Some(work) = work {
            pomodoro.work_minutes = work;
        }
        if let Some(short) = short {
            pomodoro.short_break_minutes = short;
        }
        if let Some(long) = long {
            pomodoro.long_break_minutes = long;
        }
        pomodoro.validate()?;
        pomodoro.settings()
    };

    println!("Pomodoro Timer Started!");
    let mut timer = Pomodoro::new(settings);
    console::run_pomodoro(
        &mut timer,
        TimerOptions {
            notifications: config.notifications,
            allow_auto_dnd: config.allow_auto_dnd,
        },
    )
}

fn run_cards(action: CardsAction, mut store: CardStore) -> Result<()> {
    match action {
        CardsAction::Add { front, back } => {
            let index = store.add(&front, &back)?;
            println!("Added card #{}.", index + 1);
        }
        CardsAction::List => {
            if store.deck().is_empty() {
                println!("No flashcards yet in {}.", store.path().display());
            }
            for (i, card) in store.deck().cards().iter().enumerate() {
                println!("{:>3}. {}  |  {}", i + 1, card.front, card.back);
            }
        }
        CardsAction::Show { number, back } => {
            let deck = store.deck_mut();
            if !deck.go_to(to_index(number)?) {
                anyhow::bail!("No card #{} (deck has {})", number, deck.len());
            }
            if back {
                deck.flip();
            }
            println!("{}", deck.visible_side().unwrap_or_default());
        }
        CardsAction::Rm { number } => match store.remove(to_index(number)?)? {
            Some(card) => println!("Deleted: {}", card.front),
            None => println!("Nothing to do for card #{}.", number),
        },
        CardsAction::Review => console::review_cards(store.deck_mut())?,
    }
    Ok(())
}

fn verdict(valid: bool) -> Result<()> {
    if valid {
        println!("valid");
        Ok(())
    } else {
        anyhow::bail!("invalid")
    }
}

fn run_check(field: CheckField) -> Result<()> {
    use validate::{
        validate_card_amount, validate_date, validate_datetime, validate_deck, validate_due_date,
        validate_flashcard, validate_long_timer, validate_short_timer, validate_source_text,
        validate_string_list, validate_tags, validate_task_description, validate_task_title,
        validate_time, validate_work_timer,
    };

    let result = match field {
        CheckField::Title { value } => validate_task_title(&value),
        CheckField::Description { value } => validate_task_description(&value),
        CheckField::Due { value } => validate_due_date(&value),
        CheckField::Tags { tags } => validate_tags(&tags),
        CheckField::Card { front, back } => validate_flashcard(&front, &back),
        CheckField::Date { value } => return verdict(validate_date(&value)),
        CheckField::Time { value } => return verdict(validate_time(&value)),
        CheckField::Datetime { date, time } => return verdict(validate_datetime(&date, &time)),
        CheckField::Deck { size } => return verdict(validate_deck(size)),
        CheckField::Amount { count } => return verdict(validate_card_amount(count)),
        CheckField::Source { text } => return verdict(validate_source_text(&text)),
        CheckField::List { items } => {
            let items: Vec<&str> = items.iter().map(String::as_str).collect();
            return verdict(validate_string_list(&items));
        }
        CheckField::Work { minutes } => return verdict(validate_work_timer(minutes)),
        CheckField::Short { minutes } => return verdict(validate_short_timer(minutes)),
        CheckField::Long { minutes } => return verdict(validate_long_timer(minutes)),
    };

    match result {
        Ok(()) => verdict(true),
        Err(e) => anyhow::bail!("invalid: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_todo_add() {
        let cli = Cli::try_parse_from([
            "studydesk",
            "todo",
            "add",
            "Essay",
            "-d",
            "Draft",
            "--due",
            "11/15/2026",
            "-t",
            "english",
            "-t",
            "week-2",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Todo {
                action:
                    TodoAction::Add {
                        header,
                        description,
                        due,
                        at,
                        tags,
                    },
            }) => {
                assert_eq!(header, "Essay");
                assert_eq!(description, "Draft");
                assert_eq!(due, "11/15/2026");
                assert_eq!(at, "");
                assert_eq!(tags, vec!["english", "week-2"]);
            }
            _ => panic!("expected todo add"),
        }
    }

    #[test]
    fn test_cli_parses_timer_overrides() {
        let cli = Cli::try_parse_from(["studydesk", "timer", "--work", "50", "--sessions", "2"])
            .unwrap();
        match cli.command {
            Some(Commands::Timer {
                work,
                sessions,
                demo,
                ..
            }) => {
                assert_eq!(work, Some(50));
                assert_eq!(sessions, Some(2));
                assert!(!demo);
            }
            _ => panic!("expected timer"),
        }
    }

    #[test]
    fn test_to_index_is_one_based() {
        assert_eq!(to_index(1).unwrap(), 0);
        assert_eq!(to_index(4).unwrap(), 3);
        assert!(to_index(0).is_err());
    }

    #[test]
    fn test_run_check_reports_invalid() {
        assert!(run_check(CheckField::Work { minutes: 25 }).is_ok());
        assert!(run_check(CheckField::Work { minutes: 5 }).is_err());
        assert!(run_check(CheckField::Title {
            value: "<script>".into()
        })
        .is_err());
        assert!(run_check(CheckField::Deck { size: None }).is_err());
        assert!(run_check(CheckField::Source {
            text: "a".repeat(10_000)
        })
        .is_ok());
    }

    #[test]
    fn test_run_todo_against_temp_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(TASKS_FILE);

        run_todo(
            TodoAction::Add {
                header: "Read chapter 4".into(),
                description: String::new(),
                due: String::new(),
                at: String::new(),
                tags: Vec::new(),
            },
            TaskStore::open(&path),
        )
        .unwrap();
        run_todo(TodoAction::Done { number: 1 }, TaskStore::open(&path)).unwrap();
        run_todo(TodoAction::Up { number: 1 }, TaskStore::open(&path)).unwrap();
        assert!(run_todo(TodoAction::Rm { number: 0 }, TaskStore::open(&path)).is_err());

        let store = TaskStore::open(&path);
        assert_eq!(store.tasks().len(), 1);
        assert!(store.get(0).unwrap().completed);
    }
}
