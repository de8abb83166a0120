//! Menu-driven interaction loop.
//!
//! One menu cycle: clear, show the menu, read a selection, dispatch to a
//! handler, render the outcome, pause. Every user-input defect is reported
//! through the console and control returns to the menu; the loop ends only
//! on the exit choice, end of input, or a console I/O failure.

use tracing::debug;

use crate::error::{Error, Result};
use crate::output::{Console, Style};
use crate::store::{MarkOutcome, TaskStore, MAX_TASKS};

/// A parsed top-level menu selection.
///
/// Selections are the literal strings `"1"` through `"4"`; anything else,
/// including padded or empty input, falls through to `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Mark,
    Exit,
    Other(String),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => MenuChoice::Add,
            "2" => MenuChoice::List,
            "3" => MenuChoice::Mark,
            "4" => MenuChoice::Exit,
            other => MenuChoice::Other(other.to_string()),
        }
    }
}

/// Drive the menu until the user exits.
///
/// The store is owned by the caller; the loop holds no state of its own
/// beyond the current cycle. End of input is treated like the exit choice,
/// minus the goodbye message.
pub fn run(store: &mut TaskStore, console: &mut dyn Console) -> Result<()> {
    loop {
        console.clear()?;
        console.header("My Todo List")?;
        console.line(Style::Plain, "1. Add task")?;
        console.line(Style::Plain, "2. Show tasks")?;
        console.line(Style::Plain, "3. Mark task as done")?;
        console.line(Style::Plain, "4. Exit")?;

        let Some(input) = console.read_line("\nChoose an option: ")? else {
            return Ok(());
        };
        let choice = MenuChoice::parse(&input);
        debug!(?choice, "menu selection");

        match choice {
            MenuChoice::Add => add_task(store, console)?,
            MenuChoice::List => {
                console.clear()?;
                console.header("My Tasks")?;
                render_list(store, console)?;
                console.wait_for_key()?;
            }
            MenuChoice::Mark => mark_task(store, console)?,
            MenuChoice::Exit => {
                console.line(Style::Plain, "\nClosing the program gracefully. Bye!")?;
                console.wait_for_key()?;
                return Ok(());
            }
            MenuChoice::Other(_) => {
                console.line(Style::Info, "Invalid choice. Please try again.")?;
                console.wait_for_key()?;
            }
        }
    }
}

fn add_task(store: &mut TaskStore, console: &mut dyn Console) -> Result<()> {
    console.clear()?;
    console.header("Add Task")?;

    // A full store rejects the request before prompting, the same order the
    // store checks its own preconditions.
    if store.is_full() {
        report_error(console, &Error::CapacityExceeded { limit: MAX_TASKS })?;
        console.wait_for_key()?;
        return Ok(());
    }

    let Some(title) = console.read_line("Enter task title: ")? else {
        return Ok(());
    };

    match store.add(&title) {
        Ok(task) => {
            let message = format!("Task \"{}\" has been added.", task.title());
            console.line(Style::Success, &message)?;
        }
        Err(err) if err.is_recoverable() => report_error(console, &err)?,
        Err(err) => return Err(err),
    }
    console.wait_for_key()?;
    Ok(())
}

fn mark_task(store: &mut TaskStore, console: &mut dyn Console) -> Result<()> {
    console.clear()?;
    console.header("Mark as Done")?;

    if store.is_empty() {
        console.line(Style::Info, "There are no tasks to mark.")?;
        console.wait_for_key()?;
        return Ok(());
    }

    render_list(store, console)?;
    let prompt = "\nEnter the number of the task to mark as done: ";
    let Some(input) = console.read_line(prompt)? else {
        return Ok(());
    };

    // Any integer parses; negatives fail the range check like any other
    // number outside [1, len].
    let outcome = input
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidNumber {
            input: input.trim().to_string(),
        })
        .and_then(|value| match usize::try_from(value) {
            Ok(index) => store.mark_done(index),
            Err(_) => Err(Error::IndexOutOfRange {
                index: value,
                len: store.len(),
            }),
        });

    match outcome {
        Ok(MarkOutcome::Marked(task)) => {
            let message = format!("\"{}\" is now marked as done.", task.title());
            console.line(Style::Success, &message)?;
        }
        Ok(MarkOutcome::AlreadyDone(_)) => {
            console.line(Style::Info, "That task is already marked as done.")?;
        }
        Err(err) if err.is_recoverable() => report_error(console, &err)?,
        Err(err) => return Err(err),
    }
    console.wait_for_key()?;
    Ok(())
}

/// Render the store as `N. [x|' '] title`, done markers in success style.
fn render_list(store: &TaskStore, console: &mut dyn Console) -> Result<()> {
    if store.is_empty() {
        console.line(Style::Info, "No tasks yet.")?;
        return Ok(());
    }

    for (position, task) in store.tasks().iter().enumerate() {
        let (style, marker) = if task.is_done() {
            (Style::Success, "[x]")
        } else {
            (Style::Plain, "[ ]")
        };
        let entry = format!("{}. {} {}", position + 1, marker, task.title());
        console.line(style, &entry)?;
    }
    Ok(())
}

/// Map an error onto the console in one place instead of per call site.
fn report_error(console: &mut dyn Console, err: &Error) -> Result<()> {
    console.line(error_style(err), &err.to_string())?;
    Ok(())
}

/// An empty store is information, not a failure.
fn error_style(err: &Error) -> Style {
    match err {
        Error::EmptyStore => Style::Info,
        _ => Style::Error,
    }
}
