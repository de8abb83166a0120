//! Task management for td.
//!
//! The store is an ordered, bounded, in-memory list of titled tasks. There is
//! no removal, no reordering, and no persistence; the only mutation after a
//! task is created is the one-way pending -> done flip. Callers address tasks
//! by 1-based position, translated to 0-based storage here and nowhere else.

use tracing::debug;

use crate::error::{Error, Result};

/// Upper bound on the number of tasks held at once.
pub const MAX_TASKS: usize = 5;

/// A titled unit of work with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    done: bool,
}

impl Task {
    fn new(title: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            done: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Outcome of a mark request against a specific position.
///
/// Marking an already-done task is not an error; it reports back the
/// unchanged task so the caller can phrase it as information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The task flipped from pending to done.
    Marked(Task),
    /// The task was already done; nothing changed.
    AlreadyDone(Task),
}

/// The bounded in-session task list.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tasks.len() >= MAX_TASKS
    }

    /// Append a task with the trimmed `title`.
    ///
    /// Capacity is checked before the title, so a full store rejects the
    /// request without inspecting input. Returns the stored task.
    pub fn add(&mut self, title: &str) -> Result<Task> {
        if self.is_full() {
            return Err(Error::CapacityExceeded { limit: MAX_TASKS });
        }

        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyTitle);
        }

        let task = Task::new(trimmed);
        debug!(title = %task.title, len = self.tasks.len() + 1, "task added");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Mark the task at `index` (1-based) as done.
    ///
    /// Emptiness is reported before a range check so the caller can phrase
    /// "nothing to mark" differently from a bad number.
    pub fn mark_done(&mut self, index: usize) -> Result<MarkOutcome> {
        if self.tasks.is_empty() {
            return Err(Error::EmptyStore);
        }
        if index < 1 || index > self.tasks.len() {
            return Err(Error::IndexOutOfRange {
                index: index as i64,
                len: self.tasks.len(),
            });
        }

        let task = &mut self.tasks[index - 1];
        if task.done {
            return Ok(MarkOutcome::AlreadyDone(task.clone()));
        }

        task.done = true;
        debug!(index, title = %task.title, "task marked done");
        Ok(MarkOutcome::Marked(task.clone()))
    }
}
