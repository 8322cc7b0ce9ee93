//! Core task-list operations behind the interactive shell
//!
//! `TaskStore` owns the in-memory task sequence and the path of its backing
//! file. Every mutating operation rewrites the full collection before
//! returning, so the file on disk always reflects the last completed
//! operation. Prompting, message formatting and retry loops are the
//! caller's responsibility.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{Result, TwigError};
use crate::model::Task;
use crate::storage::tasks;

/// In-memory task list bound to its persistence path.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store backed by `path`, loading existing tasks.
    /// A missing file is an empty list.
    pub fn open(path: PathBuf) -> Result<Self> {
        let tasks = tasks::load_tasks(&path)?;
        Ok(Self { path, tasks })
    }

    /// Open the store at the default location (`~/.twig/tasks.json`).
    pub fn open_default() -> Result<Self> {
        Self::open(tasks::tasks_file_path()?)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read-only view of the task sequence, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Formatted display rows with 1-based positions, or `None` when there
    /// are no tasks so the caller can render a distinct message.
    pub fn rows(&self) -> Option<Vec<String>> {
        if self.tasks.is_empty() {
            return None;
        }
        Some(
            self.tasks
                .iter()
                .enumerate()
                .map(|(i, task)| task.display_row(i + 1))
                .collect(),
        )
    }

    /// Append a new task. The title must be non-empty after trimming and
    /// must not match an existing title case-insensitively; `due` is
    /// expected to be validated already. Persists on success.
    pub fn add(
        &mut self,
        title: &str,
        due: Option<NaiveDate>,
        priority: Option<String>,
    ) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TwigError::invalid_input("task title cannot be empty"));
        }

        let lowered = title.to_lowercase();
        if self.tasks.iter().any(|t| t.title.to_lowercase() == lowered) {
            return Err(TwigError::DuplicateTitle(title.to_string()));
        }

        self.tasks.push(Task::new(title, due, priority));
        self.persist()
    }

    /// Remove and return the task at 1-based `position`. Later tasks shift
    /// one position down. Persists on success.
    pub fn delete(&mut self, position: usize) -> Result<Task> {
        let index = self.index_of(position)?;
        let removed = self.tasks.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Mark the task at 1-based `position` as done. Idempotent on tasks
    /// that are already done. Persists and returns the task.
    pub fn mark_done(&mut self, position: usize) -> Result<&Task> {
        let index = self.index_of(position)?;
        self.tasks[index].done = true;
        self.persist()?;
        Ok(&self.tasks[index])
    }

    /// Map a 1-based position onto a vector index, rejecting out-of-range.
    fn index_of(&self, position: usize) -> Result<usize> {
        if position == 0 || position > self.tasks.len() {
            return Err(TwigError::IndexOutOfRange(position));
        }
        Ok(position - 1)
    }

    fn persist(&self) -> Result<()> {
        tasks::save_tasks(&self.path, &self.tasks)
    }
}
