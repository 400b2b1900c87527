use super::error::{StoreError, StoreResult};
use super::files::{atomic_write, load_json_list};
use crate::domain::Task;
use crate::validate::{
    validate_datetime, validate_due_date, validate_tags, validate_task_description,
    validate_task_title, validate_time, ValidationError,
};
use anyhow::Context;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Raw user input for a new task, before validation
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub header: String,
    pub description: String,
    pub due_date: String,
    pub due_time: String,
    pub tags: Vec<String>,
}

impl NewTask {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    pub fn due_time(mut self, due_time: impl Into<String>) -> Self {
        self.due_time = due_time.into();
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Trim, then check every field; the first failure wins
    fn into_task(self) -> Result<Task, ValidationError> {
        let header = self.header.trim().to_string();
        let description = self.description.trim().to_string();
        let due_date = self.due_date.trim().to_string();
        let due_time = self.due_time.trim().to_string();

        validate_task_title(&header)?;
        validate_task_description(&description)?;
        validate_due_date(&due_date)?;

        if !due_time.is_empty() {
            if due_date.is_empty() {
                return Err(ValidationError::TimeWithoutDate);
            }
            if !validate_time(&due_time) {
                return Err(ValidationError::TimeFormat);
            }
            if !validate_datetime(&due_date, &due_time) {
                return Err(ValidationError::TimeInPast);
            }
        }

        validate_tags(&self.tags)?;

        let mut task = Task::new(header, description, due_date);
        task.due_time = due_time;
        task.tags = self.tags;
        Ok(task)
    }
}

/// Counts shown above the task listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Ordered task list backed by a single JSON file.
///
/// List order is display order. Every successful mutation rewrites the whole
/// file. Index operations that fall outside the list, or would move a task
/// past either end, are ignored and report `false`.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store at `path`, loading whatever is there
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            tasks: Vec::new(),
        };
        store.load();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory list with the file contents
    pub fn load(&mut self) {
        self.tasks = load_json_list(&self.path);
    }

    /// Write the whole list back to disk
    pub fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.tasks)
            .context("Failed to serialize tasks")
            .map_err(StoreError::Save)?;
        atomic_write(&self.path, &json).map_err(|e| {
            log::error!("event=save_failed path={} error={:#}", self.path.display(), e);
            StoreError::Save(e)
        })?;
        log::debug!("event=saved path={} count={}", self.path.display(), self.tasks.len());
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Validate and append a task; returns its index
    pub fn add(&mut self, new_task: NewTask) -> StoreResult<usize> {
        let task = new_task.into_task()?;
        log::info!("event=task_added header={:?}", task.header);
        self.tasks.push(task);
        self.save()?;
        Ok(self.tasks.len() - 1)
    }

    pub fn toggle_complete(&mut self, index: usize, value: bool) -> StoreResult<bool> {
        let Some(task) = self.tasks.get_mut(index) else {
            log::debug!("event=ignored op=toggle_complete index={}", index);
            return Ok(false);
        };
        task.completed = value;
        self.save()?;
        Ok(true)
    }

    /// Swap the task with the one above it
    pub fn move_up(&mut self, index: usize) -> StoreResult<bool> {
        if index == 0 || index >= self.tasks.len() {
            log::debug!("event=ignored op=move_up index={}", index);
            return Ok(false);
        }
        self.tasks.swap(index, index - 1);
        self.save()?;
        Ok(true)
    }

    /// Swap the task with the one below it
    pub fn move_down(&mut self, index: usize) -> StoreResult<bool> {
        if index >= self.tasks.len().saturating_sub(1) {
            log::debug!("event=ignored op=move_down index={}", index);
            return Ok(false);
        }
        self.tasks.swap(index, index + 1);
        self.save()?;
        Ok(true)
    }

    pub fn delete(&mut self, index: usize) -> StoreResult<Option<Task>> {
        if index >= self.tasks.len() {
            log::debug!("event=ignored op=delete index={}", index);
            return Ok(None);
        }
        let task = self.tasks.remove(index);
        log::info!("event=task_deleted header={:?}", task.header);
        self.save()?;
        Ok(Some(task))
    }

    pub fn summary(&self, today: NaiveDate) -> TaskSummary {
        let done = self.tasks.iter().filter(|t| t.completed).count();
        TaskSummary {
            total: self.tasks.len(),
            done,
            pending: self.tasks.len() - done,
            overdue: self.tasks.iter().filter(|t| t.is_overdue(today)).count(),
        }
    }
}
