use crate::error::AppError;
use crate::model::{Priority, Task};
use crate::storage::json_store;
use std::path::Path;
use time::OffsetDateTime;

/// Ordered task collection. A task is addressed by its 1-based position,
/// so deleting a task renumbers every task after it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store from `path`. A missing or empty file is an empty store.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        Ok(Self {
            tasks: json_store::load_tasks(path)?,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        json_store::save_tasks(path, &self.tasks)
    }

    /// Appends a task and returns its identifier. Unknown priorities fall
    /// back to Medium.
    pub fn add(&mut self, description: &str, priority: &str) -> Result<usize, AppError> {
        let description = non_empty(description)?;
        let task = Task::new(
            description,
            Priority::normalize(priority),
            OffsetDateTime::now_utc(),
        );
        self.tasks.push(task);
        Ok(self.tasks.len())
    }

    /// Marks a task done. Completing a done task again refreshes its
    /// completion time.
    pub fn complete(&mut self, id: usize) -> Result<&Task, AppError> {
        let task = self.task_mut(id)?;
        task.done = true;
        task.completed_at = Some(OffsetDateTime::now_utc());
        Ok(&*task)
    }

    /// Like [`TaskStore::complete`] but refuses tasks that are already done.
    pub fn complete_pending(&mut self, id: usize) -> Result<&Task, AppError> {
        if self.task_mut(id)?.done {
            return Err(AppError::AlreadyCompleted(id));
        }
        self.complete(id)
    }

    /// Replaces the description and, unless `priority` is empty, the
    /// priority. Nothing changes when any argument is rejected.
    pub fn edit(&mut self, id: usize, description: &str, priority: &str) -> Result<&Task, AppError> {
        self.index(id)?;
        let description = non_empty(description)?;
        let priority = if priority.is_empty() {
            None
        } else {
            let parsed = Priority::parse(priority)
                .ok_or_else(|| AppError::InvalidPriority(priority.to_string()))?;
            Some(parsed)
        };

        let task = self.task_mut(id)?;
        task.description = description;
        if let Some(priority) = priority {
            task.priority = priority;
        }
        Ok(&*task)
    }

    pub fn delete(&mut self, id: usize) -> Result<Task, AppError> {
        let index = self.index(id)?;
        Ok(self.tasks.remove(index))
    }

    pub fn count_pending(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: usize) -> Option<&Task> {
        id.checked_sub(1).and_then(|index| self.tasks.get(index))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn index(&self, id: usize) -> Result<usize, AppError> {
        if id == 0 || id > self.tasks.len() {
            return Err(AppError::InvalidIndex(id));
        }
        Ok(id - 1)
    }

    fn task_mut(&mut self, id: usize) -> Result<&mut Task, AppError> {
        let index = self.index(id)?;
        Ok(&mut self.tasks[index])
    }
}

/// Blank descriptions are rejected; anything else is kept as typed.
fn non_empty(description: &str) -> Result<String, AppError> {
    if description.trim().is_empty() {
        return Err(AppError::EmptyDescription);
    }
    Ok(description.to_string())
}
