use crate::error::AppError;
use crate::model::Task;
use crate::store::TaskStore;
use std::path::Path;

/// What `complete` does with a task that is already done.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// Mark it done again, refreshing `completed_at`.
    #[default]
    Refresh,
    /// Fail with `AlreadyCompleted`.
    RejectCompleted,
}

#[derive(Debug, Clone)]
pub struct ListResult {
    pub tasks: Vec<Task>,
    pub pending: usize,
}

pub fn add_task(path: &Path, description: &str, priority: &str) -> Result<(usize, Task), AppError> {
    let mut store = TaskStore::load(path)?;
    let id = store.add(description, priority)?;
    let task = store.get(id).cloned().ok_or(AppError::InvalidIndex(id))?;
    store.save(path)?;

    Ok((id, task))
}

pub fn complete_task(
    path: &Path,
    id: usize,
    policy: CompletionPolicy,
) -> Result<(usize, Task), AppError> {
    let mut store = TaskStore::load(path)?;
    let task = match policy {
        CompletionPolicy::Refresh => store.complete(id)?,
        CompletionPolicy::RejectCompleted => store.complete_pending(id)?,
    }
    .clone();
    store.save(path)?;

    Ok((id, task))
}

pub fn edit_task(
    path: &Path,
    id: usize,
    description: &str,
    priority: &str,
) -> Result<(usize, Task), AppError> {
    let mut store = TaskStore::load(path)?;
    let task = store.edit(id, description, priority)?.clone();
    store.save(path)?;

    Ok((id, task))
}

pub fn delete_task(path: &Path, id: usize) -> Result<(usize, Task), AppError> {
    let mut store = TaskStore::load(path)?;
    let removed = store.delete(id)?;
    store.save(path)?;

    Ok((id, removed))
}

pub fn list_tasks(path: &Path) -> Result<ListResult, AppError> {
    let store = TaskStore::load(path)?;
    Ok(ListResult {
        pending: store.count_pending(),
        tasks: store.tasks().to_vec(),
    })
}
