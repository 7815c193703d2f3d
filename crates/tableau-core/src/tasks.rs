//! Todo List
//!
//! Whole-collection read-modify-write over the `tasks` key.

use tracing::info;

use crate::error::{DashboardError, Result};
use crate::medium::StorageMedium;
use crate::models::Task;
use crate::store::{keys, Store};

/// Todo widget state: the Store it writes through and the last list read.
#[derive(Debug, Clone)]
pub struct TaskList<M> {
    store: Store<M>,
    items: Vec<Task>,
}

impl<M: StorageMedium> TaskList<M> {
    /// Empty view; call [`TaskList::reload`] to read the stored list.
    pub fn new(store: Store<M>) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    pub fn load(store: Store<M>) -> Result<Self> {
        let mut list = Self::new(store);
        list.reload()?;
        Ok(list)
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    /// Replace the in-memory copy with a full read.
    pub fn reload(&mut self) -> Result<&[Task]> {
        self.items = self.read()?;
        Ok(&self.items)
    }

    /// Append a task. Text is trimmed; blank input is rejected without
    /// touching storage.
    pub fn add(&mut self, text: &str) -> Result<&[Task]> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DashboardError::InvalidInput("task text is empty".to_string()));
        }
        let mut tasks = self.read()?;
        tasks.push(text.to_string());
        self.store.set(keys::TASKS, &tasks)?;
        info!(count = tasks.len(), "task added");
        self.items = tasks;
        Ok(&self.items)
    }

    /// Drop the task at `index`, keeping the others in order.
    pub fn remove(&mut self, index: usize) -> Result<&[Task]> {
        let mut tasks = self.read()?;
        if index >= tasks.len() {
            return Err(DashboardError::InvalidInput(format!(
                "no task at index {} (have {})",
                index,
                tasks.len()
            )));
        }
        tasks.remove(index);
        self.store.set(keys::TASKS, &tasks)?;
        info!(index, count = tasks.len(), "task removed");
        self.items = tasks;
        Ok(&self.items)
    }

    fn read(&self) -> Result<Vec<Task>> {
        Ok(self.store.get(keys::TASKS, Vec::new())?)
    }
}
