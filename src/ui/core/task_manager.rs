use super::actions::Action;
use crate::api::InventoryApi;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs API calls in the background and reports their outcome as actions.
///
/// Requests are neither cancelled nor de-duplicated; results are applied in the
/// order they arrive.
pub struct TaskManager {
    api: Arc<dyn InventoryApi>,
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new(api: Arc<dyn InventoryApi>) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                api,
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn `operation` against the API; the action it resolves to is sent back.
    pub fn spawn<F, Fut>(&mut self, description: impl Into<String>, operation: F) -> TaskId
    where
        F: FnOnce(Arc<dyn InventoryApi>) -> Fut + Send + 'static,
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let description = description.into();
        let api = Arc::clone(&self.api);
        let action_sender = self.action_sender.clone();
        let task_desc = description.clone();

        let handle = tokio::spawn(async move {
            let action = operation(api).await;
            log::debug!("Background task '{}' finished", task_desc);
            let _ = action_sender.send(action);
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Wait for every in-flight task to finish
    pub async fn wait_all(&mut self) {
        let tasks: Vec<BackgroundTask> = self.tasks.drain().map(|(_, task)| task).collect();
        for task in tasks {
            if let Err(e) = task.handle.await {
                log::warn!("Background task '{}' did not complete: {}", task.description, e);
            }
        }
    }

    /// Descriptions of running tasks, oldest first
    pub fn running(&self) -> Vec<String> {
        let mut tasks: Vec<&BackgroundTask> = self.tasks.values().collect();
        tasks.sort_by_key(|task| task.started_at);
        tasks.iter().map(|task| task.description.clone()).collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
