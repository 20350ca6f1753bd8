use chrono::{DateTime, Duration, Utc};
use todos_api::v1::Todo;
use tokio::sync::Mutex;

/// In-memory list of todos in insertion order.
///
/// Ids are supplied by callers and never checked for uniqueness. Each
/// operation holds the lock for its own duration only.
#[derive(Debug, Default)]
pub struct TaskStore {
    todos: Mutex<Vec<Todo>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
        }
    }

    /// Store holding a few sample todos due over the next three days.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::from_todos(vec![
            Todo::new(1, "Learn Rust", now + Duration::days(1)),
            Todo::new(2, "Build an axum service", now + Duration::days(2)),
            Todo::new(3, "Deploy the service", now + Duration::days(3)),
        ])
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.todos.lock().await.clone()
    }

    /// First todo with the given id.
    pub async fn get(&self, id: i32) -> Option<Todo> {
        let todos = self.todos.lock().await;
        todos.iter().find(|todo| todo.id == id).cloned()
    }

    pub async fn add(&self, todo: Todo) -> Todo {
        self.todos.lock().await.push(todo.clone());
        todo
    }

    /// Removes every todo with the given id and returns how many were removed.
    pub async fn delete(&self, id: i32) -> usize {
        let mut todos = self.todos.lock().await;
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        before - todos.len()
    }
}
