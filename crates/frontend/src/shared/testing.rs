//! In-memory backend for tests

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use super::error::TransportError;
use super::invoke::Invoke;

/// Answers each command from a queue of canned replies and records every call
#[derive(Default)]
pub struct ScriptedBackend {
    replies: RefCell<HashMap<String, VecDeque<Result<Value, String>>>>,
    calls: RefCell<Vec<(String, Value)>>,
    yielding: bool,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend once inside every call so concurrent tasks interleave
    pub fn yielding() -> Self {
        Self {
            yielding: true,
            ..Self::default()
        }
    }

    pub fn reply(&self, command: &str, value: Value) -> &Self {
        self.push(command, Ok(value))
    }

    pub fn fail(&self, command: &str, message: &str) -> &Self {
        self.push(command, Err(message.to_string()))
    }

    fn push(&self, command: &str, reply: Result<Value, String>) -> &Self {
        self.replies
            .borrow_mut()
            .entry(command.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn count(&self, command: &str) -> usize {
        self.calls.borrow().iter().filter(|(c, _)| c == command).count()
    }
}

#[async_trait(?Send)]
impl Invoke for ScriptedBackend {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, TransportError> {
        self.calls.borrow_mut().push((command.to_string(), args));
        if self.yielding {
            tokio::task::yield_now().await;
        }

        let reply = self
            .replies
            .borrow_mut()
            .get_mut(command)
            .and_then(|queue| queue.pop_front());

        match reply {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(TransportError::new(command, message)),
            None => Err(TransportError::new(command, "no scripted reply")),
        }
    }
}

#[async_trait(?Send)]
impl Invoke for Rc<ScriptedBackend> {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, TransportError> {
        self.as_ref().invoke(command, args).await
    }
}

/// Backend-shaped project record
pub fn metadata_wire(id: &str, title: &str) -> Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "directory": format!("/projects/{}", title.to_lowercase()),
        "description": null,
        "categories": [{ "name": "Tool" }],
        "languages": [{ "name": "Rust" }],
        "build_systems": [{ "name": "Cargo" }],
        "preferred_ide": null,
        "repository_url": null,
        "created": "2023-01-01T00:00:00.000Z",
        "updated": "2023-01-02T00:00:00.000Z"
    })
}

/// Backend-shaped page of previews
pub fn page_wire(page_number: u32, total: u32, titles: &[(&str, &str)]) -> Value {
    let data: Vec<Value> = titles
        .iter()
        .map(|(id, title)| metadata_wire(id, title))
        .collect();
    serde_json::json!({
        "total_size": total,
        "page_size": 10,
        "page_number": page_number,
        "data": data
    })
}

pub const ID_A: &str = "123e4567-e89b-12d3-a456-426614174000";
pub const ID_B: &str = "9b2f1c7e-4d3a-4f6b-8e21-0c5d7a9e3b14";
