//! Call context threaded through policy decisions

use serde_json::Value;
use std::collections::HashMap;

/// Context passed to identity resolution, role resolution and capability
/// calls on every `check`/`filter` invocation.
///
/// The engine never inspects the context itself; it only forwards it to the
/// collaborators, which read whatever keys they agreed on with the
/// application. Keys are free-form strings, values arbitrary JSON.
#[derive(Debug, Clone, Default)]
pub struct AccessContext {
    values: HashMap<String, Value>,
}

impl AccessContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, consuming and returning the context
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Insert a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a string value by key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Whether the context holds the given key
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of entries in the context
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
