use thiserror::Error;

use crate::config::{DEFAULT_CATEGORY, DEFAULT_STACK_DESCRIPTION, STACK_SEPARATOR};
use crate::profile::TechStack;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("Unknown stack category: {0}")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackCard {
    pub name: String,
    pub description: String,
}

/// Splits a raw `"Name — description"` entry at its first separator.
pub fn split_entry(raw: &str) -> StackCard {
    let (name, description) = match raw.split_once(STACK_SEPARATOR) {
        Some((name, description)) => (name.trim(), description.trim()),
        None => (raw.trim(), ""),
    };
    let description = if description.is_empty() {
        DEFAULT_STACK_DESCRIPTION
    } else {
        description
    };
    StackCard {
        name: name.to_string(),
        description: description.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StackSelector {
    active: Option<String>,
}

impl StackSelector {
    /// Starts on the default category, or the first one when the document
    /// doesn't have it.
    pub fn new(stack: &TechStack) -> Self {
        let active = if stack.contains(DEFAULT_CATEGORY) {
            Some(DEFAULT_CATEGORY.to_string())
        } else {
            stack.first().map(str::to_string)
        };
        Self { active }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn select(&mut self, stack: &TechStack, name: &str) -> Result<(), StackError> {
        if !stack.contains(name) {
            return Err(StackError::UnknownCategory(name.to_string()));
        }
        if self.active.as_deref() != Some(name) {
            self.active = Some(name.to_string());
        }
        Ok(())
    }

    pub fn cards(&self, stack: &TechStack) -> Vec<StackCard> {
        self.active
            .as_deref()
            .and_then(|name| stack.entries(name))
            .map(|entries| entries.iter().map(|e| split_entry(e)).collect())
            .unwrap_or_default()
    }
}
