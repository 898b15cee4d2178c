use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The structured error list returned to callers when a request payload
/// breaks one or more validation rules.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("{}", .error_messages.join(", "))]
pub struct ValidationError {
    pub error_messages: Vec<String>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self { error_messages: Vec::new() }
    }

    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.error_messages.push(message.into());
    }

    /// Ok when no rule was broken, otherwise the accumulated list
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.error_messages.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationError {
    fn default() -> Self {
        Self::new()
    }
}
