use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiErrorBody(pub Value);

impl ApiErrorBody {
    pub fn message(&self) -> Option<&str> {
        match &self.0 {
            Value::String(text) => Some(text.as_str()),
            Value::Object(map) => map
                .get("message")
                .or_else(|| map.get("error"))
                .and_then(Value::as_str),
            _ => None,
        }
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(message),
            None => write!(f, "{}", self.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServerError {
    #[error("server rejected request ({status}): {body}")]
    Rejected { status: u16, body: ApiErrorBody },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ServerError {
    pub fn rejected(status: u16, body: Value) -> Self {
        Self::Rejected {
            status,
            body: ApiErrorBody(body),
        }
    }

    pub fn body(&self) -> Option<&ApiErrorBody> {
        match self {
            Self::Rejected { body, .. } => Some(body),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}
