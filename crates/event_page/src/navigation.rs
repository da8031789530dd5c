use std::sync::{Arc, Mutex, PoisonError};

pub trait Navigator: Send + Sync {
    fn push(&self, path: &str);
    fn reload(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCall {
    Push(String),
    Reload,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    calls: Arc<Mutex<Vec<NavigationCall>>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<NavigationCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Path of the most recent push, if any.
    pub fn current_path(&self) -> Option<String> {
        self.calls()
            .into_iter()
            .rev()
            .find_map(|call| match call {
                NavigationCall::Push(path) => Some(path),
                NavigationCall::Reload => None,
            })
    }

    fn record(&self, call: NavigationCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.record(NavigationCall::Push(path.to_string()));
    }

    fn reload(&self) {
        self.record(NavigationCall::Reload);
    }
}

pub fn event_path(event_id: &str) -> String {
    format!("/event/{event_id}")
}
