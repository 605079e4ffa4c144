//! Scripted upstream transports for unit tests.

use crate::upstream::{AttemptError, UpstreamTransport};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

enum Script {
    PerKey(HashMap<String, Result<Value, AttemptError>>),
    Queue(Mutex<VecDeque<Result<Value, AttemptError>>>),
    Hang,
}

/// Answers each attempt from a script and records which credential and payload it saw.
pub(crate) struct ScriptedTransport {
    script: Script,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    /// Fixed outcome per credential; unknown credentials get a 500.
    pub(crate) fn per_key<const N: usize>(outcomes: [(&str, Result<Value, AttemptError>); N]) -> Self {
        let map = outcomes.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        Self::with(Script::PerKey(map))
    }

    /// Outcomes in attempt order regardless of credential; a 500 once exhausted.
    pub(crate) fn queue<I: IntoIterator<Item = Result<Value, AttemptError>>>(outcomes: I) -> Self {
        Self::with(Script::Queue(Mutex::new(outcomes.into_iter().collect())))
    }

    /// Never answers.
    pub(crate) fn hanging() -> Self {
        Self::with(Script::Hang)
    }

    fn with(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn credentials(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(k, _)| k.clone()).collect()
    }

    pub(crate) fn payloads(&self) -> Vec<Value> {
        self.calls.lock().unwrap().iter().map(|(_, p)| p.clone()).collect()
    }
}

#[async_trait::async_trait]
impl UpstreamTransport for ScriptedTransport {
    async fn send(&self, credential: &str, payload: &Value) -> Result<Value, AttemptError> {
        self.calls
            .lock()
            .unwrap()
            .push((credential.to_string(), payload.clone()));
        match &self.script {
            Script::PerKey(map) => map.get(credential).cloned().unwrap_or(Err(AttemptError::Status(500))),
            Script::Queue(queue) => queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(AttemptError::Status(500))),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(AttemptError::Timeout)
            }
        }
    }
}
