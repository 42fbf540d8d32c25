//! Stub generator for unit tests. Never compiled into the binary.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::{ServiceError, TextGenerator};

/// Returns a canned reply (or a canned API failure) and records every prompt it saw.
pub struct StubGenerator {
    reply: Result<String, (u16, String)>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Err((status, message.to_string())),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err((status, message)) => Err(ServiceError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Signals `started` when a call arrives, then waits for `release` before replying.
pub struct GatedGenerator {
    reply: String,
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl GatedGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: text.to_string(),
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for GatedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, ServiceError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.reply.clone())
    }
}
