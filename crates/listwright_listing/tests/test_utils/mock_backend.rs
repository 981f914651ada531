//! Mock text-generation backend for testing.

use async_trait::async_trait;
use listwright_core::{GenerateRequest, GenerateResponse};
use listwright_error::{AuthError, BackendError, HttpError, ListwrightError, ListwrightResult};
use listwright_interface::TextGeneration;
use std::sync::{Arc, Mutex};

/// Error a mock call fails with.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockFailure {
    /// Credential problem
    Auth(String),
    /// Upstream call failed
    Backend(String),
    /// Transport failure
    Http(String),
}

impl MockFailure {
    fn into_error(self) -> ListwrightError {
        match self {
            Self::Auth(msg) => AuthError::new(msg).into(),
            Self::Backend(msg) => BackendError::new(msg).into(),
            Self::Http(msg) => HttpError::new(msg).into(),
        }
    }
}

/// A single scripted response.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    /// Reply with this text
    Reply(String),
    /// Fail with this error
    Error(MockFailure),
}

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Always reply with the given text
    Reply(String),
    /// Always fail
    Error(MockFailure),
    /// Walk through a sequence, failing once it is exhausted
    Sequence(Vec<MockResponse>),
}

/// Scripted backend that records every prompt it receives.
#[derive(Debug, Clone)]
pub struct MockBackend {
    behavior: MockBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockBackend {
    /// Backend that always replies with `text`.
    pub fn reply(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(text.into()))
    }

    /// Backend that always fails.
    pub fn failing(failure: MockFailure) -> Self {
        Self::with_behavior(MockBehavior::Error(failure))
    }

    /// Backend with a sequence of responses.
    pub fn sequence(responses: Vec<MockResponse>) -> Self {
        Self::with_behavior(MockBehavior::Sequence(responses))
    }

    /// Backend with custom behavior.
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of generate() calls so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompt of the most recent call.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    fn next_response(&self, prompt: &str) -> ListwrightResult<GenerateResponse> {
        let mut prompts = self.prompts.lock().unwrap();
        let current = prompts.len();
        prompts.push(prompt.to_string());

        let response = match &self.behavior {
            MockBehavior::Reply(text) => MockResponse::Reply(text.clone()),
            MockBehavior::Error(failure) => MockResponse::Error(failure.clone()),
            MockBehavior::Sequence(responses) => match responses.get(current) {
                Some(response) => response.clone(),
                None => MockResponse::Error(MockFailure::Backend(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current + 1,
                    responses.len()
                ))),
            },
        };

        match response {
            MockResponse::Reply(text) => Ok(GenerateResponse {
                text,
                model: "mock-model".to_string(),
            }),
            MockResponse::Error(failure) => Err(failure.into_error()),
        }
    }
}

#[async_trait]
impl TextGeneration for MockBackend {
    async fn generate(&self, req: &GenerateRequest) -> ListwrightResult<GenerateResponse> {
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.next_response(&req.prompt)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
