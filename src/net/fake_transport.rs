//! Scripted in-process transport for resource client tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::http::{ApiError, ApiRequest, ApiResponse, Transport};

/// Replays queued responses in order and records every request it saw.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, String>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses.borrow_mut().push_back(Err(message.to_owned()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ApiError::Transport(message)),
            None => Err(ApiError::Transport("no scripted response".to_owned())),
        }
    }
}
