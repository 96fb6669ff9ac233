//! Scripted [`Transport`] for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::api::{ApiRequest, ApiResponse, Transport, TransportError};

type Reply = Result<ApiResponse, TransportError>;

/// Replays queued replies in order and records every request it was given.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<Reply>>,
    sent: RefCell<Vec<ApiRequest>>,
    on_send: Option<Box<dyn Fn()>>,
}

impl ScriptedTransport {
    pub(crate) fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self { replies: RefCell::new(replies.into_iter().collect()), ..Self::default() }
    }

    /// Run `hook` at the moment each request is issued.
    pub(crate) fn on_send(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_send = Some(Box::new(hook));
        self
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        if let Some(hook) = &self.on_send {
            hook();
        }
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}

pub(crate) fn reply(status: u16, body: &str) -> Reply {
    Ok(ApiResponse { status, body: body.to_owned() })
}

pub(crate) fn network_failure() -> Reply {
    Err(TransportError::Network("connection refused".to_owned()))
}
