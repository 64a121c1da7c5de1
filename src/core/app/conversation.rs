use std::collections::VecDeque;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::message::{Message, MessageIds, Role};

/// The reply the conversation is currently waiting for.
#[derive(Debug)]
pub struct PendingReply {
    pub request_id: u64,
    pub cancel_token: CancellationToken,
}

/// Transcript plus the bookkeeping for at most one outstanding reply.
#[derive(Debug)]
pub struct Conversation {
    messages: VecDeque<Message>,
    ids: MessageIds,
    pending: Option<PendingReply>,
    next_request_id: u64,
}

impl Conversation {
    /// Starts a transcript with a single assistant message.
    pub fn new(opening: impl Into<String>) -> Self {
        let mut conversation = Self {
            messages: VecDeque::new(),
            ids: MessageIds::default(),
            pending: None,
            next_request_id: 0,
        };
        conversation.push(Role::Assistant, opening.into());
        conversation
    }

    pub fn messages(&self) -> &VecDeque<Message> {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_request_id(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.request_id)
    }

    pub fn add_user_message(&mut self, content: String) -> &Message {
        self.push(Role::User, content)
    }

    /// Marks a reply as outstanding and returns its id and cancel handle.
    pub fn begin_request(&mut self) -> (u64, CancellationToken) {
        self.cancel_pending();
        self.next_request_id += 1;
        let token = CancellationToken::new();
        self.pending = Some(PendingReply {
            request_id: self.next_request_id,
            cancel_token: token.clone(),
        });
        (self.next_request_id, token)
    }

    /// Appends the reply if it answers the outstanding request.
    pub fn accept_reply(&mut self, content: String, request_id: u64) -> bool {
        if self.pending_request_id() != Some(request_id) {
            debug!(request_id, "ignoring stale reply");
            return false;
        }
        self.pending = None;
        self.push(Role::Assistant, content);
        true
    }

    /// Cancels the outstanding reply, if any.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.cancel_token.cancel();
                debug!(request_id = pending.request_id, "pending reply cancelled");
                true
            }
            None => false,
        }
    }

    /// Drops the transcript and any outstanding reply, leaving one assistant message.
    pub fn reset(&mut self, opening: impl Into<String>) {
        self.cancel_pending();
        self.messages.clear();
        self.push(Role::Assistant, opening.into());
    }

    fn push(&mut self, role: Role, content: String) -> &Message {
        let id = self.ids.next_id(role);
        self.messages.push_back(Message::new(id, role, content));
        // Just pushed; the deque is non-empty.
        &self.messages[self.messages.len() - 1]
    }
}
