//! Simulated assistant replies.
//!
//! Each reply is dispatched as its own task that waits out the configured
//! delay and then sends `(text, request_id)` back to the UI. The UI decides
//! whether a reply is still wanted by comparing ids.

use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const CANNED_REPLY_COUNT: usize = 5;

/// Picks one of the canned replies uniformly at random.
pub fn simulated_response<R: Rng + ?Sized>(prompt: &str, rng: &mut R) -> String {
    canned_reply(rng.gen_range(0..CANNED_REPLY_COUNT), prompt)
}

fn canned_reply(index: usize, prompt: &str) -> String {
    match index {
        0 => format!(
            "I understand you're asking about: {prompt}. That's an interesting topic! I'd be happy to explore this further with you."
        ),
        1 => "Thanks for your message. While I'm simulating responses right now, in a completed app I would connect to a language model API to give you helpful and accurate information.".to_string(),
        2 => "That's a great question! As a neural network, I process information by analyzing patterns in text. I can help with a wide range of tasks from answering questions to creative writing.".to_string(),
        3 => "I appreciate your input. This interface is designed to demonstrate how you might interact with an assistant. In a full implementation, I would provide more detailed and contextual responses.".to_string(),
        _ => format!(
            "I notice you're interested in {prompt}. I'm designed to be helpful, harmless, and honest in my responses while providing useful information."
        ),
    }
}

pub struct ReplyParams {
    pub text: String,
    pub delay: Duration,
    pub cancel_token: CancellationToken,
    pub request_id: u64,
}

#[derive(Clone)]
pub struct ResponderService {
    tx: mpsc::UnboundedSender<(String, u64)>,
}

impl ResponderService {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(String, u64)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Sends `params.text` after `params.delay` unless cancelled first.
    pub fn spawn_reply(&self, params: ReplyParams) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let ReplyParams {
                text,
                delay,
                cancel_token,
                request_id,
            } = params;

            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    debug!(request_id, "simulated reply ready");
                    let _ = tx.send((text, request_id));
                }
                _ = cancel_token.cancelled() => {
                    debug!(request_id, "simulated reply cancelled");
                }
            }
        });
    }

    #[cfg(test)]
    pub fn send_for_test(&self, text: &str, request_id: u64) {
        let _ = self.tx.send((text.to_string(), request_id));
    }
}
