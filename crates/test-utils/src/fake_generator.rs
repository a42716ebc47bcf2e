use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use pookie_rotation::assist::TextGenerator;

/// What the fake does on its next call.
#[derive(Debug, Clone)]
pub enum FakeReply {
    /// Respond with this text.
    Text(String),
    /// Fail with this message.
    Fail(String),
    /// Never respond; exercises the caller's timeout.
    Hang,
}

/// A scripted text generator that:
/// - records every prompt it receives (with its token budget)
/// - answers with the next scripted reply, repeating the last one when the
///   script runs out.
#[derive(Clone)]
pub struct FakeGenerator {
    replies: Arc<Mutex<VecDeque<FakeReply>>>,
    prompts: Arc<Mutex<Vec<(String, u32)>>>,
}

impl FakeGenerator {
    pub fn new(replies: impl IntoIterator<Item = FakeReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().collect())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new([FakeReply::Text(text.into())])
    }

    pub fn failing(msg: impl Into<String>) -> Self {
        Self::new([FakeReply::Fail(msg.into())])
    }

    pub fn hanging() -> Self {
        Self::new([FakeReply::Hang])
    }

    /// Prompts seen so far, oldest first.
    pub fn prompts(&self) -> Vec<(String, u32)> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn next_reply(&self) -> FakeReply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies
                .front()
                .cloned()
                .unwrap_or_else(|| FakeReply::Fail("no scripted reply".to_string()))
        }
    }
}

impl TextGenerator for FakeGenerator {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        max_tokens: u32,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), max_tokens));
        let reply = self.next_reply();

        Box::pin(async move {
            match reply {
                FakeReply::Text(text) => Ok(text),
                FakeReply::Fail(msg) => Err(anyhow::anyhow!(msg)),
                FakeReply::Hang => std::future::pending().await,
            }
        })
    }
}
