use async_trait::async_trait;

use crate::client::{GenerativeClient, WireContent};
use crate::config::AssistantConfig;
use crate::error::AssistantResult;

/// Seam between the panel and the model so the panel can be driven by a
/// scripted backend in tests.
#[async_trait]
pub trait ChatBackend: Send {
    /// Send one user turn and return the model's text reply.
    async fn send(&mut self, text: &str) -> AssistantResult<String>;
}

/// A conversation with the hosted model for one feature context. Keeps the
/// rolling history and replays it on every send.
pub struct ChatSession {
    client: GenerativeClient,
    system_instruction: String,
    history: Vec<WireContent>,
}

impl ChatSession {
    pub fn open(config: AssistantConfig, feature_id: &str) -> Self {
        Self {
            client: GenerativeClient::new(config),
            system_instruction: system_instruction_for(feature_id),
            history: Vec::new(),
        }
    }
}

#[async_trait]
impl ChatBackend for ChatSession {
    async fn send(&mut self, text: &str) -> AssistantResult<String> {
        self.history.push(WireContent::user(text));
        let reply = self
            .client
            .generate(Some(&self.system_instruction), &self.history)
            .await;
        match reply {
            Ok(reply) => {
                self.history.push(WireContent::model(&reply));
                Ok(reply)
            }
            Err(err) => {
                // Drop the failed turn so a retry does not double it.
                self.history.pop();
                Err(err)
            }
        }
    }
}

/// Feature-specific coaching for the content assistant.
fn system_instruction_for(feature_id: &str) -> String {
    let focus = match feature_id {
        "newsletter" => "campus newsletter announcements",
        "jobs" => "job and internship descriptions",
        "events" => "event invitations and schedules",
        _ => "campus social posts",
    };
    format!(
        "You are the Quad content assistant for a campus social platform. \
         Help the user draft {focus}. Keep replies short, friendly, and \
         ready to paste into a post."
    )
}
