//! The chat panel state machine, independent of any rendering layer.
//!
//! Lifecycle: session creation either yields a `Ready` panel with a
//! greeting turn, or a terminal `ConfigError` panel whose input stays
//! disabled for the life of the panel. Each send goes
//! `Ready -> Waiting -> Ready`, appending one user turn and one model turn
//! (or a synthetic error turn) to the append-only transcript.

use chrono::{DateTime, Utc};

use crate::config::AssistantConfig;
use crate::error::AssistantError;
use crate::session::{ChatBackend, ChatSession};

const GREETING: &str =
    "Hi! I'm your Quad Assistant. Need help drafting a Newsletter post or a Job description?";
const CONNECTION_ERROR_REPLY: &str = "Connection error. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelPhase {
    Ready,
    /// A send is in flight. Input is disabled by convention while waiting.
    Waiting,
    /// Session creation failed; terminal for this panel instance.
    ConfigError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Model,
}

#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    fn now(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

pub struct ChatPanel {
    phase: PanelPhase,
    transcript: Vec<ChatTurn>,
    backend: Option<Box<dyn ChatBackend>>,
}

impl ChatPanel {
    /// Open a panel for a feature context using environment configuration.
    /// A missing credential lands the panel in `ConfigError` immediately.
    pub fn open(feature_id: &str) -> Self {
        match AssistantConfig::from_env() {
            Ok(config) => {
                Self::with_backend(Box::new(ChatSession::open(config, feature_id)))
            }
            Err(err) => {
                tracing::warn!(%err, "assistant panel disabled");
                Self::config_error(err)
            }
        }
    }

    /// Open a panel over an already-built backend. This is the seam tests
    /// use to script replies.
    pub fn with_backend(backend: Box<dyn ChatBackend>) -> Self {
        Self {
            phase: PanelPhase::Ready,
            transcript: vec![ChatTurn::now(TurnRole::Model, GREETING)],
            backend: Some(backend),
        }
    }

    fn config_error(err: AssistantError) -> Self {
        Self {
            phase: PanelPhase::ConfigError(err.to_string()),
            transcript: Vec::new(),
            backend: None,
        }
    }

    pub fn phase(&self) -> &PanelPhase {
        &self.phase
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    /// Input is live only when the panel is idle and configured.
    pub fn input_enabled(&self) -> bool {
        self.phase == PanelPhase::Ready
    }

    /// Send one user turn. Blank input and sends while not `Ready` are
    /// ignored. A failed send appends a synthetic model turn and leaves
    /// the panel usable; only configuration failures are terminal.
    pub async fn send(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() || self.phase != PanelPhase::Ready {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        self.phase = PanelPhase::Waiting;
        self.transcript.push(ChatTurn::now(TurnRole::User, text));

        match backend.send(text).await {
            Ok(reply) => {
                self.transcript.push(ChatTurn::now(TurnRole::Model, reply));
            }
            Err(err) => {
                tracing::warn!(%err, "assistant send failed");
                self.transcript
                    .push(ChatTurn::now(TurnRole::Model, CONNECTION_ERROR_REPLY));
            }
        }
        self.phase = PanelPhase::Ready;
    }
}
