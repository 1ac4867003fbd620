pub mod client;
pub mod config;
pub mod error;
pub mod panel;
pub mod session;

pub use config::AssistantConfig;
pub use error::AssistantError;
pub use panel::{ChatPanel, ChatTurn, PanelPhase, TurnRole};
pub use session::{ChatBackend, ChatSession};
