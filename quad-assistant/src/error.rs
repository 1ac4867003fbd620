use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    /// Raised once at session creation; the panel renders it as a
    /// permanent disabled state.
    #[error("assistant is not configured: GEMINI_API_KEY is not set")]
    MissingApiKey,

    /// Transient transport failure on a send; recoverable by retrying.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("assistant API error: {0}")]
    Api(String),

    #[error("the model returned no usable reply")]
    EmptyReply,
}

pub type AssistantResult<T> = Result<T, AssistantError>;
