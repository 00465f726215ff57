use thiserror::Error;

/// Why a load ended in `LoadState::Failed`.
///
/// The `Display` output is the exact message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Error: {0}")]
    Transport(String),

    #[error("Failed to load image")]
    Decode,
}

impl LoadError {
    /// Flatten a network error and its whole source chain into one line.
    pub fn transport<E: std::error::Error>(err: E) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            // hyper/reqwest often repeat the inner message verbatim
            if !message.ends_with(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        Self::Transport(message)
    }
}
