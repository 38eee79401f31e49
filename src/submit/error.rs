use crate::receipt::ReceiptError;

/// Errors surfaced to the operator when a booking cannot be submitted.
///
/// The `Display` text is shown verbatim in the notice popup.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a usable server answer.
    #[error("{0}")]
    Transport(String),

    /// The booking server rejected the request with an `error` message.
    #[error("{0}")]
    Server(String),

    /// The receipt could not be generated.
    #[error("could not generate receipt: {0}")]
    Receipt(#[from] ReceiptError),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}
