//! Submission strategies for a confirmed booking.
//!
//! A [`Strategy`] is chosen once at startup from configuration: either
//! write a PDF receipt locally or POST the draft to the booking endpoint.

mod error;
mod remote;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use error::SubmitError;
pub use remote::RemoteClient;
#[cfg(test)]
pub(crate) use remote::closed_endpoint;

use crate::model::BookingDraft;
use crate::receipt::ReceiptExporter;

/// Notice shown after a receipt has been written.
pub const RECEIPT_CONFIRMATION: &str = "Booking confirmed! PDF downloaded.";

/// Which submission strategy to use, as named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Render a PDF receipt to disk.
    #[default]
    Local,
    /// POST the draft to the booking endpoint.
    Remote,
}

impl StrategyKind {
    /// Returns the configuration name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Local => "local",
            StrategyKind::Remote => "remote",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(StrategyKind::Local),
            "remote" => Ok(StrategyKind::Remote),
            other => Err(other.to_string()),
        }
    }
}

#[mutants::skip]
impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The successful result of a submission, shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Message for the notice popup.
    pub message: String,
    /// Whether the form should be cleared afterwards.
    pub reset_draft: bool,
}

/// How a confirmed booking leaves the form.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Strategy A: write a PDF receipt, then clear the form.
    LocalExport(ReceiptExporter),
    /// Strategy B: POST the draft; the form is left as-is.
    RemoteSubmit(RemoteClient),
}

impl Strategy {
    /// Returns the configuration kind of this strategy.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::LocalExport(_) => StrategyKind::Local,
            Strategy::RemoteSubmit(_) => StrategyKind::Remote,
        }
    }

    /// Returns where submissions go: the receipt path or the endpoint URL.
    pub fn target(&self) -> String {
        match self {
            Strategy::LocalExport(exporter) => exporter.path().display().to_string(),
            Strategy::RemoteSubmit(client) => client.endpoint().to_string(),
        }
    }

    /// Returns `true` if a successful submission clears the form.
    pub fn resets_on_success(&self) -> bool {
        matches!(self, Strategy::LocalExport(_))
    }

    /// Submits `draft` using this strategy.
    pub async fn submit(&self, draft: &BookingDraft) -> Result<Outcome, SubmitError> {
        let message = match self {
            Strategy::LocalExport(exporter) => {
                exporter.export(draft)?;
                RECEIPT_CONFIRMATION.to_string()
            }
            Strategy::RemoteSubmit(client) => client.submit(draft).await?,
        };
        Ok(Outcome {
            message,
            reset_draft: self.resets_on_success(),
        })
    }
}
