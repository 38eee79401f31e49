use std::path::PathBuf;

/// Errors that can occur while producing a PDF receipt.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    /// The font family could not be loaded from the fonts directory.
    #[error("could not load fonts from {dir}: {source}")]
    Font {
        /// Directory that was searched.
        dir: PathBuf,
        /// Underlying genpdf error.
        source: genpdf::error::Error,
    },

    /// Laying out or writing the PDF failed.
    #[error("PDF rendering failed: {0}")]
    Render(#[from] genpdf::error::Error),

    /// An I/O error occurred while preparing the output location.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
