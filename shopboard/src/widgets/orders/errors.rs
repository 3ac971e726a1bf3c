use thiserror::Error;

/// Errors emitted while writing a CSV export.
#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by the bulk action backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum BulkActionError {
    #[error("no orders selected")]
    NothingSelected,
}
