use thiserror::Error;

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

/// Errors raised by the core library operations.
///
/// All of these are raised synchronously at the offending call site and are
/// not recoverable within the component; the caller must supply corrected
/// input and re-invoke.
#[derive(Debug, Error)]
pub enum Error {
    /// A required named argument was never supplied.
    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),

    /// Averaging an empty sequence would divide by zero.
    ///
    /// Policy: the empty sequence fails loudly rather than returning NaN.
    #[error("cannot average an empty sequence (division by zero)")]
    DivisionByZero,

    /// A referenced column is absent from the table or has the wrong
    /// semantic type for the requested access.
    #[error("invalid column `{name}`: {reason}")]
    InvalidColumn { name: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_column(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidColumn {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
