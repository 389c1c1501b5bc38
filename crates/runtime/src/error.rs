use arena_core::{ArenaError, DuelError, ErrorSeverity};

/// Errors from turning user input into a roster pick.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no fighter number {index} (pick 1 to {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("'{0}' is neither a fighter number nor an archetype name")]
    Unrecognized(String),
}

/// Runtime errors
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    #[error("invalid selection: {0}")]
    Selection(#[from] SelectionError),

    #[error("no fighters selected")]
    NoActiveDuel,

    #[error(transparent)]
    Duel(#[from] DuelError),
}

impl ArenaError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Selection(_) | Self::NoActiveDuel => ErrorSeverity::Recoverable,
            Self::Duel(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Selection(SelectionError::OutOfRange { .. }) => "SELECTION_OUT_OF_RANGE",
            Self::Selection(SelectionError::Unrecognized(_)) => "SELECTION_UNRECOGNIZED",
            Self::NoActiveDuel => "NO_ACTIVE_DUEL",
            Self::Duel(err) => err.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
