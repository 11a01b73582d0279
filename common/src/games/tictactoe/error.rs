use super::types::Outcome;

/// Precondition violations reported by the move selectors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("no legal move: board is {outcome}")]
    NoLegalMove { outcome: Outcome },
}

impl EngineError {
    pub(crate) fn no_legal_move(outcome: Outcome) -> Self {
        Self::NoLegalMove { outcome }
    }
}
