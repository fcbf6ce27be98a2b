use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No card with that id in the deck")]
    UnknownCard,
    #[error("Card is already face up")]
    AlreadyFaceUp,
    #[error("A mismatched pair is still waiting to be flipped back")]
    ResolutionPending,
    #[error("No mismatched pair is waiting to be flipped back")]
    NothingPending,
    #[error("Pending flip belongs to a previous game")]
    StaleSession,
    #[error("Unknown board size")]
    UnknownBoardSize,
}

pub type Result<T> = core::result::Result<T, GameError>;
