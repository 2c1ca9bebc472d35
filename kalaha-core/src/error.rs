//! Error types for the game engine

/// A move the rules do not allow. Always recoverable by picking another pit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMovementError {
    /// Chosen pit holds no stones
    #[error("pit {pit} is empty, no move possible")]
    EmptyPit { pit: usize },

    #[error("pit {pit} is out of range (board has {pit_count} pits per side)")]
    PitOutOfRange { pit: usize, pit_count: usize },

    #[error("the game has already ended")]
    GameEnded,
}

/// Malformed board supplied to a constructor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("a board needs at least one pit per side")]
    EmptyRows,

    #[error("pit rows differ in length: south has {south}, north has {north}")]
    PitCountMismatch { south: usize, north: usize },

    #[error("total stone count does not fit in u32")]
    TooManyStones,
}

/// Invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("pit_count must be at least 1")]
    NoPits,

    #[error("initial_stones must be at least 1")]
    NoStones,

    #[error("table holds more stones than fit in u32")]
    TooManyStones,
}
