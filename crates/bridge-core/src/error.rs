use thiserror::Error;

/// Text that does not describe a seat, strain, vulnerability or contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid contract '{0}', expected e.g. 4S, 3NX or 2HXX")]
    Contract(String),
    #[error("invalid strain '{0}', expected one of C, D, H, S, N, NT")]
    Strain(String),
    #[error("invalid seat '{0}', expected one of N, E, S, W")]
    Position(String),
    #[error("invalid vulnerability '{0}', expected None, NS, EW or Both")]
    Vulnerability(String),
    #[error("invalid level {0}, expected 1 to 7")]
    Level(u8),
}

/// Inputs the scorer refuses rather than scoring wrongly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("tricks taken must be between 0 and 13, got {0}")]
    Tricks(u8),
    #[error("contract level must be between 1 and 7, got {0}")]
    Level(u8),
}
