use bridge_core::{Position, Strain};
use thiserror::Error;

/// A double-dummy table that cannot be used for par.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("no trick count for {seat} in {strain}")]
    MissingEntry { seat: Position, strain: Strain },
    #[error("{seat} cannot take {tricks} tricks in {strain}, at most 13")]
    TooManyTricks {
        seat: Position,
        strain: Strain,
        tricks: u8,
    },
    #[error("unknown seat '{0}' in double-dummy table")]
    UnknownSeat(String),
    #[error("unknown strain '{0}' in double-dummy table")]
    UnknownStrain(String),
}
