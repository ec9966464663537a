pub mod board;
pub mod contract;
pub mod error;
pub mod scoring;
pub mod strain;

pub use board::{Partnership, Position, Vulnerability};
pub use contract::{Bid, Contract, DoubleStatus};
pub use error::{ParseError, ScoreError};
pub use scoring::score_for_contract;
pub use strain::Strain;
