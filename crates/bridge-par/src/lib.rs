//! Par calculation from a double-dummy table.
//!
//! Par is the score reached when both sides know every card and bid
//! perfectly: each side either makes the best contract available to it or,
//! when cheaper, sacrifices doubled against the opponents' contract.
//!
//! Progress through the simulated auction is logged with `tracing` under the
//! `bridge_par::auction` target.

pub mod error;
pub mod par;
pub mod result;
pub mod table;
pub mod trace;

pub use error::TableError;
pub use par::{par_score_and_contract, par_with_trace};
pub use result::{Declarers, ParContract, ParResult};
pub use table::DoubleDummyTable;
pub use trace::{AuctionTrace, AuctionWinner, RungOutcome, RungTrace, Standing};
