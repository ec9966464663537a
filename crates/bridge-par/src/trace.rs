use bridge_core::{Bid, Contract, Partnership, Position, Strain, Vulnerability};
use serde::Serialize;

/// A contract with its declarer and NS-signed score.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub contract: Contract,
    pub declarer: Position,
    pub score: i32,
}

/// The seat that can name the highest contract, found before the auction.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct AuctionWinner {
    pub seat: Position,
    pub strain: Strain,
    pub tricks: u8,
}

/// What the side bidding at a rung did there.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RungOutcome {
    Made(Standing),
    Sacrificed(Standing),
    Passed,
}

/// One step of the auction: `bidders` consider `bid` against the contract
/// standing so far.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct RungTrace {
    pub bid: Bid,
    pub bidders: Partnership,
    #[serde(flatten)]
    pub outcome: RungOutcome,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AuctionTrace {
    pub dealer: Position,
    pub vulnerability: Vulnerability,
    pub winner: AuctionWinner,
    /// Where the winning side rests before the opponents compete; `None` when
    /// nobody can make a contract.
    pub opening: Option<Standing>,
    pub rungs: Vec<RungTrace>,
}
