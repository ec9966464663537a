use bridge_core::{Contract, Partnership, Position};
use serde::{Serialize, Serializer};
use std::fmt;

/// Who can play a par contract: one seat, or either member of a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Declarers {
    Seat(Position),
    Side(Partnership),
}

impl Declarers {
    pub fn partnership(self) -> Partnership {
        match self {
            Declarers::Seat(seat) => seat.partnership(),
            Declarers::Side(side) => side,
        }
    }
}

impl fmt::Display for Declarers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declarers::Seat(seat) => write!(f, "{}", seat),
            Declarers::Side(side) => write!(f, "{}", side),
        }
    }
}

impl Serialize for Declarers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParContract {
    pub contract: Contract,
    /// Tricks over the contract for a making contract; `None` for a doubled
    /// sacrifice.
    pub overtricks: Option<u8>,
    pub declarers: Declarers,
}

impl fmt::Display for ParContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.overtricks {
            None => write!(f, "{}", self.contract),
            Some(0) => write!(f, "{}=", self.contract),
            Some(n) => write!(f, "{}+{}", self.contract, n),
        }
    }
}

/// The par score (NS-signed) and every contract that achieves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParResult {
    pub score: i32,
    pub contracts: Vec<ParContract>,
}

impl ParResult {
    pub fn passed_out() -> Self {
        Self {
            score: 0,
            contracts: Vec::new(),
        }
    }

    pub fn is_passed_out(&self) -> bool {
        self.contracts.is_empty()
    }

    /// e.g. `4S= by W or 4H= by E for -620`.
    pub fn par_string(&self) -> String {
        if self.is_passed_out() {
            return "Passed out".to_string();
        }
        let contracts = self
            .contracts
            .iter()
            .map(|c| format!("{} by {}", c, c.declarers))
            .collect::<Vec<_>>()
            .join(" or ");
        format!("{} for {}", contracts, self.score)
    }

    /// Records that `seat` can reach the par score with `contract`. A contract
    /// already found for the partner becomes a contract for the side.
    pub(crate) fn add(&mut self, contract: Contract, overtricks: Option<u8>, seat: Position) {
        let existing = self
            .contracts
            .iter_mut()
            .find(|c| c.contract == contract && c.overtricks == overtricks);
        match existing {
            Some(entry) if entry.declarers != Declarers::Seat(seat) => {
                entry.declarers = Declarers::Side(seat.partnership());
            }
            Some(_) => {}
            None => self.contracts.push(ParContract {
                contract,
                overtricks,
                declarers: Declarers::Seat(seat),
            }),
        }
    }
}

impl fmt::Display for ParResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.par_string())
    }
}
