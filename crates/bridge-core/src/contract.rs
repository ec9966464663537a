use crate::error::ParseError;
use crate::strain::Strain;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static CONTRACT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([1-7])(NT|[CDHSN])(XX|X)?$").expect("contract pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DoubleStatus {
    #[default]
    Undoubled,
    Doubled,
    Redoubled,
}

impl DoubleStatus {
    pub fn suffix(self) -> &'static str {
        match self {
            DoubleStatus::Undoubled => "",
            DoubleStatus::Doubled => "X",
            DoubleStatus::Redoubled => "XX",
        }
    }
}

/// A level and strain, the unit the auction climbs through.
///
/// Bids order by level first and strain second, so `1N < 2C`. Doubling is
/// not part of a bid: `4SX` sits on the same rung as `4S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub level: u8,
    pub strain: Strain,
}

impl Bid {
    pub const SEVEN_NOTRUMP: Bid = Bid {
        level: 7,
        strain: Strain::NoTrump,
    };

    pub fn new(level: u8, strain: Strain) -> Result<Self, ParseError> {
        if (1..=7).contains(&level) {
            Ok(Self { level, strain })
        } else {
            Err(ParseError::Level(level))
        }
    }

    /// The next rung of the auction, or `None` above 7NT.
    pub fn next_up(self) -> Option<Bid> {
        match self.strain {
            Strain::NoTrump if self.level >= 7 => None,
            Strain::NoTrump => Some(Bid {
                level: self.level + 1,
                strain: Strain::Clubs,
            }),
            strain => Some(Bid {
                level: self.level,
                strain: Strain::ALL[strain.idx() + 1],
            }),
        }
    }

    /// Every bid above this one, lowest first, ending with 7NT.
    pub fn bids_above(self) -> impl Iterator<Item = Bid> {
        std::iter::successors(self.next_up(), |bid| bid.next_up())
    }

    pub fn tricks_required(self) -> u8 {
        self.level + 6
    }

    pub fn undoubled(self) -> Contract {
        Contract::new(self.level, self.strain, DoubleStatus::Undoubled)
    }

    pub fn doubled(self) -> Contract {
        Contract::new(self.level, self.strain, DoubleStatus::Doubled)
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level, self.strain)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Contract {
    pub level: u8,
    pub strain: Strain,
    pub double_status: DoubleStatus,
}

impl Contract {
    pub fn new(level: u8, strain: Strain, double_status: DoubleStatus) -> Self {
        Self {
            level,
            strain,
            double_status,
        }
    }

    pub fn bid(&self) -> Bid {
        Bid {
            level: self.level,
            strain: self.strain,
        }
    }

    pub fn tricks_required(&self) -> u8 {
        self.level + 6
    }

    pub fn is_doubled(&self) -> bool {
        self.double_status != DoubleStatus::Undoubled
    }

    pub fn is_slam(&self) -> bool {
        self.level >= 6
    }

    pub fn is_grand_slam(&self) -> bool {
        self.level == 7
    }
}

impl FromStr for Contract {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        let caps = CONTRACT_PATTERN
            .captures(&normalized)
            .ok_or_else(|| ParseError::Contract(s.to_string()))?;

        let level = caps[1]
            .parse::<u8>()
            .map_err(|_| ParseError::Contract(s.to_string()))?;
        let strain = caps[2].parse::<Strain>()?;
        let double_status = match caps.get(3).map(|m| m.as_str()) {
            Some("XX") => DoubleStatus::Redoubled,
            Some(_) => DoubleStatus::Doubled,
            None => DoubleStatus::Undoubled,
        };

        Ok(Contract::new(level, strain, double_status))
    }
}

impl TryFrom<String> for Contract {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Contract> for String {
    fn from(contract: Contract) -> Self {
        contract.to_string()
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.level,
            self.strain,
            self.double_status.suffix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_parsing() {
        let c: Contract = "3NTX".parse().unwrap();
        assert_eq!(c, Contract::new(3, Strain::NoTrump, DoubleStatus::Doubled));

        let c: Contract = " 4s ".parse().unwrap();
        assert_eq!(c, Contract::new(4, Strain::Spades, DoubleStatus::Undoubled));

        let c: Contract = "7nxx".parse().unwrap();
        assert_eq!(c.double_status, DoubleStatus::Redoubled);

        for bad in ["8S", "0C", "3NXXX", "3Z", "", "S4"] {
            assert!(bad.parse::<Contract>().is_err(), "{} should not parse", bad);
        }
    }

    #[test]
    fn test_contract_display() {
        let c = Contract::new(3, Strain::NoTrump, DoubleStatus::Doubled);
        assert_eq!(c.to_string(), "3NX");
        assert_eq!(Bid::SEVEN_NOTRUMP.to_string(), "7N");
    }

    #[test]
    fn test_contract_serde_as_string() {
        let c = Contract::new(2, Strain::Hearts, DoubleStatus::Redoubled);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"2HXX\"");
        let back: Contract = serde_json::from_str("\"2hxx\"").unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Contract>("\"9H\"").is_err());
    }

    #[test]
    fn test_bid_ordering_ignores_doubling() {
        let four_spades: Contract = "4SX".parse().unwrap();
        let four_notrump: Contract = "4N".parse().unwrap();
        assert!(four_spades.bid() < four_notrump.bid());
        assert_eq!(four_spades.bid(), "4S".parse::<Contract>().unwrap().bid());
        assert!(Bid::new(1, Strain::NoTrump).unwrap() < Bid::new(2, Strain::Clubs).unwrap());
    }

    #[test]
    fn test_next_up() {
        let one_club = Bid::new(1, Strain::Clubs).unwrap();
        assert_eq!(one_club.next_up(), Some(Bid::new(1, Strain::Diamonds).unwrap()));
        assert_eq!(
            Bid::new(1, Strain::NoTrump).unwrap().next_up(),
            Some(Bid::new(2, Strain::Clubs).unwrap())
        );
        assert_eq!(Bid::SEVEN_NOTRUMP.next_up(), None);
        assert_eq!(one_club.bids_above().count(), 34);
        assert_eq!(one_club.bids_above().last(), Some(Bid::SEVEN_NOTRUMP));
    }

    #[test]
    fn test_bid_level_validation() {
        assert_eq!(Bid::new(0, Strain::Clubs), Err(ParseError::Level(0)));
        assert_eq!(Bid::new(8, Strain::Clubs), Err(ParseError::Level(8)));
        assert_eq!(Bid::new(7, Strain::Clubs).unwrap().tricks_required(), 13);
    }

    #[test]
    fn test_slam() {
        assert!(!"5DX".parse::<Contract>().unwrap().is_slam());
        assert!("6C".parse::<Contract>().unwrap().is_slam());
        assert!("7H".parse::<Contract>().unwrap().is_grand_slam());
    }
}
