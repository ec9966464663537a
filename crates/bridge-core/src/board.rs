use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    #[default]
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partnership {
    NS,
    EW,
}

impl Partnership {
    pub fn contains(self, pos: Position) -> bool {
        match self {
            Partnership::NS => pos == Position::North || pos == Position::South,
            Partnership::EW => pos == Position::East || pos == Position::West,
        }
    }

    pub fn members(self) -> [Position; 2] {
        match self {
            Partnership::NS => [Position::North, Position::South],
            Partnership::EW => [Position::East, Position::West],
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Partnership::NS => Partnership::EW,
            Partnership::EW => Partnership::NS,
        }
    }

    /// Multiplier that turns a score for this side into an NS-signed score.
    pub fn sign(self) -> i32 {
        match self {
            Partnership::NS => 1,
            Partnership::EW => -1,
        }
    }

    /// Whether NS-signed score `a` is strictly better than `b` for this side.
    pub fn prefers(self, a: i32, b: i32) -> bool {
        self.sign() * a > self.sign() * b
    }
}

impl fmt::Display for Partnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partnership::NS => write!(f, "NS"),
            Partnership::EW => write!(f, "EW"),
        }
    }
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::North,
        Position::East,
        Position::South,
        Position::West,
    ];

    pub fn partnership(self) -> Partnership {
        match self {
            Position::North | Position::South => Partnership::NS,
            Position::East | Position::West => Partnership::EW,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Position::North => Position::East,
            Position::East => Position::South,
            Position::South => Position::West,
            Position::West => Position::North,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Position::North => 0,
            Position::East => 1,
            Position::South => 2,
            Position::West => 3,
        }
    }

    pub fn partner(self) -> Self {
        match self {
            Position::North => Position::South,
            Position::South => Position::North,
            Position::East => Position::West,
            Position::West => Position::East,
        }
    }

    /// The four seats in the order they call, starting with the dealer.
    pub fn bidding_order(dealer: Position) -> [Position; 4] {
        let second = dealer.next();
        let third = second.next();
        [dealer, second, third, third.next()]
    }

    pub fn to_char(self) -> char {
        match self {
            Position::North => 'N',
            Position::East => 'E',
            Position::South => 'S',
            Position::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Position::North),
            'E' => Some(Position::East),
            'S' => Some(Position::South),
            'W' => Some(Position::West),
            _ => None,
        }
    }

    pub fn dealer_from_board_number(board_number: u32) -> Self {
        let index = (board_number + 3) % 4;
        Position::ALL[index as usize]
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let position = match trimmed.to_ascii_lowercase().as_str() {
            "north" => Some(Position::North),
            "east" => Some(Position::East),
            "south" => Some(Position::South),
            "west" => Some(Position::West),
            _ if trimmed.chars().count() == 1 => trimmed.chars().next().and_then(Position::from_char),
            _ => None,
        };
        position.ok_or_else(|| ParseError::Position(s.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Vulnerability {
    #[default]
    None,
    NS,
    EW,
    Both,
}

impl Vulnerability {
    pub fn is_vulnerable(self, pos: Position) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::NS => Partnership::NS.contains(pos),
            Vulnerability::EW => Partnership::EW.contains(pos),
            Vulnerability::Both => true,
        }
    }

    /// The same vulnerability with the two sides exchanged.
    pub fn swapped(self) -> Self {
        match self {
            Vulnerability::NS => Vulnerability::EW,
            Vulnerability::EW => Vulnerability::NS,
            other => other,
        }
    }

    pub fn from_board_number(board_number: u32) -> Self {
        // http://www.jazclass.aust.com/bridge/scoring/score11.htm
        match board_number % 16 {
            1 | 8 | 11 | 14 => Vulnerability::None,
            2 | 5 | 12 | 15 => Vulnerability::NS,
            3 | 6 | 9 | 0 => Vulnerability::EW,
            4 | 7 | 10 | 13 => Vulnerability::Both,
            _ => unreachable!(),
        }
    }
}

impl FromStr for Vulnerability {
    type Err = ParseError;

    /// Accepts the spellings found in results files: `Nil`/`Love`/`-` for
    /// neither side and `All` for both.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "nil" | "love" | "-" => Ok(Vulnerability::None),
            "ns" | "n/s" => Ok(Vulnerability::NS),
            "ew" | "e/w" => Ok(Vulnerability::EW),
            "both" | "all" => Ok(Vulnerability::Both),
            _ => Err(ParseError::Vulnerability(s.to_string())),
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Vulnerability::None => "None",
            Vulnerability::NS => "NS",
            Vulnerability::EW => "EW",
            Vulnerability::Both => "Both",
        };
        write!(f, "{}", name)
    }
}
