use crate::error::TableError;
use bridge_core::{Position, Strain};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seat → strain → tricks, the shape results files carry a table in.
type TableRepr = IndexMap<String, IndexMap<String, u8>>;

/// Seats in the order tables are printed: the two partnerships together.
const DISPLAY_SEATS: [Position; 4] = [
    Position::North,
    Position::South,
    Position::East,
    Position::West,
];

/// Tricks each seat takes as declarer in each strain with all four hands
/// visible.
///
/// Serialized as a map of maps keyed by seat then strain, e.g.
/// `{"N": {"S": 10, "H": 8, "D": 8, "C": 9, "NT": 6}, ...}`. Both `N` and `NT`
/// are accepted for no-trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TableRepr", into = "TableRepr")]
pub struct DoubleDummyTable {
    /// Indexed by `Position::idx()`, then `Strain::idx()`.
    tricks: [[u8; 5]; 4],
}

impl DoubleDummyTable {
    pub fn new(tricks: [[u8; 5]; 4]) -> Result<Self, TableError> {
        for seat in Position::ALL {
            for strain in Strain::ALL {
                let count = tricks[seat.idx()][strain.idx()];
                if count > 13 {
                    return Err(TableError::TooManyTricks {
                        seat,
                        strain,
                        tricks: count,
                    });
                }
            }
        }
        Ok(Self { tricks })
    }

    pub fn from_fn(mut f: impl FnMut(Position, Strain) -> u8) -> Result<Self, TableError> {
        let mut tricks = [[0u8; 5]; 4];
        for seat in Position::ALL {
            for strain in Strain::ALL {
                tricks[seat.idx()][strain.idx()] = f(seat, strain);
            }
        }
        Self::new(tricks)
    }

    pub fn tricks(&self, seat: Position, strain: Strain) -> u8 {
        self.tricks[seat.idx()][strain.idx()]
    }

    /// The same deal turned a quarter clockwise: what North could take now
    /// belongs to East, East's to South and so on.
    pub fn rotated(&self) -> Self {
        let mut tricks = [[0u8; 5]; 4];
        for seat in Position::ALL {
            tricks[seat.next().idx()] = self.tricks[seat.idx()];
        }
        Self { tricks }
    }
}

fn strain_key(strain: Strain) -> String {
    match strain {
        Strain::NoTrump => "NT".to_string(),
        other => other.to_char().to_string(),
    }
}

impl TryFrom<TableRepr> for DoubleDummyTable {
    type Error = TableError;

    fn try_from(repr: TableRepr) -> Result<Self, Self::Error> {
        let mut entries = [[None::<u8>; 5]; 4];
        for (seat_key, row) in &repr {
            let seat: Position = seat_key
                .parse()
                .map_err(|_| TableError::UnknownSeat(seat_key.clone()))?;
            for (strain_key, &count) in row {
                let strain: Strain = strain_key
                    .parse()
                    .map_err(|_| TableError::UnknownStrain(strain_key.clone()))?;
                entries[seat.idx()][strain.idx()] = Some(count);
            }
        }

        let mut tricks = [[0u8; 5]; 4];
        for seat in Position::ALL {
            for strain in Strain::ALL {
                tricks[seat.idx()][strain.idx()] = entries[seat.idx()][strain.idx()]
                    .ok_or(TableError::MissingEntry { seat, strain })?;
            }
        }
        DoubleDummyTable::new(tricks)
    }
}

impl From<DoubleDummyTable> for TableRepr {
    fn from(table: DoubleDummyTable) -> Self {
        DISPLAY_SEATS
            .iter()
            .map(|&seat| {
                let row = Strain::TABLE_ORDER
                    .iter()
                    .map(|&strain| (strain_key(strain), table.tricks(seat, strain)))
                    .collect();
                (seat.to_char().to_string(), row)
            })
            .collect()
    }
}

impl fmt::Display for DoubleDummyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for strain in Strain::TABLE_ORDER {
            write!(f, "{:>4}", strain_key(strain))?;
        }
        writeln!(f)?;
        for seat in DISPLAY_SEATS {
            write!(f, "{}", seat)?;
            for strain in Strain::TABLE_ORDER {
                write!(f, "{:>4}", self.tricks(seat, strain))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "N": {"S": 10, "H": 8, "D": 8, "C": 9, "NT": 6},
        "S": {"S": 6, "H": 5, "D": 6, "C": 4, "NT": 6},
        "E": {"S": 5, "H": 6, "D": 6, "C": 8, "NT": 6},
        "W": {"S": 6, "H": 9, "D": 6, "C": 9, "NT": 7}
    }"#;

    #[test]
    fn test_parse_results_shape() {
        let table: DoubleDummyTable = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(table.tricks(Position::North, Strain::Spades), 10);
        assert_eq!(table.tricks(Position::West, Strain::NoTrump), 7);
        assert_eq!(table.tricks(Position::South, Strain::Clubs), 4);
    }

    #[test]
    fn test_accepts_long_seat_names_and_n_for_notrump() {
        let yaml = "
North: {S: 1, H: 2, D: 3, C: 4, N: 5}
East: {S: 1, H: 2, D: 3, C: 4, N: 5}
South: {S: 1, H: 2, D: 3, C: 4, N: 5}
West: {S: 1, H: 2, D: 3, C: 4, N: 13}
";
        let table: DoubleDummyTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table.tricks(Position::West, Strain::NoTrump), 13);
        assert_eq!(table.tricks(Position::East, Strain::Diamonds), 3);
    }

    #[test]
    fn test_missing_entry_is_rejected() {
        let json = SAMPLE.replace(r#""NT": 7"#, r#""X": 7"#);
        let err = serde_json::from_str::<DoubleDummyTable>(&json).unwrap_err();
        assert!(err.to_string().contains("unknown strain 'X'"), "{}", err);

        let json = SAMPLE.replace(r#", "NT": 7"#, "");
        let err = serde_json::from_str::<DoubleDummyTable>(&json).unwrap_err();
        assert!(err.to_string().contains("no trick count for W in N"), "{}", err);
    }

    #[test]
    fn test_too_many_tricks() {
        let result = DoubleDummyTable::from_fn(|seat, strain| {
            if seat == Position::East && strain == Strain::Hearts {
                14
            } else {
                7
            }
        });
        assert_eq!(
            result,
            Err(TableError::TooManyTricks {
                seat: Position::East,
                strain: Strain::Hearts,
                tricks: 14
            })
        );
    }

    #[test]
    fn test_serializes_in_display_order() {
        let table: DoubleDummyTable = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.starts_with(r#"{"N":{"S":10,"H":8,"D":8,"C":9,"NT":6},"S":"#));
        let back: DoubleDummyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_rotation() {
        let table: DoubleDummyTable = serde_json::from_str(SAMPLE).unwrap();
        let rotated = table.rotated();
        assert_eq!(rotated.tricks(Position::East, Strain::Spades), 10);
        assert_eq!(rotated.tricks(Position::North, Strain::Hearts), 9);
        assert_eq!(rotated.rotated().rotated().rotated(), table);
    }

    #[test]
    fn test_display() {
        let table: DoubleDummyTable = serde_json::from_str(SAMPLE).unwrap();
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    S   H   D   C  NT");
        assert_eq!(lines[1], "N  10   8   8   9   6");
        assert_eq!(lines[4], "W   6   9   6   9   7");
    }
}
