use bridge_core::{Position, Vulnerability};
use bridge_par::{AuctionTrace, DoubleDummyTable, ParResult, RungOutcome, Standing};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// One board of a batch file. The board number supplies whatever the dealer
/// and vulnerability fields leave out.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardInput {
    #[serde(default)]
    pub board: Option<u32>,
    #[serde(default)]
    pub dealer: Option<String>,
    #[serde(default)]
    pub vulnerability: Option<String>,
    pub table: DoubleDummyTable,
}

/// A par result as printed in JSON output.
#[derive(Debug, Serialize)]
pub struct BoardOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<u32>,
    pub dealer: Position,
    pub vulnerability: Vulnerability,
    pub score: i32,
    pub par: String,
    pub result: &'a ParResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<&'a AuctionTrace>,
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Reads `path` as YAML or JSON according to its extension.
fn read_structured<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| format!("{}: {}", path.display(), e))
    } else {
        serde_json::from_str(&content).map_err(|e| format!("{}: {}", path.display(), e))
    }
}

pub fn load_table(path: &Path) -> Result<DoubleDummyTable, String> {
    read_structured(path)
}

pub fn parse_table_json(json: &str) -> Result<DoubleDummyTable, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid table: {}", e))
}

pub fn load_batch(path: &Path) -> Result<Vec<BoardInput>, String> {
    read_structured(path)
}

/// Dealer and vulnerability from explicit values, falling back to what the
/// board number implies. Without a board number the dealer must be given and
/// vulnerability defaults to none.
pub fn resolve_deal(
    board: Option<u32>,
    dealer: Option<&str>,
    vulnerability: Option<&str>,
) -> Result<(Position, Vulnerability), String> {
    let dealer = match (dealer, board) {
        (Some(text), _) => text.parse::<Position>().map_err(|e| e.to_string())?,
        (None, Some(n)) => Position::dealer_from_board_number(n),
        (None, None) => return Err("Must provide either --dealer or --board.".to_string()),
    };
    let vulnerability = match (vulnerability, board) {
        (Some(text), _) => text.parse::<Vulnerability>().map_err(|e| e.to_string())?,
        (None, Some(n)) => Vulnerability::from_board_number(n),
        (None, None) => Vulnerability::None,
    };
    Ok((dealer, vulnerability))
}

impl BoardInput {
    pub fn deal(&self) -> Result<(Position, Vulnerability), String> {
        resolve_deal(
            self.board,
            self.dealer.as_deref(),
            self.vulnerability.as_deref(),
        )
    }
}

fn format_standing(standing: &Standing) -> String {
    format!(
        "{} by {} ({})",
        standing.contract, standing.declarer, standing.score
    )
}

pub fn format_board_header(
    board: Option<u32>,
    dealer: Position,
    vulnerability: Vulnerability,
) -> String {
    match board {
        Some(n) => format!("Board {}: dealer {}, vulnerable {}", n, dealer, vulnerability),
        None => format!("Dealer {}, vulnerable {}", dealer, vulnerability),
    }
}

/// The auction as one line per rung, e.g. `5C   EW  sacrifice 5CX by W (300)`.
pub fn format_trace(trace: &AuctionTrace) -> String {
    let mut out = String::new();
    let winner = &trace.winner;
    writeln!(
        out,
        "Auction winner: {} with {} tricks in {}",
        winner.seat, winner.tricks, winner.strain
    )
    .unwrap();

    let Some(opening) = &trace.opening else {
        writeln!(out, "Nobody can make a contract.").unwrap();
        return out;
    };
    writeln!(out, "Opening: {}", format_standing(opening)).unwrap();

    for rung in &trace.rungs {
        let action = match &rung.outcome {
            RungOutcome::Made(standing) => format!("make      {}", format_standing(standing)),
            RungOutcome::Sacrificed(standing) => {
                format!("sacrifice {}", format_standing(standing))
            }
            RungOutcome::Passed => "pass".to_string(),
        };
        writeln!(
            out,
            "{:<4} {:<3} {}",
            rung.bid.to_string(),
            rung.bidders.to_string(),
            action
        )
        .unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_par::par_with_trace;

    const TABLE: &str = r#"{
        "N": {"S": 10, "H": 8, "D": 8, "C": 9, "NT": 6},
        "S": {"S": 6, "H": 5, "D": 6, "C": 4, "NT": 6},
        "E": {"S": 5, "H": 6, "D": 6, "C": 8, "NT": 6},
        "W": {"S": 6, "H": 9, "D": 6, "C": 9, "NT": 7}
    }"#;

    #[test]
    fn test_resolve_deal_from_board_number() {
        assert_eq!(
            resolve_deal(Some(2), None, None),
            Ok((Position::East, Vulnerability::NS))
        );
        assert_eq!(
            resolve_deal(Some(2), Some("W"), Some("Nil")),
            Ok((Position::West, Vulnerability::None))
        );
        assert_eq!(
            resolve_deal(None, Some("south"), None),
            Ok((Position::South, Vulnerability::None))
        );
        assert!(resolve_deal(None, None, Some("All")).is_err());
        assert!(resolve_deal(None, Some("Q"), None).is_err());
    }

    #[test]
    fn test_batch_yaml() {
        let yaml = format!(
            "- board: 3\n  table: {}\n- dealer: N\n  vulnerability: Both\n  table: {}\n",
            TABLE.replace('\n', " "),
            TABLE.replace('\n', " ")
        );
        let boards: Vec<BoardInput> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].deal(), Ok((Position::South, Vulnerability::EW)));
        assert_eq!(boards[1].deal(), Ok((Position::North, Vulnerability::Both)));
    }

    #[test]
    fn test_bad_table_is_an_error() {
        let err = parse_table_json(r#"{"N": {"S": 10}}"#).unwrap_err();
        assert!(err.starts_with("Invalid table"), "{}", err);
    }

    #[test]
    fn test_format_trace() {
        let table = parse_table_json(TABLE).unwrap();
        let (_, trace) = par_with_trace(&table, Vulnerability::None, Position::North);
        let text = format_trace(&trace);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Auction winner: N with 10 tricks in S");
        assert_eq!(lines[1], "Opening: 4S by N (420)");
        assert_eq!(lines[2], "4N   EW  pass");
        assert_eq!(lines[3], "5C   EW  sacrifice 5CX by W (300)");
    }

    #[test]
    fn test_format_trace_passed_out() {
        let table = DoubleDummyTable::from_fn(|_, _| 6).unwrap();
        let (_, trace) = par_with_trace(&table, Vulnerability::None, Position::North);
        assert!(format_trace(&trace).ends_with("Nobody can make a contract.\n"));
    }
}
