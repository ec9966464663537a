//! Duplicate bridge scoring.
//!
//! Tables are indexed `[not vulnerable, vulnerable]`.

use crate::board::{Position, Vulnerability};
use crate::contract::{Contract, DoubleStatus};
use crate::error::ScoreError;
use crate::strain::Strain;

const PART_SCORE_BONUS: i32 = 50;
const GAME_BONUS: [i32; 2] = [300, 500];
const SMALL_SLAM_BONUS: [i32; 2] = [500, 750];
const GRAND_SLAM_BONUS: [i32; 2] = [1000, 1500];

/// Extra points for the first trick of a no-trump contract.
const NOTRUMP_FIRST_TRICK: i32 = 10;

const UNDOUBLED_UNDERTRICK: [i32; 2] = [50, 100];

/// Doubled penalty for the first, second, third and each later undertrick.
const DOUBLED_UNDERTRICKS: [[i32; 4]; 2] = [[100, 200, 200, 300], [200, 300, 300, 300]];

const DOUBLED_OVERTRICK: [i32; 2] = [100, 200];

fn trick_value(strain: Strain) -> i32 {
    if strain.is_minor() {
        20
    } else {
        30
    }
}

impl DoubleStatus {
    /// Multiplier applied to contracted trick points.
    fn trick_multiplier(self) -> i32 {
        match self {
            DoubleStatus::Undoubled => 1,
            DoubleStatus::Doubled => 2,
            DoubleStatus::Redoubled => 4,
        }
    }

    /// Bonus for making a doubled or redoubled contract.
    fn insult(self) -> i32 {
        match self {
            DoubleStatus::Undoubled => 0,
            DoubleStatus::Doubled => 50,
            DoubleStatus::Redoubled => 100,
        }
    }
}

impl Contract {
    /// Score for the declaring side when they take `tricks` tricks.
    ///
    /// Positive when the contract makes, negative when it goes down.
    pub fn score(&self, tricks: u8, vulnerable: bool) -> i32 {
        let required = self.tricks_required();
        if tricks >= required {
            self.making_score(tricks - required, vulnerable)
        } else {
            -self.undertrick_penalty(required - tricks, vulnerable)
        }
    }

    fn contracted_trick_points(&self) -> i32 {
        let mut points = trick_value(self.strain) * i32::from(self.level);
        if self.strain == Strain::NoTrump {
            points += NOTRUMP_FIRST_TRICK;
        }
        points * self.double_status.trick_multiplier()
    }

    fn making_score(&self, overtricks: u8, vulnerable: bool) -> i32 {
        let vul = usize::from(vulnerable);
        let trick_points = self.contracted_trick_points();

        let mut score = trick_points;
        score += if trick_points >= 100 {
            GAME_BONUS[vul]
        } else {
            PART_SCORE_BONUS
        };

        if self.is_grand_slam() {
            score += GRAND_SLAM_BONUS[vul];
        } else if self.is_slam() {
            score += SMALL_SLAM_BONUS[vul];
        }

        let overtricks = i32::from(overtricks);
        score += match self.double_status {
            DoubleStatus::Undoubled => overtricks * trick_value(self.strain),
            DoubleStatus::Doubled => overtricks * DOUBLED_OVERTRICK[vul],
            DoubleStatus::Redoubled => overtricks * DOUBLED_OVERTRICK[vul] * 2,
        };

        score + self.double_status.insult()
    }

    fn undertrick_penalty(&self, undertricks: u8, vulnerable: bool) -> i32 {
        let vul = usize::from(vulnerable);
        if self.double_status == DoubleStatus::Undoubled {
            return i32::from(undertricks) * UNDOUBLED_UNDERTRICK[vul];
        }

        let table = &DOUBLED_UNDERTRICKS[vul];
        let doubled: i32 = (0..usize::from(undertricks))
            .map(|n| table[n.min(table.len() - 1)])
            .sum();

        match self.double_status {
            DoubleStatus::Redoubled => doubled * 2,
            _ => doubled,
        }
    }
}

/// NS-signed duplicate score for `declarer` playing `contract` and taking
/// `tricks` tricks: positive favours North/South, negative East/West.
pub fn score_for_contract(
    contract: &Contract,
    vulnerability: Vulnerability,
    declarer: Position,
    tricks: u8,
) -> Result<i32, ScoreError> {
    if !(1..=7).contains(&contract.level) {
        return Err(ScoreError::Level(contract.level));
    }
    if tricks > 13 {
        return Err(ScoreError::Tricks(tricks));
    }

    let score = contract.score(tricks, vulnerability.is_vulnerable(declarer));
    Ok(declarer.partnership().sign() * score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(s: &str) -> Contract {
        s.parse().unwrap()
    }

    fn every_contract() -> Vec<Contract> {
        let mut all = Vec::new();
        for level in 1..=7 {
            for strain in Strain::ALL {
                for status in [
                    DoubleStatus::Undoubled,
                    DoubleStatus::Doubled,
                    DoubleStatus::Redoubled,
                ] {
                    all.push(Contract::new(level, strain, status));
                }
            }
        }
        all
    }

    #[test]
    fn made_contracts() {
        assert_eq!(contract("1C").score(9, false), 110);
        assert_eq!(contract("1H").score(9, false), 140);
        assert_eq!(contract("1N").score(7, false), 90);

        assert_eq!(contract("3N").score(9, false), 400);
        assert_eq!(contract("3N").score(9, true), 600);
        assert_eq!(contract("4H").score(10, false), 420);
        assert_eq!(contract("4S").score(10, true), 620);
        assert_eq!(contract("5C").score(11, false), 400);
        assert_eq!(contract("5D").score(11, true), 600);

        assert_eq!(contract("6S").score(12, true), 1430);
        assert_eq!(contract("6N").score(12, false), 990);

        assert_eq!(contract("2CX").score(8, false), 180);
        assert_eq!(contract("2CX").score(9, false), 280);
        assert_eq!(contract("2CX").score(9, true), 380);

        assert_eq!(contract("1NXX").score(8, true), 1160);
        assert_eq!(contract("7SXX").score(13, false), 2240);
    }

    #[test]
    fn set_contracts() {
        for level in 1..=7u8 {
            let undoubled = Contract::new(level, Strain::Hearts, DoubleStatus::Undoubled);
            for tricks in 0..level + 6 {
                let undertricks = i32::from(level + 6 - tricks);
                assert_eq!(undoubled.score(tricks, false), -50 * undertricks);
                assert_eq!(undoubled.score(tricks, true), -100 * undertricks);
            }

            let doubled = Contract::new(level, Strain::Clubs, DoubleStatus::Doubled);
            assert_eq!(doubled.score(level + 5, false), -100);
            assert_eq!(doubled.score(level + 4, false), -300);
            assert_eq!(doubled.score(level + 3, false), -500);
            assert_eq!(doubled.score(level + 2, false), -800);

            assert_eq!(doubled.score(level + 5, true), -200);
            assert_eq!(doubled.score(level + 4, true), -500);
            assert_eq!(doubled.score(level + 3, true), -800);
            assert_eq!(doubled.score(level + 2, true), -1100);

            let redoubled = Contract::new(level, Strain::Clubs, DoubleStatus::Redoubled);
            for tricks in 0..level + 6 {
                assert_eq!(redoubled.score(tricks, false), 2 * doubled.score(tricks, false));
                assert_eq!(redoubled.score(tricks, true), 2 * doubled.score(tricks, true));
            }
        }
    }

    #[test]
    fn worst_case_penalty() {
        // 7NT redoubled, vulnerable, no tricks: 200 + 12 * 300, redoubled.
        assert_eq!(contract("7NXX").score(0, true), -7600);
        assert_eq!(contract("7NX").score(0, false), -3500);
    }

    #[test]
    fn score_is_monotonic_in_tricks() {
        for c in every_contract() {
            for vulnerable in [false, true] {
                for tricks in 0..13u8 {
                    assert!(
                        c.score(tricks, vulnerable) <= c.score(tricks + 1, vulnerable),
                        "{} vul={} not monotonic at {} tricks",
                        c,
                        vulnerable,
                        tricks
                    );
                }
            }
        }
    }

    #[test]
    fn doubling_amplifies_result() {
        for level in 1..=7 {
            for strain in Strain::ALL {
                let plain = Contract::new(level, strain, DoubleStatus::Undoubled);
                let doubled = Contract::new(level, strain, DoubleStatus::Doubled);
                let redoubled = Contract::new(level, strain, DoubleStatus::Redoubled);
                for vulnerable in [false, true] {
                    for tricks in 0..=13u8 {
                        let (p, d, r) = (
                            plain.score(tricks, vulnerable),
                            doubled.score(tricks, vulnerable),
                            redoubled.score(tricks, vulnerable),
                        );
                        if tricks >= plain.tricks_required() {
                            assert!(p <= d && d <= r, "{} at {} tricks", plain, tricks);
                        } else {
                            assert!(p.abs() <= d.abs() && d.abs() <= r.abs());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn ns_signed_scores() {
        let c = contract("1H");
        assert_eq!(
            score_for_contract(&c, Vulnerability::None, Position::East, 9),
            Ok(-140)
        );
        assert_eq!(
            score_for_contract(&c, Vulnerability::None, Position::North, 9),
            Ok(140)
        );
        assert_eq!(
            score_for_contract(&contract("3HX"), Vulnerability::EW, Position::South, 6),
            Ok(-500)
        );
    }

    #[test]
    fn rejects_out_of_range_input() {
        assert_eq!(
            score_for_contract(&contract("4S"), Vulnerability::None, Position::North, 14),
            Err(ScoreError::Tricks(14))
        );
        let bogus = Contract::new(9, Strain::Spades, DoubleStatus::Undoubled);
        assert_eq!(
            score_for_contract(&bogus, Vulnerability::None, Position::North, 13),
            Err(ScoreError::Level(9))
        );
    }
}
