//! Par: the result when both sides bid perfectly on a double-dummy table.
//!
//! The auction is simulated one rung at a time from the winning side's best
//! contract up to 7NT. A side that can make the next rung takes over the
//! contract; otherwise it may sacrifice there (always doubled) when going
//! down costs less than the contract standing against it. Sacrifices against
//! one's own side's contract are not considered.

use crate::result::ParResult;
use crate::table::DoubleDummyTable;
use crate::trace::{AuctionTrace, AuctionWinner, RungOutcome, RungTrace, Standing};
use bridge_core::{Bid, Contract, DoubleStatus, Partnership, Position, Strain, Vulnerability};
use tracing::{debug, trace};

/// Par score and contracts for a deal.
pub fn par_score_and_contract(
    table: &DoubleDummyTable,
    vulnerability: Vulnerability,
    dealer: Position,
) -> ParResult {
    par_with_trace(table, vulnerability, dealer).0
}

/// As [`par_score_and_contract`], also returning every step of the
/// simulated auction.
pub fn par_with_trace(
    table: &DoubleDummyTable,
    vulnerability: Vulnerability,
    dealer: Position,
) -> (ParResult, AuctionTrace) {
    let calculator = ParCalculator {
        table,
        vulnerability,
    };

    let winner = calculator.auction_winner(dealer);
    debug!(
        target: "bridge_par::auction",
        seat = %winner.seat,
        strain = %winner.strain,
        tricks = winner.tricks,
        "auction winner"
    );

    let mut auction = AuctionTrace {
        dealer,
        vulnerability,
        winner,
        opening: calculator.opening_contract(winner.seat),
        rungs: Vec::new(),
    };

    let Some(opening) = auction.opening else {
        debug!(target: "bridge_par::auction", "no makeable contract, passed out");
        return (ParResult::passed_out(), auction);
    };

    let par = calculator.run_auction(opening, &mut auction.rungs);
    (calculator.equal_contracts(par), auction)
}

struct ParCalculator<'a> {
    table: &'a DoubleDummyTable,
    vulnerability: Vulnerability,
}

impl ParCalculator<'_> {
    /// NS-signed score for `declarer` in `contract` taking their
    /// double-dummy tricks.
    fn score(&self, contract: Contract, declarer: Position) -> i32 {
        let tricks = self.table.tricks(declarer, contract.strain);
        let vulnerable = self.vulnerability.is_vulnerable(declarer);
        declarer.partnership().sign() * contract.score(tricks, vulnerable)
    }

    fn standing(&self, contract: Contract, declarer: Position) -> Standing {
        Standing {
            contract,
            declarer,
            score: self.score(contract, declarer),
        }
    }

    /// The seat with the most tricks in the highest strain. Equal claims go
    /// to the seat nearest the dealer, who gets to name the contract first.
    fn auction_winner(&self, dealer: Position) -> AuctionWinner {
        let mut winner = AuctionWinner {
            seat: dealer,
            strain: Strain::Clubs,
            tricks: self.table.tricks(dealer, Strain::Clubs),
        };
        for seat in Position::bidding_order(dealer) {
            for strain in Strain::ALL {
                let tricks = self.table.tricks(seat, strain);
                if (tricks, strain) > (winner.tricks, winner.strain) {
                    winner = AuctionWinner {
                        seat,
                        strain,
                        tricks,
                    };
                }
            }
        }
        winner
    }

    /// Best making contract for `seat` alone, bid to the level its tricks
    /// allow.
    fn best_contract_for(&self, seat: Position) -> Option<Standing> {
        let side = seat.partnership();
        let mut best: Option<Standing> = None;
        for strain in Strain::TABLE_ORDER {
            let tricks = self.table.tricks(seat, strain);
            if tricks < 7 {
                continue;
            }
            let candidate = self.standing(
                Contract::new(tricks - 6, strain, DoubleStatus::Undoubled),
                seat,
            );
            if best.map_or(true, |b| side.prefers(candidate.score, b.score)) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Where the auction winner's side rests without competition. The highest
    /// contract is not always the best: 3NT+1 beats 5D=.
    fn opening_contract(&self, winner: Position) -> Option<Standing> {
        let side = winner.partnership();
        let best = match (
            self.best_contract_for(winner),
            self.best_contract_for(winner.partner()),
        ) {
            (Some(own), Some(partner)) if side.prefers(partner.score, own.score) => partner,
            (Some(own), _) => own,
            (None, partner) => partner?,
        };

        Some(Standing {
            contract: starting_contract(best.contract, best.score),
            ..best
        })
    }

    fn better(side: Partnership, current: Standing, candidate: Standing) -> Standing {
        if side.prefers(candidate.score, current.score) {
            candidate
        } else {
            current
        }
    }

    /// The better result for `side` if one of its members makes `bid`. When
    /// both make it, the one with more tricks declares, so the choice does not
    /// depend on which seat is listed first.
    fn best_making(&self, side: Partnership, bid: Bid) -> Option<Standing> {
        side.members()
            .into_iter()
            .filter(|&seat| self.table.tricks(seat, bid.strain) >= bid.tricks_required())
            .map(|seat| self.standing(bid.undoubled(), seat))
            .reduce(|current, candidate| Self::better(side, current, candidate))
    }

    /// The better result for `side` playing `bid` doubled.
    fn best_doubled(&self, side: Partnership, bid: Bid) -> Standing {
        let [first, second] = side.members();
        Self::better(
            side,
            self.standing(bid.doubled(), first),
            self.standing(bid.doubled(), second),
        )
    }

    /// Having found a worthwhile sacrifice at `found`, look at every higher
    /// rung for a cheaper one before settling on it.
    fn best_sacrifice_from(&self, side: Partnership, found: Standing) -> Standing {
        found
            .contract
            .bid()
            .bids_above()
            .map(|bid| self.best_doubled(side, bid))
            .fold(found, |best, candidate| Self::better(side, best, candidate))
    }

    fn run_auction(&self, opening: Standing, rungs: &mut Vec<RungTrace>) -> Standing {
        let mut par = opening;
        let mut bid = opening.contract.bid();
        let mut bidders = opening.declarer.partnership().opponent();

        while let Some(next) = bid.next_up() {
            bid = next;

            if let Some(made) = self.best_making(bidders, bid) {
                debug!(
                    target: "bridge_par::auction",
                    contract = %made.contract,
                    declarer = %made.declarer,
                    score = made.score,
                    "contract made"
                );
                rungs.push(RungTrace {
                    bid,
                    bidders,
                    outcome: RungOutcome::Made(made),
                });
                par = made;
                bidders = bidders.opponent();
                continue;
            }

            let sacrifice = self.best_doubled(bidders, bid);
            if !bidders.prefers(sacrifice.score, par.score) {
                trace!(target: "bridge_par::auction", bid = %bid, side = %bidders, "passed");
                rungs.push(RungTrace {
                    bid,
                    bidders,
                    outcome: RungOutcome::Passed,
                });
                continue;
            }

            let sacrifice = self.best_sacrifice_from(bidders, sacrifice);
            debug!(
                target: "bridge_par::auction",
                contract = %sacrifice.contract,
                declarer = %sacrifice.declarer,
                score = sacrifice.score,
                "sacrifice"
            );
            rungs.push(RungTrace {
                bid,
                bidders,
                outcome: RungOutcome::Sacrificed(sacrifice),
            });
            bid = sacrifice.contract.bid();
            par = sacrifice;
            bidders = bidders.opponent();
        }

        par
    }

    /// Every contract the par side could play for exactly the par score.
    fn equal_contracts(&self, par: Standing) -> ParResult {
        let mut result = ParResult {
            score: par.score,
            contracts: Vec::new(),
        };
        let partner = par.declarer.partner();
        let level = par.contract.level;

        if par.contract.is_doubled() {
            // Other sacrifices at this level, or one higher in a lower strain.
            // Listed from the side's first member whoever declares par.
            for seat in par.declarer.partnership().members() {
                for strain in Strain::TABLE_ORDER {
                    let level = if strain >= par.contract.strain {
                        level
                    } else if level < 7 {
                        level + 1
                    } else {
                        continue;
                    };
                    let contract = Contract::new(level, strain, DoubleStatus::Doubled);
                    if self.score(contract, seat) == par.score {
                        result.add(contract, None, seat);
                    }
                }
            }
            return result;
        }

        let tricks = self.table.tricks(par.declarer, par.contract.strain);
        let overtricks = Some(tricks.saturating_sub(par.contract.tricks_required()));
        result.add(par.contract, overtricks, par.declarer);
        if self.score(par.contract, partner) == par.score {
            result.add(par.contract, overtricks, partner);
        }

        for seat in [par.declarer, partner] {
            for strain in Strain::TABLE_ORDER {
                let tricks = self.table.tricks(seat, strain);
                if strain == par.contract.strain || tricks < 7 {
                    continue;
                }
                let contract = Contract::new(tricks - 6, strain, DoubleStatus::Undoubled);
                if self.score(contract, seat) == par.score {
                    result.add(contract, Some(0), seat);
                }
            }
        }
        result
    }
}

/// The level the winning side opens the competition from: games drop to the
/// game level, part scores to the one level, slams stay where they are.
fn starting_contract(contract: Contract, score: i32) -> Contract {
    let magnitude = score.abs();
    let level = if (400..=720).contains(&magnitude) {
        contract.strain.game_level()
    } else if magnitude < 400 {
        1
    } else {
        contract.level
    };
    Contract { level, ..contract }
}
