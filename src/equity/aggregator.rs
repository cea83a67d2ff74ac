use super::player::Player;
use super::showdown::Showdown;
use crate::cards::category::Category;
use crate::cards::hand::Hand;
use crate::Count;

/// Running statistics for one seat.
///
/// Every absorbed showdown lands in exactly one category slot and exactly
/// one of wins or ties, so `wins + ties` always equals the spectrum total.
/// Losing showdowns leave the record untouched.
#[derive(Debug, Default, Clone)]
pub struct Equity {
    wins: Count,
    ties: Count,
    spectrum: [Count; Category::COUNT],
}

impl Equity {
    pub fn wins(&self) -> Count {
        self.wins
    }
    pub fn ties(&self) -> Count {
        self.ties
    }
    /// showdowns this seat won or chopped
    pub fn showdowns(&self) -> Count {
        self.wins + self.ties
    }
    pub fn count(&self, category: Category) -> Count {
        self.spectrum[category.index()]
    }

    fn absorb(&mut self, category: Category, solo: bool) {
        self.spectrum[category.index()] += 1;
        if solo {
            self.wins += 1;
        } else {
            self.ties += 1;
        }
    }
    fn merge(&mut self, other: &Self) {
        self.wins += other.wins;
        self.ties += other.ties;
        for (mine, theirs) in self.spectrum.iter_mut().zip(other.spectrum.iter()) {
            *mine += *theirs;
        }
    }
}

/// Consumes completed boards and accumulates the statistics table.
///
/// Exclusively owns its table for the duration of one computation; all
/// accumulation is commutative and associative, so tables built by
/// independent workers over disjoint partitions merge into exactly the
/// table one worker would have built over the whole stream.
pub struct Aggregator<'a> {
    players: &'a [Player],
    records: Vec<Equity>,
    combinations: Count,
    showdown: Showdown,
}

impl<'a> Aggregator<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        debug_assert!(players.iter().enumerate().all(|(i, p)| i == p.seat()));
        Self {
            players,
            records: vec![Equity::default(); players.len()],
            combinations: 0,
            showdown: Showdown::new(players.len()),
        }
    }

    /// settle one completed board into the table
    pub fn absorb(&mut self, board: Hand) {
        self.showdown.evaluate(board, self.players);
        let solo = self.showdown.winners().count() == 1;
        for winner in self.showdown.winners() {
            self.records[winner.seat].absorb(winner.category, solo);
        }
        self.combinations += 1;
    }

    pub fn merge(mut self, other: Self) -> Self {
        for (mine, theirs) in self.records.iter_mut().zip(other.records.iter()) {
            mine.merge(theirs);
        }
        self.combinations += other.combinations;
        self
    }

    pub fn finish(self) -> (Vec<Equity>, Count) {
        (self.records, self.combinations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hole::Hole;
    use crate::equity::enumerator::Enumerator;

    fn players(notations: &[&str]) -> Vec<Player> {
        notations
            .iter()
            .enumerate()
            .map(|(seat, s)| Player::new(seat, Hole::try_from(*s).unwrap()))
            .collect()
    }

    fn holes(notations: &[&str]) -> Vec<Hole> {
        notations
            .iter()
            .map(|s| Hole::try_from(*s).unwrap())
            .collect()
    }

    #[test]
    fn every_board_counts_once() {
        let board = Hand::try_from("Ad Th 6h 2c").unwrap();
        let table = players(&["AcKs", "AhKh"]);
        let enumerator = Enumerator::new(&holes(&["AcKs", "AhKh"]), board).unwrap();
        let mut aggregator = Aggregator::new(&table);
        for complete in enumerator.boards() {
            aggregator.absorb(complete);
        }
        let (_, combinations) = aggregator.finish();
        assert_eq!(combinations, enumerator.count());
    }

    #[test]
    fn wins_and_ties_match_the_spectrum() {
        let board = Hand::try_from("Ad Th 6h 2c").unwrap();
        let table = players(&["AcKs", "AhKh"]);
        let enumerator = Enumerator::new(&holes(&["AcKs", "AhKh"]), board).unwrap();
        let mut aggregator = Aggregator::new(&table);
        for complete in enumerator.boards() {
            aggregator.absorb(complete);
        }
        let (records, combinations) = aggregator.finish();
        for record in records.iter() {
            let spectrum: Count = Category::all().iter().map(|c| record.count(*c)).sum();
            assert_eq!(record.showdowns(), spectrum);
            assert!(record.showdowns() <= combinations);
        }
        // every board crowns at least one winner
        assert!(records.iter().map(|r| r.showdowns()).sum::<Count>() >= combinations);
    }

    #[test]
    fn merged_halves_equal_the_whole() {
        let board = Hand::try_from("Ad Th 6h").unwrap();
        let table = players(&["AcKs", "AhKh"]);
        let enumerator = Enumerator::new(&holes(&["AcKs", "AhKh"]), board).unwrap();
        let boards = enumerator.boards().collect::<Vec<_>>();

        let mut whole = Aggregator::new(&table);
        for complete in boards.iter() {
            whole.absorb(*complete);
        }

        let (mut left, mut right) = (Aggregator::new(&table), Aggregator::new(&table));
        let half = boards.len() / 2;
        for complete in boards[..half].iter() {
            left.absorb(*complete);
        }
        for complete in boards[half..].iter() {
            right.absorb(*complete);
        }

        let (expected, n) = whole.finish();
        let (merged, m) = left.merge(right).finish();
        assert_eq!(n, m);
        for (a, b) in expected.iter().zip(merged.iter()) {
            assert_eq!(a.wins(), b.wins());
            assert_eq!(a.ties(), b.ties());
            for category in Category::all() {
                assert_eq!(a.count(*category), b.count(*category));
            }
        }
    }
}
