use super::aggregator::Aggregator;
use super::aggregator::Equity;
use super::enumerator::Enumerator;
use super::player::Player;
use super::progress::Progress;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::Count;
use anyhow::Result;
use rayon::prelude::*;

/// Complete result of one exhaustive equity computation.
///
/// Either every legal board completion has been settled into the table,
/// or the computation failed and no table exists; there is no partial
/// result. Seat order follows the input hand order.
pub struct Equities {
    board: Hand,
    players: Vec<Player>,
    records: Vec<Equity>,
    combinations: Count,
}

impl Equities {
    /// Settle every board completion, fanned out across worker threads.
    ///
    /// The combination space splits by the lowest dealt card; each worker
    /// owns a private table over its partitions, and the tables merge at
    /// the end. No counter is ever shared between threads, and the merged
    /// result is bit-identical to a sequential pass regardless of how the
    /// partitions were scheduled.
    pub fn compute(hands: &[Hole], board: Hand) -> Result<Self> {
        let enumerator = Enumerator::new(hands, board)?;
        let players = Self::seat(hands);
        log::info!("enumerating {} board completions", enumerator.count());
        let aggregator = match enumerator.slots() {
            0 => {
                let mut aggregator = Aggregator::new(&players);
                aggregator.absorb(enumerator.board());
                aggregator
            }
            _ => enumerator
                .frees()
                .into_par_iter()
                .map(|head| {
                    let mut aggregator = Aggregator::new(&players);
                    for complete in enumerator.partition(head) {
                        aggregator.absorb(complete);
                    }
                    aggregator
                })
                .reduce(|| Aggregator::new(&players), Aggregator::merge),
        };
        let (records, combinations) = aggregator.finish();
        debug_assert_eq!(combinations, enumerator.count());
        Ok(Self {
            board,
            players,
            records,
            combinations,
        })
    }

    /// Settle every board completion from a single producer thread.
    ///
    /// The enumerator streams boards over a bounded channel while this
    /// thread drains it to exhaustion. Slower than [`Self::compute`] but
    /// produces the same statistics; generation overlaps evaluation.
    pub fn stream(hands: &[Hole], board: Hand) -> Result<Self> {
        let enumerator = Enumerator::new(hands, board)?;
        let players = Self::seat(hands);
        let mut progress = Progress::new(enumerator.count());
        let mut aggregator = Aggregator::new(&players);
        for complete in enumerator.stream() {
            aggregator.absorb(complete);
            progress.tick();
        }
        let (records, combinations) = aggregator.finish();
        Ok(Self {
            board,
            players,
            records,
            combinations,
        })
    }

    pub fn board(&self) -> Hand {
        self.board
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn records(&self) -> &[Equity] {
        &self.records
    }
    pub fn combinations(&self) -> Count {
        self.combinations
    }

    fn seat(hands: &[Hole]) -> Vec<Player> {
        hands
            .iter()
            .enumerate()
            .map(|(seat, hole)| Player::new(seat, *hole))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::category::Category;

    fn holes(notations: &[&str]) -> Vec<Hole> {
        notations
            .iter()
            .map(|s| Hole::try_from(*s).unwrap())
            .collect()
    }

    #[test]
    fn aces_dominate_kings_on_a_dry_turn() {
        let board = Hand::try_from("2h 7d 9c Ts").unwrap();
        let result = Equities::compute(&holes(&["AcAd", "KhKs"]), board).unwrap();
        let (aces, kings) = (&result.records()[0], &result.records()[1]);
        assert_eq!(result.combinations(), 44);
        assert_eq!(aces.wins(), 42);
        assert_eq!(kings.wins(), 2);
        assert_eq!(aces.ties() + kings.ties(), 0);
        assert_eq!(aces.count(Category::OnePair), 28);
        assert_eq!(aces.count(Category::TwoPair), 12);
        assert_eq!(aces.count(Category::ThreeOfAKind), 2);
        assert_eq!(kings.count(Category::ThreeOfAKind), 2);
    }

    #[test]
    fn rank_identical_hands_always_chop() {
        // no flush is possible, so the suits can never diverge
        let board = Hand::try_from("2c 3c 5h 8d").unwrap();
        let result = Equities::compute(&holes(&["AsKs", "AhKh", "AdKd"]), board).unwrap();
        assert_eq!(result.combinations(), 42);
        for record in result.records() {
            assert_eq!(record.wins(), 0);
            assert_eq!(record.ties(), 42);
        }
    }

    #[test]
    fn full_board_is_a_single_showdown() {
        let board = Hand::try_from("2h 7d 9c Ts 4s").unwrap();
        let result = Equities::compute(&holes(&["AcAd", "KhKs"]), board).unwrap();
        assert_eq!(result.combinations(), 1);
        assert_eq!(result.records()[0].wins(), 1);
        assert_eq!(result.records()[1].wins(), 0);
    }

    #[test]
    fn streamed_and_partitioned_paths_agree() {
        let board = Hand::try_from("Ad Th 6h").unwrap();
        let hands = holes(&["AcKs", "AhKh"]);
        let fanned = Equities::compute(&hands, board).unwrap();
        let piped = Equities::stream(&hands, board).unwrap();
        assert_eq!(fanned.combinations(), piped.combinations());
        for (a, b) in fanned.records().iter().zip(piped.records().iter()) {
            assert_eq!(a.wins(), b.wins());
            assert_eq!(a.ties(), b.ties());
            for category in Category::all() {
                assert_eq!(a.count(*category), b.count(*category));
            }
        }
    }

    #[test]
    fn seat_order_is_the_only_difference_under_swap() {
        let board = Hand::try_from("Ad Th 6h").unwrap();
        let forward = Equities::compute(&holes(&["AcKs", "QdQh"]), board).unwrap();
        let reverse = Equities::compute(&holes(&["QdQh", "AcKs"]), board).unwrap();
        assert_eq!(forward.combinations(), reverse.combinations());
        for (a, b) in forward
            .records()
            .iter()
            .zip(reverse.records().iter().rev())
        {
            assert_eq!(a.wins(), b.wins());
            assert_eq!(a.ties(), b.ties());
            for category in Category::all() {
                assert_eq!(a.count(*category), b.count(*category));
            }
        }
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let board = Hand::try_from("Ad Th 6h").unwrap();
        let hands = holes(&["AcKs", "AhKh", "7c7d"]);
        let once = Equities::compute(&hands, board).unwrap();
        let again = Equities::compute(&hands, board).unwrap();
        for (a, b) in once.records().iter().zip(again.records().iter()) {
            assert_eq!(a.wins(), b.wins());
            assert_eq!(a.ties(), b.ties());
        }
    }
}
