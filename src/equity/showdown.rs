use super::player::Player;
use crate::cards::category::Category;
use crate::cards::hand::Hand;
use crate::cards::strength::Strength;

/// One seat's share of a showdown victory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Winner {
    pub seat: usize,
    pub category: Category,
}

/// Ephemeral evaluation of one completed board against every seat.
///
/// The strength buffer is allocated once and reused across boards, so the
/// per-combination cost is the evaluations themselves and nothing else.
/// Inputs are never mutated; winner determination is a pure function of
/// (board, players).
pub struct Showdown {
    strengths: Vec<Strength>,
}

impl Showdown {
    pub fn new(seats: usize) -> Self {
        Self {
            strengths: Vec::with_capacity(seats),
        }
    }

    /// score every seat's best hand over this complete board
    pub fn evaluate(&mut self, board: Hand, players: &[Player]) {
        self.strengths.clear();
        self.strengths.extend(
            players
                .iter()
                .map(|player| Strength::from(Hand::add(board, player.hole()))),
        );
    }

    /// every seat achieving the maximal strength, tagged with its category
    pub fn winners(&self) -> impl Iterator<Item = Winner> + '_ {
        let best = *self
            .strengths
            .iter()
            .max()
            .expect("at least one seat evaluated");
        self.strengths
            .iter()
            .enumerate()
            .filter(move |(_, strength)| **strength == best)
            .map(|(seat, strength)| Winner {
                seat,
                category: Category::from(strength.ranking()),
            })
    }
}

/// Winner set for one complete board.
///
/// Convenience over [`Showdown`] for one-off evaluations; the engine's hot
/// loop holds a Showdown instead to keep the buffer warm.
pub fn winners(board: Hand, players: &[Player]) -> Vec<Winner> {
    let mut showdown = Showdown::new(players.len());
    showdown.evaluate(board, players);
    showdown.winners().collect()
}
