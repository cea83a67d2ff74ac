use crate::cards::hand::Hand;
use crate::cards::hole::Hole;

/// One seat in an equity computation.
///
/// Identity is the seat index assigned at construction, which doubles as
/// the seat's position in the statistics table. Two seats dealt the same
/// holding would still be distinct entries, though the duplicate-card
/// check upstream makes that impossible in practice.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    seat: usize,
    hole: Hole,
}

impl Player {
    pub fn new(seat: usize, hole: Hole) -> Self {
        Self { seat, hole }
    }
    pub fn seat(&self) -> usize {
        self.seat
    }
    /// the holding as a card set
    pub fn hole(&self) -> Hand {
        Hand::from(self.hole)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.hole)
    }
}
