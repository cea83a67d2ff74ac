use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;

/// The cards not yet dealt. Random selection via ::draw().
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }

    /// remove a uniformly random card from the deck
    pub fn draw(&mut self) -> Card {
        assert!(self.0.size() > 0);
        let i = rand::thread_rng().gen_range(0..self.0.size());
        let mut bits = u64::from(self.0);
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.remove(card);
        card
    }

    /// remove two cards from the deck to deal as a Hole
    pub fn hole(&mut self) -> Hole {
        let a = self.draw();
        let b = self.draw();
        Hole::from((a, b))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_are_distinct() {
        let mut deck = Deck::new();
        let mut seen = Hand::empty();
        for _ in 0..52 {
            let card = deck.draw();
            assert!(!seen.contains(card));
            seen = Hand::add(seen, Hand::from(card));
        }
        assert_eq!(seen.size(), 52);
    }

    #[test]
    fn hole_takes_two() {
        let mut deck = Deck::new();
        let hole = deck.hole();
        assert_eq!(Hand::from(hole).size(), 2);
        assert_eq!(Hand::from(deck).size(), 50);
    }
}
