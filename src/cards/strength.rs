use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's total strength: ranking first, kickers to break ties.
///
/// Constructed from any 5-7 card Hand. Strengths are totally ordered, so
/// showdown winners fall out of a plain max over the table; two seats tie
/// exactly when their Strengths compare Equal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use crate::cards::rank::Rank;
    use crate::cards::ranking::Ranking;

    #[test]
    fn ranking_dominates_kickers() {
        let pair = Strength::from(Hand::try_from("As Ah Kd Qc Js").unwrap());
        let high = Strength::from(Hand::try_from("As Kh Qd Jc 9s").unwrap());
        assert!(pair > high);
    }

    #[test]
    fn kickers_break_ties() {
        let hi = Strength::from(Hand::try_from("As Ah Kd Qc Js").unwrap());
        let lo = Strength::from(Hand::try_from("Ad Ac Kh Qs Ts").unwrap());
        assert!(hi > lo);
    }

    #[test]
    fn equal_boards_tie() {
        let a = Strength::from(Hand::try_from("As Kh Qd Jc 9s").unwrap());
        let b = Strength::from(Hand::try_from("Ad Ks Qh Jd 9c").unwrap());
        assert!(a == b);
    }

    #[test]
    fn flush_kickers_count() {
        let a = Strength::from(Hand::try_from("As Ks Qs 9s 5s 2h 3d").unwrap());
        let b = Strength::from(Hand::try_from("Ah Kh Qh 9h 4h 2s 3c").unwrap());
        assert!(a > b);
        assert!(matches!(a.ranking(), Ranking::Flush(Rank::Ace)));
    }
}
