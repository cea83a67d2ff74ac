use super::rank::Rank;
use super::ranking::Ranking;

/// The ten showdown classes a made hand can land in, weakest first.
///
/// This is the key of the per-seat frequency spectrum. It forgets the
/// defining ranks that [`Ranking`] carries; an ace-high straight flush
/// is promoted to its own royal class, matching how results are read.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const COUNT: usize = 10;

    pub const fn all() -> &'static [Self] {
        &[
            Self::HighCard,
            Self::OnePair,
            Self::TwoPair,
            Self::ThreeOfAKind,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOfAKind,
            Self::StraightFlush,
            Self::RoyalFlush,
        ]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl From<Ranking> for Category {
    fn from(ranking: Ranking) -> Self {
        match ranking {
            Ranking::HighCard(_) => Self::HighCard,
            Ranking::OnePair(_) => Self::OnePair,
            Ranking::TwoPair(..) => Self::TwoPair,
            Ranking::ThreeOAK(_) => Self::ThreeOfAKind,
            Ranking::Straight(_) => Self::Straight,
            Ranking::Flush(_) => Self::Flush,
            Ranking::FullHouse(..) => Self::FullHouse,
            Ranking::FourOAK(_) => Self::FourOfAKind,
            Ranking::StraightFlush(Rank::Ace) => Self::RoyalFlush,
            Ranking::StraightFlush(_) => Self::StraightFlush,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::HighCard => "High Card",
                Self::OnePair => "Pair",
                Self::TwoPair => "Two Pair",
                Self::ThreeOfAKind => "Three of a Kind",
                Self::Straight => "Straight",
                Self::Flush => "Flush",
                Self::FullHouse => "Full House",
                Self::FourOfAKind => "Four of a Kind",
                Self::StraightFlush => "Straight Flush",
                Self::RoyalFlush => "Royal Flush",
            }
        )
    }
}
