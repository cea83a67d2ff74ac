use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::hole::Hole;
use crate::Count;
use anyhow::Result;

/// number of community cards at a completed showdown
pub const FULL_BOARD: usize = 5;

/// Enumerates every legal completion of a partial community board.
///
/// Given the holdings in play and the cards already revealed, this yields
/// each of the C(52 - dead, 5 - revealed) five-card boards exactly once:
/// no duplicates, no card that belongs to a hand or to the board already.
/// The sequence is lazy and allocation-free; ordering is deterministic
/// but carries no meaning, since aggregation is order-invariant.
#[derive(Debug, Clone, Copy)]
pub struct Enumerator {
    used: Hand,
    board: Hand,
}

impl Enumerator {
    /// boards in flight between the producer thread and its consumer
    const BUFFER: usize = 1024;

    pub fn new(hands: &[Hole], board: Hand) -> Result<Self> {
        let used = hands
            .iter()
            .copied()
            .map(Hand::from)
            .map(u64::from)
            .fold(0u64, |a, b| a | b);
        let used = Hand::from(used);
        anyhow::ensure!(!hands.is_empty(), "at least one hand is needed");
        anyhow::ensure!(
            board.size() <= FULL_BOARD,
            "board has {} cards, the maximum is {}",
            board.size(),
            FULL_BOARD,
        );
        anyhow::ensure!(
            u64::from(used) & u64::from(board) == 0,
            "hands and board share a card",
        );
        Ok(Self { used, board })
    }

    pub fn board(&self) -> Hand {
        self.board
    }
    /// community cards still to be dealt
    pub fn slots(&self) -> usize {
        FULL_BOARD - self.board.size()
    }
    /// exact number of boards this enumeration will yield
    pub fn count(&self) -> Count {
        HandIterator::from((self.slots(), self.blocked())).combinations() as Count
    }
    /// cards available to complete the board
    pub fn frees(&self) -> Vec<Card> {
        self.blocked().complement().into_iter().collect()
    }

    fn blocked(&self) -> Hand {
        Hand::from(u64::from(self.used) | u64::from(self.board))
    }

    /// every completed board, lazily, in the calling thread
    pub fn boards(&self) -> impl Iterator<Item = Hand> + '_ {
        let complete = self.slots() == 0;
        std::iter::once(self.board)
            .take(usize::from(complete))
            .chain(
                HandIterator::from((self.slots(), self.blocked()))
                    .map(move |draw| Hand::add(draw, self.board)),
            )
    }

    /// the completions whose lowest dealt card is `head`
    ///
    /// Partitions of distinct heads are disjoint and their union is the
    /// full enumeration, so workers can split the space by head with no
    /// coordination. Only meaningful when at least one slot is open.
    pub fn partition(&self, head: Card) -> impl Iterator<Item = Hand> + '_ {
        let through = (1u64 << u8::from(head) << 1) - 1;
        let blocked = Hand::from(u64::from(self.blocked()) | through);
        let tail = self.slots() - 1;
        std::iter::once(Hand::empty())
            .take(usize::from(tail == 0))
            .chain(HandIterator::from((tail, blocked)))
            .map(move |draw| Hand::add(draw, Hand::from(head)))
            .map(move |draw| Hand::add(draw, self.board))
    }

    /// Hand off every completed board from a dedicated producer thread.
    ///
    /// The channel is bounded, so the producer blocks when it runs ahead
    /// of the consumer. The stream ends deterministically when the last
    /// board is received; it can be drained exactly once. A consumer that
    /// hangs up early just stops the producer.
    pub fn stream(self) -> std::sync::mpsc::IntoIter<Hand> {
        let (tx, rx) = std::sync::mpsc::sync_channel(Self::BUFFER);
        std::thread::spawn(move || {
            for board in self.boards() {
                if tx.send(board).is_err() {
                    break;
                }
            }
        });
        rx.into_iter()
    }
}
