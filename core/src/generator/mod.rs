use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

pub trait DeckGenerator {
    fn generate(self, board_size: BoardSize) -> Vec<Card>;
}

/// Deals the cards in their pre-shuffle order: every symbol once, then every symbol again.
///
/// Card `i` and card `i + pairs` always form a pair.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OrderedDeckGenerator;

impl DeckGenerator for OrderedDeckGenerator {
    fn generate(self, board_size: BoardSize) -> Vec<Card> {
        let pairs = board_size.pairs();
        (0..board_size.cards())
            .map(|position| {
                // both fit in u8, the largest board has 36 cards
                let value = Symbol((position % pairs) as u8);
                Card::new(CardId(position as u8), value)
            })
            .collect()
    }
}
