use super::*;

/// Uniformly shuffled deck, reproducible from the seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, board_size: BoardSize) -> Vec<Card> {
        use rand::prelude::*;
        use rand::seq::SliceRandom;

        let mut cards = OrderedDeckGenerator.generate(board_size);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        cards.shuffle(&mut rng);

        log::debug!(
            "Dealt {} cards for {} with seed {}",
            cards.len(),
            board_size,
            self.seed
        );
        cards
    }
}
