use alloc::vec::Vec;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cards picked in the current attempt.
///
/// A matching pair is resolved on the spot, so two picks are only ever held while a mismatch waits to be flipped
/// back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Empty,
    One(CardId),
    Pending(CardId, CardId),
}

/// Represents a game from the deal until it is replaced by the next one
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board_size: BoardSize,
    deck: Vec<Card>,
    move_count: Saturating<u32>,
    elapsed_secs: Saturating<u32>,
    running: bool,
    selection: Selection,
    session: SessionId,
}

impl Game {
    pub fn new(board_size: BoardSize, seed: u64) -> Self {
        Self::with_generator(board_size, RandomDeckGenerator::new(seed))
    }

    pub fn with_generator(board_size: BoardSize, generator: impl DeckGenerator) -> Self {
        Self::deal(board_size, generator, SessionId::default())
    }

    fn deal(board_size: BoardSize, generator: impl DeckGenerator, session: SessionId) -> Self {
        Self {
            board_size,
            deck: generator.generate(board_size),
            move_count: Saturating(0),
            elapsed_secs: Saturating(0),
            running: false,
            selection: Selection::Empty,
            session,
        }
    }

    /// Throws away the current game and deals a new one, pending flips from the old game become stale
    pub fn restart(&mut self, board_size: BoardSize, seed: u64) {
        self.restart_with_generator(board_size, RandomDeckGenerator::new(seed));
    }

    pub fn restart_with_generator(&mut self, board_size: BoardSize, generator: impl DeckGenerator) {
        let session = self.session.next();
        log::debug!("Restarting as session {:?} with {}", session, board_size);
        *self = Self::deal(board_size, generator, session);
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn cards(&self) -> &[Card] {
        &self.deck
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.iter().find(|card| card.id == id)
    }

    pub fn move_count(&self) -> u32 {
        self.move_count.0
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs.0
    }

    /// Clock is running, from the first flip until the last pair is matched
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn first_pick(&self) -> Option<&Card> {
        match self.selection {
            Selection::Empty => None,
            Selection::One(first) | Selection::Pending(first, _) => self.card(first),
        }
    }

    pub fn second_pick(&self) -> Option<&Card> {
        match self.selection {
            Selection::Pending(_, second) => self.card(second),
            _ => None,
        }
    }

    pub fn is_resolution_pending(&self) -> bool {
        matches!(self.selection, Selection::Pending(..))
    }

    pub fn matched_pairs(&self) -> usize {
        self.deck.iter().filter(|card| card.is_matched).count() / 2
    }

    pub fn pairs_left(&self) -> usize {
        self.deck.len() / 2 - self.matched_pairs()
    }

    /// Every card matched, always computed from the cards themselves
    pub fn is_complete(&self) -> bool {
        !self.deck.is_empty() && self.deck.iter().all(|card| card.is_matched)
    }

    /// Pick a card, the second pick of an attempt is evaluated immediately
    pub fn select(&mut self, id: CardId) -> Result<SelectOutcome> {
        let first = match self.selection {
            Selection::Empty => None,
            Selection::One(first) => Some(first),
            Selection::Pending(..) => return Err(GameError::ResolutionPending),
        };

        let index = self.index_of(id)?;
        if self.deck[index].is_face_up() {
            return Err(GameError::AlreadyFaceUp);
        }

        self.mark_started();
        self.deck[index].is_flipped = true;
        log::debug!("Flipped card {} ({})", id, self.deck[index].value);

        match first {
            None => {
                self.selection = Selection::One(id);
                Ok(SelectOutcome::FirstPick)
            }
            Some(first) => {
                self.move_count += 1;
                self.evaluate(first, id)
            }
        }
    }

    /// Flip back a mismatched pair once its delay has passed
    pub fn resolve(&mut self, pending: PendingFlip) -> Result<()> {
        if pending.session != self.session {
            return Err(GameError::StaleSession);
        }

        match self.selection {
            Selection::Pending(first, second)
                if (first, second) == (pending.first, pending.second) =>
            {
                for id in [first, second] {
                    let index = self.index_of(id)?;
                    self.deck[index].is_flipped = false;
                }
                self.selection = Selection::Empty;
                log::debug!("Flipped back {} and {}", first, second);
                Ok(())
            }
            _ => Err(GameError::NothingPending),
        }
    }

    /// Advances the clock by a second while the game is running
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed_secs += 1;
            log::trace!("Tick, {} seconds elapsed", self.elapsed_secs);
            true
        } else {
            false
        }
    }

    fn evaluate(&mut self, first: CardId, second: CardId) -> Result<SelectOutcome> {
        let first_index = self.index_of(first)?;
        let second_index = self.index_of(second)?;

        if self.deck[first_index].value != self.deck[second_index].value {
            self.selection = Selection::Pending(first, second);
            log::debug!("Mismatch between {} and {}", first, second);
            return Ok(SelectOutcome::Mismatched(PendingFlip {
                session: self.session,
                first,
                second,
            }));
        }

        for index in [first_index, second_index] {
            let card = &mut self.deck[index];
            card.is_matched = true;
            card.is_flipped = false;
        }
        self.selection = Selection::Empty;
        log::debug!("Matched {} and {}, {} pairs left", first, second, self.pairs_left());

        if self.is_complete() {
            self.running = false;
            log::debug!(
                "Completed in {} moves and {} seconds",
                self.move_count,
                self.elapsed_secs
            );
            Ok(SelectOutcome::Completed)
        } else {
            Ok(SelectOutcome::Matched)
        }
    }

    fn mark_started(&mut self) {
        if !self.running && !self.is_complete() {
            self.running = true;
        }
    }

    fn index_of(&self, id: CardId) -> Result<usize> {
        self.deck
            .iter()
            .position(|card| card.id == id)
            .ok_or(GameError::UnknownCard)
    }
}
