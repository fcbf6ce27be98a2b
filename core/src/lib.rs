#![no_std]

extern crate alloc;

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use preference::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod generator;
mod preference;
mod types;

/// How long a mismatched pair stays face up before it is flipped back.
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Period of the elapsed-time clock.
pub const TICK_INTERVAL_MS: u32 = 1000;

/// The two supported grids, the board is always square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    #[default]
    #[serde(rename = "4x4")]
    Small,
    #[serde(rename = "6x6")]
    Large,
}

impl BoardSize {
    pub const ALL: [BoardSize; 2] = [BoardSize::Small, BoardSize::Large];

    pub const fn columns(self) -> usize {
        match self {
            Self::Small => 4,
            Self::Large => 6,
        }
    }

    pub const fn pairs(self) -> usize {
        self.cards() / 2
    }

    pub const fn cards(self) -> usize {
        self.columns() * self.columns()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "4x4",
            Self::Large => "6x6",
        }
    }

    /// Lenient parsing, anything unrecognized becomes the default size.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            log::warn!("Unknown board size {:?}, falling back to {}", label, Self::default());
            Self::default()
        })
    }
}

impl FromStr for BoardSize {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.label().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownBoardSize)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Token handed out for a mismatched pair, redeemed with [`Game::resolve`] once the delay is over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFlip {
    pub session: SessionId,
    pub first: CardId,
    pub second: CardId,
}

/// Outcome of selecting a card
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First card of an attempt is now showing
    FirstPick,
    /// Second card matched the first
    Matched,
    /// Second card matched the first and it was the last pair
    Completed,
    /// Second card did not match, both stay up until the pending flip is resolved
    Mismatched(PendingFlip),
}

impl SelectOutcome {
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched | Self::Completed)
    }
}
