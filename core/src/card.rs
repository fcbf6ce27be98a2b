use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub value: Symbol,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card {
    pub const fn new(id: CardId, value: Symbol) -> Self {
        Self {
            id,
            value,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Whether the face is showing, either picked or already matched
    pub const fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }
}
