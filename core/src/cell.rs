use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// A playable square: the server's accepted answer plus whatever the player typed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenCell {
    pub answer: String,
    pub value: String,
    pub across: Option<ClueNumber>,
    pub down: Option<ClueNumber>,
}

impl OpenCell {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_uppercase(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Blocked,
    Open(OpenCell),
}

impl Cell {
    pub const fn as_open(&self) -> Option<&OpenCell> {
        match self {
            Self::Open(cell) => Some(cell),
            Self::Blocked => None,
        }
    }

    pub fn as_open_mut(&mut self) -> Option<&mut OpenCell> {
        match self {
            Self::Open(cell) => Some(cell),
            Self::Blocked => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Blocked
    }
}

impl From<OpenCell> for Cell {
    fn from(cell: OpenCell) -> Self {
        Self::Open(cell)
    }
}
