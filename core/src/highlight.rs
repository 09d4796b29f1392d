use bitflags::bitflags;

use crate::*;

bitflags! {
    /// Which clue directions currently highlight a cell. An intersection cell can carry both,
    /// and clearing one must leave the other in place.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct HighlightMarks: u8 {
        const ACROSS = 1;
        const DOWN   = 1 << 1;
    }
}

impl HighlightMarks {
    pub const VISIBLE_CLASS: &'static str = "highlighted";
    pub const CLUE_CLASS: &'static str = "highlighted-clue";

    pub const fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Across => Self::ACROSS,
            Direction::Down => Self::DOWN,
        }
    }

    /// Per-direction marker class kept on grid cells next to [`Self::VISIBLE_CLASS`].
    pub const fn direction_class(direction: Direction) -> &'static str {
        match direction {
            Direction::Across => "highlighted-across",
            Direction::Down => "highlighted-down",
        }
    }

    pub fn toggled(self, direction: Direction, on: bool) -> Self {
        let mut marks = self;
        marks.set(Self::for_direction(direction), on);
        marks
    }

    pub const fn is_visible(self) -> bool {
        !self.is_empty()
    }
}

/// Clue a hovered cell stands for: its across clue when it has one, its down clue otherwise.
pub fn cell_hover_clue(across: Option<ClueNumber>, down: Option<ClueNumber>) -> Option<ClueRef> {
    match (across, down) {
        (Some(number), _) => Some(ClueRef::across(number)),
        (None, Some(number)) => Some(ClueRef::down(number)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_hover_prefers_across() {
        assert_eq!(cell_hover_clue(Some(4), Some(2)), Some(ClueRef::across(4)));
        assert_eq!(cell_hover_clue(None, Some(2)), Some(ClueRef::down(2)));
        assert_eq!(cell_hover_clue(None, None), None);
    }

    #[test]
    fn marks_toggle_per_direction() {
        let marks = HighlightMarks::empty()
            .toggled(Direction::Across, true)
            .toggled(Direction::Down, true)
            .toggled(Direction::Across, false);
        assert_eq!(marks, HighlightMarks::DOWN);
        assert!(marks.is_visible());
    }
}
