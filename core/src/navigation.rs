use alloc::string::String;

/// Result of a character landing in one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryOutcome {
    /// Value the cell must hold afterwards.
    pub value: String,
    /// Flat index of the cell to focus next, if focus moves.
    pub focus: Option<usize>,
    /// Whether the entry was accepted and the cell may be restyled.
    pub accepted: bool,
}

/// Keystroke rules over the flat, document-ordered sequence of playable inputs.
///
/// Movement ignores clue direction: after a letter focus always goes to the next input in
/// document order, even inside a down word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    len: usize,
}

impl Navigator {
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Handles the raw value of the input at `index` after an input event.
    ///
    /// Only the most recently typed character survives, uppercased. A whitespace character
    /// empties the cell and keeps focus where it is.
    pub fn on_entry(self, index: usize, raw: &str) -> EntryOutcome {
        let upper = raw.to_uppercase();
        let last = upper.chars().next_back();

        match last {
            Some(glyph) if glyph.is_whitespace() => EntryOutcome {
                value: String::new(),
                focus: None,
                accepted: false,
            },
            Some(glyph) => EntryOutcome {
                value: String::from(glyph),
                focus: self.next(index),
                accepted: true,
            },
            None => EntryOutcome {
                value: String::new(),
                focus: None,
                accepted: true,
            },
        }
    }

    /// Backspace on the input at `index`. Returns the cell to focus and clear, which only
    /// happens when the current cell is already empty.
    pub fn on_backspace(self, index: usize, current_is_empty: bool) -> Option<usize> {
        if current_is_empty {
            self.prev(index)
        } else {
            None
        }
    }

    pub fn next(self, index: usize) -> Option<usize> {
        let next = index.checked_add(1)?;
        (next < self.len).then_some(next)
    }

    pub fn prev(self, index: usize) -> Option<usize> {
        if index < self.len {
            index.checked_sub(1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn space_is_rejected_without_moving() {
        let nav = Navigator::new(3);
        let outcome = nav.on_entry(0, " ");
        assert_eq!(outcome.value, "");
        assert_eq!(outcome.focus, None);
        assert!(!outcome.accepted);

        let outcome = nav.on_entry(1, "A ");
        assert_eq!(outcome.value, "");
        assert_eq!(outcome.focus, None);
    }

    #[test]
    fn only_the_latest_character_is_kept() {
        let nav = Navigator::new(3);
        let outcome = nav.on_entry(0, "ab");
        assert_eq!(outcome.value, "B");
        assert_eq!(outcome.focus, Some(1));
    }

    #[test]
    fn last_cell_keeps_focus() {
        let nav = Navigator::new(3);
        let outcome = nav.on_entry(2, "x");
        assert_eq!(outcome.value, "X");
        assert_eq!(outcome.focus, None);
    }

    #[test]
    fn clearing_a_cell_does_not_advance() {
        let outcome = Navigator::new(3).on_entry(1, "");
        assert_eq!(outcome.value, "");
        assert_eq!(outcome.focus, None);
        assert!(outcome.accepted);
    }

    #[test]
    fn typing_a_word_walks_the_flat_sequence() {
        // 3x3 with the middle row blocked: row 1 is flat indices 0..3
        let nav = Navigator::new(6);
        let mut focus = 0;
        let mut values = Vec::new();
        for glyph in ["c", "a", "t"] {
            let outcome = nav.on_entry(focus, glyph);
            values.push(outcome.value);
            focus = outcome.focus.unwrap_or(focus);
        }
        assert_eq!(values, ["C", "A", "T"]);
        assert_eq!(focus, 3);
    }

    #[test]
    fn backspace_retreats_only_from_empty_cells() {
        let nav = Navigator::new(3);
        assert_eq!(nav.on_backspace(2, true), Some(1));
        assert_eq!(nav.on_backspace(2, false), None);
        assert_eq!(nav.on_backspace(0, true), None);
    }
}
