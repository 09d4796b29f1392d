use serde::{Deserialize, Serialize};

/// Visual correctness state of one playable cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStyle {
    Neutral,
    Correct,
    Incorrect,
}

impl CheckStyle {
    /// Compares the entered value against the accepted answer, ignoring case.
    pub fn of(value: &str, answer: &str) -> Self {
        let value = value.to_uppercase();
        if value.is_empty() {
            Self::Neutral
        } else if value == answer.to_uppercase() {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    pub const fn color(self) -> &'static str {
        use CheckStyle::*;
        match self {
            Neutral | Correct => "black",
            Incorrect => "red",
        }
    }

    pub const fn font_weight(self) -> &'static str {
        use CheckStyle::*;
        match self {
            Neutral => "normal",
            Correct | Incorrect => "bold",
        }
    }
}

impl Default for CheckStyle {
    fn default() -> Self {
        Self::Neutral
    }
}

/// What has to be restyled after the auto-check switch is flipped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Restyle {
    NoChange,
    /// Recompute every cell from its current value.
    CheckAll,
    /// Reset every cell to [`CheckStyle::Neutral`].
    ClearAll,
}

/// The auto-check switch. Owned by whoever owns the puzzle surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoCheck {
    enabled: bool,
}

impl AutoCheck {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Restyle {
        if self.enabled == enabled {
            return Restyle::NoChange;
        }
        self.enabled = enabled;
        if enabled {
            Restyle::CheckAll
        } else {
            Restyle::ClearAll
        }
    }

    /// Style for a cell that was just edited, or `None` when checking is off and nothing
    /// should be touched.
    pub fn on_edit(self, value: &str, answer: &str) -> Option<CheckStyle> {
        self.enabled.then(|| CheckStyle::of(value, answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_covers_all_three_states() {
        assert_eq!(CheckStyle::of("", "A"), CheckStyle::Neutral);
        assert_eq!(CheckStyle::of("a", "A"), CheckStyle::Correct);
        assert_eq!(CheckStyle::of("A", "a"), CheckStyle::Correct);
        assert_eq!(CheckStyle::of("B", "A"), CheckStyle::Incorrect);
    }

    #[test]
    fn edits_are_not_styled_while_disabled() {
        let check = AutoCheck::new(false);
        assert_eq!(check.on_edit("B", "A"), None);

        let check = AutoCheck::new(true);
        assert_eq!(check.on_edit("B", "A"), Some(CheckStyle::Incorrect));
    }

    #[test]
    fn toggling_reports_the_needed_restyle() {
        let mut check = AutoCheck::new(false);
        assert_eq!(check.set_enabled(false), Restyle::NoChange);
        assert_eq!(check.set_enabled(true), Restyle::CheckAll);
        assert!(check.is_enabled());
        assert_eq!(check.set_enabled(false), Restyle::ClearAll);
        assert!(!check.is_enabled());
    }

    #[test]
    fn visuals_match_rendered_page() {
        assert_eq!(CheckStyle::Neutral.color(), "black");
        assert_eq!(CheckStyle::Neutral.font_weight(), "normal");
        assert_eq!(CheckStyle::Correct.font_weight(), "bold");
        assert_eq!(CheckStyle::Incorrect.color(), "red");
    }
}
