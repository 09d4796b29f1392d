use crate::board::{Board, answer_of};
use crate::utils::*;
use crate::{autocheck, config, highlight, input};
use crossword_core::{AutoCheck, CheckStyle, Navigator, Restyle};
use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{Element, HtmlInputElement};

/// Interaction state of one rendered puzzle, shared by its event handlers.
#[derive(Debug)]
pub(crate) struct PuzzleState {
    inputs: Vec<HtmlInputElement>,
    navigator: Navigator,
    auto_check: Cell<AutoCheck>,
}

impl PuzzleState {
    fn new(inputs: Vec<HtmlInputElement>, auto_check: AutoCheck) -> Self {
        let navigator = Navigator::new(inputs.len());
        Self {
            inputs,
            navigator,
            auto_check: Cell::new(auto_check),
        }
    }

    pub(crate) fn inputs(&self) -> &[HtmlInputElement] {
        &self.inputs
    }

    pub(crate) fn auto_check(&self) -> AutoCheck {
        self.auto_check.get()
    }

    pub(crate) fn set_auto_check(&self, enabled: bool) {
        let mut auto_check = self.auto_check.get();
        let restyle = auto_check.set_enabled(enabled);
        self.auto_check.set(auto_check);
        self.restyle(restyle);
    }

    fn restyle(&self, restyle: Restyle) {
        match restyle {
            Restyle::NoChange => {}
            Restyle::CheckAll => {
                for input in &self.inputs {
                    let style = CheckStyle::of(&input.value(), &answer_of(input));
                    autocheck::apply_style(input, style);
                }
            }
            Restyle::ClearAll => {
                for input in &self.inputs {
                    autocheck::apply_style(input, CheckStyle::Neutral);
                }
            }
        }
    }

    fn restyle_one(&self, input: &HtmlInputElement) {
        if let Some(style) = self.auto_check().on_edit(&input.value(), &answer_of(input)) {
            autocheck::apply_style(input, style);
        }
    }

    pub(crate) fn on_entry(&self, index: usize) {
        let Some(input) = self.inputs.get(index) else {
            return;
        };
        let outcome = self.navigator.on_entry(index, &input.value());
        input.set_value(&outcome.value);
        if !outcome.accepted {
            log::trace!("cell {} rejected entry", index);
            self.restyle_one(input);
            return;
        }

        if let Some(next) = outcome.focus.and_then(|next| self.inputs.get(next)) {
            focus(next);
        }
        self.restyle_one(input);
    }

    /// Returns whether the backspace moved focus, in which case the browser default must be
    /// suppressed.
    pub(crate) fn on_backspace(&self, index: usize) -> bool {
        let Some(input) = self.inputs.get(index) else {
            return false;
        };
        let current_is_empty = input.value().is_empty();
        let Some(prev) = self
            .navigator
            .on_backspace(index, current_is_empty)
            .and_then(|prev| self.inputs.get(prev))
        else {
            return false;
        };

        focus(prev);
        prev.set_value("");
        self.restyle_one(prev);
        true
    }
}

/// Behavior attached to one rendering of the puzzle. Dropping it detaches every listener.
#[derive(Debug)]
pub(crate) struct Puzzle {
    _state: Rc<PuzzleState>,
    _listeners: Vec<EventListener>,
}

impl Puzzle {
    pub(crate) fn attach(root: &Element) -> Self {
        let inputs = Board::read(root).inputs();
        let toggle = element_by_id::<HtmlInputElement>(config::AUTO_CHECK_TOGGLE_ID);
        let enabled = toggle.as_ref().is_some_and(HtmlInputElement::checked);

        let state = Rc::new(PuzzleState::new(inputs, AutoCheck::new(false)));
        state.set_auto_check(enabled);

        let mut listeners = input::listen(&state);
        if let Some(toggle) = &toggle {
            listeners.push(autocheck::listen(&state, toggle));
        } else {
            log::debug!("no auto-check toggle in page");
        }
        listeners.extend(highlight::listen(root));

        log::debug!(
            "puzzle attached: {} inputs, {} listeners",
            state.inputs().len(),
            listeners.len()
        );
        Self {
            _state: state,
            _listeners: listeners,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &PuzzleState {
        &self._state
    }
}
