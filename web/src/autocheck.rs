use crate::puzzle::PuzzleState;
use crossword_core::CheckStyle;
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::{HtmlElement, HtmlInputElement};

pub(crate) fn apply_style(input: &HtmlElement, style: CheckStyle) {
    let css = input.style();
    let result = css
        .set_property("color", style.color())
        .and_then(|_| css.set_property("font-weight", style.font_weight()));
    if let Err(err) = result {
        log::error!("failed to style cell: {:?}", err);
    }
}

/// Follows the auto-check checkbox, restyling the whole grid on every flip.
pub(crate) fn listen(state: &Rc<PuzzleState>, toggle: &HtmlInputElement) -> EventListener {
    let state = state.clone();
    let target = toggle.clone();
    EventListener::new(toggle, "change", move |_| {
        let enabled = target.checked();
        log::debug!("auto-check: {}", enabled);
        state.set_auto_check(enabled);
    })
}
