use crate::puzzle::PuzzleState;
use gloo::events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Entry and backspace handling for every playable input.
pub(crate) fn listen(state: &Rc<PuzzleState>) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(state.inputs().len() * 2);

    for (index, input) in state.inputs().iter().enumerate() {
        let on_input = {
            let state = state.clone();
            EventListener::new(input, "input", move |_| state.on_entry(index))
        };

        let on_keydown = {
            let state = state.clone();
            EventListener::new_with_options(
                input,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if event.key() == "Backspace" && state.on_backspace(index) {
                        event.prevent_default();
                    }
                },
            )
        };

        listeners.push(on_input);
        listeners.push(on_keydown);
    }

    listeners
}
