use crate::board::{self, Board};
use crate::config;
use crate::error::{PageError, Result};
use crate::puzzle::Puzzle;
use crate::utils::*;
use crossword_core::{PuzzleData, SaveRequest, SaveResponse};
use gloo::dialogs::{alert, confirm};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::net::http::Request;
use gloo::utils::{document, document_element};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FormData, HtmlFormElement};

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

type PuzzleSlot = Rc<RefCell<Option<Puzzle>>>;

/// Numbers background submissions so a late response can tell it was superseded.
#[derive(Clone, Debug, Default)]
struct Submissions {
    latest: Rc<Cell<u32>>,
}

impl Submissions {
    fn begin(&self) -> u32 {
        let generation = self.latest.get().wrapping_add(1);
        self.latest.set(generation);
        generation
    }

    fn is_current(&self, generation: u32) -> bool {
        self.latest.get() == generation
    }
}

/// Tears down whatever puzzle is attached, restores saved progress into the current markup
/// and attaches a fresh puzzle to it.
fn mount(slot: &PuzzleSlot) {
    let root = document_element();
    slot.borrow_mut().take();
    board::restore_from_page(&root);
    *slot.borrow_mut() = Some(Puzzle::attach(&root));
}

fn set_loading(loading: bool) {
    set_displayed(config::SPINNER_ID, loading);
    set_displayed(config::LOADING_TEXT_ID, loading);
}

async fn fetch_fragment(form: &HtmlFormElement) -> Result<String> {
    let body = FormData::new_with_form(form)?;
    let (name, value) = config::REQUESTED_WITH;
    let response = Request::post(&form.action())
        .header(name, value)
        .body(body)?
        .send()
        .await?;
    Ok(response.text().await?)
}

/// Submits the puzzle form in the background and swaps the container for the response.
/// Only the newest submission is allowed to render.
async fn submit(
    form: HtmlFormElement,
    slot: PuzzleSlot,
    submissions: Submissions,
    generation: u32,
) {
    let container = element_by_id::<Element>(config::CONTAINER_ID);
    set_loading(true);
    if let Some(container) = &container {
        container.set_inner_html("");
    }

    let result = fetch_fragment(&form).await;
    if !submissions.is_current(generation) {
        log::debug!("dropping response to superseded submission {}", generation);
        return;
    }
    set_loading(false);

    match result {
        Ok(html) => {
            if let Some(container) = &container {
                container.set_inner_html(&html);
            }
            mount(&slot);
        }
        Err(err) => log::error!("puzzle request failed: {}", err),
    }
}

async fn send_save(button: &Element) -> Result<SaveResponse> {
    let data = PuzzleData::from_blocks(data_block_text)?;
    let url = button
        .get_attribute(config::SAVE_URL_ATTR)
        .filter(|url| !url.is_empty())
        .ok_or(PageError::MissingSaveUrl)?;
    let progress = Board::read(&document_element()).capture()?;
    let request = SaveRequest::new(data, progress);

    let (name, value) = config::REQUESTED_WITH;
    let mut builder = Request::post(&url).header(name, value);
    if let Some(token) = get_cookie(config::CSRF_COOKIE) {
        builder = builder.header(config::CSRF_HEADER, &token);
    } else {
        log::warn!("no {} cookie, saving without it", config::CSRF_COOKIE);
    }

    let response = builder.json(&request)?.send().await?;
    Ok(response.json::<SaveResponse>().await?)
}

async fn save(button: Element) {
    match send_save(&button).await {
        Ok(response) => {
            log::info!("save answered: success={}", response.success);
            alert(&response.message());
        }
        Err(err) => {
            log::error!("saving failed: {}", err);
            alert(err.save_message());
        }
    }
}

fn reveal() {
    if !confirm(config::REVEAL_PROMPT) {
        return;
    }
    match Board::read(&document_element()).reveal() {
        Ok(count) => log::info!("revealed {} cells", count),
        Err(err) => log::error!("reveal failed: {}", err),
    }
}

/// Page-wide wiring: the background form submit and the delegated save and reveal buttons.
pub(crate) struct Page {
    _puzzle: PuzzleSlot,
    _listeners: Vec<EventListener>,
}

impl Page {
    pub(crate) fn start() {
        let page = Self::init();
        PAGE.with(|cell| *cell.borrow_mut() = Some(page));
    }

    fn init() -> Self {
        let slot: PuzzleSlot = Rc::default();
        mount(&slot);

        let mut listeners = Vec::new();
        match element_by_id::<HtmlFormElement>(config::FORM_ID) {
            Some(form) => listeners.push(Self::listen_submit(form, slot.clone())),
            None => log::debug!("no #{} form in page", config::FORM_ID),
        }
        listeners.push(Self::listen_clicks());

        Self {
            _puzzle: slot,
            _listeners: listeners,
        }
    }

    fn listen_submit(form: HtmlFormElement, slot: PuzzleSlot) -> EventListener {
        let submissions = Submissions::default();
        let target = form.clone();
        EventListener::new_with_options(
            &target,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let generation = submissions.begin();
                log::debug!("submitting puzzle form ({})", generation);
                spawn_local(submit(
                    form.clone(),
                    slot.clone(),
                    submissions.clone(),
                    generation,
                ));
            },
        )
    }

    fn listen_clicks() -> EventListener {
        EventListener::new(&document(), "click", move |event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            match target.id().as_str() {
                config::REVEAL_BUTTON_ID => reveal(),
                config::SAVE_BUTTON_ID => spawn_local(save(target)),
                _ => {}
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_submission_is_current() {
        let submissions = Submissions::default();
        let first = submissions.begin();
        assert!(submissions.is_current(first));

        let second = submissions.clone().begin();
        assert_ne!(first, second);
        assert!(!submissions.is_current(first));
        assert!(submissions.is_current(second));
    }

    #[test]
    fn generations_wrap_around() {
        let submissions = Submissions::default();
        submissions.latest.set(u32::MAX);
        assert_eq!(submissions.begin(), 0);
        assert!(submissions.is_current(0));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crossword_core::CrosswordError;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn save_without_solution_block_sends_nothing() {
        if let Some(block) = element_by_id::<Element>("solution-grid-data") {
            block.remove();
        }
        let button = document().create_element("button").unwrap();
        button
            .set_attribute(config::SAVE_URL_ATTR, "/save-not-reached/")
            .unwrap();

        let result = send_save(&button).await;
        assert!(matches!(
            result,
            Err(PageError::Crossword(CrosswordError::MissingDataBlock(
                "solution-grid-data"
            )))
        ));
    }
}
