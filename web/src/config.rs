//! Names shared with the server-rendered markup and the save endpoint.

pub(crate) const FORM_ID: &str = "crosswordForm";
pub(crate) const CONTAINER_ID: &str = "crossword-container";
pub(crate) const SPINNER_ID: &str = "loading-spinner";
pub(crate) const LOADING_TEXT_ID: &str = "loading-text";
pub(crate) const AUTO_CHECK_TOGGLE_ID: &str = "errorToggle";
pub(crate) const SAVE_BUTTON_ID: &str = "save-crossword-btn";
pub(crate) const REVEAL_BUTTON_ID: &str = "reveal-solution-btn";

pub(crate) const ROW_SELECTOR: &str = ".crossword-table tr";
pub(crate) const CELL_SELECTOR: &str = "td";
pub(crate) const INPUT_SELECTOR: &str = "input.crossword-input";
pub(crate) const PLAYABLE_CELL_SELECTOR: &str = ".white-square";
pub(crate) const CLUE_ITEM_SELECTOR: &str = ".clue-item";

pub(crate) const ANSWER_ATTR: &str = "data-answer";
pub(crate) const DIRECTION_ATTR: &str = "data-direction";
pub(crate) const CLUE_NUMBER_ATTR: &str = "data-clue-number";
pub(crate) const SAVE_URL_ATTR: &str = "data-save-url";

pub(crate) const CSRF_COOKIE: &str = "csrftoken";
pub(crate) const CSRF_HEADER: &str = "X-CSRFToken";
pub(crate) const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

pub(crate) const REVEAL_PROMPT: &str = "Are you sure you want to reveal the full solution?";
pub(crate) const MISSING_DATA_MESSAGE: &str = "Crossword data not found in DOM.";
pub(crate) const MISSING_SAVE_URL_MESSAGE: &str = "Save location not found in the page.";
pub(crate) const UNREADABLE_GRID_MESSAGE: &str = "Could not read the crossword grid.";
pub(crate) const NETWORK_ERROR_MESSAGE: &str = "Network error while saving crossword.";
