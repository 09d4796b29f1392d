use crate::config;
use crate::utils::*;
use crossword_core::{ClueRef, Direction, HighlightMarks, cell_hover_clue};
use gloo::events::EventListener;
use web_sys::Element;

fn marks_of(cell: &Element) -> HighlightMarks {
    let classes = cell.class_list();
    [Direction::Across, Direction::Down]
        .into_iter()
        .filter(|&direction| classes.contains(HighlightMarks::direction_class(direction)))
        .fold(HighlightMarks::empty(), |marks, direction| {
            marks | HighlightMarks::for_direction(direction)
        })
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::error!("failed to toggle class {}: {:?}", class, err);
    }
}

fn set_cell_mark(cell: &Element, direction: Direction, on: bool) {
    let marks = marks_of(cell).toggled(direction, on);
    toggle_class(cell, HighlightMarks::direction_class(direction), on);
    toggle_class(cell, HighlightMarks::VISIBLE_CLASS, marks.is_visible());
}

fn cell_selector(clue: ClueRef) -> String {
    format!(
        "{}[{}=\"{}\"]",
        config::PLAYABLE_CELL_SELECTOR,
        clue.direction.cell_attr(),
        clue.number
    )
}

fn clue_item_selector(clue: ClueRef) -> String {
    format!(
        "{}[{}=\"{}\"][{}=\"{}\"]",
        config::CLUE_ITEM_SELECTOR,
        config::DIRECTION_ATTR,
        clue.direction,
        config::CLUE_NUMBER_ATTR,
        clue.number
    )
}

/// Highlights (or clears) a word's cells together with its entry in the clue list.
pub(crate) fn set_word_highlight(root: &Element, clue: ClueRef, on: bool) {
    log::trace!("highlight {}: {}", clue, on);
    for cell in query_all(root, &cell_selector(clue)) {
        set_cell_mark(&cell, clue.direction, on);
    }
    if let Some(item) = query_one::<Element>(root, &clue_item_selector(clue)) {
        toggle_class(&item, HighlightMarks::CLUE_CLASS, on);
    }
}

fn hovered_cell_clue(cell: &Element) -> Option<ClueRef> {
    cell_hover_clue(
        clue_number_attr(cell, Direction::Across.cell_attr()),
        clue_number_attr(cell, Direction::Down.cell_attr()),
    )
}

fn hovered_item_clue(item: &Element) -> Option<ClueRef> {
    ClueRef::parse(
        &item.get_attribute(config::DIRECTION_ATTR).unwrap_or_default(),
        &item.get_attribute(config::CLUE_NUMBER_ATTR).unwrap_or_default(),
    )
}

fn hover_listeners(
    root: &Element,
    target: &Element,
    resolve: fn(&Element) -> Option<ClueRef>,
) -> [EventListener; 2] {
    [("mouseenter", true), ("mouseleave", false)].map(|(event_type, on)| {
        let root = root.clone();
        let element = target.clone();
        EventListener::new(target, event_type, move |_| {
            if let Some(clue) = resolve(&element) {
                set_word_highlight(&root, clue, on);
            }
        })
    })
}

/// Links hovering over grid cells and clue entries in both directions.
pub(crate) fn listen(root: &Element) -> Vec<EventListener> {
    let cells = query_all(root, config::PLAYABLE_CELL_SELECTOR)
        .into_iter()
        .flat_map(|cell| hover_listeners(root, &cell, hovered_cell_clue));
    let items = query_all(root, config::CLUE_ITEM_SELECTOR)
        .into_iter()
        .flat_map(|item| hover_listeners(root, &item, hovered_item_clue));
    cells.chain(items).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_the_markup_contract() {
        assert_eq!(
            cell_selector(ClueRef::across(4)),
            ".white-square[data-across-number=\"4\"]"
        );
        assert_eq!(
            cell_selector(ClueRef::down(12)),
            ".white-square[data-down-number=\"12\"]"
        );
        assert_eq!(
            clue_item_selector(ClueRef::across(4)),
            ".clue-item[data-direction=\"across\"][data-clue-number=\"4\"]"
        );
    }
}
