use crate::config;
use crate::error::Result;
use crate::utils::*;
use crossword_core::{Cell, ClueNumber, Coord2, DataBlock, Direction, Grid, OpenCell, ProgressGrid};
use web_sys::{Element, Event, EventInit, HtmlInputElement};

/// Accepted answer carried by a playable input.
pub(crate) fn answer_of(input: &HtmlInputElement) -> String {
    input
        .get_attribute(config::ANSWER_ATTR)
        .unwrap_or_default()
        .to_uppercase()
}

#[derive(Clone, Debug)]
struct BoardCell {
    cell: Element,
    input: Option<HtmlInputElement>,
}

impl BoardCell {
    fn clue_number(&self, direction: Direction) -> Option<ClueNumber> {
        let attr = direction.cell_attr();
        clue_number_attr(&self.cell, attr).or_else(|| {
            self.input
                .as_ref()
                .and_then(|input| clue_number_attr(input, attr))
        })
    }

    fn to_cell(&self) -> Cell {
        let Some(input) = &self.input else {
            return Cell::Blocked;
        };
        Cell::Open(OpenCell {
            value: input.value(),
            across: self.clue_number(Direction::Across),
            down: self.clue_number(Direction::Down),
            ..OpenCell::new(&answer_of(input))
        })
    }
}

/// The rendered crossword table: live inputs addressed by `(row, col)`.
#[derive(Clone, Debug)]
pub(crate) struct Board {
    rows: Vec<Vec<BoardCell>>,
}

impl Board {
    pub(crate) fn read(root: &Element) -> Self {
        let rows = query_all(root, config::ROW_SELECTOR)
            .into_iter()
            .map(|row| {
                query_all(&row, config::CELL_SELECTOR)
                    .into_iter()
                    .map(|cell| {
                        let input = query_one::<HtmlInputElement>(&cell, config::INPUT_SELECTOR);
                        BoardCell { cell, input }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Playable inputs in flat document order.
    pub(crate) fn inputs(&self) -> Vec<HtmlInputElement> {
        self.rows
            .iter()
            .flatten()
            .filter_map(|cell| cell.input.clone())
            .collect()
    }

    fn input_at(&self, (row, col): Coord2) -> Option<&HtmlInputElement> {
        self.rows
            .get(usize::from(row))?
            .get(usize::from(col))?
            .input
            .as_ref()
    }

    /// Snapshot of the table as it currently stands in the page.
    pub(crate) fn to_grid(&self) -> Result<Grid> {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(BoardCell::to_cell).collect())
            .collect();
        Ok(Grid::from_rows(rows)?)
    }

    pub(crate) fn capture(&self) -> Result<ProgressGrid> {
        Ok(self.to_grid()?.capture())
    }

    /// Writes saved progress into the inputs, returning how many were filled.
    pub(crate) fn restore(&self, progress: &ProgressGrid) -> Result<usize> {
        let mut grid = self.to_grid()?;
        let restored = grid.restore(progress);
        for &coords in &restored {
            if let (Some(input), Some(value)) = (self.input_at(coords), grid.value_at(coords)) {
                input.set_value(value);
            }
        }
        Ok(restored.len())
    }

    /// Puts every answer into its input and fires an `input` event per cell, so the usual
    /// entry handling (styling included) sees it like a keystroke. Works on ragged tables too.
    pub(crate) fn reveal(&self) -> Result<usize> {
        let init = EventInit::new();
        init.set_bubbles(true);

        let inputs = self.inputs();
        for input in &inputs {
            input.set_value(&answer_of(input));
            let event = Event::new_with_event_init_dict("input", &init)?;
            input.dispatch_event(&event)?;
        }
        Ok(inputs.len())
    }
}

/// Restores progress from the embedded block, when the server sent one.
pub(crate) fn restore_from_page(root: &Element) {
    let Some(text) = data_block_text(DataBlock::ProgressGrid.element_id()) else {
        return;
    };
    let progress = match ProgressGrid::parse(&text) {
        Ok(progress) if progress.is_empty() => return,
        Ok(progress) => progress,
        Err(err) => {
            log::warn!("could not parse progress grid: {}", err);
            return;
        }
    };

    match Board::read(root).restore(&progress) {
        Ok(count) => log::debug!("restored {} cells", count),
        Err(err) => log::warn!("could not restore progress: {}", err),
    }
}

