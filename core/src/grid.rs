use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular crossword board, row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let max = usize::from(Coord::MAX);
        if height > max || width > max {
            return Err(CrosswordError::GridTooLarge);
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(CrosswordError::RaggedGrid);
        }

        let flat: Vec<Cell> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|_| CrosswordError::RaggedGrid)?;
        Ok(Self { cells })
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn value_at(&self, coords: Coord2) -> Option<&str> {
        self.get(coords)
            .and_then(Cell::as_open)
            .map(|cell| cell.value.as_str())
    }

    /// Applies saved progress over the board. Entries outside the board, entries on blocked
    /// cells and empty entries are skipped. Returns the cells whose value was written.
    pub fn restore(&mut self, progress: &ProgressGrid) -> Vec<Coord2> {
        let mut restored = Vec::new();
        for ((row, col), cell) in self.cells.indexed_iter_mut() {
            let Some(open) = cell.as_open_mut() else {
                continue;
            };
            // both axes are bounded by `Coord::MAX` on construction
            let coords = (row as Coord, col as Coord);
            if let Some(value) = progress.restored_value(coords) {
                open.value = value;
                restored.push(coords);
            }
        }
        log::debug!("restored {} cells from saved progress", restored.len());
        restored
    }

    /// Snapshot of what the player has typed, blocked cells marked with [`BLOCKED_MARKER`].
    pub fn capture(&self) -> ProgressGrid {
        let rows = self
            .cells
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Blocked => String::from(BLOCKED_MARKER),
                        Cell::Open(open) => open.value.to_uppercase(),
                    })
                    .collect()
            })
            .collect();
        ProgressGrid::from_rows(rows)
    }
}
