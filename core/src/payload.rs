use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::*;

/// One square of the server's solution block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionCell {
    pub letter: String,
    #[serde(default)]
    pub across_number: Option<ClueNumber>,
    #[serde(default)]
    pub down_number: Option<ClueNumber>,
    /// Printed clue number(s), e.g. `"1"` or `"1/4"` where two words start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

pub type SolutionGrid = Vec<Vec<SolutionCell>>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    #[serde(default)]
    pub word: String,
    pub number: ClueNumber,
    pub clue: String,
}

/// JSON documents the server embeds in non-rendered page elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DataBlock {
    SolutionGrid,
    AcrossClues,
    DownClues,
    Category,
    ProgressGrid,
}

impl DataBlock {
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::SolutionGrid => "solution-grid-data",
            Self::AcrossClues => "across-clues-data",
            Self::DownClues => "down-clues-data",
            Self::Category => "category-data",
            Self::ProgressGrid => "progress-grid-data",
        }
    }

    fn parse<T: DeserializeOwned>(self, lookup: &impl Fn(&str) -> Option<String>) -> Result<T> {
        let id = self.element_id();
        let text = lookup(id).ok_or(CrosswordError::MissingDataBlock(id))?;
        serde_json::from_str(&text).map_err(|err| {
            log::warn!("data block {} is not valid: {}", id, err);
            CrosswordError::InvalidDataBlock(id)
        })
    }
}

/// Everything the save action needs from the page besides the player's progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleData {
    pub category: String,
    pub solution_grid: SolutionGrid,
    pub across_clues: Vec<ClueEntry>,
    pub down_clues: Vec<ClueEntry>,
}

impl PuzzleData {
    /// Reads the embedded blocks through `lookup`, which maps an element id to its text.
    /// Fails on the first missing or unreadable block.
    pub fn from_blocks(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            solution_grid: DataBlock::SolutionGrid.parse(&lookup)?,
            across_clues: DataBlock::AcrossClues.parse(&lookup)?,
            down_clues: DataBlock::DownClues.parse(&lookup)?,
            category: DataBlock::Category.parse(&lookup)?,
        })
    }
}

/// Body of the save request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    pub category: String,
    pub solution_grid: SolutionGrid,
    pub progress_grid: ProgressGrid,
    pub across_clues: Vec<ClueEntry>,
    pub down_clues: Vec<ClueEntry>,
}

impl SaveRequest {
    pub fn new(data: PuzzleData, progress_grid: ProgressGrid) -> Self {
        let PuzzleData {
            category,
            solution_grid,
            across_clues,
            down_clues,
        } = data;
        Self {
            category,
            solution_grid,
            progress_grid,
            across_clues,
            down_clues,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl SaveResponse {
    pub const SAVED: &'static str = "Crossword Successfully Saved!";

    /// Text shown to the player once the server has answered.
    pub fn message(&self) -> String {
        if self.success {
            String::from(Self::SAVED)
        } else {
            let reason = self.error.as_deref().unwrap_or("Unknown error");
            format!("Failed to save crossword: {}", reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const SOLUTION: &str = r#"[
        [{"letter": "C", "across_number": 1, "down_number": 1, "label": "1"},
         {"letter": "A", "across_number": 1, "down_number": null}],
        [{"letter": "-", "across_number": null, "down_number": null},
         {"letter": "-", "across_number": null, "down_number": null}]
    ]"#;

    fn blocks(id: &str) -> Option<String> {
        let text = match id {
            "solution-grid-data" => SOLUTION,
            "across-clues-data" => r#"[{"word": "CA", "number": 1, "clue": "State"}]"#,
            "down-clues-data" => "[]",
            "category-data" => r#""Places""#,
            _ => return None,
        };
        Some(String::from(text))
    }

    #[test]
    fn reads_all_blocks() {
        let data = PuzzleData::from_blocks(blocks).unwrap();
        assert_eq!(data.category, "Places");
        assert_eq!(data.across_clues[0].number, 1);
        assert_eq!(data.solution_grid[0][0].label.as_deref(), Some("1"));
        assert!(data.down_clues.is_empty());
    }

    #[test]
    fn missing_solution_block_fails_before_anything_else() {
        let err = PuzzleData::from_blocks(|id| {
            if id == "solution-grid-data" {
                None
            } else {
                blocks(id)
            }
        })
        .unwrap_err();
        assert_eq!(err, CrosswordError::MissingDataBlock("solution-grid-data"));
    }

    #[test]
    fn unreadable_block_is_reported_by_id() {
        let err = PuzzleData::from_blocks(|id| {
            if id == "category-data" {
                Some(String::from("{"))
            } else {
                blocks(id)
            }
        })
        .unwrap_err();
        assert_eq!(err, CrosswordError::InvalidDataBlock("category-data"));
    }

    #[test]
    fn save_request_has_server_field_names() {
        let data = PuzzleData::from_blocks(blocks).unwrap();
        let progress = ProgressGrid::from_rows(vec![vec![String::from("C"), String::new()]]);
        let json = serde_json::to_value(SaveRequest::new(data, progress)).unwrap();

        assert_eq!(json["category"], "Places");
        assert_eq!(json["progress_grid"][0][0], "C");
        assert_eq!(json["solution_grid"][1][0]["letter"], "-");
        assert_eq!(json["across_clues"][0]["clue"], "State");
        assert!(json["down_clues"].as_array().unwrap().is_empty());
    }

    #[test]
    fn save_response_messages() {
        let ok: SaveResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(ok.message(), SaveResponse::SAVED);

        let failed: SaveResponse =
            serde_json::from_str(r#"{"success": false, "error": "Not logged in"}"#).unwrap();
        assert_eq!(failed.message(), "Failed to save crossword: Not logged in");

        let bare: SaveResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.message(), "Failed to save crossword: Unknown error");
    }
}
