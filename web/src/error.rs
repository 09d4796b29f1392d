use crate::config;
use crossword_core::CrosswordError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub(crate) enum PageError {
    #[error(transparent)]
    Crossword(#[from] CrosswordError),
    #[error("request failed: {0}")]
    Net(#[from] gloo::net::Error),
    #[error("save button has no save url")]
    MissingSaveUrl,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

impl PageError {
    /// Alert text for a save that never got an answer from the server.
    pub(crate) fn save_message(&self) -> &'static str {
        use CrosswordError::*;
        match self {
            Self::Crossword(MissingDataBlock(_) | InvalidDataBlock(_)) => {
                config::MISSING_DATA_MESSAGE
            }
            Self::Crossword(_) => config::UNREADABLE_GRID_MESSAGE,
            Self::MissingSaveUrl => config::MISSING_SAVE_URL_MESSAGE,
            Self::Net(_) | Self::Js(_) => config::NETWORK_ERROR_MESSAGE,
        }
    }
}

pub(crate) type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_blocks_map_to_the_data_alert() {
        let err = PageError::from(CrosswordError::MissingDataBlock("solution-grid-data"));
        assert_eq!(err.save_message(), config::MISSING_DATA_MESSAGE);

        let err = PageError::from(CrosswordError::RaggedGrid);
        assert_eq!(err.save_message(), config::UNREADABLE_GRID_MESSAGE);

        assert_eq!(
            PageError::MissingSaveUrl.save_message(),
            config::MISSING_SAVE_URL_MESSAGE
        );
    }
}
