use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Files the editor looks for next to the executable's working
/// directory. Both are optional; compiled-in defaults take over when a
/// file is missing or malformed.
pub const CREDIT_TEXT_PATH: &str = "credit.txt";
pub const THEME_PATH: &str = "theme.json";

const DEFAULT_CREDIT_TEXT: &str = include_str!("../assets/credit.txt");
const DEFAULT_THEME_JSON: &str = include_str!("../assets/theme.json");

pub type Rgba = [u8; 4];

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Color theme, the moral equivalent of the original stylesheet. Cell
/// styles keep their stylesheet identifiers: `cell` is the dead style,
/// `cell_selected` the alive one.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub background: Rgba,
    pub grid_line: Rgba,
    pub cell: Rgba,
    pub cell_selected: Rgba,
    pub toolbar_background: Rgba,
    pub button: Rgba,
    pub button_pressed: Rgba,
    pub button_text: Rgba,
    pub status_text: Rgba,
    pub overlay_background: Rgba,
    pub overlay_text: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        // The embedded theme ships with the binary and always parses.
        serde_json::from_str(DEFAULT_THEME_JSON)
            .unwrap_or_else(|err| panic!("embedded theme.json is invalid: {err}"))
    }
}

/// Static text and style resources consumed by the editor shell. The
/// core treats the credit text as an opaque blob for the info overlay.
#[derive(Debug, Clone)]
pub struct Resources {
    pub credit_text: String,
    pub theme: Theme,
}

impl Resources {
    /// Loads overrides from the working directory, falling back to the
    /// embedded defaults with a warning. Never fails.
    pub fn load() -> Self {
        let credit_text = match read_text(CREDIT_TEXT_PATH) {
            Ok(Some(text)) => text,
            Ok(None) => DEFAULT_CREDIT_TEXT.to_string(),
            Err(err) => {
                log::warn!("{err}; using embedded credit text");
                DEFAULT_CREDIT_TEXT.to_string()
            }
        };
        let theme = match read_theme(THEME_PATH) {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("{err}; using embedded theme");
                Theme::default()
            }
        };
        Self { credit_text, theme }
    }
}

fn read_text(path: &str) -> Result<Option<String>, ResourceError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|source| ResourceError::Read {
            path: path.to_string(),
            source,
        })
}

fn read_theme(path: &str) -> Result<Option<Theme>, ResourceError> {
    let Some(raw) = read_text(path)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| ResourceError::Parse {
            path: path.to_string(),
            source,
        })
}
