//! Host element handles that can be attached to chart options.
//!
//! The model never draws: elements only carry what Chart.js needs to
//! identify and size them.

use serde::{Deserialize, Serialize};

use crate::colors::{CanvasGradient, CanvasPattern};

/// Image element, used for point styles and patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Img {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

impl Img {
    #[must_use]
    pub fn new(src: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            src: src.into(),
            width,
            height,
        }
    }
}

/// Canvas element, used for point styles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Canvas {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    #[must_use]
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// Pattern already materialized by the host canvas, for instance a tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasPatternItem {
    pub id: String,
}

impl CanvasPatternItem {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Host object stored inside a native object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "element", rename_all = "camelCase")]
pub enum Element {
    Image(Img),
    Canvas(Canvas),
    Gradient(CanvasGradient),
    Pattern(CanvasPattern),
}

impl Element {
    #[must_use]
    pub fn as_image(&self) -> Option<&Img> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_canvas(&self) -> Option<&Canvas> {
        match self {
            Self::Canvas(canvas) => Some(canvas),
            _ => None,
        }
    }
}
