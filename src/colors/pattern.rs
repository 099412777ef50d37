use serde::Serialize;

use crate::core::{Key, key_enum};
use crate::dom::{CanvasPatternItem, Img};

key_enum! {
    /// How a pattern image repeats.
    pub enum Repetition {
        Repeat => "repeat",
        RepeatX => "repeat-x",
        RepeatY => "repeat-y",
        NoRepeat => "no-repeat",
    }
}

/// Side of the square tile used when a canvas pattern carries no size.
pub const DEFAULT_TILE_SIZE: u32 = 50;

/// What a pattern is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum PatternSource {
    Image(Img),
    Canvas(CanvasPatternItem),
}

/// Immutable pattern definition, resolved to a canvas pattern at chart time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    id: String,
    source: PatternSource,
    repetition: Repetition,
    width: u32,
    height: u32,
}

impl Pattern {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn source(&self) -> &PatternSource {
        &self.source
    }

    #[must_use]
    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Builder of [`Pattern`].
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    source: PatternSource,
    repetition: Repetition,
    width: u32,
    height: u32,
}

impl PatternBuilder {
    /// Pattern from an image, repeated and sized as the image.
    #[must_use]
    pub fn from_image(image: Img) -> Self {
        let (width, height) = (image.width, image.height);
        Self {
            source: PatternSource::Image(image),
            repetition: Repetition::Repeat,
            width,
            height,
        }
    }

    /// Pattern from an already created canvas pattern, as a default size tile.
    #[must_use]
    pub fn from_canvas_pattern(item: CanvasPatternItem) -> Self {
        Self {
            source: PatternSource::Canvas(item),
            repetition: Repetition::Repeat,
            width: DEFAULT_TILE_SIZE,
            height: DEFAULT_TILE_SIZE,
        }
    }

    /// Only image patterns honor a repetition; canvas patterns always repeat.
    #[must_use]
    pub fn repetition(mut self, repetition: Repetition) -> Self {
        if matches!(self.source, PatternSource::Image(_)) {
            self.repetition = repetition;
        }
        self
    }

    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn build(self) -> Pattern {
        let source_id = match &self.source {
            PatternSource::Image(image) => format!("img-{}", image.src),
            PatternSource::Canvas(item) => format!("canvasPattern-{}", item.id),
        };
        let id = format!(
            "{source_id}-{}-{}-{}",
            self.repetition.value(),
            self.width,
            self.height
        );
        Pattern {
            id,
            source: self.source,
            repetition: self.repetition,
            width: self.width,
            height: self.height,
        }
    }
}
