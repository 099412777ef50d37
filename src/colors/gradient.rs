use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::colors::color::Color;
use crate::core::{Key, key_enum};
use crate::error::{ChartError, ChartResult};

key_enum! {
    /// Shape of the gradient.
    pub enum GradientType {
        Linear => "linear",
        Radial => "radial",
    }
}

key_enum! {
    /// Direction of the gradient. The first eight apply to linear gradients,
    /// the last two to radial ones.
    pub enum GradientOrientation {
        TopDown => "topDown",
        BottomUp => "bottomUp",
        LeftRight => "leftRight",
        RightLeft => "rightLeft",
        TopRight => "topRight",
        BottomLeft => "bottomLeft",
        TopLeft => "topLeft",
        BottomRight => "bottomRight",
        InOut => "inOut",
        OutIn => "outIn",
    }
}

key_enum! {
    /// Area the gradient coordinates are computed on.
    pub enum GradientScope {
        Chart => "chart",
        Canvas => "canvas",
    }
}

impl GradientOrientation {
    #[must_use]
    pub fn gradient_type(self) -> GradientType {
        match self {
            Self::InOut | Self::OutIn => GradientType::Radial,
            _ => GradientType::Linear,
        }
    }

    #[must_use]
    pub fn default_by_type(gradient_type: GradientType) -> Self {
        match gradient_type {
            GradientType::Linear => Self::TopDown,
            GradientType::Radial => Self::InOut,
        }
    }
}

pub const DEFAULT_OFFSET_START: f64 = 0.0;
pub const DEFAULT_OFFSET_STOP: f64 = 1.0;

/// Color stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientColor {
    offset: f64,
    color: Color,
}

impl GradientColor {
    /// Offsets must be in `[0, 1]`.
    pub fn new(offset: f64, color: impl Into<Color>) -> ChartResult<Self> {
        check_offset(offset)?;
        Ok(Self {
            offset,
            color: color.into(),
        })
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

fn check_offset(offset: f64) -> ChartResult<()> {
    if offset.is_finite() && (DEFAULT_OFFSET_START..=DEFAULT_OFFSET_STOP).contains(&offset) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "gradient offset {offset} is not in [0, 1]"
        )))
    }
}

/// Immutable gradient definition, resolved to a canvas gradient at chart time.
#[derive(Debug, Clone)]
pub struct Gradient {
    id: String,
    gradient_type: GradientType,
    orientation: GradientOrientation,
    scope: GradientScope,
    colors: SmallVec<[GradientColor; 4]>,
}

impl Gradient {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn gradient_type(&self) -> GradientType {
        self.gradient_type
    }

    #[must_use]
    pub fn orientation(&self) -> GradientOrientation {
        self.orientation
    }

    #[must_use]
    pub fn scope(&self) -> GradientScope {
        self.scope
    }

    #[must_use]
    pub fn colors(&self) -> &[GradientColor] {
        &self.colors
    }

    /// Color at `offset`, interpolated between the surrounding stops.
    ///
    /// RGB channels are blended in linear light, alpha linearly. An offset
    /// before the first stop is an error; past the last stop the last color
    /// is returned.
    pub fn interpolated_color(&self, offset: f64) -> ChartResult<Color> {
        check_offset(offset)?;
        let mut start: Option<GradientColor> = None;
        let mut end: Option<GradientColor> = None;
        for stop in &self.colors {
            if OrderedFloat(stop.offset) == OrderedFloat(offset) {
                return Ok(stop.color);
            }
            if stop.offset < offset {
                start = Some(*stop);
            } else if end.is_none() {
                end = Some(*stop);
            }
        }
        let Some(start) = start else {
            return Err(ChartError::InvalidData(format!(
                "no gradient color before offset {offset}"
            )));
        };
        let Some(end) = end else {
            return Ok(start.color);
        };

        let ratio = (offset - start.offset) / (end.offset - start.offset);
        let blend = |from: u8, to: u8| {
            let from = srgb_to_linear(f64::from(from) / 255.0);
            let to = srgb_to_linear(f64::from(to) / 255.0);
            (linear_to_srgb(from + ratio * (to - from)) * 255.0).round() as u8
        };
        let alpha = start.color.alpha + ratio * (end.color.alpha - start.color.alpha);
        Ok(Color::rgb(
            blend(start.color.red, end.color.red),
            blend(start.color.green, end.color.green),
            blend(start.color.blue, end.color.blue),
        )
        .alpha(alpha))
    }
}

impl PartialEq for Gradient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Gradient {}

impl Hash for Gradient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.003_130_8 {
        linear * 12.92
    } else {
        linear.powf(1.0 / 2.4) * 1.055 - 0.055
    }
}

fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.040_45 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Builder of [`Gradient`].
#[derive(Debug, Clone)]
pub struct GradientBuilder {
    gradient_type: GradientType,
    orientation: GradientOrientation,
    scope: GradientScope,
    colors: SmallVec<[GradientColor; 4]>,
}

impl Default for GradientBuilder {
    fn default() -> Self {
        Self::create(GradientType::Linear)
    }
}

impl GradientBuilder {
    #[must_use]
    pub fn create(gradient_type: GradientType) -> Self {
        Self {
            gradient_type,
            orientation: GradientOrientation::default_by_type(gradient_type),
            scope: GradientScope::Chart,
            colors: SmallVec::new(),
        }
    }

    /// An orientation belonging to the other gradient type falls back to the
    /// default orientation of this builder's type.
    #[must_use]
    pub fn orientation(mut self, orientation: GradientOrientation) -> Self {
        self.orientation = if orientation.gradient_type() == self.gradient_type {
            orientation
        } else {
            GradientOrientation::default_by_type(self.gradient_type)
        };
        self
    }

    #[must_use]
    pub fn scope(mut self, scope: GradientScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn add_color_stop(mut self, offset: f64, color: impl Into<Color>) -> ChartResult<Self> {
        self.colors.push(GradientColor::new(offset, color)?);
        Ok(self)
    }

    /// Replaces every stop with `start` at 0 and `stop` at 1.
    #[must_use]
    pub fn add_colors_start_stop(mut self, start: impl Into<Color>, stop: impl Into<Color>) -> Self {
        self.colors.clear();
        self.colors.push(GradientColor {
            offset: DEFAULT_OFFSET_START,
            color: start.into(),
        });
        self.colors.push(GradientColor {
            offset: DEFAULT_OFFSET_STOP,
            color: stop.into(),
        });
        self
    }

    pub fn build(mut self) -> ChartResult<Gradient> {
        if self.colors.is_empty() {
            return Err(ChartError::InvalidData(
                "gradient must have at least one color stop".to_owned(),
            ));
        }
        self.colors.sort_by_key(|stop| OrderedFloat(stop.offset));
        let stops: Vec<String> = self
            .colors
            .iter()
            .map(|stop| format!("{}:{}", stop.offset, stop.color.to_rgba()))
            .collect();
        let id = format!(
            "{}-{}-{}-[{}]",
            self.gradient_type.value(),
            self.orientation.value(),
            self.scope.value(),
            stops.join(",")
        );
        Ok(Gradient {
            id,
            gradient_type: self.gradient_type,
            orientation: self.orientation,
            scope: self.scope,
            colors: self.colors,
        })
    }
}
