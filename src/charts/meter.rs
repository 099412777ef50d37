use std::sync::Arc;

use tracing::debug;

use crate::colors::Color;
use crate::core::ChartType;
use crate::data::dataset::{CanvasObjectProperty, Dataset, DatasetRules, IsDataset};
use crate::defaults::{DatasetDefaults, Defaults};
use crate::error::{ChartError, ChartResult};

/// Lowest value and lowest maximum of a meter.
pub const MINIMUM_VALUE: f64 = 0.0;

pub const DEFAULT_VALUE_COLOR: Color = Color::rgb(140, 214, 16);
pub const DEFAULT_EMPTY_COLOR: Color = Color::rgb(234, 234, 234);

/// Single value dataset drawn as a filled arc out of a maximum.
///
/// The data is always `[value, max - value]` and is computed from the value,
/// so data cannot be set directly. Colors come from
/// [`set_color`](Self::set_color) and [`set_empty_color`](Self::set_empty_color)
/// only. A meter is never hidden.
#[derive(Debug)]
pub struct MeterDataset {
    dataset: Dataset,
    max: f64,
    value: f64,
    color: Color,
    empty_color: Color,
}

impl MeterDataset {
    pub fn new(max: f64) -> ChartResult<Self> {
        Self::with_defaults(ChartType::Meter, Defaults::global(), max)
    }

    pub fn with_defaults(
        chart_type: ChartType,
        defaults: Arc<DatasetDefaults>,
        max: f64,
    ) -> ChartResult<Self> {
        if !max.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "meter max must be finite, got {max}"
            )));
        }
        let rules = DatasetRules {
            data_locked: true,
            colors_locked: true,
            hideable: false,
            canvas_objects: false,
            ..DatasetRules::default()
        };
        let mut meter = Self {
            dataset: Dataset::with_rules(chart_type, defaults, rules),
            max: max.max(MINIMUM_VALUE),
            value: MINIMUM_VALUE,
            color: DEFAULT_VALUE_COLOR,
            empty_color: DEFAULT_EMPTY_COLOR,
        };
        meter.dataset.set_border_width(&[0.0, 0.0])?;
        meter.dataset.set_hover_border_width(&[0.0, 0.0])?;
        meter.apply_colors()?;
        Ok(meter)
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sets the value, clamped to `[0, max]`, and recomputes the data.
    pub fn set_value(&mut self, value: f64) -> ChartResult<()> {
        if value.is_nan() {
            return Err(ChartError::InvalidData("meter value is NaN".to_owned()));
        }
        self.value = value.clamp(MINIMUM_VALUE, self.max);
        let remaining = (self.max - self.value).max(MINIMUM_VALUE);
        self.dataset.store_numbers(&[self.value, remaining])?;
        debug!(
            dataset_id = self.dataset.id(),
            value = self.value,
            max = self.max,
            "meter value updated"
        );
        Ok(())
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_color(&mut self, color: Color) -> ChartResult<()> {
        self.color = color;
        self.apply_colors()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_empty_color(&mut self, color: Color) -> ChartResult<()> {
        self.empty_color = color;
        self.apply_colors()
    }

    #[must_use]
    pub fn empty_color(&self) -> Color {
        self.empty_color
    }

    fn apply_colors(&mut self) -> ChartResult<()> {
        let colors = [self.color, self.empty_color];
        self.dataset
            .store_colors(CanvasObjectProperty::BackgroundColor, &colors)?;
        self.dataset
            .store_colors(CanvasObjectProperty::HoverBackgroundColor, &colors)
    }
}

impl IsDataset for MeterDataset {
    fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn dataset_mut(&mut self) -> &mut Dataset {
        &mut self.dataset
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
