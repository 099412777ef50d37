use std::sync::Arc;

use ordered_float::OrderedFloat;
use tracing::trace;

use crate::charts::meter::{DEFAULT_VALUE_COLOR, MINIMUM_VALUE, MeterDataset};
use crate::colors::Color;
use crate::core::ChartType;
use crate::data::dataset::{Dataset, IsDataset};
use crate::defaults::{DatasetDefaults, Defaults};
use crate::error::{ChartError, ChartResult};

/// Named upper bound of a value range and the color used inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeThreshold {
    name: String,
    value: f64,
    color: Color,
}

impl GaugeThreshold {
    pub fn new(name: &str, value: f64, color: Color) -> ChartResult<Self> {
        if name.is_empty() {
            return Err(ChartError::InvalidData(
                "gauge threshold name is empty".to_owned(),
            ));
        }
        if value.is_nan() {
            return Err(ChartError::InvalidData(format!(
                "gauge threshold `{name}` value is NaN"
            )));
        }
        Ok(Self {
            name: name.to_owned(),
            value,
            color,
        })
    }

    #[must_use]
    pub fn normal() -> Self {
        Self::builtin("normal", 60.0, DEFAULT_VALUE_COLOR)
    }

    #[must_use]
    pub fn warning() -> Self {
        Self::builtin("warning", 90.0, Color::rgb(240, 173, 78))
    }

    #[must_use]
    pub fn critical() -> Self {
        Self::builtin("critical", f64::MAX, Color::rgb(217, 83, 79))
    }

    fn builtin(name: &str, value: f64, color: Color) -> Self {
        Self {
            name: name.to_owned(),
            value,
            color,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// `true` when `last_value <= value < self.value`.
    #[must_use]
    pub fn is_in_range(&self, value: f64, last_value: f64) -> bool {
        value >= last_value && value < self.value
    }
}

/// Meter whose value color follows thresholds.
#[derive(Debug)]
pub struct GaugeDataset {
    meter: MeterDataset,
    thresholds: Vec<GaugeThreshold>,
    percentage_threshold: bool,
}

impl GaugeDataset {
    pub fn new(max: f64) -> ChartResult<Self> {
        Self::with_defaults(Defaults::global(), max)
    }

    pub fn with_defaults(defaults: Arc<DatasetDefaults>, max: f64) -> ChartResult<Self> {
        let mut gauge = Self {
            meter: MeterDataset::with_defaults(ChartType::Gauge, defaults, max)?,
            thresholds: vec![
                GaugeThreshold::normal(),
                GaugeThreshold::warning(),
                GaugeThreshold::critical(),
            ],
            percentage_threshold: false,
        };
        gauge.apply_threshold_color()?;
        Ok(gauge)
    }

    #[must_use]
    pub fn meter(&self) -> &MeterDataset {
        &self.meter
    }

    /// Replaces the thresholds, kept sorted by value.
    pub fn set_thresholds(&mut self, thresholds: Vec<GaugeThreshold>) -> ChartResult<()> {
        self.thresholds = thresholds;
        self.thresholds
            .sort_by_key(|threshold| OrderedFloat(threshold.value));
        self.apply_threshold_color()
    }

    #[must_use]
    pub fn thresholds(&self) -> &[GaugeThreshold] {
        &self.thresholds
    }

    /// Compares thresholds against the value as a percentage of the max.
    pub fn set_percentage_threshold(&mut self, percentage: bool) -> ChartResult<()> {
        self.percentage_threshold = percentage;
        self.apply_threshold_color()
    }

    #[must_use]
    pub fn is_percentage_threshold(&self) -> bool {
        self.percentage_threshold
    }

    pub fn set_value(&mut self, value: f64) -> ChartResult<()> {
        self.meter.set_value(value)?;
        self.apply_threshold_color()
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.meter.value()
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.meter.max()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.meter.color()
    }

    pub fn set_empty_color(&mut self, color: Color) -> ChartResult<()> {
        self.meter.set_empty_color(color)
    }

    /// First threshold whose range holds the value, the last one otherwise.
    #[must_use]
    pub fn current_threshold(&self) -> Option<&GaugeThreshold> {
        let value = self.compared_value();
        let mut last_value = MINIMUM_VALUE;
        for threshold in &self.thresholds {
            if threshold.is_in_range(value, last_value) {
                return Some(threshold);
            }
            last_value = threshold.value;
        }
        self.thresholds.last()
    }

    fn compared_value(&self) -> f64 {
        let max = self.meter.max();
        if self.percentage_threshold && max > 0.0 {
            self.meter.value() / max * 100.0
        } else {
            self.meter.value()
        }
    }

    fn apply_threshold_color(&mut self) -> ChartResult<()> {
        let (name, color) = match self.current_threshold() {
            Some(threshold) => (threshold.name.clone(), threshold.color),
            None => (String::new(), DEFAULT_VALUE_COLOR),
        };
        trace!(threshold = %name, color = %color, "gauge color selected");
        self.meter.set_color(color)
    }
}

impl IsDataset for GaugeDataset {
    fn dataset(&self) -> &Dataset {
        self.meter.dataset()
    }

    fn dataset_mut(&mut self) -> &mut Dataset {
        self.meter.dataset_mut()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
