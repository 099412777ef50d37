use std::sync::Arc;

use crate::callbacks::Scriptable;
use crate::core::{ChartType, key_enum};
use crate::data::dataset::{Dataset, IsDataset};
use crate::defaults::{DatasetDefaults, Defaults};
use crate::error::{ChartError, ChartResult};

key_enum! {
    enum Property {
        Weight => "weight",
        Offset => "offset",
        HoverOffset => "hoverOffset",
        BorderRadius => "borderRadius",
        BorderAlign => "borderAlign",
        Rotation => "rotation",
        Circumference => "circumference",
        Spacing => "spacing",
    }
}

key_enum! {
    pub enum BorderAlign {
        Center => "center",
        Inner => "inner",
    }
}

/// Dataset of pie, doughnut and polar area charts.
#[derive(Debug)]
pub struct PieDataset {
    dataset: Dataset,
}

impl Default for PieDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl PieDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(ChartType::Pie, Defaults::global())
    }

    #[must_use]
    pub fn doughnut() -> Self {
        Self::with_defaults(ChartType::Doughnut, Defaults::global())
    }

    #[must_use]
    pub fn with_defaults(chart_type: ChartType, defaults: Arc<DatasetDefaults>) -> Self {
        Self {
            dataset: Dataset::new(chart_type, defaults),
        }
    }

    /// Relative thickness of the ring when several datasets are drawn.
    pub fn set_weight(&mut self, weight: f64) -> ChartResult<()> {
        if weight < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "weight must not be negative, got {weight}"
            )));
        }
        self.dataset.native_mut().set_value(Property::Weight, weight)
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.dataset
            .native()
            .get_f64(Property::Weight, self.dataset.defaults().arc.weight)
    }

    pub fn set_offset(&mut self, offset: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::Offset, offset)
    }

    #[must_use]
    pub fn offset(&self) -> Vec<f64> {
        self.dataset
            .native()
            .get_f64_value_or_array(Property::Offset, self.dataset.defaults().arc.offset)
    }

    pub fn set_offset_callback(&mut self, callback: Option<Scriptable<f64>>) -> ChartResult<()> {
        let default = self.dataset.defaults().arc.offset;
        self.dataset
            .set_value_callback(Property::Offset, callback, default)
    }

    pub fn set_hover_offset(&mut self, offset: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::HoverOffset, offset)
    }

    #[must_use]
    pub fn hover_offset(&self) -> Vec<f64> {
        let default = self.dataset.defaults().arc.hover_offset;
        self.dataset
            .native()
            .get_f64_value_or_array(Property::HoverOffset, default)
    }

    pub fn set_border_radius(&mut self, radius: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::BorderRadius, radius)
    }

    #[must_use]
    pub fn border_radius(&self) -> Vec<f64> {
        let default = self.dataset.defaults().arc.border_radius;
        self.dataset
            .native()
            .get_f64_value_or_array(Property::BorderRadius, default)
    }

    pub fn set_border_align(&mut self, align: &[BorderAlign]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::BorderAlign, align)
    }

    #[must_use]
    pub fn border_align(&self) -> Vec<BorderAlign> {
        self.dataset
            .native()
            .get_enum_value_or_array(Property::BorderAlign, BorderAlign::Center)
    }

    /// Starting angle in degrees.
    pub fn set_rotation(&mut self, rotation: f64) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value(Property::Rotation, rotation)
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.dataset
            .native()
            .get_f64(Property::Rotation, self.dataset.defaults().arc.rotation)
    }

    /// Sweep in degrees.
    pub fn set_circumference(&mut self, circumference: f64) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value(Property::Circumference, circumference)
    }

    #[must_use]
    pub fn circumference(&self) -> f64 {
        self.dataset.native().get_f64(
            Property::Circumference,
            self.dataset.defaults().arc.circumference,
        )
    }

    pub fn set_spacing(&mut self, spacing: f64) -> ChartResult<()> {
        self.dataset.native_mut().set_value(Property::Spacing, spacing)
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.dataset.native().get_f64(Property::Spacing, 0.0)
    }
}

impl IsDataset for PieDataset {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_defaults_apply_until_set() {
        let mut dataset = PieDataset::doughnut();
        assert_eq!(dataset.circumference(), 360.0);
        assert_eq!(dataset.weight(), 1.0);
        dataset.set_circumference(180.0).expect("circumference");
        assert_eq!(dataset.circumference(), 180.0);
        assert!(dataset.set_weight(-1.0).is_err());
    }

    #[test]
    fn border_align_single_value_is_scalar() {
        let mut dataset = PieDataset::new();
        dataset
            .set_border_align(&[BorderAlign::Inner])
            .expect("align");
        assert_eq!(dataset.dataset().native().get_str("borderAlign", ""), "inner");
        assert_eq!(dataset.border_align(), vec![BorderAlign::Inner]);
    }
}
