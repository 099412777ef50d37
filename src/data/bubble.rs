use std::sync::Arc;

use crate::callbacks::Scriptable;
use crate::core::{ChartType, key_enum};
use crate::data::dataset::{Dataset, DatasetRules, IsDataset};
use crate::data::point_style::{POINT_STYLE, PointStyle, PointStyleValue};
use crate::defaults::{DatasetDefaults, Defaults};
use crate::dom::{Canvas, Img};
use crate::error::ChartResult;

key_enum! {
    enum Property {
        Radius => "radius",
        HoverRadius => "hoverRadius",
        HitRadius => "hitRadius",
        Rotation => "rotation",
    }
}

/// Dataset of bubble charts. Only data points with a radius are accepted.
#[derive(Debug)]
pub struct BubbleDataset {
    dataset: Dataset,
}

impl Default for BubbleDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(Defaults::global())
    }

    #[must_use]
    pub fn with_defaults(defaults: Arc<DatasetDefaults>) -> Self {
        let rules = DatasetRules {
            points_only: true,
            points_need_radius: true,
            ..DatasetRules::default()
        };
        Self {
            dataset: Dataset::with_rules(ChartType::Bubble, defaults, rules),
        }
    }

    pub fn set_radius(&mut self, radius: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::Radius, radius)
    }

    #[must_use]
    pub fn radius(&self) -> Vec<f64> {
        let default = self.dataset.defaults().point.radius;
        self.dataset
            .native()
            .get_f64_value_or_array(Property::Radius, default)
    }

    pub fn set_radius_callback(&mut self, callback: Option<Scriptable<f64>>) -> ChartResult<()> {
        let default = self.dataset.defaults().point.radius;
        self.dataset
            .set_value_callback(Property::Radius, callback, default)
    }

    pub fn set_hover_radius(&mut self, radius: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::HoverRadius, radius)
    }

    #[must_use]
    pub fn hover_radius(&self) -> Vec<f64> {
        let default = self.dataset.defaults().point.hover_radius;
        self.dataset
            .native()
            .get_f64_value_or_array(Property::HoverRadius, default)
    }

    pub fn set_hit_radius(&mut self, radius: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::HitRadius, radius)
    }

    #[must_use]
    pub fn hit_radius(&self) -> Vec<f64> {
        let default = self.dataset.defaults().point.hit_radius;
        self.dataset
            .native()
            .get_f64_value_or_array(Property::HitRadius, default)
    }

    pub fn set_rotation(&mut self, rotation: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::Rotation, rotation)
    }

    #[must_use]
    pub fn rotation(&self) -> Vec<f64> {
        let default = self.dataset.defaults().point.rotation;
        self.dataset
            .native()
            .get_f64_value_or_array(Property::Rotation, default)
    }

    pub fn set_rotation_callback(&mut self, callback: Option<Scriptable<f64>>) -> ChartResult<()> {
        let default = self.dataset.defaults().point.rotation;
        self.dataset
            .set_value_callback(Property::Rotation, callback, default)
    }

    pub fn set_point_style(&mut self, styles: &[PointStyle]) -> ChartResult<()> {
        POINT_STYLE.set_styles(self.dataset.native_mut(), styles)
    }

    pub fn set_point_style_images(&mut self, images: &[Img]) -> ChartResult<()> {
        POINT_STYLE.set_images(self.dataset.native_mut(), images)
    }

    pub fn set_point_style_canvas(&mut self, canvases: &[Canvas]) -> ChartResult<()> {
        POINT_STYLE.set_canvases(self.dataset.native_mut(), canvases)
    }

    pub fn set_point_style_callback(
        &mut self,
        callback: Option<Scriptable<PointStyleValue>>,
    ) -> ChartResult<()> {
        let default = self.dataset.defaults().point.point_style;
        POINT_STYLE.set_callback(self.dataset.native_mut(), callback, default)
    }

    #[must_use]
    pub fn point_style(&self) -> Vec<PointStyle> {
        POINT_STYLE.styles(
            self.dataset.native(),
            self.dataset.defaults().point.point_style,
        )
    }
}

impl IsDataset for BubbleDataset {
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
    use crate::data::points::DataPoint;
    use crate::error::ChartError;

    #[test]
    fn numeric_data_is_rejected() {
        let mut dataset = BubbleDataset::new();
        let err = dataset.dataset_mut().set_data(&[1.0, 2.0]).expect_err("points only");
        assert!(matches!(err, ChartError::UnsupportedOperation(_)));
        assert!(dataset.dataset().data().is_err());

        dataset
            .dataset_mut()
            .set_data_points(&[DataPoint::new(1.0, 2.0).with_radius(5.0)])
            .expect("points");
        assert_eq!(dataset.dataset().data_points()[0].r, Some(5.0));
    }

    #[test]
    fn points_without_radius_are_rejected() {
        let mut dataset = BubbleDataset::new();
        let err = dataset
            .dataset_mut()
            .set_data_points(&[DataPoint::new(1.0, 2.0).with_radius(3.0), DataPoint::new(2.0, 4.0)])
            .expect_err("missing radius");
        assert!(matches!(err, ChartError::InvalidData(_)));
        assert!(dataset.dataset().data_points().is_empty());
    }
}
