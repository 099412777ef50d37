use std::sync::Arc;

use crate::callbacks::Scriptable;
use crate::core::{ChartType, Key, NativeValue, key_enum};
use crate::data::dataset::{Dataset, IsDataset};
use crate::data::point_style::{POINT_STYLE, PointStyle, PointStyleValue};
use crate::defaults::{DatasetDefaults, Defaults};
use crate::dom::{Canvas, Img};
use crate::error::ChartResult;

key_enum! {
    enum Property {
        BorderSkipped => "borderSkipped",
        BorderRadius => "borderRadius",
        HoverBorderRadius => "hoverBorderRadius",
        IndexAxis => "indexAxis",
        InflateAmount => "inflateAmount",
        BarPercentage => "barPercentage",
        CategoryPercentage => "categoryPercentage",
        Grouped => "grouped",
        Stack => "stack",
        XAxisId => "xAxisID",
        YAxisId => "yAxisID",
    }
}

key_enum! {
    /// Edge of the bar left without border.
    pub enum BorderSkipped {
        Start => "start",
        End => "end",
        Middle => "middle",
        Bottom => "bottom",
        Left => "left",
        Top => "top",
        Right => "right",
    }
}

key_enum! {
    pub enum IndexAxis {
        X => "x",
        Y => "y",
    }
}

const INFLATE_AUTO: &str = "auto";

/// Pixels added to the bar size when drawing, `Auto` to let Chart.js decide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InflateAmount {
    Auto,
    Value(f64),
}

/// Dataset of bar and horizontal bar charts.
#[derive(Debug)]
pub struct BarDataset {
    dataset: Dataset,
}

impl Default for BarDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl BarDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(Defaults::global())
    }

    #[must_use]
    pub fn with_defaults(defaults: Arc<DatasetDefaults>) -> Self {
        Self {
            dataset: Dataset::new(ChartType::Bar, defaults),
        }
    }

    /// `None` draws every border.
    pub fn set_border_skipped(&mut self, skipped: Option<BorderSkipped>) -> ChartResult<()> {
        let native = self.dataset.native_mut();
        match skipped {
            Some(skipped) => native.set_enum(Property::BorderSkipped, skipped),
            None => native.set_value(Property::BorderSkipped, false),
        }
    }

    #[must_use]
    pub fn border_skipped(&self) -> Option<BorderSkipped> {
        let native = self.dataset.native();
        match native.get(Property::BorderSkipped) {
            Some(NativeValue::Boolean(false)) => None,
            _ => Some(native.get_enum(Property::BorderSkipped, BorderSkipped::Start)),
        }
    }

    pub fn set_border_radius(&mut self, radius: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::BorderRadius, radius)
    }

    #[must_use]
    pub fn border_radius(&self) -> Vec<f64> {
        let default = self.dataset.defaults().bar.border_radius;
        self.dataset
            .native()
            .get_f64_value_or_array(Property::BorderRadius, default)
    }

    pub fn set_border_radius_callback(
        &mut self,
        callback: Option<Scriptable<f64>>,
    ) -> ChartResult<()> {
        let default = self.dataset.defaults().bar.border_radius;
        self.dataset
            .set_value_callback(Property::BorderRadius, callback, default)
    }

    pub fn set_hover_border_radius(&mut self, radius: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::HoverBorderRadius, radius)
    }

    #[must_use]
    pub fn hover_border_radius(&self) -> Vec<f64> {
        let default = self.dataset.defaults().bar.hover_border_radius;
        self.dataset
            .native()
            .get_f64_value_or_array(Property::HoverBorderRadius, default)
    }

    pub fn set_index_axis(&mut self, axis: IndexAxis) -> ChartResult<()> {
        self.dataset.native_mut().set_enum(Property::IndexAxis, axis)
    }

    #[must_use]
    pub fn index_axis(&self) -> IndexAxis {
        self.dataset
            .native()
            .get_enum(Property::IndexAxis, IndexAxis::X)
    }

    pub fn set_inflate_amount(&mut self, amount: InflateAmount) -> ChartResult<()> {
        let native = self.dataset.native_mut();
        match amount {
            InflateAmount::Auto => native.set_value(Property::InflateAmount, INFLATE_AUTO),
            InflateAmount::Value(value) => native.set_value(Property::InflateAmount, value),
        }
    }

    #[must_use]
    pub fn inflate_amount(&self) -> InflateAmount {
        match self.dataset.native().get(Property::InflateAmount) {
            Some(NativeValue::Number(value)) => InflateAmount::Value(*value),
            _ => InflateAmount::Auto,
        }
    }

    pub fn set_bar_percentage(&mut self, percentage: f64) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value(Property::BarPercentage, percentage)
    }

    #[must_use]
    pub fn bar_percentage(&self) -> f64 {
        self.dataset.native().get_f64(Property::BarPercentage, 0.9)
    }

    pub fn set_category_percentage(&mut self, percentage: f64) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value(Property::CategoryPercentage, percentage)
    }

    #[must_use]
    pub fn category_percentage(&self) -> f64 {
        self.dataset
            .native()
            .get_f64(Property::CategoryPercentage, 0.8)
    }

    pub fn set_grouped(&mut self, grouped: bool) -> ChartResult<()> {
        self.dataset.native_mut().set_value(Property::Grouped, grouped)
    }

    #[must_use]
    pub fn is_grouped(&self) -> bool {
        self.dataset.native().get_bool(Property::Grouped, true)
    }

    pub fn set_stack(&mut self, stack: &str) -> ChartResult<()> {
        self.dataset.native_mut().set_value(Property::Stack, stack)
    }

    #[must_use]
    pub fn stack(&self) -> &str {
        self.dataset
            .native()
            .get_str(Property::Stack, ChartType::Bar.value())
    }

    pub fn set_x_axis_id(&mut self, id: &str) -> ChartResult<()> {
        self.dataset.native_mut().set_value(Property::XAxisId, id)
    }

    #[must_use]
    pub fn x_axis_id(&self) -> &str {
        self.dataset.native().get_str(Property::XAxisId, "x")
    }

    pub fn set_y_axis_id(&mut self, id: &str) -> ChartResult<()> {
        self.dataset.native_mut().set_value(Property::YAxisId, id)
    }

    #[must_use]
    pub fn y_axis_id(&self) -> &str {
        self.dataset.native().get_str(Property::YAxisId, "y")
    }

    /// Legend point style.
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

    #[must_use]
    pub fn point_style_images(&self) -> Vec<Img> {
        POINT_STYLE.images(self.dataset.native())
    }

    #[must_use]
    pub fn point_style_canvas(&self) -> Vec<Canvas> {
        POINT_STYLE.canvases(self.dataset.native())
    }
}

impl IsDataset for BarDataset {
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
    fn border_skipped_false_means_all_borders() {
        let mut dataset = BarDataset::new();
        assert_eq!(dataset.border_skipped(), Some(BorderSkipped::Start));
        dataset.set_border_skipped(None).expect("skipped");
        assert_eq!(dataset.border_skipped(), None);
        dataset
            .set_border_skipped(Some(BorderSkipped::Top))
            .expect("skipped");
        assert_eq!(dataset.border_skipped(), Some(BorderSkipped::Top));
    }

    #[test]
    fn inflate_amount_is_auto_or_number() {
        let mut dataset = BarDataset::new();
        assert_eq!(dataset.inflate_amount(), InflateAmount::Auto);
        dataset
            .set_inflate_amount(InflateAmount::Value(0.33))
            .expect("inflate");
        assert_eq!(dataset.inflate_amount(), InflateAmount::Value(0.33));
    }
}
