use std::sync::Arc;

use crate::callbacks::{ColorCallback, Scriptable};
use crate::colors::{Color, Gradient, Pattern};
use crate::core::{ChartType, EnumValue, NativeValue, key_enum};
use crate::data::dataset::{CanvasObjectKey, Dataset, DatasetElement, IsDataset};
use crate::data::point_style::{POINT_STYLE, PointStyle, PointStyleValue};
use crate::defaults::{DatasetDefaults, Defaults};
use crate::dom::{Canvas, Img};
use crate::error::{ChartError, ChartResult};

key_enum! {
    enum Property {
        BorderDash => "borderDash",
        BorderDashOffset => "borderDashOffset",
        BorderCapStyle => "borderCapStyle",
        BorderJoinStyle => "borderJoinStyle",
        CubicInterpolationMode => "cubicInterpolationMode",
        Tension => "tension",
        Fill => "fill",
        ShowLine => "showLine",
        SpanGaps => "spanGaps",
        Stepped => "stepped",
        PointBorderWidth => "pointBorderWidth",
        PointHoverBorderWidth => "pointHoverBorderWidth",
        PointRadius => "pointRadius",
        PointHitRadius => "pointHitRadius",
        PointHoverRadius => "pointHoverRadius",
        PointRotation => "pointRotation",
        XAxisId => "xAxisID",
        YAxisId => "yAxisID",
    }
}

key_enum! {
    /// Point colors, which accept gradients and callbacks like the line ones.
    pub enum PointColorProperty {
        PointBackgroundColor => "pointBackgroundColor",
        PointBorderColor => "pointBorderColor",
        PointHoverBackgroundColor => "pointHoverBackgroundColor",
        PointHoverBorderColor => "pointHoverBorderColor",
    }
}

impl CanvasObjectKey for PointColorProperty {
    fn has_pattern(&self) -> bool {
        matches!(
            self,
            Self::PointBackgroundColor | Self::PointHoverBackgroundColor
        )
    }

    fn default_color<'a>(
        &self,
        defaults: &'a DatasetDefaults,
        _element: DatasetElement,
    ) -> &'a str {
        match self {
            Self::PointBackgroundColor | Self::PointHoverBackgroundColor => {
                &defaults.background_color
            }
            Self::PointBorderColor | Self::PointHoverBorderColor => &defaults.border_color,
        }
    }
}

key_enum! {
    pub enum CapStyle {
        Butt => "butt",
        Round => "round",
        Square => "square",
    }
}

key_enum! {
    pub enum JoinStyle {
        Bevel => "bevel",
        Round => "round",
        Miter => "miter",
    }
}

key_enum! {
    pub enum CubicInterpolationMode {
        Default => "default",
        Monotone => "monotone",
    }
}

key_enum! {
    pub enum SteppedLine {
        Before => "before",
        After => "after",
        Middle => "middle",
    }
}

key_enum! {
    pub enum FillBoundary {
        Origin => "origin",
        Start => "start",
        End => "end",
        Stack => "stack",
        Shape => "shape",
    }
}

/// Area filled under a line: nothing, a boundary, another dataset by index
/// or a dataset relative to this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Disabled,
    Boundary(FillBoundary),
    Absolute(u32),
    Relative(i32),
}

impl From<Fill> for NativeValue {
    fn from(fill: Fill) -> Self {
        match fill {
            Fill::Disabled => false.into(),
            Fill::Boundary(boundary) => boundary.into(),
            Fill::Absolute(index) => index.into(),
            Fill::Relative(offset) => format!("{offset:+}").into(),
        }
    }
}

impl Fill {
    fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::Boolean(false) => Some(Self::Disabled),
            NativeValue::Boolean(true) => Some(Self::Boundary(FillBoundary::Origin)),
            NativeValue::Number(index) if *index >= 0.0 => Some(Self::Absolute(*index as u32)),
            NativeValue::String(raw) if raw.starts_with(['+', '-']) => {
                raw.parse().ok().map(Self::Relative)
            }
            NativeValue::String(raw) => {
                FillBoundary::from_value(raw).map(Self::Boundary)
            }
            _ => None,
        }
    }
}

/// Dataset of line charts, also used by scatter and radar charts.
#[derive(Debug)]
pub struct LineDataset {
    dataset: Dataset,
}

impl Default for LineDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(ChartType::Line, Defaults::global())
    }

    #[must_use]
    pub fn with_defaults(chart_type: ChartType, defaults: Arc<DatasetDefaults>) -> Self {
        Self {
            dataset: Dataset::new(chart_type, defaults),
        }
    }

    fn defaults(&self) -> &DatasetDefaults {
        self.dataset.defaults()
    }

    pub fn set_border_dash(&mut self, dash: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_array(Property::BorderDash, dash.to_vec())
    }

    #[must_use]
    pub fn border_dash(&self) -> Vec<f64> {
        self.dataset.native().get_f64_array(Property::BorderDash)
    }

    pub fn set_border_dash_callback(
        &mut self,
        callback: Option<Scriptable<Vec<f64>>>,
    ) -> ChartResult<()> {
        self.dataset
            .set_value_callback(Property::BorderDash, callback, Vec::new())
    }

    pub fn set_border_dash_offset(&mut self, offset: f64) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value(Property::BorderDashOffset, offset)
    }

    #[must_use]
    pub fn border_dash_offset(&self) -> f64 {
        self.dataset
            .native()
            .get_f64(Property::BorderDashOffset, self.defaults().line.border_dash_offset)
    }

    pub fn set_border_cap_style(&mut self, style: CapStyle) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_enum(Property::BorderCapStyle, style)
    }

    #[must_use]
    pub fn border_cap_style(&self) -> CapStyle {
        self.dataset
            .native()
            .get_enum(Property::BorderCapStyle, CapStyle::Butt)
    }

    pub fn set_border_cap_style_callback(
        &mut self,
        callback: Option<Scriptable<CapStyle>>,
    ) -> ChartResult<()> {
        self.dataset
            .set_value_callback(Property::BorderCapStyle, callback, CapStyle::Butt)
    }

    pub fn set_border_join_style(&mut self, style: JoinStyle) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_enum(Property::BorderJoinStyle, style)
    }

    #[must_use]
    pub fn border_join_style(&self) -> JoinStyle {
        self.dataset
            .native()
            .get_enum(Property::BorderJoinStyle, JoinStyle::Miter)
    }

    pub fn set_cubic_interpolation_mode(&mut self, mode: CubicInterpolationMode) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_enum(Property::CubicInterpolationMode, mode)
    }

    #[must_use]
    pub fn cubic_interpolation_mode(&self) -> CubicInterpolationMode {
        self.dataset
            .native()
            .get_enum(Property::CubicInterpolationMode, CubicInterpolationMode::Default)
    }

    /// Bezier curve tension, 0 draws straight lines.
    pub fn set_tension(&mut self, tension: f64) -> ChartResult<()> {
        if !(0.0..=1.0).contains(&tension) {
            return Err(ChartError::InvalidData(format!(
                "tension must be in [0, 1], got {tension}"
            )));
        }
        self.dataset.native_mut().set_value(Property::Tension, tension)
    }

    #[must_use]
    pub fn tension(&self) -> f64 {
        self.dataset
            .native()
            .get_f64(Property::Tension, self.defaults().line.tension)
    }

    pub fn set_fill(&mut self, fill: Fill) -> ChartResult<()> {
        self.dataset.native_mut().set_value(Property::Fill, fill)
    }

    #[must_use]
    pub fn fill(&self) -> Fill {
        let default = if self.defaults().line.fill {
            Fill::Boundary(FillBoundary::Origin)
        } else {
            Fill::Disabled
        };
        self.dataset
            .native()
            .get(Property::Fill)
            .and_then(Fill::from_native)
            .unwrap_or(default)
    }

    pub fn set_show_line(&mut self, show: bool) -> ChartResult<()> {
        self.dataset.native_mut().set_value(Property::ShowLine, show)
    }

    #[must_use]
    pub fn is_show_line(&self) -> bool {
        self.dataset
            .native()
            .get_bool(Property::ShowLine, self.defaults().line.show_line)
    }

    pub fn set_span_gaps(&mut self, span: bool) -> ChartResult<()> {
        self.dataset.native_mut().set_value(Property::SpanGaps, span)
    }

    #[must_use]
    pub fn is_span_gaps(&self) -> bool {
        self.dataset
            .native()
            .get_bool(Property::SpanGaps, self.defaults().line.span_gaps)
    }

    /// `None` draws a plain line.
    pub fn set_stepped(&mut self, stepped: Option<SteppedLine>) -> ChartResult<()> {
        let native = self.dataset.native_mut();
        match stepped {
            Some(stepped) => native.set_enum(Property::Stepped, stepped),
            None => native.set_value(Property::Stepped, false),
        }
    }

    #[must_use]
    pub fn stepped(&self) -> Option<SteppedLine> {
        match self.dataset.native().get(Property::Stepped) {
            Some(NativeValue::Boolean(true)) => Some(SteppedLine::Before),
            Some(NativeValue::String(raw)) => SteppedLine::from_value(raw),
            _ => None,
        }
    }

    pub fn set_point_colors(
        &mut self,
        property: PointColorProperty,
        colors: &[Color],
    ) -> ChartResult<()> {
        self.dataset.set_colors(property, colors)
    }

    #[must_use]
    pub fn point_colors(&self, property: PointColorProperty) -> Vec<String> {
        self.dataset.colors(property)
    }

    pub fn set_point_gradients(
        &mut self,
        property: PointColorProperty,
        gradients: Vec<Gradient>,
    ) -> ChartResult<()> {
        self.dataset.set_gradients(property, gradients)
    }

    pub fn set_point_patterns(
        &mut self,
        property: PointColorProperty,
        patterns: Vec<Pattern>,
    ) -> ChartResult<()> {
        self.dataset.set_patterns(property, patterns)
    }

    pub fn set_point_color_callback(
        &mut self,
        property: PointColorProperty,
        callback: Option<ColorCallback>,
    ) -> ChartResult<()> {
        self.dataset.set_color_callback(property, callback)
    }

    pub fn set_point_border_width(&mut self, widths: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::PointBorderWidth, widths)
    }

    #[must_use]
    pub fn point_border_width(&self) -> Vec<f64> {
        self.dataset
            .native()
            .get_f64_value_or_array(Property::PointBorderWidth, self.defaults().point.border_width)
    }

    pub fn set_point_hover_border_width(&mut self, widths: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::PointHoverBorderWidth, widths)
    }

    #[must_use]
    pub fn point_hover_border_width(&self) -> Vec<f64> {
        let default = self.defaults().point.hover_border_width;
        self.dataset
            .native()
            .get_f64_value_or_array(Property::PointHoverBorderWidth, default)
    }

    pub fn set_point_radius(&mut self, radius: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::PointRadius, radius)
    }

    #[must_use]
    pub fn point_radius(&self) -> Vec<f64> {
        self.dataset
            .native()
            .get_f64_value_or_array(Property::PointRadius, self.defaults().point.radius)
    }

    pub fn set_point_radius_callback(
        &mut self,
        callback: Option<Scriptable<f64>>,
    ) -> ChartResult<()> {
        let default = self.defaults().point.radius;
        self.dataset
            .set_value_callback(Property::PointRadius, callback, default)
    }

    pub fn set_point_hit_radius(&mut self, radius: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::PointHitRadius, radius)
    }

    #[must_use]
    pub fn point_hit_radius(&self) -> Vec<f64> {
        self.dataset
            .native()
            .get_f64_value_or_array(Property::PointHitRadius, self.defaults().point.hit_radius)
    }

    pub fn set_point_hover_radius(&mut self, radius: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::PointHoverRadius, radius)
    }

    #[must_use]
    pub fn point_hover_radius(&self) -> Vec<f64> {
        self.dataset
            .native()
            .get_f64_value_or_array(Property::PointHoverRadius, self.defaults().point.hover_radius)
    }

    pub fn set_point_rotation(&mut self, rotation: &[f64]) -> ChartResult<()> {
        self.dataset
            .native_mut()
            .set_value_or_array(Property::PointRotation, rotation)
    }

    #[must_use]
    pub fn point_rotation(&self) -> Vec<f64> {
        self.dataset
            .native()
            .get_f64_value_or_array(Property::PointRotation, self.defaults().point.rotation)
    }

    pub fn set_point_rotation_callback(
        &mut self,
        callback: Option<Scriptable<f64>>,
    ) -> ChartResult<()> {
        let default = self.defaults().point.rotation;
        self.dataset
            .set_value_callback(Property::PointRotation, callback, default)
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
        let default = self.defaults().point.point_style;
        POINT_STYLE.set_callback(self.dataset.native_mut(), callback, default)
    }

    #[must_use]
    pub fn point_style(&self) -> Vec<PointStyle> {
        POINT_STYLE.styles(self.dataset.native(), self.defaults().point.point_style)
    }

    #[must_use]
    pub fn point_style_images(&self) -> Vec<Img> {
        POINT_STYLE.images(self.dataset.native())
    }

    #[must_use]
    pub fn point_style_canvas(&self) -> Vec<Canvas> {
        POINT_STYLE.canvases(self.dataset.native())
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
}

impl IsDataset for LineDataset {
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
    fn relative_fill_is_stored_with_sign() {
        let mut dataset = LineDataset::new();
        dataset.set_fill(Fill::Relative(-1)).expect("fill");
        assert_eq!(dataset.dataset().native().get_str("fill", ""), "-1");
        assert_eq!(dataset.fill(), Fill::Relative(-1));

        dataset.set_fill(Fill::Relative(2)).expect("fill");
        assert_eq!(dataset.dataset().native().get_str("fill", ""), "+2");
    }

    #[test]
    fn stepped_true_reads_as_before() {
        let mut dataset = LineDataset::new();
        assert_eq!(dataset.stepped(), None);
        dataset
            .dataset_mut()
            .native_mut()
            .set_value("stepped", true)
            .expect("stepped");
        assert_eq!(dataset.stepped(), Some(SteppedLine::Before));
    }

    #[test]
    fn tension_out_of_range_is_rejected() {
        let mut dataset = LineDataset::new();
        assert!(dataset.set_tension(1.5).is_err());
        assert_eq!(dataset.tension(), 0.0);
    }

    #[test]
    fn point_border_color_rejects_patterns() {
        assert!(!PointColorProperty::PointBorderColor.has_pattern());
        assert!(PointColorProperty::PointBackgroundColor.has_pattern());
    }
}
