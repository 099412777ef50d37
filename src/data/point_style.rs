//! Point style union: a named shape, an image or a canvas.
//!
//! Chart.js reads all three from the same property, so the kind in use is
//! tracked by a sibling internal tag.

use crate::callbacks::{CallbackProxy, Scriptable, option_value};
use crate::core::{EnumValue, Key, NativeObject, NativeValue, key_enum};
use crate::dom::{Canvas, Element, Img};
use crate::error::ChartResult;

key_enum! {
    pub enum PointStyle {
        Circle => "circle",
        Cross => "cross",
        CrossRot => "crossRot",
        Dash => "dash",
        Line => "line",
        Rect => "rect",
        RectRounded => "rectRounded",
        RectRot => "rectRot",
        Star => "star",
        Triangle => "triangle",
    }
}

key_enum! {
    /// Kind of value stored in a point style property.
    pub enum PointStyleType {
        String => "string",
        Image => "image",
        Canvas => "canvas",
    }
}

/// One point style, whatever its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PointStyleValue {
    Shape(PointStyle),
    Image(Img),
    Canvas(Canvas),
}

impl From<PointStyle> for PointStyleValue {
    fn from(value: PointStyle) -> Self {
        Self::Shape(value)
    }
}

impl From<Img> for PointStyleValue {
    fn from(value: Img) -> Self {
        Self::Image(value)
    }
}

impl From<Canvas> for PointStyleValue {
    fn from(value: Canvas) -> Self {
        Self::Canvas(value)
    }
}

impl From<PointStyleValue> for NativeValue {
    fn from(value: PointStyleValue) -> Self {
        match value {
            PointStyleValue::Shape(style) => style.value().into(),
            PointStyleValue::Image(image) => image.into(),
            PointStyleValue::Canvas(canvas) => canvas.into(),
        }
    }
}

/// Point style property and the internal key tagging its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointStyleProperty {
    key: &'static str,
    type_key: &'static str,
}

pub const POINT_STYLE: PointStyleProperty =
    PointStyleProperty::new("pointStyle", "_charbaPointStyle");

impl PointStyleProperty {
    #[must_use]
    pub const fn new(key: &'static str, type_key: &'static str) -> Self {
        Self { key, type_key }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Kind in use, `None` when the property is unset or a callback.
    #[must_use]
    pub fn style_type(&self, native: &NativeObject) -> Option<PointStyleType> {
        native
            .get(self.type_key)
            .and_then(NativeValue::as_str)
            .and_then(PointStyleType::from_value)
    }

    pub fn set_styles(&self, native: &mut NativeObject, styles: &[PointStyle]) -> ChartResult<()> {
        let values: Vec<&str> = styles.iter().map(Key::value).collect();
        self.store(native, &values, PointStyleType::String)
    }

    pub fn set_images(&self, native: &mut NativeObject, images: &[Img]) -> ChartResult<()> {
        self.store(native, images, PointStyleType::Image)
    }

    pub fn set_canvases(&self, native: &mut NativeObject, canvases: &[Canvas]) -> ChartResult<()> {
        self.store(native, canvases, PointStyleType::Canvas)
    }

    /// Installs a callback, or removes the property when `callback` is `None`.
    pub fn set_callback(
        &self,
        native: &mut NativeObject,
        callback: Option<Scriptable<PointStyleValue>>,
        default: PointStyle,
    ) -> ChartResult<()> {
        native.remove(self.type_key);
        match callback {
            Some(callback) => native.set_value(
                self.key,
                CallbackProxy::new(move |context| {
                    option_value(context, &callback, PointStyleValue::Shape(default)).into()
                }),
            ),
            None => {
                native.remove(self.key);
                Ok(())
            }
        }
    }

    /// Shapes, `[default]` when unset, empty when another kind is stored.
    #[must_use]
    pub fn styles(&self, native: &NativeObject, default: PointStyle) -> Vec<PointStyle> {
        match self.style_type(native) {
            Some(PointStyleType::String) => native.get_enum_value_or_array(self.key, default),
            None if !native.has(self.key) => vec![default],
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn images(&self, native: &NativeObject) -> Vec<Img> {
        if self.style_type(native) != Some(PointStyleType::Image) {
            return Vec::new();
        }
        native
            .value_or_array(self.key)
            .into_iter()
            .filter_map(NativeValue::as_element)
            .filter_map(Element::as_image)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn canvases(&self, native: &NativeObject) -> Vec<Canvas> {
        if self.style_type(native) != Some(PointStyleType::Canvas) {
            return Vec::new();
        }
        native
            .value_or_array(self.key)
            .into_iter()
            .filter_map(NativeValue::as_element)
            .filter_map(Element::as_canvas)
            .cloned()
            .collect()
    }

    fn store<T: Into<NativeValue> + Clone>(
        &self,
        native: &mut NativeObject,
        values: &[T],
        style_type: PointStyleType,
    ) -> ChartResult<()> {
        native.set_value_or_array(self.key, values)?;
        if values.is_empty() {
            native.remove(self.type_key);
        } else {
            native.set_enum(self.type_key, style_type)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_replace_shapes() {
        let mut native = NativeObject::new();
        POINT_STYLE
            .set_styles(&mut native, &[PointStyle::Star, PointStyle::Rect])
            .expect("styles");
        assert_eq!(
            POINT_STYLE.styles(&native, PointStyle::Circle),
            vec![PointStyle::Star, PointStyle::Rect]
        );

        POINT_STYLE
            .set_images(&mut native, &[Img::new("dot.png", 8, 8)])
            .expect("images");
        assert!(POINT_STYLE.styles(&native, PointStyle::Circle).is_empty());
        assert_eq!(POINT_STYLE.images(&native).len(), 1);
        assert_eq!(POINT_STYLE.style_type(&native), Some(PointStyleType::Image));
    }

    #[test]
    fn unset_property_yields_default_shape() {
        let native = NativeObject::new();
        assert_eq!(POINT_STYLE.styles(&native, PointStyle::Triangle), vec![PointStyle::Triangle]);
        assert!(POINT_STYLE.canvases(&native).is_empty());
    }
}
