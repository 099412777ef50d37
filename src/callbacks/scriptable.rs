//! Typed scriptable options and their conversion to native values.

use std::sync::Arc;

use tracing::{trace, warn};

use crate::callbacks::context::ScriptableContext;
use crate::colors::{CanvasGradient, CanvasPattern, Color, Gradient, Pattern};
use crate::core::NativeValue;

/// User callback resolving an option for a context. `None` means "use the default".
pub type Scriptable<T> = Arc<dyn Fn(&ScriptableContext<'_>) -> Option<T> + Send + Sync>;

/// Wraps a closure as a [`Scriptable`].
pub fn scriptable<T, F>(function: F) -> Scriptable<T>
where
    F: Fn(&ScriptableContext<'_>) -> Option<T> + Send + Sync + 'static,
{
    Arc::new(function)
}

/// Anything a color callback may return.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptableColor {
    Color(Color),
    Css(String),
    Gradient(Gradient),
    Pattern(Pattern),
    CanvasGradient(CanvasGradient),
    CanvasPattern(CanvasPattern),
}

pub type ColorCallback = Scriptable<ScriptableColor>;

impl From<Color> for ScriptableColor {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<&str> for ScriptableColor {
    fn from(value: &str) -> Self {
        Self::Css(value.to_owned())
    }
}

impl From<String> for ScriptableColor {
    fn from(value: String) -> Self {
        Self::Css(value)
    }
}

impl From<Gradient> for ScriptableColor {
    fn from(value: Gradient) -> Self {
        Self::Gradient(value)
    }
}

impl From<Pattern> for ScriptableColor {
    fn from(value: Pattern) -> Self {
        Self::Pattern(value)
    }
}

impl From<CanvasGradient> for ScriptableColor {
    fn from(value: CanvasGradient) -> Self {
        Self::CanvasGradient(value)
    }
}

impl From<CanvasPattern> for ScriptableColor {
    fn from(value: CanvasPattern) -> Self {
        Self::CanvasPattern(value)
    }
}

/// Invokes `callback`, falling back to `default` when it yields nothing.
pub fn option_value<T>(context: &ScriptableContext<'_>, callback: &Scriptable<T>, default: T) -> T {
    callback(context).unwrap_or(default)
}

/// Invokes a color callback and converts its result with [`color_value`].
pub fn option_value_as_color(
    context: &ScriptableContext<'_>,
    callback: &ColorCallback,
    default: &str,
    has_pattern: bool,
) -> NativeValue {
    color_value(context, callback(context), default, has_pattern)
}

/// Converts a color callback result to the value Chart.js reads.
///
/// Patterns are honored only by properties accepting them and gradients only
/// on initialized charts; anything else becomes `default`.
pub fn color_value(
    context: &ScriptableContext<'_>,
    result: Option<ScriptableColor>,
    default: &str,
    has_pattern: bool,
) -> NativeValue {
    let chart = context.chart();
    match result {
        Some(ScriptableColor::Color(color)) => color.into(),
        Some(ScriptableColor::Css(value)) => value.into(),
        Some(ScriptableColor::Pattern(pattern)) if has_pattern => {
            context.factory().create_pattern(chart, &pattern).into()
        }
        Some(ScriptableColor::CanvasPattern(pattern)) if has_pattern => pattern.into(),
        Some(ScriptableColor::Gradient(gradient)) if chart.is_initialized() => {
            match context.factory().create_gradient(
                chart,
                &gradient,
                context.dataset_index(),
                context.data_index(),
            ) {
                Ok(paint) => paint.into(),
                Err(err) => {
                    warn!(chart = %chart.id, gradient = gradient.id(), error = %err, "gradient callback result dropped");
                    default.into()
                }
            }
        }
        Some(ScriptableColor::CanvasGradient(gradient)) => gradient.into(),
        Some(other) => {
            trace!(chart = %chart.id, result = ?other, "color callback result not applicable");
            default.into()
        }
        None => default.into(),
    }
}
