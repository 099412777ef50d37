//! Colors, gradients, patterns and their canvas paints.

pub mod builder;
pub mod canvas;
pub mod color;
pub mod gradient;
pub mod html;
pub mod pattern;

pub use builder::ColorBuilder;
pub use canvas::{CanvasGradient, CanvasObjectFactory, CanvasPattern, ColorStop};
pub use color::{Color, DEFAULT_ALPHA};
pub use gradient::{
    Gradient, GradientBuilder, GradientColor, GradientOrientation, GradientScope, GradientType,
};
pub use html::{color_name, named_color};
pub use pattern::{DEFAULT_TILE_SIZE, Pattern, PatternBuilder, PatternSource, Repetition};
