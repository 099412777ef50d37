//! Datasets and chart data.

pub mod bar;
pub mod bubble;
pub mod chart_data;
pub mod containers;
pub mod dataset;
pub mod line;
pub mod pie;
pub mod point_style;
pub mod points;

pub use bar::{BarDataset, BorderSkipped, IndexAxis, InflateAmount};
pub use bubble::BubbleDataset;
pub use chart_data::{Data, Label};
pub use containers::CanvasObjectContainer;
pub use dataset::{
    CallbackCanvasObject, CanvasObjectKey, CanvasObjectProperty, Clip, DataType, Dataset,
    DatasetElement, IsDataset,
};
pub use line::{
    CapStyle, CubicInterpolationMode, Fill, FillBoundary, JoinStyle, LineDataset,
    PointColorProperty, SteppedLine,
};
pub use pie::{BorderAlign, PieDataset};
pub use point_style::{POINT_STYLE, PointStyle, PointStyleProperty, PointStyleType, PointStyleValue};
pub use points::{DataPoint, TimeSeriesItem};
