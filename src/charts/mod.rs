//! Controllers built on top of the doughnut chart.

pub mod gauge;
pub mod meter;

pub use gauge::{GaugeDataset, GaugeThreshold};
pub use meter::{DEFAULT_EMPTY_COLOR, DEFAULT_VALUE_COLOR, MINIMUM_VALUE, MeterDataset};
