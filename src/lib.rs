//! chartjs-model: typed configuration model for Chart.js.
//!
//! Every option lives in a [`NativeObject`](core::NativeObject), the dynamic
//! object serialized for Chart.js. Typed datasets and charts wrap it with
//! defaults, value-or-array properties, scriptable callbacks, gradients and
//! patterns resolved against a chart at draw time.

pub mod callbacks;
pub mod charts;
pub mod colors;
pub mod config;
pub mod core;
pub mod data;
pub mod defaults;
pub mod dom;
pub mod error;
pub mod items;
pub mod plugins;
pub mod telemetry;

pub use config::ChartConfiguration;
pub use error::{ChartError, ChartResult};
