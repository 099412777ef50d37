use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::NativeObject;
use crate::error::ChartResult;

const X: &str = "x";
const Y: &str = "y";
const R: &str = "r";

/// Data item with coordinates and, for bubbles, a radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, r: None }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.r = Some(radius);
        self
    }

    pub fn to_native(&self) -> ChartResult<NativeObject> {
        let mut native = NativeObject::new();
        native.set_value(X, self.x)?;
        native.set_value(Y, self.y)?;
        native.set_or_remove(R, self.r)?;
        Ok(native)
    }

    /// Reads a point back, `None` when a coordinate is missing.
    #[must_use]
    pub fn from_native(native: &NativeObject) -> Option<Self> {
        let x = native.get(X)?.as_f64()?;
        let y = native.get(Y)?.as_f64()?;
        let r = native.get(R).and_then(|value| value.as_f64());
        Some(Self { x, y, r })
    }
}

/// Value at a point in time, stored as a point whose x is epoch millis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesItem {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl TimeSeriesItem {
    #[must_use]
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }

    pub fn to_native(&self) -> ChartResult<NativeObject> {
        let mut native = NativeObject::new();
        native.set_value(X, self.time.timestamp_millis() as f64)?;
        native.set_value(Y, self.value)?;
        Ok(native)
    }

    #[must_use]
    pub fn from_native(native: &NativeObject) -> Option<Self> {
        let millis = native.get(X)?.as_f64()?;
        let value = native.get(Y)?.as_f64()?;
        let time = Utc.timestamp_millis_opt(millis as i64).single()?;
        Some(Self { time, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_without_radius_has_no_r_property() {
        let native = DataPoint::new(1.0, 2.0).to_native().expect("point");
        assert!(!native.has(R));
        assert_eq!(DataPoint::from_native(&native), Some(DataPoint::new(1.0, 2.0)));
    }

    #[test]
    fn time_item_is_stored_as_epoch_millis() {
        let time = Utc.timestamp_millis_opt(1_700_000_000_000).single().expect("time");
        let native = TimeSeriesItem::new(time, 5.0).to_native().expect("item");
        assert_eq!(native.get_f64(X, 0.0), 1_700_000_000_000.0);
    }
}
