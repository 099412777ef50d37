//! Chart-time state handed to scriptable options and the canvas object factory.

use serde::{Deserialize, Serialize};

use crate::core::ChartType;

/// Rectangle of the plotting area, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartArea {
    #[must_use]
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Finite coordinates with a positive width and height.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        [self.top, self.left, self.right, self.bottom]
            .iter()
            .all(|value| value.is_finite())
            && self.right > self.left
            && self.bottom > self.top
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Runtime view of one dataset, as reported by its controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetItem {
    pub inner_radius: Option<f64>,
    pub outer_radius: Option<f64>,
    pub hidden: bool,
}

impl DatasetItem {
    #[must_use]
    pub fn with_radius(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius: Some(inner_radius),
            outer_radius: Some(outer_radius),
            hidden: false,
        }
    }

    /// Inner and outer radius, when both are known and finite.
    #[must_use]
    pub fn radii(&self) -> Option<(f64, f64)> {
        match (self.inner_radius, self.outer_radius) {
            (Some(inner), Some(outer)) if inner.is_finite() && outer.is_finite() => {
                Some((inner, outer))
            }
            _ => None,
        }
    }
}

/// Snapshot of a chart instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartNode {
    pub id: String,
    pub chart_type: ChartType,
    pub initialized: bool,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub chart_area: Option<ChartArea>,
    #[serde(default)]
    pub dataset_items: Vec<DatasetItem>,
}

impl ChartNode {
    /// Creates a not yet initialized chart with an empty canvas.
    #[must_use]
    pub fn new(id: impl Into<String>, chart_type: ChartType) -> Self {
        Self {
            id: id.into(),
            chart_type,
            initialized: false,
            canvas_width: 0.0,
            canvas_height: 0.0,
            chart_area: None,
            dataset_items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    #[must_use]
    pub fn with_chart_area(mut self, chart_area: ChartArea) -> Self {
        self.chart_area = Some(chart_area);
        self
    }

    #[must_use]
    pub fn with_dataset_item(mut self, item: DatasetItem) -> Self {
        self.dataset_items.push(item);
        self
    }

    #[must_use]
    pub fn initialized(mut self) -> Self {
        self.initialized = true;
        self
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn dataset_item(&self, dataset_index: usize) -> Option<&DatasetItem> {
        self.dataset_items.get(dataset_index)
    }

    /// Chart area when it is consistent.
    #[must_use]
    pub fn consistent_chart_area(&self) -> Option<ChartArea> {
        self.chart_area.filter(ChartArea::is_consistent)
    }
}
