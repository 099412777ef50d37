use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tracing::{debug, trace};

use crate::colors::gradient::{Gradient, GradientOrientation, GradientScope, GradientType};
use crate::colors::pattern::{Pattern, PatternSource, Repetition};
use crate::error::{ChartError, ChartResult};
use crate::items::ChartNode;

/// Color stop of a resolved gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

/// Gradient paint with absolute canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CanvasGradient {
    Linear {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stops: Vec<ColorStop>,
    },
    Radial {
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
        stops: Vec<ColorStop>,
    },
}

impl CanvasGradient {
    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => stops,
        }
    }

    fn with_stops(mut self, gradient: &Gradient) -> Self {
        let resolved = gradient
            .colors()
            .iter()
            .map(|stop| ColorStop {
                offset: stop.offset(),
                color: stop.color().to_rgba(),
            })
            .collect();
        match &mut self {
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => *stops = resolved,
        }
        self
    }
}

/// Pattern paint bound to a chart canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasPattern {
    pub pattern_id: String,
    pub source: PatternSource,
    pub repetition: Repetition,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Area {
    top: f64,
    left: f64,
    right: f64,
    bottom: f64,
}

impl Area {
    fn center(self) -> (f64, f64) {
        (
            (self.right - self.left) / 2.0 + self.left,
            (self.bottom - self.top) / 2.0 + self.top,
        )
    }
}

type ChartCache<T> = HashMap<String, HashMap<String, T>>;

/// Creates canvas paints from gradient and pattern definitions, caching
/// them per chart id.
#[derive(Debug, Default)]
pub struct CanvasObjectFactory {
    gradients: Mutex<ChartCache<CanvasGradient>>,
    patterns: Mutex<ChartCache<CanvasPattern>>,
}

impl CanvasObjectFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `gradient` for the element `index` of dataset `dataset_index`.
    ///
    /// Linear gradients are cached by gradient id; radial ones also by dataset
    /// and element, since their radii come from the element.
    pub fn create_gradient(
        &self,
        chart: &ChartNode,
        gradient: &Gradient,
        dataset_index: usize,
        index: usize,
    ) -> ChartResult<CanvasGradient> {
        let cache_key = match gradient.gradient_type() {
            GradientType::Linear => gradient.id().to_owned(),
            GradientType::Radial => format!("{}@{dataset_index}:{index}", gradient.id()),
        };
        let mut gradients = self
            .gradients
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let chart_gradients = gradients.entry(chart.id.clone()).or_default();
        if let Some(cached) = chart_gradients.get(&cache_key) {
            trace!(chart = %chart.id, gradient = %cache_key, "canvas gradient cache hit");
            return Ok(cached.clone());
        }
        if !chart.is_initialized() {
            return Err(ChartError::ChartNotInitialized(chart.id.clone()));
        }
        let result = match gradient.gradient_type() {
            GradientType::Linear => linear_gradient(chart, gradient)?,
            GradientType::Radial => radial_gradient(chart, gradient, dataset_index)?,
        }
        .with_stops(gradient);
        chart_gradients.insert(cache_key, result.clone());
        Ok(result)
    }

    pub fn create_pattern(&self, chart: &ChartNode, pattern: &Pattern) -> CanvasPattern {
        let mut patterns = self.patterns.lock().unwrap_or_else(PoisonError::into_inner);
        patterns
            .entry(chart.id.clone())
            .or_default()
            .entry(pattern.id().to_owned())
            .or_insert_with(|| CanvasPattern {
                pattern_id: pattern.id().to_owned(),
                source: pattern.source().clone(),
                repetition: pattern.repetition(),
                width: pattern.width(),
                height: pattern.height(),
            })
            .clone()
    }

    /// Forgets the gradients of a chart, for instance after a resize.
    pub fn reset_gradients(&self, chart_id: &str) {
        let removed = self
            .gradients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(chart_id)
            .map_or(0, |cache| cache.len());
        debug!(chart = chart_id, removed, "reset canvas gradients");
    }

    /// Forgets every paint of a chart, for instance when it is destroyed.
    pub fn clear(&self, chart_id: &str) {
        self.reset_gradients(chart_id);
        self.patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(chart_id);
    }

    #[must_use]
    pub fn cached_gradients(&self, chart_id: &str) -> usize {
        self.gradients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(chart_id)
            .map_or(0, HashMap::len)
    }

    #[must_use]
    pub fn cached_patterns(&self, chart_id: &str) -> usize {
        self.patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(chart_id)
            .map_or(0, HashMap::len)
    }
}

fn canvas_area(chart: &ChartNode) -> Area {
    Area {
        top: 0.0,
        left: 0.0,
        right: chart.canvas_width,
        bottom: chart.canvas_height,
    }
}

/// Canvas for canvas scope or an unusable chart area, chart area otherwise.
fn gradient_area(chart: &ChartNode, gradient: &Gradient) -> (Area, bool) {
    match chart.consistent_chart_area() {
        Some(area) if gradient.scope() == GradientScope::Chart => (
            Area {
                top: area.top,
                left: area.left,
                right: area.right,
                bottom: area.bottom,
            },
            false,
        ),
        _ => (canvas_area(chart), true),
    }
}

fn linear_gradient(chart: &ChartNode, gradient: &Gradient) -> ChartResult<CanvasGradient> {
    let (area, _) = gradient_area(chart, gradient);
    let Area {
        top,
        left,
        right,
        bottom,
    } = area;
    let (x0, y0, x1, y1) = match gradient.orientation() {
        GradientOrientation::TopDown => (left, top, left, bottom),
        GradientOrientation::BottomUp => (left, bottom, left, top),
        GradientOrientation::LeftRight => (left, top, right, top),
        GradientOrientation::RightLeft => (right, top, left, top),
        GradientOrientation::TopRight => (left, top, right, bottom),
        GradientOrientation::BottomLeft => (right, bottom, left, top),
        GradientOrientation::TopLeft => (right, top, left, bottom),
        GradientOrientation::BottomRight => (left, bottom, right, top),
        other => {
            return Err(ChartError::InvalidData(format!(
                "orientation `{other}` is not valid for a linear gradient"
            )));
        }
    };
    Ok(CanvasGradient::Linear {
        x0,
        y0,
        x1,
        y1,
        stops: Vec::new(),
    })
}

fn radial_gradient(
    chart: &ChartNode,
    gradient: &Gradient,
    dataset_index: usize,
) -> ChartResult<CanvasGradient> {
    let (area, on_canvas) = gradient_area(chart, gradient);
    let (center_x, center_y) = area.center();
    let width = area.right - area.left;
    let height = area.bottom - area.top;
    let (inner, outer) = chart
        .dataset_item(dataset_index)
        .and_then(|item| item.radii())
        .unwrap_or_else(|| {
            let outer = if on_canvas {
                width.max(height) / 2.0
            } else {
                width.min(height) / 2.0
            };
            (0.0, outer)
        });
    let (r0, r1) = match gradient.orientation() {
        GradientOrientation::InOut => (inner, outer),
        GradientOrientation::OutIn => (outer, inner),
        other => {
            return Err(ChartError::InvalidData(format!(
                "orientation `{other}` is not valid for a radial gradient"
            )));
        }
    };
    Ok(CanvasGradient::Radial {
        x0: center_x,
        y0: center_y,
        r0,
        x1: center_x,
        y1: center_y,
        r1,
        stops: Vec::new(),
    })
}
