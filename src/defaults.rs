//! Built-in option values used when a dataset property is not set.
//!
//! Values mirror the Chart.js element defaults and can be overridden from
//! JSON, either bare or wrapped in a versioned contract.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::point_style::PointStyle;
use crate::error::{ChartError, ChartResult};

pub const DATASET_DEFAULTS_JSON_SCHEMA_V1: u32 = 1;

/// Chart.js fallback color for backgrounds and borders.
pub const DEFAULT_COLOR: &str = "rgba(0,0,0,0.1)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointDefaults {
    pub radius: f64,
    pub hit_radius: f64,
    pub hover_radius: f64,
    pub border_width: f64,
    pub hover_border_width: f64,
    pub rotation: f64,
    pub point_style: PointStyle,
}

impl Default for PointDefaults {
    fn default() -> Self {
        Self {
            radius: 3.0,
            hit_radius: 1.0,
            hover_radius: 4.0,
            border_width: 1.0,
            hover_border_width: 1.0,
            rotation: 0.0,
            point_style: PointStyle::Circle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineDefaults {
    pub border_width: f64,
    pub tension: f64,
    pub border_dash_offset: f64,
    pub fill: bool,
    pub show_line: bool,
    pub span_gaps: bool,
}

impl Default for LineDefaults {
    fn default() -> Self {
        Self {
            border_width: 3.0,
            tension: 0.0,
            border_dash_offset: 0.0,
            fill: false,
            show_line: true,
            span_gaps: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcDefaults {
    pub border_width: f64,
    pub border_color: String,
    pub border_radius: f64,
    pub offset: f64,
    pub hover_offset: f64,
    pub rotation: f64,
    pub circumference: f64,
    pub weight: f64,
}

impl Default for ArcDefaults {
    fn default() -> Self {
        Self {
            border_width: 2.0,
            border_color: "#fff".to_owned(),
            border_radius: 0.0,
            offset: 0.0,
            hover_offset: 0.0,
            rotation: 0.0,
            circumference: 360.0,
            weight: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarDefaults {
    pub border_width: f64,
    pub border_radius: f64,
    pub hover_border_radius: f64,
}

impl Default for BarDefaults {
    fn default() -> Self {
        Self {
            border_width: 0.0,
            border_radius: 0.0,
            hover_border_radius: 0.0,
        }
    }
}

/// Defaults shared by every dataset, grouped by chart element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetDefaults {
    pub background_color: String,
    pub border_color: String,
    pub border_width: f64,
    pub point: PointDefaults,
    pub line: LineDefaults,
    pub arc: ArcDefaults,
    pub bar: BarDefaults,
}

impl Default for DatasetDefaults {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_COLOR.to_owned(),
            border_color: DEFAULT_COLOR.to_owned(),
            border_width: 1.0,
            point: PointDefaults::default(),
            line: LineDefaults::default(),
            arc: ArcDefaults::default(),
            bar: BarDefaults::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDefaultsJsonContractV1 {
    pub schema_version: u32,
    pub defaults: DatasetDefaults,
}

impl DatasetDefaults {
    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    #[must_use]
    pub fn with_point(mut self, point: PointDefaults) -> Self {
        self.point = point;
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LineDefaults) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcDefaults) -> Self {
        self.arc = arc;
        self
    }

    #[must_use]
    pub fn with_bar(mut self, bar: BarDefaults) -> Self {
        self.bar = bar;
        self
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DatasetDefaultsJsonContractV1 {
            schema_version: DATASET_DEFAULTS_JSON_SCHEMA_V1,
            defaults: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize defaults contract v1: {e}"))
        })
    }

    /// Parses bare defaults or a versioned contract. Missing fields keep
    /// their built-in values.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse defaults json payload: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse defaults json payload: {e}"))
            });
        }
        let payload: DatasetDefaultsJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse defaults json payload: {e}"))
        })?;
        if payload.schema_version != DATASET_DEFAULTS_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported defaults schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.defaults)
    }
}

/// Access to the process-wide built-in defaults.
pub struct Defaults;

impl Defaults {
    #[must_use]
    pub fn global() -> Arc<DatasetDefaults> {
        static GLOBAL: OnceLock<Arc<DatasetDefaults>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(DatasetDefaults::default())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_builtin_values() {
        let defaults = DatasetDefaults::from_json_str(r#"{"border_width": 4, "line": {"tension": 0.4}}"#)
            .expect("bare defaults");
        assert_eq!(defaults.border_width, 4.0);
        assert_eq!(defaults.line.tension, 0.4);
        assert_eq!(defaults.line.border_width, 3.0);
        assert_eq!(defaults.background_color, DEFAULT_COLOR);
    }

    #[test]
    fn contract_version_is_checked() {
        let json = r#"{"schema_version": 2, "defaults": {}}"#;
        assert!(DatasetDefaults::from_json_str(json).is_err());
    }
}
