//! Plugin ids and per-plugin option objects.

use crate::core::NativeObject;
use crate::error::{ChartError, ChartResult};

/// Ids of the plugins bundled with Chart.js. Their options live in the chart
/// options, never in a dataset.
pub const DEFAULT_PLUGIN_IDS: &[&str] = &[
    "colors",
    "decimation",
    "filler",
    "legend",
    "subtitle",
    "title",
    "tooltip",
];

const MAX_PLUGIN_ID_LENGTH: usize = 214;

#[must_use]
pub fn is_default_plugin(id: &str) -> bool {
    DEFAULT_PLUGIN_IDS.contains(&id)
}

/// Validates a plugin id with the npm package name rules Chart.js follows:
/// lowercase, url safe, at most 214 characters, no leading dot or underscore.
pub fn check_plugin_id(id: &str) -> ChartResult<&str> {
    let reason = if id.is_empty() {
        Some("empty")
    } else if id.len() > MAX_PLUGIN_ID_LENGTH {
        Some("longer than 214 characters")
    } else if id.starts_with('.') || id.starts_with('_') {
        Some("starts with a dot or an underscore")
    } else if id.chars().any(|c| c.is_ascii_uppercase()) {
        Some("contains uppercase letters")
    } else if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'))
    {
        Some("contains characters that are not url safe")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ChartError::InvalidPluginId(format!("`{id}` {reason}"))),
        None => Ok(id),
    }
}

/// Options of one plugin, stored in a dataset under the plugin id.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginOptions {
    plugin_id: String,
    native: NativeObject,
}

impl PluginOptions {
    pub fn new(plugin_id: &str) -> ChartResult<Self> {
        check_plugin_id(plugin_id)?;
        Ok(Self {
            plugin_id: plugin_id.to_owned(),
            native: NativeObject::new(),
        })
    }

    pub(crate) fn from_native(plugin_id: &str, native: NativeObject) -> Self {
        Self {
            plugin_id: plugin_id.to_owned(),
            native,
        }
    }

    #[must_use]
    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    #[must_use]
    pub fn native(&self) -> &NativeObject {
        &self.native
    }

    pub fn native_mut(&mut self) -> &mut NativeObject {
        &mut self.native
    }

    pub(crate) fn into_native(self) -> NativeObject {
        self.native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_ids_follow_package_name_rules() {
        assert!(check_plugin_id("datalabels").is_ok());
        assert!(check_plugin_id("chartjs-plugin-zoom").is_ok());
        assert!(check_plugin_id("").is_err());
        assert!(check_plugin_id("_private").is_err());
        assert!(check_plugin_id("DataLabels").is_err());
        assert!(check_plugin_id("data labels").is_err());
        assert!(check_plugin_id(&"a".repeat(215)).is_err());
    }

    #[test]
    fn bundled_plugins_are_recognized() {
        assert!(is_default_plugin("legend"));
        assert!(!is_default_plugin("datalabels"));
    }
}
