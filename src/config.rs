//! Top level chart configuration: `{ type, data, options }`.

use tracing::debug;

use crate::colors::CanvasObjectFactory;
use crate::core::{ChartType, Key, NativeObject};
use crate::data::Data;
use crate::error::ChartResult;
use crate::items::ChartNode;
use crate::plugins::{PluginOptions, check_plugin_id};

const PLUGINS: &str = "plugins";

#[derive(Debug)]
pub struct ChartConfiguration {
    chart_type: ChartType,
    data: Data,
    options: NativeObject,
}

impl ChartConfiguration {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            data: Data::new(),
            options: NativeObject::new(),
        }
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    #[must_use]
    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Data {
        &mut self.data
    }

    #[must_use]
    pub fn options(&self) -> &NativeObject {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut NativeObject {
        &mut self.options
    }

    /// Stores plugin options under `options.plugins.<id>`. Bundled plugins
    /// are configured here.
    pub fn set_plugin_options(&mut self, options: PluginOptions) -> ChartResult<()> {
        let plugin_id = options.plugin_id().to_owned();
        self.options
            .object_entry(PLUGINS)?
            .set_object(plugin_id.as_str(), options.into_native())
    }

    pub fn plugin_options(&self, plugin_id: &str) -> ChartResult<Option<PluginOptions>> {
        check_plugin_id(plugin_id)?;
        Ok(self
            .options
            .get_object(PLUGINS)
            .and_then(|plugins| plugins.get_object(plugin_id))
            .map(|native| PluginOptions::from_native(plugin_id, native.clone())))
    }

    /// Resolves pending gradients and patterns of every dataset. Returns how
    /// many datasets changed.
    pub fn apply_canvas_objects(
        &mut self,
        chart: &ChartNode,
        factory: &CanvasObjectFactory,
    ) -> ChartResult<usize> {
        let mut applied = 0;
        for (index, dataset) in self.data.datasets_mut().iter_mut().enumerate() {
            if dataset.dataset_mut().apply_canvas_objects(chart, factory, index)? {
                applied += 1;
            }
        }
        debug!(chart = %chart.id, applied, "chart canvas objects applied");
        Ok(applied)
    }

    /// Invalidates chart-dependent paints, for instance after a resize.
    pub fn reset_canvas_objects(&mut self, chart: &ChartNode, factory: &CanvasObjectFactory) {
        for dataset in self.data.datasets_mut() {
            dataset.dataset_mut().reset_canvas_objects(chart, factory);
        }
    }

    pub fn to_native(&self) -> ChartResult<NativeObject> {
        let mut native = NativeObject::new();
        native.set_value("type", self.chart_type.value())?;
        native.set_object("data", self.data.to_native()?)?;
        native.set_object("options", self.options.clone())?;
        Ok(native)
    }

    /// JSON handed to Chart.js, without internal properties.
    pub fn to_json(&self) -> ChartResult<String> {
        self.to_native()?.to_filtered_json()
    }
}
