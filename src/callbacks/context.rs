use crate::colors::CanvasObjectFactory;
use crate::core::{NativeValue, key_enum};
use crate::items::ChartNode;

key_enum! {
    /// Level of the chart an option is being resolved for.
    pub enum ContextType {
        Chart => "chart",
        Dataset => "dataset",
        Data => "data",
    }
}

/// Arguments of a scriptable option invocation.
#[derive(Debug, Clone, Copy)]
pub struct ScriptableContext<'a> {
    chart: &'a ChartNode,
    factory: &'a CanvasObjectFactory,
    context_type: ContextType,
    dataset_index: usize,
    data_index: usize,
    active: bool,
    raw: Option<&'a NativeValue>,
}

impl<'a> ScriptableContext<'a> {
    #[must_use]
    pub fn new(chart: &'a ChartNode, factory: &'a CanvasObjectFactory) -> Self {
        Self {
            chart,
            factory,
            context_type: ContextType::Chart,
            dataset_index: 0,
            data_index: 0,
            active: false,
            raw: None,
        }
    }

    #[must_use]
    pub fn for_dataset(mut self, dataset_index: usize) -> Self {
        self.context_type = ContextType::Dataset;
        self.dataset_index = dataset_index;
        self
    }

    #[must_use]
    pub fn for_data(mut self, dataset_index: usize, data_index: usize) -> Self {
        self.context_type = ContextType::Data;
        self.dataset_index = dataset_index;
        self.data_index = data_index;
        self
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub fn with_raw(mut self, raw: &'a NativeValue) -> Self {
        self.raw = Some(raw);
        self
    }

    #[must_use]
    pub fn chart(&self) -> &'a ChartNode {
        self.chart
    }

    #[must_use]
    pub fn factory(&self) -> &'a CanvasObjectFactory {
        self.factory
    }

    #[must_use]
    pub fn context_type(&self) -> ContextType {
        self.context_type
    }

    #[must_use]
    pub fn dataset_index(&self) -> usize {
        self.dataset_index
    }

    #[must_use]
    pub fn data_index(&self) -> usize {
        self.data_index
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn raw(&self) -> Option<&'a NativeValue> {
        self.raw
    }
}
