use serde::{Deserialize, Serialize};

use crate::core::{NativeObject, NativeValue};
use crate::data::dataset::IsDataset;
use crate::error::ChartResult;

/// Category label, split over several lines when multi-line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Single(String),
    Multi(Vec<String>),
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for Label {
    fn from(value: Vec<String>) -> Self {
        Self::Multi(value)
    }
}

impl From<Label> for NativeValue {
    fn from(label: Label) -> Self {
        match label {
            Label::Single(value) => value.into(),
            Label::Multi(lines) => lines.into(),
        }
    }
}

/// Labels and datasets of a chart.
#[derive(Default)]
pub struct Data {
    labels: Vec<Label>,
    datasets: Vec<Box<dyn IsDataset>>,
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("labels", &self.labels)
            .field("datasets", &self.datasets.len())
            .finish()
    }
}

impl Data {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_labels<L: Into<Label>>(&mut self, labels: impl IntoIterator<Item = L>) {
        self.labels = labels.into_iter().map(Into::into).collect();
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Appends a dataset and returns its index.
    pub fn add_dataset(&mut self, dataset: impl IsDataset + 'static) -> usize {
        self.datasets.push(Box::new(dataset));
        self.datasets.len() - 1
    }

    #[must_use]
    pub fn datasets(&self) -> &[Box<dyn IsDataset>] {
        &self.datasets
    }

    pub fn datasets_mut(&mut self) -> &mut [Box<dyn IsDataset>] {
        &mut self.datasets
    }

    #[must_use]
    pub fn dataset(&self, index: usize) -> Option<&dyn IsDataset> {
        self.datasets.get(index).map(AsRef::as_ref)
    }

    /// Dataset at `index` when it has the requested type.
    #[must_use]
    pub fn dataset_as<T: IsDataset + 'static>(&self, index: usize) -> Option<&T> {
        self.datasets.get(index)?.as_any().downcast_ref::<T>()
    }

    pub fn remove_dataset(&mut self, index: usize) -> Option<Box<dyn IsDataset>> {
        (index < self.datasets.len()).then(|| self.datasets.remove(index))
    }

    pub fn to_native(&self) -> ChartResult<NativeObject> {
        let mut native = NativeObject::new();
        native.set_array("labels", self.labels.clone())?;
        let datasets: Vec<NativeObject> = self
            .datasets
            .iter()
            .map(|dataset| dataset.dataset().native().clone())
            .collect();
        native.set_array("datasets", datasets)?;
        Ok(native)
    }

    /// JSON Chart.js reads, without internal properties.
    pub fn to_json(&self) -> ChartResult<String> {
        self.to_native()?.to_filtered_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::bar::BarDataset;
    use crate::data::line::LineDataset;

    #[test]
    fn typed_access_by_index() {
        let mut data = Data::new();
        data.add_dataset(BarDataset::new());
        let index = data.add_dataset(LineDataset::new());
        assert!(data.dataset_as::<LineDataset>(index).is_some());
        assert!(data.dataset_as::<BarDataset>(index).is_none());
        assert!(data.remove_dataset(5).is_none());
    }

    #[test]
    fn multi_line_labels_are_arrays() {
        let mut data = Data::new();
        data.set_labels([Label::from("Jan"), Label::from(vec!["Feb".to_owned(), "2024".to_owned()])]);
        let json = data.to_json().expect("json");
        assert!(json.contains(r#""labels":["Jan",["Feb","2024"]]"#));
    }
}
