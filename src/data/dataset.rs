//! Base of every dataset: the native object Chart.js reads, plus the
//! gradients, patterns and color callbacks resolved at chart time.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::callbacks::{
    CallbackProxy, ColorCallback, Scriptable, ScriptableColor, ScriptableContext, color_value,
    option_value,
};
use crate::colors::{CanvasObjectFactory, Color, ColorBuilder, Gradient, Pattern};
use crate::core::{
    ChartType, EnumValue, Key, NativeObject, NativeValue, ObjectType,
    check_key, key_enum,
};
use crate::data::containers::CanvasObjectContainer;
use crate::data::points::{DataPoint, TimeSeriesItem};
use crate::defaults::DatasetDefaults;
use crate::error::{ChartError, ChartResult};
use crate::items::ChartNode;
use crate::plugins::{PluginOptions, check_plugin_id, is_default_plugin};

static NEXT_DATASET_ID: AtomicU64 = AtomicU64::new(0);

key_enum! {
    pub enum Property {
        Type => "type",
        Label => "label",
        Hidden => "hidden",
        Clip => "clip",
        Order => "order",
        Data => "data",
        BorderWidth => "borderWidth",
        HoverBorderWidth => "hoverBorderWidth",
        CharbaId => "_charbaId",
        CharbaDataType => "_charbaDataType",
    }
}

key_enum! {
    /// Color properties that accept gradients, patterns and callbacks.
    pub enum CanvasObjectProperty {
        BackgroundColor => "backgroundColor",
        BorderColor => "borderColor",
        HoverBackgroundColor => "hoverBackgroundColor",
        HoverBorderColor => "hoverBorderColor",
    }
}

key_enum! {
    /// Shape of the values stored in `data`.
    pub enum DataType {
        Numbers => "numbers",
        Points => "points",
        Unknown => "unknown",
    }
}

/// Chart element drawn for each data item, selecting the element defaults
/// a dataset falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetElement {
    Point,
    Line,
    Arc,
    Bar,
}

impl DatasetElement {
    #[must_use]
    pub fn of(chart_type: ChartType) -> Self {
        match chart_type {
            ChartType::Bar => Self::Bar,
            ChartType::Line | ChartType::Scatter | ChartType::Radar => Self::Line,
            ChartType::Pie
            | ChartType::Doughnut
            | ChartType::PolarArea
            | ChartType::Meter
            | ChartType::Gauge => Self::Arc,
            ChartType::Bubble => Self::Point,
        }
    }

    #[must_use]
    pub fn border_width(self, defaults: &DatasetDefaults) -> f64 {
        match self {
            Self::Point => defaults.point.border_width,
            Self::Line => defaults.line.border_width,
            Self::Arc => defaults.arc.border_width,
            Self::Bar => defaults.bar.border_width,
        }
    }

    #[must_use]
    pub fn border_color(self, defaults: &DatasetDefaults) -> &str {
        match self {
            Self::Arc => &defaults.arc.border_color,
            Self::Point | Self::Line | Self::Bar => &defaults.border_color,
        }
    }
}

/// Color property that can hold gradients, and patterns where allowed.
pub trait CanvasObjectKey: Key {
    fn has_pattern(&self) -> bool;

    fn default_color<'a>(
        &self,
        defaults: &'a DatasetDefaults,
        element: DatasetElement,
    ) -> &'a str;
}

impl CanvasObjectKey for CanvasObjectProperty {
    fn has_pattern(&self) -> bool {
        matches!(self, Self::BackgroundColor | Self::HoverBackgroundColor)
    }

    fn default_color<'a>(
        &self,
        defaults: &'a DatasetDefaults,
        element: DatasetElement,
    ) -> &'a str {
        match self {
            Self::BackgroundColor | Self::HoverBackgroundColor => &defaults.background_color,
            Self::BorderColor | Self::HoverBorderColor => element.border_color(defaults),
        }
    }
}

/// How many pixels a dataset may draw outside the chart area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clip {
    Value(f64),
    Sides {
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    },
    Disabled,
}

/// Gradient or pattern returned by a color callback.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackCanvasObject {
    Gradient(Gradient),
    Pattern(Pattern),
}

/// Behavior that differs between dataset kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DatasetRules {
    pub points_only: bool,
    pub points_need_radius: bool,
    /// Data is computed by the dataset itself.
    pub data_locked: bool,
    /// Colors are computed by the dataset itself.
    pub colors_locked: bool,
    pub hideable: bool,
    pub canvas_objects: bool,
}

impl Default for DatasetRules {
    fn default() -> Self {
        Self {
            points_only: false,
            points_need_radius: false,
            data_locked: false,
            colors_locked: false,
            hideable: true,
            canvas_objects: true,
        }
    }
}

type CallbackCanvasCache = Arc<Mutex<HashMap<String, CallbackCanvasObject>>>;

pub struct Dataset {
    native: NativeObject,
    id: u64,
    chart_type: ChartType,
    element: DatasetElement,
    defaults: Arc<DatasetDefaults>,
    rules: DatasetRules,
    gradients: CanvasObjectContainer<Gradient>,
    patterns: CanvasObjectContainer<Pattern>,
    color_callbacks: HashMap<String, ColorCallback>,
    callback_canvas_objects: CallbackCanvasCache,
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("id", &self.id)
            .field("chart_type", &self.chart_type)
            .field("native", &self.native)
            .field("gradients", &self.gradients)
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}

impl Dataset {
    #[must_use]
    pub fn new(chart_type: ChartType, defaults: Arc<DatasetDefaults>) -> Self {
        Self::with_rules(chart_type, defaults, DatasetRules::default())
    }

    pub(crate) fn with_rules(
        chart_type: ChartType,
        defaults: Arc<DatasetDefaults>,
        rules: DatasetRules,
    ) -> Self {
        let id = NEXT_DATASET_ID.fetch_add(1, Ordering::Relaxed);
        let mut native = NativeObject::new();
        native.insert(Property::CharbaId.value(), NativeValue::Number(id as f64));
        native.insert(Property::Type.value(), chart_type.into());
        native.insert(Property::CharbaDataType.value(), DataType::Unknown.into());
        debug!(dataset_id = id, chart_type = %chart_type, "dataset created");
        Self {
            native,
            id,
            chart_type,
            element: DatasetElement::of(chart_type),
            defaults,
            rules,
            gradients: CanvasObjectContainer::new(),
            patterns: CanvasObjectContainer::new(),
            color_callbacks: HashMap::new(),
            callback_canvas_objects: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Scope under which chart-time objects of this dataset are registered.
    #[must_use]
    pub fn scope(&self) -> String {
        format!("dataset-{}", self.id)
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    #[must_use]
    pub fn element(&self) -> DatasetElement {
        self.element
    }

    #[must_use]
    pub fn defaults(&self) -> &DatasetDefaults {
        &self.defaults
    }

    /// Border width used when none is set, from the element defaults.
    #[must_use]
    pub fn default_border_width(&self) -> f64 {
        self.element.border_width(&self.defaults)
    }

    #[must_use]
    pub fn native(&self) -> &NativeObject {
        &self.native
    }

    pub(crate) fn native_mut(&mut self) -> &mut NativeObject {
        &mut self.native
    }

    pub fn set_label(&mut self, label: &str) -> ChartResult<()> {
        self.native.set_value(Property::Label, label)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.native.get_str(Property::Label, "")
    }

    /// Hides the dataset. Datasets that cannot be hidden ignore the request.
    pub fn set_hidden(&mut self, hidden: bool) -> ChartResult<()> {
        let hidden = hidden && self.rules.hideable;
        self.native.set_value(Property::Hidden, hidden)
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.rules.hideable && self.native.get_bool(Property::Hidden, false)
    }

    pub fn set_order(&mut self, order: i32) -> ChartResult<()> {
        self.native.set_value(Property::Order, order)
    }

    #[must_use]
    pub fn order(&self) -> i32 {
        self.native.get_i32(Property::Order, 0)
    }

    pub fn set_clip(&mut self, clip: Clip) -> ChartResult<()> {
        match clip {
            Clip::Value(value) => self.native.set_value(Property::Clip, value),
            Clip::Disabled => self.native.set_value(Property::Clip, false),
            Clip::Sides {
                left,
                right,
                top,
                bottom,
            } => {
                let mut sides = NativeObject::new();
                sides.set_value("left", left)?;
                sides.set_value("right", right)?;
                sides.set_value("top", top)?;
                sides.set_value("bottom", bottom)?;
                self.native.set_object(Property::Clip, sides)
            }
        }
    }

    /// Clip in use; half the border width when unset.
    #[must_use]
    pub fn clip(&self) -> Clip {
        match self.native.get(Property::Clip) {
            Some(NativeValue::Number(value)) => Clip::Value(*value),
            Some(NativeValue::Boolean(false)) => Clip::Disabled,
            Some(NativeValue::Object(sides)) => Clip::Sides {
                left: sides.get_f64("left", 0.0),
                right: sides.get_f64("right", 0.0),
                top: sides.get_f64("top", 0.0),
                bottom: sides.get_f64("bottom", 0.0),
            },
            _ => Clip::Value(self.default_border_width() / 2.0),
        }
    }

    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.native
            .get_enum(Property::CharbaDataType, DataType::Unknown)
    }

    /// Replaces the data with plain numbers.
    pub fn set_data(&mut self, values: &[f64]) -> ChartResult<()> {
        if self.rules.points_only {
            return Err(ChartError::UnsupportedOperation(format!(
                "{} datasets only accept data points",
                self.chart_type
            )));
        }
        self.check_data_unlocked()?;
        self.store_numbers(values)
    }

    fn check_data_unlocked(&self) -> ChartResult<()> {
        if self.rules.data_locked {
            return Err(ChartError::UnsupportedOperation(format!(
                "{} datasets compute their own data",
                self.chart_type
            )));
        }
        Ok(())
    }

    fn check_colors_unlocked(&self, name: &str) -> ChartResult<()> {
        if self.rules.colors_locked {
            return Err(ChartError::UnsupportedOperation(format!(
                "{} datasets compute their own `{name}`",
                self.chart_type
            )));
        }
        Ok(())
    }

    pub(crate) fn store_numbers(&mut self, values: &[f64]) -> ChartResult<()> {
        self.native.set_array(Property::Data, values.to_vec())?;
        self.native
            .set_enum(Property::CharbaDataType, DataType::Numbers)?;
        debug!(dataset_id = self.id, len = values.len(), "dataset numeric data replaced");
        Ok(())
    }

    /// Numeric data, empty when the dataset holds points.
    pub fn data(&self) -> ChartResult<Vec<f64>> {
        if self.rules.points_only {
            return Err(ChartError::UnsupportedOperation(format!(
                "{} datasets only hold data points",
                self.chart_type
            )));
        }
        if self.data_type() != DataType::Numbers {
            return Ok(Vec::new());
        }
        Ok(self.native.get_f64_array(Property::Data))
    }

    /// Live numeric data array, created empty when the dataset has none.
    pub fn data_binding(&mut self) -> ChartResult<&mut Vec<NativeValue>> {
        self.check_data_unlocked()?;
        if self.data_type() != DataType::Numbers {
            self.set_data(&[])?;
        }
        match self.native.get_mut(Property::Data) {
            Some(NativeValue::Array(values)) => Ok(values),
            _ => Err(ChartError::InvalidData(format!(
                "dataset {} has no numeric data array",
                self.id
            ))),
        }
    }

    /// Replaces the data with points. Bubble datasets require every point to
    /// carry a radius.
    pub fn set_data_points(&mut self, points: &[DataPoint]) -> ChartResult<()> {
        self.check_data_unlocked()?;
        if self.rules.points_need_radius {
            if let Some(index) = points.iter().position(|point| point.r.is_none()) {
                return Err(ChartError::InvalidData(format!(
                    "{} data point {index} has no radius",
                    self.chart_type
                )));
            }
        }
        let values = points
            .iter()
            .map(DataPoint::to_native)
            .collect::<ChartResult<Vec<_>>>()?;
        self.store_points(values)
    }

    #[must_use]
    pub fn data_points(&self) -> Vec<DataPoint> {
        if self.data_type() != DataType::Points {
            return Vec::new();
        }
        self.native
            .get_object_array(Property::Data)
            .into_iter()
            .filter_map(DataPoint::from_native)
            .collect()
    }

    /// Stores time series items as points, ordered by time.
    pub fn set_time_series(&mut self, items: &[TimeSeriesItem]) -> ChartResult<()> {
        self.check_data_unlocked()?;
        if self.rules.points_need_radius {
            return Err(ChartError::UnsupportedOperation(format!(
                "{} datasets need a radius on every point",
                self.chart_type
            )));
        }
        let mut sorted = items.to_vec();
        sorted.sort_by_key(|item| item.time);
        let values = sorted
            .iter()
            .map(TimeSeriesItem::to_native)
            .collect::<ChartResult<Vec<_>>>()?;
        self.store_points(values)
    }

    #[must_use]
    pub fn time_series(&self) -> Vec<TimeSeriesItem> {
        if self.data_type() != DataType::Points {
            return Vec::new();
        }
        self.native
            .get_object_array(Property::Data)
            .into_iter()
            .filter_map(TimeSeriesItem::from_native)
            .collect()
    }

    fn store_points(&mut self, values: Vec<NativeObject>) -> ChartResult<()> {
        let len = values.len();
        self.native.set_array(Property::Data, values)?;
        self.native
            .set_enum(Property::CharbaDataType, DataType::Points)?;
        debug!(dataset_id = self.id, len, "dataset point data replaced");
        Ok(())
    }

    /// Sets plain colors, clearing gradients, patterns and callbacks of the key.
    pub fn set_colors<K: CanvasObjectKey, C: ToString>(
        &mut self,
        key: K,
        colors: &[C],
    ) -> ChartResult<()> {
        self.check_colors_unlocked(key.value())?;
        self.store_colors(key, colors)
    }

    pub(crate) fn store_colors<K: CanvasObjectKey, C: ToString>(
        &mut self,
        key: K,
        colors: &[C],
    ) -> ChartResult<()> {
        let name = check_key(&key)?.to_owned();
        self.clear_color_sources(&name);
        let values: SmallVec<[String; 4]> = colors.iter().map(ToString::to_string).collect();
        self.native.set_value_or_array(&name, &values)
    }

    /// Plain colors of the key, empty when another kind of color is set.
    #[must_use]
    pub fn colors<K: CanvasObjectKey>(&self, key: K) -> Vec<String> {
        let name = key.value();
        if self.gradients.has_objects(name)
            || self.patterns.has_objects(name)
            || self.color_callbacks.contains_key(name)
        {
            return Vec::new();
        }
        self.native
            .get_string_value_or_array(name, key.default_color(&self.defaults, self.element))
    }

    /// Plain colors parsed back into [`Color`] values.
    pub fn parsed_colors<K: CanvasObjectKey>(&self, key: K) -> ChartResult<Vec<Color>> {
        ColorBuilder::parse_all(&self.colors(key))
    }

    pub fn set_gradients<K: CanvasObjectKey>(
        &mut self,
        key: K,
        gradients: Vec<Gradient>,
    ) -> ChartResult<()> {
        let name = self.check_canvas_key(&key)?;
        self.clear_color_sources(&name);
        self.native.remove(name.as_str());
        self.gradients.set_objects(&name, gradients);
        Ok(())
    }

    #[must_use]
    pub fn gradients<K: CanvasObjectKey>(&self, key: K) -> &[Gradient] {
        self.gradients.objects(key.value())
    }

    /// Sets patterns on a key that accepts them.
    pub fn set_patterns<K: CanvasObjectKey>(
        &mut self,
        key: K,
        patterns: Vec<Pattern>,
    ) -> ChartResult<()> {
        let name = self.check_canvas_key(&key)?;
        if !key.has_pattern() {
            return Err(ChartError::UnsupportedOperation(format!(
                "`{name}` does not accept patterns"
            )));
        }
        self.clear_color_sources(&name);
        self.native.remove(name.as_str());
        self.patterns.set_objects(&name, patterns);
        Ok(())
    }

    #[must_use]
    pub fn patterns<K: CanvasObjectKey>(&self, key: K) -> &[Pattern] {
        self.patterns.objects(key.value())
    }

    /// Installs a color callback, or removes the property on `None`.
    ///
    /// Gradients and patterns returned by the callback are remembered per
    /// property and element, see [`Dataset::callback_gradient`].
    pub fn set_color_callback<K: CanvasObjectKey>(
        &mut self,
        key: K,
        callback: Option<ColorCallback>,
    ) -> ChartResult<()> {
        let name = check_key(&key)?.to_owned();
        self.check_colors_unlocked(&name)?;
        self.clear_color_sources(&name);
        let Some(callback) = callback else {
            self.native.remove(name.as_str());
            return Ok(());
        };
        let cache = Arc::clone(&self.callback_canvas_objects);
        let default = key.default_color(&self.defaults, self.element).to_owned();
        let has_pattern = key.has_pattern();
        let property = name.clone();
        let function = Arc::clone(&callback);
        self.native.set_value(
            name.as_str(),
            CallbackProxy::new(move |context| {
                let result = function(context);
                remember_canvas_object(&cache, &property, context, result.as_ref());
                color_value(context, result, &default, has_pattern)
            }),
        )?;
        self.color_callbacks.insert(name, callback);
        Ok(())
    }

    #[must_use]
    pub fn color_callback<K: CanvasObjectKey>(&self, key: K) -> Option<&ColorCallback> {
        self.color_callbacks.get(key.value())
    }

    /// Gradient last returned by the color callback of `key` for an element.
    #[must_use]
    pub fn callback_gradient<K: Key>(
        &self,
        key: K,
        dataset_index: usize,
        data_index: usize,
    ) -> Option<Gradient> {
        match self.callback_canvas_object(key.value(), dataset_index, data_index)? {
            CallbackCanvasObject::Gradient(gradient) => Some(gradient),
            CallbackCanvasObject::Pattern(_) => None,
        }
    }

    #[must_use]
    pub fn callback_pattern<K: Key>(
        &self,
        key: K,
        dataset_index: usize,
        data_index: usize,
    ) -> Option<Pattern> {
        match self.callback_canvas_object(key.value(), dataset_index, data_index)? {
            CallbackCanvasObject::Pattern(pattern) => Some(pattern),
            CallbackCanvasObject::Gradient(_) => None,
        }
    }

    pub fn clear_callback_canvas_objects(&self) {
        self.callback_canvas_objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn callback_canvas_object(
        &self,
        property: &str,
        dataset_index: usize,
        data_index: usize,
    ) -> Option<CallbackCanvasObject> {
        self.callback_canvas_objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&callback_cache_key(property, dataset_index, data_index))
            .cloned()
    }

    pub fn set_border_width(&mut self, widths: &[f64]) -> ChartResult<()> {
        self.native.set_value_or_array(Property::BorderWidth, widths)
    }

    #[must_use]
    pub fn border_width(&self) -> Vec<f64> {
        self.native
            .get_f64_value_or_array(Property::BorderWidth, self.default_border_width())
    }

    pub fn set_border_width_callback(&mut self, callback: Option<Scriptable<f64>>) -> ChartResult<()> {
        let default = self.default_border_width();
        self.set_value_callback(Property::BorderWidth, callback, default)
    }

    pub fn set_hover_border_width(&mut self, widths: &[f64]) -> ChartResult<()> {
        self.native
            .set_value_or_array(Property::HoverBorderWidth, widths)
    }

    #[must_use]
    pub fn hover_border_width(&self) -> Vec<f64> {
        self.native
            .get_f64_value_or_array(Property::HoverBorderWidth, self.default_border_width())
    }

    pub fn set_hover_border_width_callback(
        &mut self,
        callback: Option<Scriptable<f64>>,
    ) -> ChartResult<()> {
        let default = self.default_border_width();
        self.set_value_callback(Property::HoverBorderWidth, callback, default)
    }

    /// Installs a typed callback behind `key`, or removes the property on `None`.
    pub fn set_value_callback<T>(
        &mut self,
        key: impl Key,
        callback: Option<Scriptable<T>>,
        default: T,
    ) -> ChartResult<()>
    where
        T: Into<NativeValue> + Clone + Send + Sync + 'static,
    {
        let name = check_key(&key)?;
        match callback {
            Some(callback) => self.native.set_value(
                name,
                CallbackProxy::new(move |context| {
                    option_value(context, &callback, default.clone()).into()
                }),
            ),
            None => {
                self.native.remove(name);
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn has_callback(&self, key: impl Key) -> bool {
        self.native.type_of(key) == ObjectType::Function
    }

    /// Stores the options of a plugin under its id. Ids naming a dataset
    /// property, or a key already holding a non-object value, are rejected.
    pub fn set_options(&mut self, options: PluginOptions) -> ChartResult<()> {
        let plugin_id = check_dataset_plugin_id(options.plugin_id())?.to_owned();
        if !matches!(
            self.native.type_of(plugin_id.as_str()),
            ObjectType::Object | ObjectType::Undefined
        ) {
            return Err(ChartError::InvalidPluginId(format!(
                "`{plugin_id}` is already used by a dataset option"
            )));
        }
        self.native.set_object(plugin_id.as_str(), options.into_native())
    }

    pub fn has_options(&self, plugin_id: &str) -> bool {
        check_dataset_plugin_id(plugin_id).is_ok()
            && self.native.type_of(plugin_id) == ObjectType::Object
    }

    pub fn options(&self, plugin_id: &str) -> ChartResult<Option<PluginOptions>> {
        check_dataset_plugin_id(plugin_id)?;
        Ok(self
            .native
            .get_object(plugin_id)
            .map(|native| PluginOptions::from_native(plugin_id, native.clone())))
    }

    /// Returns `true` when options were stored for the plugin.
    pub fn remove_options(&mut self, plugin_id: &str) -> ChartResult<bool> {
        check_dataset_plugin_id(plugin_id)?;
        if self.native.type_of(plugin_id) != ObjectType::Object {
            return Ok(false);
        }
        Ok(self.native.remove_if_exists(plugin_id))
    }

    /// Value of `key` for the element described by `context`: callbacks are
    /// invoked, arrays are indexed by the data index (wrapping around).
    #[must_use]
    pub fn resolve(&self, key: impl Key, context: &ScriptableContext<'_>) -> Option<NativeValue> {
        match self.native.get(key)? {
            NativeValue::Function(proxy) => Some(proxy.invoke(context)),
            NativeValue::Array(values) if values.is_empty() => None,
            NativeValue::Array(values) => Some(values[context.data_index() % values.len()].clone()),
            value => Some(value.clone()),
        }
    }

    /// Turns pending gradients and patterns into canvas paints stored in the
    /// native object. Returns `false` when nothing changed since the last call.
    pub fn apply_canvas_objects(
        &mut self,
        chart: &ChartNode,
        factory: &CanvasObjectFactory,
        dataset_index: usize,
    ) -> ChartResult<bool> {
        if !self.gradients.is_changed() && !self.patterns.is_changed() {
            trace!(dataset_id = self.id, "canvas objects unchanged");
            return Ok(false);
        }
        let mut resolved: Vec<(String, Vec<NativeValue>)> = Vec::new();
        for (key, patterns) in self.patterns.iter() {
            let paints = patterns
                .iter()
                .map(|pattern| NativeValue::from(factory.create_pattern(chart, pattern)))
                .collect();
            resolved.push((key.to_owned(), paints));
        }
        for (key, gradients) in self.gradients.iter() {
            let paints = gradients
                .iter()
                .enumerate()
                .map(|(index, gradient)| {
                    factory
                        .create_gradient(chart, gradient, dataset_index, index)
                        .map(NativeValue::from)
                })
                .collect::<ChartResult<Vec<_>>>()?;
            resolved.push((key.to_owned(), paints));
        }
        for (key, paints) in resolved {
            self.native.set_value_or_array(key.as_str(), &paints)?;
        }
        self.gradients.set_changed(false);
        self.patterns.set_changed(false);
        debug!(
            dataset_id = self.id,
            chart = %chart.id,
            gradients = self.gradients.keys().count(),
            patterns = self.patterns.keys().count(),
            "canvas objects applied"
        );
        Ok(true)
    }

    /// Drops the cached gradients of the chart, after a resize for instance,
    /// so that the next apply recomputes them.
    pub fn reset_canvas_objects(&mut self, chart: &ChartNode, factory: &CanvasObjectFactory) {
        factory.reset_gradients(&chart.id);
        if !self.gradients.is_empty() {
            self.gradients.set_changed(true);
        }
        self.clear_callback_canvas_objects();
    }

    pub fn to_json(&self) -> ChartResult<String> {
        self.native.to_json()
    }

    fn check_canvas_key<K: CanvasObjectKey>(&self, key: &K) -> ChartResult<String> {
        let name = check_key(key)?.to_owned();
        self.check_colors_unlocked(&name)?;
        if !self.rules.canvas_objects {
            return Err(ChartError::UnsupportedOperation(format!(
                "{} datasets do not support gradients or patterns on `{name}`",
                self.chart_type
            )));
        }
        Ok(name)
    }

    fn clear_color_sources(&mut self, name: &str) {
        self.gradients.remove_objects(name);
        self.patterns.remove_objects(name);
        self.color_callbacks.remove(name);
    }
}

fn check_dataset_plugin_id(plugin_id: &str) -> ChartResult<&str> {
    check_plugin_id(plugin_id)?;
    if is_default_plugin(plugin_id) {
        return Err(ChartError::InvalidPluginId(format!(
            "`{plugin_id}` is a default plugin, its options belong to the chart"
        )));
    }
    if Property::from_value(plugin_id).is_some() {
        return Err(ChartError::InvalidPluginId(format!(
            "`{plugin_id}` is a dataset property"
        )));
    }
    Ok(plugin_id)
}

fn callback_cache_key(property: &str, dataset_index: usize, data_index: usize) -> String {
    format!("{property},{dataset_index},{data_index}")
}

fn remember_canvas_object(
    cache: &CallbackCanvasCache,
    property: &str,
    context: &ScriptableContext<'_>,
    result: Option<&ScriptableColor>,
) {
    let object = match result {
        Some(ScriptableColor::Gradient(gradient)) => CallbackCanvasObject::Gradient(gradient.clone()),
        Some(ScriptableColor::Pattern(pattern)) => CallbackCanvasObject::Pattern(pattern.clone()),
        _ => return,
    };
    cache.lock().unwrap_or_else(PoisonError::into_inner).insert(
        callback_cache_key(property, context.dataset_index(), context.data_index()),
        object,
    );
}

/// Access to the [`Dataset`] inside a typed dataset, with the color and
/// border options every dataset shares.
pub trait IsDataset: Send + Sync {
    fn dataset(&self) -> &Dataset;

    fn dataset_mut(&mut self) -> &mut Dataset;

    fn as_any(&self) -> &dyn std::any::Any;

    fn set_background_color(&mut self, colors: &[Color]) -> ChartResult<()> {
        self.dataset_mut()
            .set_colors(CanvasObjectProperty::BackgroundColor, colors)
    }

    fn background_color(&self) -> Vec<String> {
        self.dataset().colors(CanvasObjectProperty::BackgroundColor)
    }

    fn set_background_gradients(&mut self, gradients: Vec<Gradient>) -> ChartResult<()> {
        self.dataset_mut()
            .set_gradients(CanvasObjectProperty::BackgroundColor, gradients)
    }

    fn set_background_patterns(&mut self, patterns: Vec<Pattern>) -> ChartResult<()> {
        self.dataset_mut()
            .set_patterns(CanvasObjectProperty::BackgroundColor, patterns)
    }

    fn set_background_color_callback(&mut self, callback: Option<ColorCallback>) -> ChartResult<()> {
        self.dataset_mut()
            .set_color_callback(CanvasObjectProperty::BackgroundColor, callback)
    }

    fn set_border_color(&mut self, colors: &[Color]) -> ChartResult<()> {
        self.dataset_mut()
            .set_colors(CanvasObjectProperty::BorderColor, colors)
    }

    fn border_color(&self) -> Vec<String> {
        self.dataset().colors(CanvasObjectProperty::BorderColor)
    }

    fn set_border_gradients(&mut self, gradients: Vec<Gradient>) -> ChartResult<()> {
        self.dataset_mut()
            .set_gradients(CanvasObjectProperty::BorderColor, gradients)
    }

    fn set_border_color_callback(&mut self, callback: Option<ColorCallback>) -> ChartResult<()> {
        self.dataset_mut()
            .set_color_callback(CanvasObjectProperty::BorderColor, callback)
    }

    fn set_hover_background_color(&mut self, colors: &[Color]) -> ChartResult<()> {
        self.dataset_mut()
            .set_colors(CanvasObjectProperty::HoverBackgroundColor, colors)
    }

    fn set_hover_border_color(&mut self, colors: &[Color]) -> ChartResult<()> {
        self.dataset_mut()
            .set_colors(CanvasObjectProperty::HoverBorderColor, colors)
    }

    fn set_label(&mut self, label: &str) -> ChartResult<()> {
        self.dataset_mut().set_label(label)
    }

    fn label(&self) -> &str {
        self.dataset().label()
    }
}

impl IsDataset for Dataset {
    fn dataset(&self) -> &Dataset {
        self
    }

    fn dataset_mut(&mut self) -> &mut Dataset {
        self
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
