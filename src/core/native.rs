use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::callbacks::CallbackProxy;
use crate::colors::{CanvasGradient, CanvasPattern};
use crate::core::key::{Key, check_key};
use crate::dom::{Canvas, Element, Img};
use crate::error::{ChartError, ChartResult};

/// Prefix of the bookkeeping properties that Chart.js never reads.
pub const INTERNAL_KEY_PREFIX: &str = "_charba";

/// String written in place of function values when serializing.
pub const FUNCTION_PLACEHOLDER: &str = "function";

/// Value stored in a native object.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<NativeValue>),
    Object(NativeObject),
    Function(CallbackProxy),
    Element(Element),
}

/// `typeof`-style classification of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
}

impl NativeValue {
    #[must_use]
    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::Null => ObjectType::Null,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::Number(_) => ObjectType::Number,
            Self::String(_) => ObjectType::String,
            Self::Array(_) => ObjectType::Array,
            Self::Object(_) | Self::Element(_) => ObjectType::Object,
            Self::Function(_) => ObjectType::Function,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[NativeValue]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&NativeObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts into a JSON value. Functions become a placeholder string and
    /// non-finite numbers become `null`, as `JSON.stringify` would do.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Boolean(value) => Value::Bool(*value),
            Self::Number(value) => number_to_json(*value),
            Self::String(value) => Value::String(value.clone()),
            Self::Array(values) => Value::Array(values.iter().map(Self::to_json_value).collect()),
            Self::Object(object) => object.to_value(),
            Self::Function(_) => Value::String(FUNCTION_PLACEHOLDER.to_owned()),
            Self::Element(element) => serde_json::to_value(element).unwrap_or(Value::Null),
        }
    }

    #[must_use]
    pub fn from_json_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Boolean(value),
            Value::Number(value) => value.as_f64().map_or(Self::Null, Self::Number),
            Value::String(value) => Self::String(value),
            Value::Array(values) => {
                Self::Array(values.into_iter().map(Self::from_json_value).collect())
            }
            Value::Object(map) => Self::Object(NativeObject::from_json_map(map)),
        }
    }
}

fn number_to_json(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        return Value::Number(Number::from(value as i64));
    }
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

impl Serialize for NativeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Boolean(value) => serializer.serialize_bool(*value),
            Self::Number(value) => number_to_json(*value).serialize(serializer),
            Self::String(value) => serializer.serialize_str(value),
            Self::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Self::Object(object) => object.serialize(serializer),
            Self::Function(_) => serializer.serialize_str(FUNCTION_PLACEHOLDER),
            Self::Element(element) => element.serialize(serializer),
        }
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for NativeValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for NativeValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<usize> for NativeValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<NativeValue>> From<Vec<T>> for NativeValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<NativeObject> for NativeValue {
    fn from(value: NativeObject) -> Self {
        Self::Object(value)
    }
}

impl From<CallbackProxy> for NativeValue {
    fn from(value: CallbackProxy) -> Self {
        Self::Function(value)
    }
}

impl From<Element> for NativeValue {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<Img> for NativeValue {
    fn from(value: Img) -> Self {
        Self::Element(Element::Image(value))
    }
}

impl From<Canvas> for NativeValue {
    fn from(value: Canvas) -> Self {
        Self::Element(Element::Canvas(value))
    }
}

impl From<CanvasGradient> for NativeValue {
    fn from(value: CanvasGradient) -> Self {
        Self::Element(Element::Gradient(value))
    }
}

impl From<CanvasPattern> for NativeValue {
    fn from(value: CanvasPattern) -> Self {
        Self::Element(Element::Pattern(value))
    }
}

/// Dynamic, insertion-ordered object backing every typed wrapper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeObject {
    properties: IndexMap<String, NativeValue>,
}

impl NativeObject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[must_use]
    pub fn has(&self, key: impl Key) -> bool {
        key.is_valid() && self.properties.contains_key(key.value())
    }

    /// Returns `true` only when every key is present. An empty list is never satisfied.
    #[must_use]
    pub fn has_all<K: Key>(&self, keys: &[K]) -> bool {
        !keys.is_empty() && keys.iter().all(|key| self.has(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, key: impl Key) -> Option<&NativeValue> {
        if !key.is_valid() {
            return None;
        }
        self.properties.get(key.value())
    }

    pub fn get_mut(&mut self, key: impl Key) -> Option<&mut NativeValue> {
        if !key.is_valid() {
            return None;
        }
        self.properties.get_mut(key.value())
    }

    /// Removes the property, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: impl Key) -> Option<NativeValue> {
        if !key.is_valid() {
            return None;
        }
        self.properties.shift_remove(key.value())
    }

    #[must_use]
    pub fn type_of(&self, key: impl Key) -> ObjectType {
        self.get(key)
            .map_or(ObjectType::Undefined, NativeValue::object_type)
    }

    #[must_use]
    pub fn is_type(&self, key: impl Key, types: &[ObjectType]) -> bool {
        let property_type = self.type_of(key);
        types.contains(&property_type)
    }

    /// Returns the nested object, replacing whatever else the property held.
    pub fn object_entry(&mut self, key: impl Key) -> ChartResult<&mut NativeObject> {
        let name = check_key(&key)?;
        let slot = self
            .properties
            .entry(name.to_owned())
            .or_insert(NativeValue::Null);
        if !matches!(slot, NativeValue::Object(_)) {
            *slot = NativeValue::Object(NativeObject::new());
        }
        let NativeValue::Object(object) = slot else {
            return Err(ChartError::InvalidData(format!(
                "property `{name}` is not an object"
            )));
        };
        Ok(object)
    }

    pub(crate) fn insert(&mut self, name: &str, value: NativeValue) {
        self.properties.insert(name.to_owned(), value);
    }

    /// Deep-merges `source` into this object: nested objects are merged,
    /// every other value in `source` overrides the current one.
    pub fn merge(&mut self, source: &NativeObject) {
        for (name, value) in &source.properties {
            match (self.properties.get_mut(name), value) {
                (Some(NativeValue::Object(target)), NativeValue::Object(nested)) => {
                    target.merge(nested);
                }
                _ => {
                    self.properties.insert(name.clone(), value.clone());
                }
            }
        }
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(self.properties.len());
        for (name, value) in &self.properties {
            map.insert(name.clone(), value.to_json_value());
        }
        Value::Object(map)
    }

    /// Pretty JSON of the whole object, internal properties included.
    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compact JSON without internal bookkeeping properties, at any depth.
    pub fn to_filtered_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string(&filter_internal(self.to_value()))?)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input)?;
        match value {
            Value::Object(map) => Ok(Self::from_json_map(map)),
            other => Err(ChartError::InvalidData(format!(
                "expected a json object, found `{other}`"
            ))),
        }
    }

    fn from_json_map(map: Map<String, Value>) -> Self {
        let mut object = Self::new();
        for (name, value) in map {
            object
                .properties
                .insert(name, NativeValue::from_json_value(value));
        }
        object
    }
}

fn filter_internal(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(name, _)| !name.starts_with(INTERNAL_KEY_PREFIX))
                .map(|(name, nested)| (name, filter_internal(nested)))
                .collect(),
        ),
        Value::Array(values) => Value::Array(values.into_iter().map(filter_internal).collect()),
        other => other,
    }
}

impl Serialize for NativeObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for (name, value) in &self.properties {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_of_reports_undefined_for_missing_keys() {
        let mut object = NativeObject::new();
        object.insert("label", NativeValue::from("sales"));
        assert_eq!(object.type_of("label"), ObjectType::String);
        assert_eq!(object.type_of("missing"), ObjectType::Undefined);
        assert_eq!(object.type_of(""), ObjectType::Undefined);
    }

    #[test]
    fn integral_numbers_serialize_without_fraction() {
        let mut object = NativeObject::new();
        object.insert("borderWidth", NativeValue::Number(2.0));
        object.insert("tension", NativeValue::Number(0.4));
        object.insert("broken", NativeValue::Number(f64::NAN));
        let value = object.to_value();
        assert_eq!(value["borderWidth"], serde_json::json!(2));
        assert_eq!(value["tension"], serde_json::json!(0.4));
        assert_eq!(value["broken"], Value::Null);
    }
}
