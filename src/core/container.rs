//! Typed accessors over [`NativeObject`].
//!
//! Getters never fail: a missing property, or one holding a value of another
//! type, yields the caller's default. Setters only fail on invalid keys.

use chrono::{DateTime, TimeZone, Utc};

use crate::core::key::{EnumValue, Key, check_key};
use crate::core::native::{NativeObject, NativeValue, ObjectType};
use crate::error::ChartResult;

impl NativeObject {
    pub fn set_value(&mut self, key: impl Key, value: impl Into<NativeValue>) -> ChartResult<()> {
        let name = check_key(&key)?;
        self.insert(name, value.into());
        Ok(())
    }

    /// Stores `Some` values and removes the property on `None`.
    pub fn set_or_remove<T: Into<NativeValue>>(
        &mut self,
        key: impl Key,
        value: Option<T>,
    ) -> ChartResult<()> {
        match value {
            Some(value) => self.set_value(key, value),
            None => {
                self.remove(key);
                Ok(())
            }
        }
    }

    /// Returns `true` when a property was removed.
    pub fn remove_if_exists(&mut self, key: impl Key) -> bool {
        self.remove(key).is_some()
    }

    #[must_use]
    pub fn get_bool(&self, key: impl Key, default: bool) -> bool {
        self.get(key)
            .and_then(NativeValue::as_bool)
            .unwrap_or(default)
    }

    #[must_use]
    pub fn get_f64(&self, key: impl Key, default: f64) -> f64 {
        self.get(key).and_then(NativeValue::as_f64).unwrap_or(default)
    }

    #[must_use]
    pub fn get_i32(&self, key: impl Key, default: i32) -> i32 {
        self.get(key)
            .and_then(NativeValue::as_f64)
            .map_or(default, |value| value as i32)
    }

    #[must_use]
    pub fn get_str<'a>(&'a self, key: impl Key, default: &'a str) -> &'a str {
        self.get(key).and_then(NativeValue::as_str).unwrap_or(default)
    }

    #[must_use]
    pub fn get_string(&self, key: impl Key, default: &str) -> String {
        self.get_str(key, default).to_owned()
    }

    /// Dates are stored as epoch milliseconds, the way `Date.getTime()` reports them.
    pub fn set_date(&mut self, key: impl Key, value: DateTime<Utc>) -> ChartResult<()> {
        self.set_value(key, value.timestamp_millis() as f64)
    }

    #[must_use]
    pub fn get_date(&self, key: impl Key) -> Option<DateTime<Utc>> {
        let millis = self.get(key).and_then(NativeValue::as_f64)?;
        if !millis.is_finite() {
            return None;
        }
        Utc.timestamp_millis_opt(millis as i64).single()
    }

    pub fn set_enum<E: EnumValue>(&mut self, key: impl Key, value: E) -> ChartResult<()> {
        self.set_value(key, value.value())
    }

    #[must_use]
    pub fn get_enum<E: EnumValue>(&self, key: impl Key, default: E) -> E {
        self.get(key)
            .and_then(NativeValue::as_str)
            .and_then(E::from_value)
            .unwrap_or(default)
    }

    pub fn set_object(&mut self, key: impl Key, value: NativeObject) -> ChartResult<()> {
        self.set_value(key, NativeValue::Object(value))
    }

    #[must_use]
    pub fn get_object(&self, key: impl Key) -> Option<&NativeObject> {
        self.get(key).and_then(NativeValue::as_object)
    }

    pub fn get_object_mut(&mut self, key: impl Key) -> Option<&mut NativeObject> {
        match self.get_mut(key) {
            Some(NativeValue::Object(object)) => Some(object),
            _ => None,
        }
    }

    pub fn set_array<T: Into<NativeValue>>(
        &mut self,
        key: impl Key,
        values: Vec<T>,
    ) -> ChartResult<()> {
        self.set_value(key, NativeValue::from(values))
    }

    #[must_use]
    pub fn get_array(&self, key: impl Key) -> &[NativeValue] {
        self.get(key).and_then(NativeValue::as_array).unwrap_or(&[])
    }

    #[must_use]
    pub fn get_f64_array(&self, key: impl Key) -> Vec<f64> {
        self.get_array(key)
            .iter()
            .filter_map(NativeValue::as_f64)
            .collect()
    }

    #[must_use]
    pub fn get_i32_array(&self, key: impl Key) -> Vec<i32> {
        self.get_array(key)
            .iter()
            .filter_map(NativeValue::as_f64)
            .map(|value| value as i32)
            .collect()
    }

    #[must_use]
    pub fn get_string_array(&self, key: impl Key) -> Vec<String> {
        self.get_array(key)
            .iter()
            .filter_map(NativeValue::as_str)
            .map(str::to_owned)
            .collect()
    }

    #[must_use]
    pub fn get_enum_array<E: EnumValue>(&self, key: impl Key) -> Vec<E> {
        self.get_array(key)
            .iter()
            .filter_map(NativeValue::as_str)
            .filter_map(E::from_value)
            .collect()
    }

    #[must_use]
    pub fn get_object_array(&self, key: impl Key) -> Vec<&NativeObject> {
        self.get_array(key)
            .iter()
            .filter_map(NativeValue::as_object)
            .collect()
    }

    /// Stores one value as a scalar and several as an array. An empty slice
    /// removes the property.
    pub fn set_value_or_array<T: Into<NativeValue> + Clone>(
        &mut self,
        key: impl Key,
        values: &[T],
    ) -> ChartResult<()> {
        match values {
            [] => {
                check_key(&key)?;
                self.remove(key);
                Ok(())
            }
            [single] => self.set_value(key, single.clone()),
            many => self.set_array(key, many.to_vec()),
        }
    }

    /// Scalar as a one-element list, array elements as they are, nothing otherwise.
    #[must_use]
    pub fn value_or_array(&self, key: impl Key) -> Vec<&NativeValue> {
        match self.get(key) {
            Some(NativeValue::Array(values)) => values.iter().collect(),
            Some(NativeValue::Null) | None => Vec::new(),
            Some(value) => vec![value],
        }
    }

    #[must_use]
    pub fn get_f64_value_or_array(&self, key: impl Key, default: f64) -> Vec<f64> {
        match self.type_of(&key) {
            ObjectType::Number => vec![self.get_f64(key, default)],
            ObjectType::Array => self.get_f64_array(key),
            _ => vec![default],
        }
    }

    #[must_use]
    pub fn get_i32_value_or_array(&self, key: impl Key, default: i32) -> Vec<i32> {
        match self.type_of(&key) {
            ObjectType::Number => vec![self.get_i32(key, default)],
            ObjectType::Array => self.get_i32_array(key),
            _ => vec![default],
        }
    }

    #[must_use]
    pub fn get_string_value_or_array(&self, key: impl Key, default: &str) -> Vec<String> {
        match self.type_of(&key) {
            ObjectType::String => vec![self.get_string(key, default)],
            ObjectType::Array => self.get_string_array(key),
            _ => vec![default.to_owned()],
        }
    }

    #[must_use]
    pub fn get_enum_value_or_array<E: EnumValue>(&self, key: impl Key, default: E) -> Vec<E> {
        match self.type_of(&key) {
            ObjectType::String => vec![self.get_enum(key, default)],
            ObjectType::Array => self.get_enum_array(key),
            _ => vec![default],
        }
    }
}
