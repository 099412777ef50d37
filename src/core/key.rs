use crate::error::{ChartError, ChartResult};

/// Name of a property stored in a [`NativeObject`](super::NativeObject).
pub trait Key {
    fn value(&self) -> &str;

    /// A key is usable only when its name is not empty.
    fn is_valid(&self) -> bool {
        !self.value().is_empty()
    }
}

/// Key enumeration whose variants are persisted by their string value.
pub trait EnumValue: Key + Copy + Sized + 'static {
    fn values() -> &'static [Self];

    #[must_use]
    fn from_value(value: &str) -> Option<Self> {
        Self::values()
            .iter()
            .copied()
            .find(|candidate| candidate.value() == value)
    }
}

impl Key for str {
    fn value(&self) -> &str {
        self
    }
}

impl Key for String {
    fn value(&self) -> &str {
        self.as_str()
    }
}

impl<K: Key + ?Sized> Key for &K {
    fn value(&self) -> &str {
        (**self).value()
    }
}

/// Free-form key, used for plugin ids and dynamically built names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyKey(String);

impl PropertyKey {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Key for PropertyKey {
    fn value(&self) -> &str {
        &self.0
    }
}

/// Returns the key name or fails when the key is empty.
pub fn check_key<K: Key + ?Sized>(key: &K) -> ChartResult<&str> {
    if key.is_valid() {
        Ok(key.value())
    } else {
        Err(ChartError::InvalidKey(key.value().to_owned()))
    }
}

/// Declares a property or option enumeration backed by string values.
///
/// Every generated enum implements [`Key`], [`EnumValue`], `Display`,
/// conversion into a native string value and a serde representation that
/// uses the string value.
macro_rules! key_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $crate::core::key::Key for $name {
            fn value(&self) -> &str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl $crate::core::key::EnumValue for $name {
            fn values() -> &'static [Self] {
                &[$(Self::$variant),+]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::key::Key::value(self))
            }
        }

        impl ::std::convert::From<$name> for $crate::core::native::NativeValue {
            fn from(value: $name) -> Self {
                Self::String($crate::core::key::Key::value(&value).to_owned())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::core::key::Key::value(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::core::key::EnumValue>::from_value(&raw).ok_or_else(|| {
                    ::serde::de::Error::custom(format!(
                        "unknown {} value `{raw}`",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

pub(crate) use key_enum;

#[cfg(test)]
mod tests {
    use super::*;

    key_enum! {
        enum Sample {
            First => "first",
            Second => "second",
        }
    }

    #[test]
    fn enum_values_parse_back() {
        assert_eq!(Sample::from_value("second"), Some(Sample::Second));
        assert_eq!(Sample::from_value("third"), None);
        assert_eq!(Sample::First.to_string(), "first");
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(check_key("").is_err());
        assert_eq!(check_key("label").expect("valid key"), "label");
        assert!(PropertyKey::new("datalabels").is_valid());
    }
}
