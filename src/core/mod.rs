pub mod container;
pub mod key;
pub mod native;
pub mod types;

pub(crate) use key::key_enum;
pub use key::{EnumValue, Key, PropertyKey, check_key};
pub use native::{FUNCTION_PLACEHOLDER, INTERNAL_KEY_PREFIX, NativeObject, NativeValue, ObjectType};
pub use types::ChartType;
