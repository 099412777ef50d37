//! Scriptable options: user callbacks resolved at chart time.

pub mod context;
pub mod proxy;
pub mod scriptable;

pub use context::{ContextType, ScriptableContext};
pub use proxy::CallbackProxy;
pub use scriptable::{
    ColorCallback, Scriptable, ScriptableColor, color_value, option_value, option_value_as_color,
    scriptable,
};
