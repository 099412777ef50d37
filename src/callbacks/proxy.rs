use std::fmt;
use std::sync::Arc;

use crate::callbacks::context::ScriptableContext;
use crate::core::NativeValue;

type ProxyFunction = dyn Fn(&ScriptableContext<'_>) -> NativeValue + Send + Sync;

/// Function value stored in a native object in place of a static option.
///
/// Clones share the same function; equality is identity.
#[derive(Clone)]
pub struct CallbackProxy {
    function: Arc<ProxyFunction>,
}

impl CallbackProxy {
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&ScriptableContext<'_>) -> NativeValue + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    #[must_use]
    pub fn invoke(&self, context: &ScriptableContext<'_>) -> NativeValue {
        (self.function)(context)
    }
}

impl fmt::Debug for CallbackProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackProxy").finish_non_exhaustive()
    }
}

impl PartialEq for CallbackProxy {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.function), Arc::as_ptr(&other.function))
    }
}
