//! Named notification hooks
//!
//! A hook is a name mapped to an ordered list of listeners. Firing a hook
//! calls its listeners synchronously in registration order.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Hook listener function type
pub type Listener = Box<dyn FnMut() + Send>;

/// Registry of named hooks and their listeners
pub struct HookRegistry {
    hooks: FxHashMap<&'static str, SmallVec<[Listener; 2]>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self {
            hooks: FxHashMap::default(),
        }
    }

    /// Create a registry with the given hook names declared up front
    pub fn with_hooks(names: &[&'static str]) -> Self {
        let mut registry = Self::new();
        for name in names {
            registry.declare(name);
        }
        registry
    }

    /// Declare a hook with no listeners yet
    pub fn declare(&mut self, name: &'static str) {
        self.hooks.entry(name).or_default();
    }

    /// Register a listener for a hook
    pub fn register<F>(&mut self, name: &'static str, listener: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.hooks.entry(name).or_default().push(Box::new(listener));
    }

    /// Number of listeners registered for a hook
    pub fn listener_count(&self, name: &str) -> usize {
        self.hooks.get(name).map_or(0, |listeners| listeners.len())
    }

    /// Invoke every listener of a hook, returning how many ran
    pub fn fire(&mut self, name: &str) -> usize {
        let Some(listeners) = self.hooks.get_mut(name) else {
            return 0;
        };

        tracing::debug!(hook = name, listeners = listeners.len(), "firing hook");
        for listener in listeners.iter_mut() {
            listener();
        }
        listeners.len()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
