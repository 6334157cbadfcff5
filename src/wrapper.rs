//! Wrapper factory and binding runtime
//!
//! [`Wormhole`] closes over one canonical method map and wraps any number of
//! component instances. Each [`Wrapped`] owns a binding store, one stable
//! registration callback per target, and a route table from exposed method
//! name to (target, original name).
//!
//! Data flow:
//! ```text
//! MethodSpec -> normalize -> Wormhole::wrap
//!                                 |
//!               render: props + injected Register props -> wrapped tree
//!                                 |
//!               tree registers instances -> TargetStore
//!                                 |
//!               Wrapped::call -> route -> bound instance method
//! ```

use std::rc::Rc;

use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::debug;

use crate::component::{Component, Prop, Props, Register, RenderScheduler};
use crate::error::WormholeError;
use crate::normalize::{normalize, MethodMap};
use crate::spec::MethodSpec;
use crate::store::TargetStore;

/// Route from an exposed method name to its target slot and original name.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProxyRoute {
    target: String,
    method: String,
}

/// Wrapper factory. Holds only the canonical method map, so one factory may
/// wrap any number of distinct component types.
#[derive(Debug, Clone)]
pub struct Wormhole {
    methods: MethodMap,
}

impl Wormhole {
    /// Build a factory from a raw method spec in any accepted shape.
    pub fn new(spec: impl Into<MethodSpec>) -> Self {
        Self {
            methods: normalize(spec.into()),
        }
    }

    /// Build a factory from a YAML spec document.
    pub fn from_yaml(doc: &str) -> Result<Self, WormholeError> {
        let spec: MethodSpec = serde_yaml::from_str(doc)?;
        Ok(Self::new(spec))
    }

    /// Canonical target -> alias-list mapping this factory closes over.
    pub fn methods(&self) -> &MethodMap {
        &self.methods
    }

    /// Wrap one mounted component instance.
    ///
    /// Builds the slot store (every spec'd target gets a slot, aliases or
    /// not), one referentially-stable [`Register`] per target, and the proxy
    /// route table. Exposed-name collisions resolve last-definition-wins,
    /// mirroring property-assignment semantics.
    pub fn wrap<C: Component>(
        &self,
        component: C,
        scheduler: Rc<dyn RenderScheduler>,
    ) -> Wrapped<C> {
        let store = Rc::new(TargetStore::new(self.methods.keys().cloned(), scheduler));

        let mut registers: FxHashMap<String, Register> = FxHashMap::default();
        for target in self.methods.keys() {
            let slots = Rc::clone(&store);
            let slot_name = target.clone();
            registers.insert(
                target.clone(),
                Register::new(move |instance| slots.bind(&slot_name, instance)),
            );
        }

        let mut routes: FxHashMap<String, ProxyRoute> = FxHashMap::default();
        for (target, aliases) in &self.methods {
            for alias in aliases {
                routes.insert(
                    alias.exposed_as.clone(),
                    ProxyRoute {
                        target: target.clone(),
                        method: alias.name.clone(),
                    },
                );
            }
        }

        Wrapped {
            inner: component,
            store,
            registers,
            routes,
        }
    }
}

/// One wrapper instance: the wrapped component plus its binding runtime.
///
/// Lives exactly as long as one mounted tree instance; the engine drives its
/// [`Component::render`] and the tree drives its registration callbacks.
pub struct Wrapped<C> {
    inner: C,
    store: Rc<TargetStore>,
    registers: FxHashMap<String, Register>,
    routes: FxHashMap<String, ProxyRoute>,
}

impl<C> Wrapped<C> {
    /// Forward a proxied call to the currently bound instance.
    ///
    /// Single dispatch entry point: arguments, return value, and errors pass
    /// through the target method exactly. Fails with
    /// [`WormholeError::UnboundTarget`] when the slot is empty; never a
    /// silent no-op, since callers depend on return values.
    pub fn call(&self, method: &str, args: &[Value]) -> Result<Value, WormholeError> {
        let route = self
            .routes
            .get(method)
            .ok_or_else(|| WormholeError::UnknownMethod {
                method: method.to_string(),
            })?;
        let instance =
            self.store
                .get(&route.target)
                .ok_or_else(|| WormholeError::UnboundTarget {
                    target: route.target.clone(),
                    method: method.to_string(),
                })?;
        debug!(
            method,
            target_name = %route.target,
            forwards = %route.method,
            "forwarding proxy call"
        );
        instance.call(&route.method, args)
    }

    /// True when some alias exposes `method` on this wrapper.
    pub fn exposes(&self, method: &str) -> bool {
        self.routes.contains_key(method)
    }

    /// The stable registration callback for a target, if the spec names it.
    pub fn register(&self, target: &str) -> Option<Register> {
        self.registers.get(target).cloned()
    }

    /// Target names this wrapper injects bindings for.
    pub fn targets(&self) -> Vec<String> {
        self.store.targets()
    }

    /// True when the target currently has a registered instance.
    pub fn is_bound(&self, target: &str) -> bool {
        self.store.is_bound(target)
    }

    /// The wrapped component.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Component> Component for Wrapped<C> {
    /// Forward every incoming prop unchanged, plus the registration
    /// callbacks merged in under their target names. An incoming prop named
    /// like a target is overwritten: injected bindings take precedence.
    fn render(&mut self, props: &Props) {
        let mut merged = props.clone();
        for (target, register) in &self.registers {
            merged.insert(target.clone(), Prop::Register(register.clone()));
        }
        self.inner.render(&merged);
    }
}
