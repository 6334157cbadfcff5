//! Binding store - per-wrapper target slots with re-render scheduling
//!
//! One slot per target name, unbound until the rendered tree registers an
//! instance. Writes go through [`TargetStore::bind`] only, and every write
//! schedules a redraw so proxies created before the child mounted pick up
//! the binding on the next render.
//!
//! Single-owner and single-threaded: `RefCell`, no locks. Reads clone the
//! handle and release the borrow before anything user-supplied runs, so
//! proxy calls may re-enter the store freely.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::component::RenderScheduler;
use crate::instance::TargetHandle;

/// Slot storage for one wrapper instance.
pub struct TargetStore {
    /// target name -> currently bound instance (None = unbound)
    slots: RefCell<FxHashMap<String, Option<TargetHandle>>>,

    /// Redraw capability supplied by the engine adapter
    scheduler: Rc<dyn RenderScheduler>,
}

impl TargetStore {
    /// Create a store with one unbound slot per target name.
    pub fn new(
        targets: impl IntoIterator<Item = String>,
        scheduler: Rc<dyn RenderScheduler>,
    ) -> Self {
        let slots = targets.into_iter().map(|name| (name, None)).collect();
        Self {
            slots: RefCell::new(slots),
            scheduler,
        }
    }

    /// Bind (`Some`) or clear (`None`) a target slot, then schedule a render.
    ///
    /// Sole mutation path into the store; driven exclusively by the
    /// registration callbacks the wrapper hands to the rendered tree.
    pub fn bind(&self, target: &str, instance: Option<TargetHandle>) {
        let bound = instance.is_some();
        self.slots
            .borrow_mut()
            .insert(target.to_string(), instance);
        debug!(target_name = target, bound, "target slot updated");
        self.scheduler.schedule_render();
    }

    /// Current binding for a target, read at call time.
    pub fn get(&self, target: &str) -> Option<TargetHandle> {
        self.slots.borrow().get(target).cloned().flatten()
    }

    /// True when the target currently has a registered instance.
    pub fn is_bound(&self, target: &str) -> bool {
        self.get(target).is_some()
    }

    /// Names of all slots, bound or not.
    pub fn targets(&self) -> Vec<String> {
        self.slots.borrow().keys().cloned().collect()
    }
}
