//! Rendering-engine interface - the narrow seam the core depends on
//!
//! The engine is a black box. The core only requires that it:
//! - drives [`Component::render`] with a props map, and re-renders after a
//!   scheduled redraw;
//! - hands a [`Register`] prop down to the child it belongs to, calling it
//!   with the child's instance on mount and with `None` on unmount;
//! - spreads props onto children verbatim.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::instance::TargetHandle;

/// One prop passed into a component.
#[derive(Clone)]
pub enum Prop {
    /// Plain data, forwarded verbatim.
    Value(Value),

    /// Registration callback injected for a target slot.
    Register(Register),
}

impl Prop {
    /// Plain data payload, if this is a value prop
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Prop::Value(value) => Some(value),
            Prop::Register(_) => None,
        }
    }

    /// Registration callback, if this is an injected binding
    pub fn as_register(&self) -> Option<&Register> {
        match self {
            Prop::Register(register) => Some(register),
            Prop::Value(_) => None,
        }
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prop::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Prop::Register(_) => f.write_str("Register(..)"),
        }
    }
}

/// Props map: prop name -> prop.
pub type Props = FxHashMap<String, Prop>;

/// Minimal contract the rendering engine drives.
pub trait Component {
    fn render(&mut self, props: &Props);
}

/// Capability for requesting a redraw after a binding-store write.
///
/// Supplied by the rendering-engine adapter; the core never blocks on it.
pub trait RenderScheduler {
    fn schedule_render(&self);
}

/// Registration callback for one target slot.
///
/// Referentially stable for the wrapper instance's lifetime: cloning shares
/// the same underlying callback, and [`Register::same`] exposes pointer
/// identity so children tracking mount-effect dependencies by reference
/// equality are never forced to re-register on re-render.
#[derive(Clone)]
pub struct Register {
    callback: Rc<dyn Fn(Option<TargetHandle>)>,
}

impl Register {
    pub(crate) fn new(callback: impl Fn(Option<TargetHandle>) + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Bind (`Some`) or clear (`None`) the target slot this callback owns.
    pub fn call(&self, instance: Option<TargetHandle>) {
        (self.callback)(instance);
    }

    /// Pointer identity: true when both registers share one callback.
    pub fn same(&self, other: &Register) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Register(..)")
    }
}
