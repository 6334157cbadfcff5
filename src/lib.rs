//! Wormhole - method forwarding across a wrapped component tree
//!
//! Declare which methods a wrapper exposes and which named target inside the
//! wrapped tree each one forwards to; the wrapper injects a registration
//! callback per target so descendants can bind themselves, and proxies calls
//! (arguments, return values, and errors untouched) to whatever instance is
//! currently bound.

pub mod component;
pub mod error;
pub mod instance;
pub mod normalize;
pub mod spec;
pub mod store;
pub mod wrapper;

pub use component::{Component, Prop, Props, Register, RenderScheduler};
pub use error::{FixSuggestion, WormholeError};
pub use instance::{TargetHandle, TargetInstance};
pub use normalize::{normalize, MethodMap};
pub use spec::{alias, MethodAlias, MethodEntry, MethodSpec, TargetMethods, DEFAULT_TARGET};
pub use store::TargetStore;
pub use wrapper::{Wormhole, Wrapped};
