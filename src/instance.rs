//! Target instance capability - named-method dispatch
//!
//! The wrapper never sees concrete component types; it forwards calls
//! through this trait against whatever instance is currently registered.

use std::rc::Rc;

use serde_json::Value;

use crate::error::WormholeError;

/// A live component/element instance that proxy methods forward to.
///
/// Implementors dispatch on the method name and must cover every original
/// name the wrapper's spec references; unknown names should return
/// [`WormholeError::MissingTargetMethod`]. Any other error returned here
/// reaches the proxy caller unchanged.
pub trait TargetInstance {
    /// Invoke `method` with `args` and return its result.
    fn call(&self, method: &str, args: &[Value]) -> Result<Value, WormholeError>;
}

/// Shared reference to a registered instance.
///
/// `Rc`, not `Arc`: all binding happens on the rendering engine's
/// single-threaded callback queue.
pub type TargetHandle = Rc<dyn TargetInstance>;

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl TargetInstance for Echo {
        fn call(&self, method: &str, args: &[Value]) -> Result<Value, WormholeError> {
            match method {
                "echo" => Ok(Value::Array(args.to_vec())),
                other => Err(WormholeError::MissingTargetMethod {
                    method: other.to_string(),
                }),
            }
        }
    }

    #[test]
    fn dispatches_by_name() {
        let handle: TargetHandle = Rc::new(Echo);
        let out = handle.call("echo", &[serde_json::json!(1)]).unwrap();
        assert_eq!(out, serde_json::json!([1]));
    }

    #[test]
    fn unknown_name_is_missing_method() {
        let handle: TargetHandle = Rc::new(Echo);
        let err = handle.call("nope", &[]).unwrap_err();
        assert!(matches!(err, WormholeError::MissingTargetMethod { .. }));
    }
}
