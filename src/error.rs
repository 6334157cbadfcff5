//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
#[derive(Error, Debug)]
pub enum WormholeError {
    // ─────────────────────────────────────────────────────────────
    // Dispatch errors (WORM-010 to WORM-012)
    // ─────────────────────────────────────────────────────────────

    #[error("WORM-010: Target '{target}' is not bound; cannot forward '{method}'")]
    UnboundTarget { target: String, method: String },

    #[error("WORM-011: No method '{method}' is exposed on this wrapper")]
    UnknownMethod { method: String },

    #[error("WORM-012: Bound instance has no method '{method}'")]
    MissingTargetMethod { method: String },

    // ─────────────────────────────────────────────────────────────
    // Spec errors (WORM-020)
    // ─────────────────────────────────────────────────────────────

    #[error("WORM-020: Method spec parse error: {0}")]
    SpecParse(#[from] serde_yaml::Error),

    /// Error raised by the target method itself; forwarded untouched.
    #[error(transparent)]
    Method(#[from] anyhow::Error),
}

impl FixSuggestion for WormholeError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            WormholeError::UnboundTarget { .. } => {
                Some("Ensure a child passes its instance to the injected registration callback before calling proxy methods")
            }
            WormholeError::UnknownMethod { .. } => {
                Some("Declare the method (or an alias exposing it) in the wrapper's method spec")
            }
            WormholeError::MissingTargetMethod { .. } => {
                Some("Register an instance that implements every method name the spec references")
            }
            WormholeError::SpecParse(_) => {
                Some("Check YAML syntax: a spec is a name, a {name, as} alias, a list, or a target map")
            }
            WormholeError::Method(_) => None,
        }
    }
}
