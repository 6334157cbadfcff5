//! Method-spec normalizer - raw shapes to canonical mapping
//!
//! Pure and total: every accepted shape expands to target -> alias list,
//! and every unrecognized shape degrades to an empty mapping so optional or
//! conditionally-built specs never blow up downstream.
//!
//! Data flow:
//! ```text
//! YAML/JSON/builder -> MethodSpec (spec)
//!                           |
//!                       normalize
//!                           |
//!                       MethodMap -> Wormhole (wrapper)
//! ```

use rustc_hash::FxHashMap;

use crate::spec::{MethodAlias, MethodEntry, MethodSpec, DEFAULT_TARGET};

/// Canonical mapping: target name -> ordered alias list.
///
/// Target key order is irrelevant; alias list order is preserved and never
/// deduplicated (the same method may be re-aliased several times).
pub type MethodMap = FxHashMap<String, Vec<MethodAlias>>;

/// Normalize a raw method spec into the canonical mapping.
///
/// Scalar and list forms bind to [`DEFAULT_TARGET`]; map forms bind each
/// value to its own key; anything else yields an empty map.
pub fn normalize(spec: MethodSpec) -> MethodMap {
    match spec {
        MethodSpec::Name(name) => default_target(vec![MethodAlias::identity(name)]),
        MethodSpec::Alias(alias) => default_target(vec![alias]),
        MethodSpec::List(entries) => {
            default_target(entries.into_iter().map(MethodEntry::into_alias).collect())
        }
        MethodSpec::Map(map) => map
            .into_iter()
            .map(|(target, methods)| (target, methods.into_aliases()))
            .collect(),
        MethodSpec::Other(_) => MethodMap::default(),
    }
}

fn default_target(aliases: Vec<MethodAlias>) -> MethodMap {
    let mut map = MethodMap::default();
    map.insert(DEFAULT_TARGET.to_string(), aliases);
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{alias, TargetMethods};
    use serde_json::json;

    #[test]
    fn bare_name_binds_to_default_target() {
        let map = normalize("focus".into());
        assert_eq!(
            map.get(DEFAULT_TARGET),
            Some(&vec![MethodAlias::identity("focus")])
        );
    }

    #[test]
    fn bare_name_equals_identity_alias_list() {
        let from_name = normalize("foo".into());
        let from_list = normalize(vec![alias("foo", "foo")].into());
        assert_eq!(from_name, from_list);
    }

    #[test]
    fn bare_alias_binds_to_default_target() {
        let map = normalize(alias("increment", "bump").into());
        assert_eq!(map.get(DEFAULT_TARGET), Some(&vec![alias("increment", "bump")]));
    }

    #[test]
    fn list_expands_names_and_passes_aliases_through() {
        let map = normalize(
            MethodSpec::List(vec!["sum".into(), alias("increment", "bump").into()]),
        );
        assert_eq!(
            map.get(DEFAULT_TARGET),
            Some(&vec![MethodAlias::identity("sum"), alias("increment", "bump")])
        );
    }

    #[test]
    fn list_order_and_duplicates_preserved() {
        let map = normalize(
            MethodSpec::List(vec![
                alias("increment", "retval1").into(),
                alias("increment", "retval2").into(),
                alias("increment", "retval3").into(),
            ]),
        );
        let aliases = map.get(DEFAULT_TARGET).unwrap();
        assert_eq!(aliases.len(), 3);
        assert!(aliases.iter().all(|a| a.name == "increment"));
    }

    #[test]
    fn map_binds_each_value_to_its_key() {
        let mut raw = rustc_hash::FxHashMap::default();
        raw.insert(
            "target".to_string(),
            TargetMethods::List(vec!["sum".into(), alias("increment", "bump").into()]),
        );
        raw.insert("panel".to_string(), TargetMethods::Name("focus".to_string()));

        let map = normalize(raw.into());
        assert_eq!(
            map.get("target"),
            Some(&vec![MethodAlias::identity("sum"), alias("increment", "bump")])
        );
        assert_eq!(map.get("panel"), Some(&vec![MethodAlias::identity("focus")]));
    }

    #[test]
    fn empty_map_yields_empty_mapping() {
        let map = normalize(MethodSpec::Map(Default::default()));
        assert!(map.is_empty());
    }

    #[test]
    fn map_value_with_empty_list_keeps_the_target() {
        let mut raw = rustc_hash::FxHashMap::default();
        raw.insert("panel".to_string(), TargetMethods::List(vec![]));

        let map = normalize(raw.into());
        assert_eq!(map.get("panel"), Some(&vec![]));
    }

    #[test]
    fn unrecognized_shapes_yield_empty_mapping() {
        assert!(normalize(MethodSpec::from(json!(null))).is_empty());
        assert!(normalize(MethodSpec::from(json!(42))).is_empty());
        assert!(normalize(MethodSpec::from(json!(true))).is_empty());
    }

    #[test]
    fn json_document_normalizes_end_to_end() {
        let spec = MethodSpec::from(json!({
            "input": ["focus", "blur", "select", "click"],
            "panel": {"name": "refresh", "as": "redraw"},
        }));
        let map = normalize(spec);
        assert_eq!(map.get("input").unwrap().len(), 4);
        assert_eq!(map.get("panel"), Some(&vec![alias("refresh", "redraw")]));
    }
}
