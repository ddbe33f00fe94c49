//! Local overrides supplied at one nesting level
//!
//! Overrides are either a literal partial mapping or a function of the
//! parent mapping. Both variants carry an identity (the `Arc` behind them)
//! which is what the resolver memoizes on.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::catalog::ComponentCatalog;
use super::component::ComponentKey;
use super::mapping::ComponentMapping;
use crate::error::OverrideError;

/// Shared override function: parent mapping in, partial mapping out.
pub type OverrideFn = Arc<dyn Fn(&ComponentMapping) -> ComponentMapping + Send + Sync>;

/// Local overrides for one scope
#[derive(Clone, Default)]
pub enum Overrides {
    /// No overrides at this level
    #[default]
    Absent,
    /// Literal partial mapping
    Mapping(ComponentMapping),
    /// Partial mapping derived from the parent
    Derive(OverrideFn),
}

impl Overrides {
    /// Wrap a function as a derived override
    pub fn derive<F>(f: F) -> Self
    where
        F: Fn(&ComponentMapping) -> ComponentMapping + Send + Sync + 'static,
    {
        Overrides::Derive(Arc::new(f))
    }

    /// True for `Absent` and for an empty literal mapping.
    ///
    /// A function is never considered empty before it is evaluated.
    pub fn is_empty(&self) -> bool {
        match self {
            Overrides::Absent => true,
            Overrides::Mapping(mapping) => mapping.is_empty(),
            Overrides::Derive(_) => false,
        }
    }

    /// Identity comparison used as memo key
    pub fn same_identity(&self, other: &Self) -> bool {
        match (self, other) {
            (Overrides::Absent, Overrides::Absent) => true,
            (Overrides::Mapping(a), Overrides::Mapping(b)) => a.ptr_eq(b),
            (Overrides::Derive(a), Overrides::Derive(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Build overrides from data declared by content authors.
    ///
    /// `null` means absent. An object maps component keys to catalog names.
    /// Anything else is a contract violation.
    pub fn from_json(value: &Value, catalog: &ComponentCatalog) -> Result<Self, OverrideError> {
        let object = match value {
            Value::Null => return Ok(Overrides::Absent),
            Value::Object(object) => object,
            other => {
                tracing::warn!(found = json_kind(other), "Rejected non-mapping overrides");
                return Err(OverrideError::ContractViolation {
                    found: json_kind(other).to_string(),
                });
            }
        };

        let mut builder = ComponentMapping::builder();
        for (key, name) in object {
            let key = ComponentKey::new(key.clone())?;
            let name = name.as_str().ok_or_else(|| OverrideError::ContractViolation {
                found: format!("{} for key '{}'", json_kind(name), key),
            })?;
            let component = catalog
                .get(name)
                .ok_or_else(|| OverrideError::UnknownComponent {
                    key: key.to_string(),
                    name: name.to_string(),
                })?;
            builder.insert(key, Arc::clone(component));
        }
        Ok(Overrides::Mapping(builder.build()))
    }
}

impl From<ComponentMapping> for Overrides {
    fn from(mapping: ComponentMapping) -> Self {
        Overrides::Mapping(mapping)
    }
}

impl From<Option<ComponentMapping>> for Overrides {
    fn from(mapping: Option<ComponentMapping>) -> Self {
        mapping.map_or(Overrides::Absent, Overrides::Mapping)
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overrides::Absent => f.write_str("Absent"),
            Overrides::Mapping(mapping) => f.debug_tuple("Mapping").field(mapping).finish(),
            Overrides::Derive(_) => f.write_str("Derive(<fn>)"),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::component::FnComponent;
    use serde_json::json;

    fn catalog() -> ComponentCatalog {
        ComponentCatalog::new()
            .with(FnComponent::shared("fancy-code", |p| format!("<pre>{}</pre>", p.children)))
            .with(FnComponent::shared("lead", |p| format!("<p class=\"lead\">{}</p>", p.children)))
    }

    #[test]
    fn test_null_is_absent() {
        let overrides = Overrides::from_json(&Value::Null, &catalog()).unwrap();
        assert!(matches!(overrides, Overrides::Absent));
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_object_resolves_catalog_names() {
        let catalog = catalog();
        let overrides =
            Overrides::from_json(&json!({"code": "fancy-code", "p": "lead"}), &catalog).unwrap();

        let Overrides::Mapping(mapping) = overrides else {
            panic!("expected literal mapping");
        };
        assert_eq!(mapping.len(), 2);
        assert!(Arc::ptr_eq(
            mapping.get(&ComponentKey::CODE).unwrap(),
            catalog.get("fancy-code").unwrap()
        ));
    }

    #[test]
    fn test_non_mapping_is_contract_violation() {
        for value in [json!(["code"]), json!("code"), json!(3), json!(true)] {
            let result = Overrides::from_json(&value, &catalog());
            assert!(
                matches!(result, Err(OverrideError::ContractViolation { .. })),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_string_component_name_is_contract_violation() {
        let result = Overrides::from_json(&json!({"code": 1}), &catalog());
        assert!(matches!(result, Err(OverrideError::ContractViolation { .. })));
    }

    #[test]
    fn test_unknown_component_name() {
        let result = Overrides::from_json(&json!({"code": "nope"}), &catalog());
        assert_eq!(
            result.unwrap_err(),
            OverrideError::UnknownComponent {
                key: "code".into(),
                name: "nope".into()
            }
        );
    }

    #[test]
    fn test_identity() {
        let mapping = ComponentMapping::empty();
        let a = Overrides::Mapping(mapping.clone());
        let b = Overrides::Mapping(mapping);
        let c = Overrides::Mapping(ComponentMapping::empty());
        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c));

        let f = Overrides::derive(|parent| parent.clone());
        assert!(f.same_identity(&f.clone()));
        assert!(!f.same_identity(&Overrides::derive(|parent| parent.clone())));
        assert!(Overrides::Absent.same_identity(&Overrides::Absent));
    }
}
