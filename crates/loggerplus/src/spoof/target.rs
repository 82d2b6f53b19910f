//! Spoofable type and object stand-ins

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use super::traits::{AccessPolicy, AttrError, AttrMap, AttrResult, DefaultAccess, DenyAccess};

/// A named type stand-in whose attribute access routes through a swappable
/// policy
///
/// The attribute table is seeded with a `name` entry so default semantics
/// can answer the most basic reflection question. Intended for
/// single-threaded test use; the policy slot uses a non-poisoning lock so a
/// panic mid-scope cannot wedge restoration.
pub struct TypeObject {
    name: String,
    policy: Mutex<Arc<dyn AccessPolicy>>,
    attrs: Mutex<AttrMap>,
}

impl TypeObject {
    /// A type with default access semantics
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Self::with_policy(name, Arc::new(DefaultAccess))
    }

    /// A type that refuses every attribute access until spoofed
    pub fn faulty(name: impl Into<String>) -> Arc<Self> {
        Self::with_policy(name, Arc::new(DenyAccess))
    }

    fn with_policy(name: impl Into<String>, policy: Arc<dyn AccessPolicy>) -> Arc<Self> {
        let name = name.into();
        let mut attrs = AttrMap::new();
        attrs.insert("name".to_string(), Value::String(name.clone()));
        Arc::new(Self {
            name,
            policy: Mutex::new(policy),
            attrs: Mutex::new(attrs),
        })
    }

    /// Read an attribute through the current policy
    pub fn get(&self, name: &str) -> AttrResult<Value> {
        let policy = self.policy.lock().clone();
        let attrs = self.attrs.lock();
        policy.get(&self.name, &attrs, name)
    }

    /// Write an attribute through the current policy
    pub fn set(&self, name: &str, value: Value) -> AttrResult<()> {
        let policy = self.policy.lock().clone();
        let mut attrs = self.attrs.lock();
        policy.set(&self.name, &mut attrs, name, value)
    }

    /// The type's name, read without consulting the policy
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the table directly, bypassing the policy
    pub(super) fn raw_get(&self, name: &str) -> Option<Value> {
        self.attrs.lock().get(name).cloned()
    }

    pub(super) fn swap_policy(&self, policy: Arc<dyn AccessPolicy>) -> Arc<dyn AccessPolicy> {
        std::mem::replace(&mut *self.policy.lock(), policy)
    }
}

/// An object stand-in: its own attribute table and policy, plus the type it
/// belongs to
pub struct Instance {
    ty: Arc<TypeObject>,
    label: String,
    policy: Mutex<Arc<dyn AccessPolicy>>,
    attrs: Mutex<AttrMap>,
}

impl Instance {
    /// An instance with default access semantics
    pub fn new(ty: Arc<TypeObject>) -> Self {
        Self::with_policy(ty, Arc::new(DefaultAccess))
    }

    /// An instance that refuses every attribute access until spoofed
    pub fn faulty(ty: Arc<TypeObject>) -> Self {
        Self::with_policy(ty, Arc::new(DenyAccess))
    }

    fn with_policy(ty: Arc<TypeObject>, policy: Arc<dyn AccessPolicy>) -> Self {
        let label = format!("{} instance", ty.name());
        Self {
            ty,
            label,
            policy: Mutex::new(policy),
            attrs: Mutex::new(AttrMap::new()),
        }
    }

    /// Read an attribute through the instance policy
    ///
    /// A `Missing` result falls back to the type's table, read directly.
    /// The type's own policy does not gate instance lookups.
    pub fn get(&self, name: &str) -> AttrResult<Value> {
        let policy = self.policy.lock().clone();
        let result = {
            let attrs = self.attrs.lock();
            policy.get(&self.label, &attrs, name)
        };
        match result {
            Err(AttrError::Missing { .. }) => {
                self.ty.raw_get(name).ok_or_else(|| AttrError::Missing {
                    target: self.label.clone(),
                    name: name.to_string(),
                })
            }
            other => other,
        }
    }

    /// Write an attribute on the instance's own table through the policy
    pub fn set(&self, name: &str, value: Value) -> AttrResult<()> {
        let policy = self.policy.lock().clone();
        let mut attrs = self.attrs.lock();
        policy.set(&self.label, &mut attrs, name, value)
    }

    /// The instance's type, read without consulting any policy
    pub fn ty(&self) -> &Arc<TypeObject> {
        &self.ty
    }

    pub(super) fn swap_policy(&self, policy: Arc<dyn AccessPolicy>) -> Arc<dyn AccessPolicy> {
        std::mem::replace(&mut *self.policy.lock(), policy)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_type_name_attribute() {
        let ty = TypeObject::new("Widget");
        assert_eq!(ty.get("name").unwrap(), json!("Widget"));
        assert_eq!(ty.name(), "Widget");
    }

    #[test]
    fn test_type_set_then_get() {
        let ty = TypeObject::new("Widget");
        ty.set("size", json!(3)).unwrap();
        assert_eq!(ty.get("size").unwrap(), json!(3));
    }

    #[test]
    fn test_faulty_type_blocks_but_name_bypass_works() {
        let ty = TypeObject::faulty("Widget");
        assert!(matches!(ty.get("name"), Err(AttrError::GetBlocked { .. })));
        assert!(matches!(
            ty.set("size", json!(3)),
            Err(AttrError::SetBlocked { .. })
        ));
        // The direct accessor does not go through the policy
        assert_eq!(ty.name(), "Widget");
    }

    #[test]
    fn test_instance_own_attributes() {
        let obj = Instance::new(TypeObject::new("Widget"));
        obj.set("color", json!("red")).unwrap();
        assert_eq!(obj.get("color").unwrap(), json!("red"));
    }

    #[test]
    fn test_instance_falls_back_to_type_table() {
        let ty = TypeObject::new("Widget");
        ty.set("kind", json!("gadget")).unwrap();
        let obj = Instance::new(ty);
        assert_eq!(obj.get("kind").unwrap(), json!("gadget"));
        // Own attributes shadow the type's
        obj.set("kind", json!("gizmo")).unwrap();
        assert_eq!(obj.get("kind").unwrap(), json!("gizmo"));
    }

    #[test]
    fn test_instance_fallback_ignores_type_policy() {
        // A faulty type still serves instance lookups from its table.
        let obj = Instance::new(TypeObject::faulty("Widget"));
        assert_eq!(obj.get("name").unwrap(), json!("Widget"));
    }

    #[test]
    fn test_instance_missing_attribute() {
        let obj = Instance::new(TypeObject::new("Widget"));
        let err = obj.get("color").unwrap_err();
        assert_eq!(
            err,
            AttrError::Missing {
                target: "Widget instance".to_string(),
                name: "color".to_string(),
            }
        );
    }

    #[test]
    fn test_faulty_instance_blocks() {
        let obj = Instance::faulty(TypeObject::new("Widget"));
        assert!(matches!(obj.get("name"), Err(AttrError::GetBlocked { .. })));
        assert!(matches!(
            obj.set("color", json!("red")),
            Err(AttrError::SetBlocked { .. })
        ));
        // The type accessor bypasses the instance policy
        assert_eq!(obj.ty().name(), "Widget");
    }
}
