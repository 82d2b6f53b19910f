//! RAII guards that suspend faulty access behavior for a scope

use std::sync::Arc;

use super::target::{Instance, TypeObject};
use super::traits::{AccessPolicy, DefaultAccess};

/// Restores default attribute semantics on a type for the guard's lifetime
///
/// Construction swaps [`DefaultAccess`] into the type's policy slot and
/// saves the previous policy; dropping the guard puts it back. Drop runs on
/// every exit path, including panic unwind, so the override cannot leak
/// past its scope.
pub struct SpoofTypeAccess<'a> {
    target: &'a TypeObject,
    saved: Option<Arc<dyn AccessPolicy>>,
}

impl<'a> SpoofTypeAccess<'a> {
    pub fn new(target: &'a TypeObject) -> Self {
        let saved = target.swap_policy(Arc::new(DefaultAccess));
        Self {
            target,
            saved: Some(saved),
        }
    }
}

impl Drop for SpoofTypeAccess<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.target.swap_policy(saved);
        }
    }
}

/// Restores default attribute semantics on an instance for the guard's
/// lifetime
///
/// See [`SpoofTypeAccess`]; this is the same guard for [`Instance`]
/// targets. Spoofing an instance leaves its type's policy untouched.
pub struct SpoofObjectAccess<'a> {
    target: &'a Instance,
    saved: Option<Arc<dyn AccessPolicy>>,
}

impl<'a> SpoofObjectAccess<'a> {
    pub fn new(target: &'a Instance) -> Self {
        let saved = target.swap_policy(Arc::new(DefaultAccess));
        Self {
            target,
            saved: Some(saved),
        }
    }
}

impl Drop for SpoofObjectAccess<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.target.swap_policy(saved);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::spoof::AttrError;

    fn faulty_pair() -> (Arc<TypeObject>, Instance) {
        let ty = TypeObject::faulty("FaultyObject");
        let obj = Instance::faulty(ty.clone());
        (ty, obj)
    }

    #[test]
    fn test_type_access_blocked_outside_scope() {
        let ty = TypeObject::faulty("FaultyObject");
        assert!(matches!(ty.get("name"), Err(AttrError::GetBlocked { .. })));
        assert!(matches!(
            ty.set("faulty", json!("x")),
            Err(AttrError::SetBlocked { .. })
        ));
    }

    #[test]
    fn test_type_access_allowed_inside_scope() {
        let ty = TypeObject::faulty("FaultyObject");
        {
            let _spoof = SpoofTypeAccess::new(&ty);
            assert_eq!(
                ty.get("name").unwrap(),
                Value::String("FaultyObject".to_string())
            );
        }
        // Back to blocked once the scope ends
        assert!(matches!(ty.get("name"), Err(AttrError::GetBlocked { .. })));
    }

    #[test]
    fn test_type_set_roundtrip_across_scopes() {
        let ty = TypeObject::faulty("FaultyMeta");
        {
            let _spoof = SpoofTypeAccess::new(&ty);
            ty.set("faulty", json!("written under spoof")).unwrap();
        }
        assert!(ty.get("faulty").is_err());
        {
            let _spoof = SpoofTypeAccess::new(&ty);
            assert_eq!(ty.get("faulty").unwrap(), json!("written under spoof"));
        }
    }

    #[test]
    fn test_object_spoof_missing_then_set_then_get() {
        let (_ty, obj) = faulty_pair();
        {
            let _spoof = SpoofObjectAccess::new(&obj);
            // Default semantics, but the attribute was never written
            assert!(matches!(obj.get("faulty"), Err(AttrError::Missing { .. })));
        }
        {
            let _spoof = SpoofObjectAccess::new(&obj);
            obj.set("faulty", json!("set under spoof")).unwrap();
        }
        assert!(obj.get("faulty").is_err());
        {
            let _spoof = SpoofObjectAccess::new(&obj);
            assert_eq!(obj.get("faulty").unwrap(), json!("set under spoof"));
        }
    }

    #[test]
    fn test_restore_after_panic() {
        let ty = TypeObject::faulty("FaultyObject");
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _spoof = SpoofTypeAccess::new(&ty);
            assert!(ty.get("name").is_ok());
            panic!("scope body failed");
        }));
        assert!(result.is_err());
        assert!(matches!(ty.get("name"), Err(AttrError::GetBlocked { .. })));
    }

    #[test]
    fn test_restore_after_early_return() {
        fn read_missing(ty: &TypeObject) -> Result<Value, AttrError> {
            let _spoof = SpoofTypeAccess::new(ty);
            let value = ty.get("not_there")?;
            Ok(value)
        }

        let ty = TypeObject::faulty("FaultyObject");
        assert!(matches!(read_missing(&ty), Err(AttrError::Missing { .. })));
        assert!(matches!(ty.get("name"), Err(AttrError::GetBlocked { .. })));
    }

    #[test]
    fn test_nested_scopes_restore_in_order() {
        let ty = TypeObject::faulty("FaultyObject");
        {
            let _outer = SpoofTypeAccess::new(&ty);
            {
                let _inner = SpoofTypeAccess::new(&ty);
                assert!(ty.get("name").is_ok());
            }
            // The inner guard restored the outer's default policy
            assert!(ty.get("name").is_ok());
        }
        assert!(ty.get("name").is_err());
    }

    #[test]
    fn test_spoof_on_default_target_is_harmless() {
        let ty = TypeObject::new("Widget");
        {
            let _spoof = SpoofTypeAccess::new(&ty);
            assert!(ty.get("name").is_ok());
        }
        assert!(ty.get("name").is_ok());
    }

    #[test]
    fn test_object_spoof_does_not_affect_type() {
        let (ty, obj) = faulty_pair();
        let _spoof = SpoofObjectAccess::new(&obj);
        assert!(matches!(ty.get("name"), Err(AttrError::GetBlocked { .. })));
        // The instance reads its type's table directly
        assert_eq!(obj.get("name").unwrap(), json!("FaultyObject"));
    }

    #[test]
    fn test_object_restore_after_panic() {
        let (_ty, obj) = faulty_pair();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _spoof = SpoofObjectAccess::new(&obj);
            obj.set("faulty", json!("written")).unwrap();
            panic!("scope body failed");
        }));
        assert!(result.is_err());
        assert!(matches!(
            obj.set("faulty", json!("again")),
            Err(AttrError::SetBlocked { .. })
        ));
    }
}
