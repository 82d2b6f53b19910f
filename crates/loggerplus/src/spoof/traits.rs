//! Access policy trait and the two built-in policies

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Attribute table backing a spoofable target
pub type AttrMap = HashMap<String, Value>;

/// Errors raised by attribute access on spoofable targets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttrError {
    /// The target's policy refused the read
    #[error("{target}: attribute read {name:?} refused")]
    GetBlocked { target: String, name: String },

    /// The target's policy refused the write
    #[error("{target}: attribute write {name:?} refused")]
    SetBlocked { target: String, name: String },

    /// Default semantics found no such attribute
    #[error("{target}: no attribute {name:?}")]
    Missing { target: String, name: String },
}

pub type AttrResult<T> = Result<T, AttrError>;

/// How attribute get/set behaves for a target
///
/// The policy receives the target's label (for error messages) and its
/// attribute table. A target's policy slot can be swapped at runtime; the
/// guards in [`crate::spoof`] do exactly that for the duration of a scope.
pub trait AccessPolicy: Send + Sync {
    /// Read the named attribute
    fn get(&self, target: &str, attrs: &AttrMap, name: &str) -> AttrResult<Value>;

    /// Write the named attribute
    fn set(&self, target: &str, attrs: &mut AttrMap, name: &str, value: Value) -> AttrResult<()>;
}

/// Plain map semantics: reads return the stored value, writes insert
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAccess;

impl AccessPolicy for DefaultAccess {
    fn get(&self, target: &str, attrs: &AttrMap, name: &str) -> AttrResult<Value> {
        attrs.get(name).cloned().ok_or_else(|| AttrError::Missing {
            target: target.to_string(),
            name: name.to_string(),
        })
    }

    fn set(&self, _target: &str, attrs: &mut AttrMap, name: &str, value: Value) -> AttrResult<()> {
        attrs.insert(name.to_string(), value);
        Ok(())
    }
}

/// Refuses every access
///
/// The fixture behavior the spoofing guards exist to suspend.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAccess;

impl AccessPolicy for DenyAccess {
    fn get(&self, target: &str, _attrs: &AttrMap, name: &str) -> AttrResult<Value> {
        Err(AttrError::GetBlocked {
            target: target.to_string(),
            name: name.to_string(),
        })
    }

    fn set(&self, target: &str, _attrs: &mut AttrMap, name: &str, _value: Value) -> AttrResult<()> {
        Err(AttrError::SetBlocked {
            target: target.to_string(),
            name: name.to_string(),
        })
    }
}
