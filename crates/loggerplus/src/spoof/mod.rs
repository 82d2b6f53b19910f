//! Attribute-access spoofing for reflection tests
//!
//! Models objects and types whose attribute get/set behavior can be
//! replaced wholesale, plus RAII guards that temporarily restore default
//! semantics on targets configured to refuse every access. These exist for
//! this crate's own test harness; they are not a production pattern.
//!
//! A target's behavior lives in a swappable [`AccessPolicy`] slot.
//! [`SpoofTypeAccess`] and [`SpoofObjectAccess`] swap in [`DefaultAccess`]
//! on construction and put the previous policy back when dropped, so the
//! override cannot outlive its scope even when the scope unwinds.

mod traits;
mod target;
mod guard;

pub use traits::{AccessPolicy, AttrError, AttrMap, AttrResult, DefaultAccess, DenyAccess};
pub use target::{Instance, TypeObject};
pub use guard::{SpoofObjectAccess, SpoofTypeAccess};
