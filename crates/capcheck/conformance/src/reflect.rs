//! The duck-typing seam.

use capcheck_types::MemberKind;
use serde_json::Value;

/// Exposes a candidate's dynamic member set to the checker.
///
/// The checker only ever reads through this trait; it never mutates the
/// candidate, so repeated checks of an unchanged candidate always produce
/// the same result.
pub trait Reflect {
    /// The kind of member exposed under `name`, if any.
    fn member(&self, name: &str) -> Option<MemberKind>;

    /// Whether this value is the absent (null/undefined) analogue.
    ///
    /// Absent candidates are rejected up front with an invalid-argument
    /// error rather than failing member by member.
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn member(&self, name: &str) -> Option<MemberKind> {
        (**self).member(name)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

/// Deserialized JSON is the canonical dynamic candidate. Object keys are
/// data members; JSON has no invocable members, so a descriptor with
/// required methods can never be satisfied by a bare `Value`.
impl Reflect for Value {
    fn member(&self, name: &str) -> Option<MemberKind> {
        match self {
            Value::Object(members) => members.get(name).map(|_| MemberKind::Property),
            _ => None,
        }
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }
}
