//! Member classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of member a candidate exposes under a given name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// An invocable member.
    Method,
    /// A data member.
    Property,
}

impl MemberKind {
    pub fn is_invocable(&self) -> bool {
        matches!(self, MemberKind::Method)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Method => write!(f, "method"),
            MemberKind::Property => write!(f, "property"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_methods_are_invocable() {
        assert!(MemberKind::Method.is_invocable());
        assert!(!MemberKind::Property.is_invocable());
        assert_eq!(MemberKind::Method.to_string(), "method");
    }
}
