//! Member-name adaptation.
//!
//! When an existing candidate exposes the right behavior under the wrong
//! names, wrapping it beats rewriting it. [`Adapted`] carries an alias table
//! from the names a descriptor asks for to the names the inner candidate
//! actually exposes, and reflects through it.

use crate::reflect::Reflect;
use capcheck_types::MemberKind;
use std::collections::BTreeMap;

/// A candidate wrapped with a member-name alias table.
///
/// Lookups translate the requested name through the table before probing the
/// inner candidate; names without an alias pass through unchanged, so the
/// inner candidate's own members stay visible under their original names.
#[derive(Clone, Debug)]
pub struct Adapted<C> {
    inner: C,
    aliases: BTreeMap<String, String>,
}

impl<C: Reflect> Adapted<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            aliases: BTreeMap::new(),
        }
    }

    /// Expose the inner member `target` under the name `exposed`.
    pub fn with_alias(mut self, exposed: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(exposed.into(), target.into());
        self
    }

    /// The inner name a lookup for `name` resolves to.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Reflect> Reflect for Adapted<C> {
    fn member(&self, name: &str) -> Option<MemberKind> {
        self.inner.member(self.resolve(name))
    }

    fn is_absent(&self) -> bool {
        self.inner.is_absent()
    }
}
