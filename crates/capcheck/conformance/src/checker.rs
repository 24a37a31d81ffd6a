//! Fail-fast conformance checking.

use crate::errors::{ConformanceError, ConformanceResult, PropertyViolation};
use crate::reflect::Reflect;
use capcheck_types::{CapabilityDescriptor, MemberKind};
use tracing::{debug, trace};

/// A single requirement drawn from a descriptor, in check order: methods
/// first, then required properties, then forbidden properties.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Requirement<'a> {
    Method(&'a str),
    RequiredProperty(&'a str),
    ForbiddenProperty(&'a str),
}

impl<'a> Requirement<'a> {
    pub(crate) fn member_name(&self) -> &'a str {
        match *self {
            Requirement::Method(name)
            | Requirement::RequiredProperty(name)
            | Requirement::ForbiddenProperty(name) => name,
        }
    }
}

/// Requirements of a descriptor in the order they are checked and reported.
pub(crate) fn requirements(
    descriptor: &CapabilityDescriptor,
) -> impl Iterator<Item = Requirement<'_>> {
    let methods = descriptor
        .required_methods
        .iter()
        .map(|name| Requirement::Method(name));
    let required = descriptor
        .required_properties
        .iter()
        .map(|name| Requirement::RequiredProperty(name));
    let forbidden = descriptor
        .forbidden_properties
        .iter()
        .map(|name| Requirement::ForbiddenProperty(name));
    methods.chain(required).chain(forbidden)
}

/// Check one requirement against the candidate.
///
/// Method requirements need an invocable member. Property presence accepts a
/// member of any kind, matching the original dynamic-language `in` check;
/// forbidden properties reject a member of any kind for the same reason.
pub(crate) fn check_requirement<C: Reflect>(
    candidate: &C,
    capability: &str,
    requirement: Requirement<'_>,
) -> ConformanceResult<()> {
    let name = requirement.member_name();
    let member = candidate.member(name);
    trace!(capability, member = name, kind = ?member, "probing member");

    match requirement {
        Requirement::Method(_) => match member {
            Some(MemberKind::Method) => Ok(()),
            _ => Err(ConformanceError::MissingMethod {
                capability: capability.to_string(),
                method: name.to_string(),
            }),
        },
        Requirement::RequiredProperty(_) => match member {
            Some(_) => Ok(()),
            None => Err(ConformanceError::PropertyConstraint {
                capability: capability.to_string(),
                property: name.to_string(),
                violation: PropertyViolation::MissingRequired,
            }),
        },
        Requirement::ForbiddenProperty(_) => match member {
            None => Ok(()),
            Some(_) => Err(ConformanceError::PropertyConstraint {
                capability: capability.to_string(),
                property: name.to_string(),
                violation: PropertyViolation::ForbiddenPresent,
            }),
        },
    }
}

/// Verify that `candidate` satisfies every supplied descriptor, failing with
/// the first unmet requirement in descriptor order.
///
/// The candidate must not be absent and at least one descriptor must be
/// supplied; either misuse is an
/// [`InvalidArgument`](ConformanceError::InvalidArgument) error. On success
/// the candidate is untouched and the check can be repeated with the same
/// outcome.
pub fn ensure_implements<'a, C, I>(candidate: &C, descriptors: I) -> ConformanceResult<()>
where
    C: Reflect,
    I: IntoIterator<Item = &'a CapabilityDescriptor>,
{
    if candidate.is_absent() {
        return Err(ConformanceError::InvalidArgument(
            "candidate must not be null or undefined".to_string(),
        ));
    }

    let mut checked = 0usize;
    for descriptor in descriptors {
        debug!(capability = %descriptor.name, "checking capability conformance");
        for requirement in requirements(descriptor) {
            check_requirement(candidate, &descriptor.name, requirement)?;
        }
        checked += 1;
    }

    if checked == 0 {
        return Err(ConformanceError::InvalidArgument(
            "at least one capability descriptor is required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Candidate with an explicit member table, the moral equivalent of a
    /// dynamic-language object literal.
    struct Stub {
        methods: Vec<&'static str>,
        properties: Vec<&'static str>,
    }

    impl Reflect for Stub {
        fn member(&self, name: &str) -> Option<MemberKind> {
            if self.methods.iter().any(|m| *m == name) {
                Some(MemberKind::Method)
            } else if self.properties.iter().any(|m| *m == name) {
                Some(MemberKind::Property)
            } else {
                None
            }
        }
    }

    fn storage() -> CapabilityDescriptor {
        CapabilityDescriptor::new("Storage", ["set_item", "get_item", "remove_item"])
    }

    fn full_cache() -> Stub {
        Stub {
            methods: vec!["set_item", "get_item", "remove_item"],
            properties: vec![],
        }
    }

    #[test]
    fn test_conformant_candidate_passes() {
        assert!(ensure_implements(&full_cache(), &[storage()]).is_ok());
    }

    #[test]
    fn test_missing_method_names_first_miss() {
        let candidate = Stub {
            methods: vec!["set_item", "get_item"],
            properties: vec![],
        };
        assert_eq!(
            ensure_implements(&candidate, &[storage()]),
            Err(ConformanceError::MissingMethod {
                capability: "Storage".to_string(),
                method: "remove_item".to_string(),
            })
        );
    }

    #[test]
    fn test_method_requirement_rejects_data_member() {
        let candidate = Stub {
            methods: vec!["get_item", "remove_item"],
            properties: vec!["set_item"],
        };
        assert_eq!(
            ensure_implements(&candidate, &[storage()]),
            Err(ConformanceError::MissingMethod {
                capability: "Storage".to_string(),
                method: "set_item".to_string(),
            })
        );
    }

    #[test]
    fn test_methods_checked_in_descriptor_order() {
        let candidate = Stub {
            methods: vec![],
            properties: vec![],
        };
        let Err(ConformanceError::MissingMethod { method, .. }) =
            ensure_implements(&candidate, &[storage()])
        else {
            panic!("expected MissingMethod");
        };
        assert_eq!(method, "set_item");
    }

    #[test]
    fn test_required_property_accepts_any_member_kind() {
        let descriptor = CapabilityDescriptor::named("Observable")
            .with_required_property("subscribe");
        let candidate = Stub {
            methods: vec!["subscribe"],
            properties: vec![],
        };
        assert!(ensure_implements(&candidate, &[descriptor]).is_ok());
    }

    #[test]
    fn test_missing_required_property_fails() {
        let descriptor = CapabilityDescriptor::named("Settings")
            .with_required_property("theme");
        let candidate = Stub {
            methods: vec![],
            properties: vec![],
        };
        assert_eq!(
            ensure_implements(&candidate, &[descriptor]),
            Err(ConformanceError::PropertyConstraint {
                capability: "Settings".to_string(),
                property: "theme".to_string(),
                violation: PropertyViolation::MissingRequired,
            })
        );
    }

    #[test]
    fn test_forbidden_property_rejects_present_member() {
        let descriptor = CapabilityDescriptor::named("Sealed")
            .with_forbidden_property("mutate");
        let candidate = Stub {
            methods: vec!["mutate"],
            properties: vec![],
        };
        assert_eq!(
            ensure_implements(&candidate, &[descriptor]),
            Err(ConformanceError::PropertyConstraint {
                capability: "Sealed".to_string(),
                property: "mutate".to_string(),
                violation: PropertyViolation::ForbiddenPresent,
            })
        );
    }

    #[test]
    fn test_zero_descriptors_is_invalid() {
        let empty: [CapabilityDescriptor; 0] = [];
        assert!(matches!(
            ensure_implements(&full_cache(), &empty),
            Err(ConformanceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_absent_candidate_is_invalid_regardless_of_descriptors() {
        assert!(matches!(
            ensure_implements(&serde_json::Value::Null, &[storage()]),
            Err(ConformanceError::InvalidArgument(_))
        ));
        let empty: [CapabilityDescriptor; 0] = [];
        assert!(matches!(
            ensure_implements(&serde_json::Value::Null, &empty),
            Err(ConformanceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_multiple_descriptors_fail_on_first_unmet() {
        let first = CapabilityDescriptor::new("Readable", ["get_item"]);
        let second = CapabilityDescriptor::new("Writable", ["set_item", "clear"]);
        let candidate = Stub {
            methods: vec!["get_item", "set_item"],
            properties: vec![],
        };
        assert_eq!(
            ensure_implements(&candidate, &[first, second]),
            Err(ConformanceError::MissingMethod {
                capability: "Writable".to_string(),
                method: "clear".to_string(),
            })
        );
    }

    #[test]
    fn test_json_candidate_satisfies_property_contract() {
        let descriptor = CapabilityDescriptor::named("Settings")
            .with_required_property("theme")
            .with_forbidden_property("password");
        let candidate = json!({ "theme": "dark", "font_size": 14 });
        assert!(ensure_implements(&candidate, &[descriptor]).is_ok());
    }

    #[test]
    fn test_check_is_idempotent() {
        let candidate = full_cache();
        let descriptors = [storage()];
        let first = ensure_implements(&candidate, &descriptors);
        let second = ensure_implements(&candidate, &descriptors);
        assert_eq!(first, second);
    }
}
