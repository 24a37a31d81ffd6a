//! Non-fail-fast checking with a collected report.

use crate::checker::{check_requirement, requirements, Requirement};
use crate::errors::{ConformanceError, ConformanceResult};
use crate::reflect::Reflect;
use capcheck_types::CapabilityDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Which kind of requirement an outcome records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    Method,
    RequiredProperty,
    ForbiddenProperty,
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementKind::Method => write!(f, "method"),
            RequirementKind::RequiredProperty => write!(f, "required property"),
            RequirementKind::ForbiddenProperty => write!(f, "forbidden property"),
        }
    }
}

impl From<Requirement<'_>> for RequirementKind {
    fn from(requirement: Requirement<'_>) -> Self {
        match requirement {
            Requirement::Method(_) => RequirementKind::Method,
            Requirement::RequiredProperty(_) => RequirementKind::RequiredProperty,
            Requirement::ForbiddenProperty(_) => RequirementKind::ForbiddenProperty,
        }
    }
}

/// Result of checking a single requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Capability the requirement came from.
    pub capability: String,
    /// Member name the requirement concerns.
    pub member: String,
    /// Kind of requirement.
    pub kind: RequirementKind,
    /// Whether the requirement was met.
    pub passed: bool,
    /// Failure message when the requirement was not met.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(
            f,
            "[{}] {}: {} `{}`",
            status, self.capability, self.kind, self.member
        )?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

/// Every requirement outcome from a [`verify`] run, in check order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceReport {
    outcomes: Vec<CheckOutcome>,
}

impl ConformanceReport {
    /// All outcomes in check order.
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// True when every requirement was met.
    pub fn is_conformant(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// The first unmet requirement, the one [`ensure_implements`] would have
    /// reported.
    ///
    /// [`ensure_implements`]: crate::ensure_implements
    pub fn first_failure(&self) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|outcome| !outcome.passed)
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        write!(
            f,
            "{} checks, {} passed, {} failed",
            self.outcomes.len(),
            self.passed(),
            self.failed()
        )
    }
}

/// Check every requirement of every descriptor and collect the outcomes.
///
/// Unlike [`ensure_implements`](crate::ensure_implements) this does not stop
/// at the first violation, so the report shows everything a candidate is
/// missing at once. The malformed-invocation guards are identical: an absent
/// candidate or an empty descriptor set is still an error, not a report.
pub fn verify<'a, C, I>(candidate: &C, descriptors: I) -> ConformanceResult<ConformanceReport>
where
    C: Reflect,
    I: IntoIterator<Item = &'a CapabilityDescriptor>,
{
    if candidate.is_absent() {
        return Err(ConformanceError::InvalidArgument(
            "candidate must not be null or undefined".to_string(),
        ));
    }

    let mut outcomes = Vec::new();
    let mut checked = 0usize;
    for descriptor in descriptors {
        debug!(capability = %descriptor.name, "collecting capability conformance report");
        for requirement in requirements(descriptor) {
            let result = check_requirement(candidate, &descriptor.name, requirement);
            outcomes.push(CheckOutcome {
                capability: descriptor.name.clone(),
                member: requirement.member_name().to_string(),
                kind: requirement.into(),
                passed: result.is_ok(),
                details: result.err().map(|error| error.to_string()),
            });
        }
        checked += 1;
    }

    if checked == 0 {
        return Err(ConformanceError::InvalidArgument(
            "at least one capability descriptor is required".to_string(),
        ));
    }

    Ok(ConformanceReport { outcomes })
}
