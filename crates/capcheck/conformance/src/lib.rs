//! Run-time capability conformance checking.
//!
//! Compile-time trait bounds cover most capability contracts in Rust. This
//! crate handles the remainder: values whose member set is only known at run
//! time, typically because they crossed a dynamic boundary such as
//! deserialization. A candidate implements [`Reflect`] to expose its member
//! names; [`ensure_implements`] validates it against one or more
//! [`CapabilityDescriptor`]s before any of those members are relied on.
//!
//! Two checking modes are provided:
//!
//! - [`ensure_implements`] fails fast with the first unmet requirement, in
//!   descriptor order.
//! - [`verify`] runs every requirement and collects the results into a
//!   [`ConformanceReport`].
//!
//! # Example
//!
//! ```rust
//! use capcheck_conformance::ensure_implements;
//! use capcheck_types::CapabilityDescriptor;
//! use serde_json::json;
//!
//! let settings = CapabilityDescriptor::named("Settings")
//!     .with_required_property("theme");
//!
//! let candidate = json!({ "theme": "dark" });
//! assert!(ensure_implements(&candidate, &[settings]).is_ok());
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod adapt;
mod checker;
mod errors;
mod reflect;
mod report;

pub use adapt::*;
pub use checker::*;
pub use errors::*;
pub use reflect::*;
pub use report::*;

pub use capcheck_types::{CapabilityDescriptor, MemberKind};
