//! Capability descriptor types for capcheck.
//!
//! A [`CapabilityDescriptor`] is a named bundle of member-name requirements:
//! methods the candidate must expose as invocable members, properties it must
//! expose, and properties it must not expose. Descriptors are immutable value
//! objects, created once and reused across any number of conformance checks.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod descriptor;
mod errors;
mod member;

pub use descriptor::*;
pub use errors::*;
pub use member::*;
