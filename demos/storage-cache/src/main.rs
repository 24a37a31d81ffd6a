//! Storage capability walkthrough.
//!
//! A `Cache` keeps its map private and exposes three methods. Before the
//! update routine relies on those methods it checks the cache against the
//! `Storage` descriptor; a second, dynamic candidate (a deserialized
//! settings document) is verified the collected-report way, with an alias
//! adapter bridging a legacy field name.
//!
//! Run with: `cargo run -p capcheck-demo-storage`

use anyhow::Result;
use capcheck_conformance::{verify, Adapted, MemberKind, Reflect};
use capcheck_registry::DescriptorRegistry;
use capcheck_types::CapabilityDescriptor;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// In-memory key/value store. The map stays private; the three methods are
/// the whole surface.
#[derive(Default)]
struct Cache {
    entries: BTreeMap<String, Value>,
}

impl Cache {
    fn set_item(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    fn get_item(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn remove_item(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

impl Reflect for Cache {
    fn member(&self, name: &str) -> Option<MemberKind> {
        match name {
            "set_item" | "get_item" | "remove_item" => Some(MemberKind::Method),
            _ => None,
        }
    }
}

/// Guard-then-use: refuse to touch the cache until it proves it implements
/// `Storage`.
fn update(cache: &mut Cache, registry: &DescriptorRegistry) -> Result<()> {
    registry.ensure_implements(cache, ["Storage"])?;

    cache.set_item("customer", json!({ "name": "test" }));
    info!(customer = %cache.get_item("customer").unwrap(), "after set_item");

    cache.remove_item("customer");
    info!(found = cache.get_item("customer").is_some(), "after remove_item");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut registry = DescriptorRegistry::new();
    registry.register(CapabilityDescriptor::new(
        "Storage",
        ["set_item", "get_item", "remove_item"],
    ))?;
    registry.register(
        CapabilityDescriptor::named("Settings")
            .with_required_property("theme")
            .with_required_property("font_size")
            .with_forbidden_property("password"),
    )?;

    let mut cache = Cache::default();
    update(&mut cache, &registry)?;

    // A document from the dynamic side of the boundary, still using the
    // legacy `fontSize` field.
    let document = json!({ "theme": "dark", "fontSize": 14 });
    let settings = registry.get("Settings").expect("registered above");

    let report = verify(&document, [settings])?;
    println!("raw document:\n{report}\n");

    let adapted = Adapted::new(&document).with_alias("font_size", "fontSize");
    let report = verify(&adapted, [settings])?;
    println!("adapted document:\n{report}");

    Ok(())
}
