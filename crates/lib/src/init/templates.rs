//! Template content for the init command.

/// Default `build.json`.
pub const BUILD_JSON_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/build.json"));

/// Reference guide for every configuration field and command.
pub const BUILD_GUIDE_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/BUILD_GUIDE.md"));
