//! Property metadata resolution and localized text lookup
//!
//! Turns the constraint facts an external introspector collected into
//! canonical per-property metadata, and resolves human-facing strings
//! through a priority-ordered key chain. Both are pure computations over
//! immutable inputs; the only shared state is the process-wide registry
//! written at application start-up.

pub mod properties;
pub mod registry;
pub mod text;

pub use properties::{resolve_properties, PropertyMetadata};
pub use registry::{
	global_snapshot, register_global_options, register_global_pattern, reset_global_registry,
	MetadataRegistry,
};
pub use text::{
	affordance_text, property_text, MapTextResolver, TextResolver, PLACEHOLDER_SUFFIX,
	PROMPT_SUFFIX, TITLE_SUFFIX,
};
