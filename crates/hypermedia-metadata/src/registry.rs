//! Process-wide metadata configuration: global patterns and options sources

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;

use hypermedia_core::{
	ConfigurationError, ConfigurationResult, OptionsSource, SemanticType, TypeDescriptor,
};

/// Registered constraint configuration consulted during property resolution.
///
/// A registry is either scoped (owned by a render context, the common case
/// in tests) or the process-wide instance behind
/// [`register_global_pattern`] / [`register_global_options`]. Both are
/// read-mostly: written during application start-up, then only read.
///
/// # Examples
///
/// ```
/// use hypermedia_core::{ConstraintFacts, OptionsSource, SemanticType, TypeDescriptor};
/// use hypermedia_metadata::MetadataRegistry;
///
/// let ty = TypeDescriptor::new("shop::Order")
///     .field("state", SemanticType::String, ConstraintFacts::new());
///
/// let mut registry = MetadataRegistry::new();
/// registry.register_pattern(SemanticType::String, "[a-z]+").unwrap();
/// registry
///     .register_options(&ty, "state", OptionsSource::inline(vec!["open".into()]))
///     .unwrap();
///
/// assert!(registry.pattern_for(SemanticType::String).is_some());
/// assert!(registry.options_for("shop::Order", "state").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
	patterns: HashMap<SemanticType, String>,
	options: HashMap<(String, String), OptionsSource>,
}

impl MetadataRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a fallback pattern for every field of the given semantic
	/// type that declares no pattern of its own. The pattern must compile.
	pub fn register_pattern(
		&mut self,
		semantic_type: SemanticType,
		pattern: impl Into<String>,
	) -> ConfigurationResult<()> {
		let pattern = pattern.into();
		Regex::new(&pattern).map_err(|source| ConfigurationError::InvalidConstraintPattern {
			pattern: pattern.clone(),
			source,
		})?;
		self.patterns.insert(semantic_type, pattern);
		Ok(())
	}

	pub fn pattern_for(&self, semantic_type: SemanticType) -> Option<&str> {
		self.patterns.get(&semantic_type).map(String::as_str)
	}

	/// Registers an options source for a field of the given type. Fails at
	/// setup time when the descriptor declares no such field.
	pub fn register_options(
		&mut self,
		ty: &TypeDescriptor,
		field: &str,
		source: OptionsSource,
	) -> ConfigurationResult<()> {
		if !ty.has_field(field) {
			return Err(ConfigurationError::UnknownField {
				type_name: ty.full_name().to_string(),
				field: field.to_string(),
			});
		}
		self.options
			.insert((ty.full_name().to_string(), field.to_string()), source);
		Ok(())
	}

	pub fn options_for(&self, type_name: &str, field: &str) -> Option<&OptionsSource> {
		self.options
			.get(&(type_name.to_string(), field.to_string()))
	}
}

static GLOBAL_REGISTRY: Lazy<RwLock<MetadataRegistry>> =
	Lazy::new(|| RwLock::new(MetadataRegistry::new()));

/// Registers a pattern in the process-wide registry.
pub fn register_global_pattern(
	semantic_type: SemanticType,
	pattern: impl Into<String>,
) -> ConfigurationResult<()> {
	GLOBAL_REGISTRY.write().register_pattern(semantic_type, pattern)
}

/// Registers an options source in the process-wide registry.
pub fn register_global_options(
	ty: &TypeDescriptor,
	field: &str,
	source: OptionsSource,
) -> ConfigurationResult<()> {
	GLOBAL_REGISTRY.write().register_options(ty, field, source)
}

/// A copy of the process-wide registry, taken once per render context so
/// rendering reads a fixed snapshot.
pub fn global_snapshot() -> MetadataRegistry {
	GLOBAL_REGISTRY.read().clone()
}

/// Clears the process-wide registry. Intended for tests.
pub fn reset_global_registry() {
	*GLOBAL_REGISTRY.write() = MetadataRegistry::new();
}
