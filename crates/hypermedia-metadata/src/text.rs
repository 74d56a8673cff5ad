//! Locale-aware text resolution for titles, prompts and placeholders
//!
//! This module only constructs candidate keys and walks them in priority
//! order; which bundle or locale a key is looked up in is the resolver
//! implementation's concern.

use std::collections::HashMap;

use hypermedia_core::{TypeDescriptor, DEFAULT_AFFORDANCE_NAME};

/// Key suffix for affordance and link titles.
pub const TITLE_SUFFIX: &str = "_title";
/// Key suffix for property prompts.
pub const PROMPT_SUFFIX: &str = "_prompt";
/// Key suffix for property placeholders.
pub const PLACEHOLDER_SUFFIX: &str = "_placeholder";

/// Looks up a localized string for a candidate key.
///
/// Implementations own locale selection and bundle storage; this crate only
/// decides which keys to try and stops at the first hit.
pub trait TextResolver: Send + Sync {
	fn resolve(&self, key: &str) -> Option<String>;
}

/// A map-backed resolver, useful for tests and small static bundles.
///
/// # Examples
///
/// ```
/// use hypermedia_metadata::{MapTextResolver, TextResolver};
///
/// let resolver = MapTextResolver::new().with("total_prompt", "Order total");
/// assert_eq!(resolver.resolve("total_prompt").as_deref(), Some("Order total"));
/// assert!(resolver.resolve("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapTextResolver {
	entries: HashMap<String, String>,
}

impl MapTextResolver {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.entries.insert(key.into(), value.into());
		self
	}
}

impl TextResolver for MapTextResolver {
	fn resolve(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}
}

/// Resolves text for a field of a declaring type.
///
/// Candidate keys, first hit wins:
/// 1. `{full_type_name}.{field}{suffix}`
/// 2. `{simple_type_name}.{field}{suffix}`
/// 3. `{field}{suffix}`
///
/// No match yields `None`; the caller omits the field from output.
pub fn property_text(
	resolver: &dyn TextResolver,
	ty: &TypeDescriptor,
	field: &str,
	suffix: &str,
) -> Option<String> {
	let qualifiers = [Some(ty.full_name()), Some(ty.simple_name()), None];
	for qualifier in qualifiers {
		let key = qualified_key(qualifier, field, suffix);
		if let Some(value) = resolver.resolve(&key) {
			return Some(value);
		}
	}
	None
}

/// Resolves text for a named affordance.
///
/// Qualification tier and name specificity are independent priority axes:
/// within each tier the exact affordance name is tried before the generic
/// `default` key, and only then does resolution fall to the next tier.
pub fn affordance_text(
	resolver: &dyn TextResolver,
	input_type: Option<&TypeDescriptor>,
	name: &str,
	suffix: &str,
) -> Option<String> {
	let qualifiers: Vec<Option<&str>> = match input_type {
		Some(ty) => vec![Some(ty.full_name()), Some(ty.simple_name()), None],
		None => vec![None],
	};
	for qualifier in qualifiers {
		for candidate in [name, DEFAULT_AFFORDANCE_NAME] {
			let key = qualified_key(qualifier, candidate, suffix);
			if let Some(value) = resolver.resolve(&key) {
				return Some(value);
			}
			if name == DEFAULT_AFFORDANCE_NAME {
				break;
			}
		}
	}
	None
}

fn qualified_key(qualifier: Option<&str>, target: &str, suffix: &str) -> String {
	match qualifier {
		Some(qualifier) => format!("{qualifier}.{target}{suffix}"),
		None => format!("{target}{suffix}"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hypermedia_core::{ConstraintFacts, SemanticType};

	fn order_type() -> TypeDescriptor {
		TypeDescriptor::new("shop::orders::Order").field(
			"total",
			SemanticType::Number,
			ConstraintFacts::new(),
		)
	}

	#[test]
	fn test_qualified_key_beats_simple_key() {
		let resolver = MapTextResolver::new()
			.with("shop::orders::Order.total_prompt", "qualified")
			.with("Order.total_prompt", "simple")
			.with("total_prompt", "bare");
		let ty = order_type();
		assert_eq!(
			property_text(&resolver, &ty, "total", PROMPT_SUFFIX).as_deref(),
			Some("qualified")
		);
	}

	#[test]
	fn test_simple_key_beats_bare_key() {
		let resolver = MapTextResolver::new()
			.with("Order.total_prompt", "simple")
			.with("total_prompt", "bare");
		let ty = order_type();
		assert_eq!(
			property_text(&resolver, &ty, "total", PROMPT_SUFFIX).as_deref(),
			Some("simple")
		);
	}

	#[test]
	fn test_no_match_yields_none() {
		let resolver = MapTextResolver::new();
		let ty = order_type();
		assert!(property_text(&resolver, &ty, "total", PROMPT_SUFFIX).is_none());
	}

	#[test]
	fn test_affordance_name_beats_default_within_tier() {
		// tiers are walked outermost: a qualified default still beats a
		// bare-tier exact name
		let resolver = MapTextResolver::new()
			.with("Order.default_title", "qualified default")
			.with("createOrder_title", "exact name");
		let ty = order_type();
		assert_eq!(
			affordance_text(&resolver, Some(&ty), "createOrder", TITLE_SUFFIX).as_deref(),
			Some("qualified default")
		);

		let resolver = MapTextResolver::new()
			.with("createOrder_title", "exact name")
			.with("default_title", "bare default");
		assert_eq!(
			affordance_text(&resolver, Some(&ty), "createOrder", TITLE_SUFFIX).as_deref(),
			Some("exact name")
		);
	}

	#[test]
	fn test_affordance_without_input_type_uses_bare_tier_only() {
		let resolver = MapTextResolver::new().with("delete_title", "Delete");
		assert_eq!(
			affordance_text(&resolver, None, "delete", TITLE_SUFFIX).as_deref(),
			Some("Delete")
		);
	}
}
