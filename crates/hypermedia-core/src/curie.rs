//! Curie (compact URI) support for extension link relations

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::{ConfigurationError, ConfigurationResult};
use crate::link::Link;
use crate::relation::LinkRelation;

/// The placeholder the curie template must contain.
const REL_PLACEHOLDER: &str = "{rel}";

/// Expands extension link relations into `prefix:rel` compact form.
///
/// IANA-registered relations and relations already in compact form pass
/// through untouched. At most one provider is active per resolution scope;
/// registering a second into the process-wide scope fails.
///
/// # Examples
///
/// ```
/// use hypermedia_core::{CurieProvider, LinkRelation};
///
/// let provider = CurieProvider::new("acme", "https://docs.acme.com/rels/{rel}").unwrap();
/// assert_eq!(provider.compact(&LinkRelation::new("orders")).as_str(), "acme:orders");
/// assert_eq!(provider.compact(&LinkRelation::new("self")).as_str(), "self");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurieProvider {
	prefix: String,
	template: String,
}

impl CurieProvider {
	/// Creates a provider from a prefix and a URI template containing a
	/// `{rel}` placeholder.
	pub fn new(prefix: impl Into<String>, template: impl Into<String>) -> ConfigurationResult<Self> {
		let template = template.into();
		if !template.contains(REL_PLACEHOLDER) {
			return Err(ConfigurationError::MissingRelPlaceholder(template));
		}
		Ok(Self {
			prefix: prefix.into(),
			template,
		})
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	pub fn template(&self) -> &str {
		&self.template
	}

	/// Compacts an extension relation into `prefix:rel` form.
	///
	/// Registered (IANA) relations and already-compact relations are
	/// returned unchanged.
	pub fn compact(&self, rel: &LinkRelation) -> LinkRelation {
		if rel.is_registered() || rel.is_curied() {
			return rel.clone();
		}
		tracing::debug!(rel = rel.as_str(), prefix = %self.prefix, "compacting relation");
		LinkRelation::new(format!("{}:{}", self.prefix, rel.as_str()))
	}

	/// The single `curies` link advertising this provider's template.
	pub fn curie_link(&self) -> Link {
		Link::new(LinkRelation::CURIES, self.template.clone()).name(self.prefix.clone())
	}
}

static ACTIVE_PROVIDER: Lazy<RwLock<Option<CurieProvider>>> = Lazy::new(|| RwLock::new(None));

/// Registers the process-wide curie provider.
///
/// Fails fast when a provider is already active; the first registration
/// wins and stays fixed for the lifetime of the process.
pub fn register_curie_provider(provider: CurieProvider) -> ConfigurationResult<()> {
	let mut active = ACTIVE_PROVIDER.write();
	if active.is_some() {
		return Err(ConfigurationError::DuplicateCurieProvider);
	}
	*active = Some(provider);
	Ok(())
}

/// The process-wide curie provider, if one was registered.
pub fn registered_curie_provider() -> Option<CurieProvider> {
	ACTIVE_PROVIDER.read().clone()
}

/// Clears the process-wide provider. Intended for tests and application
/// shutdown; production code registers exactly once at start-up.
pub fn reset_curie_provider() {
	*ACTIVE_PROVIDER.write() = None;
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	fn test_template_requires_placeholder() {
		let err = CurieProvider::new("acme", "https://docs.acme.com/rels").unwrap_err();
		assert!(matches!(err, ConfigurationError::MissingRelPlaceholder(_)));
	}

	#[test]
	fn test_compact_leaves_curied_relation_alone() {
		let provider = CurieProvider::new("acme", "https://docs.acme.com/rels/{rel}").unwrap();
		let rel = LinkRelation::new("other:orders");
		assert_eq!(provider.compact(&rel), rel);
	}

	#[test]
	fn test_curie_link_shape() {
		let provider = CurieProvider::new("acme", "https://docs.acme.com/rels/{rel}").unwrap();
		let link = provider.curie_link();
		assert_eq!(link.rel().as_str(), "curies");
		assert_eq!(link.name_value(), Some("acme"));
		assert!(link.templated());
	}

	#[test]
	#[serial]
	fn test_second_registration_fails() {
		reset_curie_provider();
		let provider = CurieProvider::new("acme", "https://docs.acme.com/rels/{rel}").unwrap();
		register_curie_provider(provider.clone()).unwrap();
		let err = register_curie_provider(provider).unwrap_err();
		assert!(matches!(err, ConfigurationError::DuplicateCurieProvider));
		reset_curie_provider();
	}

	#[test]
	#[serial]
	fn test_registered_provider_round_trip() {
		reset_curie_provider();
		assert!(registered_curie_provider().is_none());
		let provider = CurieProvider::new("ex", "https://example.com/{rel}").unwrap();
		register_curie_provider(provider.clone()).unwrap();
		assert_eq!(registered_curie_provider(), Some(provider));
		reset_curie_provider();
	}
}
