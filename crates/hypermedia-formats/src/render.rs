//! The format backend contract, the render context, and the backend registry

use std::sync::Arc;

use serde_json::Value;

use hypermedia_core::{
	Affordance, ConfigurationError, ConfigurationResult, CurieProvider, Link, LinkRelation,
	LinkRenderPolicy, MediaType, RepresentationModel, DEFAULT_AFFORDANCE_NAME,
};
use hypermedia_metadata::{MetadataRegistry, TextResolver};

/// Errors raised while rendering a document tree.
///
/// Either a complete document is produced or one of these surfaces before
/// any output is returned; backends never emit partial trees.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	#[error(transparent)]
	Configuration(#[from] ConfigurationError),
	#[error("document serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Everything a backend needs besides the model itself: the link render
/// policy, an optional curie provider, the metadata registry snapshot and
/// an optional text resolver.
///
/// A context is built once per request and passed by reference into every
/// backend; rendering never mutates it.
///
/// # Examples
///
/// ```
/// use hypermedia_core::LinkRenderPolicy;
/// use hypermedia_formats::RenderContext;
///
/// let ctx = RenderContext::new()
///     .policy(LinkRenderPolicy::new().render_single_as_array("item"));
/// assert!(ctx.link_policy().should_render_as_array("item", 1));
/// ```
#[derive(Clone, Default)]
pub struct RenderContext {
	policy: LinkRenderPolicy,
	curie: Option<CurieProvider>,
	registry: MetadataRegistry,
	text: Option<Arc<dyn TextResolver>>,
}

impl RenderContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// A context wired to the process-wide configuration: the registered
	/// curie provider and a snapshot of the global metadata registry.
	pub fn from_global() -> Self {
		Self {
			policy: LinkRenderPolicy::new(),
			curie: hypermedia_core::registered_curie_provider(),
			registry: hypermedia_metadata::global_snapshot(),
			text: None,
		}
	}

	pub fn policy(mut self, policy: LinkRenderPolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn curie_provider(mut self, provider: CurieProvider) -> Self {
		self.curie = Some(provider);
		self
	}

	pub fn metadata(mut self, registry: MetadataRegistry) -> Self {
		self.registry = registry;
		self
	}

	pub fn text_resolver(mut self, resolver: impl TextResolver + 'static) -> Self {
		self.text = Some(Arc::new(resolver));
		self
	}

	pub fn link_policy(&self) -> &LinkRenderPolicy {
		&self.policy
	}

	pub fn curie(&self) -> Option<&CurieProvider> {
		self.curie.as_ref()
	}

	pub fn registry(&self) -> &MetadataRegistry {
		&self.registry
	}

	pub fn text(&self) -> Option<&dyn TextResolver> {
		self.text.as_deref()
	}

	/// Compacts a relation through the active curie provider, if any.
	pub fn compact(&self, rel: &LinkRelation) -> LinkRelation {
		match &self.curie {
			Some(provider) => provider.compact(rel),
			None => rel.clone(),
		}
	}
}

/// A pure transformation from a representation model to one media type's
/// document tree.
pub trait FormatBackend: Send + Sync {
	/// The media type this backend renders.
	fn media_type(&self) -> MediaType;

	/// Renders the model as this format's document tree. The tree is handed
	/// to a generic JSON serializer by the caller; no byte-level encoding
	/// happens here.
	fn render(&self, model: &RepresentationModel, ctx: &RenderContext) -> RenderResult<Value>;
}

/// Explicit registry of `(media type, backend)` pairs.
///
/// Registration order is preserved; looking up a media type walks the list.
/// Registering the same media type twice fails.
pub struct FormatRegistry {
	backends: Vec<Box<dyn FormatBackend>>,
}

impl FormatRegistry {
	pub fn new() -> Self {
		Self {
			backends: Vec::new(),
		}
	}

	/// A registry holding all five built-in backends.
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		// fresh registry, the built-ins cannot collide
		let _ = registry.register(Box::new(crate::hal::HalFormat));
		let _ = registry.register(Box::new(crate::hal_forms::HalFormsFormat));
		let _ = registry.register(Box::new(crate::collection_json::CollectionJsonFormat));
		let _ = registry.register(Box::new(crate::uber::UberFormat));
		let _ = registry.register(Box::new(crate::alps::AlpsFormat));
		registry
	}

	pub fn register(&mut self, backend: Box<dyn FormatBackend>) -> ConfigurationResult<()> {
		let media_type = backend.media_type();
		if self.backends.iter().any(|b| b.media_type() == media_type) {
			return Err(ConfigurationError::DuplicateMediaType(
				media_type.to_string(),
			));
		}
		self.backends.push(backend);
		Ok(())
	}

	pub fn backend_for(&self, media_type: &MediaType) -> Option<&dyn FormatBackend> {
		self.backends
			.iter()
			.find(|b| &b.media_type() == media_type)
			.map(Box::as_ref)
	}

	/// The media types with a registered backend, for the negotiation layer.
	pub fn supported_media_types(&self) -> Vec<MediaType> {
		self.backends.iter().map(|b| b.media_type()).collect()
	}
}

impl Default for FormatRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// The name an affordance renders under: the literal `default` when it is
/// the node's sole affordance, its own name otherwise.
pub(crate) fn rendered_affordance_name(total: usize, affordance: &Affordance) -> String {
	if total == 1 {
		DEFAULT_AFFORDANCE_NAME.to_string()
	} else {
		affordance.name().to_string()
	}
}

/// Logs when a deprecated link is about to be rendered.
pub(crate) fn note_deprecation(link: &Link) {
	if let Some(deprecation) = link.deprecation_value() {
		tracing::warn!(
			rel = link.rel().as_str(),
			href = link.href(),
			deprecation,
			"rendering deprecated link"
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_registry_rejects_duplicate_media_type() {
		let mut registry = FormatRegistry::new();
		registry.register(Box::new(crate::hal::HalFormat)).unwrap();
		let err = registry
			.register(Box::new(crate::hal::HalFormat))
			.unwrap_err();
		assert!(matches!(err, ConfigurationError::DuplicateMediaType(_)));
	}

	#[test]
	fn test_registry_lookup() {
		let registry = FormatRegistry::with_defaults();
		assert!(registry.backend_for(&MediaType::HAL_JSON).is_some());
		assert!(registry.backend_for(&MediaType::UBER_JSON).is_some());
		assert!(registry
			.backend_for(&MediaType::new("application", "xml"))
			.is_none());
		assert_eq!(registry.supported_media_types().len(), 5);
	}

	#[test]
	fn test_compact_without_provider_is_identity() {
		let ctx = RenderContext::new();
		let rel = LinkRelation::new("orders");
		assert_eq!(ctx.compact(&rel), rel);
	}
}
