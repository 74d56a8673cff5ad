//! # Hypermedia
//!
//! Affordance-driven representation models with multi-format rendering for
//! Rust HTTP APIs.
//!
//! A handler builds a [`RepresentationModel`] once per request: an entity
//! payload, an ordered link set, embedded sub-resources, and affordances
//! describing the state transitions a client may trigger. Format backends
//! then render that one model as any of the supported hypermedia media
//! types without per-type handler logic:
//!
//! - HAL (`application/hal+json`)
//! - HAL-FORMS (`application/prs.hal-forms+json`)
//! - Collection+JSON (`application/vnd.collection+json`)
//! - UBER (`application/vnd.amundsen-uber+json`)
//! - ALPS (`application/alps+json`)
//!
//! ## Quick Example
//!
//! ```rust
//! use hypermedia::prelude::*;
//! use http::Method;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Order {
//!     total: u32,
//! }
//!
//! // Describe the input type the way your introspection layer would.
//! let input = TypeDescriptor::new("shop::Order").field(
//!     "total",
//!     SemanticType::Number,
//!     ConstraintFacts::new().not_null(),
//! );
//!
//! // One model, built once.
//! let model = ModelBuilder::from_entity(&Order { total: 50 })
//!     .unwrap()
//!     .link(
//!         Link::self_link("/orders/1")
//!             .with_affordance(Affordance::afford(Method::PUT, "/orders/1").input(input).build()),
//!     )
//!     .build()
//!     .unwrap();
//!
//! // Rendered under whichever media type was negotiated.
//! let registry = FormatRegistry::with_defaults();
//! let ctx = RenderContext::new();
//! let backend = registry.backend_for(&MediaType::HAL_FORMS_JSON).unwrap();
//! let document = backend.render(&model, &ctx).unwrap();
//! assert!(document.get("_templates").is_some());
//! ```
//!
//! Everything here is a pure, synchronous computation over immutable
//! inputs; concurrency and content negotiation live in the surrounding
//! request-handling layer.

// Re-export the representation model and builders
pub use hypermedia_core::{
	Affordance, AffordanceBuilder, DEFAULT_AFFORDANCE_NAME, DefaultRelationProvider, Link,
	LinkRelation, ModelBuilder, RelationProvider, RepresentationModel,
};

// Re-export rendering policies and process-wide configuration
pub use hypermedia_core::{
	CurieProvider, LinkRenderPolicy, MediaType, register_curie_provider,
	registered_curie_provider, reset_curie_provider,
};

// Re-export type descriptors and constraint facts
pub use hypermedia_core::{
	ConstraintFacts, FieldDescriptor, InputType, OptionsSource, SemanticType, TypeDescriptor,
};

// Re-export errors
pub use hypermedia_core::{BuildResult, BuilderError, ConfigurationError, ConfigurationResult};

// Re-export property metadata and text resolution
pub use hypermedia_metadata::{
	MapTextResolver, MetadataRegistry, PLACEHOLDER_SUFFIX, PROMPT_SUFFIX, PropertyMetadata,
	TITLE_SUFFIX, TextResolver, affordance_text, property_text, register_global_options,
	register_global_pattern, resolve_properties,
};

// Re-export format backends
pub use hypermedia_formats::{
	AlpsFormat, CollectionJsonFormat, DescriptorType, FormatBackend, FormatRegistry, HalFormat,
	HalFormsFormat, RenderContext, RenderError, RenderResult, UberFormat, alps_descriptor_type,
	uber_action,
};

pub mod prelude {
	//! The types a handler touches when building and rendering models.

	pub use crate::{
		Affordance, ConstraintFacts, CurieProvider, FormatBackend, FormatRegistry, Link,
		LinkRelation, LinkRenderPolicy, MediaType, ModelBuilder, RenderContext,
		RepresentationModel, SemanticType, TypeDescriptor,
	};
}
