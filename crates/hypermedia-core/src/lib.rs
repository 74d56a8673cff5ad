//! Core representation models for hypermedia APIs
//!
//! A representation model is the format-agnostic document an API handler
//! builds once per request: an entity payload, an ordered link set, embedded
//! sub-resources, and affordances describing the state transitions a client
//! may trigger. Format backends consume the model and produce the concrete
//! wire shape of one media type.

pub mod affordance;
pub mod curie;
pub mod descriptor;
pub mod error;
pub mod link;
pub mod media_type;
pub mod model;
pub mod policy;
pub mod relation;

pub use affordance::{Affordance, AffordanceBuilder, DEFAULT_AFFORDANCE_NAME};
pub use curie::{
	register_curie_provider, registered_curie_provider, reset_curie_provider, CurieProvider,
};
pub use descriptor::{
	ConstraintFacts, FieldDescriptor, InputType, OptionsSource, SemanticType, TypeDescriptor,
};
pub use error::{BuildResult, BuilderError, ConfigurationError, ConfigurationResult};
pub use link::Link;
pub use media_type::MediaType;
pub use model::{DefaultRelationProvider, ModelBuilder, RelationProvider, RepresentationModel};
pub use policy::LinkRenderPolicy;
pub use relation::LinkRelation;
