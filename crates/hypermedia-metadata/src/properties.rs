//! Canonical per-property metadata derived from constraint facts

use http::Method;
use serde::Serialize;

use hypermedia_core::{
	ConfigurationResult, FieldDescriptor, InputType, OptionsSource, TypeDescriptor,
};

use crate::registry::MetadataRegistry;
use crate::text::{property_text, TextResolver, PLACEHOLDER_SUFFIX, PROMPT_SUFFIX};

fn is_false(value: &bool) -> bool {
	!*value
}

/// The resolved, format-independent metadata for one property of an input
/// or output type.
///
/// Recomputed per request from the constraint facts the introspector
/// supplied; never stored on the domain type. Every field except `name` and
/// `type` is sparse: absent values and false flags are omitted from output
/// entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyMetadata {
	pub name: String,
	#[serde(rename = "type")]
	pub input_type: InputType,
	#[serde(skip_serializing_if = "is_false")]
	pub required: bool,
	#[serde(rename = "readOnly", skip_serializing_if = "is_false")]
	pub read_only: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub regex: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max: Option<f64>,
	#[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
	pub min_length: Option<u64>,
	#[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
	pub max_length: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub options: Option<OptionsSource>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub prompt: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub placeholder: Option<String>,
}

/// Resolves the ordered property metadata for an input type.
///
/// Field order follows the type's declared order. `PATCH` payloads are
/// always partial, so the method forces `required` to `false` for every
/// property regardless of declared constraints.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use hypermedia_core::{ConstraintFacts, SemanticType, TypeDescriptor};
/// use hypermedia_metadata::{resolve_properties, MetadataRegistry};
///
/// let ty = TypeDescriptor::new("shop::Order")
///     .field("total", SemanticType::Number, ConstraintFacts::new().not_null());
///
/// let properties =
///     resolve_properties(&ty, &Method::POST, &MetadataRegistry::new(), None).unwrap();
/// assert!(properties[0].required);
///
/// let patched =
///     resolve_properties(&ty, &Method::PATCH, &MetadataRegistry::new(), None).unwrap();
/// assert!(!patched[0].required);
/// ```
pub fn resolve_properties(
	ty: &TypeDescriptor,
	method: &Method,
	registry: &MetadataRegistry,
	text: Option<&dyn TextResolver>,
) -> ConfigurationResult<Vec<PropertyMetadata>> {
	ty.fields()
		.iter()
		.map(|field| resolve_field(ty, field, method, registry, text))
		.collect()
}

fn resolve_field(
	ty: &TypeDescriptor,
	field: &FieldDescriptor,
	method: &Method,
	registry: &MetadataRegistry,
	text: Option<&dyn TextResolver>,
) -> ConfigurationResult<PropertyMetadata> {
	let facts = &field.facts;

	let regex = facts.pattern.clone().or_else(|| {
		let fallback = registry.pattern_for(field.semantic_type).map(String::from);
		if fallback.is_some() {
			tracing::debug!(field = %field.name, "field has no pattern, using registered global pattern");
		}
		fallback
	});

	let input_type = facts
		.input_type
		.or_else(|| derive_input_type(regex.as_deref()))
		.unwrap_or_else(|| field.semantic_type.fallback_input_type());

	let prompt = text.and_then(|t| property_text(t, ty, &field.name, PROMPT_SUFFIX));
	let placeholder = text.and_then(|t| property_text(t, ty, &field.name, PLACEHOLDER_SUFFIX));

	Ok(PropertyMetadata {
		name: field.name.clone(),
		input_type,
		required: facts.not_null && method != Method::PATCH,
		read_only: facts.read_only,
		regex,
		min: facts.range_min.or(facts.min),
		max: facts.range_max.or(facts.max),
		min_length: facts.min_length,
		max_length: facts.max_length,
		options: registry.options_for(ty.full_name(), &field.name).cloned(),
		prompt,
		placeholder,
	})
}

/// Derives a rendering hint from the resolved validation constraints.
///
/// A pattern that matches an `@` is taken as an email-shaped constraint.
fn derive_input_type(regex: Option<&str>) -> Option<InputType> {
	let regex = regex?;
	if regex.contains('@') {
		return Some(InputType::Email);
	}
	None
}
