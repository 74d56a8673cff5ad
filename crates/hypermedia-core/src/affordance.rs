//! Affordances: declared state transitions attached to links

use http::Method;

use crate::descriptor::TypeDescriptor;
use crate::media_type::MediaType;

/// The reserved name a format uses when a node carries exactly one
/// affordance and the format requires a single unnamed template.
pub const DEFAULT_AFFORDANCE_NAME: &str = "default";

/// A format-independent description of a state transition.
///
/// An affordance is owned by exactly one [`Link`](crate::Link) and is
/// immutable after attachment. Format backends transform it into their own
/// template/action/descriptor shape without ever mutating it.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use hypermedia_core::{Affordance, SemanticType, ConstraintFacts, TypeDescriptor};
///
/// let input = TypeDescriptor::new("shop::Order")
///     .field("total", SemanticType::Number, ConstraintFacts::new().not_null());
///
/// let affordance = Affordance::afford(Method::PUT, "/orders/1")
///     .input(input)
///     .build();
/// assert_eq!(affordance.name(), "putOrder");
/// assert_eq!(affordance.method(), &Method::PUT);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Affordance {
	name: String,
	method: Method,
	target: String,
	input: Option<TypeDescriptor>,
	output: Option<TypeDescriptor>,
	input_media_types: Vec<MediaType>,
}

impl Affordance {
	/// Starts building an affordance for the given method and target URI.
	pub fn afford(method: Method, target: impl Into<String>) -> AffordanceBuilder {
		AffordanceBuilder {
			name: None,
			method,
			target: target.into(),
			input: None,
			output: None,
			input_media_types: Vec::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	pub fn target(&self) -> &str {
		&self.target
	}

	pub fn input(&self) -> Option<&TypeDescriptor> {
		self.input.as_ref()
	}

	pub fn output(&self) -> Option<&TypeDescriptor> {
		self.output.as_ref()
	}

	pub fn input_media_types(&self) -> &[MediaType] {
		&self.input_media_types
	}

	/// The content type to advertise, if one was configured.
	///
	/// The first configured input media type wins; an empty configuration
	/// yields `None` and the field is omitted from output.
	pub fn content_type(&self) -> Option<&MediaType> {
		self.input_media_types.first()
	}
}

/// Fluent builder for [`Affordance`].
#[derive(Debug, Clone)]
pub struct AffordanceBuilder {
	name: Option<String>,
	method: Method,
	target: String,
	input: Option<TypeDescriptor>,
	output: Option<TypeDescriptor>,
	input_media_types: Vec<MediaType>,
}

impl AffordanceBuilder {
	/// Sets an explicit name, overriding the derived one.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn input(mut self, input: TypeDescriptor) -> Self {
		self.input = Some(input);
		self
	}

	pub fn output(mut self, output: TypeDescriptor) -> Self {
		self.output = Some(output);
		self
	}

	pub fn input_media_type(mut self, media_type: MediaType) -> Self {
		self.input_media_types.push(media_type);
		self
	}

	pub fn build(self) -> Affordance {
		let name = self
			.name
			.unwrap_or_else(|| derive_name(&self.method, self.input.as_ref()));
		Affordance {
			name,
			method: self.method,
			target: self.target,
			input: self.input,
			output: self.output,
			input_media_types: self.input_media_types,
		}
	}
}

/// Derives an operation identifier from the method and input type, used when
/// no explicit name was configured: `put` + `Order` becomes `putOrder`.
fn derive_name(method: &Method, input: Option<&TypeDescriptor>) -> String {
	let verb = method.as_str().to_lowercase();
	match input {
		Some(ty) => format!("{}{}", verb, ty.simple_name()),
		None => verb,
	}
}
