//! Type and field descriptors consumed by the property metadata resolver
//!
//! These are the canonical output of whatever introspection mechanism the
//! application uses (derive macro, schema file, explicit builder calls).
//! This crate only consumes the descriptors; it never inspects Rust types
//! itself.

use serde::Serialize;

/// The declared domain type of a field, before any rendering hints apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
	String,
	Number,
	Boolean,
	Date,
	DateTime,
	Time,
	Collection,
	Object,
}

impl SemanticType {
	/// The rendering hint used when neither an explicit hint nor a
	/// constraint-derived hint applies.
	pub fn fallback_input_type(self) -> InputType {
		match self {
			SemanticType::String | SemanticType::Collection | SemanticType::Object => {
				InputType::Text
			}
			SemanticType::Number => InputType::Number,
			SemanticType::Boolean => InputType::Checkbox,
			SemanticType::Date => InputType::Date,
			SemanticType::DateTime => InputType::DatetimeLocal,
			SemanticType::Time => InputType::Time,
		}
	}
}

/// HTML-style input type rendered as a property's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
	Text,
	Number,
	Email,
	Url,
	Password,
	Date,
	#[serde(rename = "datetime-local")]
	DatetimeLocal,
	Time,
	Checkbox,
	Hidden,
}

/// Where a property's value options come from.
///
/// Opaque to the resolver; inline sets and remote references are passed
/// through to the format backends unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionsSource {
	Inline { inline: Vec<serde_json::Value> },
	Remote { link: String },
}

impl OptionsSource {
	pub fn inline(values: Vec<serde_json::Value>) -> Self {
		Self::Inline { inline: values }
	}

	pub fn remote(href: impl Into<String>) -> Self {
		Self::Remote { link: href.into() }
	}
}

/// The bag of constraint facts an introspector collected for one field.
///
/// Range-style bounds and explicit min/max bounds are distinct sources; the
/// resolver prefers the range when both are present. Length bounds come from
/// a length constraint only and never bleed into min/max.
///
/// # Examples
///
/// ```
/// use hypermedia_core::ConstraintFacts;
///
/// let facts = ConstraintFacts::new()
///     .not_null()
///     .min_length(2)
///     .max_length(64);
/// assert!(facts.not_null);
/// assert_eq!(facts.min_length, Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintFacts {
	pub not_null: bool,
	pub read_only: bool,
	pub pattern: Option<String>,
	pub range_min: Option<f64>,
	pub range_max: Option<f64>,
	pub min: Option<f64>,
	pub max: Option<f64>,
	pub min_length: Option<u64>,
	pub max_length: Option<u64>,
	pub input_type: Option<InputType>,
	pub options: Option<OptionsSource>,
}

impl ConstraintFacts {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn not_null(mut self) -> Self {
		self.not_null = true;
		self
	}

	pub fn read_only(mut self) -> Self {
		self.read_only = true;
		self
	}

	pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
		self.pattern = Some(pattern.into());
		self
	}

	/// Records a range constraint. Takes precedence over [`min`](Self::min) /
	/// [`max`](Self::max) when both are declared.
	pub fn range(mut self, min: impl Into<Option<f64>>, max: impl Into<Option<f64>>) -> Self {
		self.range_min = min.into();
		self.range_max = max.into();
		self
	}

	pub fn min(mut self, min: f64) -> Self {
		self.min = Some(min);
		self
	}

	pub fn max(mut self, max: f64) -> Self {
		self.max = Some(max);
		self
	}

	pub fn min_length(mut self, min_length: u64) -> Self {
		self.min_length = Some(min_length);
		self
	}

	pub fn max_length(mut self, max_length: u64) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn input_type(mut self, input_type: InputType) -> Self {
		self.input_type = Some(input_type);
		self
	}

	pub fn options(mut self, options: OptionsSource) -> Self {
		self.options = Some(options);
		self
	}
}

/// One field of an input or output type, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
	pub name: String,
	pub semantic_type: SemanticType,
	pub facts: ConstraintFacts,
}

/// An ordered description of an input or output type.
///
/// # Examples
///
/// ```
/// use hypermedia_core::{ConstraintFacts, SemanticType, TypeDescriptor};
///
/// let ty = TypeDescriptor::new("shop::orders::Order")
///     .field("total", SemanticType::Number, ConstraintFacts::new().not_null())
///     .field("note", SemanticType::String, ConstraintFacts::new());
/// assert_eq!(ty.simple_name(), "Order");
/// assert_eq!(ty.fields().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
	full_name: String,
	fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
	pub fn new(full_name: impl Into<String>) -> Self {
		Self {
			full_name: full_name.into(),
			fields: Vec::new(),
		}
	}

	/// Appends a field; declaration order is preserved through resolution.
	pub fn field(
		mut self,
		name: impl Into<String>,
		semantic_type: SemanticType,
		facts: ConstraintFacts,
	) -> Self {
		self.fields.push(FieldDescriptor {
			name: name.into(),
			semantic_type,
			facts,
		});
		self
	}

	pub fn full_name(&self) -> &str {
		&self.full_name
	}

	/// The unqualified type name (the last `::` path segment).
	pub fn simple_name(&self) -> &str {
		self.full_name
			.rsplit("::")
			.next()
			.unwrap_or(&self.full_name)
	}

	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	pub fn has_field(&self, name: &str) -> bool {
		self.fields.iter().any(|f| f.name == name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_simple_name_strips_path() {
		let ty = TypeDescriptor::new("shop::orders::Order");
		assert_eq!(ty.simple_name(), "Order");

		let bare = TypeDescriptor::new("Order");
		assert_eq!(bare.simple_name(), "Order");
	}

	#[test]
	fn test_field_order_preserved() {
		let ty = TypeDescriptor::new("T")
			.field("b", SemanticType::String, ConstraintFacts::new())
			.field("a", SemanticType::String, ConstraintFacts::new());
		let names: Vec<_> = ty.fields().iter().map(|f| f.name.as_str()).collect();
		assert_eq!(names, ["b", "a"]);
	}

	#[test]
	fn test_fallback_input_types() {
		assert_eq!(
			SemanticType::Boolean.fallback_input_type(),
			InputType::Checkbox
		);
		assert_eq!(SemanticType::Date.fallback_input_type(), InputType::Date);
		assert_eq!(SemanticType::String.fallback_input_type(), InputType::Text);
	}
}
