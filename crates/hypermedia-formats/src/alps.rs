//! ALPS (`application/alps+json`) rendering
//!
//! ALPS describes the semantics of a profile rather than one resource
//! instance: a flat descriptor list with nested descriptor children for
//! embedded semantics and affordance inputs.

use http::Method;
use serde::Serialize;
use serde_json::Value;

use hypermedia_core::{Affordance, MediaType, RepresentationModel};
use hypermedia_metadata::{affordance_text, resolve_properties, TITLE_SUFFIX};

use crate::render::{rendered_affordance_name, FormatBackend, RenderContext, RenderResult};

const VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, Default)]
pub struct AlpsFormat;

impl FormatBackend for AlpsFormat {
	fn media_type(&self) -> MediaType {
		MediaType::ALPS_JSON
	}

	fn render(&self, model: &RepresentationModel, ctx: &RenderContext) -> RenderResult<Value> {
		let document = AlpsDocument {
			alps: AlpsBody {
				version: VERSION,
				descriptor: descriptors(model, ctx)?,
			},
		};
		Ok(serde_json::to_value(document)?)
	}
}

#[derive(Debug, Serialize)]
struct AlpsDocument {
	alps: AlpsBody,
}

#[derive(Debug, Serialize)]
struct AlpsBody {
	version: &'static str,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	descriptor: Vec<Descriptor>,
}

/// ALPS descriptor types, keyed to HTTP method semantics for affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorType {
	Semantic,
	Safe,
	Unsafe,
	Idempotent,
}

/// The descriptor type for an affordance with the given HTTP method.
pub fn alps_descriptor_type(method: &Method) -> DescriptorType {
	if method == Method::GET {
		DescriptorType::Safe
	} else if method == Method::PUT || method == Method::DELETE {
		DescriptorType::Idempotent
	} else {
		DescriptorType::Unsafe
	}
}

#[derive(Debug, Serialize)]
struct Descriptor {
	id: String,
	#[serde(rename = "type")]
	descriptor_type: DescriptorType,
	#[serde(skip_serializing_if = "Option::is_none")]
	doc: Option<Doc>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	descriptor: Vec<Descriptor>,
}

#[derive(Debug, Serialize)]
struct Doc {
	value: String,
}

fn descriptors(model: &RepresentationModel, ctx: &RenderContext) -> RenderResult<Vec<Descriptor>> {
	let mut descriptors = Vec::new();

	if let Value::Object(fields) = model.content() {
		for name in fields.keys() {
			descriptors.push(semantic(name, None));
		}
	}

	// embedded semantics nest their children's field descriptors
	for (rel, children) in model.embedded() {
		let mut nested = Vec::new();
		for child in children {
			if let Value::Object(fields) = child.content() {
				for name in fields.keys() {
					if nested.iter().all(|d: &Descriptor| d.id != *name) {
						nested.push(semantic(name, None));
					}
				}
			}
		}
		descriptors.push(Descriptor {
			id: rel.clone(),
			descriptor_type: DescriptorType::Semantic,
			doc: None,
			descriptor: nested,
		});
	}

	let total = model.affordances().len();
	for affordance in model.affordances() {
		descriptors.push(affordance_descriptor(affordance, total, ctx)?);
	}

	Ok(descriptors)
}

fn semantic(id: &str, doc: Option<String>) -> Descriptor {
	Descriptor {
		id: id.to_string(),
		descriptor_type: DescriptorType::Semantic,
		doc: doc.map(|value| Doc { value }),
		descriptor: Vec::new(),
	}
}

fn affordance_descriptor(
	affordance: &Affordance,
	total: usize,
	ctx: &RenderContext,
) -> RenderResult<Descriptor> {
	let name = rendered_affordance_name(total, affordance);

	let doc = ctx
		.text()
		.and_then(|resolver| affordance_text(resolver, affordance.input(), &name, TITLE_SUFFIX))
		.map(|value| Doc { value });

	let children = match affordance.input() {
		Some(input) => {
			resolve_properties(input, affordance.method(), ctx.registry(), ctx.text())?
				.iter()
				.map(|property| semantic(&property.name, property.prompt.clone()))
				.collect()
		}
		None => Vec::new(),
	};

	Ok(Descriptor {
		id: name,
		descriptor_type: alps_descriptor_type(affordance.method()),
		doc,
		descriptor: children,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Method::GET, DescriptorType::Safe)]
	#[case(Method::PUT, DescriptorType::Idempotent)]
	#[case(Method::DELETE, DescriptorType::Idempotent)]
	#[case(Method::POST, DescriptorType::Unsafe)]
	#[case(Method::PATCH, DescriptorType::Unsafe)]
	fn test_descriptor_type_mapping(#[case] method: Method, #[case] expected: DescriptorType) {
		assert_eq!(alps_descriptor_type(&method), expected);
	}
}
