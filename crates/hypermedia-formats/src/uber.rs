//! UBER (`application/vnd.amundsen-uber+json`) rendering
//!
//! UBER has a single uniform node shape; payload fields, links, affordances
//! and embedded resources all fold into `data` entries.

use http::Method;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use hypermedia_core::{Affordance, LinkRelation, MediaType, RepresentationModel};

use crate::render::{
	note_deprecation, rendered_affordance_name, FormatBackend, RenderContext, RenderResult,
};

const VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, Default)]
pub struct UberFormat;

impl FormatBackend for UberFormat {
	fn media_type(&self) -> MediaType {
		MediaType::UBER_JSON
	}

	fn render(&self, model: &RepresentationModel, ctx: &RenderContext) -> RenderResult<Value> {
		let document = UberDocument {
			uber: UberBody {
				version: VERSION,
				data: data_nodes(model, ctx)?,
			},
		};
		Ok(serde_json::to_value(document)?)
	}
}

#[derive(Debug, Serialize)]
struct UberDocument {
	uber: UberBody,
}

#[derive(Debug, Serialize)]
struct UberBody {
	version: &'static str,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	data: Vec<UberData>,
}

/// The single uniform node shape. Every field is sparse.
#[derive(Debug, Serialize, Default)]
struct UberData {
	#[serde(skip_serializing_if = "Option::is_none")]
	name: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	rel: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	action: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	model: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	value: Option<Value>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	data: Vec<UberData>,
}

/// The UBER action for an HTTP method. `GET` maps to the default `read`
/// action and is omitted from output.
pub fn uber_action(method: &Method) -> Option<&'static str> {
	if method == Method::GET {
		None
	} else if method == Method::POST {
		Some("append")
	} else if method == Method::PUT {
		Some("replace")
	} else if method == Method::PATCH {
		Some("partial")
	} else if method == Method::DELETE {
		Some("remove")
	} else {
		None
	}
}

fn data_nodes(model: &RepresentationModel, ctx: &RenderContext) -> RenderResult<Vec<UberData>> {
	let mut nodes = Vec::new();

	if let Value::Object(fields) = model.content() {
		for (name, value) in fields {
			nodes.push(UberData {
				name: Some(name.clone()),
				value: Some(value.clone()),
				..UberData::default()
			});
		}
	}

	// links sharing an href merge their relations into one node
	let mut by_href: IndexMap<String, Vec<String>> = IndexMap::new();
	for link in model.links() {
		note_deprecation(link);
		by_href
			.entry(link.href().to_string())
			.or_default()
			.push(ctx.compact(link.rel()).as_str().to_string());
	}
	for (url, rels) in by_href {
		nodes.push(UberData {
			rel: rels,
			url: Some(url),
			..UberData::default()
		});
	}

	let total = model.affordances().len();
	for affordance in model.affordances() {
		nodes.push(affordance_node(affordance, total));
	}

	for (rel, children) in model.embedded() {
		let mut child_nodes = Vec::new();
		for child in children {
			child_nodes.push(UberData {
				data: data_nodes(child, ctx)?,
				..UberData::default()
			});
		}
		nodes.push(UberData {
			name: Some(ctx.compact(&LinkRelation::new(rel.clone())).as_str().to_string()),
			data: child_nodes,
			..UberData::default()
		});
	}

	Ok(nodes)
}

fn affordance_node(affordance: &Affordance, total: usize) -> UberData {
	UberData {
		name: Some(rendered_affordance_name(total, affordance)),
		url: Some(affordance.target().to_string()),
		action: uber_action(affordance.method()),
		model: affordance_model(affordance),
		..UberData::default()
	}
}

/// The URI-template-style body model listing the input fields:
/// `total={total}&note={note}`.
fn affordance_model(affordance: &Affordance) -> Option<String> {
	let input = affordance.input()?;
	if input.fields().is_empty() {
		return None;
	}
	let pairs: Vec<String> = input
		.fields()
		.iter()
		.map(|field| format!("{name}={{{name}}}", name = field.name))
		.collect();
	Some(pairs.join("&"))
}
