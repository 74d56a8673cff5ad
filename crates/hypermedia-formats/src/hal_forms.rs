//! HAL-FORMS (`application/prs.hal-forms+json`) rendering
//!
//! The HAL document shape plus a `_templates` object describing the node's
//! affordances as fillable templates.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use hypermedia_core::{Affordance, Link, MediaType, RepresentationModel};
use hypermedia_metadata::{affordance_text, resolve_properties, PropertyMetadata, TITLE_SUFFIX};

use crate::hal::hal_document;
use crate::render::{rendered_affordance_name, FormatBackend, RenderContext, RenderResult};

/// Renders HAL plus `_templates`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalFormsFormat;

impl FormatBackend for HalFormsFormat {
	fn media_type(&self) -> MediaType {
		MediaType::HAL_FORMS_JSON
	}

	fn render(&self, model: &RepresentationModel, ctx: &RenderContext) -> RenderResult<Value> {
		let mut doc = hal_document(model, ctx, true)?;
		let templates = templates(model, ctx)?;
		if !templates.is_empty() {
			doc.insert("_templates".to_string(), serde_json::to_value(templates)?);
		}
		Ok(Value::Object(doc))
	}
}

/// One HAL-FORMS template. Everything except the method is sparse.
#[derive(Debug, Serialize)]
struct HalFormsTemplate {
	#[serde(skip_serializing_if = "Option::is_none")]
	title: Option<String>,
	method: String,
	#[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
	content_type: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	properties: Vec<PropertyMetadata>,
	#[serde(skip_serializing_if = "Option::is_none")]
	target: Option<String>,
}

/// Builds the template map from every affordance on every link, in
/// attachment order. A sole affordance renders under the reserved
/// `default` key; otherwise each template keeps its affordance's name.
fn templates(
	model: &RepresentationModel,
	ctx: &RenderContext,
) -> RenderResult<IndexMap<String, HalFormsTemplate>> {
	let total = model.affordances().len();
	let mut templates = IndexMap::new();
	for link in model.links() {
		for affordance in link.affordances() {
			let name = rendered_affordance_name(total, affordance);
			let template = template(link, affordance, &name, ctx)?;
			templates.insert(name, template);
		}
	}
	Ok(templates)
}

fn template(
	link: &Link,
	affordance: &Affordance,
	rendered_name: &str,
	ctx: &RenderContext,
) -> RenderResult<HalFormsTemplate> {
	let properties = match affordance.input() {
		Some(input) => resolve_properties(input, affordance.method(), ctx.registry(), ctx.text())?,
		None => Vec::new(),
	};

	// the template key is what clients address, so titles resolve by it
	let title = ctx.text().and_then(|resolver| {
		affordance_text(resolver, affordance.input(), rendered_name, TITLE_SUFFIX)
	});

	// the target is implied by the decorated link unless it differs
	let target = (affordance.target() != link.href()).then(|| affordance.target().to_string());

	Ok(HalFormsTemplate {
		title,
		method: affordance.method().as_str().to_string(),
		content_type: affordance.content_type().map(|mt| mt.to_string()),
		properties,
		target,
	})
}
