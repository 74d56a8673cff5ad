//! HAL (`application/hal+json`) rendering

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use hypermedia_core::{Link, LinkRelation, MediaType, RepresentationModel};

use crate::render::{note_deprecation, FormatBackend, RenderContext, RenderResult};

/// Renders `_links` / `_embedded` documents with the entity payload inlined
/// at the top level.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalFormat;

impl FormatBackend for HalFormat {
	fn media_type(&self) -> MediaType {
		MediaType::HAL_JSON
	}

	fn render(&self, model: &RepresentationModel, ctx: &RenderContext) -> RenderResult<Value> {
		hal_document(model, ctx, true).map(Value::Object)
	}
}

fn is_false(value: &bool) -> bool {
	!*value
}

/// The wire shape of a single HAL link object.
#[derive(Debug, Serialize)]
pub(crate) struct HalLink {
	href: String,
	#[serde(skip_serializing_if = "is_false")]
	templated: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	name: Option<String>,
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	media_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	hreflang: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	profile: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	deprecation: Option<String>,
}

impl From<&Link> for HalLink {
	fn from(link: &Link) -> Self {
		Self {
			href: link.href().to_string(),
			templated: link.templated(),
			title: link.title_value().map(String::from),
			name: link.name_value().map(String::from),
			media_type: link.media_type_value().map(String::from),
			hreflang: link.hreflang_value().map(String::from),
			profile: link.profile_value().map(String::from),
			deprecation: link.deprecation_value().map(String::from),
		}
	}
}

/// Builds one HAL document. Only the top-level document carries the
/// `curies` entry; nested embedded documents compact their relation keys
/// but never repeat it.
pub(crate) fn hal_document(
	model: &RepresentationModel,
	ctx: &RenderContext,
	top_level: bool,
) -> RenderResult<Map<String, Value>> {
	let mut doc = Map::new();

	match model.content() {
		Value::Object(fields) => {
			for (key, value) in fields {
				doc.insert(key.clone(), value.clone());
			}
		}
		Value::Null => {}
		other => {
			tracing::warn!(payload = %other, "non-object payload cannot be inlined into a HAL document");
		}
	}

	let mut compacted_any = false;

	// group links by authored relation, first-seen order
	let mut groups: IndexMap<String, Vec<&Link>> = IndexMap::new();
	for link in model.links() {
		note_deprecation(link);
		groups
			.entry(link.rel().as_str().to_string())
			.or_default()
			.push(link);
	}

	let mut links = Map::new();
	for (rel, group) in &groups {
		let key = ctx.compact(&LinkRelation::new(rel.clone()));
		if key.as_str() != rel {
			compacted_any = true;
		}
		links.insert(key.as_str().to_string(), link_group_value(rel, group, ctx)?);
	}

	let mut embedded = Map::new();
	for (rel, children) in model.embedded() {
		let key = ctx.compact(&LinkRelation::new(rel.clone()));
		if key.as_str() != rel.as_str() {
			compacted_any = true;
		}
		embedded.insert(
			key.as_str().to_string(),
			embedded_value(rel, children, ctx)?,
		);
	}

	if top_level && compacted_any && !links.contains_key(LinkRelation::CURIES) {
		if let Some(provider) = ctx.curie() {
			let curie_link = HalLink::from(&provider.curie_link());
			// always an array, exactly one entry per provider scope
			links.insert(
				LinkRelation::CURIES.to_string(),
				Value::Array(vec![serde_json::to_value(curie_link)?]),
			);
		}
	}

	if !links.is_empty() {
		doc.insert("_links".to_string(), Value::Object(links));
	}
	if !embedded.is_empty() {
		doc.insert("_embedded".to_string(), Value::Object(embedded));
	}

	Ok(doc)
}

/// Renders one relation's links as a single object or an array, per policy.
/// The policy matches the authored relation, not the compacted key.
fn link_group_value(rel: &str, group: &[&Link], ctx: &RenderContext) -> RenderResult<Value> {
	if ctx.link_policy().should_render_as_array(rel, group.len()) {
		let rendered = group
			.iter()
			.map(|link| serde_json::to_value(HalLink::from(*link)))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Value::Array(rendered))
	} else {
		// single-object rendering only ever applies to a one-link group
		Ok(serde_json::to_value(HalLink::from(group[0]))?)
	}
}

/// Renders one relation's embedded documents. Explicitly empty entries stay
/// empty arrays; single documents follow the same policy as links.
fn embedded_value(
	rel: &str,
	children: &[RepresentationModel],
	ctx: &RenderContext,
) -> RenderResult<Value> {
	if children.is_empty() {
		return Ok(Value::Array(Vec::new()));
	}
	if ctx.link_policy().should_render_as_array(rel, children.len()) {
		let rendered = children
			.iter()
			.map(|child| hal_document(child, ctx, false).map(Value::Object))
			.collect::<RenderResult<Vec<_>>>()?;
		Ok(Value::Array(rendered))
	} else {
		Ok(Value::Object(hal_document(&children[0], ctx, false)?))
	}
}
