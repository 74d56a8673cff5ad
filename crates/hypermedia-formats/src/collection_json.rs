//! Collection+JSON (`application/vnd.collection+json`) rendering

use http::Method;
use serde::Serialize;
use serde_json::Value;

use hypermedia_core::{Affordance, Link, LinkRelation, MediaType, RepresentationModel};
use hypermedia_metadata::resolve_properties;

use crate::render::{note_deprecation, FormatBackend, RenderContext, RenderResult};

const VERSION: &str = "1.0";

/// Renders the `collection` document: top-level `href` and `links`, one
/// item per resource with its own `self` href, and a write `template`
/// derived from the first unsafe affordance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionJsonFormat;

impl FormatBackend for CollectionJsonFormat {
	fn media_type(&self) -> MediaType {
		MediaType::COLLECTION_JSON
	}

	fn render(&self, model: &RepresentationModel, ctx: &RenderContext) -> RenderResult<Value> {
		let document = CollectionJsonDocument {
			collection: collection(model, ctx)?,
		};
		Ok(serde_json::to_value(document)?)
	}
}

#[derive(Debug, Serialize)]
struct CollectionJsonDocument {
	collection: Collection,
}

#[derive(Debug, Serialize)]
struct Collection {
	version: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	href: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	links: Vec<CollectionJsonLink>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	items: Vec<Item>,
	#[serde(skip_serializing_if = "Option::is_none")]
	template: Option<Template>,
}

#[derive(Debug, Serialize)]
struct CollectionJsonLink {
	rel: String,
	href: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	prompt: Option<String>,
}

#[derive(Debug, Serialize)]
struct Item {
	#[serde(skip_serializing_if = "Option::is_none")]
	href: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	data: Vec<DataEntry>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	links: Vec<CollectionJsonLink>,
}

#[derive(Debug, Serialize)]
struct DataEntry {
	name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	value: Option<Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	prompt: Option<String>,
}

#[derive(Debug, Serialize)]
struct Template {
	data: Vec<DataEntry>,
}

fn collection(model: &RepresentationModel, ctx: &RenderContext) -> RenderResult<Collection> {
	let href = model
		.link_for(LinkRelation::SELF)
		.map(|link| link.href().to_string());

	let items = if model.embedded().is_empty() {
		// the model itself is the sole item; its self href is duplicated at
		// document and item level
		match item(model, href.clone(), false, ctx) {
			Some(item) => vec![item],
			None => Vec::new(),
		}
	} else {
		model
			.embedded()
			.values()
			.flatten()
			.filter_map(|child| {
				let child_href = child
					.link_for(LinkRelation::SELF)
					.map(|link| link.href().to_string());
				item(child, child_href, true, ctx)
			})
			.collect()
	};

	Ok(Collection {
		version: VERSION,
		href,
		links: links(model, ctx),
		items,
		template: template(model, ctx)?,
	})
}

/// Builds an item from a model's content. Returns `None` for a model with
/// nothing to show.
fn item(
	model: &RepresentationModel,
	href: Option<String>,
	include_links: bool,
	ctx: &RenderContext,
) -> Option<Item> {
	let data = match model.content() {
		Value::Object(fields) => fields
			.iter()
			.map(|(name, value)| DataEntry {
				name: name.clone(),
				value: Some(value.clone()),
				prompt: None,
			})
			.collect(),
		_ => Vec::new(),
	};
	if data.is_empty() && href.is_none() {
		return None;
	}
	let links = if include_links {
		model
			.links()
			.iter()
			.filter(|link| link.rel().as_str() != LinkRelation::SELF)
			.map(|link| plain_link(link, ctx))
			.collect()
	} else {
		Vec::new()
	};
	Some(Item { href, data, links })
}

fn links(model: &RepresentationModel, ctx: &RenderContext) -> Vec<CollectionJsonLink> {
	model
		.links()
		.iter()
		.filter(|link| link.rel().as_str() != LinkRelation::SELF)
		.map(|link| {
			note_deprecation(link);
			plain_link(link, ctx)
		})
		.collect()
}

fn plain_link(link: &Link, ctx: &RenderContext) -> CollectionJsonLink {
	CollectionJsonLink {
		rel: ctx.compact(link.rel()).as_str().to_string(),
		href: link.href().to_string(),
		name: link.name_value().map(String::from),
		prompt: link.title_value().map(String::from),
	}
}

/// The write template comes from the first affordance with an unsafe
/// method; its input properties become empty-valued data entries.
fn template(model: &RepresentationModel, ctx: &RenderContext) -> RenderResult<Option<Template>> {
	let Some(affordance) = first_unsafe_affordance(model) else {
		return Ok(None);
	};
	let Some(input) = affordance.input() else {
		return Ok(None);
	};
	let properties = resolve_properties(input, affordance.method(), ctx.registry(), ctx.text())?;
	let data = properties
		.into_iter()
		.map(|property| DataEntry {
			name: property.name,
			value: Some(Value::String(String::new())),
			prompt: property.prompt,
		})
		.collect();
	Ok(Some(Template { data }))
}

fn first_unsafe_affordance(model: &RepresentationModel) -> Option<&Affordance> {
	model.affordances().into_iter().find(|affordance| {
		let method = affordance.method();
		method == Method::POST || method == Method::PUT || method == Method::PATCH
	})
}
