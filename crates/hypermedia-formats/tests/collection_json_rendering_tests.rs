//! Collection+JSON rendering tests
//!
//! The `collection` document: `href`/`links`/`items` triple, `self`
//! duplication at document and item level, and the write template.

use assert_json_diff::assert_json_eq;
use http::Method;
use serde::Serialize;
use serde_json::json;

use hypermedia_core::{
	Affordance, ConstraintFacts, Link, MediaType, ModelBuilder, RepresentationModel, SemanticType,
	TypeDescriptor,
};
use hypermedia_formats::{CollectionJsonFormat, FormatBackend, RenderContext};
use hypermedia_metadata::MapTextResolver;

#[derive(Serialize)]
struct Order {
	id: u32,
	total: u32,
}

fn order_item(id: u32, total: u32) -> RepresentationModel {
	ModelBuilder::from_entity(&Order { id, total })
		.unwrap()
		.link(Link::self_link(format!("/orders/{id}")))
		.link(Link::new("edit", format!("/orders/{id}/edit")))
		.build()
		.unwrap()
}

fn render(model: &RepresentationModel, ctx: &RenderContext) -> serde_json::Value {
	CollectionJsonFormat.render(model, ctx).unwrap()
}

#[test]
fn test_media_type() {
	assert_eq!(CollectionJsonFormat.media_type(), MediaType::COLLECTION_JSON);
}

#[test]
fn test_collection_of_embedded_items() {
	let model = ModelBuilder::new()
		.link(Link::self_link("/orders"))
		.link(Link::new("profile", "/profiles/orders"))
		.embed_model("orders", order_item(1, 50))
		.embed_model("orders", order_item(2, 75))
		.build()
		.unwrap();

	let document = render(&model, &RenderContext::new());

	assert_json_eq!(
		document,
		json!({
			"collection": {
				"version": "1.0",
				"href": "/orders",
				"links": [{ "rel": "profile", "href": "/profiles/orders" }],
				"items": [
					{
						"href": "/orders/1",
						"data": [
							{ "name": "id", "value": 1 },
							{ "name": "total", "value": 50 }
						],
						"links": [{ "rel": "edit", "href": "/orders/1/edit" }]
					},
					{
						"href": "/orders/2",
						"data": [
							{ "name": "id", "value": 2 },
							{ "name": "total", "value": 75 }
						],
						"links": [{ "rel": "edit", "href": "/orders/2/edit" }]
					}
				]
			}
		})
	);
}

#[test]
fn test_single_resource_self_duplicated_at_document_and_item_level() {
	let model = order_item(1, 50);
	let document = render(&model, &RenderContext::new());

	assert_eq!(document["collection"]["href"], json!("/orders/1"));
	assert_eq!(document["collection"]["items"][0]["href"], json!("/orders/1"));
}

#[test]
fn test_template_from_first_unsafe_affordance() {
	let input = TypeDescriptor::new("shop::Order")
		.field("total", SemanticType::Number, ConstraintFacts::new())
		.field("note", SemanticType::String, ConstraintFacts::new());
	let model = ModelBuilder::new()
		.link(
			Link::self_link("/orders")
				.with_affordance(Affordance::afford(Method::GET, "/orders").build())
				.with_affordance(Affordance::afford(Method::POST, "/orders").input(input).build()),
		)
		.build()
		.unwrap();

	let document = render(&model, &RenderContext::new());

	assert_json_eq!(
		document["collection"]["template"],
		json!({
			"data": [
				{ "name": "total", "value": "" },
				{ "name": "note", "value": "" }
			]
		})
	);
}

#[test]
fn test_no_template_without_unsafe_affordance() {
	let model = ModelBuilder::new()
		.link(
			Link::self_link("/orders")
				.with_affordance(Affordance::afford(Method::GET, "/orders").build()),
		)
		.build()
		.unwrap();

	let document = render(&model, &RenderContext::new());
	assert!(document["collection"].get("template").is_none());
}

#[test]
fn test_template_data_carries_prompts() {
	let input = TypeDescriptor::new("shop::Order").field(
		"total",
		SemanticType::Number,
		ConstraintFacts::new(),
	);
	let model = ModelBuilder::new()
		.link(
			Link::self_link("/orders")
				.with_affordance(Affordance::afford(Method::POST, "/orders").input(input).build()),
		)
		.build()
		.unwrap();

	let resolver = MapTextResolver::new().with("shop::Order.total_prompt", "Order total");
	let ctx = RenderContext::new().text_resolver(resolver);
	let document = render(&model, &ctx);

	assert_json_eq!(
		document["collection"]["template"]["data"][0],
		json!({ "name": "total", "value": "", "prompt": "Order total" })
	);
}

#[test]
fn test_link_title_becomes_prompt() {
	let model = ModelBuilder::new()
		.link(Link::self_link("/orders"))
		.link(Link::new("search", "/orders{?q}").title("Search orders"))
		.build()
		.unwrap();

	let document = render(&model, &RenderContext::new());
	assert_json_eq!(
		document["collection"]["links"][0],
		json!({ "rel": "search", "href": "/orders{?q}", "prompt": "Search orders" })
	);
}
