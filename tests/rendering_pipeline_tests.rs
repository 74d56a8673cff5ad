//! End-to-end rendering pipeline tests
//!
//! One representation model rendered through the facade under every
//! supported media type.

use assert_json_diff::assert_json_eq;
use http::Method;
use serde::Serialize;
use serde_json::json;

use hypermedia::prelude::*;
use hypermedia::{CollectionJsonFormat, HalFormat, HalFormsFormat, UberFormat};

#[derive(Serialize)]
struct Order {
	id: u32,
	total: u32,
}

#[derive(Serialize)]
struct LineItem {
	sku: String,
}

fn order_input() -> TypeDescriptor {
	TypeDescriptor::new("shop::Order").field(
		"total",
		SemanticType::Number,
		ConstraintFacts::new().not_null(),
	)
}

fn order_model() -> RepresentationModel {
	ModelBuilder::from_entity(&Order { id: 1, total: 50 })
		.unwrap()
		.link(
			Link::self_link("/orders/1").with_affordance(
				Affordance::afford(Method::PUT, "/orders/1").input(order_input()).build(),
			),
		)
		.embed_under("items", &[LineItem { sku: "a-1".into() }])
		.unwrap()
		.build()
		.unwrap()
}

#[test]
fn test_one_model_renders_under_every_media_type() {
	let registry = FormatRegistry::with_defaults();
	let ctx = RenderContext::new();
	let model = order_model();

	let hal = registry
		.backend_for(&MediaType::HAL_JSON)
		.unwrap()
		.render(&model, &ctx)
		.unwrap();
	assert!(hal.get("_links").is_some());
	assert!(hal.get("_embedded").is_some());

	let hal_forms = registry
		.backend_for(&MediaType::HAL_FORMS_JSON)
		.unwrap()
		.render(&model, &ctx)
		.unwrap();
	assert!(hal_forms["_templates"]["default"].is_object());

	let collection = registry
		.backend_for(&MediaType::COLLECTION_JSON)
		.unwrap()
		.render(&model, &ctx)
		.unwrap();
	assert_eq!(collection["collection"]["version"], json!("1.0"));

	let uber = registry
		.backend_for(&MediaType::UBER_JSON)
		.unwrap()
		.render(&model, &ctx)
		.unwrap();
	assert_eq!(uber["uber"]["version"], json!("1.0"));

	let alps = registry
		.backend_for(&MediaType::ALPS_JSON)
		.unwrap()
		.render(&model, &ctx)
		.unwrap();
	assert!(alps["alps"]["descriptor"].is_array());
}

#[test]
fn test_repeated_rendering_is_byte_identical() {
	let registry = FormatRegistry::with_defaults();
	let ctx = RenderContext::new();
	let model = order_model();

	for media_type in registry.supported_media_types() {
		let backend = registry.backend_for(&media_type).unwrap();
		let first = serde_json::to_string(&backend.render(&model, &ctx).unwrap()).unwrap();
		let second = serde_json::to_string(&backend.render(&model, &ctx).unwrap()).unwrap();
		assert_eq!(first, second, "{media_type} rendering is not idempotent");
	}
}

#[test]
fn test_rendering_does_not_mutate_the_model() {
	let registry = FormatRegistry::with_defaults();
	let ctx = RenderContext::new();
	let model = order_model();
	let snapshot = model.clone();

	for media_type in registry.supported_media_types() {
		registry
			.backend_for(&media_type)
			.unwrap()
			.render(&model, &ctx)
			.unwrap();
	}
	assert_eq!(model, snapshot);
}

#[test]
fn test_policies_apply_consistently_across_formats() {
	let model = ModelBuilder::new()
		.link(Link::self_link("/orders/1"))
		.link(Link::new("payments", "/orders/1/payments"))
		.build()
		.unwrap();

	let ctx = RenderContext::new()
		.curie_provider(CurieProvider::new("acme", "https://docs.acme.com/rels/{rel}").unwrap());

	let hal = HalFormat.render(&model, &ctx).unwrap();
	assert!(hal["_links"]["acme:payments"].is_object());

	let collection = CollectionJsonFormat.render(&model, &ctx).unwrap();
	assert_eq!(
		collection["collection"]["links"][0]["rel"],
		json!("acme:payments")
	);

	let uber = UberFormat.render(&model, &ctx).unwrap();
	assert_json_eq!(uber["uber"]["data"][1]["rel"], json!(["acme:payments"]));
}

#[test]
fn test_patch_affordance_renders_no_required_properties() {
	let model = ModelBuilder::new()
		.link(
			Link::self_link("/orders/1").with_affordance(
				Affordance::afford(Method::PATCH, "/orders/1").input(order_input()).build(),
			),
		)
		.build()
		.unwrap();

	let document = HalFormsFormat.render(&model, &RenderContext::new()).unwrap();
	let properties = document["_templates"]["default"]["properties"]
		.as_array()
		.unwrap();
	assert!(properties.iter().all(|p| p.get("required").is_none()));
}
