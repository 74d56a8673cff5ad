//! The format-agnostic representation model and its builder

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{BuildResult, BuilderError};
use crate::link::Link;
use crate::relation::LinkRelation;

/// Derives the relation key to embed a type under when the caller did not
/// supply one.
pub trait RelationProvider {
	/// Relation for a single resource of the given type, e.g. `order` for
	/// `shop::Order`. `None` when no relation can be derived.
	fn default_relation(&self, type_name: &str) -> Option<String>;

	/// Relation for a collection of the given type. Defaults to the naive
	/// plural of the single-resource relation.
	fn collection_relation(&self, type_name: &str) -> Option<String> {
		self.default_relation(type_name).map(|rel| format!("{rel}s"))
	}
}

/// Uncapitalizes the simple type name: `shop::OrderItem` becomes
/// `orderItem`, collections become `orderItems`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRelationProvider;

impl RelationProvider for DefaultRelationProvider {
	fn default_relation(&self, type_name: &str) -> Option<String> {
		let simple = simple_type_name(type_name);
		let mut chars = simple.chars();
		let first = chars.next()?;
		Some(first.to_lowercase().collect::<String>() + chars.as_str())
	}
}

/// Strips the module path and any generic arguments from a type name.
fn simple_type_name(type_name: &str) -> &str {
	let base = type_name.split('<').next().unwrap_or(type_name);
	base.rsplit("::").next().unwrap_or(base)
}

/// The in-memory, format-agnostic document: an entity payload, an ordered
/// link set, and embedded sub-resources keyed by relation.
///
/// Link order is significant: the first link per relation is the one used
/// wherever a format needs a single href. The embedded map preserves
/// insertion order, and a present key always maps to an actual sequence:
/// explicitly empty entries are recorded, implicit ones never appear.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepresentationModel {
	content: Value,
	links: Vec<Link>,
	embedded: IndexMap<String, Vec<RepresentationModel>>,
}

impl RepresentationModel {
	/// A model with no payload, links or embedded resources.
	pub fn empty() -> Self {
		Self {
			content: Value::Null,
			links: Vec::new(),
			embedded: IndexMap::new(),
		}
	}

	/// Wraps an entity payload.
	pub fn of<T: Serialize>(entity: &T) -> BuildResult<Self> {
		Ok(Self {
			content: serde_json::to_value(entity)?,
			links: Vec::new(),
			embedded: IndexMap::new(),
		})
	}

	pub fn content(&self) -> &Value {
		&self.content
	}

	pub fn has_content(&self) -> bool {
		!self.content.is_null()
	}

	pub fn links(&self) -> &[Link] {
		&self.links
	}

	/// The first link attached under the given relation.
	pub fn link_for(&self, rel: &str) -> Option<&Link> {
		self.links.iter().find(|link| link.rel().as_str() == rel)
	}

	/// All links attached under the given relation, in attachment order.
	pub fn links_for(&self, rel: &str) -> Vec<&Link> {
		self.links
			.iter()
			.filter(|link| link.rel().as_str() == rel)
			.collect()
	}

	pub fn embedded(&self) -> &IndexMap<String, Vec<RepresentationModel>> {
		&self.embedded
	}

	/// All affordances attached to any of this model's links.
	pub fn affordances(&self) -> Vec<&crate::Affordance> {
		self.links
			.iter()
			.flat_map(|link| link.affordances().iter())
			.collect()
	}
}

/// Builds a [`RepresentationModel`], including the two-phase HAL preview
/// idiom that couples an embedded payload to the link exposing it.
///
/// # Examples
///
/// ```
/// use hypermedia_core::{Link, ModelBuilder};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Order {
///     total: u32,
/// }
///
/// let model = ModelBuilder::from_entity(&Order { total: 50 })
///     .unwrap()
///     .link(Link::self_link("/orders/1"))
///     .preview(&Order { total: 20 })
///     .unwrap()
///     .for_link(Link::new("related", "/orders/2"))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert!(model.link_for("related").is_some());
/// assert!(model.embedded().contains_key("related"));
/// ```
pub struct ModelBuilder {
	content: Value,
	links: Vec<Link>,
	embedded: IndexMap<String, Vec<RepresentationModel>>,
	pending_preview: Option<RepresentationModel>,
	relation_provider: Box<dyn RelationProvider>,
}

impl ModelBuilder {
	/// Starts a builder with no payload.
	pub fn new() -> Self {
		Self {
			content: Value::Null,
			links: Vec::new(),
			embedded: IndexMap::new(),
			pending_preview: None,
			relation_provider: Box::new(DefaultRelationProvider),
		}
	}

	/// Starts a builder seeded with an entity payload.
	pub fn from_entity<T: Serialize>(entity: &T) -> BuildResult<Self> {
		let mut builder = Self::new();
		builder.content = serde_json::to_value(entity)?;
		Ok(builder)
	}

	/// Starts a builder holding a collection of items embedded under the
	/// given relation.
	pub fn collection_of<T: Serialize>(rel: impl Into<LinkRelation>, items: &[T]) -> BuildResult<Self> {
		Self::new().embed_under(rel, items)
	}

	/// Replaces the relation provider used for type-derived embedding.
	pub fn relation_provider(mut self, provider: impl RelationProvider + 'static) -> Self {
		self.relation_provider = Box::new(provider);
		self
	}

	/// Appends a top-level link.
	pub fn link(mut self, link: Link) -> Self {
		self.links.push(link);
		self
	}

	/// Embeds items under a relation derived from the item type.
	///
	/// An empty slice carries no type information at runtime and produces no
	/// entry at all; use [`embed_empty`](Self::embed_empty) to record an
	/// explicitly empty relation. Fails when the relation provider cannot
	/// derive a relation for a non-empty slice.
	pub fn embed<T: Serialize>(mut self, items: &[T]) -> BuildResult<Self> {
		if items.is_empty() {
			return Ok(self);
		}
		let type_name = std::any::type_name::<T>();
		let rel = self
			.relation_provider
			.collection_relation(type_name)
			.ok_or_else(|| BuilderError::UnderivableRelation(type_name.to_string()))?;
		let models = items
			.iter()
			.map(RepresentationModel::of)
			.collect::<BuildResult<Vec<_>>>()?;
		self.embedded.entry(rel).or_default().extend(models);
		Ok(self)
	}

	/// Embeds a single entity under its type-derived relation.
	pub fn embed_entity<T: Serialize>(mut self, entity: &T) -> BuildResult<Self> {
		let type_name = std::any::type_name::<T>();
		let rel = self
			.relation_provider
			.default_relation(type_name)
			.ok_or_else(|| BuilderError::UnderivableRelation(type_name.to_string()))?;
		self.embedded
			.entry(rel)
			.or_default()
			.push(RepresentationModel::of(entity)?);
		Ok(self)
	}

	/// Embeds items under an explicit relation; an empty slice records an
	/// explicitly empty entry.
	pub fn embed_under<T: Serialize>(
		mut self,
		rel: impl Into<LinkRelation>,
		items: &[T],
	) -> BuildResult<Self> {
		let rel = rel.into();
		let models = items
			.iter()
			.map(RepresentationModel::of)
			.collect::<BuildResult<Vec<_>>>()?;
		self.embedded
			.entry(rel.as_str().to_string())
			.or_default()
			.extend(models);
		Ok(self)
	}

	/// Records an explicitly empty relation entry.
	///
	/// Needed because an empty sequence carries no type information to
	/// derive a relation from.
	pub fn embed_empty(mut self, rel: impl Into<LinkRelation>) -> Self {
		let rel = rel.into();
		self.embedded.entry(rel.as_str().to_string()).or_default();
		self
	}

	/// Embeds an already-built model under an explicit relation.
	pub fn embed_model(mut self, rel: impl Into<LinkRelation>, model: RepresentationModel) -> Self {
		let rel = rel.into();
		self.embedded
			.entry(rel.as_str().to_string())
			.or_default()
			.push(model);
		self
	}

	/// Stages a payload as a pending preview, to be completed by
	/// [`for_link`](Self::for_link). Fails if a preview is already pending.
	pub fn preview<T: Serialize>(self, payload: &T) -> BuildResult<Self> {
		let model = RepresentationModel::of(payload)?;
		self.preview_model(model)
	}

	/// Stages an already-built model as a pending preview.
	pub fn preview_model(mut self, model: RepresentationModel) -> BuildResult<Self> {
		if self.pending_preview.is_some() {
			return Err(BuilderError::UnterminatedPreview);
		}
		self.pending_preview = Some(model);
		Ok(self)
	}

	/// Completes a pending preview: atomically adds the link and embeds the
	/// staged payload under the link's relation, keeping the two in sync.
	pub fn for_link(mut self, link: Link) -> BuildResult<Self> {
		let preview = self
			.pending_preview
			.take()
			.ok_or(BuilderError::MissingPreview)?;
		self.embedded
			.entry(link.rel().as_str().to_string())
			.or_default()
			.push(preview);
		self.links.push(link);
		Ok(self)
	}

	/// Finalizes the model. Fails if a staged preview was never completed.
	pub fn build(self) -> BuildResult<RepresentationModel> {
		if self.pending_preview.is_some() {
			return Err(BuilderError::UnterminatedPreview);
		}
		Ok(RepresentationModel {
			content: self.content,
			links: self.links,
			embedded: self.embedded,
		})
	}
}

impl std::fmt::Debug for ModelBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ModelBuilder")
			.field("content", &self.content)
			.field("links", &self.links)
			.field("embedded", &self.embedded)
			.field("pending_preview", &self.pending_preview)
			.field("relation_provider", &"<dyn RelationProvider>")
			.finish()
	}
}

impl Default for ModelBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Serialize;

	#[derive(Serialize)]
	struct Order {
		total: u32,
	}

	#[derive(Serialize)]
	struct OrderItem {
		sku: String,
	}

	#[test]
	fn test_default_relation_provider() {
		let provider = DefaultRelationProvider;
		assert_eq!(
			provider.default_relation("shop::orders::Order").as_deref(),
			Some("order")
		);
		assert_eq!(
			provider.collection_relation("shop::OrderItem").as_deref(),
			Some("orderItems")
		);
	}

	#[test]
	fn test_embed_derives_collection_relation() {
		let model = ModelBuilder::new()
			.embed(&[Order { total: 1 }, Order { total: 2 }])
			.unwrap()
			.build()
			.unwrap();
		assert_eq!(model.embedded()["orders"].len(), 2);
	}

	#[test]
	fn test_collection_of_embeds_under_explicit_relation() {
		let model = ModelBuilder::collection_of("orders", &[Order { total: 1 }])
			.unwrap()
			.build()
			.unwrap();
		assert_eq!(model.embedded()["orders"].len(), 1);
	}

	#[test]
	fn test_embed_empty_slice_records_nothing() {
		let items: Vec<Order> = vec![];
		let model = ModelBuilder::new().embed(&items).unwrap().build().unwrap();
		assert!(model.embedded().is_empty());
	}

	#[test]
	fn test_embed_empty_records_explicit_entry() {
		let model = ModelBuilder::new().embed_empty("orders").build().unwrap();
		assert_eq!(model.embedded()["orders"].len(), 0);
	}

	#[test]
	fn test_embed_without_derivable_relation_fails() {
		struct Nameless;
		impl RelationProvider for Nameless {
			fn default_relation(&self, _type_name: &str) -> Option<String> {
				None
			}
		}

		let err = ModelBuilder::new()
			.relation_provider(Nameless)
			.embed(&[Order { total: 1 }])
			.unwrap_err();
		assert!(matches!(err, BuilderError::UnderivableRelation(_)));
	}

	#[test]
	fn test_preview_for_link_couples_link_and_embedded() {
		let model = ModelBuilder::from_entity(&Order { total: 50 })
			.unwrap()
			.preview(&OrderItem { sku: "a-1".into() })
			.unwrap()
			.for_link(Link::new("items", "/orders/1/items"))
			.unwrap()
			.build()
			.unwrap();

		assert!(model.link_for("items").is_some());
		assert_eq!(model.embedded()["items"].len(), 1);
	}

	#[test]
	fn test_for_link_without_preview_fails() {
		let err = ModelBuilder::new()
			.for_link(Link::new("items", "/items"))
			.unwrap_err();
		assert!(matches!(err, BuilderError::MissingPreview));
	}

	#[test]
	fn test_unterminated_preview_fails_at_build() {
		let err = ModelBuilder::new()
			.preview(&Order { total: 1 })
			.unwrap()
			.build()
			.unwrap_err();
		assert!(matches!(err, BuilderError::UnterminatedPreview));
	}

	#[test]
	fn test_second_preview_without_for_link_fails() {
		let err = ModelBuilder::new()
			.preview(&Order { total: 1 })
			.unwrap()
			.preview(&Order { total: 2 })
			.unwrap_err();
		assert!(matches!(err, BuilderError::UnterminatedPreview));
	}

	#[test]
	fn test_first_link_per_relation_wins() {
		let model = ModelBuilder::new()
			.link(Link::new("item", "/items/1"))
			.link(Link::new("item", "/items/2"))
			.build()
			.unwrap();
		assert_eq!(model.link_for("item").unwrap().href(), "/items/1");
		assert_eq!(model.links_for("item").len(), 2);
	}
}
