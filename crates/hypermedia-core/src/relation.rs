//! Link relation names and the IANA registry

use std::fmt;

use serde::{Deserialize, Serialize};

/// Relation names from the IANA link-relations registry.
///
/// Relations in this list are never curie-compacted.
const IANA_RELATIONS: &[&str] = &[
	"about",
	"alternate",
	"appendix",
	"archives",
	"author",
	"blocked-by",
	"bookmark",
	"canonical",
	"chapter",
	"cite-as",
	"collection",
	"contents",
	"copyright",
	"create-form",
	"curies",
	"current",
	"describedby",
	"describes",
	"disclosure",
	"dns-prefetch",
	"duplicate",
	"edit",
	"edit-form",
	"edit-media",
	"enclosure",
	"external",
	"first",
	"glossary",
	"help",
	"hosts",
	"hub",
	"icon",
	"index",
	"item",
	"last",
	"latest-version",
	"license",
	"memento",
	"next",
	"next-archive",
	"nofollow",
	"noopener",
	"noreferrer",
	"original",
	"payment",
	"pingback",
	"preconnect",
	"predecessor-version",
	"prefetch",
	"preload",
	"prev",
	"prev-archive",
	"preview",
	"previous",
	"privacy-policy",
	"profile",
	"related",
	"replies",
	"restconf",
	"search",
	"section",
	"self",
	"service",
	"start",
	"stylesheet",
	"subsection",
	"successor-version",
	"tag",
	"terms-of-service",
	"timegate",
	"timemap",
	"type",
	"up",
	"version-history",
	"via",
	"webmention",
	"working-copy",
	"working-copy-of",
];

/// A link relation name.
///
/// Multiple links may share a relation; the first link attached under a
/// relation is the one used wherever a format needs a single href.
///
/// # Examples
///
/// ```
/// use hypermedia_core::LinkRelation;
///
/// let rel = LinkRelation::new("self");
/// assert!(rel.is_registered());
///
/// let custom = LinkRelation::new("orders");
/// assert!(!custom.is_registered());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkRelation(String);

impl LinkRelation {
	pub const SELF: &'static str = "self";
	pub const ITEM: &'static str = "item";
	pub const COLLECTION: &'static str = "collection";
	pub const CURIES: &'static str = "curies";
	pub const NEXT: &'static str = "next";
	pub const PREV: &'static str = "prev";
	pub const SEARCH: &'static str = "search";

	pub fn new(rel: impl Into<String>) -> Self {
		Self(rel.into())
	}

	/// Returns the relation for `self`.
	pub fn self_rel() -> Self {
		Self::new(Self::SELF)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Whether this relation is in the IANA link-relations registry.
	pub fn is_registered(&self) -> bool {
		IANA_RELATIONS.binary_search(&self.0.as_str()).is_ok()
	}

	/// Whether this relation is already in `prefix:rel` compact form.
	pub fn is_curied(&self) -> bool {
		self.0.contains(':')
	}
}

impl fmt::Display for LinkRelation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for LinkRelation {
	fn from(rel: &str) -> Self {
		Self::new(rel)
	}
}

impl From<String> for LinkRelation {
	fn from(rel: String) -> Self {
		Self(rel)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_iana_list_is_sorted() {
		// binary_search above relies on this
		let mut sorted = IANA_RELATIONS.to_vec();
		sorted.sort_unstable();
		assert_eq!(sorted, IANA_RELATIONS);
	}

	#[test]
	fn test_registered_relations() {
		assert!(LinkRelation::new("self").is_registered());
		assert!(LinkRelation::new("curies").is_registered());
		assert!(!LinkRelation::new("orders").is_registered());
	}

	#[test]
	fn test_curied_detection() {
		assert!(LinkRelation::new("acme:orders").is_curied());
		assert!(!LinkRelation::new("orders").is_curied());
	}
}
