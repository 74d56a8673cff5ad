//! Links between resources

use crate::affordance::Affordance;
use crate::relation::LinkRelation;

/// A hypermedia link: a relation, an href (possibly a URI template) and a
/// set of optional RFC 8288 attributes.
///
/// Links are immutable once attached to a representation model. Every
/// attribute except the relation and href is optional and omitted from
/// rendered output when absent.
///
/// # Examples
///
/// ```
/// use hypermedia_core::Link;
///
/// let link = Link::new("self", "/orders/1");
/// assert!(!link.templated());
///
/// let search = Link::new("search", "/orders{?page,size}").title("Search orders");
/// assert!(search.templated());
/// assert_eq!(search.variables(), ["page", "size"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
	rel: LinkRelation,
	href: String,
	title: Option<String>,
	name: Option<String>,
	media_type: Option<String>,
	hreflang: Option<String>,
	profile: Option<String>,
	deprecation: Option<String>,
	affordances: Vec<Affordance>,
}

impl Link {
	pub fn new(rel: impl Into<LinkRelation>, href: impl Into<String>) -> Self {
		Self {
			rel: rel.into(),
			href: href.into(),
			title: None,
			name: None,
			media_type: None,
			hreflang: None,
			profile: None,
			deprecation: None,
			affordances: Vec::new(),
		}
	}

	/// Creates a `self` link.
	pub fn self_link(href: impl Into<String>) -> Self {
		Self::new(LinkRelation::self_rel(), href)
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
		self.media_type = Some(media_type.into());
		self
	}

	pub fn hreflang(mut self, hreflang: impl Into<String>) -> Self {
		self.hreflang = Some(hreflang.into());
		self
	}

	pub fn profile(mut self, profile: impl Into<String>) -> Self {
		self.profile = Some(profile.into());
		self
	}

	/// Marks the link deprecated, pointing at documentation for the
	/// replacement. Rendering a deprecated link logs a warning.
	pub fn deprecation(mut self, deprecation: impl Into<String>) -> Self {
		self.deprecation = Some(deprecation.into());
		self
	}

	/// Attaches an affordance. The affordance is owned by this link.
	pub fn with_affordance(mut self, affordance: Affordance) -> Self {
		self.affordances.push(affordance);
		self
	}

	pub fn rel(&self) -> &LinkRelation {
		&self.rel
	}

	pub fn href(&self) -> &str {
		&self.href
	}

	pub fn title_value(&self) -> Option<&str> {
		self.title.as_deref()
	}

	pub fn name_value(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn media_type_value(&self) -> Option<&str> {
		self.media_type.as_deref()
	}

	pub fn hreflang_value(&self) -> Option<&str> {
		self.hreflang.as_deref()
	}

	pub fn profile_value(&self) -> Option<&str> {
		self.profile.as_deref()
	}

	pub fn deprecation_value(&self) -> Option<&str> {
		self.deprecation.as_deref()
	}

	pub fn affordances(&self) -> &[Affordance] {
		&self.affordances
	}

	/// Whether the href is a URI template. Derived from the href, never
	/// stored.
	pub fn templated(&self) -> bool {
		self.href.contains('{')
	}

	/// The template variable names in the href, in order of appearance.
	///
	/// Understands simple `{var}` expressions and the query/expansion forms
	/// `{?a,b}`, `{&a}`, `{/a}`, `{#a}` and `{+a}`.
	pub fn variables(&self) -> Vec<String> {
		let mut variables = Vec::new();
		let mut rest = self.href.as_str();
		while let Some(start) = rest.find('{') {
			let Some(end) = rest[start..].find('}') else {
				break;
			};
			let expression = &rest[start + 1..start + end];
			let expression = expression.trim_start_matches(['?', '&', '/', '#', '+']);
			for variable in expression.split(',') {
				if !variable.is_empty() {
					variables.push(variable.to_string());
				}
			}
			rest = &rest[start + end + 1..];
		}
		variables
	}
}
