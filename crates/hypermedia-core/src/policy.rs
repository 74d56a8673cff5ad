//! Single-versus-array rendering policy for link relations

use regex::Regex;

use crate::error::{ConfigurationError, ConfigurationResult};

/// How a rule matches a relation name.
#[derive(Debug, Clone)]
enum RelMatcher {
	Exact(String),
	Pattern(Regex),
}

impl RelMatcher {
	fn matches(&self, rel: &str) -> bool {
		match self {
			RelMatcher::Exact(exact) => exact == rel,
			RelMatcher::Pattern(pattern) => pattern.is_match(rel),
		}
	}
}

#[derive(Debug, Clone)]
struct RenderRule {
	matcher: RelMatcher,
	array_when_single: bool,
}

/// Decides whether a relation with a single link renders as an object or a
/// one-element array.
///
/// Relations with more than one link always render as arrays; that part is
/// not configurable. For single links, rules are consulted in registration
/// order and the first match wins. Evaluation is registration order, not
/// specificity order: a broad pattern registered before an exact rule
/// shadows it. Callers who register overlapping rules need to order them
/// accordingly.
///
/// # Examples
///
/// ```
/// use hypermedia_core::LinkRenderPolicy;
///
/// let policy = LinkRenderPolicy::new()
///     .render_single_as_array("item")
///     .pattern_rule("http*", true)
///     .unwrap();
///
/// assert!(policy.should_render_as_array("item", 1));
/// assert!(policy.should_render_as_array("httpdoc", 1));
/// assert!(!policy.should_render_as_array("self", 1));
/// assert!(policy.should_render_as_array("self", 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinkRenderPolicy {
	rules: Vec<RenderRule>,
}

impl LinkRenderPolicy {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers an exact-relation rule forcing a one-element array.
	pub fn render_single_as_array(mut self, rel: impl Into<String>) -> Self {
		self.rules.push(RenderRule {
			matcher: RelMatcher::Exact(rel.into()),
			array_when_single: true,
		});
		self
	}

	/// Registers an exact-relation rule forcing a single object.
	pub fn render_single(mut self, rel: impl Into<String>) -> Self {
		self.rules.push(RenderRule {
			matcher: RelMatcher::Exact(rel.into()),
			array_when_single: false,
		});
		self
	}

	/// Registers a wildcard rule. `*` matches any run of characters, so
	/// `http*` matches `httpdoc` but not `self`.
	pub fn pattern_rule(
		mut self,
		pattern: impl Into<String>,
		array_when_single: bool,
	) -> ConfigurationResult<Self> {
		let pattern = pattern.into();
		let regex = compile_wildcard(&pattern)?;
		self.rules.push(RenderRule {
			matcher: RelMatcher::Pattern(regex),
			array_when_single,
		});
		Ok(self)
	}

	/// Whether the given relation should render as an array.
	///
	/// More than one link for the relation always yields an array. A single
	/// link consults the rules in registration order; no match defaults to a
	/// single object.
	pub fn should_render_as_array(&self, rel: &str, count: usize) -> bool {
		if count > 1 {
			return true;
		}
		for rule in &self.rules {
			if rule.matcher.matches(rel) {
				tracing::debug!(
					rel,
					array_when_single = rule.array_when_single,
					"relation render rule matched"
				);
				return rule.array_when_single;
			}
		}
		false
	}
}

/// Translates a `*` wildcard pattern into an anchored regex.
fn compile_wildcard(pattern: &str) -> ConfigurationResult<Regex> {
	let mut translated = String::with_capacity(pattern.len() + 4);
	translated.push('^');
	for part in pattern.split('*') {
		if !translated.ends_with('^') {
			translated.push_str(".*");
		}
		translated.push_str(&regex::escape(part));
	}
	translated.push('$');
	Regex::new(&translated).map_err(|source| ConfigurationError::InvalidPattern {
		pattern: pattern.to_string(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("http*", "httpdoc", true)]
	#[case("http*", "http", true)]
	#[case("http*", "self", false)]
	#[case("*-form", "edit-form", true)]
	#[case("*-form", "form-data", false)]
	fn test_wildcard_matching(#[case] pattern: &str, #[case] rel: &str, #[case] expected: bool) {
		let regex = compile_wildcard(pattern).unwrap();
		assert_eq!(regex.is_match(rel), expected);
	}

	#[test]
	fn test_multiple_links_always_array() {
		let policy = LinkRenderPolicy::new().render_single("item");
		assert!(policy.should_render_as_array("item", 2));
		assert!(policy.should_render_as_array("anything", 3));
	}

	#[test]
	fn test_no_match_defaults_to_single() {
		let policy = LinkRenderPolicy::new();
		assert!(!policy.should_render_as_array("self", 1));
	}

	#[test]
	fn test_registration_order_wins_over_specificity() {
		// the broad pattern is registered first and shadows the exact rule
		let policy = LinkRenderPolicy::new()
			.pattern_rule("ord*", true)
			.unwrap()
			.render_single("orders");
		assert!(policy.should_render_as_array("orders", 1));

		// reversed registration, reversed outcome
		let policy = LinkRenderPolicy::new()
			.render_single("orders")
			.pattern_rule("ord*", true)
			.unwrap();
		assert!(!policy.should_render_as_array("orders", 1));
	}

	#[test]
	fn test_wildcard_escapes_regex_metacharacters() {
		let policy = LinkRenderPolicy::new().pattern_rule("a.b*", true).unwrap();
		assert!(policy.should_render_as_array("a.bc", 1));
		assert!(!policy.should_render_as_array("axbc", 1));
	}
}
