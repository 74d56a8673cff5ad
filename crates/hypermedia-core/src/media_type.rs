//! Media type identifiers for the supported hypermedia formats

use std::borrow::Cow;
use std::fmt;

/// A media type identifier.
///
/// Only carries the type/subtype pair; parameters and quality values belong
/// to the content-negotiation layer, which picks a backend before rendering
/// starts.
///
/// # Examples
///
/// ```
/// use hypermedia_core::MediaType;
///
/// assert_eq!(MediaType::HAL_JSON.to_string(), "application/hal+json");
///
/// let parsed = MediaType::parse("application/hal+json").unwrap();
/// assert_eq!(parsed, MediaType::HAL_JSON);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
	type_: Cow<'static, str>,
	subtype: Cow<'static, str>,
}

impl MediaType {
	pub const JSON: MediaType = MediaType::constant("application", "json");
	pub const HAL_JSON: MediaType = MediaType::constant("application", "hal+json");
	pub const HAL_FORMS_JSON: MediaType = MediaType::constant("application", "prs.hal-forms+json");
	pub const COLLECTION_JSON: MediaType = MediaType::constant("application", "vnd.collection+json");
	pub const UBER_JSON: MediaType = MediaType::constant("application", "vnd.amundsen-uber+json");
	pub const ALPS_JSON: MediaType = MediaType::constant("application", "alps+json");

	const fn constant(type_: &'static str, subtype: &'static str) -> Self {
		Self {
			type_: Cow::Borrowed(type_),
			subtype: Cow::Borrowed(subtype),
		}
	}

	/// Creates a media type from a type and subtype.
	pub fn new(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
		Self {
			type_: Cow::Owned(type_.into()),
			subtype: Cow::Owned(subtype.into()),
		}
	}

	/// Parses a `type/subtype` string, ignoring any parameters.
	///
	/// # Examples
	///
	/// ```
	/// use hypermedia_core::MediaType;
	///
	/// let mt = MediaType::parse("application/vnd.collection+json; charset=utf-8");
	/// assert_eq!(mt.unwrap(), MediaType::COLLECTION_JSON);
	/// assert!(MediaType::parse("not-a-media-type").is_none());
	/// ```
	pub fn parse(value: &str) -> Option<Self> {
		let essence = value.split(';').next()?.trim();
		let (type_, subtype) = essence.split_once('/')?;
		if type_.is_empty() || subtype.is_empty() {
			return None;
		}
		Some(Self::new(type_, subtype))
	}

	pub fn type_(&self) -> &str {
		&self.type_
	}

	pub fn subtype(&self) -> &str {
		&self.subtype
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.type_, self.subtype)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_ignores_parameters() {
		let mt = MediaType::parse("application/prs.hal-forms+json; charset=utf-8").unwrap();
		assert_eq!(mt, MediaType::HAL_FORMS_JSON);
	}

	#[test]
	fn test_parse_rejects_bare_token() {
		assert!(MediaType::parse("json").is_none());
		assert!(MediaType::parse("/json").is_none());
		assert!(MediaType::parse("application/").is_none());
	}

	#[test]
	fn test_display_round_trip() {
		let rendered = MediaType::UBER_JSON.to_string();
		assert_eq!(MediaType::parse(&rendered).unwrap(), MediaType::UBER_JSON);
	}
}
