//! Error types for model construction and process-wide configuration

/// Errors raised while wiring up process-wide rendering configuration.
///
/// These are fatal and surface at setup time; none of them can occur once a
/// request is being rendered.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
	#[error("a curie provider is already registered for this scope")]
	DuplicateCurieProvider,
	#[error("curie template must contain a {{rel}} placeholder: '{0}'")]
	MissingRelPlaceholder(String),
	#[error("invalid relation pattern '{pattern}': {source}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},
	#[error("invalid constraint pattern '{pattern}': {source}")]
	InvalidConstraintPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},
	#[error("type '{type_name}' declares no field '{field}'")]
	UnknownField { type_name: String, field: String },
	#[error("a format backend for media type '{0}' is already registered")]
	DuplicateMediaType(String),
}

pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

/// Caller errors in the model builder, surfaced immediately.
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
	#[error("preview staged without a terminating for_link() call")]
	UnterminatedPreview,
	#[error("for_link() called without a staged preview")]
	MissingPreview,
	#[error("cannot derive a relation for embedded type '{0}'; supply an explicit relation")]
	UnderivableRelation(String),
	#[error("entity payload could not be serialized: {0}")]
	Payload(#[from] serde_json::Error),
}

pub type BuildResult<T> = Result<T, BuilderError>;
