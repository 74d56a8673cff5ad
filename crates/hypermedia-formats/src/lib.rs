//! Format backends for representation models
//!
//! Each backend is a pure function from a representation model (plus a
//! render context) to one media type's document tree. The tree is a
//! `serde_json::Value`; byte-level encoding is the caller's concern.

pub mod alps;
pub mod collection_json;
pub mod hal;
pub mod hal_forms;
pub mod render;
pub mod uber;

pub use alps::{alps_descriptor_type, AlpsFormat, DescriptorType};
pub use collection_json::CollectionJsonFormat;
pub use hal::HalFormat;
pub use hal_forms::HalFormsFormat;
pub use render::{FormatBackend, FormatRegistry, RenderContext, RenderError, RenderResult};
pub use uber::{uber_action, UberFormat};
