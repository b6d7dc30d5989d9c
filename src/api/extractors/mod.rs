//! Custom request extractors.

pub mod path_param;
pub mod validated_json;

pub use path_param::PathParam;
pub use validated_json::ValidatedJson;
