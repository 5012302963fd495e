//! Output format implementations for guide serialization
//!
//! - json: the guide file read by the overlay
//! - treeviz: a visual tree for inspecting how a guide was parsed

pub mod json;
pub mod registry;
pub mod treeviz;

pub use json::{to_json_str, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
