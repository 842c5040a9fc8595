//! SVG document model and its textual serialization.
//!
//! See <https://www.w3.org/TR/SVG> for the element and attribute definitions.

pub mod document;
pub mod marshal;
pub mod shape;
pub mod types;

pub use document::Svg;
pub use marshal::{SerializationError, marshal, marshal_indent};
pub use shape::{Circle, Polygon, Rect, Shape, Style};
pub use types::Point;
