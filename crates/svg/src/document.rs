use serde::{Deserialize, Serialize};

use crate::shape::Shape;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const SVG_VERSION: &str = "2.0";

/// An SVG document fragment: a canvas holding shapes in draw order.
///
/// Elements are painted in the order they were appended, so later elements
/// render on top of earlier ones.
///
/// SVG 2.0: <https://www.w3.org/TR/SVG/struct.html#SVGElement>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Svg {
    pub namespace: String,
    pub version: String,
    pub width: f64,
    pub height: f64,
    pub elements: Vec<Shape>,
}

impl Svg {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            namespace: SVG_NAMESPACE.to_string(),
            version: SVG_VERSION.to_string(),
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn append_element(&mut self, element: impl Into<Shape>) {
        self.elements.push(element.into());
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}
