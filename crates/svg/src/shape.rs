use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Presentation attributes shared by every shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl Style {
    pub fn fill(fill: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            stroke: None,
            stroke_width: None,
        }
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = Some(width);
        self
    }
}

/// An axis-aligned rectangle, optionally rounded by `rx`/`ry`.
///
/// SVG 2.0: <https://www.w3.org/TR/SVG/shapes.html#RectElement>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    pub style: Style,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, style: Style) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx: None,
            ry: None,
            style,
        }
    }
}

/// A circle given by its centre and radius.
///
/// SVG 2.0: <https://www.w3.org/TR/SVG/shapes.html#CircleElement>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub r: f64,
    pub style: Style,
}

impl Circle {
    pub fn new(center: Point, r: f64, style: Style) -> Self {
        Self { center, r, style }
    }
}

/// A closed outline of straight segments through `points`, in order.
///
/// SVG 2.0: <https://www.w3.org/TR/SVG/shapes.html#PolygonElement>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub style: Style,
}

impl Polygon {
    pub fn new(style: Style) -> Self {
        Self {
            points: Vec::new(),
            style,
        }
    }

    pub fn append_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// The `points` attribute value: `X,Y` pairs joined by `", "`.
    pub fn points_attr(&self) -> String {
        let mut attr = String::with_capacity(self.points.len() * 10);
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                attr.push_str(", ");
            }
            attr.push_str(&point.to_string());
        }
        attr
    }
}

/// A drawable element of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// The SVG element name for this shape.
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Rect(_) => "rect",
            Shape::Circle(_) => "circle",
            Shape::Polygon(_) => "polygon",
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Shape::Rect(r) => &r.style,
            Shape::Circle(c) => &c.style,
            Shape::Polygon(p) => &p.style,
        }
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}
