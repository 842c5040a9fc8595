//! Markup serializer: renders an [`Svg`] document as indented SVG text.

use std::fmt::Write;

use thiserror::Error;

use crate::document::Svg;
use crate::shape::{Shape, Style};

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("{element}: attribute `{attribute}` is not a finite number")]
    NonFinite {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("failed to write markup: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Serialize `doc` with a single-space prefix and a single-space indent.
pub fn marshal(doc: &Svg) -> Result<Vec<u8>, SerializationError> {
    marshal_indent(doc, " ", " ")
}

/// Serialize `doc`, starting every line with `prefix` followed by one copy
/// of `indent` per nesting level.
///
/// Attributes are written in declaration order and shapes in document order.
/// Unset optional attributes are omitted. A document without shapes is
/// written as a single self-closing `svg` element.
pub fn marshal_indent(doc: &Svg, prefix: &str, indent: &str) -> Result<Vec<u8>, SerializationError> {
    let mut out = String::with_capacity(200 + doc.elements.len() * 160);

    let mut root = Tag::open(&mut out, prefix, "svg")?;
    root.text("xmlns", &doc.namespace)?;
    root.text("version", &doc.version)?;
    root.number("width", doc.width)?;
    root.number("height", doc.height)?;

    if doc.elements.is_empty() {
        root.close_empty()?;
        return Ok(out.into_bytes());
    }
    root.close_start()?;

    let child_prefix = format!("{prefix}{indent}");
    for element in &doc.elements {
        write_shape(&mut out, &child_prefix, element)?;
    }

    writeln!(out, "{prefix}</svg>")?;
    Ok(out.into_bytes())
}

fn write_shape(out: &mut String, prefix: &str, shape: &Shape) -> Result<(), SerializationError> {
    let mut tag = Tag::open(out, prefix, shape.tag())?;
    match shape {
        Shape::Rect(rect) => {
            tag.number("x", rect.x)?;
            tag.number("y", rect.y)?;
            tag.number("width", rect.width)?;
            tag.number("height", rect.height)?;
            tag.optional_number("rx", rect.rx)?;
            tag.optional_number("ry", rect.ry)?;
        }
        Shape::Circle(circle) => {
            tag.number("cx", circle.center.x)?;
            tag.number("cy", circle.center.y)?;
            tag.number("r", circle.r)?;
        }
        Shape::Polygon(polygon) => {
            if !polygon.points.iter().all(|p| p.is_finite()) {
                return Err(SerializationError::NonFinite {
                    element: "polygon",
                    attribute: "points",
                });
            }
            tag.text("points", &polygon.points_attr())?;
        }
    }
    tag.style(shape.style())?;
    tag.close_empty()
}

/// Writes one start tag and its attributes into the output buffer.
struct Tag<'a> {
    out: &'a mut String,
    element: &'static str,
}

impl<'a> Tag<'a> {
    fn open(out: &'a mut String, prefix: &str, element: &'static str) -> Result<Self, SerializationError> {
        write!(out, "{prefix}<{element}")?;
        Ok(Self { out, element })
    }

    fn text(&mut self, name: &str, value: &str) -> Result<(), SerializationError> {
        write!(self.out, r#" {name}="{}""#, escape_xml(value))?;
        Ok(())
    }

    fn number(&mut self, name: &'static str, value: f64) -> Result<(), SerializationError> {
        if !value.is_finite() {
            return Err(SerializationError::NonFinite {
                element: self.element,
                attribute: name,
            });
        }
        write!(self.out, r#" {name}="{value}""#)?;
        Ok(())
    }

    fn optional_number(&mut self, name: &'static str, value: Option<f64>) -> Result<(), SerializationError> {
        match value {
            Some(value) => self.number(name, value),
            None => Ok(()),
        }
    }

    fn style(&mut self, style: &Style) -> Result<(), SerializationError> {
        self.text("fill", &style.fill)?;
        if let Some(stroke) = &style.stroke {
            self.text("stroke", stroke)?;
        }
        self.optional_number("stroke-width", style.stroke_width)
    }

    fn close_start(self) -> Result<(), SerializationError> {
        writeln!(self.out, ">")?;
        Ok(())
    }

    fn close_empty(self) -> Result<(), SerializationError> {
        writeln!(self.out, "/>")?;
        Ok(())
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
