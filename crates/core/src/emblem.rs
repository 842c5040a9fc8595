//! Composes the emblem document from the geometry and a palette.

use std::fmt;
use std::str::FromStr;

use logo_svg::{Circle, Point, Polygon, Rect, Style, Svg};
use serde::{Deserialize, Serialize};

use crate::geometry::Dimensions;
use crate::palette::Palette;

/// Outline stroke width as a fraction of the canvas edge.
const STROKE_DIVISOR: f64 = 30.0;
/// Decoration circle radius as a fraction of the canvas edge.
const ACCENT_DIVISOR: f64 = 40.0;

/// Which set of shapes to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Background and the two polygon halves.
    TwoTone,
    /// The two-tone shapes plus decoration circles on both halves.
    #[default]
    Extended,
}

impl Variant {
    pub fn default_palette(self, invert: bool) -> Palette {
        match self {
            Variant::TwoTone => Palette::two_tone(invert),
            Variant::Extended => Palette::extended(invert),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::TwoTone => "two-tone",
            Variant::Extended => "extended",
        })
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-tone" => Ok(Variant::TwoTone),
            "extended" => Ok(Variant::Extended),
            other => Err(format!("unknown variant `{other}` (expected two-tone or extended)")),
        }
    }
}

/// Everything needed to draw one emblem.
#[derive(Debug, Clone, PartialEq)]
pub struct Emblem {
    pub size: f64,
    pub variant: Variant,
    pub palette: Palette,
}

impl Emblem {
    pub fn new(size: f64, variant: Variant, palette: Palette) -> Self {
        Self {
            size,
            variant,
            palette,
        }
    }

    pub fn stroke_width(&self) -> f64 {
        self.size / STROKE_DIVISOR
    }

    pub fn accent_radius(&self) -> f64 {
        self.size / ACCENT_DIVISOR
    }
}

/// Build the emblem document.
///
/// Draw order: background, lower polygon, upper polygon, then (extended only)
/// the decoration circles of the lower and upper halves.
pub fn build_document(emblem: &Emblem) -> Svg {
    let size = emblem.size;
    let palette = &emblem.palette;
    let upper = Dimensions::new(size);
    let lower = upper.mirrored();
    log::debug!(
        "emblem lengths for size {size}: a={:.2} b={:.2} c={:.2}",
        upper.a,
        upper.b,
        upper.c
    );

    let mut svg = Svg::new(size, size);
    svg.append_element(Rect::new(0.0, 0.0, size, size, Style::fill(&palette.background)));

    let outline = |fill: &str| Style::fill(fill).with_stroke(&palette.stroke, emblem.stroke_width());
    svg.append_element(polygon(lower.anchors(), outline(palette.lower.as_str())));
    svg.append_element(polygon(upper.anchors(), outline(palette.upper.as_str())));

    if emblem.variant == Variant::Extended {
        for center in lower.decorations().into_iter().chain(upper.decorations()) {
            svg.append_element(Circle::new(
                center,
                emblem.accent_radius(),
                Style::fill(&palette.accent),
            ));
        }
    }

    log::debug!("emblem document has {} elements", svg.len());
    svg
}

fn polygon(points: [Point; 8], style: Style) -> Polygon {
    let mut polygon = Polygon::new(style);
    for point in points {
        polygon.append_point(point);
    }
    polygon
}
