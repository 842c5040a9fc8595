pub mod emblem;
pub mod geometry;
pub mod palette;

pub use emblem::{Emblem, Variant, build_document};
pub use geometry::{Dimensions, compute_decorations, compute_points};
pub use palette::{Palette, PaletteError};
