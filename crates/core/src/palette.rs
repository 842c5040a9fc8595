use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("cannot read palette {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid palette {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("palette color `{field}` is empty")]
    EmptyColor { field: &'static str },
}

/// Colors used to paint the emblem. Values are any SVG paint string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: String,
    /// Fill of the upper polygon.
    pub upper: String,
    /// Fill of the lower (mirrored) polygon.
    pub lower: String,
    /// Outline drawn around both polygons.
    pub stroke: String,
    /// Fill of the decoration circles.
    pub accent: String,
}

impl Palette {
    /// Black emblem on white, or white on black when inverted.
    pub fn two_tone(invert: bool) -> Self {
        let (bg, fg) = if invert {
            ("#000000", "#ffffff")
        } else {
            ("#ffffff", "#000000")
        };
        Self {
            background: bg.into(),
            upper: fg.into(),
            lower: fg.into(),
            stroke: bg.into(),
            accent: bg.into(),
        }
    }

    pub fn extended(invert: bool) -> Self {
        if invert {
            Self {
                background: "#0b132b".into(),
                upper: "#f1faee".into(),
                lower: "#a8dadc".into(),
                stroke: "#0b132b".into(),
                accent: "#e63946".into(),
            }
        } else {
            Self {
                background: "#ffffff".into(),
                upper: "#1d3557".into(),
                lower: "#457b9d".into(),
                stroke: "#ffffff".into(),
                accent: "#e63946".into(),
            }
        }
    }

    /// Load a palette from a JSON file with one string per field.
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let data = std::fs::read(path).map_err(|source| PaletteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let palette: Palette =
            serde_json::from_slice(&data).map_err(|source| PaletteError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        palette.validate()?;
        log::debug!("loaded palette from {}", path.display());
        Ok(palette)
    }

    fn validate(&self) -> Result<(), PaletteError> {
        let fields = [
            ("background", &self.background),
            ("upper", &self.upper),
            ("lower", &self.lower),
            ("stroke", &self.stroke),
            ("accent", &self.accent),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(PaletteError::EmptyColor { field });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("logo-palette-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("write temp palette");
        path
    }

    #[test]
    fn two_tone_inverts() {
        let light = Palette::two_tone(false);
        let dark = Palette::two_tone(true);
        assert_eq!(light.background, "#ffffff");
        assert_eq!(light.upper, "#000000");
        assert_eq!(dark.background, "#000000");
        assert_eq!(dark.upper, "#ffffff");
        assert_eq!(light.stroke, light.background);
    }

    #[test]
    fn load_from_json() {
        let expected = Palette::extended(false);
        let path = temp_file(
            "ok.json",
            &serde_json::to_string(&expected).expect("serialize"),
        );
        let loaded = Palette::load(&path).expect("load palette");
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, expected);
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let path = temp_file("partial.json", r##"{"background": "#fff"}"##);
        let err = Palette::load(&path).expect_err("partial palette must fail");
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, PaletteError::Parse { .. }));
    }

    #[test]
    fn empty_color_is_rejected() {
        let path = temp_file(
            "empty.json",
            r##"{"background": "#fff", "upper": " ", "lower": "#000", "stroke": "#fff", "accent": "red"}"##,
        );
        let err = Palette::load(&path).expect_err("blank color must fail");
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, PaletteError::EmptyColor { field: "upper" }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("logo-palette-does-not-exist.json");
        assert!(matches!(
            Palette::load(&path),
            Err(PaletteError::Read { .. })
        ));
    }
}
