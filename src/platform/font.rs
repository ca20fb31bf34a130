//! Font metrics
//!
//! The game never rasterises glyphs itself; it only needs advance widths and
//! line heights to lay out menu entries and the score label. Metrics are
//! extracted once at load time so the parsed face does not have to outlive
//! the file buffer.

use std::path::Path;

use crate::error::PongError;

/// First and last printable ASCII characters with cached advances
const FIRST_CACHED: u32 = 0x20;
const LAST_CACHED: u32 = 0x7e;

/// Advance and vertical metrics of a font face, in font units
#[derive(Debug, Clone)]
pub struct Font {
    units_per_em: f32,
    ascender: f32,
    descender: f32,
    line_gap: f32,
    /// Advances for printable ASCII, indexed from `FIRST_CACHED`
    advances: Vec<f32>,
    /// Used for characters outside the cache or without a glyph
    fallback_advance: f32,
}

impl Font {
    /// Load a TrueType/OpenType font from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PongError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| PongError::FontLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Self::from_bytes(&data).map_err(|reason| PongError::FontParse {
            path: path.to_path_buf(),
            reason,
        })?;
        log::info!(
            "Loaded font '{}' ({} units/em)",
            path.display(),
            font.units_per_em
        );
        Ok(font)
    }

    /// Parse font metrics from raw file data
    pub fn from_bytes(data: &[u8]) -> Result<Self, String> {
        let face = ttf_parser::Face::parse(data, 0).map_err(|e| e.to_string())?;
        let units_per_em = face.units_per_em() as f32;
        if units_per_em <= 0.0 {
            return Err("font reports zero units per em".to_string());
        }

        let fallback_advance = face
            .glyph_index('M')
            .and_then(|id| face.glyph_hor_advance(id))
            .map(f32::from)
            .unwrap_or(units_per_em / 2.0);

        let advances = (FIRST_CACHED..=LAST_CACHED)
            .map(|code| {
                char::from_u32(code)
                    .and_then(|c| face.glyph_index(c))
                    .and_then(|id| face.glyph_hor_advance(id))
                    .map(f32::from)
                    .unwrap_or(fallback_advance)
            })
            .collect();

        Ok(Self {
            units_per_em,
            ascender: face.ascender() as f32,
            descender: face.descender() as f32,
            line_gap: face.line_gap() as f32,
            advances,
            fallback_advance,
        })
    }

    /// Fixed-pitch metrics without a font file (each glyph `advance` em wide)
    pub fn monospace(advance: f32) -> Self {
        let units_per_em = 1000.0;
        let advance = advance * units_per_em;
        Self {
            units_per_em,
            ascender: 800.0,
            descender: -200.0,
            line_gap: 0.0,
            advances: vec![advance; (LAST_CACHED - FIRST_CACHED + 1) as usize],
            fallback_advance: advance,
        }
    }

    fn advance(&self, c: char) -> f32 {
        let code = c as u32;
        if (FIRST_CACHED..=LAST_CACHED).contains(&code) {
            self.advances[(code - FIRST_CACHED) as usize]
        } else {
            self.fallback_advance
        }
    }

    /// Width of a single line of text at the given character size
    pub fn text_width(&self, text: &str, char_size: f32) -> f32 {
        let units: f32 = text.chars().map(|c| self.advance(c)).sum();
        units * char_size / self.units_per_em
    }

    /// Distance between consecutive baselines at the given character size
    pub fn line_height(&self, char_size: f32) -> f32 {
        (self.ascender - self.descender + self.line_gap) * char_size / self.units_per_em
    }
}
