//! The hinting engine interface.

use read_glyf::Font;

use crate::buffer::GlyphBuf;

/// An error produced by a hinting engine.
///
/// Loads carry these through unchanged; the loader attaches no
/// interpretation of its own.
pub type HintError = Box<dyn std::error::Error + Send + Sync>;

/// A TrueType bytecode hinting engine.
///
/// The loader drives a hinter in two steps. [`init`](Self::init) is
/// called once per load, after the buffer has been reset and before any
/// glyph data is decoded; an engine typically sets up its twilight zone
/// and scales its control values here. [`run`](Self::run) is called once
/// per simple glyph with that glyph's instruction bytecode, after
/// translation and scaling; it may freely mutate the live points,
/// including the zone arrays selected through
/// [`GlyphBuf::zone_points_mut`]. An error from either call aborts the
/// surrounding load.
pub trait Hinter {
    /// Prepares the engine for the glyph about to be loaded.
    fn init(
        &mut self,
        glyph: &mut GlyphBuf,
        font: &Font<'_>,
        scale: i32,
    ) -> Result<(), HintError>;

    /// Executes a glyph's instruction bytecode against the live points.
    fn run(
        &mut self,
        glyph: &mut GlyphBuf,
        font: &Font<'_>,
        scale: i32,
        program: &[u8],
    ) -> Result<(), HintError>;
}
