//! A view of the tables a glyph loader consumes.

use font_types::GlyphId16;

use crate::{
    read::ReadError,
    tables::loca::{Loca, LocaFormat},
};

/// The font tables involved in locating and decoding glyph outlines:
/// `glyf`, `loca`, and the design units per em from `head`.
///
/// Byte acquisition is the caller's concern; this type borrows tables
/// that were sliced out of a font file elsewhere. A `Font` is a read-only
/// view and may be shared freely across threads and glyph buffers.
#[derive(Clone)]
pub struct Font<'a> {
    glyf: &'a [u8],
    loca: Loca<'a>,
    units_per_em: u16,
}

impl<'a> Font<'a> {
    /// Creates a new font view from raw `glyf` and `loca` table data.
    ///
    /// `units_per_em` must be nonzero.
    pub fn new(
        glyf: &'a [u8],
        loca: &'a [u8],
        loca_format: LocaFormat,
        units_per_em: u16,
    ) -> Result<Self, ReadError> {
        if units_per_em == 0 {
            return Err(ReadError::MalformedData("units per em must be nonzero"));
        }
        Ok(Font {
            glyf,
            loca: Loca::read(loca, loca_format)?,
            units_per_em,
        })
    }

    /// The number of design units in one em.
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// The number of glyphs addressable through the `loca` table.
    pub fn num_glyphs(&self) -> usize {
        self.loca.len()
    }

    /// Returns the raw record for one glyph, or `None` for a glyph with
    /// no outline (consecutive `loca` offsets that are equal).
    pub fn glyph_data(&self, glyph_id: GlyphId16) -> Result<Option<&'a [u8]>, ReadError> {
        let idx = glyph_id.to_u16() as usize;
        let start = self.loca.get_raw(idx).ok_or(ReadError::OutOfBounds)? as usize;
        let end = self.loca.get_raw(idx + 1).ok_or(ReadError::OutOfBounds)? as usize;
        if start == end {
            return Ok(None);
        }
        self.glyf
            .get(start..end)
            .map(Some)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Divides `x` by the units per em, rounding half away from zero.
    ///
    /// Loaders apply this to products of a 26.6 em size and a design unit
    /// value, giving 26.6 results.
    pub fn scale(&self, x: i32) -> i32 {
        let upem = i32::from(self.units_per_em);
        if x >= 0 {
            (x + upem / 2) / upem
        } else {
            (x - upem / 2) / upem
        }
    }
}
