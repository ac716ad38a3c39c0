//! Glyph loading: decoding, composition, scaling and hinting.

use font_types::GlyphId16;
use log::{trace, warn};
use read_glyf::{
    tables::glyf::{Anchor, CompositeGlyph, CompositeGlyphFlags, Glyph, Point, SimpleGlyph},
    Font, FontData, FontRead, ReadError,
};

use crate::{
    buffer::{Bounds, GlyphBuf},
    error::LoadError,
    hint::Hinter,
};

/// Recursion limit for loading composite glyphs.
///
/// Real fonts nest components one or two levels deep; the cap is a
/// backstop against malformed or hostile component graphs, not a tuning
/// knob.
pub const COMPOSITE_RECURSION_LIMIT: usize = 4;

impl GlyphBuf {
    /// Loads a glyph's contours, replacing any previously loaded outline.
    ///
    /// `scale` is the requested size as a number of 26.6 fixed point
    /// units per em; passing the font's own units per em leaves the
    /// points in font units. The hinter, if any, is initialized once
    /// before decoding and run against each simple glyph's instructions
    /// after scaling; it may mutate [`points`](Self::points) in place.
    ///
    /// On error the buffer's contents are not a valid glyph and must not
    /// be consumed, but the buffer itself remains reusable for another
    /// load.
    pub fn load(
        &mut self,
        font: &Font<'_>,
        scale: i32,
        glyph_id: GlyphId16,
        mut hinter: Option<&mut dyn Hinter>,
    ) -> Result<(), LoadError> {
        self.reset();
        trace!("loading glyph {glyph_id} at scale {scale}");
        if let Some(h) = hinter.as_mut() {
            h.init(self, font, scale).map_err(LoadError::Hinting)?;
        }
        self.load_glyph(
            font,
            scale,
            glyph_id,
            hinter.as_deref_mut(),
            0,
            0,
            false,
            0,
        )?;
        self.bounds = Bounds {
            x_min: font.scale(scale.wrapping_mul(self.bounds.x_min)),
            y_min: font.scale(scale.wrapping_mul(self.bounds.y_min)),
            x_max: font.scale(scale.wrapping_mul(self.bounds.x_max)),
            y_max: font.scale(scale.wrapping_mul(self.bounds.y_max)),
        };
        Ok(())
    }

    /// Appends one glyph's contours, recursing through composites.
    #[allow(clippy::too_many_arguments)]
    fn load_glyph<'h>(
        &mut self,
        font: &Font<'_>,
        scale: i32,
        glyph_id: GlyphId16,
        hinter: Option<&mut (dyn Hinter + 'h)>,
        dx: i32,
        dy: i32,
        round_offset: bool,
        depth: usize,
    ) -> Result<(), LoadError> {
        if depth >= COMPOSITE_RECURSION_LIMIT {
            return Err(LoadError::RecursionLimitExceeded(glyph_id));
        }
        let Some(data) = font.glyph_data(glyph_id)? else {
            // a glyph with no outline, such as a space
            return Ok(());
        };
        let glyph = match Glyph::read(FontData::new(data)) {
            Ok(glyph) => glyph,
            Err(ReadError::InvalidFormat(n)) => {
                return Err(LoadError::UnsupportedContourCount(glyph_id, n as i16));
            }
            Err(e) => return Err(e.into()),
        };
        self.bounds = Bounds {
            x_min: i32::from(glyph.x_min()),
            y_min: i32::from(glyph.y_min()),
            x_max: i32::from(glyph.x_max()),
            y_max: i32::from(glyph.y_max()),
        };
        match glyph {
            Glyph::Simple(simple) => {
                trace!(
                    "glyph {glyph_id}: {} contours at depth {depth}",
                    simple.number_of_contours()
                );
                self.load_simple(font, scale, &simple, hinter, dx, dy, round_offset)
            }
            Glyph::Composite(composite) => {
                trace!("glyph {glyph_id}: composite at depth {depth}");
                self.load_compound(font, scale, glyph_id, &composite, hinter, dx, dy, depth)
            }
        }
    }

    fn load_simple<'h>(
        &mut self,
        font: &Font<'_>,
        scale: i32,
        glyph: &SimpleGlyph<'_>,
        hinter: Option<&mut (dyn Hinter + 'h)>,
        dx: i32,
        dy: i32,
        round_offset: bool,
    ) -> Result<(), LoadError> {
        let point_base = self.points.len();
        for end in glyph.end_pts_of_contours() {
            self.ends.push(1 + point_base + end.get() as usize);
        }
        let point_end = point_base + glyph.num_points();
        self.points.resize(point_end, Point::default());
        glyph.read_points_into(&mut self.points[point_base..point_end])?;

        if hinter.is_some() {
            let first = self.in_font_units.len();
            self.in_font_units
                .extend_from_slice(&self.points[point_base..point_end]);
            for point in &mut self.in_font_units[first..] {
                point.x += dx;
                point.y += dy;
            }
        }
        if round_offset {
            // the offset rounds to a whole pixel; the coordinates are
            // scaled independently and shifted by it
            let dx = (font.scale(scale.wrapping_mul(dx)) + 32) & !63;
            let dy = (font.scale(scale.wrapping_mul(dy)) + 32) & !63;
            for point in &mut self.points[point_base..point_end] {
                point.x = dx + font.scale(scale.wrapping_mul(point.x));
                point.y = dy + font.scale(scale.wrapping_mul(point.y));
            }
        } else {
            for point in &mut self.points[point_base..point_end] {
                point.x = font.scale(scale.wrapping_mul(point.x + dx));
                point.y = font.scale(scale.wrapping_mul(point.y + dy));
            }
        }
        if let Some(h) = hinter {
            self.unhinted
                .extend_from_slice(&self.points[point_base..point_end]);
            h.run(self, font, scale, glyph.instructions())
                .map_err(LoadError::Hinting)?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn load_compound<'h>(
        &mut self,
        font: &Font<'_>,
        scale: i32,
        glyph_id: GlyphId16,
        glyph: &CompositeGlyph<'_>,
        mut hinter: Option<&mut (dyn Hinter + 'h)>,
        dx: i32,
        dy: i32,
        depth: usize,
    ) -> Result<(), LoadError> {
        for component in glyph.components() {
            let component = component?;
            let (dx1, dy1) = match component.anchor {
                Anchor::Offset { x, y } => (dx + i32::from(x), dy + i32::from(y)),
                Anchor::Point { .. } => {
                    return Err(LoadError::UnsupportedPointAnchor(glyph_id));
                }
            };
            if component.flags.intersects(
                CompositeGlyphFlags::WE_HAVE_A_SCALE
                    | CompositeGlyphFlags::WE_HAVE_AN_X_AND_Y_SCALE
                    | CompositeGlyphFlags::WE_HAVE_A_TWO_BY_TWO,
            ) {
                return Err(LoadError::UnsupportedTransform(glyph_id));
            }
            let saved_bounds = self.bounds;
            self.load_glyph(
                font,
                scale,
                component.glyph,
                hinter.as_deref_mut(),
                dx1,
                dy1,
                component
                    .flags
                    .contains(CompositeGlyphFlags::ROUND_XY_TO_GRID),
                depth + 1,
            )?;
            if !component
                .flags
                .contains(CompositeGlyphFlags::USE_MY_METRICS)
            {
                self.bounds = saved_bounds;
            }
        }
        // composite-level instructions only apply to the assembled
        // outline; there is no composite program pass here
        if hinter.is_some() && glyph.instructions().is_some() {
            warn!("glyph {glyph_id}: composite instructions are not run");
        }
        Ok(())
    }
}
