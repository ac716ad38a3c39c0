//! The reusable glyph outline buffer.

use read_glyf::tables::glyf::Point;

/// A glyph's axis-aligned bounding box.
///
/// Values are in font units as read from a glyph header; a load rewrites
/// them in 26.6 fixed point as its final step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

/// The two point zones addressed by hinting bytecode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// The synthetic reference points with no contour of their own.
    Twilight,
    /// The glyph outline itself.
    Glyph,
}

impl From<i32> for Zone {
    /// Maps a bytecode zone pointer to a zone; zero selects twilight.
    fn from(zone_pointer: i32) -> Self {
        match zone_pointer {
            0 => Zone::Twilight,
            _ => Zone::Glyph,
        }
    }
}

/// A reusable buffer holding a loaded glyph's contours.
///
/// A `GlyphBuf` can be re-used to load a series of glyphs from a font:
/// every call to [`load`](Self::load) truncates the previous outline and
/// decodes into the same allocations. The buffer must not be shared while
/// a load is in flight; callers decoding glyphs in parallel use one
/// buffer per worker.
#[derive(Clone, Debug, Default)]
pub struct GlyphBuf {
    /// All points from all contours of the glyph, in contour order.
    ///
    /// If a [`Hinter`](crate::Hinter) was used to load the glyph then
    /// [`unhinted`](Self::unhinted) contains these points before they
    /// were hinted, and [`in_font_units`](Self::in_font_units) contains
    /// them before they were hinted and scaled.
    pub points: Vec<Point>,
    /// One entry per contour: the i'th contour occupies
    /// `points[ends[i - 1]..ends[i]]`, with `ends[-1]` meaning zero.
    pub ends: Vec<usize>,
    /// The scaled points before hinting. Populated only for hinted loads.
    pub unhinted: Vec<Point>,
    /// The translated points in font units. Populated only for hinted
    /// loads.
    pub in_font_units: Vec<Point>,
    /// Points created in the twilight zone by the hinting process.
    pub twilight: Vec<Point>,
    /// The glyph's bounding box, in 26.6 fixed point after a load.
    pub bounds: Bounds,
}

impl GlyphBuf {
    /// Returns a new buffer with capacity for a typical glyph.
    pub fn new() -> Self {
        GlyphBuf {
            points: Vec::with_capacity(256),
            ends: Vec::with_capacity(32),
            ..Default::default()
        }
    }

    /// Truncates the buffer ahead of a load, keeping its allocations.
    pub(crate) fn reset(&mut self) {
        self.points.clear();
        self.ends.clear();
        self.unhinted.clear();
        self.in_font_units.clear();
        self.twilight.clear();
        self.bounds = Bounds::default();
    }

    /// Returns an iterator over the glyph's contours, one point slice per
    /// contour.
    pub fn contours(&self) -> Contours<'_> {
        Contours {
            points: &self.points,
            ends: self.ends.iter(),
            start: 0,
        }
    }

    /// The point array for a hinting zone.
    pub fn zone_points(&self, zone: Zone) -> &[Point] {
        match zone {
            Zone::Twilight => &self.twilight,
            Zone::Glyph => &self.points,
        }
    }

    /// The mutable point array for a hinting zone.
    pub fn zone_points_mut(&mut self, zone: Zone) -> &mut Vec<Point> {
        match zone {
            Zone::Twilight => &mut self.twilight,
            Zone::Glyph => &mut self.points,
        }
    }
}

/// An iterator over a glyph's contours. See [`GlyphBuf::contours`].
#[derive(Clone)]
pub struct Contours<'a> {
    points: &'a [Point],
    ends: std::slice::Iter<'a, usize>,
    start: usize,
}

impl<'a> Iterator for Contours<'a> {
    type Item = &'a [Point];

    fn next(&mut self) -> Option<Self::Item> {
        let end = *self.ends.next()?;
        let contour = self.points.get(self.start..end)?;
        self.start = end;
        Some(contour)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ends.size_hint()
    }
}

impl ExactSizeIterator for Contours<'_> {}
