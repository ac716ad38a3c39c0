//! The [glyf (Glyph Data)][glyf] table
//!
//! [glyf]: https://learn.microsoft.com/en-us/typography/opentype/spec/glyf

use font_types::{BigEndian, GlyphId16};

use crate::{
    font_data::{Cursor, FontData},
    read::{FontRead, ReadError},
};

/// Marker bits for point flags that are set and cleared during hinting.
///
/// The `glyf` format reserves the two high bits of each flag byte; the
/// hinting process uses them to track which coordinates an instruction
/// has already touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointMarker(u32);

impl PointMarker {
    /// Marks a point whose x coordinate has been touched by a hinting
    /// instruction.
    pub const TOUCHED_X: Self = Self(0x40);

    /// Marks a point whose y coordinate has been touched by a hinting
    /// instruction.
    pub const TOUCHED_Y: Self = Self(0x80);

    /// Marks a point touched on both axes.
    pub const TOUCHED: Self = Self(Self::TOUCHED_X.0 | Self::TOUCHED_Y.0);
}

impl core::ops::BitOr for PointMarker {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Flags describing the properties of an outline point.
///
/// The low byte is the raw flag byte decoded from the font, carried
/// through decoding unchanged. The same bit means different things
/// depending on the state of the short-vector bits, so the layout is
/// exposed through accessors rather than repacked. Bits 0x40 and 0x80 are
/// reserved by the format and available to consumers as
/// [markers](PointMarker).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct PointFlags(u32);

impl PointFlags {
    const ON_CURVE: u32 = 0x01;
    const X_SHORT_VECTOR: u32 = 0x02;
    const Y_SHORT_VECTOR: u32 = 0x04;
    const REPEAT_FLAG: u32 = 0x08;
    const X_SAME_OR_POSITIVE: u32 = 0x10;
    const Y_SAME_OR_POSITIVE: u32 = 0x20;

    /// Creates point flags from a raw flag byte.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the underlying bits.
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Returns true if this is an on-curve point.
    #[inline]
    pub const fn is_on_curve(self) -> bool {
        self.0 & Self::ON_CURVE != 0
    }

    /// Returns true if the x delta is stored as a single byte.
    #[inline]
    pub const fn x_short(self) -> bool {
        self.0 & Self::X_SHORT_VECTOR != 0
    }

    /// Returns true if the y delta is stored as a single byte.
    #[inline]
    pub const fn y_short(self) -> bool {
        self.0 & Self::Y_SHORT_VECTOR != 0
    }

    /// Returns true if a repeat count byte follows the flag byte.
    #[inline]
    pub const fn repeats(self) -> bool {
        self.0 & Self::REPEAT_FLAG != 0
    }

    /// The sign of a short x vector; when the x delta is not short, true
    /// means the x coordinate repeats the previous one.
    #[inline]
    pub const fn x_same_or_positive(self) -> bool {
        self.0 & Self::X_SAME_OR_POSITIVE != 0
    }

    /// The sign of a short y vector; when the y delta is not short, true
    /// means the y coordinate repeats the previous one.
    #[inline]
    pub const fn y_same_or_positive(self) -> bool {
        self.0 & Self::Y_SAME_OR_POSITIVE != 0
    }

    /// Returns true if the given marker is set for this point.
    pub const fn has_marker(self, marker: PointMarker) -> bool {
        self.0 & marker.0 != 0
    }

    /// Applies the given marker to this point.
    pub fn set_marker(&mut self, marker: PointMarker) {
        self.0 |= marker.0;
    }

    /// Clears the given marker for this point.
    pub fn clear_marker(&mut self, marker: PointMarker) {
        self.0 &= !marker.0;
    }
}

/// A decoded outline point.
///
/// Coordinates are in font units as decoded; a scaler rewrites them in
/// 26.6 fixed point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub flags: PointFlags,
}

/// Either a simple or composite glyph.
#[derive(Clone)]
pub enum Glyph<'a> {
    Simple(SimpleGlyph<'a>),
    Composite(CompositeGlyph<'a>),
}

macro_rules! field_getter {
    ($field:ident, $ty:ty) => {
        pub fn $field(&self) -> $ty {
            match self {
                Self::Simple(glyph) => glyph.$field(),
                Self::Composite(glyph) => glyph.$field(),
            }
        }
    };
}

impl<'a> Glyph<'a> {
    field_getter!(number_of_contours, i16);
    field_getter!(x_min, i16);
    field_getter!(y_min, i16);
    field_getter!(x_max, i16);
    field_getter!(y_max, i16);
}

impl<'a> FontRead<'a> for Glyph<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let number_of_contours = data.read_i16_at(0)?;
        match number_of_contours {
            n if n >= 0 => SimpleGlyph::read(data).map(Self::Simple),
            -1 => CompositeGlyph::read(data).map(Self::Composite),
            // the values -2, -3, and so forth, are reserved for future use
            n => Err(ReadError::InvalidFormat(n as i64)),
        }
    }
}

macro_rules! header_getters {
    ($ty:ident) => {
        impl<'a> $ty<'a> {
            /// The number of contours; -1 for composite glyphs.
            pub fn number_of_contours(&self) -> i16 {
                self.number_of_contours
            }

            /// Minimum x for coordinate data.
            pub fn x_min(&self) -> i16 {
                self.x_min
            }

            /// Minimum y for coordinate data.
            pub fn y_min(&self) -> i16 {
                self.y_min
            }

            /// Maximum x for coordinate data.
            pub fn x_max(&self) -> i16 {
                self.x_max
            }

            /// Maximum y for coordinate data.
            pub fn y_max(&self) -> i16 {
                self.y_max
            }
        }
    };
}

header_getters!(SimpleGlyph);
header_getters!(CompositeGlyph);

/// A simple (non-composite) glyph record.
#[derive(Clone)]
pub struct SimpleGlyph<'a> {
    number_of_contours: i16,
    x_min: i16,
    y_min: i16,
    x_max: i16,
    y_max: i16,
    end_pts_of_contours: &'a [BigEndian<u16>],
    instructions: &'a [u8],
    /// Packed flag and coordinate streams trailing the instructions.
    glyph_data: &'a [u8],
}

impl<'a> SimpleGlyph<'a> {
    /// The point index at which each contour ends.
    pub fn end_pts_of_contours(&self) -> &'a [BigEndian<u16>] {
        self.end_pts_of_contours
    }

    /// The TrueType hinting instructions for this glyph.
    pub fn instructions(&self) -> &'a [u8] {
        self.instructions
    }

    /// Returns the total number of points.
    pub fn num_points(&self) -> usize {
        self.end_pts_of_contours
            .last()
            .map(|last| last.get() as usize + 1)
            .unwrap_or(0)
    }

    /// Decodes flags and coordinates into the provided buffer.
    ///
    /// The buffer length must equal the value returned by
    /// [`num_points`](Self::num_points). Each point receives the whole raw
    /// flag byte, not just the on-curve bit.
    pub fn read_points_into(&self, points: &mut [Point]) -> Result<(), ReadError> {
        if points.len() != self.num_points() {
            return Err(ReadError::InvalidArrayLen);
        }
        let mut cursor = FontData::new(self.glyph_data).cursor();
        read_flags(&mut cursor, points)?;
        read_coords(&mut cursor, points)
    }
}

/// Expands the run-length encoded flag bytes, one flag per point.
fn read_flags(cursor: &mut Cursor<'_>, points: &mut [Point]) -> Result<(), ReadError> {
    let mut i = 0;
    while i < points.len() {
        let flags = PointFlags::from_bits(cursor.read_u8()? as u32);
        points[i].flags = flags;
        i += 1;
        if flags.repeats() {
            // the count byte is the number of *additional* points sharing
            // this flag byte
            let count = cursor.read_u8()? as usize;
            if count > points.len() - i {
                return Err(ReadError::MalformedData("repeat count too large in glyf"));
            }
            for point in &mut points[i..i + count] {
                point.flags = flags;
            }
            i += count;
        }
    }
    Ok(())
}

/// Decodes the delta encoded coordinates: a full x pass, then a full y
/// pass over the same points.
///
/// The accumulators are 16 bits wide and wrap; some fonts rely on the
/// overflow, so the width is part of the format.
fn read_coords(cursor: &mut Cursor<'_>, points: &mut [Point]) -> Result<(), ReadError> {
    let mut x = 0i16;
    for point in points.iter_mut() {
        let flags = point.flags;
        if flags.x_short() {
            let delta = cursor.read_u8()? as i16;
            x = if flags.x_same_or_positive() {
                x.wrapping_add(delta)
            } else {
                x.wrapping_sub(delta)
            };
        } else if !flags.x_same_or_positive() {
            x = x.wrapping_add(cursor.read_i16()?);
        }
        point.x = x as i32;
    }
    let mut y = 0i16;
    for point in points.iter_mut() {
        let flags = point.flags;
        if flags.y_short() {
            let delta = cursor.read_u8()? as i16;
            y = if flags.y_same_or_positive() {
                y.wrapping_add(delta)
            } else {
                y.wrapping_sub(delta)
            };
        } else if !flags.y_same_or_positive() {
            y = y.wrapping_add(cursor.read_i16()?);
        }
        point.y = y as i32;
    }
    Ok(())
}

impl<'a> FontRead<'a> for SimpleGlyph<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let number_of_contours = cursor.read_i16()?;
        if number_of_contours < 0 {
            return Err(ReadError::InvalidFormat(number_of_contours as i64));
        }
        let x_min = cursor.read_i16()?;
        let y_min = cursor.read_i16()?;
        let x_max = cursor.read_i16()?;
        let y_max = cursor.read_i16()?;
        let end_pts = cursor.read_bytes(number_of_contours as usize * 2)?;
        let end_pts_of_contours: &[BigEndian<u16>] =
            bytemuck::try_cast_slice(end_pts).map_err(|_| ReadError::InvalidArrayLen)?;
        let mut prev_end = None;
        for end in end_pts_of_contours {
            let end = end.get();
            if prev_end.is_some_and(|prev| end <= prev) {
                return Err(ReadError::MalformedData("contour end points not ordered"));
            }
            prev_end = Some(end);
        }
        let instruction_length = cursor.read_u16()?;
        let instructions = cursor.read_bytes(instruction_length as usize)?;
        let glyph_data = data.as_bytes().get(cursor.position()..).unwrap_or_default();
        Ok(SimpleGlyph {
            number_of_contours,
            x_min,
            y_min,
            x_max,
            y_max,
            end_pts_of_contours,
            instructions,
            glyph_data,
        })
    }
}

/// Flags used in composite glyph component records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompositeGlyphFlags(u16);

impl CompositeGlyphFlags {
    /// The component's arguments are 16-bit rather than 8-bit values.
    pub const ARG_1_AND_2_ARE_WORDS: Self = Self(0x0001);
    /// The arguments are an x/y offset rather than point indices.
    pub const ARGS_ARE_XY_VALUES: Self = Self(0x0002);
    /// The component offset should be rounded to the pixel grid.
    pub const ROUND_XY_TO_GRID: Self = Self(0x0004);
    /// A single scale factor follows the arguments.
    pub const WE_HAVE_A_SCALE: Self = Self(0x0008);
    /// At least one more component record follows this one.
    pub const MORE_COMPONENTS: Self = Self(0x0020);
    /// Separate x and y scale factors follow the arguments.
    pub const WE_HAVE_AN_X_AND_Y_SCALE: Self = Self(0x0040);
    /// A full 2x2 transformation matrix follows the arguments.
    pub const WE_HAVE_A_TWO_BY_TWO: Self = Self(0x0080);
    /// Instruction bytecode follows the last component record.
    pub const WE_HAVE_INSTRUCTIONS: Self = Self(0x0100);
    /// The composite inherits this component's metrics.
    pub const USE_MY_METRICS: Self = Self(0x0200);
    /// The component overlaps other contours of the composite.
    pub const OVERLAP_COMPOUND: Self = Self(0x0400);

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Returns true if all of the flags in `other` are set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if any of the flags in `other` are set in `self`.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl core::ops::BitOr for CompositeGlyphFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// A composite glyph record.
#[derive(Clone)]
pub struct CompositeGlyph<'a> {
    number_of_contours: i16,
    x_min: i16,
    y_min: i16,
    x_max: i16,
    y_max: i16,
    component_data: &'a [u8],
}

impl<'a> CompositeGlyph<'a> {
    /// Returns an iterator over the glyph's component records.
    pub fn components(&self) -> ComponentIter<'a> {
        ComponentIter {
            cursor: FontData::new(self.component_data).cursor(),
            last_flags: CompositeGlyphFlags::default(),
            done: false,
        }
    }

    /// The instruction bytecode trailing the last component record, if the
    /// composite declares any.
    pub fn instructions(&self) -> Option<&'a [u8]> {
        self.components().instructions()
    }
}

impl<'a> FontRead<'a> for CompositeGlyph<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let number_of_contours = cursor.read_i16()?;
        if number_of_contours != -1 {
            return Err(ReadError::InvalidFormat(number_of_contours as i64));
        }
        let x_min = cursor.read_i16()?;
        let y_min = cursor.read_i16()?;
        let x_max = cursor.read_i16()?;
        let y_max = cursor.read_i16()?;
        let component_data = data.as_bytes().get(cursor.position()..).unwrap_or_default();
        Ok(CompositeGlyph {
            number_of_contours,
            x_min,
            y_min,
            x_max,
            y_max,
            component_data,
        })
    }
}

/// A reference to another glyph. Part of [`CompositeGlyph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Component {
    /// Component flags.
    pub flags: CompositeGlyphFlags,
    /// Glyph identifier.
    pub glyph: GlyphId16,
    /// Anchor for component placement.
    pub anchor: Anchor,
}

/// Anchor position for a composite component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// A translation in font units.
    Offset { x: i16, y: i16 },
    /// Point indices to align in the glyph so far and in the component.
    Point { base: u16, component: u16 },
}

/// An iterator over the component records of a composite glyph.
///
/// Records are validated as they are visited; a truncated record yields
/// one error and ends the iteration.
#[derive(Clone)]
pub struct ComponentIter<'a> {
    cursor: Cursor<'a>,
    last_flags: CompositeGlyphFlags,
    done: bool,
}

impl<'a> Iterator for ComponentIter<'a> {
    type Item = Result<Component, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_component() {
            Ok(component) => {
                self.done = !component
                    .flags
                    .contains(CompositeGlyphFlags::MORE_COMPONENTS);
                Some(Ok(component))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<'a> ComponentIter<'a> {
    fn read_component(&mut self) -> Result<Component, ReadError> {
        let flags = CompositeGlyphFlags::from_bits(self.cursor.read_u16()?);
        self.last_flags = flags;
        let glyph = GlyphId16::new(self.cursor.read_u16()?);
        let args_are_words = flags.contains(CompositeGlyphFlags::ARG_1_AND_2_ARE_WORDS);
        let anchor = if flags.contains(CompositeGlyphFlags::ARGS_ARE_XY_VALUES) {
            if args_are_words {
                Anchor::Offset {
                    x: self.cursor.read_i16()?,
                    y: self.cursor.read_i16()?,
                }
            } else {
                Anchor::Offset {
                    x: (self.cursor.read_u8()? as i8) as i16,
                    y: (self.cursor.read_u8()? as i8) as i16,
                }
            }
        } else if args_are_words {
            Anchor::Point {
                base: self.cursor.read_u16()?,
                component: self.cursor.read_u16()?,
            }
        } else {
            Anchor::Point {
                base: self.cursor.read_u8()? as u16,
                component: self.cursor.read_u8()? as u16,
            }
        };
        // Transforms are skipped rather than interpreted; consumers that
        // don't support them reject via the flag bits.
        if flags.contains(CompositeGlyphFlags::WE_HAVE_A_SCALE) {
            self.cursor.advance_by(2);
        } else if flags.contains(CompositeGlyphFlags::WE_HAVE_AN_X_AND_Y_SCALE) {
            self.cursor.advance_by(4);
        } else if flags.contains(CompositeGlyphFlags::WE_HAVE_A_TWO_BY_TWO) {
            self.cursor.advance_by(8);
        }
        Ok(Component {
            flags,
            glyph,
            anchor,
        })
    }

    fn instructions(&mut self) -> Option<&'a [u8]> {
        for component in self.by_ref() {
            component.ok()?;
        }
        if self
            .last_flags
            .contains(CompositeGlyphFlags::WE_HAVE_INSTRUCTIONS)
        {
            let len = self.cursor.read_u16().ok()? as usize;
            self.cursor.read_bytes(len).ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyf_test_data as test_data;

    fn decode(glyph: &SimpleGlyph) -> Vec<Point> {
        let mut points = vec![Point::default(); glyph.num_points()];
        glyph.read_points_into(&mut points).unwrap();
        points
    }

    #[test]
    fn simple_glyph_header_and_points() {
        let glyph = SimpleGlyph::read(FontData::new(test_data::A_GLYPH)).unwrap();
        assert_eq!(glyph.number_of_contours(), 2);
        assert_eq!(
            [glyph.x_min(), glyph.y_min(), glyph.x_max(), glyph.y_max()],
            [19, 0, 1342, 1480]
        );
        assert_eq!(
            glyph
                .end_pts_of_contours()
                .iter()
                .map(|end| end.get())
                .collect::<Vec<_>>(),
            [7, 10]
        );
        assert!(glyph.instructions().is_empty());
        assert_eq!(glyph.num_points(), 11);
        let want: Vec<Point> = test_data::A_GLYPH_POINTS
            .iter()
            .map(|&(x, y, flags)| Point {
                x,
                y,
                flags: PointFlags::from_bits(flags),
            })
            .collect();
        assert_eq!(decode(&glyph), want);
    }

    #[test]
    fn point_flag_accessors() {
        let flags = PointFlags::from_bits(0x33);
        assert!(flags.is_on_curve());
        assert!(flags.x_short());
        assert!(!flags.y_short());
        assert!(flags.x_same_or_positive());
        assert!(flags.y_same_or_positive());
        assert!(!flags.repeats());
        assert!(!PointFlags::from_bits(0x02).is_on_curve());
        let mut marked = PointFlags::from_bits(0x01);
        marked.set_marker(PointMarker::TOUCHED);
        assert!(marked.has_marker(PointMarker::TOUCHED_X));
        marked.clear_marker(PointMarker::TOUCHED_X);
        assert!(marked.has_marker(PointMarker::TOUCHED_Y));
        assert!(!marked.has_marker(PointMarker::TOUCHED_X));
        assert!(marked.is_on_curve());
    }

    #[test]
    fn decoding_is_idempotent() {
        let glyph = SimpleGlyph::read(FontData::new(test_data::A_GLYPH)).unwrap();
        assert_eq!(decode(&glyph), decode(&glyph));
    }

    #[test]
    fn repeat_count_covers_additional_points() {
        // one contour of five points sharing a single repeated flag byte
        #[rustfmt::skip]
        let data = [
            0x00, 0x01,                                     // numberOfContours
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // bounding box
            0x00, 0x04,                                     // endPtsOfContours
            0x00, 0x00,                                     // instructionLength
            0x09, 0x04,                                     // flags: repeat 4 more
            0x00, 0x0A, 0x00, 0x0A, 0x00, 0x0A, 0x00, 0x0A, 0x00, 0x0A, // x deltas
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // y deltas
        ];
        let glyph = SimpleGlyph::read(FontData::new(&data)).unwrap();
        let points = decode(&glyph);
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| p.flags == PointFlags::from_bits(0x09)));
        assert_eq!(
            points.iter().map(|p| p.x).collect::<Vec<_>>(),
            [10, 20, 30, 40, 50]
        );
    }

    #[test]
    fn repeat_count_overrun_is_malformed() {
        // three points, but the repeat byte claims five more
        #[rustfmt::skip]
        let data = [
            0x00, 0x01,                                     // numberOfContours
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // bounding box
            0x00, 0x02,                                     // endPtsOfContours
            0x00, 0x00,                                     // instructionLength
            0x09, 0x05,                                     // flags: repeat 5 more
        ];
        let glyph = SimpleGlyph::read(FontData::new(&data)).unwrap();
        let mut points = vec![Point::default(); glyph.num_points()];
        assert_eq!(
            glyph.read_points_into(&mut points),
            Err(ReadError::MalformedData("repeat count too large in glyf"))
        );
    }

    #[test]
    fn coordinate_accumulator_wraps_at_16_bits() {
        // two full x deltas of 30000 overflow an i16 accumulator
        #[rustfmt::skip]
        let data = [
            0x00, 0x01,                                     // numberOfContours
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // bounding box
            0x00, 0x01,                                     // endPtsOfContours
            0x00, 0x00,                                     // instructionLength
            0x01, 0x01,                                     // flags
            0x75, 0x30, 0x75, 0x30,                         // x deltas
            0x00, 0x00, 0x00, 0x00,                         // y deltas
        ];
        let glyph = SimpleGlyph::read(FontData::new(&data)).unwrap();
        let points = decode(&glyph);
        assert_eq!(points[0].x, 30000);
        assert_eq!(points[1].x, -5536);
    }

    #[test]
    fn wrong_buffer_length_is_rejected() {
        let glyph = SimpleGlyph::read(FontData::new(test_data::A_GLYPH)).unwrap();
        let mut points = vec![Point::default(); 4];
        assert_eq!(
            glyph.read_points_into(&mut points),
            Err(ReadError::InvalidArrayLen)
        );
    }

    #[test]
    fn unordered_contour_ends_are_malformed() {
        #[rustfmt::skip]
        let data = [
            0x00, 0x02,                                     // numberOfContours
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // bounding box
            0x00, 0x05, 0x00, 0x02,                         // endPtsOfContours, decreasing
            0x00, 0x00,                                     // instructionLength
        ];
        assert_eq!(
            SimpleGlyph::read(FontData::new(&data)).err(),
            Some(ReadError::MalformedData("contour end points not ordered"))
        );
    }

    #[test]
    fn reserved_contour_counts_are_invalid() {
        let data = [0xFF, 0xFE, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            Glyph::read(FontData::new(&data)).err(),
            Some(ReadError::InvalidFormat(-2))
        );
    }

    #[test]
    fn truncated_glyph_is_out_of_bounds() {
        assert_eq!(
            Glyph::read(FontData::new(&test_data::A_GLYPH[..12])).err(),
            Some(ReadError::OutOfBounds)
        );
    }

    #[test]
    fn component_records() {
        let words = CompositeGlyphFlags::ARG_1_AND_2_ARE_WORDS
            | CompositeGlyphFlags::ARGS_ARE_XY_VALUES
            | CompositeGlyphFlags::MORE_COMPONENTS;
        let first = test_data::component(words.to_bits(), 7, -30, 40);
        // second component anchors by point matching with byte indices
        let second = test_data::component(CompositeGlyphFlags::USE_MY_METRICS.to_bits(), 8, 0, 0);
        let second = &second[..4]; // drop the word arguments
        let mut second = second.to_vec();
        second.extend_from_slice(&[3, 9]); // byte point indices
        let data = test_data::composite_glyph([0, 0, 100, 100], &[&first, &second]);
        let glyph = CompositeGlyph::read(FontData::new(&data)).unwrap();
        let components: Vec<_> = glyph
            .components()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].glyph, GlyphId16::new(7));
        assert_eq!(components[0].anchor, Anchor::Offset { x: -30, y: 40 });
        assert_eq!(components[1].glyph, GlyphId16::new(8));
        assert_eq!(components[1].anchor, Anchor::Point { base: 3, component: 9 });
        assert!(components[1]
            .flags
            .contains(CompositeGlyphFlags::USE_MY_METRICS));
    }

    #[test]
    fn composite_instructions() {
        let flags = CompositeGlyphFlags::ARG_1_AND_2_ARE_WORDS
            | CompositeGlyphFlags::ARGS_ARE_XY_VALUES
            | CompositeGlyphFlags::WE_HAVE_INSTRUCTIONS;
        let mut record = test_data::component(flags.to_bits(), 2, 0, 0);
        record.extend_from_slice(&[0x00, 0x02, 0xB0, 0x01]); // length 2, bytecode
        let data = test_data::composite_glyph([0, 0, 10, 10], &[&record]);
        let glyph = CompositeGlyph::read(FontData::new(&data)).unwrap();
        assert_eq!(glyph.instructions(), Some(&[0xB0, 0x01][..]));
    }

    #[test]
    fn truncated_component_is_an_error() {
        let flags = CompositeGlyphFlags::ARG_1_AND_2_ARE_WORDS
            | CompositeGlyphFlags::ARGS_ARE_XY_VALUES;
        let record = test_data::component(flags.to_bits(), 2, 5, 5);
        let data = test_data::composite_glyph([0, 0, 10, 10], &[&record[..6]]);
        let glyph = CompositeGlyph::read(FontData::new(&data)).unwrap();
        let results: Vec<_> = glyph.components().collect();
        assert_eq!(results, [Err(ReadError::OutOfBounds)]);
    }
}
