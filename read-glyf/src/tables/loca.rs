//! The [loca (Index to Location)][loca] table
//!
//! [loca]: https://learn.microsoft.com/en-us/typography/opentype/spec/loca

use font_types::BigEndian;

use crate::read::ReadError;

/// The storage format of a [`Loca`] table's entries, as recorded in the
/// `indexToLocFormat` field of the `head` table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocaFormat {
    /// Entries are `u16` values storing half the actual byte offset.
    #[default]
    Short,
    /// Entries are `u32` byte offsets.
    Long,
}

/// The [loca] table.
///
/// [loca]: https://learn.microsoft.com/en-us/typography/opentype/spec/loca
#[derive(Clone)]
pub enum Loca<'a> {
    Short(&'a [BigEndian<u16>]),
    Long(&'a [BigEndian<u32>]),
}

impl<'a> Loca<'a> {
    pub fn read(data: &'a [u8], format: LocaFormat) -> Result<Self, ReadError> {
        match format {
            LocaFormat::Short => bytemuck::try_cast_slice(data)
                .map(Loca::Short)
                .map_err(|_| ReadError::InvalidArrayLen),
            LocaFormat::Long => bytemuck::try_cast_slice(data)
                .map(Loca::Long)
                .map_err(|_| ReadError::InvalidArrayLen),
        }
    }

    /// The number of glyphs addressable through this table.
    pub fn len(&self) -> usize {
        match self {
            Loca::Short(data) => data.len().saturating_sub(1),
            Loca::Long(data) => data.len().saturating_sub(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Attempt to return the byte offset for a given glyph index.
    pub fn get_raw(&self, idx: usize) -> Option<u32> {
        match self {
            Loca::Short(data) => data.get(idx).map(|x| x.get() as u32 * 2),
            Loca::Long(data) => data.get(idx).map(|x| x.get()),
        }
    }
}
