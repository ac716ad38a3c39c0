//! Errors reported while loading glyphs.

use std::fmt;

use font_types::GlyphId16;
use read_glyf::ReadError;

use crate::hint::HintError;
use crate::scaler::COMPOSITE_RECURSION_LIMIT;

/// Errors that may occur when loading glyphs.
#[derive(Debug)]
pub enum LoadError {
    /// The glyph header uses a contour count reserved for future use.
    UnsupportedContourCount(GlyphId16, i16),
    /// A composite component carries a scale or rotation transform; only
    /// translation is supported.
    UnsupportedTransform(GlyphId16),
    /// A composite component is anchored by point matching rather than an
    /// x/y offset.
    UnsupportedPointAnchor(GlyphId16),
    /// Exceeded the recursion limit when loading a composite glyph.
    RecursionLimitExceeded(GlyphId16),
    /// The glyph data is malformed or truncated.
    Read(ReadError),
    /// The hinting engine reported a failure, passed through verbatim.
    Hinting(HintError),
}

impl From<ReadError> for LoadError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedContourCount(gid, n) => {
                write!(f, "Glyph {gid} has a reserved contour count ({n})")
            }
            Self::UnsupportedTransform(gid) => {
                write!(f, "Composite glyph {gid} has a transformed component")
            }
            Self::UnsupportedPointAnchor(gid) => {
                write!(f, "Composite glyph {gid} anchors a component by point matching")
            }
            Self::RecursionLimitExceeded(gid) => write!(
                f,
                "Recursion limit ({COMPOSITE_RECURSION_LIMIT}) exceeded when loading composite glyph {gid}",
            ),
            Self::Read(e) => write!(f, "{e}"),
            Self::Hinting(e) => write!(f, "Hinting failed: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            Self::Hinting(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
