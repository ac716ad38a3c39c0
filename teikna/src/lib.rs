//! Loading and scaling TrueType glyph outlines.
//!
//! This crate turns one glyph's packed `glyf` records into a flat,
//! scaled point buffer: it expands the run-length encoded flags and delta
//! encoded coordinates, composes composite glyphs from their translated
//! components, grid-fits component offsets where the font asks for it,
//! and hands the result to an optional bytecode [hinting engine](Hinter).
//!
//! The central type is [`GlyphBuf`], a reusable buffer in the vein of
//! FreeType's glyph slots: create one, then [load](GlyphBuf::load) as
//! many glyphs through it as you like without reallocating.
//!
//! # Example
//!
//! ```
//! use teikna::{Font, GlyphBuf, GlyphId16, LocaFormat};
//!
//! // A one-glyph font: a single triangular contour.
//! let glyf: &[u8] = &[
//!     0x00, 0x01, // numberOfContours
//!     0x00, 0x0A, 0x00, 0x0A, 0x00, 0x32, 0x00, 0x28, // bounding box
//!     0x00, 0x02, // endPtsOfContours
//!     0x00, 0x00, // instructionLength
//!     0x37, 0x33, 0x27, // flags
//!     0x0A, 0x28, 0x14, // x deltas
//!     0x0A, 0x1E, // y deltas
//! ];
//! let loca: &[u8] = &[0x00, 0x00, 0x00, 0x0B];
//! let font = Font::new(glyf, loca, LocaFormat::Short, 2048)?;
//!
//! let mut buf = GlyphBuf::new();
//! // Loading at the units per em leaves coordinates in font units.
//! buf.load(&font, 2048, GlyphId16::new(0), None)?;
//! assert_eq!(buf.points.len(), 3);
//! assert_eq!((buf.points[0].x, buf.points[0].y), (10, 10));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod buffer;
mod error;
mod hint;
mod scaler;

pub use buffer::{Bounds, Contours, GlyphBuf, Zone};
pub use error::LoadError;
pub use hint::{HintError, Hinter};
pub use scaler::COMPOSITE_RECURSION_LIMIT;

pub use font_types::GlyphId16;
pub use read_glyf::{
    tables::glyf::{Point, PointFlags, PointMarker},
    Font, LocaFormat, ReadError,
};

/// Public re-export of the read-glyf crate.
pub use read_glyf as raw;
