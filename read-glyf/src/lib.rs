//! Reading TrueType glyph outline data
//!
//! This crate provides memory safe, zero-allocation parsing of the two
//! tables that describe TrueType glyph outlines: [`glyf`], which stores
//! each glyph's packed contour data, and [`loca`], which locates one
//! glyph's record within `glyf`. It is unopinionated, and attempts to
//! provide raw access to the underlying data as it is described in the
//! [OpenType specification][spec].
//!
//! This crate is intended for use by other parts of a font stack. It does
//! not parse font files: callers slice the tables out of a file elsewhere
//! and hand them to [`Font`]. For loading scaled, composed outlines, see
//! the `teikna` crate.
//!
//! [`glyf`]: tables::glyf
//! [`loca`]: tables::loca
//! [spec]: https://learn.microsoft.com/en-us/typography/opentype/spec/glyf

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod font;
mod font_data;
mod read;
pub mod tables;

pub use font::Font;
pub use font_data::FontData;
pub use read::{FontRead, ReadError};
pub use tables::loca::LocaFormat;

/// Public re-export of the font-types crate.
pub extern crate font_types as types;
