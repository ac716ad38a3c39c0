//! Glyph data shared between the workspace crates' tests.
//!
//! The statics below are `glyf` records laid out by hand, byte by byte, so
//! tests can pin the exact wire encoding they exercise. The builder
//! functions assemble synthetic records and whole `glyf`/`loca` table
//! pairs when the precise encoding doesn't matter.

/// Units per em of the reference font the fixtures were taken from.
pub const UNITS_PER_EM: u16 = 2048;

/// Glyph 36 ("A") of the Luxi Sans reference font.
///
/// Two contours and eleven points, exercising short vectors of both
/// signs, full 16-bit deltas, and repeated ("same as previous")
/// coordinates.
#[rustfmt::skip]
pub static A_GLYPH: &[u8] = &[
    0x00, 0x02,             // numberOfContours 2
    0x00, 0x13,             // xMin 19
    0x00, 0x00,             // yMin 0
    0x05, 0x3E,             // xMax 1342
    0x05, 0xC8,             // yMax 1480
    0x00, 0x07,             // endPtsOfContours[0] 7
    0x00, 0x0A,             // endPtsOfContours[1] 10
    0x00, 0x00,             // instructionLength 0
                            // flags, one byte per point:
    0x33, 0x01, 0x33, 0x01,
    0x23, 0x03, 0x21, 0x03,
    0x13, 0x21, 0x03,
    0x13,                   // x[0]  +19  (short, positive)
    0x02, 0x32,             // x[1]  +562
    0xD0,                   // x[2]  +208 (short, positive)
    0x02, 0x29,             // x[3]  +553
    0xE2,                   // x[4]  -226 (short, negative)
    0x9A,                   // x[5]  -154 (short, negative)
    0xFD, 0xAE,             // x[6]  -594
    0x9A,                   // x[7]  -154 (short, negative)
    0xD6,                   // x[8]  +214 (short, positive)
    0x01, 0xDC,             // x[9]  +476
    0xED,                   // x[10] -237 (short, negative)
    0x05, 0xC8,             // y[1]  +1480 (y[0] same as previous)
    0xFA, 0x38,             // y[3]  -1480 (y[2] same as previous)
    0x01, 0x9A,             // y[5]  +410  (y[4] same as previous)
    0xFE, 0x66,             // y[7]  -410  (y[6] same as previous)
    0x02, 0x36,             // y[8]  +566
    0x02, 0x7A,             // y[10] +634  (y[9] same as previous)
];

/// The decoded points of [`A_GLYPH`] in font units: `(x, y, raw flags)`.
#[rustfmt::skip]
pub static A_GLYPH_POINTS: &[(i32, i32, u32)] = &[
    (19,   0,    51), (581,  1480, 1),  (789, 1480, 51), (1342, 0,   1),
    (1116, 0,    35), (962,  410,  3),  (368, 410,  33), (214,  0,   3),
    (428,  566,  19), (904,  566,  33), (667, 1200, 3),
];

/// Contour end offsets of [`A_GLYPH`].
pub static A_GLYPH_ENDS: &[usize] = &[8, 11];

/// Design-unit bounding box of [`A_GLYPH`]: x min/y min/x max/y max.
pub static A_GLYPH_BOUNDS: [i32; 4] = [19, 0, 1342, 1480];

/// A single triangular contour encoded entirely with short vectors.
#[rustfmt::skip]
pub static SHORT_VECTOR_TRIANGLE: &[u8] = &[
    0x00, 0x01,             // numberOfContours 1
    0x00, 0x0A,             // xMin 10
    0x00, 0x0A,             // yMin 10
    0x00, 0x32,             // xMax 50
    0x00, 0x28,             // yMax 40
    0x00, 0x02,             // endPtsOfContours[0] 2
    0x00, 0x00,             // instructionLength 0
    0x37, 0x33, 0x27,       // flags
    0x0A, 0x28, 0x14,       // x deltas +10 +40 -20
    0x0A, 0x1E,             // y deltas +10 +30 (y[1] same as previous)
];

/// The decoded points of [`SHORT_VECTOR_TRIANGLE`] in font units.
pub static SHORT_VECTOR_TRIANGLE_POINTS: &[(i32, i32)] = &[(10, 10), (50, 10), (30, 40)];

/// Encodes a simple glyph record from `(x, y, on_curve)` contours.
///
/// Coordinates are written as uncompressed 16-bit deltas and the bounding
/// box is computed from the points.
pub fn simple_glyph(contours: &[&[(i16, i16, bool)]]) -> Vec<u8> {
    simple_glyph_with_instructions(contours, &[])
}

/// Like [`simple_glyph`], with instruction bytecode attached.
pub fn simple_glyph_with_instructions(
    contours: &[&[(i16, i16, bool)]],
    instructions: &[u8],
) -> Vec<u8> {
    let points: Vec<(i16, i16, bool)> = contours
        .iter()
        .flat_map(|contour| contour.iter().copied())
        .collect();
    let mut data = Vec::new();
    push_i16(&mut data, contours.len() as i16);
    push_i16(&mut data, points.iter().map(|point| point.0).min().unwrap_or(0));
    push_i16(&mut data, points.iter().map(|point| point.1).min().unwrap_or(0));
    push_i16(&mut data, points.iter().map(|point| point.0).max().unwrap_or(0));
    push_i16(&mut data, points.iter().map(|point| point.1).max().unwrap_or(0));
    let mut end = 0usize;
    for contour in contours {
        assert!(!contour.is_empty(), "contours must contain points");
        end += contour.len();
        push_u16(&mut data, (end - 1) as u16);
    }
    push_u16(&mut data, instructions.len() as u16);
    data.extend_from_slice(instructions);
    for &(_, _, on_curve) in &points {
        data.push(on_curve as u8);
    }
    let mut prev = 0i16;
    for &(x, _, _) in &points {
        push_i16(&mut data, x.wrapping_sub(prev));
        prev = x;
    }
    let mut prev = 0i16;
    for &(_, y, _) in &points {
        push_i16(&mut data, y.wrapping_sub(prev));
        prev = y;
    }
    data
}

/// Encodes one composite component record with 16-bit arguments.
///
/// `flags` is written as given; callers are responsible for including
/// `ARG_1_AND_2_ARE_WORDS` and for chaining `MORE_COMPONENTS`.
pub fn component(flags: u16, glyph_id: u16, arg1: i16, arg2: i16) -> Vec<u8> {
    let mut data = Vec::new();
    push_u16(&mut data, flags);
    push_u16(&mut data, glyph_id);
    push_i16(&mut data, arg1);
    push_i16(&mut data, arg2);
    data
}

/// Encodes a composite glyph record from component records.
pub fn composite_glyph(bounds: [i16; 4], components: &[&[u8]]) -> Vec<u8> {
    let mut data = Vec::new();
    push_i16(&mut data, -1);
    for value in bounds {
        push_i16(&mut data, value);
    }
    for component in components {
        data.extend_from_slice(component);
    }
    data
}

/// Concatenates glyph records into a `glyf` table and a matching short
/// `loca` table.
///
/// Records are padded to even length, since short `loca` offsets address
/// two-byte units. An empty record produces a glyph with no outline.
pub fn build_font_tables(glyphs: &[&[u8]]) -> (Vec<u8>, Vec<u8>) {
    let mut glyf = Vec::new();
    let mut loca = Vec::new();
    push_u16(&mut loca, 0);
    for glyph in glyphs {
        glyf.extend_from_slice(glyph);
        if glyf.len() % 2 != 0 {
            glyf.push(0);
        }
        push_u16(&mut loca, (glyf.len() / 2) as u16);
    }
    (glyf, loca)
}

/// Like [`build_font_tables`], with 32-bit `loca` entries.
pub fn build_font_tables_long(glyphs: &[&[u8]]) -> (Vec<u8>, Vec<u8>) {
    let mut glyf = Vec::new();
    let mut loca = Vec::new();
    loca.extend_from_slice(&0u32.to_be_bytes());
    for glyph in glyphs {
        glyf.extend_from_slice(glyph);
        loca.extend_from_slice(&(glyf.len() as u32).to_be_bytes());
    }
    (glyf, loca)
}

fn push_u16(data: &mut Vec<u8>, value: u16) {
    data.extend_from_slice(&value.to_be_bytes());
}

fn push_i16(data: &mut Vec<u8>, value: i16) {
    data.extend_from_slice(&value.to_be_bytes());
}
