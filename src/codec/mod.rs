//! FLIC chunk decoding subroutines.

macro_rules! module {
    ($e:ident) => {
        pub use self::$e::*;
        mod $e;
    };
}

use std::cmp::{max,min};
use std::io::{Read,Seek};

use ::{ByteCursor,FlicResult,RasterMut};

module!(codec004);
module!(codec007);
module!(codec011);
module!(codec012);
module!(codec013);
module!(codec015);
module!(codec016);

/// Size of a chunk header on disk.
///
/// Each data chunk within a frame is formatted as follows:
///
///   Offset | Length | Name | Description
///   ------:| ------:|:----:| ---------------------------------------
///        0 |      4 | size | The size of the chunk, including this header.
///        4 |      2 | type | Data type identifier.
///        6 | size-6 | data | The color or pixel data.
pub const SIZE_OF_CHUNK: u64 = 6;

/// What the dispatcher did with one chunk.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub struct ChunkId {
    /// Absolute offset of the chunk header.
    pub offset: u64,

    /// Declared size, including the chunk header.
    pub size: u32,

    pub magic: u16,

    /// False if the chunk type is not one we decode.
    pub decoded: bool,
}

/*--------------------------------------------------------------*/

/// Reinterpret a packet count byte as two's complement.
///
/// The LC, BRUN and DELTA encodings store packet counts as signed
/// bytes, where the sign selects between a literal copy and a
/// replicated run.  The bit pattern is kept: 0x00..0x7F are 0..127,
/// 0x80..0xFF are -128..-1.
pub fn signed_count(byte: u8) -> i8 {
    byte as i8
}

/// Copy `n` literal bytes from the stream into `row` starting at
/// column `x`.  Bytes that fall past the end of the row are read and
/// dropped.
pub fn copy_literal<R: Read + Seek>(
        r: &mut ByteCursor<R>, row: &mut [u8], x: usize, n: usize)
        -> FlicResult<()> {
    let start = min(x, row.len());
    let end = min(x + n, row.len());
    r.read_bytes(&mut row[start..end])?;

    for _ in 0..(n - (end - start)) {
        r.read_u8()?;
    }

    Ok(())
}

/// Fill up to `n` pixels of `row` with `c`, starting at column `x`
/// and stopping at the end of the row.  Returns the column after the
/// last pixel written.
pub fn fill_run(row: &mut [u8], x: usize, n: usize, c: u8)
        -> usize {
    let end = min(x + n, row.len());
    if x < end {
        for e in &mut row[x..end] {
            *e = c;
        }
    }

    max(x, end)
}

/// Returns true if the chunk type modifies the palette.
pub fn chunk_modifies_palette(magic: u16)
        -> bool {
    (magic == FLI_COLOR64) || (magic == FLI_COLOR256)
}

/// Returns true if the chunk type is one we decode.
pub fn is_known_chunk(magic: u16)
        -> bool {
    match magic {
        FLI_COLOR256 | FLI_SS2 | FLI_COLOR64 | FLI_LC
            | FLI_BLACK | FLI_BRUN | FLI_COPY => true,
        _ => false,
    }
}

/// Decode a chunk payload, based on the chunk type.  The cursor must
/// be positioned just after the chunk header.
///
/// Returns false if the chunk type is not recognised, in which case
/// nothing is read.
pub fn decode_chunk<R: Read + Seek>(
        magic: u16, r: &mut ByteCursor<R>, dst: &mut RasterMut)
        -> FlicResult<bool> {
    match magic {
        FLI_COLOR256 => decode_fli_color256(r, dst)?,
        FLI_SS2 => decode_fli_ss2(r, dst)?,
        FLI_COLOR64 => decode_fli_color64(r, dst)?,
        FLI_LC => decode_fli_lc(r, dst)?,
        FLI_BLACK => decode_fli_black(dst),
        FLI_BRUN => decode_fli_brun(r, dst)?,
        FLI_COPY => decode_fli_copy(r, dst)?,
        _ => return Ok(false),
    }

    Ok(true)
}

/// Read one chunk header, decode the chunk, then move the cursor to
/// the end of the chunk as declared by its size.
///
/// The final seek does not depend on how much the decoder consumed,
/// so short or over-long chunk payloads do not disturb the chunks
/// that follow.
pub fn read_chunk<R: Read + Seek>(r: &mut ByteCursor<R>, dst: &mut RasterMut)
        -> FlicResult<ChunkId> {
    let offset = r.tell()?;
    let size = r.read_u32()?;
    let magic = r.read_u16()?;

    trace!("chunk type {} at offset {}, size {}", magic, offset, size);

    let decoded = decode_chunk(magic, r, dst)?;

    r.seek(offset + size as u64)?;

    Ok(ChunkId {
        offset: offset,
        size: size,
        magic: magic,
        decoded: decoded,
    })
}
