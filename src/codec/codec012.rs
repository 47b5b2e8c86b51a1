//! codec012.rs
//!
//! Codec for chunk type 12 = FLI_LC.

use std::io::{Read,Seek};

use ::{ByteCursor,FlicResult,RasterMut};
use super::{copy_literal,fill_run,signed_count};

/// Magic for a FLI_LC chunk - Byte Aligned Delta Compression.
///
/// This chunk contains the differences between the previous frame and
/// this frame.  This compression method was used by the original
/// Animator, but is not created by Animator Pro.
///
/// The first 16-bit word following the chunk header contains the
/// position of the first line in the chunk.  This is a count of lines
/// (down from the top of the image) which are unchanged from the
/// prior frame.  The second 16-bit word contains the number of lines
/// in the chunk.  The data for the lines follows these two words.
///
/// Each line begins with a byte holding the number of packets for the
/// line.  Each packet consists of a single byte column skip, followed
/// by a packet type/size byte.  If the packet type is positive it is a
/// count of pixels to be copied from the packet to the animation
/// image.  If the packet type is negative it contains a single pixel
/// which is to be replicated; the absolute value of the packet type
/// gives the number of times the pixel is to be replicated.
///
/// # Note
///
/// The negative/positive meaning of the packet type bytes in LC
/// compression is reversed from that used in BRUN compression.
///
/// Packets stop early once a line is full.  Runs that would cross the
/// right edge are cut at the edge; their bytes are still consumed.
pub const FLI_LC: u16 = 12;

/// Decode a FLI_LC chunk.
pub fn decode_fli_lc<R: Read + Seek>(r: &mut ByteCursor<R>, dst: &mut RasterMut)
        -> FlicResult<()> {
    let y0 = r.read_u16()? as usize;
    let hh = r.read_u16()? as usize;
    let w = dst.w;

    for y in y0..(y0 + hh) {
        let count = r.read_u8()?;
        if count == 0 {
            continue;
        }

        let row = dst.row_mut(y)?;
        let mut x0 = 0;

        for _ in 0..count {
            if x0 >= w {
                break;
            }

            x0 = x0 + r.read_u8()? as usize;
            let signed_length = signed_count(r.read_u8()?) as i32;

            if signed_length >= 0 {
                let n = signed_length as usize;
                copy_literal(r, row, x0, n)?;
                x0 = x0 + n;
            } else {
                let n = (-signed_length) as usize;
                let c = r.read_u8()?;
                x0 = fill_run(row, x0, n, c);
            }
        }
    }

    Ok(())
}
