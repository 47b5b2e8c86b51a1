//! Codec for chunk type 4 = FLI_COLOR256.

use std::io::{Read,Seek};

use ::{ByteCursor,FlicResult,RasterMut};
use raster::SIZE_OF_PALETTE;

/// Magic for a FLI_COLOR256 chunk - 256-Level Color.
///
/// The data in this chunk is organized in packets.  The first word
/// following the chunk header is a count of the number of packets in
/// the chunk.
///
/// Each packet consists of a one-byte color index skip count, a
/// one-byte color count and three bytes of color information for each
/// color defined.
///
/// At the start of the chunk, the color index is assumed to be zero.
/// Before processing any colors in a packet, the color index skip
/// count is added to the current color index, wrapping at 256.  A zero
/// color count means 256 colors follow.  The three bytes for each
/// color define the red, green, and blue components of the color in
/// that order.
///
/// # Note
///
/// Only the skip counts move the running color index; the colors
/// written by a packet do not.  Colors that would land past index 255
/// are read and dropped.
pub const FLI_COLOR256: u16 = 4;

/// Decode a FLI_COLOR256 chunk.
pub fn decode_fli_color256<R: Read + Seek>(r: &mut ByteCursor<R>, dst: &mut RasterMut)
        -> FlicResult<()> {
    decode_color_packets(r, dst, |rgb| rgb)
}

/// Decode the packets shared by FLI_COLOR256 and FLI_COLOR64,
/// passing every color through `conv` before storing it.
pub fn decode_color_packets<R, F>(r: &mut ByteCursor<R>, dst: &mut RasterMut, conv: F)
        -> FlicResult<()>
        where R: Read + Seek, F: Fn([u8; 3]) -> [u8; 3] {
    let mut idx0: u8 = 0;
    let mut dropped = 0;

    let count = r.read_u16()?;
    for _ in 0..count {
        idx0 = idx0.wrapping_add(r.read_u8()?);
        let ncopy = match r.read_u8()? {
            0 => 256 as usize,
            n => n as usize,
        };

        for j in 0..ncopy {
            let mut rgb = [0; 3];
            r.read_bytes(&mut rgb)?;

            let start = 3 * (idx0 as usize + j);
            if start < SIZE_OF_PALETTE {
                dst.pal[start..(start + 3)].copy_from_slice(&conv(rgb));
            } else {
                dropped = dropped + 1;
            }
        }
    }

    if dropped > 0 {
        warn!("color chunk wrote past index 255, {} colors dropped", dropped);
    }

    Ok(())
}
