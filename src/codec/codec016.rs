//! Codec for chunk type 16 = FLI_COPY.

use std::io::{Read,Seek};

use ::{ByteCursor,FlicResult,RasterMut};

/// Magic for a FLI_COPY chunk - No Compression.
///
/// This chunk contains an uncompressed image of the frame.  The
/// number of pixels following the chunk header is exactly the width
/// of the animation times the height of the animation.  The data
/// starts in the upper left corner with pixels copied from left to
/// right and then top to bottom.
pub const FLI_COPY: u16 = 16;

/// Decode a FLI_COPY chunk.
pub fn decode_fli_copy<R: Read + Seek>(r: &mut ByteCursor<R>, dst: &mut RasterMut)
        -> FlicResult<()> {
    for y in 0..dst.h {
        let row = dst.row_mut(y)?;
        r.read_bytes(row)?;
    }

    Ok(())
}
