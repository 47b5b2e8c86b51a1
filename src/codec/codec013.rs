//! Codec for chunk type 13 = FLI_BLACK.

use ::RasterMut;

/// Magic for a FLI_BLACK chunk - No Data.
///
/// This chunk has no data following the header.  All pixels in the
/// frame are set to color index 0.
pub const FLI_BLACK: u16 = 13;

/// Decode a FLI_BLACK chunk.
///
/// Clears every byte of every row, including the padding between the
/// width and the stride.
pub fn decode_fli_black(dst: &mut RasterMut) {
    let end = dst.stride * dst.h;
    for e in &mut dst.buf[..end] {
        *e = 0;
    }
}

#[cfg(test)]
mod tests {
    use ::RasterMut;
    use super::decode_fli_black;

    #[test]
    fn test_decode_fli_black() {
        const SCREEN_W: usize = 4;
        const SCREEN_H: usize = 2;
        let mut buf = [0xCD; SCREEN_W * SCREEN_H];
        let mut pal = [0x55; 3 * 256];

        decode_fli_black(&mut RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal));

        assert_eq!(buf, [0; SCREEN_W * SCREEN_H]);
        assert!(pal.iter().all(|&c| c == 0x55));
    }

    #[test]
    fn test_decode_fli_black_stride() {
        const SCREEN_W: usize = 3;
        const SCREEN_H: usize = 2;
        const STRIDE: usize = 5;
        let mut buf = [0xCD; STRIDE * SCREEN_H + 2];
        let mut pal = [0; 3 * 256];

        decode_fli_black(&mut RasterMut::with_stride(
                SCREEN_W, SCREEN_H, STRIDE, &mut buf, &mut pal));

        assert_eq!(&buf[..(STRIDE * SCREEN_H)], &[0; STRIDE * SCREEN_H][..]);
        assert_eq!(&buf[(STRIDE * SCREEN_H)..], &[0xCD, 0xCD]);
    }
}
