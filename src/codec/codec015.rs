//! Codec for chunk type 15 = FLI_BRUN.

use std::io::{Read,Seek};

use ::{ByteCursor,FlicResult,RasterMut};
use super::{copy_literal,fill_run,signed_count};

/// Magic for a FLI_BRUN chunk - Byte Run Length Compression.
///
/// This chunk contains the entire image in a compressed format.
/// Usually this chunk is used in the first frame of an animation.
///
/// The data is organized in lines.  Each line contains packets of
/// compressed pixels.  The first line is at the top of the animation,
/// followed by subsequent lines moving downward.  The number of lines
/// in this chunk is given by the height of the animation.
///
/// The first byte of each line is a count of packets in the line.
/// This value is ignored, it is a holdover from the original
/// Animator.  It is possible to generate more than 255 packets on a
/// line.  The width of the animation is now used to drive the
/// decoding of packets on a line; continue reading and processing
/// packets until width pixels have been processed, then proceed to
/// the next line.
///
/// Each packet consist of a type/size byte, followed by one or more
/// pixels.  If the packet type is negative it is a count of pixels to
/// be copied from the packet to the animation image.  If the packet
/// type is positive it contains a single pixel which is to be
/// replicated; the absolute value of the packet type is the number of
/// times the pixel is to be replicated.
pub const FLI_BRUN: u16 = 15;

/// Decode a FLI_BRUN chunk.
///
/// Exactly `width` pixels are written per line.  Pixels of a packet
/// that would cross the right edge are dropped.
pub fn decode_fli_brun<R: Read + Seek>(r: &mut ByteCursor<R>, dst: &mut RasterMut)
        -> FlicResult<()> {
    let w = dst.w;

    for y in 0..dst.h {
        let row = dst.row_mut(y)?;
        let _count = r.read_u8()?;
        let mut x0 = 0;

        while x0 < w {
            let signed_length = signed_count(r.read_u8()?) as i32;

            if signed_length >= 0 {
                let n = signed_length as usize;
                let c = r.read_u8()?;
                x0 = fill_run(row, x0, n, c);
            } else {
                let n = (-signed_length) as usize;
                copy_literal(r, row, x0, n)?;
                x0 = x0 + n;
            }

            // Zero-filled data past the end of the stream would loop
            // forever on empty packets.
            if r.is_exhausted() {
                debug!("FLI_BRUN data ends at line {}", y);
                return Ok(());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use ::{ByteCursor,RasterMut};
    use super::*;

    #[test]
    fn test_decode_fli_brun() {
        let src = [
            0x02,   // count 2
            3,      // length 3
            0xAB,
            (-4i8) as u8,   // length -4
            0x01, 0x23, 0x45, 0x67,
            (-1i8) as u8,   // length -1
            0x89 ];

        let expected = [
            0xAB, 0xAB, 0xAB,
            0x01, 0x23, 0x45, 0x67,
            0x89 ];

        const SCREEN_W: usize = 8;
        const SCREEN_H: usize = 1;
        const NUM_COLS: usize = 256;
        let mut buf = [0; SCREEN_W * SCREEN_H];
        let mut pal = [0; 3 * NUM_COLS];

        {
            let mut r = ByteCursor::new(Cursor::new(&src[..]));
            let mut dst = RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal);
            let res = decode_fli_brun(&mut r, &mut dst);
            assert!(res.is_ok());
        }

        assert_eq!(&buf[..], &expected[..]);
    }

    #[test]
    fn test_decode_fli_brun_ignores_packet_count() {
        // Packet count says 0, but the line still needs filling.
        let src = [
            0x00,
            3, 0x41,
            1, 0x41 ];

        const SCREEN_W: usize = 4;
        const SCREEN_H: usize = 1;
        let mut buf = [0; SCREEN_W * SCREEN_H];
        let mut pal = [0; 3 * 256];

        let mut r = ByteCursor::new(Cursor::new(&src[..]));
        decode_fli_brun(&mut r,
                &mut RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal)).unwrap();

        assert_eq!(buf, [ 0x41, 0x41, 0x41, 0x41 ]);
        assert_eq!(r.tell().unwrap(), 5);
    }

    #[test]
    fn test_decode_fli_brun_clips_to_width() {
        let src = [
            0x01,
            6, 0x11,        // run of 6 on a line of 4
            0x01,
            2, 0x22,
            (-5i8) as u8,   // literal of 5, 3 of which fall off
            0x01, 0x02, 0x03, 0x04, 0x05 ];

        const SCREEN_W: usize = 4;
        const SCREEN_H: usize = 2;
        const STRIDE: usize = 6;
        let mut buf = [0xEE; STRIDE * SCREEN_H];
        let mut pal = [0; 3 * 256];

        let pos = {
            let mut r = ByteCursor::new(Cursor::new(&src[..]));
            decode_fli_brun(&mut r, &mut RasterMut::with_stride(
                    SCREEN_W, SCREEN_H, STRIDE, &mut buf, &mut pal)).unwrap();
            r.tell().unwrap()
        };

        assert_eq!(buf, [
            0x11, 0x11, 0x11, 0x11, 0xEE, 0xEE,
            0x22, 0x22, 0x01, 0x02, 0xEE, 0xEE ]);
        assert_eq!(pos, src.len() as u64);
    }

    #[test]
    fn test_decode_fli_brun_truncated() {
        let src = [
            0x01,
            2, 0x33 ];

        const SCREEN_W: usize = 4;
        const SCREEN_H: usize = 2;
        let mut buf = [0xEE; SCREEN_W * SCREEN_H];
        let mut pal = [0; 3 * 256];

        let mut r = ByteCursor::new(Cursor::new(&src[..]));
        decode_fli_brun(&mut r,
                &mut RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal)).unwrap();

        assert_eq!(buf, [ 0x33, 0x33, 0xEE, 0xEE, 0xEE, 0xEE, 0xEE, 0xEE ]);
    }
}
