//! Codec for chunk type 7 = FLI_SS2.

use std::io::{Read,Seek};

use ::{ByteCursor,FlicError,FlicResult,RasterMut};
use super::signed_count;

/// Magic for a FLI_SS2 chunk - Word Aligned Delta Compression.
///
/// This format contains the differences between consecutive frames.
/// This is the format most often used by Animator Pro for frames
/// other than the first frame of an animation.  It is similar to the
/// line coded delta (LC) compression, but is word oriented instead of
/// byte oriented.  The data is organized into lines and each line is
/// organized into packets.
///
/// The first word in the data following the chunk header contains the
/// number of lines in the chunk.  Each line can begin with some
/// optional words that are used to skip lines and set the last byte
/// in the line for animations with odd widths.  These optional words
/// are followed by a count of the packets in the line.  The line
/// count does not include skipped lines.
///
/// The high order two bits of the word is used to determine the
/// contents of the word.
///
///   Bit 15 | Bit 14 | Meaning
///  :------:|:------:| ----------------------------------------------
///      0   |    0   | The word contains the packet count.  The packets follow this word.
///      1   |    0   | The low order byte is to be stored in the last byte of the current line.
///      1   |    1   | The word contains a line skip count.  The number of lines skipped is given by the absolute value of the word.
///
/// The packets in each line are similar to the packets for the line
/// coded chunk.  The first byte of each packet is a column skip
/// count.  The second byte is a packet type.  If the packet type is
/// positive, the packet type is a count of words to be copied from
/// the packet to the animation image.  If the packet type is
/// negative, the packet contains one more word which is to be
/// replicated.  The absolute value of the packet type gives the
/// number of times the word is to be replicated.  The high and low
/// order byte in the replicated word do not necessarily have the same
/// value.
///
/// # Note
///
/// A last byte word finishes its line: the line counter is consumed
/// and the following words apply to the next line.  When that uses up
/// the last line, the chunk ends there.
///
/// Word runs stop at the right edge, so on odd widths the second byte
/// of the last word is dropped.
pub const FLI_SS2: u16 = 7;

/// Bit 14 of a negative opcode word selects a line skip.
const SS2_SKIP_LINES: u16 = 0x4000;

/// Decode a FLI_SS2 chunk.
pub fn decode_fli_ss2<R: Read + Seek>(r: &mut ByteCursor<R>, dst: &mut RasterMut)
        -> FlicResult<()> {
    let w = dst.w;
    let mut y = 0;

    let mut h = r.read_u16()? as usize;
    while h > 0 {
        let mut word = r.read_i16()?;

        while word < 0 {
            if (word as u16) & SS2_SKIP_LINES != 0 {
                // Skip lines.
                y = y + (-(word as i32)) as usize;
            } else {
                // Write last byte.
                if w == 0 {
                    return Err(FlicError::ColumnOutOfBounds(0, w));
                }

                dst.row_mut(y)?[w - 1] = word as u8;

                y = y + 1;
                h = h - 1;
                if h == 0 {
                    return Ok(());
                }
            }

            word = r.read_i16()?;
        }

        let count = word as u16;
        let mut x0 = 0;

        for _ in 0..count {
            x0 = x0 + r.read_u8()? as usize;
            let signed_length = signed_count(r.read_u8()?) as i32;

            let row = dst.row_mut(y)?;
            if signed_length != 0 && x0 >= w {
                return Err(FlicError::ColumnOutOfBounds(x0, w));
            }

            if signed_length >= 0 {
                for _ in 0..signed_length {
                    if x0 >= w {
                        break;
                    }

                    let c0 = r.read_u8()?;
                    let c1 = r.read_u8()?;
                    x0 = put_word(row, x0, c0, c1);
                }
            } else {
                let c0 = r.read_u8()?;
                let c1 = r.read_u8()?;
                for _ in 0..(-signed_length) {
                    if x0 >= w {
                        break;
                    }

                    x0 = put_word(row, x0, c0, c1);
                }
            }
        }

        y = y + 1;
        h = h - 1;
    }

    Ok(())
}

/// Store one word at column `x`, dropping the second byte if it
/// would fall off the row.  Returns the next column.
fn put_word(row: &mut [u8], x: usize, c0: u8, c1: u8)
        -> usize {
    row[x] = c0;
    if x + 1 < row.len() {
        row[x + 1] = c1;
        x + 2
    } else {
        x + 1
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use ::{ByteCursor,FlicError,RasterMut};
    use super::*;

    #[test]
    fn test_decode_fli_ss2() {
        let src = [
            0x02, 0x00, // hh 2
            0x02, 0x00, // count 2
            3, 5,       // skip 3, length 5
            0x01, 0x12, 0x23, 0x34, 0x45, 0x56, 0x67, 0x78, 0x89, 0x90,
            2, (-4i8) as u8,    // skip 2, length -4
            0xAB, 0xCD,
            0xFF, 0xFF, // skip 1 line
            0x01, 0x00, // count 1
            0, 1,       // skip 0, length 1
            0x5A, 0xA5 ];

        let expected = [
            0x00, 0x00, 0x00,
            0x01, 0x12, 0x23, 0x34, 0x45, 0x56, 0x67, 0x78, 0x89, 0x90,
            0x00, 0x00,
            0xAB, 0xCD, 0xAB, 0xCD, 0xAB, 0xCD, 0xAB, 0xCD,
        ];

        const SCREEN_W: usize = 320;
        const SCREEN_H: usize = 200;
        const NUM_COLS: usize = 256;
        let mut buf = [0; SCREEN_W * SCREEN_H];
        let mut pal = [0; 3 * NUM_COLS];

        let mut r = ByteCursor::new(Cursor::new(&src[..]));
        let res = decode_fli_ss2(&mut r,
                &mut RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal));
        assert!(res.is_ok());
        assert_eq!(&buf[0..23], &expected[..]);
        assert!(buf[SCREEN_W..(SCREEN_W * 2)].iter().all(|&c| c == 0));
        assert_eq!(&buf[(SCREEN_W * 2)..(SCREEN_W * 2 + 3)], &[ 0x5A, 0xA5, 0x00 ]);
        assert_eq!(r.tell().unwrap(), src.len() as u64);
    }

    #[test]
    fn test_decode_fli_ss2_skip_then_packet() {
        let src = [
            0x01, 0x00, // hh 1
            0xFE, 0xFF, // skip 2 lines
            0x01, 0x00, // count 1
            0, 1,       // skip 0, length 1
            0x11, 0x22 ];

        const SCREEN_W: usize = 4;
        const SCREEN_H: usize = 3;
        let mut buf = [0; SCREEN_W * SCREEN_H];
        let mut pal = [0; 3 * 256];

        let mut r = ByteCursor::new(Cursor::new(&src[..]));
        decode_fli_ss2(&mut r,
                &mut RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal)).unwrap();

        assert_eq!(buf, [
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x11, 0x22, 0x00, 0x00 ]);
    }

    /// A last byte word uses up a line of its own.
    #[test]
    fn test_decode_fli_ss2_last_byte() {
        let src = [
            0x02, 0x00, // hh 2
            0x77, 0x80, // last byte 0x77 on line 0
            0x01, 0x00, // count 1, applies to line 1
            1, (-1i8) as u8,    // skip 1, length -1
            0x33, 0x44 ];

        const SCREEN_W: usize = 5;
        const SCREEN_H: usize = 2;
        let mut buf = [0; SCREEN_W * SCREEN_H];
        let mut pal = [0; 3 * 256];

        let mut r = ByteCursor::new(Cursor::new(&src[..]));
        decode_fli_ss2(&mut r,
                &mut RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal)).unwrap();

        assert_eq!(buf, [
            0x00, 0x00, 0x00, 0x00, 0x77,
            0x00, 0x33, 0x44, 0x00, 0x00 ]);
    }

    /// A last byte word on the final line ends the chunk at once.
    #[test]
    fn test_decode_fli_ss2_last_byte_ends_chunk() {
        let src = [
            0x01, 0x00, // hh 1
            0x77, 0x80, // last byte 0x77 on line 0
            0x01, 0x00, // not read
            0, 1, 0x11, 0x22 ];

        const SCREEN_W: usize = 4;
        const SCREEN_H: usize = 2;
        let mut buf = [0; SCREEN_W * SCREEN_H];
        let mut pal = [0; 3 * 256];

        let pos = {
            let mut r = ByteCursor::new(Cursor::new(&src[..]));
            decode_fli_ss2(&mut r,
                    &mut RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal)).unwrap();
            r.tell().unwrap()
        };

        assert_eq!(buf, [ 0x00, 0x00, 0x00, 0x77, 0x00, 0x00, 0x00, 0x00 ]);
        assert_eq!(pos, 4);
    }

    #[test]
    fn test_decode_fli_ss2_odd_width() {
        let src = [
            0x02, 0x00, // hh 2
            0x01, 0x00, // count 1
            0, 3,       // skip 0, length 3: the last word is cut
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06,
            0x01, 0x00, // count 1
            1, (-5i8) as u8,    // skip 1, length -5
            0xA0, 0xB0 ];

        const SCREEN_W: usize = 5;
        const SCREEN_H: usize = 2;
        let mut buf = [0; SCREEN_W * SCREEN_H];
        let mut pal = [0; 3 * 256];

        let mut r = ByteCursor::new(Cursor::new(&src[..]));
        decode_fli_ss2(&mut r,
                &mut RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal)).unwrap();

        assert_eq!(buf, [
            0x01, 0x02, 0x03, 0x04, 0x05,
            0x00, 0xA0, 0xB0, 0xA0, 0xB0 ]);
    }

    #[test]
    fn test_decode_fli_ss2_row_out_of_bounds() {
        let src = [
            0x01, 0x00, // hh 1
            0xFD, 0xFF, // skip 3 lines
            0x01, 0x00, // count 1
            0, 1, 0x11, 0x22 ];

        const SCREEN_W: usize = 4;
        const SCREEN_H: usize = 2;
        let mut buf = [0; SCREEN_W * SCREEN_H];
        let mut pal = [0; 3 * 256];

        let mut r = ByteCursor::new(Cursor::new(&src[..]));
        match decode_fli_ss2(&mut r,
                &mut RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal)) {
            Err(FlicError::RowOutOfBounds(3, 2)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_decode_fli_ss2_column_out_of_bounds() {
        let src = [
            0x01, 0x00, // hh 1
            0x01, 0x00, // count 1
            9, 1,       // skip 9 on a line of 4
            0x11, 0x22 ];

        const SCREEN_W: usize = 4;
        const SCREEN_H: usize = 2;
        let mut buf = [0; SCREEN_W * SCREEN_H];
        let mut pal = [0; 3 * 256];

        let mut r = ByteCursor::new(Cursor::new(&src[..]));
        match decode_fli_ss2(&mut r,
                &mut RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal)) {
            Err(FlicError::ColumnOutOfBounds(9, 4)) => (),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(buf, [0; SCREEN_W * SCREEN_H]);
    }

    /// A packet with no words may skip to the right edge.
    #[test]
    fn test_decode_fli_ss2_empty_packet_at_edge() {
        let src = [
            0x01, 0x00, // hh 1
            0x02, 0x00, // count 2
            1, 1,       // skip 1, length 1
            0x11, 0x22,
            1, 0 ];     // skip 1 to column 4, length 0

        const SCREEN_W: usize = 4;
        const SCREEN_H: usize = 1;
        let mut buf = [0; SCREEN_W * SCREEN_H];
        let mut pal = [0; 3 * 256];

        let pos = {
            let mut r = ByteCursor::new(Cursor::new(&src[..]));
            decode_fli_ss2(&mut r,
                    &mut RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal)).unwrap();
            r.tell().unwrap()
        };

        assert_eq!(buf, [ 0x00, 0x11, 0x22, 0x00 ]);
        assert_eq!(pos, src.len() as u64);
    }
}
