//! Raster implementation.

use ::{FlicError,FlicResult,RasterMut};

/// Number of bytes in a palette: 256 entries of R, G, B.
pub const SIZE_OF_PALETTE: usize = 3 * 256;

impl<'a> RasterMut<'a> {
    /// Allocate a new raster for the given screen buffer and palette
    /// memory slices.
    ///
    /// # Examples
    ///
    /// ```
    /// const SCREEN_W: usize = 320;
    /// const SCREEN_H: usize = 200;
    /// const NUM_COLS: usize = 256;
    /// let mut buf = [0; SCREEN_W * SCREEN_H];
    /// let mut pal = [0; 3 * NUM_COLS];
    ///
    /// flicread::RasterMut::new(SCREEN_W, SCREEN_H, &mut buf, &mut pal);
    /// ```
    pub fn new(w: usize, h: usize, buf: &'a mut [u8], pal: &'a mut [u8])
            -> Self {
        Self::with_stride(w, h, w, buf, pal)
    }

    /// Allocate a new raster whose rows are `stride` bytes apart.
    ///
    /// # Panics
    ///
    /// Panics if the stride is narrower than the width, if the buffer
    /// cannot hold `h` rows, or if the palette is not 768 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// const SCREEN_W: usize = 320;
    /// const SCREEN_H: usize = 200;
    /// const STRIDE: usize = 384;
    /// let mut buf = [0; STRIDE * SCREEN_H];
    /// let mut pal = [0; 3 * 256];
    ///
    /// flicread::RasterMut::with_stride(SCREEN_W, SCREEN_H, STRIDE, &mut buf, &mut pal);
    /// ```
    pub fn with_stride(
            w: usize, h: usize, stride: usize,
            buf: &'a mut [u8], pal: &'a mut [u8])
            -> Self {
        assert!(Self::fits(w, h, stride, buf.len(), pal.len()));

        RasterMut {
            w: w,
            h: h,
            stride: stride,
            buf: buf,
            pal: pal,
        }
    }

    /// Returns true if a raster of the given shape can be built over
    /// buffers of the given lengths.
    pub fn fits(w: usize, h: usize, stride: usize, buf_len: usize, pal_len: usize)
            -> bool {
        let rows_fit = match stride.checked_mul(h) {
            Some(n) => n <= buf_len,
            None => false,
        };

        w <= stride && rows_fit && pal_len == SIZE_OF_PALETTE
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The screen buffer, `height` rows of `stride` bytes.
    pub fn buf(&self) -> &[u8] {
        &self.buf[..(self.stride * self.h)]
    }

    /// The palette, 256 entries of R, G, B.
    pub fn pal(&self) -> &[u8] {
        &self.pal[..]
    }

    /// The visible `width` bytes of row `y`.
    pub fn row_mut(&mut self, y: usize)
            -> FlicResult<&mut [u8]> {
        if y >= self.h {
            return Err(FlicError::RowOutOfBounds(y, self.h));
        }

        let start = self.stride * y;
        let end = start + self.w;
        Ok(&mut self.buf[start..end])
    }
}

#[cfg(test)]
mod tests {
    use ::{FlicError,RasterMut};

    #[test]
    fn test_row_mut() {
        let mut buf = [0; 6 * 2];
        let mut pal = [0; 3 * 256];

        {
            let mut dst = RasterMut::with_stride(4, 2, 6, &mut buf, &mut pal);
            dst.row_mut(1).unwrap()[3] = 0xAB;
            assert_eq!(dst.row_mut(0).unwrap().len(), 4);

            match dst.row_mut(2) {
                Err(FlicError::RowOutOfBounds(2, 2)) => (),
                _ => panic!("expected RowOutOfBounds"),
            }
        }

        assert_eq!(buf[6 + 3], 0xAB);
    }

    #[test]
    fn test_fits() {
        assert!(RasterMut::fits(4, 2, 4, 8, 768));
        assert!(!RasterMut::fits(4, 2, 3, 8, 768));
        assert!(!RasterMut::fits(4, 2, 4, 7, 768));
        assert!(!RasterMut::fits(4, 2, 4, 8, 767));
    }

    #[test]
    #[should_panic]
    fn test_bad_palette() {
        let mut buf = [0; 4];
        let mut pal = [0; 16];
        RasterMut::new(2, 2, &mut buf, &mut pal);
    }
}
