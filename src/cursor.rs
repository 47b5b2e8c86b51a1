//! Seekable little-endian byte source.

use std::io::{self,ErrorKind,Read,Seek,SeekFrom};
use byteorder::LittleEndian as LE;
use byteorder::ReadBytesExt;

use ::{FlicError,FlicResult,ReadMode};

/// Wraps a seekable stream with absolute positioning and the FLIC
/// short-read policy.
///
/// In `ReadMode::Lenient` a fixed-width read that runs past the end
/// of the stream returns zero, and the cursor remembers that it ran
/// dry until the next seek.  In `ReadMode::Strict` the same read
/// fails with `FlicError::UnexpectedEof`.
pub struct ByteCursor<R> {
    inner: R,
    mode: ReadMode,
    exhausted: bool,
}

impl<R: Read + Seek> ByteCursor<R> {
    /// Create a lenient cursor.
    pub fn new(inner: R) -> Self {
        Self::with_mode(inner, ReadMode::Lenient)
    }

    /// Create a cursor with the given short read behaviour.
    pub fn with_mode(inner: R, mode: ReadMode) -> Self {
        ByteCursor {
            inner: inner,
            mode: mode,
            exhausted: false,
        }
    }

    /// Get the short read behaviour.
    pub fn mode(&self) -> ReadMode {
        self.mode
    }

    /// Returns true if a read has run past the end of the stream
    /// since the last seek.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Absolute position in the stream.  Does not discard the read
    /// buffer of a `BufReader`.
    pub fn tell(&mut self) -> FlicResult<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Move to an absolute position.  Seeking past the end is allowed;
    /// subsequent reads are short.
    pub fn seek(&mut self, pos: u64) -> FlicResult<()> {
        self.inner.seek(SeekFrom::Start(pos))?;
        self.exhausted = false;
        Ok(())
    }

    /// Move forward by `n` bytes without reading them.
    pub fn skip(&mut self, n: u64) -> FlicResult<()> {
        if n > 0 {
            let pos = self.tell()?;
            self.inner.seek(SeekFrom::Start(pos + n))?;
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> FlicResult<u8> {
        let res = self.inner.read_u8();
        self.settle(res)
    }

    pub fn read_u16(&mut self) -> FlicResult<u16> {
        let res = self.inner.read_u16::<LE>();
        self.settle(res)
    }

    /// Read a little-endian word and reinterpret it as two's
    /// complement.
    pub fn read_i16(&mut self) -> FlicResult<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> FlicResult<u32> {
        let res = self.inner.read_u32::<LE>();
        self.settle(res)
    }

    /// Fill `buf` from the stream.  In lenient mode, whatever the
    /// stream could not supply is zero.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> FlicResult<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled = filled + n,
                Err(ref e) if e.kind() == ErrorKind::Interrupted => (),
                Err(e) => return Err(FlicError::Io(e)),
            }
        }

        if filled < buf.len() {
            self.short_read()?;
            for e in &mut buf[filled..] {
                *e = 0;
            }
        }

        Ok(())
    }

    fn settle<T: Default>(&mut self, res: io::Result<T>)
            -> FlicResult<T> {
        match res {
            Ok(v) => Ok(v),
            Err(ref e) if e.kind() == ErrorKind::UnexpectedEof => {
                self.short_read()?;
                Ok(T::default())
            },
            Err(e) => Err(FlicError::Io(e)),
        }
    }

    fn short_read(&mut self) -> FlicResult<()> {
        self.exhausted = true;
        match self.mode {
            ReadMode::Lenient => Ok(()),
            ReadMode::Strict => {
                let offset = self.tell()?;
                Err(FlicError::UnexpectedEof(offset))
            },
        }
    }
}
