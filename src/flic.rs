//! FLIC implementation.

use std::fs::File;
use std::io::{BufReader,Read,Seek};
use std::path::Path;

use ::{ByteCursor,DecoderOptions,FlicError,FlicResult,RasterMut};
use codec::{chunk_modifies_palette,read_chunk};
use header::{FlicFormat,FlicHeader,read_flic_header};

/// Magic for a FLIC pre-frame chunk - FLIC Prefix Chunk.
///
/// An optional prefix chunk may immediately follow the animation file
/// header.  It stores Animator Pro settings and CEL placement, nothing
/// that affects playback.  It starts with a 16-byte header identical
/// in structure to a frame header.
///
/// Programs reading a FLIC file should skip the prefix chunk by using
/// the size value in the prefix header, or by seeking directly to the
/// first frame using the oframe1 field from the file header.
pub const FCID_PREFIX: u16 = 0xF100;

/// Magic for a FLIC frame - FLIC Frame Chunks.
///
/// Frame chunks contain the pixel and color data for the animation.
/// A frame chunk may contain multiple subordinate chunks, each
/// containing a different type of data for the current frame.  Each
/// frame chunk starts with a 16-byte header that describes the
/// contents of the frame:
///
///   Offset | Length |   Name   | Description
///   ------:| ------:|:--------:| -----------------------------------
///        0 |      4 |   size   | The size of the frame chunk, including this header and all subordinate chunks that follow.
///        4 |      2 |   type   | Frame chunk identifier.
///        6 |      2 |  chunks  | Number of subordinate chunks in the frame chunk.
///        8 |      8 | reserved | Unused space, set to zeroes.
///
/// When the chunks count is zero, the frame is identical to the
/// previous frame.
pub const FCID_FRAME: u16 = 0xF1FA;

/// Size of a FLIC frame header on disk.
pub const SIZE_OF_FLIC_FRAME: u64 = 16;

/// Number of reserved bytes at the end of a frame header.
const FRAME_RESERVED: u64 = 8;

/// FLIC decoding session over any seekable byte source.
///
/// The header is read once when the session is created.  Every call
/// to `read_next_frame` decodes one frame record on top of the raster
/// left by the previous call.
pub struct FlicReader<R> {
    hdr: FlicHeader,
    frame: usize,
    opts: DecoderOptions,
    r: ByteCursor<R>,
}

/// FLIC animation, with a File handle.
///
/// Opens and holds onto the file handle until it is dropped.
pub type FlicFile = FlicReader<BufReader<File>>;

/// Record containing playback information.
#[derive(Clone,Copy,Debug,Default,Eq,PartialEq)]
pub struct FlicPlaybackResult {
    /// The frame just decoded was the last one counted by the header.
    /// Frames after it, such as the ring frame, can still be read.
    pub ended: bool,

    /// A color chunk was decoded.
    pub palette_updated: bool,

    /// Number of chunks handed to a decoder.
    pub chunks_decoded: usize,

    /// Number of chunks skipped because their type is not decoded.
    pub chunks_ignored: usize,
}

/*--------------------------------------------------------------*/

impl FlicReader<BufReader<File>> {
    /// Open a FLIC file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    ///
    /// flicread::FlicFile::open(Path::new("ex.fli"));
    /// ```
    pub fn open(filename: &Path)
            -> FlicResult<Self> {
        Self::open_with_options(filename, DecoderOptions::default())
    }

    /// Open a FLIC file with the given options.
    pub fn open_with_options(filename: &Path, opts: DecoderOptions)
            -> FlicResult<Self> {
        if !filename.exists() {
            return Err(FlicError::NoFile);
        } else if !filename.is_file() {
            return Err(FlicError::NotARegularFile);
        }

        let file = File::open(filename)?;
        Self::with_options(BufReader::new(file), opts)
    }
}

impl<R: Read + Seek> FlicReader<R> {
    /// Start a session over a byte source, reading the header.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    ///
    /// let bytes = vec![0; 128];
    /// // No FLI or FLC magic.
    /// assert!(flicread::FlicReader::new(Cursor::new(bytes)).is_err());
    /// ```
    pub fn new(source: R)
            -> FlicResult<Self> {
        Self::with_options(source, DecoderOptions::default())
    }

    /// Start a session over a byte source with the given options.
    pub fn with_options(source: R, opts: DecoderOptions)
            -> FlicResult<Self> {
        let mut r = ByteCursor::with_mode(source, opts.get_read_mode());
        let hdr = read_flic_header(&mut r)?;

        Ok(FlicReader {
            hdr: hdr,
            frame: 0,
            opts: opts,
            r: r,
        })
    }

    /// End the session, handing back the byte source.
    pub fn close(self) -> R {
        self.r.into_inner()
    }

    /// Get the header read when the session was opened.
    pub fn header(&self) -> &FlicHeader {
        &self.hdr
    }

    /// Get the container flavour.
    pub fn format(&self) -> FlicFormat {
        self.hdr.format
    }

    /// Get the next frame number.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Get the frame count, not including the ring frame.
    pub fn frame_count(&self) -> u16 {
        self.hdr.frame_count
    }

    /// Get the FLIC width.
    pub fn width(&self) -> u16 {
        self.hdr.w
    }

    /// Get the FLIC height.
    pub fn height(&self) -> u16 {
        self.hdr.h
    }

    /// Number of milliseconds to delay between each frame during playback.
    pub fn speed_msec(&self) -> u32 {
        self.hdr.speed_msec
    }

    /// Decode the next frame in the FLIC.
    ///
    /// The raster buffer and palette must hold the previous frame, as
    /// left by the previous call.  After an error the stream position
    /// is unspecified and the session should be reopened.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    ///
    /// if let Ok(ref mut flic) = flicread::FlicFile::open(Path::new("ex.fli")) {
    ///     let w = flic.width() as usize;
    ///     let h = flic.height() as usize;
    ///     let mut buf = vec![0; w * h];
    ///     let mut pal = vec![0; 3 * 256];
    ///     let mut raster = flicread::RasterMut::new(w, h, &mut buf, &mut pal);
    ///
    ///     let res = flic.read_next_frame(&mut raster);
    /// }
    /// ```
    pub fn read_next_frame(&mut self, dst: &mut RasterMut)
            -> FlicResult<FlicPlaybackResult> {
        let mut res = FlicPlaybackResult::default();

        if (self.hdr.w as usize != dst.w) || (self.hdr.h as usize != dst.h) {
            return Err(FlicError::WrongResolution);
        }

        match self.frame {
            0 if self.hdr.oframe1 != 0 => self.r.seek(self.hdr.oframe1 as u64)?,
            1 if self.hdr.oframe2 != 0 => self.r.seek(self.hdr.oframe2 as u64)?,
            _ => (),
        }

        let (offset, size, num_chunks) = self.read_frame_header()?;
        debug!("frame {} at offset {}, size {}, {} chunks",
                self.frame, offset, size, num_chunks);

        for _ in 0..num_chunks {
            let chunk = read_chunk(&mut self.r, dst)?;

            if chunk.decoded {
                res.chunks_decoded = res.chunks_decoded + 1;
                res.palette_updated = res.palette_updated
                        || chunk_modifies_palette(chunk.magic);
            } else {
                warn!("frame {} - unrecognised chunk type {}",
                        self.frame, chunk.magic);
                res.chunks_ignored = res.chunks_ignored + 1;
            }
        }

        // Note: Animator forces chunk sizes to be even without always
        // updating the frame size, so the chunks may not add up.
        let position = self.r.tell()?;
        let expected = offset + size as u64;
        if num_chunks > 0 && position > expected {
            warn!("frame {} reads too much - current offset={}, expected offset={}",
                    self.frame, position, expected);
        } else if num_chunks > 0 && position < expected {
            warn!("frame {} reads too little - current offset={}, expected offset={}",
                    self.frame, position, expected);
        }

        self.r.seek(expected)?;

        res.ended = self.frame + 1 == self.hdr.frame_count as usize;
        self.frame = self.frame + 1;

        Ok(res)
    }

    /// Read a frame header, skipping a prefix chunk in front of the
    /// first frame.  Returns the frame offset, size and chunk count.
    fn read_frame_header(&mut self)
            -> FlicResult<(u64, u32, u16)> {
        let mut offset = self.r.tell()?;
        let mut size = self.r.read_u32()?;
        let mut magic = self.r.read_u16()?;

        if self.frame == 0 && magic == FCID_PREFIX && self.opts.get_skip_prefix_chunk() {
            debug!("skipping prefix chunk at offset {}, size {}", offset, size);

            offset = offset + size as u64;
            self.r.seek(offset)?;
            size = self.r.read_u32()?;
            magic = self.r.read_u16()?;
        }

        if magic != FCID_FRAME {
            return Err(FlicError::BadFrameMagic(offset, magic));
        }

        let num_chunks = self.r.read_u16()?;
        self.r.skip(FRAME_RESERVED)?;

        Ok((offset, size, num_chunks))
    }
}
