//! FLIC container header.

use std::cmp::min;
use std::io::{Read,Seek};

use ::{ByteCursor,FlicError,FlicResult};

/// Magic for a FLI file - Original Animator FLI Files.
///
/// The header of a FLI file is a subset of the FLC header:
///
///   Offset | Length |   Name   | Description
///   ------:| ------:|:--------:| -----------------------------------
///        0 |      4 |   size   | The size of the entire animation file, including this file header.
///        4 |      2 |   magic  | File format identifier.  Always 0xAF11.
///        6 |      2 |  frames  | Number of frames in the FLIC, not including the ring frame.
///        8 |      2 |   width  | Screen width in pixels.
///       10 |      2 |  height  | Screen height in pixels.
///       12 |      2 |   depth  | Bits per pixel.  Always treated as 8.
///       14 |      2 |   flags  | Ignored.
///       16 |      4 |   speed  | Delay between frames, in jiffies of 1/70 second.
pub const FLIH_MAGIC: u16 = 0xAF11;

/// Magic for a FLC file - Animator Pro FLC Files.
///
/// Shares the first 20 bytes with the FLI header, except that speed is
/// already in milliseconds.  Two further fields are used here:
///
///   Offset | Length |   Name   | Description
///   ------:| ------:|:--------:| -----------------------------------
///       80 |      4 |  oframe1 | Offset from the beginning of the file to the first frame.
///       84 |      4 |  oframe2 | Offset from the beginning of the file to the second frame.
pub const FLIHR_MAGIC: u16 = 0xAF12;

/// Size of a FLIC file header on disk.
pub const SIZE_OF_FLIC_HEADER: u64 = 128;

/// Offset of the oframe1 field in a FLC header.
const OFFSET_OF_OFRAME1: u64 = 80;

/// Jiffies per second.
const JIFFIES_PER_SEC: u32 = 70;

/// Flavour of FLIC container.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum FlicFormat {
    /// Original Animator, magic 0xAF11.
    Fli,
    /// Animator Pro, magic 0xAF12.
    Flc,
}

/// Stream metadata, read once when a session is opened.
#[derive(Clone,Debug,Eq,PartialEq)]
pub struct FlicHeader {
    pub format: FlicFormat,
    pub frame_count: u16,
    pub w: u16,
    pub h: u16,
    pub speed_msec: u32,

    /// Absolute offset of the first frame record, or 0 (FLC only).
    pub oframe1: u32,

    /// Absolute offset of the second frame record, or 0 (FLC only).
    pub oframe2: u32,
}

impl FlicFormat {
    /// The header magic for this format.
    pub fn magic(&self) -> u16 {
        match *self {
            FlicFormat::Fli => FLIH_MAGIC,
            FlicFormat::Flc => FLIHR_MAGIC,
        }
    }
}

/// Read the FLIC's header, leaving the cursor at the end of the
/// padded header.
///
/// A FLI speed of zero becomes 70, anything else is converted from
/// jiffies to milliseconds, saturating at `u32::MAX`.  A FLC speed is kept as is.
///
/// # Note
///
/// A zero width becomes 320.  A zero height sets the *width* to 200
/// and leaves the height at zero.  Existing callers depend on these
/// dimensions, so the behaviour is kept.
pub fn read_flic_header<R: Read + Seek>(r: &mut ByteCursor<R>)
        -> FlicResult<FlicHeader> {
    r.seek(0)?;

    let _size = r.read_u32()?;
    let magic = r.read_u16()?;
    let format = match magic {
        FLIH_MAGIC => FlicFormat::Fli,
        FLIHR_MAGIC => FlicFormat::Flc,
        _ => return Err(FlicError::BadMagic(magic)),
    };

    let frame_count = r.read_u16()?;
    let mut w = r.read_u16()?;
    let h = r.read_u16()?;
    let _depth = r.read_u16()?;
    let _flags = r.read_u16()?;
    let mut speed_msec = r.read_u32()?;
    let mut oframe1 = 0;
    let mut oframe2 = 0;

    match format {
        FlicFormat::Fli => {
            speed_msec = if speed_msec == 0 {
                JIFFIES_PER_SEC
            } else {
                let msec = speed_msec as u64 * 1000 / JIFFIES_PER_SEC as u64;
                min(msec, u32::MAX as u64) as u32
            };
        },
        FlicFormat::Flc => {
            r.seek(OFFSET_OF_OFRAME1)?;
            oframe1 = r.read_u32()?;
            oframe2 = r.read_u32()?;
        },
    }

    if w == 0 {
        w = 320;
    }
    if h == 0 {
        w = 200;
    }

    r.seek(SIZE_OF_FLIC_HEADER)?;

    debug!("{:?} header: {} frames, {}x{}, {} msec, oframe1={}, oframe2={}",
            format, frame_count, w, h, speed_msec, oframe1, oframe2);

    Ok(FlicHeader {
        format: format,
        frame_count: frame_count,
        w: w,
        h: h,
        speed_msec: speed_msec,
        oframe1: oframe1,
        oframe2: oframe2,
    })
}
