//! This crate provides routines for decoding Autodesk Animator FLI
//! and Autodesk Animator Pro FLC files into 8-bit palette-indexed
//! frames.

extern crate byteorder;
extern crate libc;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;
#[cfg(test)]
extern crate tempfile;

pub use cursor::ByteCursor;
pub use errcode::FlicError;
pub use errcode::FlicResult;
pub use flic::{FlicFile,FlicPlaybackResult,FlicReader};
pub use header::{FlicFormat,FlicHeader};
pub use options::{DecoderOptions,ReadMode};

pub mod codec;
pub mod cursor;
pub mod errcode;
pub mod ffi;
pub mod flic;
pub mod header;
pub mod options;
mod raster;

/// Raster, with a mutable screen buffer and palette.
///
/// The same raster must be handed to every `read_next_frame` call of
/// a session, since most chunks only describe changes from the
/// previous frame.
pub struct RasterMut<'a> {
    w: usize,
    h: usize,
    stride: usize,
    buf: &'a mut [u8],
    pal: &'a mut [u8],
}
