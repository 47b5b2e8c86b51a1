//! Foreign function interface.

use std::ffi::CStr;
use std::path::Path;
use std::mem;
use std::ptr;
use std::slice;
use libc::{c_char,c_uint,size_t};

use ::{FlicFile,RasterMut};

/// Dummy opaque structure, equivalent to RasterMut<'a>.
pub struct CRasterMut;

/// Returned by `flicrs_read_next_frame` when the last counted frame
/// was decoded.
pub const FLICRS_ENDED: c_uint = 2;

/// Returned by `flicrs_read_next_frame` when the palette changed.
pub const FLICRS_PALETTE_UPDATED: c_uint = 8;

// Log with "file:line - " prefix, for more informative error messages.
macro_rules! logerror {
    ($e:expr) => {
        error!("{}:{} - {}", file!(), line!(), $e);
    };
}

unsafe fn transmute_raster_mut<'a>(dst: *mut CRasterMut)
        -> &'a mut RasterMut<'a> {
    let ptr: *mut RasterMut = mem::transmute(dst);
    &mut *ptr
}

/*--------------------------------------------------------------*/
/* FLIC                                                         */
/*--------------------------------------------------------------*/

/// Open a FLIC file.
#[no_mangle]
pub extern "C" fn flicrs_open(filename: *const c_char)
        -> *mut FlicFile {
    if filename.is_null() {
        logerror!("bad input parameters");
        return ptr::null_mut();
    }

    let cstr = unsafe{ CStr::from_ptr(filename) };
    match cstr.to_str() {
        Ok(s) => match FlicFile::open(Path::new(s)) {
            Ok(f) => {
                return Box::into_raw(Box::new(f));
            },
            Err(e) => {
                logerror!(e);
                return ptr::null_mut()
            }
        },
        Err(e) => {
            logerror!(e);
            return ptr::null_mut();
        }
    }
}

/// Close a FLIC file.
#[no_mangle]
pub extern "C" fn flicrs_close(flic: *mut FlicFile) {
    if flic.is_null() {
        return;
    }

    let _flic = unsafe{ Box::from_raw(flic) };
}

/// Get the next frame number.
#[no_mangle]
pub extern "C" fn flicrs_frame(flic: *const FlicFile)
        -> c_uint {
    if flic.is_null() {
        logerror!("bad input parameters");
        return 0;
    }

    let flic = unsafe{ &*flic };
    flic.frame() as c_uint
}

/// Get the frame count, not including the ring frame.
#[no_mangle]
pub extern "C" fn flicrs_frame_count(flic: *const FlicFile)
        -> c_uint {
    if flic.is_null() {
        logerror!("bad input parameters");
        return 0;
    }

    let flic = unsafe{ &*flic };
    flic.frame_count() as c_uint
}

/// Get the FLIC width.
#[no_mangle]
pub extern "C" fn flicrs_width(flic: *const FlicFile)
        -> c_uint {
    if flic.is_null() {
        logerror!("bad input parameters");
        return 0;
    }

    let flic = unsafe{ &*flic };
    flic.width() as c_uint
}

/// Get the FLIC height.
#[no_mangle]
pub extern "C" fn flicrs_height(flic: *const FlicFile)
        -> c_uint {
    if flic.is_null() {
        logerror!("bad input parameters");
        return 0;
    }

    let flic = unsafe{ &*flic };
    flic.height() as c_uint
}

/// Number of milliseconds to delay between each frame during playback.
#[no_mangle]
pub extern "C" fn flicrs_speed_msec(flic: *const FlicFile)
        -> c_uint {
    if flic.is_null() {
        logerror!("bad input parameters");
        return 0;
    }

    let flic = unsafe{ &*flic };
    flic.speed_msec() as c_uint
}

/// Decode the next frame in the FLIC.
///
/// Returns 1 on error.  Otherwise returns 0, with `FLICRS_ENDED` and
/// `FLICRS_PALETTE_UPDATED` or'd in as appropriate.
#[no_mangle]
pub extern "C" fn flicrs_read_next_frame(
        flic: *mut FlicFile, dst: *mut CRasterMut)
        -> c_uint {
    if flic.is_null() || dst.is_null() {
        logerror!("bad input parameters");
        return 1;
    }

    let flic = unsafe{ &mut *flic };
    let dst_raster = unsafe{ transmute_raster_mut(dst) };
    match flic.read_next_frame(dst_raster) {
        Ok(r) => {
            return 0
                | (if r.ended { FLICRS_ENDED } else { 0 })
                | (if r.palette_updated { FLICRS_PALETTE_UPDATED } else { 0 });
        },
        Err(e) => {
            logerror!(e);
            return 1;
        },
    }
}

/*--------------------------------------------------------------*/
/* Raster                                                       */
/*--------------------------------------------------------------*/

/// Allocate a new raster over caller-owned buffers.
///
/// Returns null if the buffer cannot hold `h` rows of `stride` bytes,
/// or the palette is shorter than 256 colours.
#[no_mangle]
pub extern "C" fn flicrs_raster_mut_alloc(
        w: size_t, h: size_t, stride: size_t,
        buf: *mut u8, buf_len: size_t,
        pal: *mut u8, pal_len: size_t)
        -> *mut CRasterMut {
    if buf.is_null() || pal.is_null() {
        logerror!("bad input parameters");
        return ptr::null_mut();
    }

    if !RasterMut::fits(w, h, stride, buf_len, pal_len) {
        logerror!("raster dimensions do not fit the buffers");
        return ptr::null_mut();
    }

    let buf_slice = unsafe{ slice::from_raw_parts_mut(buf, buf_len) };
    let pal_slice = unsafe{ slice::from_raw_parts_mut(pal, pal_len) };
    let raster = RasterMut::with_stride(w, h, stride, buf_slice, pal_slice);
    let rptr = Box::into_raw(Box::new(raster));
    let cptr: *mut CRasterMut = unsafe{ mem::transmute(rptr) };
    cptr
}

/// Free a previously allocated raster.
#[no_mangle]
pub extern "C" fn flicrs_raster_mut_free(raster: *mut CRasterMut) {
    if raster.is_null() {
        return;
    }

    let rptr: *mut RasterMut = unsafe{ mem::transmute(raster) };
    let _raster = unsafe{ Box::from_raw(rptr) };
}
