//! FLIC to PPM.
//!
//! Decodes every frame of a FLIC, including the ring frame, and
//! writes each one out as a binary PPM image.

extern crate env_logger;
extern crate flicread;
#[macro_use]
extern crate log;

use std::env;
use std::fs::File;
use std::io::{BufWriter,Write};
use std::path::{Path,PathBuf};
use std::process;
use flicread::{DecoderOptions,FlicFile,FlicResult,RasterMut,ReadMode};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info")).init();
    if args.len() < 2 {
        usage();
        return;
    }

    let strict = args.len() > 2 && args[2] == "--strict";
    let opts = DecoderOptions::default().read_mode(
            if strict { ReadMode::Strict } else { ReadMode::Lenient });

    if let Err(e) = convert(Path::new(&args[0]), Path::new(&args[1]), opts) {
        error!("{} - {}", &args[0], e);
        process::exit(1);
    }
}

fn usage() {
    println!("flic2ppm - dump the frames of a FLIC as PPM images");
    println!("");
    println!("Usage: flic2ppm <input.flc> <output dir> [--strict]");
}

fn convert(filename: &Path, outdir: &Path, opts: DecoderOptions)
        -> FlicResult<()> {
    let mut flic = FlicFile::open_with_options(filename, opts)?;
    let w = flic.width() as usize;
    let h = flic.height() as usize;
    let mut buf = vec![0; w * h];
    let mut pal = vec![0; 3 * 256];

    info!("{}: {}x{}, {} frames, {} msec per frame",
            filename.display(), w, h, flic.frame_count(), flic.speed_msec());

    // Decode the ring frame too.
    let count = flic.frame_count() as usize + 1;
    for frame in 0..count {
        let res = flic.read_next_frame(
                &mut RasterMut::new(w, h, &mut buf, &mut pal))?;
        if res.palette_updated {
            debug!("frame {} - palette updated", frame);
        }

        let mut path = PathBuf::from(outdir);
        path.push(format!("frame{:04}.ppm", frame));
        write_ppm(&path, w, h, &buf, &pal)?;
    }

    Ok(())
}

fn write_ppm(path: &Path, w: usize, h: usize, buf: &[u8], pal: &[u8])
        -> FlicResult<()> {
    let mut out = BufWriter::new(File::create(path)?);

    write!(out, "P6\n{} {}\n255\n", w, h)?;
    for &c in buf.iter() {
        let c = c as usize;
        out.write_all(&pal[(3 * c)..(3 * c + 3)])?;
    }

    out.flush()?;
    Ok(())
}
