//! YUV4MPEG2 clip I/O.
//!
//! Y4M is an uncompressed container: a text header followed by raw planar
//! frames. Samples wider than 8 bits are little-endian on disk and are
//! converted to native-endian planes on read (and back on write).

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use clip_scale::format::{
    GRAY16, GRAY8, YUV420P10, YUV420P12, YUV420P8, YUV422P10, YUV422P12, YUV422P8, YUV444P10,
    YUV444P12, YUV444P8,
};
use clip_scale::{Clip, ColorFamily, Plane, SampleType, VideoFormat, VideoFrame};
use log::{debug, info};

use crate::error::{ResizeError, ResizeResult};

/// Read a whole Y4M file into an in-memory clip.
pub fn read_y4m(path: &Path) -> ResizeResult<Clip> {
    let file = File::open(path)
        .map_err(|e| ResizeError::io("open", Some(path.display().to_string()), e))?;
    let clip = read_y4m_from(BufReader::new(file))
        .map_err(|e| e.with_context(format!("reading {}", path.display())))?;
    info!(
        "read {} frames of {}x{} from {}",
        clip.num_frames(),
        clip.width(),
        clip.height(),
        path.display()
    );
    Ok(clip)
}

/// Read a Y4M stream into an in-memory clip.
pub fn read_y4m_from<R: Read>(reader: R) -> ResizeResult<Clip> {
    let mut decoder = y4m::decode(reader)?;
    let width = u32::try_from(decoder.get_width())
        .map_err(|_| ResizeError::container("frame width out of range"))?;
    let height = u32::try_from(decoder.get_height())
        .map_err(|_| ResizeError::container("frame height out of range"))?;
    let colorspace = decoder.get_colorspace();
    let format = colorspace_to_format(colorspace)?;
    let rate = decoder.get_framerate();
    debug!("y4m header: {}x{} {:?} -> {}", width, height, colorspace, format);

    let mut frames = Vec::new();
    loop {
        let frame = match decoder.read_frame() {
            Ok(frame) => frame,
            Err(y4m::Error::EOF) => break,
            Err(e) => return Err(e.into()),
        };
        let sources = [frame.get_y_plane(), frame.get_u_plane(), frame.get_v_plane()];
        let mut planes = Vec::with_capacity(format.num_planes());
        for (p, bytes) in sources.iter().take(format.num_planes()).enumerate() {
            let (pw, ph) = format.plane_dimensions(p, width, height);
            planes.push(plane_from_le(bytes, pw, ph, format.bytes_per_sample())?);
        }
        frames.push(VideoFrame::from_planes(format, width, height, planes)?);
    }

    if frames.is_empty() {
        return Err(ResizeError::container("stream contains no frames"));
    }
    Ok(Clip::from_frames(frames, (rate.num as u64, rate.den as u64))?)
}

/// Write every frame of `clip` to a Y4M file. Returns the number of frames written.
pub fn write_y4m(clip: &Clip, path: &Path) -> ResizeResult<usize> {
    let file = File::create(path)
        .map_err(|e| ResizeError::io("create", Some(path.display().to_string()), e))?;
    let mut writer = BufWriter::new(file);
    let written = write_y4m_to(clip, &mut writer)
        .map_err(|e| e.with_context(format!("writing {}", path.display())))?;
    writer
        .flush()
        .map_err(|e| ResizeError::io("flush", Some(path.display().to_string()), e))?;
    info!(
        "wrote {} frames of {}x{} to {}",
        written,
        clip.width(),
        clip.height(),
        path.display()
    );
    Ok(written)
}

/// Write every frame of `clip` to a Y4M stream.
pub fn write_y4m_to<W: Write>(clip: &Clip, writer: W) -> ResizeResult<usize> {
    let format = clip.format().ok_or_else(|| {
        ResizeError::container("variable-format clips cannot be written as Y4M")
    })?;
    let colorspace = format_to_colorspace(&format)?;
    let (num, den) = clip.fps();
    let mut encoder = y4m::encode(
        clip.width() as usize,
        clip.height() as usize,
        y4m::Ratio::new(num as usize, den as usize),
    )
    .with_colorspace(colorspace)
    .write_header(writer)?;

    let bps = format.bytes_per_sample();
    let mut written = 0;
    for frame in clip.frames() {
        let frame = frame?;
        let mut bytes: Vec<Vec<u8>> = frame
            .planes
            .iter()
            .map(|plane| plane_to_le(plane, bps))
            .collect();
        // Mono Y4M still carries (empty) chroma slots.
        bytes.resize(3, Vec::new());
        encoder.write_frame(&y4m::Frame::new([&bytes[0], &bytes[1], &bytes[2]], None))?;
        written += 1;
    }
    Ok(written)
}

/// Format carried by a Y4M colorspace. Chroma siting variants of 4:2:0 map to
/// plain 4:2:0.
pub fn colorspace_to_format(colorspace: y4m::Colorspace) -> ResizeResult<VideoFormat> {
    let format = match colorspace {
        y4m::Colorspace::Cmono => GRAY8,
        y4m::Colorspace::Cmono12 => VideoFormat {
            bits_per_sample: 12,
            ..GRAY16
        },
        y4m::Colorspace::C420
        | y4m::Colorspace::C420jpeg
        | y4m::Colorspace::C420paldv
        | y4m::Colorspace::C420mpeg2 => YUV420P8,
        y4m::Colorspace::C420p10 => YUV420P10,
        y4m::Colorspace::C420p12 => YUV420P12,
        y4m::Colorspace::C422 => YUV422P8,
        y4m::Colorspace::C422p10 => YUV422P10,
        y4m::Colorspace::C422p12 => YUV422P12,
        y4m::Colorspace::C444 => YUV444P8,
        y4m::Colorspace::C444p10 => YUV444P10,
        y4m::Colorspace::C444p12 => YUV444P12,
        other => {
            return Err(ResizeError::container(format!("unsupported colorspace {:?}", other)));
        }
    };
    Ok(format)
}

/// Y4M colorspace for a format, if Y4M can carry it.
pub fn format_to_colorspace(format: &VideoFormat) -> ResizeResult<y4m::Colorspace> {
    let unsupported = || {
        ResizeError::container(format!("{} cannot be stored in Y4M", format))
            .with_recovery_suggestion("use an 8, 10 or 12-bit GRAY or YUV 4:2:0/4:2:2/4:4:4 format")
    };
    if format.sample_type != SampleType::Integer {
        return Err(unsupported());
    }
    let colorspace = match (format.color_family, format.subsampling_w, format.subsampling_h, format.bits_per_sample) {
        (ColorFamily::Gray, 0, 0, 8) => y4m::Colorspace::Cmono,
        (ColorFamily::Gray, 0, 0, 12) => y4m::Colorspace::Cmono12,
        (ColorFamily::Yuv, 1, 1, 8) => y4m::Colorspace::C420,
        (ColorFamily::Yuv, 1, 1, 10) => y4m::Colorspace::C420p10,
        (ColorFamily::Yuv, 1, 1, 12) => y4m::Colorspace::C420p12,
        (ColorFamily::Yuv, 1, 0, 8) => y4m::Colorspace::C422,
        (ColorFamily::Yuv, 1, 0, 10) => y4m::Colorspace::C422p10,
        (ColorFamily::Yuv, 1, 0, 12) => y4m::Colorspace::C422p12,
        (ColorFamily::Yuv, 0, 0, 8) => y4m::Colorspace::C444,
        (ColorFamily::Yuv, 0, 0, 10) => y4m::Colorspace::C444p10,
        (ColorFamily::Yuv, 0, 0, 12) => y4m::Colorspace::C444p12,
        _ => return Err(unsupported()),
    };
    Ok(colorspace)
}

fn plane_from_le(bytes: &[u8], width: u32, height: u32, bps: usize) -> ResizeResult<Plane> {
    let len = width as usize * height as usize * bps;
    if bytes.len() < len {
        return Err(ResizeError::container(format!(
            "plane holds {} bytes, expected {}",
            bytes.len(),
            len
        )));
    }
    let mut data = bytes[..len].to_vec();
    if bps == 2 {
        for chunk in data.chunks_exact_mut(2) {
            let v = u16::from_le_bytes([chunk[0], chunk[1]]);
            chunk.copy_from_slice(&v.to_ne_bytes());
        }
    }
    Ok(Plane {
        width,
        height,
        stride: width as usize * bps,
        data,
    })
}

fn plane_to_le(plane: &Plane, bps: usize) -> Vec<u8> {
    let mut data = plane.to_packed(bps);
    if bps == 2 {
        for chunk in data.chunks_exact_mut(2) {
            let v = u16::from_ne_bytes([chunk[0], chunk[1]]);
            chunk.copy_from_slice(&v.to_le_bytes());
        }
    }
    data
}
