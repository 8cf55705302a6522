// SPDX-License-Identifier: MIT
// CPU plane scaler built on fast_image_resize (SIMD-accelerated).
// One plane in, one tightly packed plane out; strided input goes through staging.

use fast_image_resize as fir;
use fir::images::{Image, ImageRef};
use fir::{PixelType, ResizeOptions, Resizer};

use crate::format::{SampleType, VideoFormat};
use crate::frame::Plane;
use crate::kernels::Kernel;

#[derive(Debug)]
pub enum ScaleError {
    BufferTooSmall,
    InvalidDimensions(String),
    IncompatibleSubsampling {
        axis: &'static str,
        value: u32,
        modulus: u32,
    },
    InvalidFormat(String),
    FrameOutOfRange {
        index: usize,
        len: usize,
    },
    MismatchedFrames(String),
    Filter(String),
    Fir(fir::ResizeError),
    ImageBuf(fir::ImageBufferError),
}

impl From<fir::ResizeError> for ScaleError { fn from(e: fir::ResizeError) -> Self { Self::Fir(e) } }
impl From<fir::ImageBufferError> for ScaleError { fn from(e: fir::ImageBufferError) -> Self { Self::ImageBuf(e) } }

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::BufferTooSmall => write!(f, "Plane buffer too small"),
            ScaleError::InvalidDimensions(reason) => write!(f, "Invalid dimensions: {}", reason),
            ScaleError::IncompatibleSubsampling { axis, value, modulus } => write!(
                f,
                "{} {} is not divisible by the subsampling modulus {}",
                axis, value, modulus
            ),
            ScaleError::InvalidFormat(reason) => write!(f, "Invalid format: {}", reason),
            ScaleError::FrameOutOfRange { index, len } => {
                write!(f, "Frame {} requested from a clip of {} frames", index, len)
            }
            ScaleError::MismatchedFrames(reason) => write!(f, "Mismatched frames: {}", reason),
            ScaleError::Filter(reason) => write!(f, "Filter error: {}", reason),
            ScaleError::Fir(e) => write!(f, "Fast image resize error: {}", e),
            ScaleError::ImageBuf(e) => write!(f, "Image buffer error: {}", e),
        }
    }
}

impl std::error::Error for ScaleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaleError::Fir(e) => Some(e),
            ScaleError::ImageBuf(e) => Some(e),
            _ => None,
        }
    }
}

/// Pre-allocated scratch to compact strided input to tightly packed rows (only if needed).
pub struct Staging {
    pub(crate) buf: Vec<u8>,
}
impl Staging {
    pub fn with_capacity(cap: usize) -> Self { Self { buf: Vec::with_capacity(cap) } }
    pub fn ensure_len(&mut self, len: usize) { if self.buf.len() < len { self.buf.resize(len, 0); } }
    pub fn as_slice(&self) -> &[u8] { &self.buf }
}

/// Resample one plane to `dst_w` x `dst_h` with `kernel`.
///
/// The returned plane is tightly packed. Integer formats narrower than 16 bits
/// are clamped back into range, since ringing kernels (bicubic, lanczos,
/// splines) overshoot.
pub fn resize_plane(
    resizer: &mut Resizer,
    plane: &Plane,
    format: &VideoFormat,
    dst_w: u32,
    dst_h: u32,
    kernel: Kernel,
    staging: &mut Staging,
) -> Result<Plane, ScaleError> {
    if dst_w == 0 || dst_h == 0 {
        return Err(ScaleError::InvalidDimensions(format!(
            "plane target must be non-zero, got {}x{}",
            dst_w, dst_h
        )));
    }
    let bps = format.bytes_per_sample();
    let pixel_type = pixel_type_for(format)?;
    let tight_row_bytes = plane.width as usize * bps;
    let rows = plane.height as usize;
    if plane.stride < tight_row_bytes || plane.data.len() < plane.stride * rows.saturating_sub(1) + tight_row_bytes {
        return Err(ScaleError::BufferTooSmall);
    }

    // --- Build source view (tightly packed, borrowed) ---
    let packed_len = tight_row_bytes * rows;
    let packed: &[u8] = if plane.stride == tight_row_bytes {
        &plane.data[..packed_len]
    } else {
        staging.ensure_len(packed_len);
        compact_rows(&plane.data, plane.stride, staging.buf.as_mut_slice(), tight_row_bytes, rows);
        &staging.buf[..packed_len]
    };
    let src = ImageRef::new(plane.width, plane.height, packed, pixel_type)?;

    // --- Resize ---
    let mut dst = Image::new(dst_w, dst_h, pixel_type);
    let opts = ResizeOptions::new().resize_alg(kernel.resize_alg()?);
    resizer.resize(&src, &mut dst, &opts)?;

    let mut data = dst.into_vec();
    if let (SampleType::Integer, 2, Some(max)) = (format.sample_type, bps, format.max_value()) {
        if max < u32::from(u16::MAX) {
            clamp_u16(&mut data, max as u16);
        }
    }

    Ok(Plane {
        width: dst_w,
        height: dst_h,
        stride: dst_w as usize * bps,
        data,
    })
}

fn pixel_type_for(format: &VideoFormat) -> Result<PixelType, ScaleError> {
    match (format.sample_type, format.bytes_per_sample()) {
        (SampleType::Integer, 1) => Ok(PixelType::U8),
        (SampleType::Integer, 2) => Ok(PixelType::U16),
        (SampleType::Float, 4) => Ok(PixelType::F32),
        _ => Err(ScaleError::InvalidFormat(format!("{} has no resampler pixel type", format))),
    }
}

#[inline]
fn clamp_u16(data: &mut [u8], max: u16) {
    for chunk in data.chunks_exact_mut(2) {
        let v = u16::from_ne_bytes([chunk[0], chunk[1]]);
        if v > max {
            chunk.copy_from_slice(&max.to_ne_bytes());
        }
    }
}

#[inline]
fn compact_rows(src: &[u8], src_pitch: usize, dst: &mut [u8], row_bytes: usize, rows: usize) {
    for r in 0..rows {
        let s = &src[r * src_pitch .. r * src_pitch + row_bytes];
        let d = &mut dst[r * row_bytes .. (r + 1) * row_bytes];
        d.copy_from_slice(s);
    }
}
