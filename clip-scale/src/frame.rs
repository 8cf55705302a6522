// SPDX-License-Identifier: MIT
// Planar frame storage. Samples are native-endian; stride is in bytes.

use crate::cpu::ScaleError;
use crate::format::{SampleType, VideoFormat};

/// One plane of samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    pub width: u32,
    pub height: u32,
    /// Bytes per row, at least `width * bytes_per_sample`.
    pub stride: usize,
    pub data: Vec<u8>,
}

impl Plane {
    /// Tightly packed plane filled with zero bytes.
    pub fn zeroed(width: u32, height: u32, bytes_per_sample: usize) -> Self {
        let stride = width as usize * bytes_per_sample;
        Self {
            width,
            height,
            stride,
            data: vec![0u8; stride * height as usize],
        }
    }

    /// Bytes of row `y` without stride padding.
    pub fn row(&self, y: u32, bytes_per_sample: usize) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * bytes_per_sample]
    }

    pub fn sample_u8(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.stride + x as usize]
    }

    pub fn sample_u16(&self, x: u32, y: u32) -> u16 {
        let i = y as usize * self.stride + x as usize * 2;
        u16::from_ne_bytes([self.data[i], self.data[i + 1]])
    }

    pub fn sample_f32(&self, x: u32, y: u32) -> f32 {
        let i = y as usize * self.stride + x as usize * 4;
        f32::from_ne_bytes([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Tightly packed copy of the plane contents.
    pub fn to_packed(&self, bytes_per_sample: usize) -> Vec<u8> {
        let row_bytes = self.width as usize * bytes_per_sample;
        if self.stride == row_bytes {
            return self.data[..row_bytes * self.height as usize].to_vec();
        }
        let mut out = Vec::with_capacity(row_bytes * self.height as usize);
        for y in 0..self.height {
            out.extend_from_slice(self.row(y, bytes_per_sample));
        }
        out
    }
}

/// A single planar video frame.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoFrame {
    pub format: VideoFormat,
    pub width: u32,
    pub height: u32,
    pub planes: Vec<Plane>,
}

impl VideoFrame {
    /// Frame whose plane `i` holds `values[i]` everywhere (integer samples are
    /// truncated to the format's bit depth, float samples use the value as is).
    pub fn new_filled(
        format: VideoFormat,
        width: u32,
        height: u32,
        values: &[f64],
    ) -> Result<Self, ScaleError> {
        if width == 0 || height == 0 {
            return Err(ScaleError::InvalidDimensions(format!(
                "frame dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        let bps = format.bytes_per_sample();
        let mut planes = Vec::with_capacity(format.num_planes());
        for p in 0..format.num_planes() {
            let (pw, ph) = format.plane_dimensions(p, width, height);
            let mut plane = Plane::zeroed(pw, ph, bps);
            let value = values.get(p).copied().unwrap_or(0.0);
            let sample = encode_sample(&format, value);
            for chunk in plane.data.chunks_exact_mut(bps) {
                chunk.copy_from_slice(&sample[..bps]);
            }
            planes.push(plane);
        }
        Ok(Self {
            format,
            width,
            height,
            planes,
        })
    }

    /// Frame of neutral grey: mid-range luma/RGB and centred chroma.
    pub fn new_grey(format: VideoFormat, width: u32, height: u32) -> Result<Self, ScaleError> {
        let mid = match format.sample_type {
            SampleType::Integer => f64::from(1u32 << (format.bits_per_sample - 1)),
            SampleType::Float => 0.5,
        };
        let chroma = match format.sample_type {
            SampleType::Integer => mid,
            SampleType::Float => 0.0,
        };
        let values = match format.color_family {
            crate::format::ColorFamily::Yuv => [mid, chroma, chroma],
            _ => [mid, mid, mid],
        };
        Self::new_filled(format, width, height, &values)
    }

    /// Assemble a frame from existing planes, checking count and sizes.
    pub fn from_planes(
        format: VideoFormat,
        width: u32,
        height: u32,
        planes: Vec<Plane>,
    ) -> Result<Self, ScaleError> {
        if planes.len() != format.num_planes() {
            return Err(ScaleError::InvalidFormat(format!(
                "{} needs {} planes, got {}",
                format,
                format.num_planes(),
                planes.len()
            )));
        }
        let bps = format.bytes_per_sample();
        for (p, plane) in planes.iter().enumerate() {
            let (pw, ph) = format.plane_dimensions(p, width, height);
            if plane.width != pw || plane.height != ph {
                return Err(ScaleError::InvalidDimensions(format!(
                    "plane {} of a {}x{} {} frame must be {}x{}, got {}x{}",
                    p, width, height, format, pw, ph, plane.width, plane.height
                )));
            }
            if plane.stride < pw as usize * bps || plane.data.len() < plane.stride * ph as usize {
                return Err(ScaleError::BufferTooSmall);
            }
        }
        Ok(Self {
            format,
            width,
            height,
            planes,
        })
    }
}

fn encode_sample(format: &VideoFormat, value: f64) -> [u8; 4] {
    match (format.sample_type, format.bytes_per_sample()) {
        (SampleType::Float, _) => (value as f32).to_ne_bytes(),
        (SampleType::Integer, 1) => [value.clamp(0.0, 255.0) as u8, 0, 0, 0],
        (SampleType::Integer, _) => {
            let max = f64::from(format.max_value().unwrap_or(u32::from(u16::MAX)));
            let v = (value.clamp(0.0, max) as u16).to_ne_bytes();
            [v[0], v[1], 0, 0]
        }
    }
}
