// SPDX-License-Identifier: MIT
//! # Pixel Formats
//!
//! Planar pixel-format descriptors. A format fixes the colour family, the
//! sample representation and, for YUV, the chroma subsampling factors that
//! constrain valid frame dimensions.
//!
//! Subsampling factors are log2 values: `subsampling_w == 1` means chroma
//! planes are half as wide as luma, so frame widths must be multiples of
//! `1 << 1` when resized.

use std::fmt;

use crate::cpu::ScaleError;

/// Largest supported log2 subsampling factor on either axis.
pub const MAX_SUBSAMPLING: u32 = 4;

/// Colour family of a planar format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    Gray,
    Rgb,
    Yuv,
}

/// How samples are stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleType {
    Integer,
    Float,
}

/// Planar pixel format descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VideoFormat {
    pub color_family: ColorFamily,
    pub sample_type: SampleType,
    pub bits_per_sample: u32,
    /// log2 horizontal chroma subsampling
    pub subsampling_w: u32,
    /// log2 vertical chroma subsampling
    pub subsampling_h: u32,
}

impl VideoFormat {
    /// Build and validate a format.
    ///
    /// Integer formats carry 8 to 16 bits per sample, float formats exactly
    /// 32. Only YUV may be subsampled.
    pub fn new(
        color_family: ColorFamily,
        sample_type: SampleType,
        bits_per_sample: u32,
        subsampling_w: u32,
        subsampling_h: u32,
    ) -> Result<Self, ScaleError> {
        match sample_type {
            SampleType::Integer if !(8..=16).contains(&bits_per_sample) => {
                return Err(ScaleError::InvalidFormat(format!(
                    "integer formats need 8-16 bits per sample, got {}",
                    bits_per_sample
                )));
            }
            SampleType::Float if bits_per_sample != 32 => {
                return Err(ScaleError::InvalidFormat(format!(
                    "float formats need 32 bits per sample, got {}",
                    bits_per_sample
                )));
            }
            _ => {}
        }
        if subsampling_w > MAX_SUBSAMPLING || subsampling_h > MAX_SUBSAMPLING {
            return Err(ScaleError::InvalidFormat(format!(
                "subsampling factors must be at most {}, got {}x{}",
                MAX_SUBSAMPLING, subsampling_w, subsampling_h
            )));
        }
        if color_family != ColorFamily::Yuv && (subsampling_w != 0 || subsampling_h != 0) {
            return Err(ScaleError::InvalidFormat(format!(
                "{:?} formats cannot be subsampled",
                color_family
            )));
        }
        Ok(Self {
            color_family,
            sample_type,
            bits_per_sample,
            subsampling_w,
            subsampling_h,
        })
    }

    /// Conventional name, e.g. `YUV420P8`, `GRAY16`, `RGBS`.
    pub fn name(&self) -> String {
        let depth = match self.sample_type {
            SampleType::Float => "S".to_string(),
            SampleType::Integer => self.bits_per_sample.to_string(),
        };
        match self.color_family {
            ColorFamily::Gray => format!("GRAY{}", depth),
            ColorFamily::Rgb => match (self.sample_type, self.bits_per_sample) {
                (SampleType::Float, _) => "RGBS".to_string(),
                (SampleType::Integer, bits) => format!("RGB{}", bits * 3),
            },
            ColorFamily::Yuv => {
                let layout = match (self.subsampling_w, self.subsampling_h) {
                    (0, 0) => "444".to_string(),
                    (1, 0) => "422".to_string(),
                    (1, 1) => "420".to_string(),
                    (2, 0) => "411".to_string(),
                    (2, 2) => "410".to_string(),
                    (0, 1) => "440".to_string(),
                    (w, h) => format!("SS{}{}", w, h),
                };
                let suffix = match self.sample_type {
                    SampleType::Float => "PS".to_string(),
                    SampleType::Integer => format!("P{}", self.bits_per_sample),
                };
                format!("YUV{}{}", layout, suffix)
            }
        }
    }

    pub fn num_planes(&self) -> usize {
        match self.color_family {
            ColorFamily::Gray => 1,
            ColorFamily::Rgb | ColorFamily::Yuv => 3,
        }
    }

    pub fn bytes_per_sample(&self) -> usize {
        self.bits_per_sample.div_ceil(8) as usize
    }

    /// Required alignment of frame dimensions, `(1 << subsampling_w, 1 << subsampling_h)`.
    pub fn dimension_modulus(&self) -> (u32, u32) {
        (1 << self.subsampling_w, 1 << self.subsampling_h)
    }

    /// Dimensions of plane `plane` for a frame of `width` x `height`.
    /// Chroma planes round up so odd-sized sources keep their edge samples.
    pub fn plane_dimensions(&self, plane: usize, width: u32, height: u32) -> (u32, u32) {
        if plane == 0 || self.color_family != ColorFamily::Yuv {
            return (width, height);
        }
        let (mw, mh) = self.dimension_modulus();
        (width.div_ceil(mw), height.div_ceil(mh))
    }

    /// Largest legal sample value for integer formats.
    pub fn max_value(&self) -> Option<u32> {
        match self.sample_type {
            SampleType::Integer => Some((1u32 << self.bits_per_sample) - 1),
            SampleType::Float => None,
        }
    }

    /// Whether either chroma axis is subsampled.
    pub fn is_subsampled(&self) -> bool {
        self.subsampling_w > 0 || self.subsampling_h > 0
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

const fn int_format(color_family: ColorFamily, bits: u32, ssw: u32, ssh: u32) -> VideoFormat {
    VideoFormat {
        color_family,
        sample_type: SampleType::Integer,
        bits_per_sample: bits,
        subsampling_w: ssw,
        subsampling_h: ssh,
    }
}

const fn float_format(color_family: ColorFamily, ssw: u32, ssh: u32) -> VideoFormat {
    VideoFormat {
        color_family,
        sample_type: SampleType::Float,
        bits_per_sample: 32,
        subsampling_w: ssw,
        subsampling_h: ssh,
    }
}

pub const GRAY8: VideoFormat = int_format(ColorFamily::Gray, 8, 0, 0);
pub const GRAY16: VideoFormat = int_format(ColorFamily::Gray, 16, 0, 0);
pub const GRAYS: VideoFormat = float_format(ColorFamily::Gray, 0, 0);

pub const YUV410P8: VideoFormat = int_format(ColorFamily::Yuv, 8, 2, 2);
pub const YUV411P8: VideoFormat = int_format(ColorFamily::Yuv, 8, 2, 0);
pub const YUV420P8: VideoFormat = int_format(ColorFamily::Yuv, 8, 1, 1);
pub const YUV422P8: VideoFormat = int_format(ColorFamily::Yuv, 8, 1, 0);
pub const YUV440P8: VideoFormat = int_format(ColorFamily::Yuv, 8, 0, 1);
pub const YUV444P8: VideoFormat = int_format(ColorFamily::Yuv, 8, 0, 0);
pub const YUV420P10: VideoFormat = int_format(ColorFamily::Yuv, 10, 1, 1);
pub const YUV422P10: VideoFormat = int_format(ColorFamily::Yuv, 10, 1, 0);
pub const YUV444P10: VideoFormat = int_format(ColorFamily::Yuv, 10, 0, 0);
pub const YUV420P12: VideoFormat = int_format(ColorFamily::Yuv, 12, 1, 1);
pub const YUV422P12: VideoFormat = int_format(ColorFamily::Yuv, 12, 1, 0);
pub const YUV444P12: VideoFormat = int_format(ColorFamily::Yuv, 12, 0, 0);
pub const YUV420P16: VideoFormat = int_format(ColorFamily::Yuv, 16, 1, 1);
pub const YUV444PS: VideoFormat = float_format(ColorFamily::Yuv, 0, 0);

pub const RGB24: VideoFormat = int_format(ColorFamily::Rgb, 8, 0, 0);
pub const RGB48: VideoFormat = int_format(ColorFamily::Rgb, 16, 0, 0);
pub const RGBS: VideoFormat = float_format(ColorFamily::Rgb, 0, 0);
