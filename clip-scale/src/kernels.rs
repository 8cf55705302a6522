// SPDX-License-Identifier: MIT
//! # Resampling Kernels
//!
//! The seven kernels the resize filter offers and their mapping onto
//! `fast_image_resize` algorithms.
//!
//! | Kernel   | Algorithm                                  | Support |
//! |----------|--------------------------------------------|---------|
//! | Point    | nearest neighbour                          | -       |
//! | Bilinear | triangle filter                            | 1       |
//! | Bicubic  | Catmull-Rom (b = 0, c = 1/2)               | 2       |
//! | Lanczos  | Lanczos, 3 taps                            | 3       |
//! | Spline16 | piecewise cubic spline, 4 sample points    | 2       |
//! | Spline36 | piecewise cubic spline, 6 sample points    | 3       |
//! | Spline64 | piecewise cubic spline, 8 sample points    | 4       |
//!
//! The spline kernels are not built into `fast_image_resize`, so they are
//! registered as custom convolution filters.

use std::fmt;

use fast_image_resize::{Filter, FilterType, ResizeAlg};

use crate::cpu::ScaleError;

/// A resampling kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kernel {
    Point,
    Bilinear,
    Bicubic,
    Lanczos,
    Spline16,
    Spline36,
    Spline64,
}

impl Kernel {
    pub const ALL: [Kernel; 7] = [
        Kernel::Point,
        Kernel::Bilinear,
        Kernel::Bicubic,
        Kernel::Lanczos,
        Kernel::Spline16,
        Kernel::Spline36,
        Kernel::Spline64,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Kernel::Point => "point",
            Kernel::Bilinear => "bilinear",
            Kernel::Bicubic => "bicubic",
            Kernel::Lanczos => "lanczos",
            Kernel::Spline16 => "spline16",
            Kernel::Spline36 => "spline36",
            Kernel::Spline64 => "spline64",
        }
    }

    /// Algorithm handed to the resizer for this kernel.
    pub fn resize_alg(self) -> Result<ResizeAlg, ScaleError> {
        let filter = match self {
            Kernel::Point => return Ok(ResizeAlg::Nearest),
            Kernel::Bilinear => FilterType::Bilinear,
            Kernel::Bicubic => FilterType::CatmullRom,
            Kernel::Lanczos => FilterType::Lanczos3,
            Kernel::Spline16 => custom_filter("spline16", spline16, 2.0)?,
            Kernel::Spline36 => custom_filter("spline36", spline36, 3.0)?,
            Kernel::Spline64 => custom_filter("spline64", spline64, 4.0)?,
        };
        Ok(ResizeAlg::Convolution(filter))
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn custom_filter(name: &'static str, kernel: fn(f64) -> f64, support: f64) -> Result<FilterType, ScaleError> {
    Filter::new(name, kernel, support)
        .map(FilterType::Custom)
        .map_err(|_| ScaleError::Filter(format!("cannot build {} filter with support {}", name, support)))
}

// Spline coefficients: each interval [i, i+1) is a cubic in t = |x| - i.

pub(crate) fn spline16(x: f64) -> f64 {
    let x = x.abs();
    if x < 1.0 {
        ((x - 9.0 / 5.0) * x - 1.0 / 5.0) * x + 1.0
    } else if x < 2.0 {
        let t = x - 1.0;
        ((-1.0 / 3.0 * t + 4.0 / 5.0) * t - 7.0 / 15.0) * t
    } else {
        0.0
    }
}

pub(crate) fn spline36(x: f64) -> f64 {
    let x = x.abs();
    if x < 1.0 {
        ((13.0 / 11.0 * x - 453.0 / 209.0) * x - 3.0 / 209.0) * x + 1.0
    } else if x < 2.0 {
        let t = x - 1.0;
        ((-6.0 / 11.0 * t + 270.0 / 209.0) * t - 156.0 / 209.0) * t
    } else if x < 3.0 {
        let t = x - 2.0;
        ((1.0 / 11.0 * t - 45.0 / 209.0) * t + 26.0 / 209.0) * t
    } else {
        0.0
    }
}

pub(crate) fn spline64(x: f64) -> f64 {
    let x = x.abs();
    if x < 1.0 {
        ((49.0 / 41.0 * x - 6387.0 / 2911.0) * x - 3.0 / 2911.0) * x + 1.0
    } else if x < 2.0 {
        let t = x - 1.0;
        ((-24.0 / 41.0 * t + 4032.0 / 2911.0) * t - 2328.0 / 2911.0) * t
    } else if x < 3.0 {
        let t = x - 2.0;
        ((6.0 / 41.0 * t - 1008.0 / 2911.0) * t + 582.0 / 2911.0) * t
    } else if x < 4.0 {
        let t = x - 3.0;
        ((-1.0 / 41.0 * t + 168.0 / 2911.0) * t - 97.0 / 2911.0) * t
    } else {
        0.0
    }
}
