//! # Scale and Pixel Helpers
//!
//! The two entry points of the crate:
//!
//! - [`scale`] multiplies the clip's dimensions by a factor, aligns the result
//!   to the clip's chroma subsampling and resizes;
//! - [`pixel`] resizes to explicit dimensions.
//!
//! ## Alignment
//!
//! For a subsampled axis with log2 factor `s`, the provisional dimension `d`
//! becomes `max(2^s, d - d % 2^s)`: rounded down to a multiple of the chroma
//! block, never below one block. Axes without subsampling, and clips without a
//! constant format, keep the provisional value.

use clip_scale::{Clip, VideoFormat};
use log::debug;

use crate::error::{ResizeError, ResizeResult};
use crate::kernel::pick_resizer;

/// Factor used when the caller has no preference.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Kernel used when the caller has no preference.
pub const DEFAULT_KERNEL: &str = "bilinear";

/// Resize `clip` by `factor` with the named kernel.
///
/// Fails before any kernel lookup or resize if `factor` is not strictly
/// positive and finite.
///
/// ```rust
/// use clip_resize::{scale, Clip};
/// use clip_scale::format::YUV420P8;
///
/// let clip = Clip::blank(YUV420P8, 101, 57, 1, (25, 1))?;
/// let half = scale(&clip, 0.5, "spline36")?;
/// assert_eq!((half.width(), half.height()), (50, 28));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn scale(clip: &Clip, factor: f64, kernel: &str) -> ResizeResult<Clip> {
    let (width, height) =
        scaled_dimensions(clip.width(), clip.height(), clip.format().as_ref(), factor)?;
    let resizer = pick_resizer(kernel)?;
    debug!(
        "scale {}x{} by {} -> {}x{} ({})",
        clip.width(),
        clip.height(),
        factor,
        width,
        height,
        resizer.name()
    );
    resizer
        .apply(clip, Some(width), Some(height))
        .map_err(|e| e.with_operation("scale"))
}

/// Resize `clip` to explicit dimensions with the named kernel.
///
/// Omitted dimensions keep the source size. Dimension validity (non-zero,
/// subsampling-compatible) is checked by the resize filter.
pub fn pixel(
    clip: &Clip,
    width: Option<u32>,
    height: Option<u32>,
    kernel: &str,
) -> ResizeResult<Clip> {
    let resizer = pick_resizer(kernel)?;
    debug!(
        "pixel {}x{} -> {:?}x{:?} ({})",
        clip.width(),
        clip.height(),
        width,
        height,
        resizer.name()
    );
    resizer
        .apply(clip, width, height)
        .map_err(|e| e.with_operation("pixel"))
}

/// Target dimensions for [`scale`].
pub fn scaled_dimensions(
    width: u32,
    height: u32,
    format: Option<&VideoFormat>,
    factor: f64,
) -> ResizeResult<(u32, u32)> {
    if !(factor.is_finite() && factor > 0.0) {
        return Err(ResizeError::invalid_scale(factor).with_operation("scale"));
    }

    let mut w = provisional(width, factor)?;
    let mut h = provisional(height, factor)?;

    if let Some(format) = format {
        let (mod_w, mod_h) = format.dimension_modulus();
        w = align_down(w, mod_w);
        h = align_down(h, mod_h);
    }
    Ok((w, h))
}

/// Round `value` down to a multiple of `modulus`, never below `modulus`.
/// A modulus of 1 leaves the value unchanged.
pub fn align_down(value: u32, modulus: u32) -> u32 {
    if modulus <= 1 {
        return value;
    }
    modulus.max(value - value % modulus)
}

fn provisional(dimension: u32, factor: f64) -> ResizeResult<u32> {
    let scaled = (f64::from(dimension) * factor).floor();
    if scaled > f64::from(u32::MAX) {
        return Err(ResizeError::invalid_scale(factor)
            .with_operation("scale")
            .with_context(format!("{} x {} exceeds the largest frame dimension", dimension, factor)));
    }
    Ok((scaled as u32).max(1))
}
