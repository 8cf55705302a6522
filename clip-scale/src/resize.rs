// SPDX-License-Identifier: MIT
//! # Resize Filter
//!
//! Builds a lazy node that resamples every plane of every frame to a target
//! size with one [`Kernel`].
//!
//! ## Dimension rules
//!
//! - An omitted width or height keeps the source dimension.
//! - Target dimensions must be non-zero.
//! - On a subsampled axis the target must be divisible by
//!   `1 << subsampling`, so chroma planes keep an integral size. A target
//!   equal to the source size is exempt: such frames are passed through, so
//!   odd-sized subsampled sources (e.g. 101x57 4:2:0 from Y4M) keep working.
//!
//! Constant-format clips are checked when the node is built. Variable-format
//! clips are checked per frame, when the frame's format is known.

use std::sync::Arc;

use fast_image_resize::Resizer;
use log::trace;

use crate::clip::{Clip, FrameSource, VideoInfo};
use crate::cpu::{resize_plane, ScaleError, Staging};
use crate::format::VideoFormat;
use crate::frame::VideoFrame;
use crate::kernels::Kernel;

/// Resize `clip` to `width` x `height` using `kernel`.
pub fn resize(
    clip: &Clip,
    kernel: Kernel,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<Clip, ScaleError> {
    let width = width.unwrap_or_else(|| clip.width());
    let height = height.unwrap_or_else(|| clip.height());
    // Same-size frames pass through, so odd source sizes stay accepted.
    if (width, height) != (clip.width(), clip.height()) {
        check_dimensions(clip.format().as_ref(), width, height)?;
    }
    // Validate the kernel up front so a broken filter surfaces here, not per frame.
    kernel.resize_alg()?;

    let info = VideoInfo {
        width,
        height,
        ..*clip.info()
    };
    Ok(Clip::from_source(ResizeNode {
        source: clip.clone(),
        kernel,
        info,
    }))
}

/// Check a target size against a format's subsampling.
pub fn check_dimensions(format: Option<&VideoFormat>, width: u32, height: u32) -> Result<(), ScaleError> {
    if width == 0 || height == 0 {
        return Err(ScaleError::InvalidDimensions(format!(
            "target must be non-zero, got {}x{}",
            width, height
        )));
    }
    if let Some(format) = format {
        let (mw, mh) = format.dimension_modulus();
        if width % mw != 0 {
            return Err(ScaleError::IncompatibleSubsampling {
                axis: "width",
                value: width,
                modulus: mw,
            });
        }
        if height % mh != 0 {
            return Err(ScaleError::IncompatibleSubsampling {
                axis: "height",
                value: height,
                modulus: mh,
            });
        }
    }
    Ok(())
}

/// Lazy resize node.
struct ResizeNode {
    source: Clip,
    kernel: Kernel,
    info: VideoInfo,
}

impl FrameSource for ResizeNode {
    fn info(&self) -> &VideoInfo {
        &self.info
    }

    fn frame(&self, n: usize) -> Result<Arc<VideoFrame>, ScaleError> {
        let src = self.source.get_frame(n)?;
        let (width, height) = (self.info.width, self.info.height);
        if (src.width, src.height) == (width, height) {
            return Ok(src);
        }
        if self.info.format.is_none() {
            check_dimensions(Some(&src.format), width, height)?;
        }

        trace!(
            "resize frame {}: {}x{} -> {}x{} ({}, {})",
            n, src.width, src.height, width, height, src.format, self.kernel
        );
        let mut resizer = Resizer::new();
        let mut staging = Staging::with_capacity(0);
        let mut planes = Vec::with_capacity(src.planes.len());
        for (p, plane) in src.planes.iter().enumerate() {
            let (pw, ph) = src.format.plane_dimensions(p, width, height);
            planes.push(resize_plane(
                &mut resizer,
                plane,
                &src.format,
                pw,
                ph,
                self.kernel,
                &mut staging,
            )?);
        }
        Ok(Arc::new(VideoFrame::from_planes(src.format, width, height, planes)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{GRAY8, RGB24, YUV411P8, YUV420P8};

    #[test]
    fn test_resize_sets_dimensions() {
        let clip = Clip::blank(YUV420P8, 64, 48, 2, (24, 1)).unwrap();
        let out = resize(&clip, Kernel::Bilinear, Some(32), Some(24)).unwrap();
        assert_eq!((out.width(), out.height()), (32, 24));
        assert_eq!(out.num_frames(), 2);
        assert_eq!(out.format(), Some(YUV420P8));

        let frame = out.get_frame(1).unwrap();
        assert_eq!((frame.planes[0].width, frame.planes[0].height), (32, 24));
        assert_eq!((frame.planes[1].width, frame.planes[1].height), (16, 12));
        assert_eq!(frame.planes[0].sample_u8(5, 5), 128);
    }

    #[test]
    fn test_omitted_dimensions_keep_source() {
        let clip = Clip::blank(RGB24, 40, 30, 1, (24, 1)).unwrap();
        let out = resize(&clip, Kernel::Spline36, None, Some(15)).unwrap();
        assert_eq!((out.width(), out.height()), (40, 15));
        let out = resize(&clip, Kernel::Point, None, None).unwrap();
        assert_eq!((out.width(), out.height()), (40, 30));
    }

    #[test]
    fn test_same_size_passes_through() {
        let clip = Clip::blank(GRAY8, 16, 16, 1, (1, 1)).unwrap();
        let out = resize(&clip, Kernel::Lanczos, Some(16), Some(16)).unwrap();
        let a = clip.get_frame(0).unwrap();
        let b = out.get_frame(0).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_subsampling_enforced() {
        let clip = Clip::blank(YUV420P8, 64, 48, 1, (24, 1)).unwrap();
        let err = resize(&clip, Kernel::Bicubic, Some(33), Some(24)).unwrap_err();
        assert!(matches!(err, ScaleError::IncompatibleSubsampling { axis: "width", value: 33, modulus: 2 }));
        let err = resize(&clip, Kernel::Bicubic, Some(32), Some(25)).unwrap_err();
        assert!(matches!(err, ScaleError::IncompatibleSubsampling { axis: "height", .. }));

        let clip = Clip::blank(YUV411P8, 64, 48, 1, (24, 1)).unwrap();
        assert!(resize(&clip, Kernel::Point, Some(62), Some(47)).is_err());
        assert!(resize(&clip, Kernel::Point, Some(60), Some(47)).is_ok());
    }

    #[test]
    fn test_odd_subsampled_source_same_size() {
        let clip = Clip::blank(YUV420P8, 101, 57, 1, (24, 1)).unwrap();
        let out = resize(&clip, Kernel::Bilinear, None, None).unwrap();
        assert_eq!((out.width(), out.height()), (101, 57));
        let frame = out.get_frame(0).unwrap();
        assert!(Arc::ptr_eq(&frame, &clip.get_frame(0).unwrap()));
        assert_eq!((frame.planes[1].width, frame.planes[1].height), (51, 29));

        assert!(resize(&clip, Kernel::Bilinear, Some(101), Some(57)).is_ok());
        // Changing either dimension still has to respect subsampling.
        assert!(resize(&clip, Kernel::Bilinear, Some(101), Some(56)).is_err());
        assert!(resize(&clip, Kernel::Bilinear, Some(100), Some(56)).is_ok());
    }

    #[test]
    fn test_zero_rejected() {
        let clip = Clip::blank(GRAY8, 16, 16, 1, (1, 1)).unwrap();
        assert!(matches!(
            resize(&clip, Kernel::Point, Some(0), None),
            Err(ScaleError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_variable_format_checked_per_frame() {
        let frames = vec![
            VideoFrame::new_grey(GRAY8, 8, 8).unwrap(),
            VideoFrame::new_grey(YUV420P8, 8, 8).unwrap(),
        ];
        let clip = Clip::from_frames(frames, (30, 1)).unwrap();
        let out = resize(&clip, Kernel::Bilinear, Some(5), Some(5)).unwrap();
        assert_eq!(out.get_frame(0).unwrap().width, 5);
        assert!(matches!(
            out.get_frame(1),
            Err(ScaleError::IncompatibleSubsampling { .. })
        ));
    }
}
