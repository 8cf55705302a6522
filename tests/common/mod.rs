//! Common test utilities for the clip-resize integration tests
//!
//! Builders for clips with recognisable content and small sample checks.

#![allow(dead_code)]

use clip_scale::{Clip, Plane, VideoFormat, VideoFrame};

/// Clip whose luma (or first plane) ramps left to right, with `frames` frames.
///
/// Frame `n` adds `n` to every sample so frames can be told apart.
pub fn gradient_clip(format: VideoFormat, width: u32, height: u32, frames: usize) -> Clip {
    let frames = (0..frames)
        .map(|n| gradient_frame(format, width, height, n as u32))
        .collect();
    Clip::from_frames(frames, (25, 1)).expect("gradient clip")
}

/// Integer-format frame with a horizontal ramp on every plane.
pub fn gradient_frame(format: VideoFormat, width: u32, height: u32, offset: u32) -> VideoFrame {
    let bps = format.bytes_per_sample();
    let max = format.max_value().expect("integer format");
    let planes = (0..format.num_planes())
        .map(|p| {
            let (pw, ph) = format.plane_dimensions(p, width, height);
            let mut plane = Plane::zeroed(pw, ph, bps);
            for y in 0..ph {
                for x in 0..pw {
                    let span = (pw - 1).max(1);
                    let value = (x * (max - offset.min(max)) / span + offset).min(max);
                    let i = y as usize * plane.stride + x as usize * bps;
                    if bps == 1 {
                        plane.data[i] = value as u8;
                    } else {
                        plane.data[i..i + 2].copy_from_slice(&(value as u16).to_ne_bytes());
                    }
                }
            }
            plane
        })
        .collect();
    VideoFrame::from_planes(format, width, height, planes).expect("gradient frame")
}

/// Every 8-bit sample of `plane`.
pub fn samples_u8(plane: &Plane) -> Vec<u8> {
    (0..plane.height)
        .flat_map(|y| (0..plane.width).map(move |x| (x, y)))
        .map(|(x, y)| plane.sample_u8(x, y))
        .collect()
}

/// Assert every 8-bit sample of `plane` is within `tolerance` of `expected`.
pub fn assert_flat_u8(plane: &Plane, expected: u8, tolerance: u8) {
    for value in samples_u8(plane) {
        assert!(
            value.abs_diff(expected) <= tolerance,
            "sample {} not within {} of {}",
            value,
            tolerance,
            expected
        );
    }
}
