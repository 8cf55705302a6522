// SPDX-License-Identifier: MIT
//! # clip-scale: Planar Video Clips and Kernel Resampling
//!
//! This crate is the processing core behind `clip-resize`. It models planar
//! video the way frame-server style tools do and resamples it with
//! SIMD-accelerated kernels from `fast_image_resize`.
//!
//! ## Key Components
//!
//! - [`format`]: pixel-format descriptors (colour family, bit depth, chroma subsampling)
//! - [`frame`]: planar frame storage
//! - [`clip`]: clips as lazy frame nodes
//! - [`kernels`]: the seven resampling kernels and their resizer mapping
//! - [`cpu`]: per-plane CPU scaling
//! - [`resize`]: the resize filter that ties them together
//!
//! ## Usage Example
//!
//! ```rust
//! use clip_scale::clip::Clip;
//! use clip_scale::format::YUV420P8;
//! use clip_scale::kernels::Kernel;
//! use clip_scale::resize::resize;
//!
//! let clip = Clip::blank(YUV420P8, 1920, 1080, 10, (24000, 1001))?;
//! let small = resize(&clip, Kernel::Spline36, Some(1280), Some(720))?;
//! assert_eq!(small.width(), 1280);
//!
//! // Frames are resampled only when pulled.
//! let frame = small.get_frame(0)?;
//! assert_eq!(frame.planes[1].width, 640);
//! # Ok::<(), clip_scale::cpu::ScaleError>(())
//! ```

pub mod clip;
pub mod cpu;
pub mod format;
pub mod frame;
pub mod kernels;
pub mod resize;

pub use clip::{Clip, FrameSource, VideoInfo};
pub use cpu::ScaleError;
pub use format::{ColorFamily, SampleType, VideoFormat};
pub use frame::{Plane, VideoFrame};
pub use kernels::Kernel;
