//! # Clip Resize Library
//!
//! Convenience wrappers over the `clip-scale` resize framework: pick a
//! resampling kernel by name and resize a clip either by a factor or to
//! explicit pixel dimensions.
//!
//! ## Architecture
//!
//! - `resize`: the [`scale`] and [`pixel`] entry points and dimension arithmetic
//! - `kernel`: the name-to-kernel registry
//! - `config`: one resize job as consumed by the CLI
//! - `io`: YUV4MPEG2 reading and writing
//! - `error`: error type with context, severity and recovery suggestions
//!
//! Resizing is lazy: both entry points return a new [`Clip`] whose frames are
//! produced on request.
//!
//! ## Example
//!
//! ```rust
//! use clip_resize::{pixel, scale, Clip};
//! use clip_scale::format::YUV420P8;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let clip = Clip::blank(YUV420P8, 1920, 1080, 24, (24000, 1001))?;
//!
//! let half = scale(&clip, 0.5, "bilinear")?;
//! assert_eq!((half.width(), half.height()), (960, 540));
//!
//! let hd = pixel(&clip, Some(1280), Some(720), "Lanczos")?;
//! assert_eq!(hd.num_frames(), 24);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod kernel;
pub mod resize;

pub use config::{ResizeConfig, ResizeMode};
pub use error::{ErrorSeverity, HasRecoverySuggestion, HasSeverity, ResizeError, ResizeResult};
pub use kernel::{kernel_names, pick_resizer, KernelResizer, KERNELS};
pub use resize::{align_down, pixel, scale, scaled_dimensions, DEFAULT_KERNEL, DEFAULT_SCALE};

/// Re-export the framework types callers need to build and inspect clips
pub use clip_scale::{Clip, Kernel, VideoFormat, VideoFrame};
