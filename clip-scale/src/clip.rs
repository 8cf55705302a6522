// SPDX-License-Identifier: MIT
//! # Clips and Frame Nodes
//!
//! A [`Clip`] is a cheap handle to a node that produces frames on request.
//! Filters such as [`crate::resize::resize`] wrap an upstream clip in a new
//! node instead of touching its frames, so building a chain costs nothing
//! until frames are pulled.
//!
//! Nodes implement [`FrameSource`]. The in-memory source backs decoded input;
//! filter nodes compute frames lazily from their upstream clip.

use std::fmt;
use std::sync::Arc;

use crate::cpu::ScaleError;
use crate::format::VideoFormat;
use crate::frame::VideoFrame;

/// Static properties of a clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoInfo {
    /// `None` for variable-format clips, whose frames carry their own format.
    pub format: Option<VideoFormat>,
    pub width: u32,
    pub height: u32,
    pub num_frames: usize,
    pub fps_num: u64,
    pub fps_den: u64,
}

/// Anything that can produce frames by index.
pub trait FrameSource: Send + Sync {
    fn info(&self) -> &VideoInfo;

    /// Produce frame `n`.
    fn frame(&self, n: usize) -> Result<Arc<VideoFrame>, ScaleError>;
}

/// Shared handle to a frame node.
#[derive(Clone)]
pub struct Clip {
    node: Arc<dyn FrameSource>,
}

impl Clip {
    pub fn from_source(source: impl FrameSource + 'static) -> Self {
        Self {
            node: Arc::new(source),
        }
    }

    /// In-memory clip over decoded frames.
    ///
    /// All frames must share dimensions. If their formats differ the clip is
    /// variable-format and `format()` returns `None`.
    pub fn from_frames(frames: Vec<VideoFrame>, fps: (u64, u64)) -> Result<Self, ScaleError> {
        Ok(Self::from_source(MemorySource::new(frames, fps)?))
    }

    /// Constant clip of `num_frames` neutral grey frames.
    pub fn blank(
        format: VideoFormat,
        width: u32,
        height: u32,
        num_frames: usize,
        fps: (u64, u64),
    ) -> Result<Self, ScaleError> {
        let frame = Arc::new(VideoFrame::new_grey(format, width, height)?);
        if num_frames == 0 {
            return Err(ScaleError::MismatchedFrames("a clip needs at least one frame".to_string()));
        }
        Ok(Self::from_source(MemorySource {
            info: VideoInfo {
                format: Some(format),
                width,
                height,
                num_frames,
                fps_num: fps.0,
                fps_den: fps.1,
            },
            frames: vec![frame; num_frames],
        }))
    }

    pub fn info(&self) -> &VideoInfo {
        self.node.info()
    }

    pub fn width(&self) -> u32 {
        self.info().width
    }

    pub fn height(&self) -> u32 {
        self.info().height
    }

    pub fn format(&self) -> Option<VideoFormat> {
        self.info().format
    }

    pub fn num_frames(&self) -> usize {
        self.info().num_frames
    }

    pub fn fps(&self) -> (u64, u64) {
        (self.info().fps_num, self.info().fps_den)
    }

    pub fn get_frame(&self, n: usize) -> Result<Arc<VideoFrame>, ScaleError> {
        let len = self.num_frames();
        if n >= len {
            return Err(ScaleError::FrameOutOfRange { index: n, len });
        }
        self.node.frame(n)
    }

    /// Pull every frame in order.
    pub fn frames(&self) -> impl Iterator<Item = Result<Arc<VideoFrame>, ScaleError>> + '_ {
        (0..self.num_frames()).map(move |n| self.get_frame(n))
    }
}

impl fmt::Debug for Clip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clip").field("info", self.info()).finish()
    }
}

/// Frames held in memory.
pub struct MemorySource {
    info: VideoInfo,
    frames: Vec<Arc<VideoFrame>>,
}

impl MemorySource {
    pub fn new(frames: Vec<VideoFrame>, fps: (u64, u64)) -> Result<Self, ScaleError> {
        let first = frames
            .first()
            .ok_or_else(|| ScaleError::MismatchedFrames("a clip needs at least one frame".to_string()))?;
        let (width, height) = (first.width, first.height);
        let mut format = Some(first.format);
        for (i, frame) in frames.iter().enumerate() {
            if (frame.width, frame.height) != (width, height) {
                return Err(ScaleError::MismatchedFrames(format!(
                    "frame {} is {}x{}, expected {}x{}",
                    i, frame.width, frame.height, width, height
                )));
            }
            if Some(frame.format) != format {
                format = None;
            }
        }
        Ok(Self {
            info: VideoInfo {
                format,
                width,
                height,
                num_frames: frames.len(),
                fps_num: fps.0,
                fps_den: fps.1,
            },
            frames: frames.into_iter().map(Arc::new).collect(),
        })
    }
}

impl FrameSource for MemorySource {
    fn info(&self) -> &VideoInfo {
        &self.info
    }

    fn frame(&self, n: usize) -> Result<Arc<VideoFrame>, ScaleError> {
        self.frames
            .get(n)
            .cloned()
            .ok_or(ScaleError::FrameOutOfRange {
                index: n,
                len: self.frames.len(),
            })
    }
}
