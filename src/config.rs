//! # Configuration Module
//!
//! Configuration for one resize job: where to read, where to write, how to
//! size the output and which kernel to use. It is the common interface
//! between the CLI and the library.
//!
//! | Parameter | Type | Constraint | Description |
//! |-----------|------|------------|-------------|
//! | `input` | `PathBuf` | non-empty | Y4M file to read |
//! | `output` | `PathBuf` | non-empty | Y4M file to write |
//! | `mode` | `ResizeMode` | factor > 0 and finite, dimensions > 0 | Target size |
//! | `kernel` | `String` | registered name, any case | Resampling kernel |
//!
//! ## Examples
//!
//! ```rust
//! use clip_resize::config::{ResizeConfig, ResizeMode};
//!
//! let mut config = ResizeConfig::default();
//! config.input = "in.y4m".into();
//! config.output = "out.y4m".into();
//! config.mode = ResizeMode::Scale { factor: 0.5 };
//! config.kernel = "Lanczos".to_string();
//! assert!(config.validate().is_ok());
//! ```

use std::path::PathBuf;

use clip_scale::Clip;

use crate::error::{ResizeError, ResizeResult};
use crate::kernel::pick_resizer;
use crate::resize::{pixel, scale, DEFAULT_KERNEL, DEFAULT_SCALE};

/// How the output size is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeMode {
    /// Multiply both dimensions by `factor`, aligned to chroma subsampling.
    Scale { factor: f64 },
    /// Explicit dimensions; `None` keeps the source dimension.
    Pixel {
        width: Option<u32>,
        height: Option<u32>,
    },
}

/// One resize job.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: ResizeMode,
    pub kernel: String,
}

impl Default for ResizeConfig {
    /// Empty paths, factor 1.0, bilinear.
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            mode: ResizeMode::Scale {
                factor: DEFAULT_SCALE,
            },
            kernel: DEFAULT_KERNEL.to_string(),
        }
    }
}

impl ResizeConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, mode: ResizeMode, kernel: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            mode,
            kernel: kernel.into(),
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> ResizeResult<()> {
        if self.input.as_os_str().is_empty() {
            return Err(ResizeError::config("input", "", "input path must not be empty"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ResizeError::config("output", "", "output path must not be empty"));
        }
        match self.mode {
            ResizeMode::Scale { factor } => {
                if !(factor.is_finite() && factor > 0.0) {
                    return Err(ResizeError::config(
                        "factor",
                        factor.to_string(),
                        "scale must be > 0",
                    ));
                }
            }
            ResizeMode::Pixel { width, height } => {
                if width == Some(0) {
                    return Err(ResizeError::config("width", "0", "width must be greater than 0"));
                }
                if height == Some(0) {
                    return Err(ResizeError::config("height", "0", "height must be greater than 0"));
                }
            }
        }
        pick_resizer(&self.kernel)?;
        Ok(())
    }

    /// Apply the configured resize to `clip`.
    pub fn apply(&self, clip: &Clip) -> ResizeResult<Clip> {
        match self.mode {
            ResizeMode::Scale { factor } => scale(clip, factor, &self.kernel),
            ResizeMode::Pixel { width, height } => pixel(clip, width, height, &self.kernel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clip_scale::format::YUV420P8;

    fn valid() -> ResizeConfig {
        ResizeConfig::new("in.y4m", "out.y4m", ResizeMode::Scale { factor: 0.5 }, "bicubic")
    }

    #[test]
    fn test_default_config() {
        let config = ResizeConfig::default();
        assert_eq!(config.mode, ResizeMode::Scale { factor: 1.0 });
        assert_eq!(config.kernel, "bilinear");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid();
        assert!(config.validate().is_ok());

        config.mode = ResizeMode::Scale { factor: 0.0 };
        assert!(config.validate().is_err());
        config.mode = ResizeMode::Scale { factor: f64::NAN };
        assert!(config.validate().is_err());

        config.mode = ResizeMode::Pixel { width: Some(0), height: None };
        assert!(config.validate().is_err());
        config.mode = ResizeMode::Pixel { width: None, height: Some(0) };
        assert!(config.validate().is_err());
        config.mode = ResizeMode::Pixel { width: None, height: None };
        assert!(config.validate().is_ok());

        config.kernel = "nearest".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.category(), "unknown_kernel");
        config.kernel = "POINT".to_string();
        assert!(config.validate().is_ok());

        config.output = PathBuf::new();
        assert_eq!(config.validate().unwrap_err().category(), "config");
    }

    #[test]
    fn test_apply_modes() {
        let clip = Clip::blank(YUV420P8, 64, 48, 1, (25, 1)).unwrap();
        let out = valid().apply(&clip).unwrap();
        assert_eq!((out.width(), out.height()), (32, 24));

        let mut config = valid();
        config.mode = ResizeMode::Pixel { width: Some(16), height: None };
        let out = config.apply(&clip).unwrap();
        assert_eq!((out.width(), out.height()), (16, 48));
    }
}
