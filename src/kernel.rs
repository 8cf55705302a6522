//! Kernel registry: lowercase names to the framework's resize operations.

use clip_scale::{resize, Clip, Kernel};

use crate::error::{ResizeError, ResizeResult};

/// Registered kernels, in the order they are listed to users.
pub const KERNELS: [(&str, Kernel); 7] = [
    ("point", Kernel::Point),
    ("bilinear", Kernel::Bilinear),
    ("bicubic", Kernel::Bicubic),
    ("lanczos", Kernel::Lanczos),
    ("spline16", Kernel::Spline16),
    ("spline36", Kernel::Spline36),
    ("spline64", Kernel::Spline64),
];

/// Names accepted by [`pick_resizer`].
pub fn kernel_names() -> Vec<&'static str> {
    KERNELS.iter().map(|(name, _)| *name).collect()
}

/// A resize operation bound to one kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelResizer {
    name: &'static str,
    kernel: Kernel,
}

impl KernelResizer {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Build a resize node over `clip`. Omitted dimensions keep the source size.
    pub fn apply(&self, clip: &Clip, width: Option<u32>, height: Option<u32>) -> ResizeResult<Clip> {
        Ok(resize::resize(clip, self.kernel, width, height)?)
    }
}

/// Look up a kernel by case-insensitive name.
pub fn pick_resizer(kernel: &str) -> ResizeResult<KernelResizer> {
    let wanted = kernel.to_lowercase();
    KERNELS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|&(name, kernel)| KernelResizer { name, kernel })
        .ok_or_else(|| {
            ResizeError::unknown_kernel(kernel, kernel_names())
                .with_operation("pick_resizer")
                .with_recovery_suggestion("run `clip-resize kernels` to list valid names")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for (name, kernel) in KERNELS {
            let resizer = pick_resizer(name).unwrap();
            assert_eq!(resizer.kernel(), kernel);
            assert_eq!(resizer.name(), name);
            assert_eq!(kernel.name(), name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(pick_resizer("Lanczos").unwrap().kernel(), Kernel::Lanczos);
        assert_eq!(pick_resizer("SPLINE36").unwrap().kernel(), Kernel::Spline36);
        assert_eq!(pick_resizer("BiLiNeAr").unwrap().kernel(), Kernel::Bilinear);
    }

    #[test]
    fn test_unknown_name_lists_choices() {
        let err = pick_resizer("Gaussian").unwrap_err();
        assert_eq!(err.category(), "unknown_kernel");
        let message = err.to_string();
        assert!(message.contains("'Gaussian'"));
        for name in kernel_names() {
            assert!(message.contains(name), "{} missing from {}", name, message);
        }
        assert!(message.ends_with("point, bilinear, bicubic, lanczos, spline16, spline36, spline64"));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(pick_resizer("").is_err());
        assert!(pick_resizer(" bilinear").is_err());
    }
}
