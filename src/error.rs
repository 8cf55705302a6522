//! # Error Handling
//!
//! Error type for the resize wrapper, its configuration layer and clip I/O.
//!
//! Every variant carries an [`ErrorContext`] with optional operation,
//! free-form context, a recovery suggestion and a severity. Caller-input
//! errors (bad factor, unknown kernel, invalid configuration) are meant to
//! fail fast; nothing here is retried.
//!
//! ## Usage
//!
//! ```rust
//! use clip_resize::error::{HasRecoverySuggestion, ResizeError};
//!
//! let error = ResizeError::invalid_scale(-1.0)
//!     .with_operation("scale")
//!     .with_recovery_suggestion("pass a factor such as 0.5 or 2.0");
//!
//! assert_eq!(error.category(), "invalid_scale");
//! assert_eq!(error.to_string(), "scale must be > 0 (got -1)");
//! assert!(error.recovery_suggestion().is_some());
//! ```

use std::{error::Error as StdError, fmt};

use clip_scale::ScaleError;

/// Severity levels for errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Warnings that may indicate potential issues
    Warning,
    /// Errors that abort the current call
    Error,
    /// Errors that leave the output unusable
    Critical,
}

/// Metadata about where an error occurred
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The operation being performed when the error occurred
    pub operation: Option<String>,
    /// Additional context about the error
    pub context: Option<String>,
    /// Suggested recovery action
    pub recovery_suggestion: Option<String>,
    /// Error severity level
    pub severity: ErrorSeverity,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            operation: None,
            context: None,
            recovery_suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Error type for the resize wrapper
#[derive(Debug)]
pub enum ResizeError {
    /// Scale factor not strictly positive (or not finite)
    InvalidScale { value: f64, context: ErrorContext },
    /// Kernel name not present in the registry
    UnknownKernel {
        name: String,
        choices: Vec<&'static str>,
        context: ErrorContext,
    },
    /// Configuration validation errors
    Config {
        field: String,
        value: String,
        reason: String,
        context: ErrorContext,
    },
    /// Container (Y4M) parse/format errors
    Container { reason: String, context: ErrorContext },
    /// I/O errors
    Io {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
        context: ErrorContext,
    },
    /// Errors raised by the resize framework
    Framework { source: ScaleError, context: ErrorContext },
}

impl ResizeError {
    /// Create an invalid scale error
    pub fn invalid_scale(value: f64) -> Self {
        Self::InvalidScale {
            value,
            context: ErrorContext::new(),
        }
    }

    /// Create an unknown kernel error listing the valid choices
    pub fn unknown_kernel(name: impl Into<String>, choices: Vec<&'static str>) -> Self {
        Self::UnknownKernel {
            name: name.into(),
            choices,
            context: ErrorContext::new(),
        }
    }

    /// Create a configuration error
    pub fn config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Config {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a container error
    pub fn container(reason: impl Into<String>) -> Self {
        Self::Container {
            reason: reason.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, path: Option<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path,
            source,
            context: ErrorContext::new(),
        }
    }

    /// Add additional context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context_mut().context = Some(context.into());
        self
    }

    /// Set the operation that was being performed
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.context_mut().operation = Some(operation.into());
        self
    }

    /// Set recovery suggestion
    pub fn with_recovery_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.context_mut().recovery_suggestion = Some(suggestion.into());
        self
    }

    /// Set severity level
    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.context_mut().severity = severity;
        self
    }

    /// Get the error context
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::InvalidScale { context, .. }
            | Self::UnknownKernel { context, .. }
            | Self::Config { context, .. }
            | Self::Container { context, .. }
            | Self::Io { context, .. }
            | Self::Framework { context, .. } => context,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            Self::InvalidScale { context, .. }
            | Self::UnknownKernel { context, .. }
            | Self::Config { context, .. }
            | Self::Container { context, .. }
            | Self::Io { context, .. }
            | Self::Framework { context, .. } => context,
        }
    }

    /// Get the error category as a string
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidScale { .. } => "invalid_scale",
            Self::UnknownKernel { .. } => "unknown_kernel",
            Self::Config { .. } => "config",
            Self::Container { .. } => "container",
            Self::Io { .. } => "io",
            Self::Framework { .. } => "framework",
        }
    }

    /// Whether the caller passed a bad value (as opposed to an environment failure)
    pub fn is_value_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidScale { .. } | Self::UnknownKernel { .. } | Self::Config { .. }
        )
    }
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizeError::InvalidScale { value, .. } => {
                write!(f, "scale must be > 0 (got {})", value)
            }
            ResizeError::UnknownKernel { name, choices, .. } => {
                write!(f, "Unknown kernel '{}'. Choose from: {}", name, choices.join(", "))
            }
            ResizeError::Config {
                field,
                value,
                reason,
                ..
            } => {
                write!(
                    f,
                    "Configuration error in '{}': {} (value: {})",
                    field, reason, value
                )
            }
            ResizeError::Container { reason, .. } => write!(f, "Y4M error: {}", reason),
            ResizeError::Io {
                operation,
                path,
                source,
                ..
            } => {
                if let Some(path) = path {
                    write!(
                        f,
                        "I/O error during {} on '{}': {}",
                        operation, path, source
                    )
                } else {
                    write!(f, "I/O error during {}: {}", operation, source)
                }
            }
            ResizeError::Framework { source, .. } => write!(f, "Resize failed: {}", source),
        }
    }
}

impl StdError for ResizeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Framework { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias using our custom error type
pub type ResizeResult<T> = Result<T, ResizeError>;

/// Trait for getting error severity
pub trait HasSeverity {
    fn severity(&self) -> ErrorSeverity;
}

impl HasSeverity for ResizeError {
    fn severity(&self) -> ErrorSeverity {
        self.context().severity
    }
}

/// Trait for getting recovery suggestions
pub trait HasRecoverySuggestion {
    fn recovery_suggestion(&self) -> Option<&str>;
}

impl HasRecoverySuggestion for ResizeError {
    fn recovery_suggestion(&self) -> Option<&str> {
        self.context().recovery_suggestion.as_deref()
    }
}

/// Error conversion implementations
impl From<ScaleError> for ResizeError {
    fn from(error: ScaleError) -> Self {
        Self::Framework {
            source: error,
            context: ErrorContext::new(),
        }
    }
}

impl From<std::io::Error> for ResizeError {
    fn from(error: std::io::Error) -> Self {
        Self::io("unknown", None, error)
    }
}

impl From<y4m::Error> for ResizeError {
    fn from(error: y4m::Error) -> Self {
        match error {
            y4m::Error::IoError(source) => Self::io("y4m stream", None, source),
            other => Self::container(other.to_string()),
        }
    }
}
