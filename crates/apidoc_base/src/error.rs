use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

/* # Why a custom error type and not use anyhow/eyre/thiserror etc?

- Better control over error handling
- No dependencies to compile and integrate
- More transparency into error handling logic
 */

/// Error variants that can occur in apidoc operations.
/// Each variant represents a specific error category with its associated context.
#[derive(Debug)]
pub enum ErrorKind {
    /// File system operation failed
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An API description file could not be parsed
    ConfigError { path: PathBuf, message: String },

    /// Catch-all for other errors with a message
    Message { message: String },
}

/* # Why separate ErrorKind and ApidocError?
This two-layer design provides a clear separation of concerns:
- ErrorKind: structural variants with specific contexts (file paths, parse messages)
- ApidocError: wraps ErrorKind with additional runtime context strings

Users can pattern match on ErrorKind for specific handling, while ApidocError
provides ergonomic context attachment for propagation.
*/

/// Error type wrapping ErrorKind with optional context.
/// Implements the standard Error trait and supports context attachment.
#[derive(Debug)]
pub struct ApidocError {
    kind: ErrorKind,
    context: Vec<String>,
}

impl ApidocError {
    /// Creates a new error from an ErrorKind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
        }
    }

    /// Creates a message-only error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    /// Context is displayed before the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    /// Useful to avoid expensive string construction for successful paths.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Returns a reference to the underlying ErrorKind.
    /// Allows pattern matching on specific error variants.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the innermost error in the chain.
    /// Traverses the error source chain to find the root cause.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}

impl From<ErrorKind> for ApidocError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for ApidocError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::FileError { source, .. } => Some(source),
            ErrorKind::ConfigError { .. } => None,
            ErrorKind::Message { .. } => None,
        }
    }
}

impl fmt::Display for ApidocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display context first if present
        for (i, ctx) in self.context.iter().enumerate() {
            if i == 0 {
                write!(f, "{}", ctx)?;
            } else {
                write!(f, ": {}", ctx)?;
            }
        }

        // Add a separator if we have context
        if !self.context.is_empty() {
            write!(f, ": ")?;
        }

        // Display the underlying error kind
        match &self.kind {
            ErrorKind::FileError { path, source } => {
                write!(f, "File error at {}: {}", path.display(), source)
            }
            ErrorKind::ConfigError { path, message } => {
                write!(f, "Invalid API description at {}: {}", path.display(), message)
            }
            ErrorKind::Message { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/* # Why use Box<ApidocError> in the result type?

Boxing the error reduces the size of the result type, making it more efficient
to return in the common case.
*/

/// Standard result type for apidoc operations.
pub type ApidocResult<T> = std::result::Result<T, Box<ApidocError>>;

/// Constructs a boxed message error from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        Box::new($crate::ApidocError::message(format!($($arg)*)))
    };
}

/// Extension trait for attaching context to Results.
/// Provides ergonomic error context attachment during error propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    /// Eager evaluation: context is evaluated immediately.
    fn context(self, context: impl Into<String>) -> ApidocResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    /// Prefer this to avoid expensive string formatting in the success path.
    fn with_context<F>(self, f: F) -> ApidocResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for ApidocResult<T> {
    fn context(self, context: impl Into<String>) -> ApidocResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> ApidocResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_from_file_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let path = PathBuf::from("test.txt");
        let kind = ErrorKind::FileError {
            path: path.clone(),
            source: io_err,
        };
        let error = ApidocError::new(kind);

        match error.kind() {
            ErrorKind::FileError { path: p, .. } => {
                assert_eq!(p, &path);
            }
            _ => panic!("Expected FileError variant"),
        }
    }

    #[test]
    fn test_error_from_message() {
        let error = ApidocError::message("something went wrong");

        match error.kind() {
            ErrorKind::Message { message } => {
                assert_eq!(message, "something went wrong");
            }
            _ => panic!("Expected Message variant"),
        }
    }

    #[test]
    fn test_error_context_attachment() {
        let error = ApidocError::message("original error")
            .context("first context")
            .context("second context");

        assert_eq!(error.context.len(), 2);
        assert_eq!(error.context[0], "first context");
        assert_eq!(error.context[1], "second context");
    }

    #[test]
    fn test_error_display_message_only() {
        let error = ApidocError::message("test message");
        assert_eq!(error.to_string(), "test message");
    }

    #[test]
    fn test_error_display_with_context() {
        let error = ApidocError::message("test message").context("operation failed");
        assert_eq!(error.to_string(), "operation failed: test message");
    }

    #[test]
    fn test_error_display_with_multiple_contexts() {
        let error = ApidocError::message("root error")
            .context("first")
            .context("second")
            .context("third");
        assert_eq!(error.to_string(), "first: second: third: root error");
    }

    #[test]
    fn test_error_display_file_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");
        let path = PathBuf::from("/tmp/test.txt");
        let error = ApidocError::new(ErrorKind::FileError {
            path: path.clone(),
            source: io_err,
        });
        let display = error.to_string();
        assert!(display.contains("/tmp/test.txt"));
        assert!(display.contains("not found"));
    }

    #[test]
    fn test_error_display_config_error() {
        let error = ApidocError::new(ErrorKind::ConfigError {
            path: PathBuf::from("apidoc.toml"),
            message: "expected a table".to_string(),
        });
        let display = error.to_string();
        assert!(display.contains("apidoc.toml"));
        assert!(display.contains("expected a table"));
    }

    #[test]
    fn test_error_source_file_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error = ApidocError::new(ErrorKind::FileError {
            path: PathBuf::from("test.txt"),
            source: io_err,
        });
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_source_message() {
        let error = ApidocError::message("test");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_root_cause_file_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");
        let error = ApidocError::new(ErrorKind::FileError {
            path: PathBuf::from("test.txt"),
            source: io_err,
        });
        let root = error.root_cause();
        // The root cause is the io::Error itself
        assert_eq!(root.to_string(), "not found");
    }

    #[test]
    fn test_err_macro() {
        let error = *err!("bad value: {}", 42);
        assert_eq!(error.to_string(), "bad value: 42");
    }

    #[test]
    fn test_result_ext_context_success() {
        let result: ApidocResult<i32> = Ok(42);
        let final_result = result.context("operation failed");
        assert_eq!(final_result.unwrap(), 42);
    }

    #[test]
    fn test_result_ext_context_error() {
        let result: ApidocResult<i32> = Err(Box::new(ApidocError::message("original")));
        let final_result = result.context("operation failed");
        assert!(final_result.is_err());
        let err = final_result.unwrap_err();
        assert_eq!(err.to_string(), "operation failed: original");
    }

    #[test]
    fn test_result_ext_chaining() {
        let result: ApidocResult<i32> = Err(Box::new(ApidocError::message("root")));
        let final_result = result
            .context("step 1")
            .context("step 2")
            .with_context(|| "step 3".to_string());
        assert!(final_result.is_err());
        let err = final_result.unwrap_err();
        assert_eq!(err.to_string(), "step 1: step 2: step 3: root");
    }
}
