use std::io::{Read, Write};
use std::sync::Arc;

use crate::ApidocResult;

use super::file_path::FilePath;

/* # Why is Pal a trait instead of a struct?

Using a trait enables two key benefits:
1. **Testability**: MockPal implements Pal for fast, deterministic tests without filesystem side effects
2. **Flexibility**: Code depends on the abstraction, not the concrete implementation
*/

/// Platform Abstraction Layer (PAL) trait providing filesystem operations.
///
/// Implement this trait to provide custom filesystem behavior. Two implementations
/// are provided:
/// - `RealPal`: Uses the real filesystem via `std::fs`
/// - `MockPal`: In-memory implementation for testing
pub trait Pal: std::fmt::Debug + Send + Sync + 'static {
    /// Check if a file exists at the given path.
    fn file_exists(&self, path: &FilePath) -> ApidocResult<bool>;

    /// Open a file for reading.
    fn read_file(&self, path: &FilePath) -> ApidocResult<Box<dyn Read + 'static>>;

    /// Read entire file contents as a UTF-8 string.
    ///
    /// Convenience method with a default implementation. It reads the file,
    /// validates UTF-8, and returns the string or an error.
    fn read_file_to_string(&self, path: &FilePath) -> ApidocResult<String> {
        let mut reader = self.read_file(path)?;
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).map_err(|e| {
            Box::new(crate::ApidocError::new(
                crate::error::ErrorKind::FileError {
                    path: path.as_path().to_path_buf(),
                    source: e,
                },
            ))
        })?;
        String::from_utf8(contents).map_err(|_e| crate::err!("File is not valid UTF-8: {}", path))
    }

    /// Create a new file for writing, overwriting if it exists.
    fn create_file(&self, path: &FilePath) -> ApidocResult<Box<dyn Write>>;

    /// Write the given bytes to a file, overwriting if it exists.
    ///
    /// Convenience method with a default implementation on top of `create_file`.
    fn write_file(&self, path: &FilePath, contents: &[u8]) -> ApidocResult<()> {
        let mut writer = self.create_file(path)?;
        writer.write_all(contents).map_err(|e| {
            Box::new(crate::ApidocError::new(
                crate::error::ErrorKind::FileError {
                    path: path.as_path().to_path_buf(),
                    source: e,
                },
            ))
        })?;
        Ok(())
    }
}

/* # Why use Arc<dyn Pal> with PalHandle?

Arc enables cheap cloning of the entire PAL implementation, allowing it to be
shared across multiple parts of the application. PalHandle wraps this for
ergonomic Deref access and Clone support, avoiding lifetime parameters.
*/

/// Handle to a PAL implementation, enabling shared ownership.
///
/// Internally wraps `Arc<dyn Pal>` for cheap cloning and thread-safe sharing.
///
/// # Examples
///
/// ```no_run
/// use apidoc_base::{RealPal, PalHandle};
///
/// let pal = PalHandle::new(RealPal::new(".".into()));
/// let pal_clone = pal.clone(); // Cheap clone, shares the same implementation
/// ```
#[derive(Debug, Clone)]
pub struct PalHandle(Arc<dyn Pal>);

impl PalHandle {
    /// Create a new PalHandle from a Pal implementation.
    pub fn new(pal: impl Pal + 'static) -> Self {
        Self(Arc::new(pal))
    }
}

impl std::ops::Deref for PalHandle {
    type Target = dyn Pal;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
