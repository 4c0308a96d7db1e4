/* # Why have apidoc_base as a core library?
apidoc_base provides the foundational error handling, tracing setup, and
platform abstraction used across all crates. This ensures consistency in
error handling and prevents circular dependencies between crates.
*/

pub mod error;
pub mod pal;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ApidocError, ApidocResult, ResultExt};
pub use pal::{FilePath, MockPal, Pal, PalHandle, RealPal};
