//! Error types for hetmem

use thiserror::Error;

/// Result type alias using hetmem's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hetmem operations
///
/// Mismatched-backend conversions are absent: they produce an
/// empty view, not an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Host and device buffers disagree on element count
    #[error("Length mismatch: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Element count of the view
        expected: usize,
        /// Element count of the host buffer
        got: usize,
    },

    /// Checked element access past the end of a view
    #[error("Index {index} out of bounds for view of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the view
        size: usize,
    },

    /// A length does not fit the view's index type
    #[error("Length {len} does not fit index type {index_type}")]
    LengthOverflow {
        /// The requested length
        len: usize,
        /// Name of the index type
        index_type: &'static str,
    },

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),

    /// CUDA-specific error
    #[cfg(feature = "cuda")]
    #[error("CUDA error: {0}")]
    Cuda(#[from] cudarc::driver::DriverError),
}

impl Error {
    /// Create a length mismatch error
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
