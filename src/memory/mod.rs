//! Backend-tagged memory views
//!
//! [`TaggedPointer`] is the one view type shared by host and accelerator
//! code. Its backend tag picks the element accessors at compile time:
//!
//! ```text
//! TaggedPointer<S, T, I>        address + length, conversion, cursors
//! ├── S = Host                  references (memory::host)
//! └── S: DeviceSystem           references in device code,
//!                               by-value copies in host code (memory::device)
//! ```
//!
//! Converting a view into a view of another backend yields an empty view.

#[macro_use]
mod access;
mod cursor;
mod device;
mod host;
mod index;
#[cfg(all(feature = "rayon", not(target_arch = "nvptx64")))]
mod par;
mod pointer;

pub use cursor::Cursor;
pub use device::CudaPointer;
pub use host::HostPointer;
pub use index::IndexType;
pub use pointer::{TaggedMemory, TaggedPointer};
