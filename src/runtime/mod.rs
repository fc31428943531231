//! Backend tags and the runtime collaborators that own memory
//!
//! This module defines the `System` backend tags that views and atomics are
//! generic over, and the `Runtime` trait through which memory is allocated
//! and bulk-copied for each backend.
//!
//! # Architecture
//!
//! ```text
//! System (compile-time backend tag: Host, Cuda)
//! └── DeviceSystem (cross-domain element copy for accelerator memory)
//!
//! Runtime (allocator + transfer collaborator)
//! ├── System (tag of the memory it hands out)
//! └── Device (identifies a specific GPU/CPU)
//! ```

pub mod traits;

#[cfg(all(feature = "cpu", not(target_arch = "nvptx64")))]
pub mod cpu;

#[cfg(all(feature = "cuda", not(target_arch = "nvptx64")))]
pub mod cuda;

pub use traits::{Cuda, DeviceSystem, Host, System, TargetSystem, same_system};
#[cfg(not(target_arch = "nvptx64"))]
pub use traits::{Device, Runtime};
