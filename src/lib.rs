//! # hetmem
//!
//! **Backend-tagged memory views and lock-free atomics for host and accelerator code.**
//!
//! hetmem gives host and accelerator code one view type over externally owned
//! storage. The backend that owns the memory is part of the view's type, so the
//! access rules are decided when the code is compiled:
//!
//! - **Host views** hand out live references, with no bounds checks on the
//!   native accessors.
//! - **Accelerator views** hand out references when the calling code is
//!   itself compiled for the accelerator, and copy single elements across the
//!   memory boundary when called from host code.
//! - **Atomics** provide `atomic_add` with fetch-and-add semantics for
//!   integers and floats on every supported backend.
//!
//! ## Quick Start
//!
//! ```rust
//! use hetmem::prelude::*;
//!
//! let mut data = [10u32, 20, 30];
//! let view: HostPointer<u32> = unsafe { TaggedPointer::from_slice(&mut data) }.unwrap();
//!
//! assert_eq!(unsafe { *view.front() }, 10);
//! assert_eq!(unsafe { *view.back() }, 30);
//!
//! // Views tagged for another backend never alias host memory.
//! let device: CudaPointer<u32> = TaggedPointer::convert(&view);
//! assert!(device.is_empty());
//! assert!(device.data().is_null());
//! ```
//!
//! ## Feature Flags
//!
//! - `cpu` (default): host runtime (`CpuRuntime`)
//! - `rayon` (default): parallel iterators over host views
//! - `cuda`: NVIDIA CUDA runtime and device-to-host element reads via cudarc
//!
//! ## Device Compilation
//!
//! When built for `nvptx64`, the crate is `no_std` and only exposes the view
//! types, the device personality of accelerator views and device atomics.
//! The std-only dependencies (`rayon`, `thiserror`, `tracing`, `cudarc`) are
//! host-target dependencies, so default features are fine for device builds:
//!
//! ```text
//! cargo check --target nvptx64-nvidia-cuda
//! ```

#![cfg_attr(target_arch = "nvptx64", no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

/// Emit a `tracing` event on host builds; expands to nothing for device code.
macro_rules! host_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(not(target_arch = "nvptx64"))]
        ::tracing::$level!($($arg)+);
    };
}

pub mod atomics;
#[cfg(not(target_arch = "nvptx64"))]
pub mod error;
pub mod memory;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::atomics::{AtomicAdd, Atomics};
    pub use crate::memory::{
        CudaPointer, Cursor, HostPointer, IndexType, TaggedMemory, TaggedPointer,
    };
    pub use crate::runtime::{Cuda, DeviceSystem, Host, System, TargetSystem};

    #[cfg(not(target_arch = "nvptx64"))]
    pub use crate::error::{Error, Result};
    #[cfg(not(target_arch = "nvptx64"))]
    pub use crate::runtime::{Device, Runtime};

    #[cfg(all(feature = "cpu", not(target_arch = "nvptx64")))]
    pub use crate::runtime::cpu::{CpuDevice, CpuRuntime};

    #[cfg(all(feature = "cuda", not(target_arch = "nvptx64")))]
    pub use crate::runtime::cuda::{CudaDevice, CudaRuntime};
}
