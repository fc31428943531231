//! CPU runtime implementation
//!
//! The CPU runtime hands out host memory from the system allocator. Views
//! over it carry the `Host` tag and give direct, reference-returning access.

mod device;
mod runtime;

pub use device::CpuDevice;
pub use runtime::CpuRuntime;
