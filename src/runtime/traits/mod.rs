//! Runtime traits for backend abstraction

#[cfg(not(target_arch = "nvptx64"))]
pub mod device;
#[cfg(not(target_arch = "nvptx64"))]
pub mod runtime;
pub mod system;

#[cfg(not(target_arch = "nvptx64"))]
pub use device::Device;
#[cfg(not(target_arch = "nvptx64"))]
pub use runtime::Runtime;
pub use system::{Cuda, DeviceSystem, Host, System, TargetSystem, same_system};
