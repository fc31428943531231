//! CUDA runtime implementation
//!
//! This module provides CUDA device memory via cudarc.
//!
//! # Features
//!
//! - `CudaDevice` - Represents a CUDA GPU device
//! - `CudaRuntime` - Implements the generic Runtime trait for `Cuda` memory
//! - Synchronous element transfers used by host-side accelerator views
//!
//! # Addressing
//!
//! Device pointers are unified virtual addresses, so a transfer issued in the
//! default device's context reaches memory on any device of the process.

mod cache;
mod device;
mod runtime;

pub use device::CudaDevice;
pub use runtime::{CudaRuntime, is_cuda_available};

use crate::error::Result;
use crate::runtime::Runtime;

/// Blocking device-to-host copy backing `DeviceSystem for Cuda`.
pub(crate) fn copy_dtoh_sync(src: u64, dst: &mut [u8]) -> Result<()> {
    CudaRuntime::copy_from_device(src, dst, &CudaDevice::default())
}

/// Blocking host-to-device copy backing `DeviceSystem for Cuda`.
pub(crate) fn copy_htod_sync(src: &[u8], dst: u64) -> Result<()> {
    CudaRuntime::copy_to_device(src, dst, &CudaDevice::default())
}
