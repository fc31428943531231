//! CUDA runtime implementation

use super::cache::{
    get_or_create_handle, is_cuda_context_valid, log_cuda_memory_error, try_get_cached_stream,
};
use super::device::CudaDevice;
use crate::error::{Error, Result};
use crate::runtime::{Cuda, Runtime};
use cudarc::driver::sys::CUresult;

/// CUDA Runtime adapter
///
/// Implements the generic Runtime trait for CUDA device memory.
/// Uses cudarc for direct GPU control.
#[derive(Clone, Debug, Default)]
pub struct CudaRuntime;

impl Runtime for CudaRuntime {
    type System = Cuda;
    type Device = CudaDevice;

    fn name() -> &'static str {
        "cuda"
    }

    /// Allocate GPU memory.
    ///
    /// Returns `Err(OutOfMemory)` if CUDA memory allocation fails.
    fn allocate(size_bytes: usize, device: &Self::Device) -> Result<u64> {
        if size_bytes == 0 {
            return Ok(0);
        }

        let handle = get_or_create_handle(device)?;

        unsafe {
            let mut ptr: u64 = 0;
            let result = cudarc::driver::sys::cuMemAllocAsync(
                &mut ptr,
                size_bytes,
                handle.stream.cu_stream(),
            );

            if result == CUresult::CUDA_SUCCESS {
                handle.stream.synchronize()?;
                return Ok(ptr);
            }

            // Pending stream-ordered frees may still hold the memory
            handle.stream.synchronize()?;

            let result = cudarc::driver::sys::cuMemAllocAsync(
                &mut ptr,
                size_bytes,
                handle.stream.cu_stream(),
            );

            if result == CUresult::CUDA_SUCCESS {
                handle.stream.synchronize()?;
                return Ok(ptr);
            }

            Err(Error::OutOfMemory { size: size_bytes })
        }
    }

    fn deallocate(ptr: u64, _size_bytes: usize, device: &Self::Device) {
        if ptr == 0 {
            return;
        }

        unsafe {
            // Memory is reclaimed by the driver once the context is gone
            if !is_cuda_context_valid() {
                return;
            }

            let result = if let Some(stream) = try_get_cached_stream(device.index) {
                cudarc::driver::sys::cuMemFreeAsync(ptr, stream)
            } else {
                cudarc::driver::sys::cuMemFree_v2(ptr)
            };

            if result != CUresult::CUDA_SUCCESS
                && result != CUresult::CUDA_ERROR_ILLEGAL_ADDRESS
            {
                log_cuda_memory_error("cuMemFree", ptr, result);
            }
        }
    }

    /// Copy data from host to device.
    ///
    /// Blocks until the data is resident on the device.
    fn copy_to_device(src: &[u8], dst: u64, device: &Self::Device) -> Result<()> {
        if src.is_empty() || dst == 0 {
            return Ok(());
        }

        let handle = get_or_create_handle(device)?;

        unsafe {
            let result = cudarc::driver::sys::cuMemcpyHtoDAsync_v2(
                dst,
                src.as_ptr() as *const std::ffi::c_void,
                src.len(),
                handle.stream.cu_stream(),
            );

            if result != CUresult::CUDA_SUCCESS {
                return Err(Error::backend(format!(
                    "cuda host-to-device copy failed: {} bytes ({:?})",
                    src.len(),
                    result
                )));
            }
        }

        handle.stream.synchronize()?;
        Ok(())
    }

    /// Copy data from device to host.
    ///
    /// Blocks until the data is available on the host.
    fn copy_from_device(src: u64, dst: &mut [u8], device: &Self::Device) -> Result<()> {
        if dst.is_empty() || src == 0 {
            return Ok(());
        }

        let handle = get_or_create_handle(device)?;

        unsafe {
            let result = cudarc::driver::sys::cuMemcpyDtoHAsync_v2(
                dst.as_mut_ptr() as *mut std::ffi::c_void,
                src,
                dst.len(),
                handle.stream.cu_stream(),
            );

            if result != CUresult::CUDA_SUCCESS {
                return Err(Error::backend(format!(
                    "cuda device-to-host copy failed: {} bytes ({:?})",
                    dst.len(),
                    result
                )));
            }
        }

        handle.stream.synchronize()?;
        Ok(())
    }

    fn default_device() -> Self::Device {
        CudaDevice::new(0)
    }
}

/// Check if CUDA is available on this system
pub fn is_cuda_available() -> bool {
    std::panic::catch_unwind(|| get_or_create_handle(&CudaDevice::new(0)).is_ok())
        .unwrap_or(false)
}
