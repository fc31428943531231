//! Common test utilities
#![allow(dead_code)]

use hetmem::error::Result;
use hetmem::prelude::*;
use std::sync::Once;

/// Install a `tracing` subscriber once per test binary.
///
/// Output is captured by the test harness; set `RUST_LOG=hetmem=trace` to
/// see conversion and transfer events.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Create a CPU device for testing
pub fn create_cpu_device() -> CpuDevice {
    CpuRuntime::default_device()
}

/// Accelerator memory emulated in host memory
///
/// It stands in for CUDA global memory (same target tag), but every
/// transfer is a plain host memcpy, so accelerator-view behaviour from host
/// code can be tested without a GPU.
#[derive(Clone, Copy, Debug, Default)]
pub struct Staged;

impl System for Staged {
    const TARGET: TargetSystem = TargetSystem::Cuda;
    const NAME: &'static str = "staged";
}

impl DeviceSystem for Staged {
    fn copy_to_host(src: u64, dst: &mut [u8]) -> Result<()> {
        // SAFETY: staged device addresses are host addresses.
        unsafe {
            std::ptr::copy_nonoverlapping(src as usize as *const u8, dst.as_mut_ptr(), dst.len());
        }
        Ok(())
    }

    fn copy_from_host(src: &[u8], dst: u64) -> Result<()> {
        // SAFETY: staged device addresses are host addresses.
        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), dst as usize as *mut u8, src.len());
        }
        Ok(())
    }
}

/// Allocator for staged accelerator memory
#[derive(Clone, Debug, Default)]
pub struct StagedRuntime;

impl Runtime for StagedRuntime {
    type System = Staged;
    type Device = CpuDevice;

    fn name() -> &'static str {
        "staged"
    }

    fn allocate(size_bytes: usize, device: &Self::Device) -> Result<u64> {
        CpuRuntime::allocate(size_bytes, device)
    }

    fn deallocate(ptr: u64, size_bytes: usize, device: &Self::Device) {
        CpuRuntime::deallocate(ptr, size_bytes, device)
    }

    fn copy_to_device(src: &[u8], dst: u64, _device: &Self::Device) -> Result<()> {
        Staged::copy_from_host(src, dst)
    }

    fn copy_from_device(src: u64, dst: &mut [u8], _device: &Self::Device) -> Result<()> {
        Staged::copy_to_host(src, dst)
    }

    fn default_device() -> Self::Device {
        CpuDevice::new()
    }
}

/// Create a CUDA device, returning None if CUDA is unavailable
#[cfg(feature = "cuda")]
pub fn create_cuda_device() -> Option<CudaDevice> {
    if !hetmem::runtime::cuda::is_cuda_available() {
        return None;
    }
    Some(CudaDevice::new(0))
}
