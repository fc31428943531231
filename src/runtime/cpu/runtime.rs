//! CPU runtime implementation

use super::device::CpuDevice;
use crate::error::{Error, Result};
use crate::runtime::{Host, Runtime};
use std::alloc::{Layout as AllocLayout, alloc_zeroed, dealloc};

/// Alignment of every host allocation.
///
/// Matches the widest SIMD register (AVX-512) and the strictest host atomic.
const HOST_ALIGN: usize = 64;

/// CPU compute runtime
///
/// Memory is allocated zeroed on the heap using the system allocator and is
/// tagged `Host`.
#[derive(Clone, Debug, Default)]
pub struct CpuRuntime;

impl Runtime for CpuRuntime {
    type System = Host;
    type Device = CpuDevice;

    fn name() -> &'static str {
        "cpu"
    }

    fn allocate(size_bytes: usize, _device: &Self::Device) -> Result<u64> {
        if size_bytes == 0 {
            return Ok(0);
        }

        let layout = AllocLayout::from_size_align(size_bytes, HOST_ALIGN)
            .map_err(|_| Error::OutOfMemory { size: size_bytes })?;

        // SAFETY: layout has non-zero size.
        let ptr = unsafe { alloc_zeroed(layout) };

        if ptr.is_null() {
            return Err(Error::OutOfMemory { size: size_bytes });
        }

        Ok(ptr as u64)
    }

    fn deallocate(ptr: u64, size_bytes: usize, _device: &Self::Device) {
        if ptr == 0 || size_bytes == 0 {
            return;
        }

        let Ok(layout) = AllocLayout::from_size_align(size_bytes, HOST_ALIGN) else {
            tracing::warn!(ptr, size_bytes, "cpu deallocate with invalid layout, leaking");
            return;
        };

        // SAFETY: ptr was returned by `allocate` with the same layout.
        unsafe {
            dealloc(ptr as *mut u8, layout);
        }
    }

    fn copy_to_device(src: &[u8], dst: u64, _device: &Self::Device) -> Result<()> {
        if src.is_empty() || dst == 0 {
            return Ok(());
        }

        // SAFETY: the caller guarantees dst is valid for src.len() bytes.
        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), dst as *mut u8, src.len());
        }
        Ok(())
    }

    fn copy_from_device(src: u64, dst: &mut [u8], _device: &Self::Device) -> Result<()> {
        if dst.is_empty() || src == 0 {
            return Ok(());
        }

        // SAFETY: the caller guarantees src is valid for dst.len() bytes.
        unsafe {
            std::ptr::copy_nonoverlapping(src as *const u8, dst.as_mut_ptr(), dst.len());
        }
        Ok(())
    }

    fn default_device() -> Self::Device {
        CpuDevice::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_is_aligned_and_zeroed() {
        let device = CpuRuntime::default_device();
        let ptr = CpuRuntime::allocate(256, &device).unwrap();
        assert_ne!(ptr, 0);
        assert_eq!(ptr as usize % HOST_ALIGN, 0);

        let mut out = [0xffu8; 256];
        CpuRuntime::copy_from_device(ptr, &mut out, &device).unwrap();
        assert!(out.iter().all(|&b| b == 0));

        CpuRuntime::deallocate(ptr, 256, &device);
    }

    #[test]
    fn test_zero_allocation_is_null() {
        let device = CpuRuntime::default_device();
        assert_eq!(CpuRuntime::allocate(0, &device).unwrap(), 0);
        CpuRuntime::deallocate(0, 0, &device);
    }
}
