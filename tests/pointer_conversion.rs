//! Conversion policy between views of the same and of different backends

mod common;

use common::{Staged, init_tracing};
use hetmem::prelude::*;

#[test]
fn test_default_view_is_empty() {
    let host: HostPointer<f32> = TaggedPointer::default();
    let cuda: CudaPointer<i64, u64> = TaggedPointer::new();

    assert!(host.data().is_null());
    assert_eq!(host.size(), 0);
    assert!(cuda.data().is_null());
    assert_eq!(cuda.size(), 0);
    assert!(cuda.is_empty());
}

#[test]
fn test_same_backend_conversion_preserves_state() {
    let mut data = [1u32, 2, 3, 4, 5];
    let src: HostPointer<u32> = unsafe { TaggedPointer::from_slice(&mut data) }.unwrap();

    let constructed: HostPointer<u32> = TaggedPointer::convert(&src);
    assert_eq!(constructed.data(), src.data());
    assert_eq!(constructed.size(), src.size());

    let mut assigned: HostPointer<u32> = TaggedPointer::new();
    assigned.assign(&src);
    assert_eq!(assigned.data(), src.data());
    assert_eq!(assigned.size(), 5);

    let device: CudaPointer<u32> = unsafe { TaggedPointer::from_device_ptr(0x7f00_0000, 9) };
    let device_copy: CudaPointer<u32> = TaggedPointer::convert(&device);
    assert_eq!(device_copy.device_ptr(), 0x7f00_0000);
    assert_eq!(device_copy.size(), 9);
}

#[test]
fn test_cross_backend_conversion_invalidates() {
    init_tracing();

    let mut data = [1.0f64; 64];
    let host: HostPointer<f64> = unsafe { TaggedPointer::from_slice(&mut data) }.unwrap();

    let to_device: CudaPointer<f64> = TaggedPointer::convert(&host);
    assert!(to_device.data().is_null());
    assert_eq!(to_device.size(), 0);

    let device: CudaPointer<f64> = unsafe { TaggedPointer::from_device_ptr(0x1000, 3) };
    let mut to_host: HostPointer<f64> = TaggedPointer::convert(&device);
    assert!(to_host.data().is_null());
    assert_eq!(to_host.size(), 0);

    // assignment over a populated view also clears it
    let mut populated = host;
    populated.assign(&device);
    assert!(populated.data().is_null());
    assert_eq!(populated.size(), 0);

    to_host.assign(&host);
    assert_eq!(to_host.size(), 64);
}

#[test]
fn test_conversion_compares_target_not_tag_type() {
    // Staged shares the Cuda target, so its views convert losslessly.
    let staged: TaggedPointer<Staged, u8> = unsafe { TaggedPointer::from_device_ptr(0x2000, 4) };
    let cuda: CudaPointer<u8> = TaggedPointer::convert(&staged);
    assert_eq!(cuda.device_ptr(), 0x2000);
    assert_eq!(cuda.size(), 4);

    let host: HostPointer<u8> = TaggedPointer::convert(&staged);
    assert!(host.is_empty());
}

#[test]
fn test_host_array_scenario() {
    let mut data = [10i32, 20, 30];
    let view: HostPointer<i32> = unsafe { TaggedPointer::from_slice(&mut data) }.unwrap();

    assert_eq!(unsafe { *view.front() }, 10);
    assert_eq!(unsafe { *view.back() }, 30);
    assert_eq!(view.size(), 3);

    let device: CudaPointer<i32> = TaggedPointer::convert(&view);
    assert!(device.data().is_null());
    assert_eq!(device.size(), 0);
}

/// Minimal external container exposing tagged storage
struct PinnedBuffer {
    data: Vec<u16>,
}

// SAFETY: `data` addresses `len` initialized elements owned by the buffer.
unsafe impl TaggedMemory<u16, u32> for PinnedBuffer {
    type System = Host;

    fn data(&self) -> *mut u16 {
        self.data.as_ptr() as *mut u16
    }

    fn size(&self) -> u32 {
        self.data.len() as u32
    }
}

#[test]
fn test_conversion_from_external_container() {
    let buffer = PinnedBuffer {
        data: vec![3, 1, 4, 1, 5],
    };

    let host: HostPointer<u16> = TaggedPointer::from_view(&buffer);
    assert_eq!(host.size(), 5);
    assert_eq!(host.as_slice(), &[3, 1, 4, 1, 5]);

    let device: CudaPointer<u16> = TaggedPointer::from_view(&buffer);
    assert!(device.is_empty());
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_length_overflow_on_narrow_index() {
    // zero-sized elements give a huge slice without allocating
    let units: &mut [()] = unsafe {
        std::slice::from_raw_parts_mut(std::ptr::NonNull::dangling().as_ptr(), u32::MAX as usize + 1)
    };
    let result: Result<HostPointer<()>> = unsafe { TaggedPointer::from_slice(units) };
    assert!(matches!(result, Err(Error::LengthOverflow { index_type: "u32", .. })));

    let wide: HostPointer<(), u64> = unsafe { TaggedPointer::from_slice(units) }.unwrap();
    assert_eq!(wide.size(), u32::MAX as u64 + 1);
}
