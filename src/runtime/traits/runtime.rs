//! Core trait for memory-owning backends

/// Core trait for memory-owning backends
///
/// `Runtime` is the allocator and transfer collaborator that produces the
/// raw `(address, length)` pairs views wrap. It uses static dispatch via
/// generics; every runtime names the backend tag its memory carries.
///
/// # Associated Types
///
/// - `System`: Backend tag attached to memory this runtime allocates
/// - `Device`: Identifies a specific compute unit (e.g., GPU 0, GPU 1)
///
/// # Example
///
/// ```ignore
/// let device = CpuRuntime::default_device();
/// let ptr = CpuRuntime::allocate(1024, &device)?;
/// let view: TaggedPointer<Host, f32> = unsafe { TaggedPointer::from_device_ptr(ptr, 256) };
/// // ... use memory ...
/// CpuRuntime::deallocate(ptr, 1024, &device);
/// ```
pub trait Runtime: Clone + Send + Sync + 'static {
    /// Backend tag of memory produced by this runtime
    type System: super::System;

    /// Device identifier type
    type Device: super::Device;

    /// Human-readable name of this runtime
    fn name() -> &'static str;

    /// Allocate device memory
    ///
    /// Returns a device pointer (u64) that can be wrapped by a view.
    /// Returns `Err(OutOfMemory)` if allocation fails. Zero-sized requests
    /// return the null address.
    fn allocate(size_bytes: usize, device: &Self::Device) -> crate::error::Result<u64>;

    /// Deallocate device memory
    fn deallocate(ptr: u64, size_bytes: usize, device: &Self::Device);

    /// Copy data from host to device
    ///
    /// Blocks until the transfer has completed.
    fn copy_to_device(src: &[u8], dst: u64, device: &Self::Device) -> crate::error::Result<()>;

    /// Copy data from device to host
    ///
    /// Blocks until the transfer has completed.
    fn copy_from_device(
        src: u64,
        dst: &mut [u8],
        device: &Self::Device,
    ) -> crate::error::Result<()>;

    /// Get the default device
    fn default_device() -> Self::Device;
}
