//! Backend tags: compile-time identities of memory/execution domains

use core::fmt::Debug;

/// Closed set of memory/execution domains known at build time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetSystem {
    /// General-purpose host processor and its memory
    Host,
    /// NVIDIA CUDA device and its global memory
    Cuda,
}

impl TargetSystem {
    /// Human-readable name of this system
    pub const fn name(self) -> &'static str {
        match self {
            TargetSystem::Host => "host",
            TargetSystem::Cuda => "cuda",
        }
    }
}

/// Type-level backend tag
///
/// Views and atomics are generic over a `System` so that the access
/// implementation is chosen during monomorphization. Implementors are
/// zero-sized markers.
pub trait System: Copy + Default + Debug + Send + Sync + 'static {
    /// The domain this tag stands for
    const TARGET: TargetSystem;

    /// Human-readable name, used in diagnostics
    const NAME: &'static str = Self::TARGET.name();
}

/// Returns true when two tags name the same memory domain
#[inline]
pub fn same_system<A: System, B: System>() -> bool {
    A::TARGET == B::TARGET
}

/// Tag for host memory
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Host;

impl System for Host {
    const TARGET: TargetSystem = TargetSystem::Host;
}

/// Tag for CUDA device memory
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cuda;

impl System for Cuda {
    const TARGET: TargetSystem = TargetSystem::Cuda;
}

/// A system whose memory is not addressable from host code
///
/// On host builds, implementors supply the blocking cross-domain copy that
/// accelerator views use to read and write elements. On device builds the
/// trait is a marker: device code dereferences its own memory directly.
///
/// Both copies must block until the transfer has completed and must either
/// move every byte or fail; partial transfers are never reported.
pub trait DeviceSystem: System {
    /// Copy `dst.len()` bytes from device address `src` into host memory
    #[cfg(not(target_arch = "nvptx64"))]
    fn copy_to_host(src: u64, dst: &mut [u8]) -> crate::error::Result<()>;

    /// Copy `src` into device memory starting at address `dst`
    #[cfg(not(target_arch = "nvptx64"))]
    fn copy_from_host(src: &[u8], dst: u64) -> crate::error::Result<()>;
}

impl DeviceSystem for Cuda {
    #[cfg(all(feature = "cuda", not(target_arch = "nvptx64")))]
    fn copy_to_host(src: u64, dst: &mut [u8]) -> crate::error::Result<()> {
        crate::runtime::cuda::copy_dtoh_sync(src, dst)
    }

    #[cfg(all(feature = "cuda", not(target_arch = "nvptx64")))]
    fn copy_from_host(src: &[u8], dst: u64) -> crate::error::Result<()> {
        crate::runtime::cuda::copy_htod_sync(src, dst)
    }

    #[cfg(all(not(feature = "cuda"), not(target_arch = "nvptx64")))]
    fn copy_to_host(_src: u64, _dst: &mut [u8]) -> crate::error::Result<()> {
        Err(crate::error::Error::backend(
            "cuda support not compiled in (enable the `cuda` feature)",
        ))
    }

    #[cfg(all(not(feature = "cuda"), not(target_arch = "nvptx64")))]
    fn copy_from_host(_src: &[u8], _dst: u64) -> crate::error::Result<()> {
        Err(crate::error::Error::backend(
            "cuda support not compiled in (enable the `cuda` feature)",
        ))
    }
}
