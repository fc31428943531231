//! Global context cache for CUDA runtime

use super::device::CudaDevice;
use crate::error::Result;
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Context and stream used for every transfer on one device
#[derive(Clone)]
pub(super) struct CudaHandle {
    pub(super) context: Arc<CudaContext>,
    pub(super) stream: Arc<CudaStream>,
}

impl CudaHandle {
    fn new(device: &CudaDevice) -> Result<Self> {
        let context = CudaContext::new(device.index)?;
        context.bind_to_thread()?;
        let stream = context.new_stream()?;
        Ok(Self { context, stream })
    }

    /// Make this handle's context current on the calling thread.
    pub(super) fn bind(&self) -> Result<()> {
        self.context.bind_to_thread()?;
        Ok(())
    }
}

/// Global handle cache: device index -> cached CudaHandle
///
/// Creating a context per transfer would dominate the cost of single-element
/// reads, so one context and stream are kept per device.
static HANDLE_CACHE: OnceLock<Mutex<HashMap<usize, CudaHandle>>> = OnceLock::new();

/// Check if the CUDA context on the current thread is valid.
///
/// # Safety
///
/// This function calls CUDA driver API directly. It is safe to call at any time
/// but the result is only valid for the current thread's context state.
#[inline]
pub(super) unsafe fn is_cuda_context_valid() -> bool {
    let mut ctx: cudarc::driver::sys::CUcontext = std::ptr::null_mut();
    // SAFETY: cuCtxGetCurrent is safe to call at any time and writes to the provided pointer.
    let result = unsafe { cudarc::driver::sys::cuCtxGetCurrent(&mut ctx) };
    result == cudarc::driver::sys::CUresult::CUDA_SUCCESS && !ctx.is_null()
}

/// Lock the handle cache, recovering from a poisoned mutex.
///
/// Cache operations are idempotent, so a panic while holding the lock
/// cannot leave it inconsistent.
#[inline]
fn lock_handle_cache(
    cache: &Mutex<HashMap<usize, CudaHandle>>,
) -> MutexGuard<'_, HashMap<usize, CudaHandle>> {
    cache.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Get or create the cached handle for a device, bound to the calling thread.
pub(super) fn get_or_create_handle(device: &CudaDevice) -> Result<CudaHandle> {
    let cache = HANDLE_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache_guard = lock_handle_cache(cache);

    if let Some(handle) = cache_guard.get(&device.index) {
        let handle = handle.clone();
        drop(cache_guard);
        handle.bind()?;
        return Ok(handle);
    }

    let handle = CudaHandle::new(device)?;
    tracing::debug!(device = device.index, "created cuda context");
    cache_guard.insert(device.index, handle.clone());

    Ok(handle)
}

/// Try to get the stream from a cached handle for a device.
///
/// Returns `None` if no handle is cached yet.
#[inline]
pub(super) fn try_get_cached_stream(device_index: usize) -> Option<cudarc::driver::sys::CUstream> {
    let cache = HANDLE_CACHE.get()?;
    let guard = lock_handle_cache(cache);
    guard
        .get(&device_index)
        .map(|handle| handle.stream.cu_stream())
}

/// Log a CUDA memory operation failure.
#[cold]
#[inline(never)]
pub(super) fn log_cuda_memory_error(
    operation: &str,
    ptr: u64,
    result: cudarc::driver::sys::CUresult,
) {
    tracing::warn!(
        operation,
        ptr = %format!("{ptr:#x}"),
        result = ?result,
        "cuda memory operation failed"
    );
}
