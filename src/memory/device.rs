//! Element access for accelerator-memory views
//!
//! An accelerator view has two accessor sets, chosen by the compilation
//! target of the *calling* code rather than by anything stored in the view:
//!
//! - **Device code** (`target_arch = "nvptx64"`): the storage is in the
//!   caller's own memory domain, so `at`, `front`, `back` and indexing return
//!   references exactly like a host view.
//! - **Host code** (every other target): device addresses cannot be
//!   dereferenced. `at` and `get` copy one element across the memory
//!   boundary into a host temporary and return it by value. Each call is a
//!   blocking transfer, so element-wise loops over a device view are slow;
//!   use [`TaggedPointer::copy_to_host`] / [`TaggedPointer::to_vec`] for bulk
//!   reads. `front` and `back` are absent here.

use super::index::IndexType;
use super::pointer::TaggedPointer;
use crate::runtime::{Cuda, DeviceSystem};

/// View over CUDA device memory
pub type CudaPointer<T, I = u32> = TaggedPointer<Cuda, T, I>;

#[cfg(not(target_arch = "nvptx64"))]
mod host_personality {
    use super::*;
    use crate::error::{Error, Result};
    use bytemuck::Pod;

    impl<S: DeviceSystem, T: Pod, I: IndexType> TaggedPointer<S, T, I> {
        /// Copy the element at `pos` to the host, unchecked
        ///
        /// Exactly `size_of::<T>()` bytes are transferred from
        /// `data() + pos` in device memory. Blocks until the transfer is
        /// complete; this is one round trip per call.
        ///
        /// # Safety
        ///
        /// `pos < size()`.
        pub unsafe fn at(&self, pos: I) -> Result<T> {
            let src = self.storage.wrapping_add(pos.as_usize()) as usize as u64;
            let mut value = T::zeroed();
            tracing::trace!(
                system = S::NAME,
                pos = pos.as_usize(),
                bytes = core::mem::size_of::<T>(),
                "device element read"
            );
            S::copy_to_host(src, bytemuck::bytes_of_mut(&mut value))?;
            Ok(value)
        }

        /// Copy the element at `pos` to the host, checked
        pub fn get(&self, pos: I) -> Result<T> {
            if pos.as_usize() >= self.len() {
                return Err(Error::IndexOutOfBounds {
                    index: pos.as_usize(),
                    size: self.len(),
                });
            }
            // SAFETY: bounds checked above.
            unsafe { self.at(pos) }
        }

        /// Copy the whole view into `dst`
        ///
        /// `dst` must have exactly `size()` elements.
        pub fn copy_to_host(&self, dst: &mut [T]) -> Result<()> {
            if dst.len() != self.len() {
                return Err(Error::length_mismatch(self.len(), dst.len()));
            }
            if self.is_empty() {
                return Ok(());
            }
            tracing::debug!(
                system = S::NAME,
                bytes = self.size_in_bytes(),
                "device to host bulk copy"
            );
            S::copy_to_host(self.device_ptr(), bytemuck::cast_slice_mut(dst))
        }

        /// Copy the whole view into a new host vector
        pub fn to_vec(&self) -> Result<Vec<T>> {
            let mut out = vec![T::zeroed(); self.len()];
            self.copy_to_host(&mut out)?;
            Ok(out)
        }

        /// Overwrite the whole view from `src`
        ///
        /// `src` must have exactly `size()` elements.
        pub fn copy_from_host(&mut self, src: &[T]) -> Result<()> {
            if src.len() != self.len() {
                return Err(Error::length_mismatch(self.len(), src.len()));
            }
            if self.is_empty() {
                return Ok(());
            }
            tracing::debug!(
                system = S::NAME,
                bytes = self.size_in_bytes(),
                "host to device bulk copy"
            );
            S::copy_from_host(bytemuck::cast_slice(src), self.device_ptr())
        }
    }
}

#[cfg(target_arch = "nvptx64")]
mod device_personality {
    use super::*;

    impl<S: DeviceSystem, T, I: IndexType> TaggedPointer<S, T, I> {
        reference_accessors!(S);
    }

    impl_checked_index!([S: DeviceSystem, T, I: IndexType] TaggedPointer<S, T, I>);
}
