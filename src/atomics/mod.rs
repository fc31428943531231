//! Lock-free atomic add, specialized per backend and element type
//!
//! Every implementation has fetch-and-add semantics: the value at the
//! location becomes `previous + delta` atomically with respect to every other
//! `atomic_add` on that location within the same backend, and `previous` is
//! returned. Calls on one location are linearizable, so no two calls observe
//! the same previous value and no contribution is lost.
//!
//! | Element | Implementation |
//! |---|---|
//! | `i32`, `u32`, `i64`, `u64` | native `fetch_add`, one instruction, wrapping |
//! | `f32`, `f64` | compare-and-swap loop on the bit pattern |
//!
//! Host implementations are available on host builds, CUDA implementations
//! on `nvptx64` builds.

#[cfg(target_arch = "nvptx64")]
mod device;
#[cfg(not(target_arch = "nvptx64"))]
mod host;

use crate::runtime::System;
use core::marker::PhantomData;

/// Element types with an atomic add on backend `S`
pub trait AtomicAdd<S: System>: Copy {
    /// Atomically add `delta` to `*location`, returning the previous value
    ///
    /// # Safety
    ///
    /// - `location` must be non-null, valid for reads and writes, and aligned
    ///   for the atomic of the same width (8 bytes for 64-bit elements)
    /// - the location must live in memory of system `S` and the caller must
    ///   be executing on `S`
    /// - every concurrent access to the location must be atomic
    unsafe fn atomic_add(location: *mut Self, delta: Self) -> Self;
}

/// Atomic operations of backend `S`
///
/// A namespace type: `Atomics::<Host>::add(ptr, 1)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Atomics<S: System>(PhantomData<S>);

impl<S: System> Atomics<S> {
    /// Atomically add `delta` to `*location`, returning the previous value
    ///
    /// # Safety
    ///
    /// See [`AtomicAdd::atomic_add`].
    #[inline]
    pub unsafe fn add<T: AtomicAdd<S>>(location: *mut T, delta: T) -> T {
        // SAFETY: forwarded to the caller.
        unsafe { T::atomic_add(location, delta) }
    }
}

/// Integer add through the hardware fetch-and-add, sequentially consistent
macro_rules! impl_native_atomic_add {
    ($system:ty; $($t:ty => $atomic:ty),* $(,)?) => {
        $(
            impl $crate::atomics::AtomicAdd<$system> for $t {
                #[inline]
                unsafe fn atomic_add(location: *mut $t, delta: $t) -> $t {
                    // SAFETY: validity and alignment are the caller's contract.
                    let atomic = unsafe { <$atomic>::from_ptr(location) };
                    atomic.fetch_add(delta, ::core::sync::atomic::Ordering::SeqCst)
                }
            }
        )*
    };
}

/// Float add as a compare-and-swap loop on the value's bit pattern
///
/// There is no native atomic float add, so the location is treated as an
/// integer of the same width: read the bits, add in floating point, and swap
/// the result in only if the bits are unchanged, otherwise retry with the
/// bits just observed. Comparing bits (not values) keeps NaN and signed zero
/// from confusing the loop.
macro_rules! impl_cas_atomic_add {
    ($system:ty; $($t:ty => $bits:ty, $atomic:ty),* $(,)?) => {
        $(
            impl $crate::atomics::AtomicAdd<$system> for $t {
                #[inline]
                unsafe fn atomic_add(location: *mut $t, delta: $t) -> $t {
                    use ::core::sync::atomic::Ordering;

                    // SAFETY: validity and alignment are the caller's contract;
                    // the float and its bit pattern share size and layout.
                    let atomic = unsafe { <$atomic>::from_ptr(location.cast::<$bits>()) };
                    let mut observed = atomic.load(Ordering::SeqCst);
                    loop {
                        let candidate = (<$t>::from_bits(observed) + delta).to_bits();
                        match atomic.compare_exchange_weak(
                            observed,
                            candidate,
                            Ordering::SeqCst,
                            Ordering::SeqCst,
                        ) {
                            Ok(_) => return <$t>::from_bits(observed),
                            Err(current) => observed = current,
                        }
                    }
                }
            }
        )*
    };
}

pub(crate) use impl_cas_atomic_add;
pub(crate) use impl_native_atomic_add;
