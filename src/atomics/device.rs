//! CUDA device atomics
//!
//! Compiled only for `nvptx64`, where core atomics lower to PTX `atom`
//! instructions on global memory. Float add keeps the compare-and-swap form.

use crate::runtime::Cuda;
use core::sync::atomic::{AtomicI32, AtomicI64, AtomicU32, AtomicU64};

super::impl_native_atomic_add!(Cuda;
    i32 => AtomicI32,
    u32 => AtomicU32,
    i64 => AtomicI64,
    u64 => AtomicU64,
);

super::impl_cas_atomic_add!(Cuda;
    f32 => u32, AtomicU32,
    f64 => u64, AtomicU64,
);
