//! Host atomics

use crate::runtime::Host;
use core::sync::atomic::{AtomicI32, AtomicI64, AtomicU32, AtomicU64};

super::impl_native_atomic_add!(Host;
    i32 => AtomicI32,
    u32 => AtomicU32,
    i64 => AtomicI64,
    u64 => AtomicU64,
);

super::impl_cas_atomic_add!(Host;
    f32 => u32, AtomicU32,
    f64 => u64, AtomicU64,
);
