//! TaggedPointer: backend-tagged, non-owning view over contiguous elements

use super::cursor::Cursor;
use super::index::IndexType;
use crate::runtime::{System, TargetSystem, same_system};
use core::fmt;
use core::marker::PhantomData;

/// Non-owning view over `len` contiguous `T`s living in system `S`
///
/// A view is an address and a length. It never allocates, frees or counts
/// references; the storage belongs to an external allocator (usually a
/// [`Runtime`](crate::runtime::Runtime)). Views are `Copy` and may alias
/// each other freely.
///
/// The backend tag decides at compile time which element accessors exist:
/// host views return references (see `memory::host`), accelerator views
/// return references in device code and copies in host code (see
/// `memory::device`).
///
/// # Invariants
///
/// - `data().is_null()` implies `size() == 0`
/// - valid positions are `[0, size())`
pub struct TaggedPointer<S: System, T, I: IndexType = u32> {
    pub(crate) storage: *mut T,
    pub(crate) storage_size: I,
    _system: PhantomData<S>,
}

/// Anything that exposes backend-tagged contiguous storage
///
/// Views can be converted from any `TaggedMemory`, with the same
/// cross-system policy as view-to-view conversion.
///
/// # Safety
///
/// Implementors vouch for the storage the way callers of
/// [`TaggedPointer::from_raw_parts`] do: unless `data()` is null, it must
/// address `size()` consecutive, initialized, aligned `T`s in the memory of
/// `Self::System`, valid for as long as any view built from it is used.
/// A null `data()` is always accepted and yields an empty view.
pub unsafe trait TaggedMemory<T, I: IndexType> {
    /// Backend tag of the storage
    type System: System;

    /// Address of the first element
    fn data(&self) -> *mut T;

    /// Number of elements
    fn size(&self) -> I;
}

impl<S: System, T, I: IndexType> TaggedPointer<S, T, I> {
    /// Backend tag of this view type
    pub const SYSTEM: TargetSystem = S::TARGET;

    /// Empty view: null address, zero length
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: core::ptr::null_mut(),
            storage_size: I::ZERO,
            _system: PhantomData,
        }
    }

    /// Wrap externally owned storage
    ///
    /// A null `ptr` always yields an empty view, whatever `len` says.
    ///
    /// # Safety
    ///
    /// - `ptr` must address `len` consecutive, initialized `T`s in the memory
    ///   of system `S`, aligned for `T`
    /// - the storage must outlive every use of this view and of its copies
    /// - element accesses through aliasing views must follow Rust's aliasing
    ///   rules: no element may be written while another reference to it is live
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut T, len: I) -> Self {
        if ptr.is_null() {
            return Self::new();
        }
        Self {
            storage: ptr,
            storage_size: len,
            _system: PhantomData,
        }
    }

    /// Wrap a device pointer produced by a runtime allocator
    ///
    /// # Safety
    ///
    /// Same contract as [`TaggedPointer::from_raw_parts`].
    #[inline]
    pub unsafe fn from_device_ptr(ptr: u64, len: I) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_raw_parts(ptr as usize as *mut T, len) }
    }

    /// Build a view from a view of any backend
    ///
    /// When `S2` names the same system as `S`, address and length are copied
    /// verbatim. Otherwise the result is an empty view: an address from a
    /// foreign memory domain is meaningless here and is dropped rather than
    /// reinterpreted. Never fails.
    #[inline]
    pub fn convert<S2: System>(other: &TaggedPointer<S2, T, I>) -> Self {
        Self::from_view(other)
    }

    /// Build a view from any tagged storage, with the policy of
    /// [`TaggedPointer::convert`]
    pub fn from_view<V: TaggedMemory<T, I>>(other: &V) -> Self {
        if same_system::<S, V::System>() {
            // SAFETY: the storage contract is part of `TaggedMemory`.
            return unsafe { Self::from_raw_parts(other.data(), other.size()) };
        }

        host_event!(
            trace,
            from = <V::System as System>::NAME,
            to = S::NAME,
            len = other.size().as_usize(),
            "cross-system view conversion, result is empty"
        );
        Self::new()
    }

    /// Replace this view with a conversion of `other`
    ///
    /// Same policy as [`TaggedPointer::convert`].
    #[inline]
    pub fn assign<S2: System>(&mut self, other: &TaggedPointer<S2, T, I>) -> &mut Self {
        *self = Self::convert(other);
        self
    }

    /// Cursor at the first element
    #[inline]
    pub fn begin(&self) -> Cursor<S, T> {
        Cursor::new(self.storage)
    }

    /// Cursor one past the last element
    #[inline]
    pub fn end(&self) -> Cursor<S, T> {
        Cursor::new(self.storage.wrapping_add(self.len()))
    }

    /// Read-only flavour of [`TaggedPointer::begin`]
    #[inline]
    pub fn cbegin(&self) -> Cursor<S, T> {
        self.begin()
    }

    /// Read-only flavour of [`TaggedPointer::end`]
    #[inline]
    pub fn cend(&self) -> Cursor<S, T> {
        self.end()
    }

    /// Number of elements, in the view's index type
    #[inline]
    pub fn size(&self) -> I {
        self.storage_size
    }

    /// Number of elements as `usize`
    #[inline]
    pub fn len(&self) -> usize {
        self.storage_size.as_usize()
    }

    /// True when the view has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage_size == I::ZERO
    }

    /// Address of the first element (null for an empty default view)
    #[inline]
    pub fn data(&self) -> *mut T {
        self.storage
    }

    /// Address as a device pointer, as taken by runtime transfers
    #[inline]
    pub fn device_ptr(&self) -> u64 {
        self.storage as usize as u64
    }

    /// Size of the viewed storage in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.len() * core::mem::size_of::<T>()
    }
}

// SAFETY: a view's storage was vouched for when the view was constructed.
unsafe impl<S: System, T, I: IndexType> TaggedMemory<T, I> for TaggedPointer<S, T, I> {
    type System = S;

    #[inline]
    fn data(&self) -> *mut T {
        self.storage
    }

    #[inline]
    fn size(&self) -> I {
        self.storage_size
    }
}

impl<S: System, T, I: IndexType> Default for TaggedPointer<S, T, I> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S: System, T, I: IndexType> Clone for TaggedPointer<S, T, I> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: System, T, I: IndexType> Copy for TaggedPointer<S, T, I> {}

impl<S: System, T, I: IndexType> fmt::Debug for TaggedPointer<S, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedPointer")
            .field("system", &S::NAME)
            .field("data", &self.storage)
            .field("size", &self.storage_size)
            .finish()
    }
}

// SAFETY: the view behaves like `&mut [T]` shared under the construction
// contract, so it may cross threads when `T` may be both sent and shared.
unsafe impl<S: System, T: Send + Sync, I: IndexType> Send for TaggedPointer<S, T, I> {}
// SAFETY: as above.
unsafe impl<S: System, T: Send + Sync, I: IndexType> Sync for TaggedPointer<S, T, I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{Cuda, Host};

    #[test]
    fn test_default_is_empty() {
        let view: TaggedPointer<Host, f32> = TaggedPointer::default();
        assert!(view.data().is_null());
        assert_eq!(view.size(), 0);
        assert!(view.is_empty());
        assert_eq!(view.begin(), view.end());
    }

    #[test]
    fn test_null_pointer_forces_empty() {
        let view: TaggedPointer<Cuda, u8, u64> =
            unsafe { TaggedPointer::from_raw_parts(core::ptr::null_mut(), 12) };
        assert!(view.is_empty());
    }

    #[test]
    fn test_same_system_conversion_copies() {
        let view: TaggedPointer<Cuda, f64> =
            unsafe { TaggedPointer::from_device_ptr(0xdead_0000, 16) };
        let copy: TaggedPointer<Cuda, f64> = TaggedPointer::convert(&view);
        assert_eq!(copy.data(), view.data());
        assert_eq!(copy.size(), 16);
        assert_eq!(copy.size_in_bytes(), 128);
    }

    #[test]
    fn test_cross_system_conversion_is_empty() {
        let view: TaggedPointer<Cuda, f64> =
            unsafe { TaggedPointer::from_device_ptr(0xdead_0000, 16) };
        let mut host: TaggedPointer<Host, f64> = TaggedPointer::convert(&view);
        assert!(host.data().is_null());
        assert_eq!(host.size(), 0);

        host.assign(&view);
        assert!(host.is_empty());
        assert_eq!(TaggedPointer::<Host, f64>::SYSTEM, TargetSystem::Host);
    }

    struct Detached;

    // SAFETY: the address is null, which always yields an empty view.
    unsafe impl TaggedMemory<u8, u32> for Detached {
        type System = Host;

        fn data(&self) -> *mut u8 {
            core::ptr::null_mut()
        }

        fn size(&self) -> u32 {
            5
        }
    }

    #[test]
    fn test_null_source_converts_to_empty() {
        let view: TaggedPointer<Host, u8> = TaggedPointer::from_view(&Detached);
        assert!(view.data().is_null());
        assert_eq!(view.size(), 0);
        assert!(view.as_slice().is_empty());
        assert_eq!(view.end().distance_from(view.begin()), 0);
    }

    #[test]
    fn test_end_cursor_spans_length() {
        let view: TaggedPointer<Cuda, u32, usize> =
            unsafe { TaggedPointer::from_device_ptr(0x4000, 5) };
        assert_eq!(view.end().distance_from(view.begin()), 5);
        assert_eq!(view.cend(), view.end());
    }
}
