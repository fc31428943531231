//! Index and size types of a view

use core::fmt::Debug;
use core::hash::Hash;

/// Unsigned integer used for a view's length and element positions
///
/// Narrow index types keep views small when they are passed by value into
/// device kernels. Widening to `usize` is lossless on every supported
/// target; narrowing from `usize` is checked.
pub trait IndexType: Copy + Default + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Name of the type, for diagnostics
    const NAME: &'static str;

    /// The zero index
    const ZERO: Self;

    /// Widen to `usize`
    fn as_usize(self) -> usize;

    /// Narrow from `usize`, returning `None` if `n` does not fit
    fn from_usize(n: usize) -> Option<Self>;
}

macro_rules! impl_index_type {
    ($($t:ty),* $(,)?) => {
        $(
            impl IndexType for $t {
                const NAME: &'static str = stringify!($t);
                const ZERO: Self = 0;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(n: usize) -> Option<Self> {
                    <$t>::try_from(n).ok()
                }
            }
        )*
    };
}

impl_index_type!(u32, u64, usize);
