use std::fmt::Debug;
use std::ops::Add;

/// A numeric path cost.
///
/// `INFINITY` marks "no path". For floating-point costs it is the IEEE
/// infinity; integer costs use their maximum value as a sentinel. Searches
/// accumulate with [`add_saturating`](Self::add_saturating), so an integer
/// path whose cost would reach `MAX` counts as unreachable instead of
/// overflowing.
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + Debug {
    const ZERO: Self;
    const INFINITY: Self;

    /// `self + other`, clamped to `INFINITY`.
    fn add_saturating(self, other: Self) -> Self;

    /// Whether this cost denotes a reachable path.
    #[inline]
    fn is_reachable(self) -> bool {
        self < Self::INFINITY
    }
}

macro_rules! float_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            const ZERO: Self = 0.0;
            const INFINITY: Self = <$t>::INFINITY;

            #[inline]
            fn add_saturating(self, other: Self) -> Self {
                self + other
            }
        }
    )*};
}

macro_rules! int_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            const ZERO: Self = 0;
            const INFINITY: Self = <$t>::MAX;

            #[inline]
            fn add_saturating(self, other: Self) -> Self {
                <$t>::saturating_add(self, other)
            }
        }
    )*};
}

float_cost!(f32, f64);
int_cost!(i32, i64, u32, u64, usize);
