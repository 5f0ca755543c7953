use std::{cmp::Ordering, ops::Add};

mod ordered_float;

use ordered_float::OrderedFloat;

/// Numeric edge weight supported by the algorithms in this crate.
///
/// The trait requires only what the algorithms need: comparison, addition,
/// a zero and a maximum representable value. The maximum value serves as the
/// "infinity" sentinel carried by unreachable vertices in distance vectors.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    /// Totally ordered proxy of the weight, used in ordered collections such
    /// as the priority queue of Dijkstra's algorithm. For integers this is
    /// the type itself, floats are wrapped to get a total order.
    type Ord: Ord + From<Self> + Into<Self>;

    /// Additive identity.
    fn zero() -> Self;

    /// Maximum representable value, used as the "unreachable" sentinel.
    fn inf() -> Self;

    /// Returns `true` if the type cannot represent negative values.
    ///
    /// The implementation is a constant boolean in practice, which lets
    /// negativity checks be eliminated at compile time for unsigned types.
    fn is_unsigned() -> bool;
}

/// Pair of an arbitrary value and a weight, compared by the weight only.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
