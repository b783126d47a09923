use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::{NativeFloat, Point};

/// Point with dimensions of constant generic size N and generic float
/// type T, implemented as a newtype over `[T; N]`.
/// This type only interacts with the library through the [`Point`]
/// trait, so you are free to use your own point/coord/vec structure
/// instead by implementing the (small) trait.
#[derive(Debug, Copy, Clone)]
pub struct PointN<T, const N: usize>([T; N]);

impl<T, const N: usize> PointN<T, N> {
    pub fn new(array: [T; N]) -> Self {
        PointN(array)
    }
}

/// Initialize with the Default value for the underlying type
impl<T: Default + Copy, const N: usize> Default for PointN<T, N> {
    fn default() -> Self {
        PointN([T::default(); N])
    }
}

impl<T, const N: usize> PartialEq for PointN<T, N>
where
    T: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        for i in 0..N {
            if self.0[i] != other.0[i] {
                return false;
            }
        }
        true
    }
}

impl<T, const N: usize> Add for PointN<T, N>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] + other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Sub for PointN<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] - other.0[i];
        }
        res
    }
}

impl<T, const N: usize, U> Mul<U> for PointN<T, N>
where
    // The multiplication is done by multiplying T * U => T; the trait
    // bound on T specifies this as the mul operator uses the first
    // operand as self and the second as rhs.
    T: Mul<U, Output = T> + Copy,
    U: Copy,
{
    type Output = PointN<T, N>;

    fn mul(self, rhs: U) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = res.0[i] * rhs;
        }
        res
    }
}

impl<T, const N: usize> Point for PointN<T, N>
where
    T: Float
        + Default
        + Mul<NativeFloat, Output = T>
        + Into<NativeFloat>,
{
    fn axis(&self, index: usize) -> NativeFloat {
        self.0[index].into()
    }

    fn squared_length(&self) -> NativeFloat {
        let mut sqr_dist: NativeFloat = 0.0;
        for i in 0..N {
            sqr_dist = sqr_dist + (self.0[i] * self.0[i]).into();
        }
        sqr_dist
    }
}
