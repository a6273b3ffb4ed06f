use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::collections::contiguous::Array;
use crate::collections::contiguous::array::IntoIter;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A two-dimensional array with dimensions fixed at construction, stored as one flat
/// [`Array<T>`] in row-major order.
///
/// Element `(x, y)` lives at flat offset `x * ydim + y`; nested addressing through
/// [`row`](Grid2::row) and flat iteration through `Deref<Target = [T]>` always agree on which
/// element is which.
pub struct Grid2<T> {
    pub(crate) arr: Array<T>,
    pub(crate) xdim: usize,
    pub(crate) ydim: usize,
}

impl<T: Clone> Grid2<T> {
    /// Creates a new Grid2 with `xdim * ydim` elements, each initialized to a clone of `fill`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new(xdim: usize, ydim: usize, fill: T) -> Grid2<T> {
        Grid2 {
            arr: Array::repeat_item(fill, checked_product(&[xdim, ydim])),
            xdim,
            ydim,
        }
    }
}

impl<T> Grid2<T> {
    /// Returns the total number of elements, `xdim * ydim`.
    pub const fn size(&self) -> usize {
        self.arr.size()
    }

    /// Returns the dimensions as `(xdim, ydim)`. Dimensions never change after construction.
    pub const fn dims(&self) -> (usize, usize) {
        (self.xdim, self.ydim)
    }

    /// Returns row `x` as a slice of `ydim` elements, so that `grid.row(x)[y]` addresses the same
    /// element as `grid[(x, y)]`.
    ///
    /// # Panics
    /// Panics if `x` is out of bounds.
    pub fn row(&self, x: usize) -> &[T] {
        check_axis(x, self.xdim);
        &self.arr[x * self.ydim..(x + 1) * self.ydim]
    }

    /// Returns row `x` as a mutable slice of `ydim` elements.
    ///
    /// # Panics
    /// Panics if `x` is out of bounds.
    pub fn row_mut(&mut self, x: usize) -> &mut [T] {
        check_axis(x, self.xdim);
        let ydim = self.ydim;
        &mut self.arr[x * ydim..(x + 1) * ydim]
    }

    const fn offset(&self, x: usize, y: usize) -> usize {
        x * self.ydim + y
    }
}

impl<T> Index<(usize, usize)> for Grid2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        check_axis(index.0, self.xdim);
        check_axis(index.1, self.ydim);
        &self.arr[self.offset(index.0, index.1)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        check_axis(index.0, self.xdim);
        check_axis(index.1, self.ydim);
        let offset = self.offset(index.0, index.1);
        &mut self.arr[offset]
    }
}

/// A three-dimensional array with dimensions fixed at construction, stored as one flat
/// [`Array<T>`] in row-major order.
///
/// Element `(x, y, z)` lives at flat offset `(x * ydim + y) * zdim + z`. The nested views
/// ([`slab`](Grid3::slab), [`row`](Grid3::row)), tuple indexing and flat iteration all address the
/// same storage, so a write through any of them is visible through the others.
///
/// # Examples
/// ```
/// # use container_lib::collections::contiguous::Grid3;
/// let mut a3 = Grid3::new(30, 20, 10, 0.0_f32);
/// a3[(5, 4, 3)] = 10.2;
/// assert_eq!(a3.row(5, 4)[3], 10.2);
/// assert_eq!(a3.slab(5)[4 * 10 + 3], 10.2);
/// assert_eq!(a3.size(), 6000);
/// ```
pub struct Grid3<T> {
    pub(crate) arr: Array<T>,
    pub(crate) xdim: usize,
    pub(crate) ydim: usize,
    pub(crate) zdim: usize,
}

impl<T: Clone> Grid3<T> {
    /// Creates a new Grid3 with `xdim * ydim * zdim` elements, each initialized to a clone of
    /// `fill`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new(xdim: usize, ydim: usize, zdim: usize, fill: T) -> Grid3<T> {
        Grid3 {
            arr: Array::repeat_item(fill, checked_product(&[xdim, ydim, zdim])),
            xdim,
            ydim,
            zdim,
        }
    }
}

impl<T> Grid3<T> {
    /// Returns the total number of elements, `xdim * ydim * zdim`.
    pub const fn size(&self) -> usize {
        self.arr.size()
    }

    /// Returns the dimensions as `(xdim, ydim, zdim)`. Dimensions never change after
    /// construction.
    pub const fn dims(&self) -> (usize, usize, usize) {
        (self.xdim, self.ydim, self.zdim)
    }

    /// Returns the `ydim * zdim` elements at `x` as one flat slice, the 3-D equivalent of a row
    /// view: `grid.slab(x)[y * zdim + z]` addresses the same element as `grid[(x, y, z)]`.
    ///
    /// # Panics
    /// Panics if `x` is out of bounds.
    pub fn slab(&self, x: usize) -> &[T] {
        check_axis(x, self.xdim);
        let stride = self.ydim * self.zdim;
        &self.arr[x * stride..(x + 1) * stride]
    }

    /// Returns the `ydim * zdim` elements at `x` as one flat mutable slice.
    ///
    /// # Panics
    /// Panics if `x` is out of bounds.
    pub fn slab_mut(&mut self, x: usize) -> &mut [T] {
        check_axis(x, self.xdim);
        let stride = self.ydim * self.zdim;
        &mut self.arr[x * stride..(x + 1) * stride]
    }

    /// Returns row `(x, y)` as a slice of `zdim` elements, so that `grid.row(x, y)[z]` addresses
    /// the same element as `grid[(x, y, z)]`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is out of bounds.
    pub fn row(&self, x: usize, y: usize) -> &[T] {
        check_axis(x, self.xdim);
        check_axis(y, self.ydim);
        let start = (x * self.ydim + y) * self.zdim;
        &self.arr[start..start + self.zdim]
    }

    /// Returns row `(x, y)` as a mutable slice of `zdim` elements.
    ///
    /// # Panics
    /// Panics if `x` or `y` is out of bounds.
    pub fn row_mut(&mut self, x: usize, y: usize) -> &mut [T] {
        check_axis(x, self.xdim);
        check_axis(y, self.ydim);
        let start = (x * self.ydim + y) * self.zdim;
        let zdim = self.zdim;
        &mut self.arr[start..start + zdim]
    }

    const fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.ydim + y) * self.zdim + z
    }
}

impl<T> Index<(usize, usize, usize)> for Grid3<T> {
    type Output = T;

    fn index(&self, index: (usize, usize, usize)) -> &Self::Output {
        check_axis(index.0, self.xdim);
        check_axis(index.1, self.ydim);
        check_axis(index.2, self.zdim);
        &self.arr[self.offset(index.0, index.1, index.2)]
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Grid3<T> {
    fn index_mut(&mut self, index: (usize, usize, usize)) -> &mut Self::Output {
        check_axis(index.0, self.xdim);
        check_axis(index.1, self.ydim);
        check_axis(index.2, self.zdim);
        let offset = self.offset(index.0, index.1, index.2);
        &mut self.arr[offset]
    }
}

/// Validates one axis of a multi-dimensional index.
///
/// # Panics
/// Panics if `index` is not below `dim`.
fn check_axis(index: usize, dim: usize) {
    if index >= dim {
        Err(IndexOutOfBounds {
            index,
            len: dim,
        }).throw()
    }
}

/// Multiplies the dimensions, panicking on overflow rather than allocating a wrapped size.
///
/// # Panics
/// Panics if the product overflows [`usize`].
fn checked_product(dims: &[usize]) -> usize {
    dims.iter().copied().try_fold(1_usize, usize::checked_mul)
        .ok_or(CapacityOverflow).throw()
}

macro_rules! grid_common {
    ($name:ident) => {
        impl<T> Deref for $name<T> {
            type Target = [T];

            fn deref(&self) -> &Self::Target {
                // Flat iteration in storage order is exactly iteration over the backing Array.
                &self.arr
            }
        }

        impl<T> DerefMut for $name<T> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.arr
            }
        }

        impl<T> IntoIterator for $name<T> {
            type Item = T;

            type IntoIter = IntoIter<T>;

            fn into_iter(self) -> Self::IntoIter {
                self.arr.into_iter()
            }
        }

        impl<'a, T> IntoIterator for &'a $name<T> {
            type Item = &'a T;

            type IntoIter = std::slice::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<'a, T> IntoIterator for &'a mut $name<T> {
            type Item = &'a mut T;

            type IntoIter = std::slice::IterMut<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter_mut()
            }
        }

        impl<T: PartialEq> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                self.dims() == other.dims() && *self.arr == *other.arr
            }
        }

        impl<T: Eq> Eq for $name<T> {}
    };
}

grid_common!(Grid2);
grid_common!(Grid3);

impl<T: Clone> Clone for Grid2<T> {
    fn clone(&self) -> Self {
        Grid2 {
            arr: self.arr.clone(),
            xdim: self.xdim,
            ydim: self.ydim,
        }
    }
}

impl<T: Clone> Clone for Grid3<T> {
    fn clone(&self) -> Self {
        Grid3 {
            arr: self.arr.clone(),
            xdim: self.xdim,
            ydim: self.ydim,
            zdim: self.zdim,
        }
    }
}

impl<T: Debug> Debug for Grid2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid2")
            .field("dims", &self.dims())
            .field("contents", &self.arr)
            .finish()
    }
}

impl<T: Debug> Debug for Grid3<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid3")
            .field("dims", &self.dims())
            .field("contents", &self.arr)
            .finish()
    }
}
