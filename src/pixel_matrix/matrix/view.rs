use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{align_of, size_of};
use std::ops::Range;

use bytemuck::Pod;

use crate::pixel_matrix::common::error::{MatrixError, Result};
use crate::pixel_matrix::matrix::Pixel3;

/// Size of one B, G, R pixel.
pub const BYTES_PER_PIXEL: usize = size_of::<Pixel3>();

pub type PixelMatrix<'a> = Matrix<'a, Pixel3>;
pub type PixelMatrixMut<'a> = MatrixMut<'a, Pixel3>;
pub type DoubleMatrix<'a> = Matrix<'a, f64>;
pub type DoubleMatrixMut<'a> = MatrixMut<'a, f64>;

/// Read-only, stride-aware view over rows of `T`.
///
/// A view is a plain descriptor: copying it never copies elements, and two
/// views compare equal only when they address the same memory with the same
/// geometry. The element size is `size_of::<T>()` and the stride is in bytes.
///
/// Views borrow their memory shared for `'a`, so no [`MatrixMut`] over the
/// same memory can exist while one is alive.
pub struct Matrix<'a, T> {
    ptr: *mut u8,
    width: usize,
    height: usize,
    stride: usize,
    _memory: PhantomData<&'a [T]>,
}

/// Exclusive, writable view over rows of `T`.
///
/// Obtained from [`MatrixContainer::full_pixels_mut`], [`MatrixMut::cut_out_mut`]
/// or [`MatrixMut::from_slice`], each of which needs a unique borrow. It is not
/// `Copy`, so at most one writable view of a region is usable at a time:
///
/// ```compile_fail
/// use pixel_matrix::pixel_matrix::{Pixel3, PixelMatrixContainer};
///
/// let mut container = PixelMatrixContainer::new(2, 2).unwrap();
/// let mut first = container.full_pixels_mut();
/// let mut second = container.full_pixels_mut();
/// first.row_mut(0).unwrap()[0] = Pixel3::WHITE;
/// second.row_mut(0).unwrap()[0] = Pixel3::BLACK;
/// ```
///
/// Reading through a shared view while writing is rejected as well:
///
/// ```compile_fail
/// use pixel_matrix::pixel_matrix::{Pixel3, PixelMatrixContainer};
///
/// let mut container = PixelMatrixContainer::new(2, 2).unwrap();
/// let mut pixels = container.full_pixels_mut();
/// let row = pixels.row(0).unwrap();
/// pixels.fill_all(Pixel3::WHITE).unwrap();
/// assert_eq!(row[0], Pixel3::WHITE);
/// ```
///
/// [`MatrixContainer::full_pixels_mut`]: crate::pixel_matrix::MatrixContainer::full_pixels_mut
pub struct MatrixMut<'a, T> {
    view: Matrix<'a, T>,
    _exclusive: PhantomData<&'a mut [T]>,
}

impl<T> Clone for Matrix<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Matrix<'_, T> {}

impl<T> PartialEq for Matrix<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        (self.ptr, self.width, self.height, self.stride)
            == (other.ptr, other.width, other.height, other.stride)
    }
}

impl<T> Eq for Matrix<'_, T> {}

impl<T> Hash for Matrix<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.ptr, self.width, self.height, self.stride).hash(state);
    }
}

impl<T> fmt::Debug for Matrix<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("ptr", &self.ptr)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes_per_pixel", &size_of::<T>())
            .field("stride", &self.stride)
            .finish()
    }
}

impl<T> fmt::Debug for MatrixMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MatrixMut").field(&self.view).finish()
    }
}

fn check_element_size<T>(bytes_per_pixel: usize) -> Result<()> {
    if bytes_per_pixel != size_of::<T>() {
        return Err(MatrixError::UnsupportedFormat(format!(
            "{} bytes per pixel (expected {})",
            bytes_per_pixel,
            size_of::<T>()
        )));
    }
    Ok(())
}

fn check_slice_len(actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(MatrixError::InvalidBuffer(format!(
            "slice of {} bytes is shorter than the required {} bytes",
            actual, required
        )));
    }
    Ok(())
}

impl<'a, T: Pod> Matrix<'a, T> {
    pub(crate) fn from_parts(ptr: *mut u8, width: usize, height: usize, stride: usize) -> Self {
        Self {
            ptr,
            width,
            height,
            stride,
            _memory: PhantomData,
        }
    }

    /// Builds a read-only view over foreign memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of
    /// `stride * (height - 1) + width * bytes_per_pixel` bytes for the whole of
    /// `'a`, and nothing may write that memory while the view is used.
    pub unsafe fn from_raw_parts(
        ptr: *const u8,
        width: usize,
        height: usize,
        bytes_per_pixel: usize,
        stride: usize,
    ) -> Result<Self> {
        check_element_size::<T>(bytes_per_pixel)?;
        Ok(Self::from_parts(ptr as *mut u8, width, height, stride))
    }

    /// Builds a view over a byte slice, checking that every addressed row fits.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize, stride: usize) -> Result<Self> {
        let view = Self::from_parts(data.as_ptr() as *mut u8, width, height, stride);
        view.ensure_valid()?;
        check_slice_len(data.len(), view.span_len())?;
        Ok(view)
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bytes_per_pixel(&self) -> usize {
        size_of::<T>()
    }

    pub fn bits_per_pixel(&self) -> usize {
        size_of::<T>() * 8
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// `width * bytes_per_pixel * height`; ignores stride padding.
    pub fn allocated_size(&self) -> usize {
        self.row_len().saturating_mul(self.height)
    }

    pub fn is_continuous(&self) -> bool {
        self.row_len() == self.stride
    }

    pub fn is_valid(&self) -> bool {
        if self.ptr.is_null() {
            return false;
        }
        if self.width == 0 || self.height == 0 {
            return false;
        }
        // rows are handed out as `&[T]`
        if !self.ptr.cast::<T>().is_aligned() || self.stride % align_of::<T>() != 0 {
            return false;
        }
        match self.width.checked_mul(size_of::<T>()) {
            Some(row_len) => self.stride >= row_len && self.stride.checked_mul(self.height).is_some(),
            None => false,
        }
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub(crate) fn ensure_valid(&self) -> Result<()> {
        if self.is_invalid() {
            return Err(MatrixError::InvalidBuffer(format!(
                "ptr={:p}, size={}x{}, bytes_per_pixel={}, stride={}",
                self.ptr,
                self.width,
                self.height,
                size_of::<T>(),
                self.stride
            )));
        }
        Ok(())
    }

    /// Bytes of element payload in one row.
    pub(crate) fn row_len(&self) -> usize {
        self.width.saturating_mul(size_of::<T>())
    }

    /// Bytes from the first element to the end of the last one.
    pub(crate) fn span_len(&self) -> usize {
        self.stride * (self.height - 1) + self.row_len()
    }

    /// Address range of the span. The view must be valid.
    pub(crate) fn byte_range(&self) -> Range<usize> {
        let start = self.ptr as usize;
        start..start + self.span_len()
    }

    /// Whether the spans of two valid views share any byte.
    pub(crate) fn overlaps<U: Pod>(&self, other: &Matrix<'_, U>) -> bool {
        let (a, b) = (self.byte_range(), other.byte_range());
        a.start < b.end && b.start < a.end
    }

    /// # Safety
    ///
    /// The view must be valid and `row < height`.
    pub(crate) unsafe fn row_ptr(&self, row: usize) -> *mut u8 {
        // SAFETY: upheld by the caller; the row start lies inside the span.
        unsafe { self.ptr.add(row * self.stride) }
    }

    /// Checks that `x + width` and `y + height` stay inside the view.
    pub(crate) fn check_region(&self, x: usize, y: usize, width: usize, height: usize) -> Result<()> {
        let right = x.checked_add(width);
        let bottom = y.checked_add(height);
        match (right, bottom) {
            (Some(right), Some(bottom)) if right <= self.width && bottom <= self.height => Ok(()),
            _ => Err(MatrixError::OutOfRange(format!(
                "region ({}, {}) {}x{} exceeds {}x{}",
                x, y, width, height, self.width, self.height
            ))),
        }
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.height {
            return Err(MatrixError::OutOfRange(format!(
                "row {} of {}",
                row, self.height
            )));
        }
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<&'a [T]> {
        self.ensure_valid()?;
        self.check_row(row)?;
        // SAFETY: the view is valid, so the row start is aligned for `T` and
        // `width` elements fit before the next row; `row` is in bounds.
        unsafe {
            Ok(std::slice::from_raw_parts(
                self.row_ptr(row) as *const T,
                self.width,
            ))
        }
    }

    pub fn pixel_address(&self, x: usize, y: usize) -> Result<*const u8> {
        self.ensure_valid()?;
        if x >= self.width || y >= self.height {
            return Err(MatrixError::OutOfRange(format!(
                "pixel ({}, {}) outside {}x{}",
                x, y, self.width, self.height
            )));
        }
        // SAFETY: in bounds of the view's span.
        Ok(unsafe { self.ptr.add(y * self.stride + x * size_of::<T>()) })
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Result<T> {
        let address = self.pixel_address(x, y)?;
        // SAFETY: `pixel_address` checked bounds and the view is aligned for `T`.
        Ok(unsafe { std::ptr::read(address as *const T) })
    }

    /// The addressed bytes, from the first element to the end of the last.
    pub fn as_bytes(&self) -> Result<&'a [u8]> {
        self.ensure_valid()?;
        // SAFETY: the span is inside the memory the view was built over.
        Ok(unsafe { std::slice::from_raw_parts(self.ptr, self.span_len()) })
    }
}

impl<'a, T: Pod> MatrixMut<'a, T> {
    pub(crate) fn from_parts(ptr: *mut u8, width: usize, height: usize, stride: usize) -> Self {
        Self {
            view: Matrix::from_parts(ptr, width, height, stride),
            _exclusive: PhantomData,
        }
    }

    /// Builds a writable view over foreign memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of
    /// `stride * (height - 1) + width * bytes_per_pixel` bytes for the whole of
    /// `'a`, and nothing else may access that memory while the view is used.
    pub unsafe fn from_raw_parts(
        ptr: *mut u8,
        width: usize,
        height: usize,
        bytes_per_pixel: usize,
        stride: usize,
    ) -> Result<Self> {
        check_element_size::<T>(bytes_per_pixel)?;
        Ok(Self::from_parts(ptr, width, height, stride))
    }

    /// Builds a writable view over a byte slice, checking that every addressed
    /// row fits.
    pub fn from_slice(data: &'a mut [u8], width: usize, height: usize, stride: usize) -> Result<Self> {
        let len = data.len();
        let pixels = Self::from_parts(data.as_mut_ptr(), width, height, stride);
        pixels.view.ensure_valid()?;
        check_slice_len(len, pixels.view.span_len())?;
        Ok(pixels)
    }

    /// A read-only view that keeps `self` borrowed while it is used.
    pub fn as_view(&self) -> Matrix<'_, T> {
        self.view
    }

    pub fn into_view(self) -> Matrix<'a, T> {
        self.view
    }

    /// A shorter-lived writable view of the same memory.
    pub fn reborrow(&mut self) -> MatrixMut<'_, T> {
        MatrixMut {
            view: self.view,
            _exclusive: PhantomData,
        }
    }

    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.view.ptr
    }

    pub fn width(&self) -> usize {
        self.view.width
    }

    pub fn height(&self) -> usize {
        self.view.height
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.view.bytes_per_pixel()
    }

    pub fn stride(&self) -> usize {
        self.view.stride
    }

    pub fn allocated_size(&self) -> usize {
        self.view.allocated_size()
    }

    pub fn is_continuous(&self) -> bool {
        self.view.is_continuous()
    }

    pub fn is_valid(&self) -> bool {
        self.view.is_valid()
    }

    pub fn row(&self, row: usize) -> Result<&[T]> {
        self.view.row(row)
    }

    pub fn row_mut(&mut self, row: usize) -> Result<&mut [T]> {
        self.view.ensure_valid()?;
        self.view.check_row(row)?;
        // SAFETY: as in `Matrix::row`; the unique borrow of `self` makes the
        // slice the only access to the row while it lives.
        unsafe {
            Ok(std::slice::from_raw_parts_mut(
                self.view.row_ptr(row) as *mut T,
                self.view.width,
            ))
        }
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Result<T> {
        self.view.pixel_at(x, y)
    }
}
