use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::{align_of, size_of};

use bytemuck::Pod;
use tracing::{debug, trace};

use crate::pixel_matrix::common::error::{MatrixError, Result};
use crate::pixel_matrix::matrix::Pixel3;
use crate::pixel_matrix::matrix::view::{Matrix, MatrixMut};

pub type PixelMatrixContainer = MatrixContainer<Pixel3>;
pub type DoubleMatrixContainer = MatrixContainer<f64>;

/// Owns one continuous, zeroed allocation of `width * height` elements.
///
/// The memory is released exactly once, either by [`dispose`](Self::dispose)
/// or when the container is dropped. Views borrow the container, so none of
/// them can outlive it or survive a `dispose`. After disposal new views carry
/// a null pointer and every operation on them fails with `InvalidBuffer`.
#[derive(Debug)]
pub struct MatrixContainer<T: Pod> {
    ptr: *mut u8,
    layout: Layout,
    width: usize,
    height: usize,
    stride: usize,
    disposed: bool,
    _element: PhantomData<T>,
}

impl<T: Pod> MatrixContainer<T> {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MatrixError::InvalidBuffer(format!(
                "cannot allocate {}x{} pixels",
                width, height
            )));
        }

        let stride = width
            .checked_mul(size_of::<T>())
            .ok_or_else(|| MatrixError::InvalidBuffer(format!("width {} overflows", width)))?;
        let size = stride
            .checked_mul(height)
            .ok_or_else(|| MatrixError::InvalidBuffer(format!("{}x{} overflows", width, height)))?;
        let layout = Layout::from_size_align(size, align_of::<T>())
            .map_err(|e| MatrixError::InvalidBuffer(format!("{}x{}: {}", width, height, e)))?;

        // SAFETY: `layout` has a non-zero size; all-zero bytes are a valid `T`
        // because `T: Pod`.
        let ptr = unsafe { alloc::alloc_zeroed(layout) };
        if ptr.is_null() {
            alloc::handle_alloc_error(layout);
        }
        debug!(
            width,
            height,
            bytes = size,
            element = std::any::type_name::<T>(),
            "Allocated matrix"
        );

        Ok(Self {
            ptr,
            layout,
            width,
            height,
            stride,
            disposed: false,
            _element: PhantomData,
        })
    }

    /// Read-only root view over the whole allocation.
    pub fn full_pixels(&self) -> Matrix<'_, T> {
        Matrix::from_parts(self.ptr, self.width, self.height, self.stride)
    }

    /// Writable root view; the container stays mutably borrowed while it lives.
    pub fn full_pixels_mut(&mut self) -> MatrixMut<'_, T> {
        MatrixMut::from_parts(self.ptr, self.width, self.height, self.stride)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Size of the owned allocation in bytes, `stride * height`.
    pub fn allocated_size(&self) -> usize {
        self.layout.size()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Releases the allocation. Calling it again is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            trace!("Matrix already disposed");
            return;
        }
        // SAFETY: `ptr` came from `alloc_zeroed` with `layout` and is freed once.
        unsafe { alloc::dealloc(self.ptr, self.layout) };
        debug!(bytes = self.layout.size(), "Released matrix");
        self.ptr = std::ptr::null_mut();
        self.disposed = true;
    }
}

impl<T: Pod> Drop for MatrixContainer<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
