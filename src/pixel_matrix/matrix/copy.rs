use bytemuck::Pod;
use tracing::trace;

use crate::pixel_matrix::common::error::{MatrixError, Result};
use crate::pixel_matrix::common::mem_copy::mem_copy;
use crate::pixel_matrix::matrix::view::{Matrix, MatrixMut};

impl<'a, T: Pod> Matrix<'a, T> {
    fn check_not_aliased(&self, destination: &Matrix<'_, T>) -> Result<()> {
        if self.overlaps(destination) {
            return Err(MatrixError::AliasingError);
        }
        Ok(())
    }

    /// Copies every element into `destination`, which must have the same size
    /// and must not share any byte of its span with `self`.
    ///
    /// Continuous views are copied in one pass, others row by row using each
    /// view's own stride.
    pub fn copy_to(&self, destination: &mut MatrixMut<'_, T>) -> Result<()> {
        let target = destination.as_view();
        self.ensure_valid()?;
        target.ensure_valid()?;
        if self.width() != target.width() || self.height() != target.height() {
            return Err(MatrixError::SizeMismatch {
                src_width: self.width(),
                src_height: self.height(),
                dst_width: target.width(),
                dst_height: target.height(),
            });
        }
        self.check_not_aliased(&target)?;

        if self.is_continuous() && target.is_continuous() {
            trace!(bytes = self.allocated_size(), "Bulk copy");
            // SAFETY: both views are valid, continuous, of equal size and disjoint.
            unsafe { mem_copy(destination.as_mut_ptr(), self.as_ptr(), self.allocated_size()) };
            return Ok(());
        }

        let row_len = self.row_len();
        for row in 0..self.height() {
            // SAFETY: both views are valid and `row` is below both heights.
            unsafe { mem_copy(target.row_ptr(row), self.row_ptr(row), row_len) };
        }
        Ok(())
    }

    /// Nearest-neighbour enlargement: each source element fills a
    /// `magnification x magnification` block of `destination`.
    ///
    /// The magnification is derived from the two sizes and must be an integer
    /// greater than 1, equal on both axes.
    pub fn copy_to_with_scale_up(&self, destination: &mut MatrixMut<'_, T>) -> Result<()> {
        let target = destination.as_view();
        self.ensure_valid()?;
        target.ensure_valid()?;

        if target.width() % self.width() != 0 || target.height() % self.height() != 0 {
            return Err(MatrixError::ArgumentError(format!(
                "{}x{} is not an integral multiple of {}x{}",
                target.width(),
                target.height(),
                self.width(),
                self.height()
            )));
        }

        let width_ratio = target.width() / self.width();
        let height_ratio = target.height() / self.height();
        if width_ratio != height_ratio {
            return Err(MatrixError::ArgumentError(format!(
                "magnifications differ (width={}, height={})",
                width_ratio, height_ratio
            )));
        }

        let magnification = width_ratio;
        if magnification <= 1 {
            return Err(MatrixError::ArgumentError(format!(
                "magnification must be greater than 1, got {}",
                magnification
            )));
        }
        self.check_not_aliased(&target)?;

        for y in 0..self.height() {
            let source_row = self.row(y)?;
            for dest_y in y * magnification..(y + 1) * magnification {
                let dest_row = destination.row_mut(dest_y)?;
                for (block, &value) in dest_row.chunks_exact_mut(magnification).zip(source_row) {
                    block.fill(value);
                }
            }
        }
        Ok(())
    }
}
