//! Region-addressed reads and writes.
//!
//! Every region is given as `(x, y, width, height)` and must satisfy
//! `x + width <= self.width()` and `y + height <= self.height()`.

use std::mem::size_of;

use bytemuck::Pod;

use crate::pixel_matrix::color::ColorBgr;
use crate::pixel_matrix::common::error::{MatrixError, Result};
use crate::pixel_matrix::matrix::Pixel3;
use crate::pixel_matrix::matrix::view::{Matrix, MatrixMut};

impl<'a, T: Pod> Matrix<'a, T> {
    /// A read-only sub-view of the region sharing this view's memory and stride.
    pub fn cut_out(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Matrix<'a, T>> {
        self.ensure_valid()?;
        self.check_region(x, y, width, height)?;
        let head = self.pixel_address(x, y)?;
        Ok(Matrix::from_parts(head as *mut u8, width, height, self.stride()))
    }
}

impl<'a, T: Pod> MatrixMut<'a, T> {
    /// Runs `f` on the part of each row that falls inside the region.
    /// The region must already be checked.
    fn for_each_region_row<F>(&mut self, x: usize, y: usize, width: usize, height: usize, mut f: F)
    where
        F: FnMut(&mut [T]),
    {
        let view = self.as_view();
        for row in y..y + height {
            // SAFETY: the caller checked validity and the region; rows are at
            // least `width * size_of::<T>()` bytes apart so the slices never
            // overlap, and `&mut self` excludes every other access.
            let elements = unsafe {
                let head = view.row_ptr(row).add(x * size_of::<T>()) as *mut T;
                std::slice::from_raw_parts_mut(head, width)
            };
            f(elements);
        }
    }

    /// A writable sub-view of the region; `self` stays borrowed while it lives.
    pub fn cut_out_mut(&mut self, x: usize, y: usize, width: usize, height: usize) -> Result<MatrixMut<'_, T>> {
        let sub = self.as_view().cut_out(x, y, width, height)?;
        Ok(MatrixMut::from_parts(sub.as_ptr() as *mut u8, width, height, sub.stride()))
    }

    pub fn fill_all(&mut self, value: T) -> Result<()> {
        self.as_view().ensure_valid()?;
        let (width, height) = (self.width(), self.height());
        self.for_each_region_row(0, 0, width, height, |row| row.fill(value));
        Ok(())
    }

    pub fn fill_rectangle(
        &mut self,
        value: T,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<()> {
        let view = self.as_view();
        view.ensure_valid()?;
        view.check_region(x, y, width, height)?;
        self.for_each_region_row(x, y, width, height, |row| row.fill(value));
        Ok(())
    }

    /// Draws the 1-pixel outline of the region; the interior is left untouched.
    pub fn draw_rectangle_border(
        &mut self,
        value: T,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<()> {
        let view = self.as_view();
        view.ensure_valid()?;
        if width == 0 || height == 0 {
            return Err(MatrixError::EmptyRegion);
        }
        view.check_region(x, y, width, height)?;

        let bottom = y + height - 1;
        let right = width - 1;
        self.for_each_region_row(x, y, width, height, |row| {
            row[0] = value;
            row[right] = value;
        });
        self.for_each_region_row(x, y, width, 1, |row| row.fill(value));
        self.for_each_region_row(x, bottom, width, 1, |row| row.fill(value));
        Ok(())
    }

    /// Writes one pixel. Coordinates outside the view are ignored.
    pub fn write_pixel(&mut self, value: T, x: usize, y: usize) -> Result<()> {
        let view = self.as_view();
        view.ensure_valid()?;
        if x >= view.width() || y >= view.height() {
            return Ok(());
        }
        let address = view.pixel_address(x, y)?;
        // SAFETY: `pixel_address` checked bounds, the view is aligned for `T`
        // and `&mut self` grants exclusive access.
        unsafe { std::ptr::write(address as *mut T, value) };
        Ok(())
    }
}

impl Matrix<'_, Pixel3> {
    /// Per-channel mean over the region.
    pub fn channel_average(&self, x: usize, y: usize, width: usize, height: usize) -> Result<ColorBgr> {
        self.ensure_valid()?;
        if width == 0 || height == 0 {
            return Err(MatrixError::EmptyRegion);
        }
        self.check_region(x, y, width, height)?;

        let mut sums = [0u64; 3];
        for row in y..y + height {
            let pixels = &self.row(row)?[x..x + width];
            for pixel in pixels {
                sums[0] += u64::from(pixel.ch0);
                sums[1] += u64::from(pixel.ch1);
                sums[2] += u64::from(pixel.ch2);
            }
        }

        let count = (width * height) as f64;
        Ok(ColorBgr::new(
            sums[0] as f64 / count,
            sums[1] as f64 / count,
            sums[2] as f64 / count,
        ))
    }

    pub fn channel_average_of_entire(&self) -> Result<ColorBgr> {
        self.channel_average(0, 0, self.width(), self.height())
    }
}

impl MatrixMut<'_, Pixel3> {
    pub fn fill_level(&mut self, level: u8) -> Result<()> {
        self.fill_all(Pixel3::from_level(level))
    }

    pub fn fill_channels(&mut self, ch0: u8, ch1: u8, ch2: u8) -> Result<()> {
        self.fill_all(Pixel3::new(ch0, ch1, ch2))
    }

    pub fn channel_average(&self, x: usize, y: usize, width: usize, height: usize) -> Result<ColorBgr> {
        self.as_view().channel_average(x, y, width, height)
    }

    pub fn channel_average_of_entire(&self) -> Result<ColorBgr> {
        self.as_view().channel_average_of_entire()
    }
}
