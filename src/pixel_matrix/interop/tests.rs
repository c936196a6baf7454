use crate::pixel_matrix::common::error::{MatrixError, Result};
use crate::pixel_matrix::interop::{BitmapSink, BitmapSource, RawBitmap, export, ingest, update_from_source};
use crate::pixel_matrix::matrix::{Pixel3, PixelMatrixContainer};

/// Bitmap whose pixel `(x, y)` is `(x, y, x + y)` followed by `0xEE` filler.
fn gradient(width: usize, height: usize, bytes_per_pixel: usize) -> RawBitmap {
    let mut bitmap = RawBitmap::new(width, height, bytes_per_pixel).unwrap();
    let stride = bitmap.stride();
    let data = bitmap.data_mut();
    for y in 0..height {
        for x in 0..width {
            let start = y * stride + x * bytes_per_pixel;
            let pixel = &mut data[start..start + bytes_per_pixel];
            pixel.fill(0xEE);
            pixel[0] = x as u8;
            pixel[1] = y as u8;
            pixel[2] = (x + y) as u8;
        }
    }
    bitmap
}

struct RecordingSink {
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
    calls: Vec<(usize, usize)>,
}

impl BitmapSink for RecordingSink {
    fn pixel_width(&self) -> usize {
        self.width
    }

    fn pixel_height(&self) -> usize {
        self.height
    }

    fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    fn write_pixels(&mut self, pixels: &[u8], stride: usize) -> Result<()> {
        self.calls.push((pixels.len(), stride));
        Ok(())
    }
}

fn assert_gradient(container: &PixelMatrixContainer) {
    let pixels = container.full_pixels();
    for y in 0..pixels.height() {
        for x in 0..pixels.width() {
            assert_eq!(
                pixels.pixel_at(x, y).unwrap(),
                Pixel3::new(x as u8, y as u8, (x + y) as u8),
                "pixel ({}, {})",
                x,
                y
            );
        }
    }
}

#[test]
fn test_ingest_continuous_source() {
    // 4 * 3 bytes per row is already 4-byte aligned
    let bitmap = gradient(4, 3, 3);
    assert!(bitmap.continuous_pixels().is_some());

    let container = ingest(&bitmap).unwrap();
    assert_eq!((container.width(), container.height()), (4, 3));
    assert_gradient(&container);
}

#[test]
fn test_ingest_padded_source() {
    let bitmap = gradient(3, 5, 3);
    assert_eq!(bitmap.stride(), 12);
    assert!(bitmap.continuous_pixels().is_none());

    let container = ingest(&bitmap).unwrap();
    assert_gradient(&container);
}

#[test]
fn test_ingest_truncates_wider_pixels() {
    let bitmap = gradient(5, 2, 4);
    let container = ingest(&bitmap).unwrap();
    assert_gradient(&container);
}

#[test]
fn test_ingest_rejects_narrow_pixels() {
    let bitmap = gradient(4, 4, 2);
    let result = ingest(&bitmap);
    assert!(matches!(result.unwrap_err(), MatrixError::UnsupportedFormat(_)));
}

#[test]
fn test_ingest_rejects_empty_source() {
    let bitmap = RawBitmap::new(0, 4, 3).unwrap();
    let result = ingest(&bitmap);
    assert!(matches!(result.unwrap_err(), MatrixError::InvalidBuffer(_)));
}

#[test]
fn test_update_from_source_size_mismatch() {
    let bitmap = gradient(4, 4, 3);
    let mut container = PixelMatrixContainer::new(4, 5).unwrap();

    let result = update_from_source(&bitmap, &mut container.full_pixels_mut());
    assert!(matches!(result.unwrap_err(), MatrixError::SizeMismatch { .. }));
}

#[test]
fn test_update_from_source_into_sub_view() {
    let bitmap = gradient(2, 2, 4);
    let mut container = PixelMatrixContainer::new(6, 6).unwrap();
    let mut parent = container.full_pixels_mut();
    parent.fill_all(Pixel3::WHITE).unwrap();

    update_from_source(&bitmap, &mut parent.cut_out_mut(3, 2, 2, 2).unwrap()).unwrap();

    assert_eq!(parent.pixel_at(3, 2).unwrap(), Pixel3::new(0, 0, 0));
    assert_eq!(parent.pixel_at(4, 3).unwrap(), Pixel3::new(1, 1, 2));
    assert_eq!(parent.pixel_at(2, 2).unwrap(), Pixel3::WHITE);
    assert_eq!(parent.pixel_at(5, 3).unwrap(), Pixel3::WHITE);
}

#[test]
fn test_export_round_trip() {
    let source = gradient(3, 4, 3);
    let container = ingest(&source).unwrap();

    let mut sink = RawBitmap::new(3, 4, 3).unwrap();
    export(&container.full_pixels(), &mut sink).unwrap();
    assert_eq!(sink, source);
}

#[test]
fn test_export_root_view_passes_whole_allocation() {
    let container = PixelMatrixContainer::new(5, 3).unwrap();
    let mut sink = RecordingSink { width: 5, height: 3, bytes_per_pixel: 3, calls: Vec::new() };

    export(&container.full_pixels(), &mut sink).unwrap();

    // stride * height
    assert_eq!(sink.calls, vec![(15 * 3, 15)]);
    assert_eq!(sink.calls[0].0, container.allocated_size());
}

#[test]
fn test_export_sub_view_passes_parent_stride() {
    let container = PixelMatrixContainer::new(8, 4).unwrap();
    let sub = container.full_pixels().cut_out(1, 1, 3, 2).unwrap();
    let mut sink = RecordingSink { width: 3, height: 2, bytes_per_pixel: 3, calls: Vec::new() };

    export(&sub, &mut sink).unwrap();

    assert_eq!(sink.calls, vec![(24 + 9, 24)]);
}

#[test]
fn test_export_sub_view_pixels() {
    let mut container = PixelMatrixContainer::new(5, 5).unwrap();
    let mut parent = container.full_pixels_mut();
    parent.fill_all(Pixel3::BLACK).unwrap();
    parent.fill_rectangle(Pixel3::new(7, 8, 9), 2, 2, 2, 2).unwrap();

    let sub = parent.into_view().cut_out(2, 2, 2, 2).unwrap();
    let mut sink = RawBitmap::new(2, 2, 3).unwrap();
    export(&sub, &mut sink).unwrap();

    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        assert_eq!(sink.pixel(x, y).unwrap(), &[7, 8, 9]);
    }
}

#[test]
fn test_export_rejects_mismatched_sink() {
    let container = PixelMatrixContainer::new(3, 3).unwrap();
    let pixels = container.full_pixels();

    let mut wide = RecordingSink { width: 3, height: 3, bytes_per_pixel: 4, calls: Vec::new() };
    let result = export(&pixels, &mut wide);
    assert!(matches!(result.unwrap_err(), MatrixError::UnsupportedFormat(_)));

    let mut small = RecordingSink { width: 2, height: 3, bytes_per_pixel: 3, calls: Vec::new() };
    let result = export(&pixels, &mut small);
    assert!(matches!(result.unwrap_err(), MatrixError::SizeMismatch { .. }));
    assert!(small.calls.is_empty());
}

#[test]
fn test_export_disposed_container() {
    let mut container = PixelMatrixContainer::new(3, 3).unwrap();
    container.dispose();
    let mut sink = RawBitmap::new(3, 3, 3).unwrap();

    let result = export(&container.full_pixels(), &mut sink);
    assert!(matches!(result.unwrap_err(), MatrixError::InvalidBuffer(_)));
}

#[test]
fn test_raw_bitmap_rejects_overflowing_size() {
    let result = RawBitmap::new(usize::MAX / 2, 1, 3);
    assert!(matches!(result.unwrap_err(), MatrixError::InvalidBuffer(_)));

    let result = RawBitmap::new(4, usize::MAX / 8, 3);
    assert!(matches!(result.unwrap_err(), MatrixError::InvalidBuffer(_)));

    let result = RawBitmap::from_bytes(usize::MAX, 2, 3, 16, Vec::new());
    assert!(matches!(result.unwrap_err(), MatrixError::InvalidBuffer(_)));
}
