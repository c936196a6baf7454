//! Bitmap interop module
//!
//! Narrow contracts for external bitmap-like sources and sinks, so platform
//! bitmaps can be copied into a pixel matrix and written back out.

mod source;
mod sink;
mod raw_bitmap;

#[cfg(test)]
mod tests;

pub use source::{BitmapSource, ingest, update_from_source};
pub use sink::{BitmapSink, export};
pub use raw_bitmap::RawBitmap;
