//! Pixel matrix engine
//!
//! Stride-aware 24-bit pixel buffers, and `f64` matrices sharing the same
//! memory model, with region fills, copies and statistics. Also color
//! conversions, BMP saving and interop with external bitmap sources and sinks.

pub mod common;
pub mod matrix;
pub mod color;
pub mod bmp;
pub mod interop;

pub use common::{
    MatrixError,
    Result,
};

pub use matrix::{
    BYTES_PER_PIXEL,
    DoubleMatrix,
    DoubleMatrixContainer,
    DoubleMatrixMut,
    Matrix,
    MatrixContainer,
    MatrixMut,
    Pixel3,
    PixelMatrix,
    PixelMatrixContainer,
    PixelMatrixMut,
};

pub use color::{
    ColorBgr,
    ColorLab,
    luminance_y,
};

pub use bmp::{
    BmpConfig,
    BmpConfigBuilder,
    BmpFileSaver,
    ImageWriter,
    StandardBmpWriter,
    encode,
    save_to_file,
    save_to_file_async,
};

pub use interop::{
    BitmapSink,
    BitmapSource,
    RawBitmap,
    export,
    ingest,
    update_from_source,
};

pub use enough::{Stop, Unstoppable};
