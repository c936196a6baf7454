//! Matrix module
//!
//! Stride-aware views over rows of plain-data elements, the container that
//! owns their memory, and the region operations that act on the addressed
//! memory. `Pixel3` matrices carry the BGR-specific operations; `f64`
//! matrices share the same allocation, view and copy paths.

mod pixel;
mod view;
mod container;
mod region;
mod copy;


pub use pixel::Pixel3;
pub use view::{
    BYTES_PER_PIXEL,
    DoubleMatrix,
    DoubleMatrixMut,
    Matrix,
    MatrixMut,
    PixelMatrix,
    PixelMatrixMut,
};
pub use container::{DoubleMatrixContainer, MatrixContainer, PixelMatrixContainer};
