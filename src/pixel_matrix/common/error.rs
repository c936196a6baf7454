use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Region area is zero")]
    EmptyRegion,

    #[error("Size mismatch: source={src_width}x{src_height}, destination={dst_width}x{dst_height}")]
    SizeMismatch {
        src_width: usize,
        src_height: usize,
        dst_width: usize,
        dst_height: usize,
    },

    #[error("Source and destination share the same memory")]
    AliasingError,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid argument: {0}")]
    ArgumentError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("File already exists: {}", .0.display())]
    FileAlreadyExists(PathBuf),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
