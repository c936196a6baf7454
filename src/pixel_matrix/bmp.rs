//! BMP writing module
//!
//! Encodes a pixel matrix as an uncompressed 24-bit BMP and saves it to files
//! that do not exist yet.

mod header;
mod writer;
mod standard_bmp_writer;
mod saver;
pub mod types;


pub use header::{BmpHeader, FILE_HEADER_SIZE, HEADER_SIZE, INFO_HEADER_SIZE};
pub use writer::ImageWriter;
pub use standard_bmp_writer::{StandardBmpWriter, encode};
pub use saver::{BmpFileSaver, save_to_file, save_to_file_async};
pub use types::{BmpConfig, BmpConfigBuilder};
