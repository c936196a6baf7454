pub mod pixel_matrix;
pub mod logger;
