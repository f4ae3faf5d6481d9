//! Page state

pub mod landing;
