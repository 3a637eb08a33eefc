pub mod grid;
pub mod landing;
pub mod month;
pub mod validation;
