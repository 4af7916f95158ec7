pub mod gallery;
pub mod upload;
