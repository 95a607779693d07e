pub mod extension;
pub mod image_catalog;
pub mod random;
