pub mod dimensions;
pub mod encoder;
pub mod image_rs_processor;
pub mod processor;
pub mod transform;
