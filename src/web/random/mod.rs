pub mod handler;
pub mod service;

pub use handler::{random_image_handler, root_redirect_handler};
pub use service::RandomImageService;
