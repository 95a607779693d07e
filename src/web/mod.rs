pub mod cors;
pub mod error;
pub mod fallback;
pub mod random;
pub mod router;
