pub mod app;
pub mod catalog;
pub mod env;
pub mod image;
pub mod web;
