pub mod app;
pub mod component;
pub mod service;
