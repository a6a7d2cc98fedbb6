pub mod form;
pub mod overlay;
pub mod place;
pub mod route;
pub mod view;
