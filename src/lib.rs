pub mod api;
pub mod compat;
pub mod config;
pub mod fixtures;
pub mod model;
pub mod store;
pub mod text;
pub mod wordpress;
