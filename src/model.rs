pub mod view;
pub mod wire;
