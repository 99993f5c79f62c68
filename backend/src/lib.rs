pub mod app;
pub mod error;
pub mod math;
pub mod system;
