pub mod app;
pub mod clock;
pub mod config;
pub mod glow;
pub mod paths;
pub mod screen;
pub mod ticker;
