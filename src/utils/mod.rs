pub mod platform;
pub mod runner;
pub mod sanitize;
