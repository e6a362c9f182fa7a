pub mod framework;
pub mod manifest;
pub mod project;
pub mod types;
