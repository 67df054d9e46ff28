pub mod controllers;
pub mod extractors;
pub mod resources;
